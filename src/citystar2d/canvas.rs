use glam::DVec2;

/// A 2D drawing surface the renderer can draw onto.
///
/// Coordinates are in surface units with the origin at the top left and y
/// increasing downward.
pub trait Canvas {
    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Draw a filled circle
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str);

    /// Draw text with its baseline starting at `pos`
    fn fill_text(&mut self, pos: DVec2, text: &str, color: &str, font_size: f64);

    /// Stroke a line through `points`. A closed polyline also joins the last
    /// point back to the first.
    fn stroke_polyline(&mut self, points: &[DVec2], closed: bool, color: &str, line_width: f64);
}

/// A single call made on a [`RecordingCanvas`]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: DVec2,
        radius: f64,
        color: String,
    },
    Text {
        pos: DVec2,
        text: String,
        color: String,
    },
    Polyline {
        points: Vec<DVec2>,
        closed: bool,
        color: String,
    },
}

/// A canvas that remembers what was drawn on it instead of drawing
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// The points of every polyline stroked since the last clear
    pub fn polylines(&self) -> impl Iterator<Item = (&[DVec2], bool)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, closed, .. } => Some((points.as_slice(), *closed)),
            _ => None,
        })
    }

    /// The text of every label drawn since the last clear
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str) {
        self.commands.push(DrawCommand::Circle { center, radius, color: color.to_string() });
    }

    fn fill_text(&mut self, pos: DVec2, text: &str, color: &str, _font_size: f64) {
        self.commands.push(DrawCommand::Text { pos, text: text.to_string(), color: color.to_string() });
    }

    fn stroke_polyline(&mut self, points: &[DVec2], closed: bool, color: &str, _line_width: f64) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            closed,
            color: color.to_string(),
        });
    }
}
