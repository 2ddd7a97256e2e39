//! A [`Canvas`] that builds an SVG document.
//!
//! Each drawing call becomes one element. [`SvgCanvas::to_svg`] wraps them in
//! an `<svg>` root sized to the canvas.

use crate::citystar2d::Canvas;

use glam::DVec2;
use std::fmt::Write;
use std::path::Path;

#[derive(Clone, Debug)]
pub struct SvgCanvas {
    pub width: u32,
    pub height: u32,
    elements: Vec<String>,
}

/// Escape the five XML special characters. `&` must go first.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

fn points_attr(points: &[DVec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, elements: Vec::new() }
    }

    /// Number of elements drawn since the last clear
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        );
        for element in &self.elements {
            let _ = writeln!(out, "  {element}");
        }
        let _ = writeln!(out, "</svg>");
        out
    }

    /// Write the document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, self.to_svg())
    }
}

impl Canvas for SvgCanvas {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            center.x,
            center.y,
            radius,
            xml_escape(color),
        ));
    }

    fn fill_text(&mut self, pos: DVec2, text: &str, color: &str, font_size: f64) {
        self.elements.push(format!(
            r#"<text x="{}" y="{}" font-size="{}" fill="{}">{}</text>"#,
            pos.x,
            pos.y,
            font_size,
            xml_escape(color),
            xml_escape(text),
        ));
    }

    fn stroke_polyline(&mut self, points: &[DVec2], closed: bool, color: &str, line_width: f64) {
        let tag = if closed { "polygon" } else { "polyline" };
        self.elements.push(format!(
            r#"<{tag} points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            points_attr(points),
            xml_escape(color),
            line_width,
        ));
    }
}
