use crate::citystar::Tour;
use crate::citystar2d::{Canvas, City2D, RenderConfig};

use glam::DVec2;
use tracing::debug;

/// Draw every city and the closed loop through them in the order they were added.
///
/// The canvas is cleared first. An empty list only clears it.
pub fn render<C: Canvas + ?Sized>(canvas: &mut C, cities: &[City2D], config: &RenderConfig) {
    let order: Vec<usize> = (0..cities.len()).collect();
    draw(canvas, cities, &order, config);
}

/// Like [`render`], but the loop follows `tour` instead of insertion order
pub fn render_tour<C: Canvas + ?Sized>(
    canvas: &mut C,
    cities: &[City2D],
    tour: &Tour,
    config: &RenderConfig,
) {
    draw(canvas, cities, &tour.order, config);
}

fn draw<C: Canvas + ?Sized>(canvas: &mut C, cities: &[City2D], order: &[usize], config: &RenderConfig) {
    canvas.clear();

    for city in cities {
        let pos = city.pos * config.scale;
        canvas.fill_circle(pos, config.marker_radius, &config.marker_color);
        canvas.fill_text(pos + config.label_offset, &city.name, &config.marker_color, config.font_size);
    }

    if order.is_empty() {
        return;
    }

    // Indices past the end of `cities` are skipped
    let path: Vec<DVec2> = order
        .iter()
        .filter_map(|&i| cities.get(i))
        .map(|c| c.pos * config.scale)
        .collect();
    canvas.stroke_polyline(&path, true, &config.path_color, config.line_width);
    debug!(cities = cities.len(), "rendered tour");
}
