//! Backdrop renderer
//!
//! Paints the solid color or the gradient behind the picker UI.

use egui::{Color32, Mesh, Painter, Pos2, Rect, Shape};
use tracing::warn;

use crate::config::LinearGradient;
use crate::engine::Backdrop;
use crate::utils::color::{parse_hex_color, Rgb};

/// Grid subdivisions per axis for gradient meshes
const GRADIENT_STEPS: u32 = 24;

/// Convert RGB tuple to an egui color
pub fn rgb_to_color32((r, g, b): Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Parse hex color string to an egui color, black when malformed
pub fn hex_to_color32(hex: &str) -> Color32 {
    parse_hex_color(hex).map(rgb_to_color32).unwrap_or(Color32::BLACK)
}

/// Position of `pos` along the CSS gradient line of `rect`, 0..=1
fn gradient_position(rect: Rect, direction: (f32, f32), pos: Pos2) -> f32 {
    let (dx, dy) = direction;
    // CSS gradient line length: the corners sit exactly at 0 and 1
    let length = (rect.width() * dx).abs() + (rect.height() * dy).abs();
    if length <= f32::EPSILON {
        return 0.0;
    }

    let offset = pos - rect.center();
    (offset.x * dx + offset.y * dy) / length + 0.5
}

/// Build a vertex-colored grid mesh covering `rect`
pub fn gradient_mesh(rect: Rect, gradient: &LinearGradient) -> Mesh {
    let direction = gradient.direction();
    let mut mesh = Mesh::default();
    let row = GRADIENT_STEPS + 1;

    for j in 0..=GRADIENT_STEPS {
        let y = rect.min.y + rect.height() * j as f32 / GRADIENT_STEPS as f32;
        for i in 0..=GRADIENT_STEPS {
            let x = rect.min.x + rect.width() * i as f32 / GRADIENT_STEPS as f32;
            let pos = Pos2::new(x, y);
            let t = gradient_position(rect, direction, pos);
            mesh.colored_vertex(pos, rgb_to_color32(gradient.sample(t)));
        }
    }

    for j in 0..GRADIENT_STEPS {
        for i in 0..GRADIENT_STEPS {
            let top_left = j * row + i;
            let top_right = top_left + 1;
            let bottom_left = top_left + row;
            let bottom_right = bottom_left + 1;
            mesh.add_triangle(top_left, top_right, bottom_left);
            mesh.add_triangle(top_right, bottom_right, bottom_left);
        }
    }

    mesh
}

/// Paints the current backdrop, caching the parsed gradient
#[derive(Default)]
pub struct BackdropRenderer {
    /// Last gradient description and its parse result
    cached: Option<(String, Option<LinearGradient>)>,
}

impl BackdropRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn gradient_for(&mut self, css: &str) -> Option<&LinearGradient> {
        let stale = !matches!(&self.cached, Some((cached, _)) if cached == css);
        if stale {
            let parsed = match LinearGradient::parse(css) {
                Ok(gradient) => Some(gradient),
                Err(e) => {
                    warn!("Cannot paint gradient {:?}: {}", css, e);
                    None
                }
            };
            self.cached = Some((css.to_string(), parsed));
        }

        self.cached.as_ref().and_then(|(_, parsed)| parsed.as_ref())
    }

    /// Fill `rect` with the backdrop
    pub fn paint(&mut self, painter: &Painter, rect: Rect, backdrop: Backdrop<'_>) {
        match backdrop {
            Backdrop::Solid(hex) => {
                painter.rect_filled(rect, 0.0, hex_to_color32(hex));
            }
            Backdrop::Gradient(css) => match self.gradient_for(css) {
                Some(gradient) => {
                    painter.add(Shape::mesh(gradient_mesh(rect, gradient)));
                }
                None => {
                    painter.rect_filled(rect, 0.0, Color32::BLACK);
                }
            },
        }
    }
}
