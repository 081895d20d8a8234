use crate::{render::request::RenderRequest, strokes::model::Stroke};

/// Rule-of-thirds grid: two verticals then two horizontals, each spanning the full canvas.
pub fn thirds_grid() -> Vec<Stroke> {
    let (a, b) = (1.0 / 3.0, 2.0 / 3.0);
    vec![
        Stroke::line(a, 0.0, a, 1.0, ""),
        Stroke::line(b, 0.0, b, 1.0, ""),
        Stroke::line(0.0, a, 1.0, a, ""),
        Stroke::line(0.0, b, 1.0, b, ""),
    ]
}

/// The two compositional guides drawn when the caller sends no strokes.
pub fn default_guides() -> Vec<Stroke> {
    vec![
        Stroke::line(0.06, 0.82, 0.94, 0.82, "lower horizon"),
        Stroke::line(0.18, 0.96, 0.78, 0.56, "leading diagonal"),
    ]
}

/// Ordered strokes to draw for a request. Later strokes paint over earlier ones.
///
/// Caller strokes win outright (`show_thirds` is ignored then). Otherwise the grid (if
/// requested) is followed by [`default_guides`].
pub fn build_strokes(request: &RenderRequest) -> Vec<Stroke> {
    if !request.strokes.is_empty() {
        return request.strokes.clone();
    }
    let mut out = if request.show_thirds() {
        thirds_grid()
    } else {
        Vec::new()
    };
    out.extend(default_guides());
    out
}

#[cfg(test)]
#[path = "../../tests/unit/strokes/builder.rs"]
mod tests;
