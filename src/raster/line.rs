use crate::{
    canvas::buffer::CanvasBuffer,
    foundation::core::Rgba8,
    raster::coords::{PixelLine, PixelPoint},
};

/// Stroke thickness for a canvas of `width` pixels.
///
/// `max(min_thickness, round(width * ratio))`, so line weight follows the output resolution.
pub fn line_thickness(width: u32, min_thickness: u32, ratio: f64) -> u32 {
    let scaled = (f64::from(width) * ratio).round();
    let scaled = if scaled.is_finite() && scaled > 0.0 {
        scaled.min(f64::from(u32::MAX)) as u32
    } else {
        0
    };
    scaled.max(min_thickness)
}

/// Brush radius for a thickness: `floor(thickness / 2)`.
pub fn half_thickness(thickness: u32) -> u32 {
    thickness / 2
}

/// Stamp a filled `(2h+1)²` square centered on `center`.
fn stamp(canvas: &mut CanvasBuffer, center: PixelPoint, half: i64, color: Rgba8) {
    for oy in -half..=half {
        for ox in -half..=half {
            canvas.set_pixel(center.x + ox, center.y + oy, color);
        }
    }
}

/// Bresenham walk over a [`PixelLine`], yielding every visited point, endpoints inclusive.
///
/// `dx = |x2-x1|`, `dy = -|y2-y1|`, `err = dx + dy`; a zero delta steps in the `+1` direction.
/// On each step `e2 = 2*err` moves x when `e2 >= dy` and y when `e2 <= dx`, both on a diagonal.
#[derive(Clone, Debug)]
pub struct LineSteps {
    from: PixelPoint,
    cur: PixelPoint,
    end: PixelPoint,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    bounds: Option<(PixelPoint, PixelPoint)>,
    done: bool,
}

impl LineSteps {
    /// Start a walk at `line.from`.
    pub fn new(line: PixelLine) -> Self {
        let dx = (line.to.x - line.from.x).abs();
        let dy = -(line.to.y - line.from.y).abs();
        Self {
            from: line.from,
            cur: line.from,
            end: line.to,
            dx,
            dy,
            sx: if line.to.x >= line.from.x { 1 } else { -1 },
            sy: if line.to.y >= line.from.y { 1 } else { -1 },
            err: dx + dy,
            bounds: None,
            done: false,
        }
    }

    /// Walk only the points of `line` inside the inclusive box `min..=max`.
    ///
    /// Yields exactly the points [`LineSteps::new`] would, filtered to the box and in the same
    /// order. The walk jumps along the major axis to just before the box and ends once it has
    /// left the box for good, so its length is bounded by the box rather than by the line.
    pub fn within(line: PixelLine, min: PixelPoint, max: PixelPoint) -> Self {
        let mut steps = Self::new(line);
        steps.bounds = Some((min, max));
        let skip = steps.steps_before(min, max);
        steps.seek(skip);
        steps
    }

    fn x_major(&self) -> bool {
        self.dx >= -self.dy
    }

    // Major-axis steps that all land strictly before the box.
    fn steps_before(&self, min: PixelPoint, max: PixelPoint) -> i64 {
        let (pos, dir, lo, hi, len) = if self.x_major() {
            (self.from.x, self.sx, min.x, max.x, self.dx)
        } else {
            (self.from.y, self.sy, min.y, max.y, -self.dy)
        };
        let gap = if dir > 0 { lo - pos } else { pos - hi };
        (gap - 1).clamp(0, len)
    }

    // Jump to the point visited after `n` major-axis steps. Along the major axis every
    // iteration moves, and the minor count after `n` of them is
    // `floor((2*n*minor + major) / (2*major))`.
    fn seek(&mut self, n: i64) {
        if n == 0 {
            return;
        }
        let a = i128::from(self.dx);
        let b = i128::from(-self.dy);
        let n = i128::from(n);
        let (i, j) = if self.x_major() {
            (n, (2 * n * b + a) / (2 * a))
        } else {
            ((2 * n * a + b) / (2 * b), n)
        };
        self.cur = PixelPoint::new(
            self.from.x + self.sx * i as i64,
            self.from.y + self.sy * j as i64,
        );
        self.err = (a * (1 + j) - b * (1 + i)) as i64;
    }

    // Each axis only ever moves one way, so past the box on that side means never back.
    fn leaving(&self, p: PixelPoint, min: PixelPoint, max: PixelPoint) -> bool {
        (self.sx > 0 && p.x > max.x)
            || (self.sx < 0 && p.x < min.x)
            || (self.sy > 0 && p.y > max.y)
            || (self.sy < 0 && p.y < min.y)
    }

    fn advance(&mut self) {
        if self.cur == self.end {
            self.done = true;
            return;
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.cur.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }
    }
}

impl Iterator for LineSteps {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<PixelPoint> {
        while !self.done {
            let visited = self.cur;
            let Some((min, max)) = self.bounds else {
                self.advance();
                return Some(visited);
            };
            if self.leaving(visited, min, max) {
                self.done = true;
                return None;
            }
            self.advance();
            if (min.x..=max.x).contains(&visited.x) && (min.y..=max.y).contains(&visited.y) {
                return Some(visited);
            }
        }
        None
    }
}

/// Rasterize a segment into `canvas`.
///
/// A square brush of radius `half_thickness` is stamped at every point of [`LineSteps`], which
/// gives square caps and joins. A zero-length segment is a single stamp. Only the part of the
/// walk whose brush can reach the canvas is visited; pixels still falling outside are clipped by
/// [`CanvasBuffer::set_pixel`].
pub fn draw_line(canvas: &mut CanvasBuffer, line: PixelLine, half_thickness: u32, color: Rgba8) {
    let half = i64::from(half_thickness);
    let min = PixelPoint::new(-half, -half);
    let max = PixelPoint::new(
        i64::from(canvas.width()) - 1 + half,
        i64::from(canvas.height()) - 1 + half,
    );
    for center in LineSteps::within(line, min, max) {
        stamp(canvas, center, half, color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/line.rs"]
mod tests;
