//! Geometry primitives
//!
//! Everything here is expressed in terms of single-pixel writes, so any
//! [`Canvas`] gets lines, circles, rectangles and triangle fills for free.
//! Implementors with a faster path (the driver's RAM bursts) override
//! [`Canvas::fill_rect`] and [`Canvas::clear`].

use crate::color::Color;

/// Points of a Bresenham line, endpoints included
///
/// Steps one pixel along the major axis at a time. The minor axis advances
/// once the accumulated error passes half a pixel; an error of exactly half
/// stays on the side of the start point.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    step_x: i32,
    step_y: i32,
    major: i32,
    minor: i32,
    x_major: bool,
    error: i32,
    remaining: usize,
}

impl LinePoints {
    pub fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        let dx = i32::from(x1) - i32::from(x0);
        let dy = i32::from(y1) - i32::from(y0);
        let x_major = dx.abs() >= dy.abs();
        let (major, minor) = if x_major {
            (dx.abs(), dy.abs())
        } else {
            (dy.abs(), dx.abs())
        };

        Self {
            x: x0.into(),
            y: y0.into(),
            step_x: dx.signum(),
            step_y: dy.signum(),
            major,
            minor,
            x_major,
            error: 0,
            remaining: major as usize + 1,
        }
    }
}

impl Iterator for LinePoints {
    type Item = (u16, u16);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // Always inside the endpoints' bounding box
        let point = (self.x as u16, self.y as u16);

        if self.remaining > 0 {
            self.error += self.minor;
            let minor_step = 2 * self.error > self.major;
            if minor_step {
                self.error -= self.major;
            }

            if self.x_major {
                self.x += self.step_x;
                if minor_step {
                    self.y += self.step_y;
                }
            } else {
                self.y += self.step_y;
                if minor_step {
                    self.x += self.step_x;
                }
            }
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LinePoints {}

/// Something pixels can be drawn on
///
/// Coordinates are logical panel coordinates; primitives do not clip.
pub trait Canvas {
    /// Set a single pixel
    fn draw_pixel(&mut self, x: u16, y: u16, color: Color);

    /// Logical (width, height)
    fn dimensions(&self) -> (u16, u16);

    /// Draw a line between two points, both included
    fn draw_line(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, color: Color) {
        for (x, y) in LinePoints::new(x0, y0, x1, y1) {
            self.draw_pixel(x, y, color);
        }
    }

    /// Draw `len` pixels to the right of `(x, y)`
    fn draw_hline(&mut self, x: u16, y: u16, len: u16, color: Color) {
        if len > 0 {
            self.draw_line(x, y, x.saturating_add(len - 1), y, color);
        }
    }

    /// Draw `len` pixels downwards from `(x, y)`
    fn draw_vline(&mut self, x: u16, y: u16, len: u16, color: Color) {
        if len > 0 {
            self.draw_line(x, y, x, y.saturating_add(len - 1), color);
        }
    }

    /// Draw the outline of a `w` x `h` rectangle
    fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) {
        if w == 0 || h == 0 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.draw_hline(x, y, w, color);
        self.draw_hline(x, bottom, w, color);
        self.draw_vline(x, y, h, color);
        self.draw_vline(right, y, h, color);
    }

    /// Draw a circle outline with the midpoint algorithm
    ///
    /// Parts falling outside the coordinate range are skipped.
    fn draw_circle(&mut self, x0: u16, y0: u16, r: u16, color: Color) {
        let (cx, cy) = (i32::from(x0), i32::from(y0));
        let mut x = 0i32;
        let mut y = i32::from(r);
        let mut d = 3 - 2 * i32::from(r);

        while x <= y {
            for (px, py) in [
                (cx + x, cy - y),
                (cx + y, cy - x),
                (cx + y, cy + x),
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx - y, cy + x),
                (cx - x, cy - y),
                (cx - y, cy - x),
            ] {
                if let (Ok(px), Ok(py)) = (u16::try_from(px), u16::try_from(py)) {
                    self.draw_pixel(px, py, color);
                }
            }

            if d < 0 {
                d += 4 * x + 6;
            } else {
                d += 4 * (x - y) + 10;
                y -= 1;
            }
            x += 1;
        }
    }

    /// Fill a triangle by sweeping lines from edge `p1`-`p2` to `p3`
    fn fill_triangle(&mut self, p1: (u16, u16), p2: (u16, u16), p3: (u16, u16), color: Color) {
        for (x, y) in LinePoints::new(p1.0, p1.1, p2.0, p2.1) {
            self.draw_line(x, y, p3.0, p3.1, color);
        }
    }

    /// Fill a `w` x `h` rectangle
    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) {
        for row in y..y.saturating_add(h) {
            self.draw_hline(x, row, w, color);
        }
    }

    /// Fill the whole canvas
    fn clear(&mut self, color: Color) {
        let (w, h) = self.dimensions();
        self.fill_rect(0, 0, w, h, color);
    }
}
