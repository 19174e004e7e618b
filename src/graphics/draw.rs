use super::{draw_raw, Argb, Canvas, P2};
use crate::math::Vec2;

impl Canvas {
    pub fn draw_line(&mut self, ps: P2, pe: P2, c: Argb) {
        draw_raw::draw_line_by(&mut self.buffer, self.width, self.height, ps, pe, c, self.mixer);
    }

    pub fn draw_disc(&mut self, center: Vec2<f32>, radius: f32, c: Argb) {
        draw_raw::draw_disc_by(
            &mut self.buffer,
            self.width,
            self.height,
            (center.x, center.y),
            radius,
            c,
            self.mixer,
        );
    }
}
