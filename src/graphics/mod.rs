pub mod blend;
pub mod color;
pub mod draw;
pub mod draw_raw;

use blend::{Argb, Mixer};
pub use color::Hsla;

use crate::math::{Vec2, P2};

pub const COLOR_BLANK: Argb = 0x00_00_00_00;
pub const COLOR_BLACK: Argb = 0xFF_00_00_00;
pub const COLOR_WHITE: Argb = 0xFF_FF_FF_FF;

pub(crate) trait Pixel: Copy + Clone + Sized + std::fmt::Debug {
    fn mix(self, other: Self) -> Self;

    fn set_alpha(self, alpha: u8) -> Self;

    fn alpha(self) -> u8;

    fn fade(self, alpha: u8) -> Self;
    fn decompose(self) -> [u8; 4];
    fn compose(array: [u8; 4]) -> Self;
}

/// The drawing API a particle field renders through. Coordinates are in
/// pixels, with the origin at the top left.
pub trait DrawSurface {
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2<f32>, radius: f32, color: Hsla);
    fn line(&mut self, from: Vec2<f32>, to: Vec2<f32>, color: Hsla);
}

/// Software ARGB framebuffer. Starts transparent; `present_to` flattens it
/// over an opaque background.
pub struct Canvas {
    buffer: Vec<Argb>,
    width: usize,
    height: usize,

    mixer: Mixer,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            buffer: vec![COLOR_BLANK; w * h],
            width: w,
            height: h,

            mixer: u32::mix,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.buffer.fill(COLOR_BLANK);
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.buffer.clear();
        self.buffer.resize(w * h, COLOR_BLANK);
        self.width = w;
        self.height = h;
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[Argb] {
        &self.buffer
    }

    /// Composites the canvas, faded to `opacity`, over `background` into
    /// `dest`. `dest_width` may exceed the canvas width when the platform
    /// hands out a wider buffer; extra columns and rows get the background.
    pub fn present_to(&self, dest: &mut [Argb], dest_width: usize, background: Argb, opacity: f32) {
        if dest_width == 0 {
            return;
        }

        let layer_alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;

        dest.fill(background);

        self.buffer
            .chunks_exact(self.width.max(1)) // source lines
            .zip(dest.chunks_mut(dest_width)) // with destination lines
            .flat_map(|(src_row, dst_row)| src_row.iter().zip(dst_row.iter_mut()))
            .filter(|(src_pixel, _)| src_pixel.alpha() != 0)
            .for_each(|(src_pixel, dst_pixel)| {
                *dst_pixel = background.mix(src_pixel.fade(layer_alpha))
            });
    }
}

impl DrawSurface for Canvas {
    fn clear(&mut self) {
        Canvas::clear(self);
    }

    fn fill_circle(&mut self, center: Vec2<f32>, radius: f32, color: Hsla) {
        self.draw_disc(center, radius, color.to_argb());
    }

    fn line(&mut self, from: Vec2<f32>, to: Vec2<f32>, color: Hsla) {
        self.draw_line(from.to_p2(), to.to_p2(), color.to_argb());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_reallocates_and_clears() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_line(P2 { x: 0, y: 0 }, P2 { x: 3, y: 0 }, COLOR_WHITE);
        canvas.resize(2, 3);
        assert_eq!(canvas.as_slice().len(), 6);
        assert_eq!((canvas.width(), canvas.height()), (2, 3));
        assert!(canvas.as_slice().iter().all(|&p| p == COLOR_BLANK));
    }

    #[test]
    fn clear_through_surface_trait() {
        let mut canvas = Canvas::new(3, 3);
        DrawSurface::fill_circle(&mut canvas, Vec2::<f32>::new(1.0, 1.0), 1.0, Hsla::new(0.0, 1.0, 0.5, 1.0));
        assert!(canvas.as_slice().iter().any(|&p| p != 0));
        DrawSurface::clear(&mut canvas);
        assert!(canvas.as_slice().iter().all(|&p| p == 0));
    }

    #[test]
    fn translucent_lines_accumulate() {
        let mut canvas = Canvas::new(4, 1);
        let color = Hsla::new(0.0, 0.0, 1.0, 0.3);
        DrawSurface::line(&mut canvas, Vec2::<f32>::new(0.0, 0.0), Vec2::<f32>::new(3.0, 0.0), color);
        let once = canvas.as_slice()[0].alpha();
        DrawSurface::line(&mut canvas, Vec2::<f32>::new(0.0, 0.0), Vec2::<f32>::new(3.0, 0.0), color);
        assert!(canvas.as_slice()[0].alpha() > once);
    }

    #[test]
    fn present_fades_layer_over_background() {
        let mut canvas = Canvas::new(2, 1);
        canvas.draw_line(P2 { x: 0, y: 0 }, P2 { x: 0, y: 0 }, COLOR_WHITE);

        let mut dest = vec![0u32; 2];
        canvas.present_to(&mut dest, 2, COLOR_BLACK, 0.0);
        assert_eq!(dest, vec![COLOR_BLACK; 2]);

        canvas.present_to(&mut dest, 2, COLOR_BLACK, 1.0);
        assert_eq!(dest[0], COLOR_WHITE);
        assert_eq!(dest[1], COLOR_BLACK);
    }

    #[test]
    fn present_into_wider_destination() {
        let mut canvas = Canvas::new(2, 2);
        canvas.draw_line(P2 { x: 1, y: 1 }, P2 { x: 1, y: 1 }, COLOR_WHITE);

        let mut dest = vec![0u32; 3 * 2];
        canvas.present_to(&mut dest, 3, COLOR_BLACK, 1.0);
        assert_eq!(dest[3 + 1], COLOR_WHITE);
        assert_eq!(dest[2], COLOR_BLACK);
        assert_eq!(dest[5], COLOR_BLACK);
    }
}
