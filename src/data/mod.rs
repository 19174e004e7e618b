pub mod config;
pub mod fade;
pub mod logger;

use std::time::Duration;

use crate::{
    field::ParticleField,
    graphics::{blend::Argb, Canvas},
};

use config::Config;
use fade::FadeIn;

pub const DEFAULT_MILLI_HZ: u32 = 60 * 1000;
pub const CAP_MILLI_HZ: u32 = 240 * 1000;

pub const FADE_DURATION: Duration = Duration::from_secs(1);
pub const LAYER_OPACITY: f32 = 0.3;

/// Converts a refresh rate to the frame interval the ticker runs at.
pub fn frame_interval(milli_hz: u32) -> Duration {
    let milli_hz = milli_hz.clamp(1, CAP_MILLI_HZ);
    Duration::from_micros(1_000_000_000 / milli_hz as u64)
}

/// The mounted background: canvas, particle field and layer fade.
pub struct Background {
    pub pix: Canvas,
    field: ParticleField,
    fade: FadeIn,
    background: Argb,
}

impl Background {
    /// `None` when there is nothing to draw on. The caller then shows a
    /// blank surface and starts no frame loop.
    pub fn mount(width: usize, height: usize, config: &Config) -> Option<Self> {
        if width == 0 || height == 0 {
            log::warn!("no drawable surface ({width}x{height}), particle field not started");
            return None;
        }

        let field = ParticleField::with_seed(
            width as f32,
            height as f32,
            config.field_params(),
            config.seed,
        );

        let fade = if config.no_fade {
            FadeIn::new(Duration::ZERO, LAYER_OPACITY)
        } else {
            FadeIn::new(FADE_DURATION, LAYER_OPACITY)
        };

        log::info!(
            "mounted {} particles on a {}x{} surface",
            field.particles().len(),
            width,
            height
        );

        Some(Self {
            pix: Canvas::new(width, height),
            field,
            fade,
            background: config.background,
        })
    }

    /// One frame: advance, then draw.
    pub fn render(&mut self) {
        self.field.step();
        self.field.draw(&mut self.pix);
    }

    /// Ignores zero sizes, which minimised windows report.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == 0 || height == 0 {
            return;
        }

        if (width, height) == (self.pix.width(), self.pix.height()) {
            return;
        }

        log::debug!("resize to {width}x{height}");

        self.pix.resize(width, height);
        self.field.resize(width as f32, height as f32);
    }

    pub fn layer_opacity(&self) -> f32 {
        self.fade.opacity()
    }

    #[cfg(test)]
    pub fn background(&self) -> Argb {
        self.background
    }

    /// Flattens the current frame onto `dest`.
    pub fn present_to(&self, dest: &mut [Argb], dest_width: usize) {
        self.pix
            .present_to(dest, dest_width, self.background, self.layer_opacity());
    }

    #[cfg(test)]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn dispose(self) {
        log::info!("particle field unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            particles: 10,
            seed: Some(3),
            no_fade: true,
            ..Config::default()
        }
    }

    #[test]
    fn no_surface_no_field() {
        assert!(Background::mount(0, 600, &config()).is_none());
        assert!(Background::mount(800, 0, &config()).is_none());
    }

    #[test]
    fn render_draws_onto_canvas() {
        let mut bg = Background::mount(64, 48, &config()).unwrap();
        bg.render();

        assert_eq!(bg.field().particles().len(), 10);
        assert!(bg.pix.as_slice().iter().any(|&p| p != 0));
    }

    #[test]
    fn resize_updates_canvas_and_bounds() {
        let mut bg = Background::mount(64, 48, &config()).unwrap();

        bg.resize(0, 0);
        assert_eq!(bg.field().bounds(), (64.0, 48.0));

        bg.resize(20, 10);
        assert_eq!((bg.pix.width(), bg.pix.height()), (20, 10));
        assert_eq!(bg.field().bounds(), (20.0, 10.0));

        bg.render();
        for p in bg.field().particles() {
            assert!(p.position.is_within(20.0, 10.0));
        }
    }

    #[test]
    fn presents_over_background() {
        let mut bg = Background::mount(16, 16, &config()).unwrap();
        bg.render();

        let mut dest = vec![0u32; 16 * 16];
        bg.present_to(&mut dest, 16);
        assert!(dest.iter().all(|&p| p >> 24 == 0xFF));

        let empty = Config {
            particles: 0,
            ..config()
        };
        let mut bg = Background::mount(16, 16, &empty).unwrap();
        bg.render();
        bg.present_to(&mut dest, 16);
        assert!(dest.iter().all(|&p| p == bg.background()));
    }

    #[test]
    fn fade_starts_transparent() {
        let config = Config {
            no_fade: false,
            ..config()
        };
        let bg = Background::mount(16, 16, &config).unwrap();
        assert!(bg.layer_opacity() < LAYER_OPACITY);
    }

    #[test]
    fn intervals() {
        assert_eq!(frame_interval(60_000), Duration::from_micros(16_666));
        assert_eq!(frame_interval(1_000_000), frame_interval(CAP_MILLI_HZ));
        assert_eq!(frame_interval(0), Duration::from_secs(1000));
    }
}
