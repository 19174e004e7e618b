use std::time::{Duration, Instant};

/// Linear opacity ramp of the whole background layer, started at mount.
pub struct FadeIn {
    start: Instant,
    duration: Duration,
    target: f32,
}

impl FadeIn {
    pub fn new(duration: Duration, target: f32) -> Self {
        Self {
            start: Instant::now(),
            duration,
            target,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity_after(self.start.elapsed())
    }

    pub fn opacity_after(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.target;
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.target * t.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::FadeIn;
    use std::time::Duration;

    #[test]
    fn ramps_to_target() {
        let fade = FadeIn::new(Duration::from_secs(1), 0.3);

        assert_eq!(fade.opacity_after(Duration::ZERO), 0.0);
        assert!((fade.opacity_after(Duration::from_millis(500)) - 0.15).abs() < 1e-6);
        assert_eq!(fade.opacity_after(Duration::from_secs(1)), 0.3);
        assert_eq!(fade.opacity_after(Duration::from_secs(30)), 0.3);
    }

    #[test]
    fn monotone() {
        let fade = FadeIn::new(Duration::from_secs(1), 0.3);
        let mut last = 0.0;

        for ms in (0..1200).step_by(50) {
            let o = fade.opacity_after(Duration::from_millis(ms));
            assert!(o >= last);
            last = o;
        }
    }

    #[test]
    fn disabled_fade_starts_at_target() {
        let fade = FadeIn::new(Duration::ZERO, 0.3);
        assert_eq!(fade.opacity(), 0.3);
        assert_eq!(fade.opacity_after(Duration::ZERO), 0.3);
    }
}
