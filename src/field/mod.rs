//! The particle field: a fixed population of drifting, shrinking points
//! joined by faint lines when they come close to each other.


use std::ops::Range;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    graphics::{DrawSurface, Hsla},
    math::{interpolate, Vec2},
};

/// Tunables of a field. `Default` gives the portfolio background look.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldParams {
    pub count: usize,
    pub size_range: Range<f32>,
    /// Maximum absolute velocity per axis, in pixels per frame.
    pub speed: f32,
    pub decay: f32,
    /// Particles at or below this size respawn.
    pub floor: f32,

    pub hue_range: Range<f32>,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,

    pub link_distance: f32,
    /// Line alpha at zero distance.
    pub link_alpha: f32,
    pub link_hue: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: 80,
            size_range: 1.0..4.0,
            speed: 1.0,
            decay: 0.01,
            floor: 0.2,

            hue_range: 200.0..260.0,
            saturation: 0.7,
            lightness: 0.6,
            alpha: 0.6,

            link_distance: 150.0,
            link_alpha: 0.3,
            link_hue: 210.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2<f32>,
    pub size: f32,
    pub velocity: Vec2<f32>,
    pub color: Hsla,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    params: FieldParams,
    rng: StdRng,
}

impl ParticleField {
    /// Populates exactly `params.count` particles inside `[0, width) x [0, height)`.
    pub fn initialize(width: f32, height: f32, params: FieldParams, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(params.count),
            width,
            height,
            params,
            rng,
        };

        for _ in 0..field.params.count {
            let particle = field.spawn();
            field.particles.push(particle);
        }

        log::debug!(
            "particle field initialized: {} particles in {}x{}",
            field.particles.len(),
            width,
            height
        );

        field
    }

    pub fn with_seed(width: f32, height: f32, params: FieldParams, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        Self::initialize(width, height, params, rng)
    }

    fn spawn(&mut self) -> Particle {
        let speed = self.params.speed;
        let velocity = Vec2::<f32>::new(
            self.rng.gen_range(-speed..=speed),
            self.rng.gen_range(-speed..=speed),
        );

        let hue = self.sample(self.params.hue_range.clone());
        let color = Hsla::new(hue, self.params.saturation, self.params.lightness, self.params.alpha);

        let mut particle = Particle {
            position: Vec2::<f32>::zero(),
            size: 0.0,
            velocity,
            color,
        };

        self.respawn(&mut particle);
        particle
    }

    /// New position within the current bounds and a new size. Velocity and
    /// colour stay.
    fn respawn(&mut self, particle: &mut Particle) {
        particle.position = Vec2::<f32>::new(self.sample(0.0..self.width), self.sample(0.0..self.height));
        particle.size = self.sample(self.params.size_range.clone());
    }

    /// Uniform sample from `range`, or its start when the range is empty
    /// (a zero sized viewport).
    fn sample(&mut self, range: Range<f32>) -> f32 {
        if range.is_empty() {
            return range.start;
        }

        self.rng.gen_range(range)
    }

    /// Advances every particle by one frame.
    pub fn step(&mut self) {
        let mut particles = std::mem::take(&mut self.particles);

        for particle in particles.iter_mut() {
            particle.position += particle.velocity;

            if particle.size > self.params.floor {
                particle.size -= self.params.decay;
            }

            let escaped = !particle.position.is_within(self.width, self.height);

            if escaped || particle.size <= self.params.floor {
                self.respawn(particle);
            }
        }

        self.particles = particles;
    }

    /// Clears `surface`, then draws every particle followed by the links
    /// between particles closer than `link_distance`.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();

        for particle in &self.particles {
            surface.fill_circle(particle.position, particle.size, particle.color);
        }

        let max = self.params.link_distance;
        let link = Hsla::new(self.params.link_hue, 0.7, 0.6, 0.0);

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);

                if distance >= max {
                    continue;
                }

                let alpha = interpolate(self.params.link_alpha, 0.0, distance / max);
                surface.line(a.position, b.position, link.with_alpha(alpha));
            }
        }
    }

    /// Stores the new bounds. Particles are left where they are and the
    /// ones now outside respawn on their next `step`.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
