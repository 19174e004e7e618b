mod vec2;

/// Two-component vector. `Vec2<f32>` carries particle positions and
/// velocities, `Vec2<i32>` (aliased as `P2`) carries pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

pub type P2 = Vec2<i32>;

/// Linear interpolation between `a` and `b`.
pub fn interpolate(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
