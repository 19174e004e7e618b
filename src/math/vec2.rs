use std::ops::*;

use super::Vec2;

impl<T> AddAssign for Vec2<T>
where
    T: AddAssign + Copy,
{
    fn add_assign(&mut self, other: Vec2<T>) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl<T> Sub for Vec2<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Vec2<T>;
    fn sub(self, other: Vec2<T>) -> Vec2<T> {
        Vec2::<T> {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Vec2<f32> {
    pub const fn new(x: f32, y: f32) -> Vec2<f32> {
        Vec2::<f32> { x, y }
    }

    pub const fn zero() -> Vec2<f32> {
        Vec2::<f32> { x: 0.0, y: 0.0 }
    }

    pub fn mag(self) -> f32 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    pub fn distance(self, other: Vec2<f32>) -> f32 {
        (self - other).mag()
    }

    /// Whether the point lies in `[0, w) x [0, h)`.
    pub fn is_within(self, w: f32, h: f32) -> bool {
        (0.0..w).contains(&self.x) && (0.0..h).contains(&self.y)
    }

    pub fn to_p2(self) -> Vec2<i32> {
        Vec2::<i32> {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }
}
