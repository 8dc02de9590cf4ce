//! In-place vector operations
//!
//! `glam::Vec2` is a `Copy` value type; the simulation mutates bodies in place,
//! so these helpers mutate the receiver and hand it back for chaining. Take a
//! copy (`let mut d = v;`) when a fresh value is needed.

use glam::Vec2;

/// Chainable, mutating operations on [`Vec2`]
pub trait VectorExt {
    fn add_mut(&mut self, other: Vec2) -> &mut Self;
    fn sub_mut(&mut self, other: Vec2) -> &mut Self;
    fn scale_mut(&mut self, factor: f32) -> &mut Self;
    /// Rescale to unit length; leaves a zero vector untouched
    fn normalize_mut(&mut self) -> &mut Self;
    fn set_xy(&mut self, x: f32, y: f32) -> &mut Self;
    /// `hypot(x, y)`
    fn magnitude(&self) -> f32;
}

impl VectorExt for Vec2 {
    #[inline]
    fn add_mut(&mut self, other: Vec2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    #[inline]
    fn sub_mut(&mut self, other: Vec2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    #[inline]
    fn scale_mut(&mut self, factor: f32) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self
    }

    #[inline]
    fn normalize_mut(&mut self) -> &mut Self {
        let m = self.magnitude();
        if m > 0.0 {
            self.scale_mut(1.0 / m);
        }
        self
    }

    #[inline]
    fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    fn magnitude(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_chain() {
        let mut v = Vec2::new(10.0, 20.0);
        v.add_mut(Vec2::new(5.0, -5.0)).scale_mut(2.0);
        assert_eq!(v, Vec2::new(30.0, 30.0));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vec2::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = Vec2::ZERO;
        v.normalize_mut();
        assert_eq!(v, Vec2::ZERO);
        assert!(!v.x.is_nan());
    }

    #[test]
    fn test_normalize_unit_length() {
        let mut v = Vec2::new(0.0, -7.0);
        v.normalize_mut();
        assert_eq!(v, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Vec2::new(1.0, 2.0);
        let mut copy = original;
        copy.sub_mut(Vec2::ONE).set_xy(9.0, 9.0);
        assert_eq!(original, Vec2::new(1.0, 2.0));
        assert_eq!(copy, Vec2::new(9.0, 9.0));
    }
}
