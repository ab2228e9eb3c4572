//! Spring-able value types
//!
//! A spring can drive any value that forms a vector space over `f64`: it
//! needs a zero, addition, and scaling. Implementations are provided for
//! scalars and the [`Vec2`]/[`Vec3`] types from [`crate::math`].

use std::fmt::Debug;

use crate::math::{Vec2, Vec3};

/// Trait for values that can be driven by a [`Spring`](crate::Spring)
pub trait SpringValue: Copy + Debug {
    /// The additive identity
    fn zero() -> Self;

    /// Component-wise sum of two values
    fn add(self, other: Self) -> Self;

    /// Multiply every component by `factor`
    fn scale(self, factor: f64) -> Self;

    /// Component-wise difference `self - other`
    fn sub(self, other: Self) -> Self {
        self.add(other.scale(-1.0))
    }

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool;
}

// ============================================================================
// Scalar Implementations
// ============================================================================

impl SpringValue for f64 {
    fn zero() -> Self {
        0.0
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self - other).abs() < epsilon
    }
}

impl SpringValue for f32 {
    fn zero() -> Self {
        0.0
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn scale(self, factor: f64) -> Self {
        (f64::from(self) * factor) as f32
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::from(self - other).abs() < epsilon
    }
}

// ============================================================================
// Vector Implementations
// ============================================================================

impl SpringValue for Vec2 {
    fn zero() -> Self {
        Vec2::ZERO
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl SpringValue for Vec3 {
    fn zero() -> Self {
        Vec3::ZERO
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}
