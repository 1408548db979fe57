//! 2-D affine transforms for page placement
//!
//! Transforms use the PDF `cm` matrix convention `[a b c d e f]` with
//! row-vector application:
//!
//! ```text
//! x' = a*x + c*y + e
//! y' = b*x + d*y + f
//! ```
//!
//! Composition is associative but not commutative: `t1.then(t2)` applies
//! `t1` first, then `t2`. Normalization and bleed compensation depend on
//! that order.

use crate::types::Rotation;

/// A 2-D affine transform (translate, quarter-turn rotate, uniform scale)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Translation by (dx, dy)
    pub fn translate(dx: f32, dy: f32) -> Self {
        Self {
            e: dx,
            f: dy,
            ..Self::IDENTITY
        }
    }

    /// Counter-clockwise quarter-turn rotation about the origin.
    ///
    /// Exact matrix entries, no trigonometry, so rotated extents stay
    /// bit-precise.
    pub fn rotate(rotation: Rotation) -> Self {
        let (a, b, c, d) = match rotation {
            Rotation::None => (1.0, 0.0, 0.0, 1.0),
            Rotation::Deg90 => (0.0, 1.0, -1.0, 0.0),
            Rotation::Deg180 => (-1.0, 0.0, 0.0, -1.0),
            Rotation::Deg270 => (0.0, -1.0, 1.0, 0.0),
        };
        Self {
            a,
            b,
            c,
            d,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Uniform scale about the origin
    pub fn scale(s: f32) -> Self {
        Self {
            a: s,
            d: s,
            ..Self::IDENTITY
        }
    }

    /// Compose: apply `self` first, then `next`.
    pub fn then(self, next: Self) -> Self {
        Self {
            a: self.a * next.a + self.b * next.c,
            b: self.a * next.b + self.b * next.d,
            c: self.c * next.a + self.d * next.c,
            d: self.c * next.b + self.d * next.d,
            e: self.e * next.a + self.f * next.c + next.e,
            f: self.e * next.b + self.f * next.d + next.f,
        }
    }

    /// Apply the transform to a point
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Whether this transform is the identity, within floating tolerance
    pub fn is_identity(&self) -> bool {
        const EPS: f32 = 1e-5;
        (self.a - 1.0).abs() < EPS
            && self.b.abs() < EPS
            && self.c.abs() < EPS
            && (self.d - 1.0).abs() < EPS
            && self.e.abs() < EPS
            && self.f.abs() < EPS
    }
}
