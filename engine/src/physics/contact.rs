//! Contacts
//!
//! Contact data reported by the host engine each physics tick, and the
//! slope test that decides whether a contact normal counts as floor.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Contact normals shorter than this are treated as degenerate.
const NORMAL_EPS: f32 = 1.0e-6;

/// Bitmask of collision layers (bit `n` = layer `n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(u32);

impl LayerMask {
    /// Matches no layer.
    pub const NONE: LayerMask = LayerMask(0);
    /// Matches every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    pub const fn from_bits(bits: u32) -> Self {
        LayerMask(bits)
    }

    /// Mask containing only `layer`. Layers past 31 yield an empty mask.
    pub const fn layer(layer: u8) -> Self {
        if layer < 32 {
            LayerMask(1 << layer)
        } else {
            LayerMask::NONE
        }
    }

    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Add `layer` to the mask.
    pub fn with(self, layer: u8) -> Self {
        LayerMask(self.0 | LayerMask::layer(layer).0)
    }

    /// Whether `layer` is part of the mask.
    #[inline]
    pub fn contains(&self, layer: u8) -> bool {
        let bit = LayerMask::layer(layer).0;
        bit != 0 && self.0 & bit == bit
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::ALL
    }
}

/// A single contact between the body and another collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPoint {
    /// World-space contact point.
    pub point: Vec3,
    /// Surface normal pointing from the other collider toward the body.
    pub normal: Vec3,
}

impl ContactPoint {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }
}

/// All contacts between the body and one other collider during a tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactManifold {
    /// Collision layer of the other collider.
    pub layer: u8,
    pub points: Vec<ContactPoint>,
}

impl ContactManifold {
    pub fn new(layer: u8, points: Vec<ContactPoint>) -> Self {
        Self { layer, points }
    }

    /// Manifold with one contact per normal, all at the origin.
    pub fn from_normals(layer: u8, normals: &[Vec3]) -> Self {
        Self {
            layer,
            points: normals
                .iter()
                .map(|&normal| ContactPoint::new(Vec3::ZERO, normal))
                .collect(),
        }
    }
}

/// Angle in degrees between `normal` and world up.
///
/// Returns `None` for a zero-length (degenerate) normal.
pub fn slope_angle(normal: Vec3) -> Option<f32> {
    let len = normal.length();
    if len < NORMAL_EPS || !len.is_finite() {
        return None;
    }
    let cos = (normal.dot(Vec3::Y) / len).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Whether a surface with this normal is walkable floor.
///
/// The angle to up must be strictly less than `max_slope_angle`. Degenerate
/// normals are never floor.
pub fn is_floor(normal: Vec3, max_slope_angle: f32) -> bool {
    slope_angle(normal).is_some_and(|angle| angle < max_slope_angle)
}
