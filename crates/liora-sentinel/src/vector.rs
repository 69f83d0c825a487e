//! Vector utilities: normalization, stable hashing, cosine distance
//!
//! All functions are pure. Inputs are never modified; normalization returns
//! a fresh vector.

use crate::error::{Result, SentinelError};
use sha2::{Digest, Sha256};

/// Fractional digits kept in audit records
pub const AUDIT_PRECISION: i32 = 6;

/// Largest absolute component, 0 for the empty vector
fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0, |m: f64, x| m.max(x.abs()))
}

/// Norm of `v / scale`; `scale` must be the largest absolute component
fn scaled_norm(v: &[f64], scale: f64) -> f64 {
    v.iter()
        .map(|x| {
            let s = x / scale;
            s * s
        })
        .sum::<f64>()
        .sqrt()
}

/// Euclidean (L2) norm
///
/// Components are scaled by the largest magnitude before squaring, so the
/// sum neither overflows for huge inputs nor underflows to zero for tiny ones.
pub fn l2_norm(v: &[f64]) -> f64 {
    let scale = max_abs(v);
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    scale * scaled_norm(v, scale)
}

/// Scale a vector to unit length
///
/// # Errors
/// `DegenerateVector` when the norm is exactly zero, which includes the
/// empty vector. No epsilon is applied.
pub fn normalize(v: &[f64]) -> Result<Vec<f64>> {
    let scale = max_abs(v);
    if scale == 0.0 {
        return Err(SentinelError::DegenerateVector);
    }
    let norm = scaled_norm(v, scale);
    Ok(v.iter().map(|x| x / scale / norm).collect())
}

/// SHA-256 over the little-endian f64 bytes of each component, hex encoded
///
/// Any bit-level change to any component changes the digest.
pub fn stable_vector_hash(v: &[f64]) -> String {
    let mut hasher = Sha256::new();
    for x in v {
        hasher.update(x.to_le_bytes());
    }
    hex::encode(hasher.finalize())
}

fn check_dimensions(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(SentinelError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Dot product of two equal-length vectors
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Cosine distance `1 - a·b / (|a| |b|)`, clamped to `[0, 2]`
///
/// Each side is measured by its own norm, so unit vectors are not required.
pub fn cosine_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b)?;
    let a = normalize(a)?;
    let b = normalize(b)?;
    unit_cosine_distance(&a, &b)
}

/// Cosine distance between two vectors already known to be unit length
///
/// Rounding can push `1 - a·b` a few ULPs outside `[0, 2]`; the result is
/// clamped back so identical directions give exactly `0.0`.
pub(crate) fn unit_cosine_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    Ok((1.0 - dot(a, b)?).clamp(0.0, 2.0))
}

/// Round half away from zero to a fixed number of fractional digits
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}
