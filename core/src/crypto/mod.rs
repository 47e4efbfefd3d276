//! Curve25519 primitives
//!
//! This module provides:
//! - Scalar clamping for locally generated private keys
//! - Fixed-base and variable-base X25519 scalar multiplication

pub mod clamp;
pub mod exchange;

pub use clamp::clamp_scalar;
pub use exchange::{base_point_multiply, scalar_multiply, BASE_POINT};
