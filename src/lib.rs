//! Exact, reproducible 2D/3D spatial math for a host simulation/rendering
//! engine: vectors, quaternion rotation, the 3x3 orientation matrix
//! ([`Basis`](util::rotation::Basis)), affine transforms, planes, boxes and
//! colour packing.
//!
//! All types are plain `#[repr(C)]` value types over `f32` with no allocation
//! and no shared state; every operation is a pure function of its inputs.
//! Domain failures (normalising a zero vector, inverting a singular matrix)
//! produce IEEE NaN/Inf rather than signalling an error; intersection queries
//! that may have no geometric answer return [`Option`].

pub mod core;
pub mod util;
