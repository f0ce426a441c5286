//! Core compute primitives (Vector, Matrix).
//!
//! These types own their storage exclusively; there is no sharing and no
//! internal locking. A single instance mutated from multiple threads must
//! be serialized by the caller.

mod matrix;
mod vector;

pub use matrix::{Matrix, NEAR_ZERO_THRESHOLD};
pub use vector::Vector;
