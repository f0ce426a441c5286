//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use lineal::prelude::*;
//! ```

pub use crate::error::{LinealError, Result};
pub use crate::primitives::{Matrix, Vector, NEAR_ZERO_THRESHOLD};
