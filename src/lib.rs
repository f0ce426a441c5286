//! Lineal: dense matrix and fixed-dimension vector primitives in pure Rust.
//!
//! Lineal provides a dynamically-sized row-major [`primitives::Matrix`]
//! with the full cofactor toolchain (minors, determinants via Laplace
//! expansion, adjoints, inversion) and a compile-time-dimensioned
//! [`primitives::Vector`] with dot, cross, and distance operations.
//!
//! # Quick Start
//!
//! ```
//! use lineal::prelude::*;
//!
//! let a = Matrix::from_vec(3, 3, vec![
//!     3.0, 0.0, 2.0,
//!     2.0, 0.0, -2.0,
//!     0.0, 1.0, 1.0,
//! ]).unwrap();
//!
//! let inv = a.inverse().unwrap();
//! let product = a.matmul(&inv).unwrap();
//!
//! // A * A^-1 is the identity within floating tolerance.
//! let identity = Matrix::eye(3);
//! for i in 0..3 {
//!     for j in 0..3 {
//!         assert!((product.get(i, j) - identity.get(i, j)).abs() < 1e-5);
//!     }
//! }
//!
//! let u = Vector::<f32, 3>::from_array([0.0, 1.0, 1.0]);
//! let v = Vector::from_array([1.0, -1.0, 3.0]);
//! assert_eq!(u.cross(&v), Vector::from_array([4.0, 1.0, -1.0]));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`error`]: Error taxonomy and `Result` alias
//! - [`prelude`]: Convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;
