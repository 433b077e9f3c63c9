// Copyright 2025 the Cubist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form solutions of real cubic equations.
//!
//! The cubist library solves `a·x³ + b·x² + c·x + d = 0` for real
//! coefficients and returns all three roots as [`Complex`] numbers, using
//! two independent classical methods:
//!
//! - [`solve_cardano`]: Cardano's substitution, falling back on explicit
//!   complex cube-root extraction for the three-real-roots case.
//! - [`solve_vieta`]: Vieta's trigonometric substitution, with hyperbolic
//!   branches for the one-real-root case.
//!
//! Both are pure functions of the coefficients and a caller-supplied
//! tolerance, which controls every discriminant-sign classification. Having
//! two derivations of the same answer is useful for cross-checking:
//!
//! ```
//! use cubist::{solve_cardano, solve_vieta};
//!
//! let (a, b, c, d) = (4.0, 11.0, -3.0, -2.0);
//! let cardano = solve_cardano(a, b, c, d, 1e-7).unwrap();
//! let vieta = solve_vieta(a, b, c, d, 1e-7).unwrap();
//! assert!(cardano.approx_eq(vieta, 1e-6));
//! ```
//!
//! Extracting the real roots of a cubic known to have three:
//!
//! ```
//! use cubist::Cubic;
//!
//! // (x - 1)(x - 2)(x - 3)
//! let roots = Cubic::new(1.0, -6.0, 11.0, -6.0)
//!     .roots_vieta(1e-9)
//!     .unwrap()
//!     .real_roots(1e-9);
//! assert_eq!(roots.len(), 3);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments.
//!
//! The `serde` feature derives `Serialize`/`Deserialize` for the value
//! types.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("cubist requires either the `std` or `libm` feature");

mod cardano;
mod common;
mod complex;
mod cubic;
mod vieta;

pub use crate::cardano::solve_cardano;
pub use crate::complex::{Complex, NthRoots};
pub use crate::cubic::{Cubic, CubicRoots, SolveError};
pub use crate::vieta::solve_vieta;
