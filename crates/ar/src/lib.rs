//! # lagstat-ar
//!
//! Autoregressive AR(k) fitting from the Yule-Walker equations, and
//! generation of estimated or simulated series from the fitted recurrence.
//!
//! ## Typestate Workflow
//!
//! ```mermaid
//! graph LR
//!     A["ArSpec::new(k)"] -->|".fit(&series)?"| B["ArFit"]
//!     B --> C[".coefficients(): phi_1..phi_k"]
//!     B --> D[".sigma2(): innovation variance"]
//!     B --> E[".estimate(n, &innovations)?"]
//!     B --> F[".simulate(n, n_sim, &mut rng)"]
//!     G["ar(&series, &ArConfig)?"] -->|"fit + estimate"| H["Series"]
//! ```
//!
//! The fit solves the system formed by the first `k + 1` autocovariances
//! with the Levinson-Durbin recursion and keeps the order-`k` coefficients.
//!
//! ```
//! use lagstat_ar::{ArSpec, Innovations};
//! use lagstat_series::Series;
//!
//! let s = Series::from(vec![1.0, 3.0, 2.0, 4.0, 3.0, 5.0, 4.0, 6.0, 5.0, 7.0]);
//! let fit = ArSpec::new(1).fit(&s).unwrap();
//! let est = fit.estimate(20, &Innovations::Zero).unwrap();
//! assert_eq!(est.len(), 20);
//! ```
//!
//! ## Mathematical Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | phi | [`ArFit::coefficients()`] | weights on the previous k observations |
//! | sigma2 | [`ArFit::sigma2()`] | final prediction-error (innovation) variance |
//! | mu | [`ArFit::mean()`] | mean of the source series |

mod config;
mod error;
mod fit;
mod innovations;
mod spec;

pub use config::{ArConfig, ar};
pub use error::ArError;
pub use fit::ArFit;
pub use innovations::Innovations;
pub use spec::ArSpec;
