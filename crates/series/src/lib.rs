//! # lagstat-series
//!
//! Fixed-length, position-indexed numeric series whose observations may be
//! absent, plus the lag and difference transforms the estimators build on.
//!
//! ```mermaid
//! graph LR
//!     A["Series::from(vec)"] --> B["lag(&s, k)"]
//!     A --> C["diff(&s, d)"]
//!     A --> D[".mean() / .variance_sample()"]
//! ```
//!
//! Every transform borrows its input and returns a fresh [`Series`] of the
//! same length. Arithmetic touching an absent operand yields an absent result.
//!
//! ```
//! use lagstat_series::{Series, diff, lag};
//!
//! let s = Series::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! assert_eq!(lag(&s, 1).values(), &[None, Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
//! assert_eq!(diff(&s, 1).values(), &[None, Some(1.0), Some(1.0), Some(1.0), Some(1.0)]);
//! ```

mod error;
mod lag;
mod series;

pub use error::SeriesError;
pub use lag::{diff, lag};
pub use series::Series;
