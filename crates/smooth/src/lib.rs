//! # lagstat-smooth
//!
//! Smoothing transforms over a [`Series`](lagstat_series::Series): simple
//! moving average, exponential moving average and MACD.
//!
//! ```mermaid
//! graph LR
//!     S["Series"] --> A["ma(&s, n)"]
//!     S --> B["ema(&s, &EmaConfig)"]
//!     B --> C["macd(&s, &MacdConfig)"]
//! ```
//!
//! Leading positions without enough history are absent, so every output has
//! the input's length and stays aligned with it.
//!
//! ```
//! use lagstat_series::Series;
//! use lagstat_smooth::ma;
//!
//! let s = Series::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! assert_eq!(ma(&s, 3).unwrap().values(), &[None, None, Some(2.0), Some(3.0), Some(4.0)]);
//! ```

mod ema;
mod error;
mod ma;
mod macd;

pub use ema::{EmaConfig, ema};
pub use error::SmoothError;
pub use ma::ma;
pub use macd::{Macd, MacdConfig, macd};
