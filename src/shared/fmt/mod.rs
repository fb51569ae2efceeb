//! Display formatting for prices, changes and timestamps.
//!
//! Everything here is pure: no I/O, no clock reads except [`time::time_ago`],
//! and missing input renders a placeholder instead of failing.

pub mod currency;
pub mod num;
pub mod percent;
pub mod time;
pub mod trend;

pub use currency::format_currency;
pub use percent::format_percentage;
pub use time::{time_ago, time_ago_at, DateInput};
pub use trend::{trending_classes, Trend, TrendClasses};
