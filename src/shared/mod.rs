//! Shared utilities used across all domain modules.

pub mod fmt;
pub mod pagination;
pub mod query;
pub mod serde_util;

pub use fmt::{
    format_currency, format_percentage, time_ago, time_ago_at, trending_classes, DateInput,
    Trend, TrendClasses,
};
pub use pagination::{build_page_numbers, PageItem};
pub use query::{QueryParams, QueryValue};
