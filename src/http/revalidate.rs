//! Revalidation hints attached to gateway requests.
//!
//! The hint tells an outer caching layer how long a response may be reused.
//! The gateway forwards it and never interprets it.

use std::time::Duration;

/// How long a fetched response may be considered fresh, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Revalidate(u64);

impl Revalidate {
    pub const DEFAULT: Revalidate = Revalidate(60);

    pub const fn secs(seconds: u64) -> Self {
        Self(seconds)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }
}

impl Default for Revalidate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Duration> for Revalidate {
    fn from(d: Duration) -> Self {
        Self(d.as_secs())
    }
}

/// A response body together with the hint it was fetched under.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    pub revalidate: Revalidate,
}

impl<T> Fetched<T> {
    pub fn into_inner(self) -> T {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        Fetched {
            data: f(self.data),
            revalidate: self.revalidate,
        }
    }
}
