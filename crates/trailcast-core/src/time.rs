use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A non-negative span of time, stored as whole milliseconds.
///
/// GPS samples carry absolute millisecond timestamps; keeping spans in
/// integer milliseconds makes frame timing exactly reproducible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Duration {
    millis: i64,
}

impl Duration {
    /// Create a duration from milliseconds. Negative values clamp to zero.
    pub fn from_millis(millis: i64) -> Self {
        Self {
            millis: millis.max(0),
        }
    }

    /// Create a duration from fractional seconds, rounded to milliseconds.
    pub fn from_seconds(seconds: f64) -> Self {
        Self::from_millis((seconds * 1000.0).round() as i64)
    }

    /// A zero duration.
    pub fn zero() -> Self {
        Self { millis: 0 }
    }

    /// Duration in milliseconds.
    pub fn as_millis(&self) -> i64 {
        self.millis
    }

    /// Duration in fractional seconds.
    pub fn as_seconds(&self) -> f64 {
        self.millis as f64 / 1000.0
    }

    pub fn is_zero(&self) -> bool {
        self.millis == 0
    }
}

impl Add for Duration {
    type Output = Duration;
    fn add(self, rhs: Duration) -> Duration {
        Duration::from_millis(self.millis + rhs.millis)
    }
}

impl Sub for Duration {
    type Output = Duration;
    fn sub(self, rhs: Duration) -> Duration {
        Duration::from_millis(self.millis - rhs.millis)
    }
}

impl Mul<f64> for Duration {
    type Output = Duration;
    fn mul(self, rhs: f64) -> Duration {
        Duration::from_millis((self.millis as f64 * rhs).round() as i64)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.millis < 1000 {
            write!(f, "{}ms", self.millis)
        } else {
            write!(f, "{:.2}s", self.as_seconds())
        }
    }
}

/// An absolute point in time, stored as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    millis: i64,
}

impl Timestamp {
    /// Create a timestamp from epoch milliseconds.
    pub fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Create a timestamp from fractional epoch seconds.
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            millis: (seconds * 1000.0).round() as i64,
        }
    }

    /// Epoch milliseconds.
    pub fn as_millis(&self) -> i64 {
        self.millis
    }

    /// Fractional epoch seconds.
    pub fn as_seconds(&self) -> f64 {
        self.millis as f64 / 1000.0
    }

    /// The span from `earlier` to `self`; zero if `earlier` is later.
    pub fn duration_since(&self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.millis - earlier.millis)
    }

    /// Shift this timestamp by a signed millisecond offset.
    pub fn offset_by(&self, offset_millis: i64) -> Timestamp {
        Timestamp {
            millis: self.millis + offset_millis,
        }
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;
    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp {
            millis: self.millis + rhs.as_millis(),
        }
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Timestamp;
    fn sub(self, rhs: Duration) -> Timestamp {
        Timestamp {
            millis: self.millis - rhs.as_millis(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Clock-of-day formatting keeps log lines readable without pulling a
        // calendar library into the core crate.
        let day_ms = self.millis.rem_euclid(86_400_000);
        let hours = day_ms / 3_600_000;
        let minutes = (day_ms % 3_600_000) / 60_000;
        let secs = (day_ms % 60_000) / 1_000;
        let ms = day_ms % 1_000;
        write!(f, "{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, ms)
    }
}
