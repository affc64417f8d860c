// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use chrono::offset::LocalResult;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::num::NonZeroU64;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix date/time which contains the number of non leap seconds since 1970.
/// The wire form is the inner second count; arithmetic via `UnixTime` is at
/// millisecond scale. `Option<NonZeroUnixSeconds>` is more memory efficient
/// than an `Option` around a plain integer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize, Serialize)]
pub struct NonZeroUnixSeconds(pub NonZeroU64);

impl NonZeroUnixSeconds {
    /// Creates a `NonZeroUnixSeconds` with the current date and time.
    pub fn now() -> Self {
        Self::new()
    }

    /// Returns the inner second count.
    pub fn seconds(&self) -> u64 {
        self.0.get()
    }
}

impl UnixTime for NonZeroUnixSeconds {
    /// Maximum `NonZeroUnixSeconds`.
    const MAX: NonZeroUnixSeconds = NonZeroUnixSeconds(NonZeroU64::MAX);
    /// Minimum `NonZeroUnixSeconds`.
    const MIN: NonZeroUnixSeconds = NonZeroUnixSeconds(NonZeroU64::MIN);

    fn from_i64(value: i64) -> Self {
        (value / Self::MILLIS_PER_SECOND as i64)
            .try_into()
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .unwrap_or(Self::MIN)
    }

    fn to_i64(&self) -> i64 {
        self.0
            .get()
            .try_into()
            .map(|secs: i64| secs * Self::MILLIS_PER_SECOND as i64)
            .unwrap_or(i64::MAX)
    }
}

impl Display for NonZeroUnixSeconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        if f.alternate() {
            return f.write_str(&self.to_default_format());
        }

        Display::fmt(&self.0, f)
    }
}

impl TryFrom<u64> for NonZeroUnixSeconds {
    type Error = &'static str;
    fn try_from(seconds: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(seconds).map(Self).ok_or("0 is invalid")
    }
}

/// Convenient time conversions at an internal millisecond scale.
pub trait UnixTime: Sized + Clone {
    /// Maximum time supported by notation.
    const MAX: Self;
    /// Minimum time supported by notation.
    const MIN: Self;

    /// Milliseconds per second.
    const MILLIS_PER_SECOND: u64 = 1000;

    /// Creates a `UnixTime` with the current date and time.
    fn new() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time too low");
        Self::from_i64(
            duration
                .as_millis()
                .try_into()
                .expect("system time too high"),
        )
    }

    /// Returns time corresponding to a millisecond count.
    fn from_i64(value: i64) -> Self;

    /// Formats the time as a string, e.g. `"%Y-%m-%d %H:%M"`.
    fn format(&self, fmt: &str) -> String {
        self.to_date_time_utc().format(fmt).to_string()
    }

    /// Returns the millisecond count corresponding to time.
    fn to_i64(&self) -> i64;

    /// Returns the corresponding `chrono` UTC date/time.
    fn to_date_time_utc(&self) -> DateTime<Utc> {
        match Utc.timestamp_millis_opt(self.to_i64()) {
            LocalResult::Single(dt) => dt,
            // Assume an invalid millisecond count never happens, but if it does don't panic.
            _ => Local::now().into(),
        }
    }

    /// Returns a reasonable string representation of the time.
    fn to_default_format(&self) -> String {
        self.format("%Y-%m-%d %H:%M")
    }
}
