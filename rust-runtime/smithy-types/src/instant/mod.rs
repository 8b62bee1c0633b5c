/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A point in time, independent of any time zone, as carried by timestamp members.

use chrono::{DateTime, SecondsFormat, Utc};
use std::error::Error;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Instant in time, stored as seconds since the Unix epoch plus a subsecond nanosecond offset.
///
/// The nanosecond offset always moves forward in time, so `-1.5` seconds is stored
/// as `-2` seconds and `500_000_000` nanoseconds.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let seconds = -(duration.as_secs() as i64);
                match duration.subsec_nanos() {
                    0 => Instant::from_epoch_seconds(seconds),
                    nanos => Instant::from_secs_and_nanos(seconds - 1, NANOS_PER_SECOND - nanos),
                }
            }
        }
    }

    /// Parses an `Instant` out of `s` according to `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateParseError> {
        match format {
            Format::DateTime => parse_date_time(s),
            Format::EpochSeconds => parse_epoch_seconds(s),
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Formats the instant according to `format`.
    ///
    /// Instants outside of the range representable as a calendar date fall back to
    /// [`Format::EpochSeconds`].
    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos) {
                Some(date_time) => {
                    let mut rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::Secs, true);
                    if self.has_nanos() {
                        rfc3339.pop();
                        rfc3339.push('.');
                        rfc3339.push_str(&fraction_digits(self.subsecond_nanos));
                        rfc3339.push('Z');
                    }
                    rfc3339
                }
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if !self.has_nanos() {
                    itoa::Buffer::new().format(self.seconds).to_owned()
                } else if self.seconds < 0 {
                    format!(
                        "-{}.{}",
                        (self.seconds + 1).unsigned_abs(),
                        fraction_digits(NANOS_PER_SECOND - self.subsecond_nanos)
                    )
                } else {
                    format!("{}.{}", self.seconds, fraction_digits(self.subsecond_nanos))
                }
            }
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Instant::fmt(self, Format::DateTime))
    }
}

/// Wire formats for an [`Instant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339 in UTC, for example `2019-12-16T23:48:18.52Z`.
    DateTime,
    /// Seconds since the Unix epoch with an optional fraction, for example `1576540098.52`.
    EpochSeconds,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DateParseError {
    Invalid(&'static str),
    IntParseError,
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParseError::Invalid(reason) => write!(f, "invalid timestamp: {}", reason),
            DateParseError::IntParseError => write!(f, "failed to parse an integer in timestamp"),
        }
    }
}

impl Error for DateParseError {}

fn fraction_digits(nanos: u32) -> String {
    let padded = format!("{:0>9}", nanos);
    padded.trim_end_matches('0').to_owned()
}

fn parse_date_time(s: &str) -> Result<Instant, DateParseError> {
    let parsed = DateTime::parse_from_rfc3339(s.trim())
        .map_err(|_| DateParseError::Invalid("not an RFC 3339 date-time"))?;
    Ok(Instant::from_secs_and_nanos(
        parsed.timestamp(),
        parsed.timestamp_subsec_nanos().min(NANOS_PER_SECOND - 1),
    ))
}

fn parse_epoch_seconds(s: &str) -> Result<Instant, DateParseError> {
    let s = s.trim();
    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (s, None),
    };
    let seconds: i64 = whole.parse().map_err(|_| DateParseError::IntParseError)?;
    let nanos = match fraction {
        None => 0,
        Some(digits) => {
            if digits.is_empty() || digits.len() > 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DateParseError::Invalid("invalid fractional seconds"));
            }
            let value: u32 = digits.parse().map_err(|_| DateParseError::IntParseError)?;
            value * 10_u32.pow(9 - digits.len() as u32)
        }
    };
    if whole.starts_with('-') && nanos != 0 {
        let seconds = seconds
            .checked_sub(1)
            .ok_or(DateParseError::Invalid("epoch seconds out of range"))?;
        Ok(Instant::from_secs_and_nanos(seconds, NANOS_PER_SECOND - nanos))
    } else {
        Ok(Instant::from_secs_and_nanos(seconds, nanos))
    }
}
