// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Validity period from the B) and C) items.

use chrono::{NaiveDate, NaiveDateTime};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::fixed;
use crate::{Error, FixedField};

static B_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"B\)\s*([0-9]{10})").expect("valid B) regex"));
static C_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"C\)\s*([0-9]{10}|PERM)").expect("valid C) regex"));
static DTG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([0-9]{10})\b").expect("valid DTG regex"));

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A date-time group `YYMMDDHHMM` in UTC.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct DateTimeGroup<'a>(&'a [u8; 10]);

impl<'a> FixedField<'a> for DateTimeGroup<'a> {
    const LENGTH: usize = 10;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        fixed(bytes).map(Self)
    }
}

impl DateTimeGroup<'_> {
    /// Returns the date and time with the year taken as `2000 + YY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the group isn't numeric or isn't a calendar date.
    pub fn as_datetime(&self) -> Result<NaiveDateTime, Error> {
        let year = parse_numeric!(2, i32, &self.0[0..2])?;
        let month = parse_numeric!(2, u32, &self.0[2..4])?;
        let day = parse_numeric!(2, u32, &self.0[4..6])?;
        let hour = parse_numeric!(2, u32, &self.0[6..8])?;
        let minute = parse_numeric!(2, u32, &self.0[8..10])?;

        NaiveDate::from_ymd_opt(2000 + year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .ok_or_else(|| Error::InvalidDate {
                value: String::from_utf8_lossy(self.0).into_owned(),
            })
    }
}

/// The period in which a NOTAM is in force.
///
/// An absent end means the NOTAM is permanent or the end couldn't be found.
/// [`permanent`](Self::permanent) tells both apart.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Validity {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    /// Whether the C) item is `PERM`.
    pub permanent: bool,
}

impl Validity {
    /// Returns the start as ISO 8601 string, e.g. `2025-12-16T09:25:00`.
    pub fn start_iso(&self) -> Option<String> {
        self.start.map(|dt| dt.format(ISO_FORMAT).to_string())
    }

    /// Returns the end as ISO 8601 string.
    pub fn end_iso(&self) -> Option<String> {
        self.end.map(|dt| dt.format(ISO_FORMAT).to_string())
    }
}

/// Decodes a `YYMMDDHHMM` date-time group.
///
/// Returns `None` for anything but ten digits forming a valid date and time.
pub fn decode_timestamp(dtg: &str) -> Option<NaiveDateTime> {
    if dtg.len() != DateTimeGroup::LENGTH {
        return None;
    }

    match DateTimeGroup::from_bytes(dtg.as_bytes()).and_then(|g| g.as_datetime()) {
        Ok(dt) => Some(dt),
        Err(e) => {
            trace!("timestamp not decoded: {e}");
            None
        }
    }
}

/// Extracts the validity from the B) and C) items of the text.
///
/// If an item isn't found, the first two standalone ten digit groups of the
/// text fill start and end in that order, but only where still unset.
///
/// # Examples
///
/// ```
/// let validity = icao_notam::parse_validity("B) 2512160925 C) PERM");
/// assert_eq!(validity.start_iso().as_deref(), Some("2025-12-16T09:25:00"));
/// assert_eq!(validity.end, None);
/// assert!(validity.permanent);
/// ```
pub fn parse_validity(text: &str) -> Validity {
    let mut start = B_RE.captures(text).map(|caps| caps.get(1).map_or("", |m| m.as_str()));
    let mut end = C_RE.captures(text).map(|caps| caps.get(1).map_or("", |m| m.as_str()));

    if start.is_none() || end.is_none() {
        let mut groups = DTG_RE.find_iter(text).map(|m| m.as_str());
        let first = groups.next();
        let second = groups.next();

        start = start.or(first);
        if second.is_some() {
            end = end.or(second);
        }
    }

    let permanent = end == Some("PERM");

    Validity {
        start: start.and_then(decode_timestamp),
        end: end.filter(|_| !permanent).and_then(decode_timestamp),
        permanent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_date_time_group() {
        let dt = decode_timestamp("2512160925").expect("timestamp should decode");
        assert_eq!(dt.format(ISO_FORMAT).to_string(), "2025-12-16T09:25:00");
    }

    #[test]
    fn rejects_invalid_calendar_values() {
        assert_eq!(decode_timestamp("2513160925"), None);
        assert_eq!(decode_timestamp("2502300925"), None);
        assert_eq!(decode_timestamp("2512162500"), None);
        assert_eq!(decode_timestamp("2512160960"), None);
        assert_eq!(decode_timestamp("25121609"), None);
        assert_eq!(decode_timestamp("PERM"), None);
    }

    #[test]
    fn parses_labeled_items() {
        let validity = parse_validity("A) KBED B) 2512160925 C) 2512161200 E) RWY 11/29 CLSD");

        assert_eq!(validity.start_iso().as_deref(), Some("2025-12-16T09:25:00"));
        assert_eq!(validity.end_iso().as_deref(), Some("2025-12-16T12:00:00"));
        assert!(!validity.permanent);
    }

    #[test]
    fn parses_permanent_end() {
        let validity = parse_validity("B) 2512160925 C) PERM");

        assert!(validity.start.is_some());
        assert_eq!(validity.end, None);
        assert!(validity.permanent);
    }

    #[test]
    fn falls_back_to_standalone_groups() {
        let validity = parse_validity("RWY 11/29 CLSD 2601010000 2601312359");

        assert_eq!(validity.start_iso().as_deref(), Some("2026-01-01T00:00:00"));
        assert_eq!(validity.end_iso().as_deref(), Some("2026-01-31T23:59:00"));
    }

    #[test]
    fn fills_only_unset_items() {
        // the labeled start is also the first standalone group
        let validity = parse_validity("B) 2512160925 EST 2512170000");

        assert_eq!(validity.start_iso().as_deref(), Some("2025-12-16T09:25:00"));
        assert_eq!(validity.end_iso().as_deref(), Some("2025-12-17T00:00:00"));
    }

    #[test]
    fn fallback_counts_labeled_groups() {
        // the first standalone group is the one of the C) item
        let validity = parse_validity("C) 2512161200 2512160925");

        assert_eq!(validity.start_iso().as_deref(), Some("2025-12-16T12:00:00"));
        assert_eq!(validity.end_iso().as_deref(), Some("2025-12-16T12:00:00"));
    }

    #[test]
    fn single_group_fills_only_start() {
        let validity = parse_validity("FROM 2512160925");
        assert!(validity.start.is_some());
        assert_eq!(validity.end, None);
    }

    #[test]
    fn invalid_start_keeps_end() {
        let validity = parse_validity("B) 2513160925 C) 2512161200");

        assert_eq!(validity.start, None);
        assert_eq!(validity.end_iso().as_deref(), Some("2025-12-16T12:00:00"));
    }

    #[test]
    fn ignores_longer_digit_runs() {
        let validity = parse_validity("SERIAL 25121609251 REF");
        assert_eq!(validity, Validity::default());
    }
}
