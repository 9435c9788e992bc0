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

//! Conversion of a plain ICAO NOTAM text into a [`NotamRecord`].

use icao_notam::{decode, extract_details, parse_validity, Category, QLine};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::{point, NotamRecord};

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][0-9]{4}/[0-9]{2})\b").expect("valid NOTAM number regex"));
static LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"A\)\s*([A-Z]{4})\b").expect("valid A) regex"));

impl NotamRecord {
    /// Creates a record from the text of a NOTAM.
    ///
    /// The `id` is carried through as is. Category, position and radius come
    /// from the Q-line, the validity from the B) and C) items and the number
    /// from the first NOTAM number found, e.g. `A1234/25`.
    ///
    /// # Examples
    ///
    /// ```
    /// use notam::{Category, NotamRecord};
    ///
    /// let record = NotamRecord::from_text(
    ///     "feed-1",
    ///     "A1234/25 NOTAMN
    /// Q) KZAU/QMRLC/IV/NBO/A/000/999/4159N08754W005
    /// A) KORD B) 2512160925 C) PERM
    /// E) RWY 04L/22R CLSD",
    /// );
    ///
    /// assert_eq!(record.number, "A1234/25");
    /// assert_eq!(record.category, Category::Runway);
    /// assert_eq!(record.location_code.as_deref(), Some("KORD"));
    /// assert!(record.is_permanent());
    /// ```
    pub fn from_text(id: impl Into<String>, text: &str) -> Self {
        let qline = decode(text);
        let category = qline.as_ref().map_or(Category::Other, QLine::category);
        let validity = parse_validity(text);

        Self {
            id: id.into(),
            number: NUMBER_RE
                .captures(text)
                .map(|caps| caps[1].to_string())
                .unwrap_or_default(),
            text: text.to_string(),
            location_code: LOCATION_RE.captures(text).map(|caps| caps[1].to_string()),
            category,
            raw_coords: qline.as_ref().and_then(|q| q.raw_coords.clone()),
            radius_nm: qline.as_ref().map_or(0, |q| u32::from(q.radius_nm)),
            start_time: validity.start_iso(),
            end_time: validity.end_iso(),
            location: qline.as_ref().and_then(QLine::coordinate).and_then(point),
            details: extract_details(text, category),
            qline,
        }
    }
}

#[cfg(test)]
mod tests {
    use icao_notam::Details;

    use super::*;

    const KORD: &str = "A1234/25 NOTAMN
Q) KZAU/QMRLC/IV/NBO/A/000/999/4159N08754W005
A) KORD B) 2512160925 C) 2512161200
E) RWY 04L/22R CLSD";

    #[test]
    fn converts_full_notam() {
        let record = NotamRecord::from_text("KORD-1", KORD);

        assert_eq!(record.id, "KORD-1");
        assert_eq!(record.number, "A1234/25");
        assert_eq!(record.text, KORD);
        assert_eq!(record.location_code.as_deref(), Some("KORD"));
        assert_eq!(record.category, Category::Runway);
        assert_eq!(record.q_code(), Some("QMRLC"));
        assert_eq!(record.raw_coords.as_deref(), Some("4159N08754W"));
        assert_eq!(record.radius_nm, 5);
        assert_eq!(record.start_time.as_deref(), Some("2025-12-16T09:25:00"));
        assert_eq!(record.end_time.as_deref(), Some("2025-12-16T12:00:00"));
        assert!(record.location.is_some());
        assert!(matches!(record.details, Details::Runway { .. }));
    }

    #[test]
    fn text_without_qline() {
        let record = NotamRecord::from_text("x", "TWY A CLSD 2601010000 2601020000");

        assert_eq!(record.number, "");
        assert_eq!(record.category, Category::Other);
        assert_eq!(record.qline, None);
        assert_eq!(record.location, None);
        assert_eq!(record.radius_nm, 0);
        assert!(record.details.is_empty());
        assert_eq!(record.start_time.as_deref(), Some("2026-01-01T00:00:00"));
        assert_eq!(record.end_time.as_deref(), Some("2026-01-02T00:00:00"));
    }

    #[test]
    fn invalid_start_is_absent() {
        let record = NotamRecord::from_text("x", "B) 2513160925 C) 2512161200");

        assert_eq!(record.start_time, None);
        assert_eq!(record.end_time.as_deref(), Some("2025-12-16T12:00:00"));
    }

    #[test]
    fn qline_without_position() {
        let record = NotamRecord::from_text("x", "Q) EDWW/QRTCA/IV/BO/W/000/100 E) TEMPO RESTRICTED AREA");

        assert_eq!(record.category, Category::Airspace);
        assert_eq!(record.raw_coords, None);
        assert_eq!(record.location, None);
    }
}
