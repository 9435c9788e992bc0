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

//! The qualifier line of a NOTAM.
//!
//! ```text
//! Q) FIR/QCODE/TRAFFIC/PURPOSE/SCOPE/LOWER/UPPER/COORDS[RADIUS]
//! Q) CZEG/QFAXX/IV/NBO/A/000/999/5319N11335W005
//! ```
//!
//! Real feeds elide fields, so traffic, purpose and scope may be empty, the
//! altitude pair and the coordinates with radius are optional and the leading
//! `Q)` marker may be missing when a fragment is decoded.

use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{convert_coordinate, Category, Error};

static Q_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:Q\)\s*)?",
        r"(?P<fir>[A-Z]{4})/",
        r"(?P<code>Q[A-Z]{4})/",
        r"(?P<traffic>[IV]*)/",
        r"(?P<purpose>[NBOM]*)/",
        r"(?P<scope>[AEW]*)/",
        r"(?:(?P<lower>[0-9]{3})/(?P<upper>[0-9]{3}))?",
        r"(?:/(?P<coords>[0-9]{4}[NS][0-9]{5}[EW]))?",
        r"(?P<radius>[0-9]{3})?",
    ))
    .expect("valid Q-line regex")
});

/// Labels of common condition codes (fourth and fifth letter of the Q-code).
const CONDITIONS: [(&str, &str); 5] = [
    ("LC", "Closed"),
    ("LT", "Limited"),
    ("OG", "Operating"),
    ("AP", "Available Prior Permission"),
    ("AN", "Available on Notice"),
];

/// A five letter NOTAM code, the letter `Q` followed by a two letter subject
/// and a two letter condition.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct QCode(String);

impl QCode {
    /// Returns the code if it is `Q` followed by four uppercase letters.
    pub fn parse(code: &str) -> Option<Self> {
        let bytes = code.as_bytes();
        let valid = bytes.len() == 5
            && bytes[0] == b'Q'
            && bytes[1..].iter().all(|b| b.is_ascii_uppercase());

        valid.then(|| Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The second and third letter, e.g. `MR` of `QMRLC`.
    pub fn subject(&self) -> &str {
        &self.0[1..3]
    }

    /// The fourth and fifth letter, e.g. `LC` of `QMRLC`.
    pub fn condition(&self) -> &str {
        &self.0[3..5]
    }

    pub fn category(&self) -> Category {
        Category::from_subject(self.subject())
    }

    /// Returns a label for well known conditions.
    pub fn condition_label(&self) -> Option<&'static str> {
        CONDITIONS
            .iter()
            .find(|(code, _)| *code == self.condition())
            .map(|(_, label)| *label)
    }
}

impl TryFrom<String> for QCode {
    type Error = Error;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::parse(&code).ok_or_else(|| Error::InvalidVariant {
            field: "Q-code",
            bytes: code.into_bytes(),
            expected: "Q followed by four uppercase letters",
        })
    }
}

impl From<QCode> for String {
    fn from(code: QCode) -> Self {
        code.0
    }
}

/// The decoded Q-line.
///
/// Numeric fields that are missing in the Q-line are `0`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QLine {
    /// Flight information region, e.g. `CZEG`.
    pub fir: String,
    pub q_code: QCode,
    pub traffic: String,
    pub purpose: String,
    pub scope: String,
    /// Lower limit as flight level.
    pub lower_fl: u16,
    /// Upper limit as flight level.
    pub upper_fl: u16,
    /// The coordinate token, e.g. `5319N11335W`.
    pub raw_coords: Option<String>,
    pub radius_nm: u16,
}

impl QLine {
    pub fn subject_code(&self) -> &str {
        self.q_code.subject()
    }

    pub fn condition_code(&self) -> &str {
        self.q_code.condition()
    }

    pub fn category(&self) -> Category {
        self.q_code.category()
    }

    /// Returns `(longitude, latitude)` of the coordinate token.
    pub fn coordinate(&self) -> Option<(f64, f64)> {
        self.raw_coords.as_deref().and_then(convert_coordinate)
    }
}

/// Decodes the first Q-line found in the text.
///
/// Returns `None` if no FIR followed by a Q-code is found.
///
/// # Examples
///
/// ```
/// use icao_notam::{decode, Category};
///
/// let q = decode(" Q) CZEG/QFAXX/IV/NBO/A/000/999/5319N11335W005").unwrap();
/// assert_eq!(q.fir, "CZEG");
/// assert_eq!(q.category(), Category::Aerodrome);
/// assert_eq!(q.radius_nm, 5);
/// ```
pub fn decode(text: &str) -> Option<QLine> {
    let Some(caps) = Q_LINE_RE.captures(text) else {
        trace!("no Q-line found");
        return None;
    };

    let q_code = QCode::parse(&caps["code"])?;

    Some(QLine {
        fir: caps["fir"].to_string(),
        q_code,
        traffic: caps["traffic"].to_string(),
        purpose: caps["purpose"].to_string(),
        scope: caps["scope"].to_string(),
        lower_fl: three_digits(&caps, "lower"),
        upper_fl: three_digits(&caps, "upper"),
        raw_coords: caps.name("coords").map(|m| m.as_str().to_string()),
        radius_nm: three_digits(&caps, "radius"),
    })
}

fn three_digits(caps: &Captures<'_>, name: &str) -> u16 {
    caps.name(name)
        .and_then(|m| parse_numeric!(3, u16, m.as_str().as_bytes()).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_qline() {
        let q = decode(" Q) CZEG/QFAXX/IV/NBO/A/000/999/5319N11335W005")
            .expect("Q-line should decode");

        assert_eq!(q.fir, "CZEG");
        assert_eq!(q.q_code.as_str(), "QFAXX");
        assert_eq!(q.subject_code(), "FA");
        assert_eq!(q.condition_code(), "XX");
        assert_eq!(q.category(), Category::Aerodrome);
        assert_eq!(q.traffic, "IV");
        assert_eq!(q.purpose, "NBO");
        assert_eq!(q.scope, "A");
        assert_eq!(q.lower_fl, 0);
        assert_eq!(q.upper_fl, 999);
        assert_eq!(q.raw_coords.as_deref(), Some("5319N11335W"));
        assert_eq!(q.radius_nm, 5);
    }

    #[test]
    fn decodes_elided_fields() {
        let text = "A4197/25 NOTAMC A4189/25 Q) KZBW/QMNXX////000/999/4305N07049W005 A) KPSM B) 2512170449";
        let q = decode(text).expect("Q-line should decode");

        assert_eq!(q.fir, "KZBW");
        assert_eq!(q.subject_code(), "MN");
        assert_eq!(q.category(), Category::Other);
        assert_eq!(q.traffic, "");
        assert_eq!(q.purpose, "");
        assert_eq!(q.scope, "");
        assert_eq!(q.upper_fl, 999);
        assert_eq!(q.raw_coords.as_deref(), Some("4305N07049W"));
        assert_eq!(q.radius_nm, 5);
    }

    #[test]
    fn decodes_fragment_without_marker() {
        let q = decode("KZAU/QMRLC/IV/NBO/A/000/999/4159N08754W005").expect("fragment should decode");
        assert_eq!(q.category(), Category::Runway);
        assert_eq!(q.q_code.condition_label(), Some("Closed"));
    }

    #[test]
    fn defaults_missing_numbers_to_zero() {
        let q = decode("Q) EDWW/QRTCA/IV/BO/W/").expect("Q-line should decode");

        assert_eq!(q.category(), Category::Airspace);
        assert_eq!(q.lower_fl, 0);
        assert_eq!(q.upper_fl, 0);
        assert_eq!(q.raw_coords, None);
        assert_eq!(q.radius_nm, 0);
        assert_eq!(q.coordinate(), None);
    }

    #[test]
    fn decodes_coordinates_without_altitude() {
        let q = decode("Q) EDWW/QOBCE/V/M/E//5230N01320E010").expect("Q-line should decode");

        assert_eq!(q.category(), Category::Obstruction);
        assert_eq!(q.lower_fl, 0);
        assert_eq!(q.upper_fl, 0);
        assert_eq!(q.raw_coords.as_deref(), Some("5230N01320E"));
        assert_eq!(q.radius_nm, 10);
        assert_eq!(q.coordinate(), Some((13.0 + 20.0 / 60.0, 52.5)));
    }

    #[test]
    fn rejects_text_without_qline() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("RWY 04L/22R CLSD"), None);
        assert_eq!(decode("Q) CZEG/XFAXX/IV/NBO/A/000/999/5319N11335W005"), None);
        assert_eq!(decode("Q) czeg/QFAXX/IV/NBO/A/000/999/5319N11335W005"), None);
    }

    #[test]
    fn parses_qcode() {
        assert!(QCode::parse("QMRLC").is_some());
        assert!(QCode::parse("QMRL").is_none());
        assert!(QCode::parse("XMRLC").is_none());
        assert!(QCode::parse("Qmrlc").is_none());
        assert_eq!(QCode::parse("QMXLT").map(|q| q.condition_label()), Some(Some("Limited")));
        assert_eq!(QCode::parse("QMXXX").and_then(|q| q.condition_label()), None);
    }

    #[test]
    fn converts_qcode_from_string() {
        let q = QCode::try_from("QMRLC".to_string()).expect("Q-code should convert");
        assert_eq!(q.subject(), "MR");
        assert_eq!(String::from(q), "QMRLC");

        assert!(matches!(
            QCode::try_from("Q".to_string()),
            Err(Error::InvalidVariant { field: "Q-code", .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_only_valid_qcodes() {
        let q: QCode = serde_json::from_str("\"QMRLC\"").expect("Q-code should deserialize");
        assert_eq!(q.condition(), "LC");
        assert_eq!(serde_json::to_string(&q).ok().as_deref(), Some("\"QMRLC\""));

        assert!(serde_json::from_str::<QCode>("\"Q\"").is_err());
        assert!(serde_json::from_str::<QCode>("\"QmrLC\"").is_err());
        assert!(serde_json::from_str::<QLine>(
            r#"{"fir":"KZAU","q_code":"Q","traffic":"","purpose":"","scope":"",
                "lower_fl":0,"upper_fl":0,"raw_coords":null,"radius_nm":0}"#
        )
        .is_err());
    }
}
