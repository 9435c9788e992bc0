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

//! Public NOTAM type yielded by the [`Notams`](crate::Notams) iterator.
//!
//! A digital NOTAM is wrapped into an `Event` feature whose time slice carries
//! a `textNOTAM`. The parser walks that nesting internally and converts each
//! NOTAM into the flat [`Notam`] so callers never deal with XML structure.
//! Values are kept as they appear in the message. Only the radius is parsed
//! since it's an integer by schema.

/// A NOTAM parsed from the `event:NOTAM` element of an AIXM event message.
///
/// # Examples
///
/// ```no_run
/// # let data = vec![];
/// for result in aixm::Notams::new(&data) {
///     let notam = result.unwrap();
///     println!("{} {}", notam.designation(), notam.location.unwrap_or_default());
/// }
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Notam {
    /// The `gml:id` of the NOTAM. If the NOTAM has none, the identifier of
    /// the enclosing event is used.
    pub id: String,
    /// Series letter, e.g. `A`.
    pub series: String,
    /// Sequence number within the series, e.g. `1234`.
    pub number: String,
    /// Two digit year, e.g. `25`.
    pub year: String,
    /// `N`ew, `R`eplace or `C`ancel.
    pub notam_type: Option<String>,
    /// Issue time as given in the message.
    pub issued: Option<String>,
    /// ICAO location indicator of the FIR.
    pub affected_fir: Option<String>,
    /// Q-code without the leading `Q`, e.g. `MRLC`.
    pub selection_code: Option<String>,
    pub traffic: Option<String>,
    pub purpose: Option<String>,
    pub scope: Option<String>,
    /// Lower limit as three digit flight level.
    pub minimum_fl: Option<String>,
    /// Upper limit as three digit flight level.
    pub maximum_fl: Option<String>,
    /// ICAO location indicator of the A) item.
    pub location: Option<String>,
    /// Center of the area of influence, e.g. `4159N08754W`.
    pub coordinates: Option<String>,
    /// Radius of the area of influence in nautical miles or `0`.
    pub radius_nm: u32,
    pub effective_start: Option<String>,
    pub effective_end: Option<String>,
    /// The full NOTAM text.
    pub text: String,
}

impl Notam {
    /// Returns the NOTAM designation, e.g. `A1234/25`.
    ///
    /// Missing parts are left out, so a NOTAM without series, number and
    /// year is designated `/`.
    pub fn designation(&self) -> String {
        format!("{}{}/{}", self.series, self.number, self.year)
    }
}
