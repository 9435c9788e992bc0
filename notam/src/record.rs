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

use geo::Point;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use icao_notam::{Category, Details, QLine};

/// A NOTAM normalized from either an AIXM event message or the ICAO text.
///
/// Records are created once by the conversion functions and never changed
/// afterwards. Everything but the identifier, the number and the text is
/// derived and may be absent.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NotamRecord {
    /// Opaque identifier, carried through unmodified.
    pub id: String,
    /// NOTAM number, e.g. `A1234/25`.
    pub number: String,
    pub text: String,
    /// ICAO location indicator of the aerodrome or FIR.
    pub location_code: Option<String>,
    pub category: Category,
    /// The decoded qualifier line if one was found.
    pub qline: Option<QLine>,
    /// The coordinate token the location was decoded from.
    pub raw_coords: Option<String>,
    pub radius_nm: u32,
    /// Start of validity as ISO 8601 timestamp.
    pub start_time: Option<String>,
    /// End of validity as ISO 8601 timestamp. Absent for permanent NOTAMs.
    pub end_time: Option<String>,
    /// Center of the area of influence.
    pub location: Option<Point<f64>>,
    pub details: Details,
}

impl NotamRecord {
    /// Returns the FIR of the Q-line unless it is elided.
    pub fn fir(&self) -> Option<&str> {
        self.qline
            .as_ref()
            .map(|q| q.fir.as_str())
            .filter(|fir| !fir.is_empty())
    }

    pub fn q_code(&self) -> Option<&str> {
        self.qline.as_ref().map(|q| q.q_code.as_str())
    }

    pub fn subject_code(&self) -> Option<&str> {
        self.qline.as_ref().map(QLine::subject_code)
    }

    pub fn condition_code(&self) -> Option<&str> {
        self.qline.as_ref().map(QLine::condition_code)
    }

    /// Returns the longitude and latitude of the location.
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        self.location.map(|p| (p.x(), p.y()))
    }

    /// Whether the NOTAM is in force without end.
    pub fn is_permanent(&self) -> bool {
        self.end_time.is_none()
    }
}

/// Returns the point of a decoded `(longitude, latitude)` pair if it's a
/// valid position.
pub(crate) fn point(lon_lat: (f64, f64)) -> Option<Point<f64>> {
    let (lon, lat) = lon_lat;

    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
        Some(Point::new(lon, lat))
    } else {
        debug!("dropping position out of range: {lat}, {lon}");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positions_in_range() {
        assert_eq!(point((-113.5, 53.3)), Some(Point::new(-113.5, 53.3)));
        assert_eq!(point((180.0, -90.0)), Some(Point::new(180.0, -90.0)));
    }

    #[test]
    fn rejects_positions_out_of_range() {
        // 9959N is a well formed token but no latitude
        assert_eq!(point((10.0, 99.98)), None);
        assert_eq!(point((-180.5, 0.0)), None);
    }

    #[test]
    fn default_record_is_other_without_location() {
        let record = NotamRecord::default();

        assert_eq!(record.category, Category::Other);
        assert_eq!(record.fir(), None);
        assert_eq!(record.lon_lat(), None);
        assert!(record.is_permanent());
    }
}
