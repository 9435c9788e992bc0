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

//! Conversion of an AIXM [`Notam`](aixm::Notam) into a [`NotamRecord`].
//!
//! The qualifier line is built from the selection fields of the message. If
//! the message has none, the Q-line is decoded from the NOTAM text instead.
//! Times are taken from the message as they are, since AIXM carries them as
//! ISO 8601 timestamps already.

use icao_notam::{convert_coordinate, decode, extract_details, Category, QCode, QLine};

use crate::record::{point, NotamRecord};

impl From<aixm::Notam> for NotamRecord {
    fn from(notam: aixm::Notam) -> Self {
        let number = notam.designation();
        let qline = selection_qline(&notam).or_else(|| decode(&notam.text));
        let category = qline.as_ref().map_or(Category::Other, QLine::category);
        let details = extract_details(&notam.text, category);

        // The position of the message wins over the one of the Q-line.
        let (raw_coords, radius_nm) = match notam.coordinates {
            Some(coords) => (Some(coords), notam.radius_nm),
            None => qline
                .as_ref()
                .map_or((None, 0), |q| (q.raw_coords.clone(), u32::from(q.radius_nm))),
        };
        let location = raw_coords
            .as_deref()
            .and_then(convert_coordinate)
            .and_then(point);

        NotamRecord {
            number,
            id: notam.id,
            text: notam.text,
            location_code: notam.location,
            category,
            qline,
            raw_coords,
            radius_nm,
            start_time: notam.effective_start,
            end_time: notam.effective_end,
            location,
            details,
        }
    }
}

/// Builds the Q-line from the selection fields of the message. Fields the
/// message leaves out are empty, as elided fields of a text Q-line are.
fn selection_qline(notam: &aixm::Notam) -> Option<QLine> {
    let code = notam.selection_code.as_deref()?;
    let q_code = QCode::parse(code).or_else(|| QCode::parse(&format!("Q{code}")))?;

    Some(QLine {
        fir: notam.affected_fir.clone().unwrap_or_default(),
        q_code,
        traffic: notam.traffic.clone().unwrap_or_default(),
        purpose: notam.purpose.clone().unwrap_or_default(),
        scope: notam.scope.clone().unwrap_or_default(),
        lower_fl: flight_level(notam.minimum_fl.as_deref()),
        upper_fl: flight_level(notam.maximum_fl.as_deref()),
        raw_coords: notam.coordinates.clone(),
        radius_nm: u16::try_from(notam.radius_nm).unwrap_or(0),
    })
}

fn flight_level(value: Option<&str>) -> u16 {
    value.and_then(|fl| fl.parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use icao_notam::{Details, HeightRef};

    use super::*;

    fn notam() -> aixm::Notam {
        aixm::Notam {
            id: "NOTAM_1".to_string(),
            series: "A".to_string(),
            number: "1234".to_string(),
            year: "25".to_string(),
            location: Some("KORD".to_string()),
            coordinates: Some("4159N08754W".to_string()),
            radius_nm: 5,
            effective_start: Some("2025-12-16T09:25:00Z".to_string()),
            text: "RWY 04L/22R CLSD".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn uses_selection_fields() {
        let record = NotamRecord::from(aixm::Notam {
            affected_fir: Some("KZAU".to_string()),
            selection_code: Some("QMRLC".to_string()),
            traffic: Some("IV".to_string()),
            purpose: Some("NBO".to_string()),
            scope: Some("A".to_string()),
            minimum_fl: Some("000".to_string()),
            maximum_fl: Some("999".to_string()),
            ..notam()
        });

        assert_eq!(record.id, "NOTAM_1");
        assert_eq!(record.number, "A1234/25");
        assert_eq!(record.category, Category::Runway);
        assert_eq!(record.fir(), Some("KZAU"));
        assert_eq!(record.subject_code(), Some("MR"));
        assert_eq!(record.condition_code(), Some("LC"));
        assert_eq!(record.qline.as_ref().map(|q| q.upper_fl), Some(999));
        assert_eq!(
            record.details,
            Details::Runway {
                rwy_id: "04L".to_string(),
                rwy_id_2: Some("22R".to_string())
            }
        );
        assert_eq!(record.start_time.as_deref(), Some("2025-12-16T09:25:00Z"));
        assert_eq!(record.end_time, None);
    }

    #[test]
    fn accepts_selection_code_without_q() {
        let record = NotamRecord::from(aixm::Notam {
            selection_code: Some("OBCE".to_string()),
            text: "OBST CRANE 250FT AGL".to_string(),
            ..notam()
        });

        assert_eq!(record.category, Category::Obstruction);
        assert_eq!(record.qline.as_ref().map(|q| q.fir.as_str()), Some(""));
        assert_eq!(record.fir(), None);
        assert_eq!(record.location_code.as_deref(), Some("KORD"));
        assert_eq!(
            record.details,
            Details::Obstruction {
                height_val: 250,
                height_ref: HeightRef::Agl
            }
        );
    }

    #[test]
    fn decodes_qline_of_text() {
        let record = NotamRecord::from(aixm::Notam {
            text: "Q) KZAU/QMXLC/IV/NBO/A/000/999/4159N08754W005 E) TWY K CLSD".to_string(),
            ..notam()
        });

        assert_eq!(record.category, Category::Taxiway);
        assert_eq!(
            record.details,
            Details::Taxiway {
                twy_id: "K".to_string()
            }
        );
    }

    #[test]
    fn other_without_qcode() {
        let record = NotamRecord::from(notam());

        assert_eq!(record.category, Category::Other);
        assert_eq!(record.qline, None);
        assert!(record.details.is_empty());
    }

    #[test]
    fn converts_location() {
        let record = NotamRecord::from(notam());
        let (lon, lat) = record.lon_lat().unwrap();

        assert!((lon - -87.9).abs() < 1e-9);
        assert!((lat - (41.0 + 59.0 / 60.0)).abs() < 1e-9);
        assert_eq!(record.raw_coords.as_deref(), Some("4159N08754W"));
        assert_eq!(record.radius_nm, 5);
    }

    #[test]
    fn malformed_coordinates_leave_no_location() {
        let record = NotamRecord::from(aixm::Notam {
            coordinates: Some("41N087W".to_string()),
            ..notam()
        });

        assert_eq!(record.location, None);
        assert_eq!(record.raw_coords.as_deref(), Some("41N087W"));
    }

    #[test]
    fn falls_back_to_qline_position() {
        let record = NotamRecord::from(aixm::Notam {
            coordinates: None,
            radius_nm: 0,
            text: "Q) CZEG/QFAXX/IV/NBO/A/000/999/5319N11335W025".to_string(),
            ..notam()
        });

        assert_eq!(record.raw_coords.as_deref(), Some("5319N11335W"));
        assert_eq!(record.radius_nm, 25);
        assert!(record.location.is_some());
    }
}
