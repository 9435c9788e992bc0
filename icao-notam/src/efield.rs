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

//! Category specific details of the free text (E-field).

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Category;

static RWY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"RWY\s+([0-9]{2}[LRC]?)(?:/([0-9]{2}[LRC]?))?").expect("valid runway regex"));
static TWY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"TWY\s+([A-Z0-9]+)").expect("valid taxiway regex"));
static HEIGHT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)(?:FT|M)\s+(AGL|AMSL)").expect("valid height regex"));

/// Reference of an obstacle height.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeightRef {
    /// Above ground level.
    Agl,
    /// Above mean sea level.
    Amsl,
}

impl HeightRef {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agl => "AGL",
            Self::Amsl => "AMSL",
        }
    }
}

impl fmt::Display for HeightRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Details found in the free text for the NOTAM's category.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Details {
    /// Nothing found or nothing to look for.
    #[default]
    None,
    Runway {
        rwy_id: String,
        /// The opposite runway end if written as pair, e.g. `22R` of `04L/22R`.
        rwy_id_2: Option<String>,
    },
    Taxiway {
        twy_id: String,
    },
    Obstruction {
        height_val: u32,
        height_ref: HeightRef,
    },
}

impl Details {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Scans the text for the first detail of the given category.
///
/// Only runway, taxiway and obstruction NOTAMs carry details. The scan is a
/// best effort and returns [`Details::None`] if nothing matches.
///
/// # Examples
///
/// ```
/// use icao_notam::{extract_details, Category, Details};
///
/// let details = extract_details("RWY 04L/22R CLSD", Category::Runway);
/// assert_eq!(
///     details,
///     Details::Runway { rwy_id: "04L".to_string(), rwy_id_2: Some("22R".to_string()) }
/// );
/// ```
pub fn extract_details(text: &str, category: Category) -> Details {
    match category {
        Category::Runway => RWY_RE
            .captures(text)
            .map_or(Details::None, |caps| Details::Runway {
                rwy_id: caps[1].to_string(),
                rwy_id_2: caps.get(2).map(|m| m.as_str().to_string()),
            }),

        Category::Taxiway => TWY_RE
            .captures(text)
            .map_or(Details::None, |caps| Details::Taxiway {
                twy_id: caps[1].to_string(),
            }),

        Category::Obstruction => HEIGHT_RE
            .captures(text)
            .and_then(|caps| {
                let height_val = caps[1].parse().ok()?;
                let height_ref = match &caps[2] {
                    "AGL" => HeightRef::Agl,
                    _ => HeightRef::Amsl,
                };
                Some(Details::Obstruction {
                    height_val,
                    height_ref,
                })
            })
            .unwrap_or_default(),

        Category::Aerodrome | Category::Airspace | Category::Other => Details::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_runway_pair() {
        assert_eq!(
            extract_details("KORD RWY 04L/22R CLSD", Category::Runway),
            Details::Runway {
                rwy_id: "04L".to_string(),
                rwy_id_2: Some("22R".to_string())
            }
        );
    }

    #[test]
    fn extracts_single_runway() {
        assert_eq!(
            extract_details("RWY 18 CLSD DUE WIP", Category::Runway),
            Details::Runway {
                rwy_id: "18".to_string(),
                rwy_id_2: None
            }
        );
    }

    #[test]
    fn extracts_taxiway() {
        assert_eq!(
            extract_details("TWY B2 BTN TWY A AND RWY 09 CLSD", Category::Taxiway),
            Details::Taxiway {
                twy_id: "B2".to_string()
            }
        );
    }

    #[test]
    fn extracts_obstacle_height() {
        assert_eq!(
            extract_details("OBST CRANE 4228N07117W 250FT AGL 380FT AMSL", Category::Obstruction),
            Details::Obstruction {
                height_val: 250,
                height_ref: HeightRef::Agl
            }
        );
        assert_eq!(
            extract_details("WIND TURBINE 120M AMSL LGT", Category::Obstruction),
            Details::Obstruction {
                height_val: 120,
                height_ref: HeightRef::Amsl
            }
        );
    }

    #[test]
    fn only_scans_for_active_category() {
        let text = "RWY 04L/22R TWY A CLSD 100FT AGL";
        assert!(extract_details(text, Category::Aerodrome).is_empty());
        assert!(extract_details(text, Category::Airspace).is_empty());
        assert!(extract_details(text, Category::Other).is_empty());
        assert!(matches!(
            extract_details(text, Category::Taxiway),
            Details::Taxiway { .. }
        ));
    }

    #[test]
    fn yields_nothing_without_match() {
        assert!(extract_details("AD CLSD", Category::Runway).is_empty());
        assert!(extract_details("APRON CLSD", Category::Taxiway).is_empty());
        assert!(extract_details("CRANE LGT U/S", Category::Obstruction).is_empty());
        assert!(extract_details("99999999999FT AGL", Category::Obstruction).is_empty());
    }
}
