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

//! ICAO NOTAM text parser.
//!
//! This crate decodes the parts of a freeform NOTAM that are needed to place
//! it on a map: the qualifier line ([Q-line](decode)), the details of the
//! free text ([E-field](extract_details)), the validity period ([B) and C)
//! items](parse_validity)) and the [coordinate token](convert_coordinate).
//!
//! Real world NOTAM text is inconsistent, so every operation is a best effort
//! that yields no result instead of an error if a field can't be decoded.
//!
//! # Examples
//!
//! ```
//! use icao_notam::{decode, extract_details, parse_validity, Category, Details};
//!
//! let text = "A1234/25 NOTAMN
//! Q) KZAU/QMRLC/IV/NBO/A/000/999/4159N08754W005
//! A) KORD B) 2512160925 C) 2512161200
//! E) RWY 04L/22R CLSD";
//!
//! let q = decode(text).unwrap();
//! assert_eq!(q.category(), Category::Runway);
//!
//! let (lon, lat) = q.coordinate().unwrap();
//! println!("{} at {lat:.4}, {lon:.4}", q.fir);
//!
//! let details = extract_details(text, q.category());
//! assert!(matches!(details, Details::Runway { .. }));
//!
//! let validity = parse_validity(text);
//! assert_eq!(validity.end_iso().as_deref(), Some("2025-12-16T12:00:00"));
//! ```

#[macro_use]
mod macros;

mod category;
mod coordinate;
mod efield;
mod error;
mod field;
mod qline;
mod validity;

pub use category::Category;
pub use coordinate::{convert_coordinate, encode_coordinate, Coordinate, Latitude, Longitude};
pub use efield::{extract_details, Details, HeightRef};
pub use error::Error;
pub use field::FixedField;
pub use qline::{decode, QCode, QLine};
pub use validity::{decode_timestamp, parse_validity, DateTimeGroup, Validity};
