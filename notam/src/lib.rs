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

//! NOTAM normalization.
//!
//! NOTAMs arrive either as AIXM 5.1 event messages or as ICAO text. This
//! crate turns both into a [`NotamRecord`] with a category, the details of
//! the free text, the validity and the position of the NOTAM. With the
//! `geojson` feature, records are converted into map features with a point
//! or a polygon approximating the area of influence.
//!
//! Every record is converted on its own. A field that can't be decoded is
//! left absent, and members of a document that carry no NOTAM are skipped.
//! Only a malformed document is an error.
//!
//! # Examples
//!
//! ```
//! use notam::{Category, NotamRecord};
//!
//! let record = NotamRecord::from_text(
//!     "KORD-1",
//!     "A1234/25 NOTAMN
//! Q) KZAU/QMRLC/IV/NBO/A/000/999/4159N08754W005
//! A) KORD B) 2512160925 C) 2512161200
//! E) RWY 04L/22R CLSD",
//! );
//!
//! assert_eq!(record.category, Category::Runway);
//! assert_eq!(record.end_time.as_deref(), Some("2025-12-16T12:00:00"));
//!
//! # #[cfg(feature = "geojson")]
//! # {
//! let feature = record.to_geojson(&notam::FeatureOptions::default());
//! assert!(feature.geometry.is_some());
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod convert;
mod error;
mod geom;
mod record;

#[cfg(feature = "geojson")]
mod geojson;

pub use convert::{load_batch, parse_document, parse_message, Records};
pub use error::Error;
pub use geom::{circle_polygon, DEFAULT_VERTICES};
pub use icao_notam::{Category, Details, HeightRef, QCode, QLine};
pub use record::NotamRecord;

#[cfg(feature = "geojson")]
pub use self::geojson::{to_feature_collection, FeatureOptions};
