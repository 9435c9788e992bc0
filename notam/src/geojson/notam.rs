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

use geo::BoundingRect;
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use icao_notam::{Category, Details};

use super::geom::rect_to_bbox;
use crate::geom::{circle_polygon, DEFAULT_VERTICES};
use crate::record::NotamRecord;

/// Options of the feature geometry.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FeatureOptions {
    /// Vertices of the polygon that approximates the area of influence.
    pub vertices: usize,
    /// Radius in nautical miles up to which a NOTAM is drawn as point.
    pub point_radius_nm: f64,
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTICES,
            point_radius_nm: 0.5,
        }
    }
}

impl NotamRecord {
    /// Returns the record as GeoJSON feature.
    ///
    /// The geometry is the location as point or, if the radius exceeds
    /// [`FeatureOptions::point_radius_nm`], a polygon approximating the area
    /// of influence. Records without location have no geometry.
    ///
    /// The properties hold the record's fields, the category specific details
    /// and the `longitude` and `latitude` of the location.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn to_geojson(&self, options: &FeatureOptions) -> Feature {
        let (geometry, bbox) = match self.location {
            Some(center) if f64::from(self.radius_nm) > options.point_radius_nm => {
                match circle_polygon(center, f64::from(self.radius_nm), options.vertices) {
                    Some(polygon) => (
                        Some(Geometry::new(Value::from(&polygon))),
                        polygon.bounding_rect().map(rect_to_bbox),
                    ),
                    None => (Some(Geometry::new(Value::from(&center))), None),
                }
            }
            Some(center) => (Some(Geometry::new(Value::from(&center))), None),
            None => (None, None),
        };

        Feature {
            bbox,
            geometry,
            id: Some(Id::String(self.id.clone())),
            properties: Some(self.properties()),
            foreign_members: None,
        }
    }

    fn properties(&self) -> JsonObject {
        let mut props = JsonObject::new();
        let mut set = |key: &str, value: JsonValue| {
            props.insert(key.to_string(), value);
        };

        set("id", self.id.clone().into());
        set("number", self.number.clone().into());
        set("text", self.text.clone().into());
        set("category", self.category.as_str().into());
        set("radius_nm", self.radius_nm.into());

        if let Some(code) = &self.location_code {
            set("location_code", code.clone().into());
        }

        if let Some(q) = &self.qline {
            set("fir", q.fir.clone().into());
            set("q_code", q.q_code.as_str().into());
            set("subject_code", q.subject_code().into());
            set("condition_code", q.condition_code().into());
            if let Some(label) = q.q_code.condition_label() {
                set("condition", label.into());
            }
            set("traffic", q.traffic.clone().into());
            set("purpose", q.purpose.clone().into());
            set("scope", q.scope.clone().into());
            set("lower_fl", q.lower_fl.into());
            set("upper_fl", q.upper_fl.into());
        }

        if let Some(coords) = &self.raw_coords {
            set("raw_coords", coords.clone().into());
        }

        set("start_time", self.start_time.clone().into());
        set("end_time", self.end_time.clone().into());

        if let Some((lon, lat)) = self.lon_lat() {
            set("longitude", lon.into());
            set("latitude", lat.into());
        }

        match &self.details {
            Details::None => {}
            Details::Runway { rwy_id, rwy_id_2 } => {
                set("rwy_id", rwy_id.clone().into());
                if let Some(rwy_id_2) = rwy_id_2 {
                    set("rwy_id_2", rwy_id_2.clone().into());
                }
            }
            Details::Taxiway { twy_id } => set("twy_id", twy_id.clone().into()),
            Details::Obstruction {
                height_val,
                height_ref,
            } => {
                set("height_val", (*height_val).into());
                set("height_ref", height_ref.as_str().into());
            }
        }

        props
    }
}

/// Returns the records with a location as feature collection.
///
/// If a `filter` is given, only records of that category are collected.
///
/// # Examples
///
/// ```
/// use notam::{to_feature_collection, Category, FeatureOptions, NotamRecord};
///
/// let records = [
///     NotamRecord::from_text("1", "Q) KZAU/QMRLC/IV/NBO/A/000/999/4159N08754W005"),
///     NotamRecord::from_text("2", "Q) KZAU/QOBCE/IV/M/AE/000/003/4158N08753W001"),
///     NotamRecord::from_text("3", "RWY 09 CLSD"),
/// ];
///
/// let all = to_feature_collection(&records, None, &FeatureOptions::default());
/// assert_eq!(all.features.len(), 2);
///
/// let obstacles = to_feature_collection(
///     &records,
///     Some(Category::Obstruction),
///     &FeatureOptions::default(),
/// );
/// assert_eq!(obstacles.features.len(), 1);
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
pub fn to_feature_collection<'a, I>(
    records: I,
    filter: Option<Category>,
    options: &FeatureOptions,
) -> FeatureCollection
where
    I: IntoIterator<Item = &'a NotamRecord>,
{
    let features = records
        .into_iter()
        .filter(|record| record.location.is_some())
        .filter(|record| filter.map_or(true, |category| record.category == category))
        .map(|record| record.to_geojson(options))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
