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

use std::f64::consts::PI;

use geo::{Coord, LineString, Point, Polygon};

/// Number of vertices used to approximate a circle.
pub const DEFAULT_VERTICES: usize = 32;

/// Approximates the circle of `radius_nm` around `center` with a polygon.
///
/// The circle is drawn in an equirectangular projection where one nautical
/// mile is one minute of latitude. The longitude offsets are stretched by
/// the cosine of the center latitude. This is accurate enough for the small
/// radii of a NOTAM but not geodesic.
///
/// The exterior ring has `vertices + 1` points with the first repeated as
/// last. Returns `None` if the radius isn't positive, less than three
/// vertices are requested or the ring leaves the valid longitude and
/// latitude range, as it does near the poles and across the antimeridian.
///
/// # Examples
///
/// ```
/// use geo::Point;
///
/// let circle = notam::circle_polygon(Point::new(-87.9, 41.98), 5.0, 32).unwrap();
/// assert_eq!(circle.exterior().0.len(), 33);
/// ```
pub fn circle_polygon(center: Point<f64>, radius_nm: f64, vertices: usize) -> Option<Polygon<f64>> {
    if radius_nm <= 0.0 || vertices < 3 {
        return None;
    }

    let radius_deg = radius_nm / 60.0;
    let lat_scale = center.y().to_radians().cos();

    let mut coords: Vec<Coord<f64>> = (0..vertices)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / vertices as f64;
            Coord {
                x: center.x() + radius_deg * angle.cos() / lat_scale,
                y: center.y() + radius_deg * angle.sin(),
            }
        })
        .collect();

    if !coords.iter().all(in_range) {
        return None;
    }
    coords.push(coords[0]);

    Some(Polygon::new(LineString::from(coords), Vec::new()))
}

fn in_range(coord: &Coord<f64>) -> bool {
    (-180.0..=180.0).contains(&coord.x) && (-90.0..=90.0).contains(&coord.y)
}
