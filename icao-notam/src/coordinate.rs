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

//! Coordinate token of the Q-line.
//!
//! The token is written as `DDMM[N|S]DDDMM[E|W]` with a resolution of one
//! minute of arc, e.g. `5319N11335W` for 53°19'N 113°35'W.

use log::trace;

use crate::field::fixed;
use crate::{Error, FixedField};

/// The latitude group `DDMM[N|S]`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Latitude<'a>(&'a [u8; 5]);

impl<'a> FixedField<'a> for Latitude<'a> {
    const LENGTH: usize = 5;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        fixed(bytes).map(Self)
    }
}

impl Latitude<'_> {
    /// Returns the latitude as decimal in the range -90.0 (south) to 90.0 (north).
    ///
    /// # Errors
    ///
    /// Returns an error if the digits are not numeric or if the hemisphere is
    /// neither `N` nor `S`.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let deg = parse_numeric!(2, u8, &self.0[0..2])? as f64;
        let min = parse_numeric!(2, u8, &self.0[2..4])? as f64;

        let decimal = deg + min / 60.0;

        match self.0[4] {
            b'N' => Ok(decimal),
            b'S' => Ok(-decimal),
            hem => Err(Error::InvalidCharacter {
                field: "Latitude",
                byte: hem,
                expected: "N or S",
            }),
        }
    }
}

/// The longitude group `DDDMM[E|W]`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Longitude<'a>(&'a [u8; 6]);

impl<'a> FixedField<'a> for Longitude<'a> {
    const LENGTH: usize = 6;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        fixed(bytes).map(Self)
    }
}

impl Longitude<'_> {
    /// Returns the longitude as decimal in the range -180.0 (west) to 180.0 (east).
    ///
    /// # Errors
    ///
    /// Returns an error if the digits are not numeric or if the hemisphere is
    /// neither `E` nor `W`.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let deg = parse_numeric!(3, u16, &self.0[0..3])? as f64;
        let min = parse_numeric!(2, u8, &self.0[3..5])? as f64;

        let decimal = deg + min / 60.0;

        match self.0[5] {
            b'E' => Ok(decimal),
            b'W' => Ok(-decimal),
            hem => Err(Error::InvalidCharacter {
                field: "Longitude",
                byte: hem,
                expected: "E or W",
            }),
        }
    }
}

/// The full coordinate token `DDMM[N|S]DDDMM[E|W]`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Coordinate<'a> {
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
}

impl<'a> FixedField<'a> for Coordinate<'a> {
    const LENGTH: usize = Latitude::LENGTH + Longitude::LENGTH;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        let token: &[u8; 11] = fixed(bytes)?;
        Ok(Self {
            latitude: Latitude::from_bytes(&token[..Latitude::LENGTH])?,
            longitude: Longitude::from_bytes(&token[Latitude::LENGTH..])?,
        })
    }
}

impl Coordinate<'_> {
    /// Returns `(longitude, latitude)` in decimal degrees.
    pub fn as_decimal(&self) -> Result<(f64, f64), Error> {
        Ok((self.longitude.as_decimal()?, self.latitude.as_decimal()?))
    }
}

/// Converts a coordinate token into `(longitude, latitude)` in decimal degrees.
///
/// Returns `None` if the token is empty or doesn't start with the fixed-width
/// pattern. The decimal values are not range checked.
///
/// # Examples
///
/// ```
/// let (lon, lat) = icao_notam::convert_coordinate("5319N11335W").unwrap();
/// assert!((lon - -113.5833).abs() < 1e-4);
/// assert!((lat - 53.3167).abs() < 1e-4);
/// ```
pub fn convert_coordinate(token: &str) -> Option<(f64, f64)> {
    match Coordinate::from_bytes(token.as_bytes()).and_then(|c| c.as_decimal()) {
        Ok(decimal) => Some(decimal),
        Err(e) => {
            trace!("coordinate token {token:?} not converted: {e}");
            None
        }
    }
}

/// Encodes `(longitude, latitude)` as coordinate token rounded to the nearest
/// minute of arc.
pub fn encode_coordinate(longitude: f64, latitude: f64) -> String {
    let (lat_deg, lat_min) = deg_min(latitude);
    let (lon_deg, lon_min) = deg_min(longitude);
    let ns = if latitude < 0.0 { 'S' } else { 'N' };
    let ew = if longitude < 0.0 { 'W' } else { 'E' };

    format!("{lat_deg:02}{lat_min:02}{ns}{lon_deg:03}{lon_min:02}{ew}")
}

fn deg_min(value: f64) -> (u32, u32) {
    let minutes = (value.abs() * 60.0).round() as u32;
    (minutes / 60, minutes % 60)
}
