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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// NOTAM category derived from the subject of the Q-code.
///
/// The mapping from subject to category is a closed table. Any subject not
/// listed maps to [`Category::Other`].
///
/// | Subject | Category        |
/// |---------|-----------------|
/// | `MR`    | [`Runway`]      |
/// | `MX`    | [`Taxiway`]     |
/// | `FA`    | [`Aerodrome`]   |
/// | `OB`    | [`Obstruction`] |
/// | `RT`    | [`Airspace`]    |
///
/// [`Runway`]: Category::Runway
/// [`Taxiway`]: Category::Taxiway
/// [`Aerodrome`]: Category::Aerodrome
/// [`Obstruction`]: Category::Obstruction
/// [`Airspace`]: Category::Airspace
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    Runway,
    Taxiway,
    Aerodrome,
    Obstruction,
    Airspace,
    #[default]
    Other,
}

impl Category {
    /// Classifies the two letter subject of a Q-code.
    pub fn from_subject(subject: &str) -> Self {
        match subject {
            "MR" => Self::Runway,
            "MX" => Self::Taxiway,
            "FA" => Self::Aerodrome,
            "OB" => Self::Obstruction,
            "RT" => Self::Airspace,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Runway => "Runway",
            Self::Taxiway => "Taxiway",
            Self::Aerodrome => "Aerodrome",
            Self::Obstruction => "Obstruction",
            Self::Airspace => "Airspace",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Runway" => Ok(Self::Runway),
            "Taxiway" => Ok(Self::Taxiway),
            "Aerodrome" => Ok(Self::Aerodrome),
            "Obstruction" => Ok(Self::Obstruction),
            "Airspace" => Ok(Self::Airspace),
            "Other" => Ok(Self::Other),
            _ => Err(Error::InvalidVariant {
                field: "Category",
                bytes: s.as_bytes().to_vec(),
                expected: "Runway, Taxiway, Aerodrome, Obstruction, Airspace or Other",
            }),
        }
    }
}
