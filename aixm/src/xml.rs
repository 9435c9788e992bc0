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

//! Serde-deserializable structs that mirror the AIXM 5.1 event XML structure.
//!
//! These are internal types used by the parser. They map directly to the XML
//! nesting of one `message:hasMember` element by local element name, then get
//! converted into the flat public [`Notam`](crate::Notam) type.
//!
//! Every level is optional so that a member of another feature type
//! deserializes fine and is only rejected by the conversion.

use serde::Deserialize;

/// Text content of an element that may carry attributes, e.g.
/// `<gml:identifier codeSpace="urn:uuid:">...</gml:identifier>`.
#[derive(Debug, Deserialize)]
pub(crate) struct Text {
    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

// ---------------------------------------------------------------------------
// Member and event
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct MemberXml {
    #[serde(rename = "Event", default)]
    pub event: Option<EventXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub identifier: Option<Text>,
    #[serde(rename = "timeSlice", default)]
    pub time_slices: Vec<EventTimeSliceWrapper>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventTimeSliceWrapper {
    #[serde(rename = "EventTimeSlice", default)]
    pub inner: Option<EventTimeSlice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventTimeSlice {
    #[serde(rename = "textNOTAM", default)]
    pub text_notams: Vec<TextNotam>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TextNotam {
    #[serde(rename = "NOTAM", default)]
    pub notam: Option<NotamXml>,
}

// ---------------------------------------------------------------------------
// NOTAM
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct NotamXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(rename = "type", default)]
    pub notam_type: Option<String>,
    #[serde(default)]
    pub issued: Option<String>,
    #[serde(rename = "affectedFIR", default)]
    pub affected_fir: Option<String>,
    #[serde(rename = "selectionCode", default)]
    pub selection_code: Option<String>,
    #[serde(default)]
    pub traffic: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(rename = "minimumFL", default)]
    pub minimum_fl: Option<String>,
    #[serde(rename = "maximumFL", default)]
    pub maximum_fl: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "effectiveStart", default)]
    pub effective_start: Option<String>,
    #[serde(rename = "effectiveEnd", default)]
    pub effective_end: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub coordinates: Option<String>,
    #[serde(default)]
    pub radius: Option<String>,
}
