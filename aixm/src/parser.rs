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

use std::iter::FusedIterator;

use log::{debug, trace};
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::error::Error;
use crate::notam::Notam;
use crate::{ns, xml};

/// Streaming iterator over the NOTAMs of an AIXM event message.
///
/// Yields one [`Notam`] for every `message:hasMember` that wraps an event
/// with a `textNOTAM`. Members of other features are silently skipped, as
/// are members whose NOTAM can't be identified.
///
/// The iterator yields an error and stops if the document is malformed.
/// NOTAMs yielded before the error are valid on their own.
///
/// # Examples
///
/// ```
/// use aixm::Notams;
///
/// let xml = br#"
///   <message:AIXMBasicMessage
///     xmlns:event="http://www.aixm.aero/schema/5.1/event"
///     xmlns:gml="http://www.opengis.net/gml/3.2"
///     xmlns:message="http://www.aixm.aero/schema/5.1/message">
///     <message:hasMember>
///       <event:Event gml:id="EVENT_1">
///         <event:timeSlice>
///           <event:EventTimeSlice gml:id="ETS_1">
///             <event:textNOTAM>
///               <event:NOTAM gml:id="NOTAM_1">
///                 <event:series>A</event:series>
///                 <event:number>1234</event:number>
///                 <event:year>25</event:year>
///                 <event:location>KORD</event:location>
///                 <event:text>RWY 04L/22R CLSD</event:text>
///               </event:NOTAM>
///             </event:textNOTAM>
///           </event:EventTimeSlice>
///         </event:timeSlice>
///       </event:Event>
///     </message:hasMember>
///   </message:AIXMBasicMessage>"#;
///
/// let notams: Vec<_> = Notams::new(&xml[..])
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(notams.len(), 1);
/// assert_eq!(notams[0].designation(), "A1234/25");
/// ```
pub struct Notams<'a> {
    reader: NsReader<&'a [u8]>,
    data: &'a [u8],
    depth: usize,
    done: bool,
}

impl<'a> Notams<'a> {
    /// Creates a new `Notams` iterator from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        let mut reader = NsReader::from_reader(data);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            data,
            depth: 0,
            done: false,
        }
    }

    fn fail(&mut self, e: Error) -> Option<Result<Notam, Error>> {
        self.done = true;
        Some(Err(e))
    }
}

impl<'a> Iterator for Notams<'a> {
    type Item = Result<Notam, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let (is_member, event) = match self.reader.read_resolved_event() {
                Ok((resolved, event)) => {
                    let is_member = match &event {
                        Event::Start(e) => {
                            e.local_name().as_ref() == b"hasMember" && in_message_ns(&resolved)
                        }
                        _ => false,
                    };
                    (is_member, event)
                }
                Err(e) => return self.fail(e.into()),
            };

            match event {
                Event::Start(ref e) if is_member => {
                    // Capture the start tag text and read the subtree content.
                    let tag = String::from_utf8_lossy(e.as_ref()).to_string();
                    let end = e.to_end().into_owned();
                    let member = self
                        .reader
                        .read_to_end(end.name())
                        .map_err(Error::from)
                        .and_then(|span| {
                            let content = std::str::from_utf8(
                                &self.data[span.start as usize..span.end as usize],
                            )?;
                            let end_name = end.name();
                            let end_tag = std::str::from_utf8(end_name.as_ref())?;
                            Ok(format!("<{tag}>{content}</{end_tag}>"))
                        });

                    let xml = match member {
                        Ok(xml) => xml,
                        Err(e) => return self.fail(e),
                    };

                    match deserialize_notam(&xml) {
                        Ok(notam) => {
                            trace!("read NOTAM {} ({})", notam.designation(), notam.id);
                            return Some(Ok(notam));
                        }
                        Err(e) => {
                            debug!("skipping member: {e}");
                            continue;
                        }
                    }
                }
                Event::Start(_) => self.depth += 1,
                Event::End(_) => self.depth = self.depth.saturating_sub(1),
                Event::Text(_) | Event::CData(_) if self.depth == 0 => {
                    return self.fail(Error::Malformed("text outside of the root element"));
                }
                Event::Eof if self.depth > 0 => {
                    return self.fail(Error::Malformed("unexpected end of document"));
                }
                Event::Eof => {
                    self.done = true;
                    return None;
                }
                _ => continue,
            }
        }
    }
}

impl FusedIterator for Notams<'_> {}

/// Whether a `hasMember` element belongs to the message namespace. Elements
/// with an undeclared prefix are accepted too, so that fragments cut out of
/// a message can be read.
fn in_message_ns(resolved: &ResolveResult) -> bool {
    match resolved {
        ResolveResult::Bound(Namespace(uri)) => *uri == ns::MESSAGE.as_bytes(),
        ResolveResult::Unbound | ResolveResult::Unknown(_) => true,
    }
}

/// Deserializes a member XML fragment into the public [`Notam`] type.
fn deserialize_notam(xml: &str) -> Result<Notam, Error> {
    let x: xml::MemberXml = quick_xml::de::from_str(xml)?;
    Notam::try_from(x)
}

/// Returns the trimmed value or `None` if there is nothing left.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Conversion from XML structs to the public NOTAM type
// ---------------------------------------------------------------------------

impl TryFrom<xml::MemberXml> for Notam {
    type Error = Error;

    fn try_from(x: xml::MemberXml) -> Result<Self, Self::Error> {
        let event = x.event.ok_or(Error::MissingField("Event"))?;
        let event_id = non_empty(event.identifier.and_then(|i| i.value)).or(non_empty(event.id));

        let n = event
            .time_slices
            .into_iter()
            .filter_map(|ts| ts.inner)
            .flat_map(|ts| ts.text_notams)
            .find_map(|t| t.notam)
            .ok_or(Error::MissingField("textNOTAM"))?;

        let id = non_empty(n.id)
            .or(event_id)
            .ok_or(Error::MissingField("gml:id"))?;

        Ok(Notam {
            id,
            series: non_empty(n.series).unwrap_or_default(),
            number: non_empty(n.number).unwrap_or_default(),
            year: non_empty(n.year).unwrap_or_default(),
            notam_type: non_empty(n.notam_type),
            issued: non_empty(n.issued),
            affected_fir: non_empty(n.affected_fir),
            selection_code: non_empty(n.selection_code),
            traffic: non_empty(n.traffic),
            purpose: non_empty(n.purpose),
            scope: non_empty(n.scope),
            minimum_fl: non_empty(n.minimum_fl),
            maximum_fl: non_empty(n.maximum_fl),
            location: non_empty(n.location),
            coordinates: non_empty(n.coordinates),
            radius_nm: n
                .radius
                .as_deref()
                .and_then(|r| r.trim().parse().ok())
                .unwrap_or(0),
            effective_start: non_empty(n.effective_start),
            effective_end: non_empty(n.effective_end),
            text: n.text.unwrap_or_default(),
        })
    }
}
