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

//! Conversions of raw NOTAM input into [`NotamRecord`]s.
//!
//! AIXM event messages are read either as a whole document ([`parse_document`]
//! and [`load_batch`]) or one message at a time as they arrive from a feed
//! ([`parse_message`]). Plain ICAO text is converted by
//! [`NotamRecord::from_text`].

use std::iter::FusedIterator;

use log::{debug, error};

use crate::error::Error;
use crate::record::NotamRecord;

mod aixm;
mod text;

/// Lazy iterator over the records of an AIXM document.
///
/// Records are yielded in document order. If the document turns out to be
/// malformed, an error is yielded and the iteration ends.
pub struct Records<'a> {
    notams: ::aixm::Notams<'a>,
}

impl Iterator for Records<'_> {
    type Item = Result<NotamRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.notams
            .next()
            .map(|result| result.map(NotamRecord::from).map_err(Error::from))
    }
}

impl FusedIterator for Records<'_> {}

/// Reads the NOTAMs of an AIXM event message document.
///
/// Nothing is read until the returned iterator is advanced. Reading the same
/// document twice yields the same records.
///
/// # Examples
///
/// ```no_run
/// let data = std::fs::read("notams.xml").unwrap();
///
/// for record in notam::parse_document(&data) {
///     match record {
///         Ok(record) => println!("{} {}", record.number, record.category),
///         Err(e) => eprintln!("{e}"),
///     }
/// }
/// ```
pub fn parse_document(data: &[u8]) -> Records<'_> {
    Records {
        notams: ::aixm::Notams::new(data),
    }
}

/// Reads all NOTAMs of an AIXM document at once.
///
/// # Errors
///
/// Returns an error if the document is malformed. No records are returned in
/// that case.
pub fn load_batch(data: &[u8]) -> Result<Vec<NotamRecord>, Error> {
    let records = parse_document(data).collect::<Result<Vec<_>, _>>()?;
    debug!("loaded {} NOTAMs", records.len());
    Ok(records)
}

/// Reads a single message body as delivered by a NOTAM feed.
///
/// The body may be a complete document or just its members. An empty body
/// yields no records. A malformed body is logged and yields no records, so
/// that a feed consumer can move on to the next message.
pub fn parse_message(body: &str) -> Vec<NotamRecord> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    match load_batch(body.as_bytes()) {
        Ok(records) => records,
        Err(e) => {
            error!("dropping message: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMBER: &str = r#"
      <message:hasMember>
        <event:Event gml:id="EVENT_1">
          <event:timeSlice>
            <event:EventTimeSlice gml:id="ETS_1">
              <event:textNOTAM>
                <event:NOTAM gml:id="NOTAM_1">
                  <event:series>A</event:series>
                  <event:number>0042</event:number>
                  <event:year>26</event:year>
                  <event:location>KBOS</event:location>
                  <event:text>TWY B2 CLSD</event:text>
                  <event:coordinates>4222N07100W</event:coordinates>
                </event:NOTAM>
              </event:textNOTAM>
            </event:EventTimeSlice>
          </event:timeSlice>
        </event:Event>
      </message:hasMember>"#;

    #[test]
    fn empty_message_yields_nothing() {
        assert!(parse_message("").is_empty());
        assert!(parse_message(" \n\t ").is_empty());
    }

    #[test]
    fn message_without_wrapper() {
        let records = parse_message(MEMBER);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].number, "A0042/26");
        assert_eq!(records[0].location_code.as_deref(), Some("KBOS"));
    }

    #[test]
    fn malformed_message_yields_nothing() {
        assert!(parse_message("<message:hasMember><event:Event>").is_empty());
        assert!(parse_message("NOT XML AT ALL").is_empty());

        // the member before the broken end tag is dropped as well
        let broken = format!("{MEMBER}</message:AIXMBasicMessage>");
        assert!(parse_message(&broken).is_empty());
    }

    #[test]
    fn batch_fails_on_malformed_document() {
        assert!(matches!(
            load_batch(b"<a><b></a>"),
            Err(Error::Aixm(_))
        ));
    }

    #[test]
    fn records_are_fused_after_error() {
        let mut records = parse_document(b"garbage");

        assert!(matches!(records.next(), Some(Err(_))));
        assert!(records.next().is_none());
        assert!(records.next().is_none());
    }
}
