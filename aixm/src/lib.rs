// SPDX-License-Identifier: Apache-2.0
// Copyright 2025, 2026 Joe Pearson
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

//! AIXM (Aeronautical Information Exchange Model) event message reader
//!
//! This crate reads the digital NOTAMs of AIXM 5.1 event messages, as they are
//! distributed e.g. by the FAA NOTAM feed. The [`Notams`] iterator streams
//! over a message and yields a flat [`Notam`] for every member that carries a
//! NOTAM. Interpreting the NOTAM text is left to the caller.

mod error;
mod notam;
pub mod ns;
mod parser;
mod xml;

pub use error::Error;
pub use notam::Notam;
pub use parser::Notams;
