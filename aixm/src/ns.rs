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

//! Namespaces of an AIXM 5.1 event message.
//!
//! Only the members of a message are matched by namespace. The elements
//! inside a member are matched by their local name.

/// Namespace of `message:AIXMBasicMessage` and its `message:hasMember`.
pub const MESSAGE: &str = "http://www.aixm.aero/schema/5.1/message";
