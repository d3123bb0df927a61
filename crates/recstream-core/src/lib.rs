// Recstream - record event stream conversion toolkit
//
// Copyright (c) 2025 Recstream contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Recstream Core
//!
//! The abstract event stream shared by all recstream converters: a flat
//! sequence of *records*, each containing nested *entities* and scalar
//! *literal* name/value pairs.
//!
//! Format-specific front ends (such as `recstream-xml`) translate their
//! source documents into this vocabulary and push it, event by event, into a
//! [`StreamReceiver`]. Downstream consumers only ever see the abstract
//! stream; they never touch the source markup.
//!
//! # Stream grammar
//!
//! A valid stream obeys:
//!
//! ```text
//! Stream  := Record*
//! Record  := start_record(id) Body end_record
//! Body    := (Literal | Entity)*
//! Entity  := start_entity(name) Body end_entity
//! Literal := literal(name, value)
//! ```
//!
//! No two records are ever open at the same time, and every entity closes
//! before its enclosing scope does.
//!
//! # Examples
//!
//! Collecting a stream into memory:
//!
//! ```rust
//! use recstream_core::{EventCollector, StreamEvent, StreamReceiver};
//!
//! let mut collector = EventCollector::new();
//! collector.start_record("42");
//! collector.literal("name", "Alice");
//! collector.end_record();
//!
//! assert_eq!(collector.events().len(), 3);
//! assert!(matches!(
//!     collector.events()[1],
//!     StreamEvent::Literal { .. }
//! ));
//! ```

mod error;
mod event;
mod receiver;

pub use error::{StreamError, StreamResult};
pub use event::StreamEvent;
pub use receiver::{EventCollector, StreamReceiver};
