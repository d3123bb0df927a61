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

//! Recstream XML Front End
//!
//! Translates arbitrary, generic XML into the recstream record/entity/literal
//! event stream.
//!
//! One element name, the *record boundary tag*, marks where a record starts
//! and ends. Everything inside a boundary element is translated: nested
//! elements become entities, attributes and accumulated text become literals.
//! Everything outside a boundary element is silently ignored.
//!
//! # Features
//!
//! - **Streaming**: single pass over the input, bounded memory
//! - **Generic**: no schema required, any XML vocabulary works
//! - **Hardened**: external entity resolution (XXE) is unconditionally
//!   defused; references to external DTDs or entities never touch the
//!   network or filesystem and never fail the parse
//!
//! # Examples
//!
//! ```rust
//! use recstream_core::{EventCollector, StreamEvent};
//! use recstream_xml::read_records;
//! use std::io::Cursor;
//!
//! let xml = r#"<dump><person id="p1"><name>Alice</name></person></dump>"#;
//! let collector = read_records(
//!     Cursor::new(xml),
//!     "person",
//!     EventCollector::new(),
//! ).unwrap();
//!
//! assert_eq!(
//!     collector.events()[0],
//!     StreamEvent::StartRecord { id: "p1".to_string() }
//! );
//! ```
//!
//! For more control over buffering or to drive the translator from a custom
//! tokenizer, use [`XmlRecordReader`] and [`XmlRecordTranslator`] directly.

mod error;
mod reader;
mod translator;

pub use error::{XmlError, XmlResult};
pub use reader::{read_records, ReaderConfig, XmlRecordReader};
pub use translator::{XmlRecordTranslator, RECORD_TAG_ENV};
