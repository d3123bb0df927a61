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

//! Stateful translation from XML parse events to the record stream.
//!
//! [`XmlRecordTranslator`] is driven synchronously by a tokenizer (usually
//! [`XmlRecordReader`](crate::XmlRecordReader)) calling [`element_start`],
//! [`element_end`] and [`text`] in document order, and forwards derived
//! record/entity/literal events to its [`StreamReceiver`] immediately. There
//! is no batching or reordering.
//!
//! Text content is accumulated in a buffer and flushed as a
//! `literal("value", ...)` at every element boundary, so mixed content like
//! `<e>prefix<child/>suffix</e>` yields two separate literals straddling the
//! child entity instead of one merged value.
//!
//! [`element_start`]: XmlRecordTranslator::element_start
//! [`element_end`]: XmlRecordTranslator::element_end
//! [`text`]: XmlRecordTranslator::text

use recstream_core::{StreamError, StreamReceiver, StreamResult};
use std::io;

/// Environment variable consulted by [`XmlRecordTranslator::from_env`] for
/// the record boundary tag.
pub const RECORD_TAG_ENV: &str = "RECSTREAM_RECORD_TAG";

/// Key under which accumulated text content is emitted as a literal.
const TEXT_LITERAL: &str = "value";

/// Translates low-level XML parse events into record stream events.
///
/// One element local name, the *record boundary tag*, delimits records.
/// While inside a boundary element, every nested element becomes an entity,
/// every attribute becomes a literal, and text content is buffered and
/// emitted as `literal("value", ...)` at element boundaries. Content outside
/// a boundary element is discarded entirely.
///
/// A boundary tag that reopens while a record is already in progress is
/// treated as an ordinary nested entity, and its close event ends the whole
/// record. That quirk is kept deliberately; downstream consumers depend on
/// this behavior.
///
/// # Examples
///
/// ```rust
/// use recstream_core::{EventCollector, StreamEvent};
/// use recstream_xml::XmlRecordTranslator;
///
/// let mut translator =
///     XmlRecordTranslator::new("rec", EventCollector::new()).unwrap();
///
/// translator.element_start("rec", &[("id".to_string(), "7".to_string())]);
/// translator.text("hello");
/// translator.element_end("rec").unwrap();
/// translator.finish().unwrap();
///
/// let events = translator.into_receiver().into_events();
/// assert_eq!(events[0], StreamEvent::StartRecord { id: "7".to_string() });
/// assert_eq!(events.last(), Some(&StreamEvent::EndRecord));
/// ```
#[derive(Debug)]
pub struct XmlRecordTranslator<T: StreamReceiver> {
    record_tag: String,
    in_record: bool,
    buffer: String,
    open_elements: Vec<String>,
    receiver: T,
}

impl<T: StreamReceiver> XmlRecordTranslator<T> {
    /// Create a translator with an explicit record boundary tag.
    ///
    /// Fails with [`StreamError::Configuration`] when the tag is empty;
    /// translation must never proceed without a boundary tag.
    pub fn new(record_tag: impl Into<String>, receiver: T) -> StreamResult<Self> {
        let record_tag = record_tag.into();
        if record_tag.is_empty() {
            return Err(StreamError::configuration("the record tag is empty"));
        }
        Ok(Self {
            record_tag,
            in_record: false,
            buffer: String::new(),
            open_elements: Vec::new(),
            receiver,
        })
    }

    /// Create a translator taking the record boundary tag from the
    /// [`RECORD_TAG_ENV`] environment variable.
    ///
    /// Fails with [`StreamError::Configuration`] when the variable is unset
    /// or empty.
    pub fn from_env(receiver: T) -> StreamResult<Self> {
        match std::env::var(RECORD_TAG_ENV) {
            Ok(tag) if !tag.is_empty() => Self::new(tag, receiver),
            _ => Err(StreamError::configuration(format!(
                "{} is not set",
                RECORD_TAG_ENV
            ))),
        }
    }

    /// The configured record boundary tag.
    #[inline]
    pub fn record_tag(&self) -> &str {
        &self.record_tag
    }

    /// Whether a record is currently open.
    #[inline]
    pub fn is_in_record(&self) -> bool {
        self.in_record
    }

    /// Consume the translator and return its receiver.
    pub fn into_receiver(self) -> T {
        self.receiver
    }

    /// An element opens.
    ///
    /// Attributes must be given in document order; their values pass through
    /// verbatim. Inside a record this flushes pending text first, so text
    /// preceding a nested element is attributed to the enclosing scope and
    /// not to the element about to open.
    pub fn element_start(&mut self, local_name: &str, attributes: &[(String, String)]) {
        if self.in_record {
            self.flush_text();
            self.open_elements.push(local_name.to_string());
            self.receiver.start_entity(local_name);
            self.write_attributes(attributes);
        } else if local_name == self.record_tag {
            let id = attributes
                .iter()
                .find(|(name, _)| name == "id")
                .map(|(_, value)| value.as_str())
                .unwrap_or("");
            self.receiver.start_record(id);
            self.write_attributes(attributes);
            self.in_record = true;
        }
        // Content outside a record is ignored entirely, including its
        // attributes and descendants.
    }

    /// An element closes.
    ///
    /// No-op outside a record. Inside a record the closing name must match
    /// the innermost open element, otherwise the driving tokenizer has
    /// delivered an unbalanced sequence and [`StreamError::UnbalancedClose`]
    /// is returned.
    pub fn element_end(&mut self, local_name: &str) -> StreamResult<()> {
        if !self.in_record {
            return Ok(());
        }
        self.flush_text();
        match self.open_elements.pop() {
            Some(top) if top != local_name => Err(StreamError::unbalanced(top, local_name)),
            Some(_) if local_name == self.record_tag => {
                // The close of a nested boundary element ends the whole
                // record, never just the entity.
                self.close_record();
                Ok(())
            }
            Some(_) => {
                self.receiver.end_entity();
                Ok(())
            }
            None if local_name == self.record_tag => {
                self.close_record();
                Ok(())
            }
            None => Err(StreamError::unbalanced(self.record_tag.clone(), local_name)),
        }
    }

    /// A run of character data.
    ///
    /// Discarded outside a record. Inside a record, horizontal tabs are
    /// stripped (runs of tabs collapse to nothing, not to a space) and the
    /// rest is appended to the text buffer; nothing is emitted until the
    /// next element boundary.
    pub fn text(&mut self, chars: &str) {
        if !self.in_record {
            return;
        }
        self.buffer.extend(chars.chars().filter(|&c| c != '\t'));
    }

    /// The document has ended.
    ///
    /// Fails with [`StreamError::UnclosedRecord`] when a record is still
    /// open, which a well-formed document driven to completion never
    /// produces.
    pub fn finish(&self) -> StreamResult<()> {
        if self.in_record {
            return Err(StreamError::UnclosedRecord {
                open: self.open_elements.len(),
            });
        }
        Ok(())
    }

    /// Resolve a request for an externally referenced entity.
    ///
    /// Always returns an empty, already-exhausted source, regardless of the
    /// requested identifiers. External DTD subsets and external
    /// general/parameter entities are thereby silently neutralized instead
    /// of being fetched or failing the parse. This is a non-configurable
    /// security default against XXE disclosure and resource exhaustion.
    pub fn resolve_external_entity(
        &self,
        _public_id: Option<&str>,
        _system_id: Option<&str>,
    ) -> io::Empty {
        io::empty()
    }

    /// Flush buffered text as a `literal("value", ...)`.
    ///
    /// Trimming is only the emptiness test; the emitted value keeps its
    /// surrounding whitespace, with every newline replaced by a single
    /// space. The buffer is reset either way.
    fn flush_text(&mut self) {
        let value = std::mem::take(&mut self.buffer);
        if !value.trim().is_empty() {
            self.receiver.literal(TEXT_LITERAL, &value.replace('\n', " "));
        }
    }

    fn write_attributes(&mut self, attributes: &[(String, String)]) {
        for (name, value) in attributes {
            self.receiver.literal(name, value);
        }
    }

    fn close_record(&mut self) {
        self.in_record = false;
        self.open_elements.clear();
        self.receiver.end_record();
    }
}
