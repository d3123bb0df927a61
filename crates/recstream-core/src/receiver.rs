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

//! The downstream receiver contract and an in-memory implementation.

use crate::event::StreamEvent;

/// Consumer of a record event stream.
///
/// Translators call these methods synchronously and in document order; a
/// receiver never sees overlapping records or an entity closing after its
/// enclosing scope. Implementations are free to forward, aggregate, or
/// serialize the events.
pub trait StreamReceiver {
    /// A record begins. `id` is empty when the source carried no identifier.
    fn start_record(&mut self, id: &str);

    /// The currently open record ends.
    fn end_record(&mut self);

    /// A named entity opens inside the current record or entity.
    fn start_entity(&mut self, name: &str);

    /// The innermost open entity closes.
    fn end_entity(&mut self);

    /// A scalar name/value pair attached to the current scope.
    fn literal(&mut self, name: &str, value: &str);
}

impl<T: StreamReceiver + ?Sized> StreamReceiver for &mut T {
    fn start_record(&mut self, id: &str) {
        (**self).start_record(id);
    }

    fn end_record(&mut self) {
        (**self).end_record();
    }

    fn start_entity(&mut self, name: &str) {
        (**self).start_entity(name);
    }

    fn end_entity(&mut self) {
        (**self).end_entity();
    }

    fn literal(&mut self, name: &str, value: &str) {
        (**self).literal(name, value);
    }
}

/// A receiver that buffers every event into a `Vec`.
///
/// Useful in tests and for consumers that want to inspect a whole record
/// stream after the fact.
///
/// # Examples
///
/// ```rust
/// use recstream_core::{EventCollector, StreamEvent, StreamReceiver};
///
/// let mut collector = EventCollector::new();
/// collector.start_record("");
/// collector.end_record();
///
/// assert_eq!(
///     collector.into_events(),
///     vec![
///         StreamEvent::StartRecord { id: String::new() },
///         StreamEvent::EndRecord,
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCollector {
    events: Vec<StreamEvent>,
}

impl EventCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The events collected so far.
    #[inline]
    pub fn events(&self) -> &[StreamEvent] {
        &self.events
    }

    /// Consume the collector and return the collected events.
    #[inline]
    pub fn into_events(self) -> Vec<StreamEvent> {
        self.events
    }

    /// Number of collected events.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check whether nothing has been collected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discard everything collected so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl StreamReceiver for EventCollector {
    fn start_record(&mut self, id: &str) {
        self.events.push(StreamEvent::StartRecord { id: id.to_string() });
    }

    fn end_record(&mut self) {
        self.events.push(StreamEvent::EndRecord);
    }

    fn start_entity(&mut self, name: &str) {
        self.events.push(StreamEvent::StartEntity {
            name: name.to_string(),
        });
    }

    fn end_entity(&mut self) {
        self.events.push(StreamEvent::EndEntity);
    }

    fn literal(&mut self, name: &str, value: &str) {
        self.events.push(StreamEvent::Literal {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
}
