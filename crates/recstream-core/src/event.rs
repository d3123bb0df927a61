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

//! Event types for the record stream.
//!
//! # Event flow
//!
//! A translated document produces events in this order:
//!
//! 1. `StartRecord` - a record begins
//! 2. `Literal` / `StartEntity` ... `EndEntity` - record content
//! 3. `EndRecord` - the record ends
//! 4. (repeat for additional records)
//!
//! # Example event sequence
//!
//! For the XML fragment `<person id="p1"><name>Alice</name></person>` with
//! `person` as the record boundary tag, a translator emits:
//!
//! ```text
//! StartRecord { id: "p1" }
//! Literal { name: "id", value: "p1" }
//! StartEntity { name: "name" }
//! Literal { name: "value", value: "Alice" }
//! EndEntity
//! EndRecord
//! ```

use std::fmt;

/// A single event in the record stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A record begins. `id` is empty when the source carried no identifier.
    StartRecord {
        /// Record identifier.
        id: String,
    },

    /// The currently open record ends.
    EndRecord,

    /// A named entity opens inside the current record or entity.
    StartEntity {
        /// Entity name.
        name: String,
    },

    /// The innermost open entity closes.
    EndEntity,

    /// A scalar name/value pair attached to the current scope.
    Literal {
        /// Literal name.
        name: String,
        /// Literal value, verbatim.
        value: String,
    },
}

impl StreamEvent {
    /// Check if this is a literal event.
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    /// Get the name carried by this event, if any.
    ///
    /// `StartRecord` yields its id; `EndRecord` and `EndEntity` carry no
    /// name.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::StartRecord { id } => Some(id),
            Self::StartEntity { name } => Some(name),
            Self::Literal { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for StreamEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartRecord { id } => write!(f, "start-record({})", id),
            Self::EndRecord => write!(f, "end-record"),
            Self::StartEntity { name } => write!(f, "start-entity({})", name),
            Self::EndEntity => write!(f, "end-entity"),
            Self::Literal { name, value } => write!(f, "literal({}={})", name, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_literal() {
        let lit = StreamEvent::Literal {
            name: "value".to_string(),
            value: "x".to_string(),
        };
        assert!(lit.is_literal());
        assert!(!StreamEvent::EndRecord.is_literal());
    }

    #[test]
    fn test_name_accessor() {
        let start = StreamEvent::StartEntity {
            name: "address".to_string(),
        };
        assert_eq!(start.name(), Some("address"));

        let record = StreamEvent::StartRecord {
            id: "42".to_string(),
        };
        assert_eq!(record.name(), Some("42"));

        assert_eq!(StreamEvent::EndEntity.name(), None);
        assert_eq!(StreamEvent::EndRecord.name(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            StreamEvent::StartRecord {
                id: "1".to_string()
            }
            .to_string(),
            "start-record(1)"
        );
        assert_eq!(StreamEvent::EndRecord.to_string(), "end-record");
        assert_eq!(
            StreamEvent::Literal {
                name: "a".to_string(),
                value: "b".to_string()
            }
            .to_string(),
            "literal(a=b)"
        );
    }

    #[test]
    fn test_clone_eq() {
        let event = StreamEvent::StartEntity {
            name: "e".to_string(),
        };
        assert_eq!(event, event.clone());
    }
}
