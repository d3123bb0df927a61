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

//! Error types for record stream translation.

use thiserror::Error;

/// Errors that can occur while building or driving a record stream
/// translator.
///
/// Configuration problems are fatal and surface before any parsing begins;
/// structural problems surface while a document is being translated and
/// indicate a misbehaving event source rather than bad configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// No record boundary tag could be determined.
    #[error("missing name for the tag marking a record: {0}")]
    Configuration(String),

    /// A close event named an element other than the innermost open one.
    #[error("unbalanced close tag: expected </{expected}>, got </{got}>")]
    UnbalancedClose {
        /// Name of the innermost open element.
        expected: String,
        /// Name carried by the close event.
        got: String,
    },

    /// The event source ended while a record was still open.
    #[error("record still open at end of input ({open} unclosed elements)")]
    UnclosedRecord {
        /// Number of entity scopes left open inside the record.
        open: usize,
    },
}

impl StreamError {
    /// Create a configuration error.
    #[inline]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an unbalanced close error.
    #[inline]
    pub fn unbalanced(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::UnbalancedClose {
            expected: expected.into(),
            got: got.into(),
        }
    }
}

/// Result type for record stream operations.
pub type StreamResult<T> = Result<T, StreamError>;
