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

//! Error types for XML record translation.

use recstream_core::StreamError;
use thiserror::Error;

/// Errors that can occur while reading XML into a record stream.
#[derive(Error, Debug)]
pub enum XmlError {
    /// XML tokenization failed due to malformed syntax.
    #[error("XML parse error at position {pos}: {message}")]
    Parse {
        /// Byte position in the input where the error occurred.
        pos: usize,
        /// Description of the parsing error.
        message: String,
    },

    /// Translation failed: bad configuration or a structurally invalid
    /// event sequence.
    #[error(transparent)]
    Stream(#[from] StreamError),
}

impl XmlError {
    /// Create a parse error at the given input position.
    #[inline]
    pub fn parse(pos: usize, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            pos,
            message: message.to_string(),
        }
    }
}

impl From<quick_xml::Error> for XmlError {
    fn from(err: quick_xml::Error) -> Self {
        // quick-xml does not always provide a position
        Self::parse(0, err)
    }
}

/// Result type for XML record translation.
pub type XmlResult<T> = Result<T, XmlError>;
