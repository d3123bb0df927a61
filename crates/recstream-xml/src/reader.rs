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

//! XML tokenization driving the record translator.
//!
//! [`XmlRecordReader`] wraps a `quick_xml::Reader` and pushes parse events
//! into an [`XmlRecordTranslator`] in document order: element opens and
//! closes, text and CDATA runs, and DOCTYPE declarations (whose external
//! identifiers are routed through the translator's defused entity
//! resolution). Namespace prefixes are stripped; only unqualified local
//! names reach the translator.
//!
//! Entity references inside text and attribute values are handled with the
//! same defusal policy: the predefined XML entities and numeric character
//! references expand normally, while any other entity reference resolves to
//! the empty string instead of being fetched or failing the parse.

use crate::error::{XmlError, XmlResult};
use crate::translator::XmlRecordTranslator;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use recstream_core::StreamReceiver;
use std::io::{BufReader, Read};

/// Configuration for XML record reading.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for reading chunks (default: 64KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 65536, // 64KB
        }
    }
}

/// A streaming XML tokenizer that drives a record translator.
///
/// Reads the input in a single pass with bounded memory and forwards every
/// structural event to the translator. The receiver sees record stream
/// events while the reader is still consuming input; nothing is held back
/// until end of document.
pub struct XmlRecordReader<R: Read> {
    reader: Reader<BufReader<R>>,
    buf: Vec<u8>,
}

impl<R: Read> XmlRecordReader<R> {
    /// Create a reader over the given input.
    pub fn new(input: R, config: &ReaderConfig) -> Self {
        let buf_reader = BufReader::with_capacity(config.buffer_size, input);
        Self {
            reader: Reader::from_reader(buf_reader),
            buf: Vec::with_capacity(8192),
        }
    }

    /// Drive the translator over the whole input.
    ///
    /// Returns the translator's receiver once the document has been
    /// consumed and every record has closed.
    pub fn run<T: StreamReceiver>(
        mut self,
        mut translator: XmlRecordTranslator<T>,
    ) -> XmlResult<T> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    let attributes = collect_attributes(&e, self.reader.buffer_position())?;
                    translator.element_start(&name, &attributes);
                }
                Ok(Event::Empty(e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    let attributes = collect_attributes(&e, self.reader.buffer_position())?;
                    translator.element_start(&name, &attributes);
                    translator.element_end(&name)?;
                }
                Ok(Event::End(e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    translator.element_end(&name)?;
                }
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape_with(defused_entity)
                        .map_err(|err| XmlError::parse(self.reader.buffer_position(), err))?;
                    translator.text(&text);
                }
                Ok(Event::CData(e)) => {
                    translator.text(&String::from_utf8_lossy(&e));
                }
                Ok(Event::DocType(e)) => {
                    // The declaration itself is inspected, but whatever it
                    // points at is read from an empty source.
                    let declaration = String::from_utf8_lossy(&e).into_owned();
                    let (public_id, system_id) = parse_doctype_ids(&declaration);
                    let mut source = translator
                        .resolve_external_entity(public_id.as_deref(), system_id.as_deref());
                    let mut external = String::new();
                    let _ = source.read_to_string(&mut external);
                    debug_assert!(external.is_empty());
                }
                Ok(Event::Eof) => break,
                // declarations, comments, processing instructions
                Ok(_) => {}
                Err(err) => {
                    return Err(XmlError::parse(self.reader.buffer_position(), err));
                }
            }
        }
        translator.finish()?;
        Ok(translator.into_receiver())
    }
}

/// Read records from XML input in one call.
///
/// Builds a translator for `record_tag` over `receiver`, drives it across
/// the whole input with default buffering, and returns the receiver.
///
/// # Examples
///
/// ```rust
/// use recstream_core::EventCollector;
/// use recstream_xml::read_records;
/// use std::io::Cursor;
///
/// let xml = r#"<dump><rec id="1"><f>x</f></rec></dump>"#;
/// let collector = read_records(Cursor::new(xml), "rec", EventCollector::new()).unwrap();
/// assert_eq!(collector.len(), 6);
/// ```
pub fn read_records<R: Read, T: StreamReceiver>(
    input: R,
    record_tag: &str,
    receiver: T,
) -> XmlResult<T> {
    let translator = XmlRecordTranslator::new(record_tag, receiver)?;
    XmlRecordReader::new(input, &ReaderConfig::default()).run(translator)
}

/// Entity resolver that never reaches outside the document.
///
/// Predefined XML entities expand as usual; every other entity reference
/// resolves to the empty string.
fn defused_entity(entity: &str) -> Option<&'static str> {
    match entity {
        "lt" => Some("<"),
        "gt" => Some(">"),
        "amp" => Some("&"),
        "apos" => Some("'"),
        "quot" => Some("\""),
        _ => Some(""),
    }
}

fn collect_attributes(e: &BytesStart, pos: usize) -> XmlResult<Vec<(String, String)>> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| XmlError::parse(pos, err))?;
        // Namespace declarations are not content.
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }
        let name = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .unescape_value_with(defused_entity)
            .map_err(|err| XmlError::parse(pos, err))?
            .into_owned();
        attributes.push((name, value));
    }
    Ok(attributes)
}

/// Extract the optional PUBLIC and SYSTEM identifiers from the body of a
/// DOCTYPE declaration.
///
/// `PUBLIC` carries a public identifier followed by a system identifier;
/// `SYSTEM` carries a system identifier only. Declarations without an
/// external subset yield neither.
fn parse_doctype_ids(declaration: &str) -> (Option<String>, Option<String>) {
    // Identifiers come before the internal subset, if any.
    let head = match declaration.find('[') {
        Some(idx) => &declaration[..idx],
        None => declaration,
    };
    let upper = head.to_ascii_uppercase();

    if let Some(idx) = upper.find("PUBLIC") {
        let mut literals = quoted_literals(&head[idx + "PUBLIC".len()..]);
        let public_id = literals.next();
        let system_id = literals.next();
        (public_id, system_id)
    } else if let Some(idx) = upper.find("SYSTEM") {
        (None, quoted_literals(&head[idx + "SYSTEM".len()..]).next())
    } else {
        (None, None)
    }
}

/// Iterate over quoted literals in a DOCTYPE fragment, in order.
fn quoted_literals(s: &str) -> impl Iterator<Item = String> + '_ {
    let mut rest = s;
    std::iter::from_fn(move || {
        let start = rest.find(&['"', '\''][..])?;
        let quote = rest[start..].chars().next()?;
        let after = &rest[start + 1..];
        let end = after.find(quote)?;
        let literal = after[..end].to_string();
        rest = &after[end + 1..];
        Some(literal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defused_entity_keeps_predefined() {
        assert_eq!(defused_entity("amp"), Some("&"));
        assert_eq!(defused_entity("lt"), Some("<"));
        assert_eq!(defused_entity("gt"), Some(">"));
        assert_eq!(defused_entity("apos"), Some("'"));
        assert_eq!(defused_entity("quot"), Some("\""));
    }

    #[test]
    fn test_defused_entity_neutralizes_everything_else() {
        assert_eq!(defused_entity("xxe"), Some(""));
        assert_eq!(defused_entity("external"), Some(""));
    }

    #[test]
    fn test_parse_doctype_system() {
        let (public_id, system_id) =
            parse_doctype_ids(r#"foo SYSTEM "http://example.com/foo.dtd""#);
        assert_eq!(public_id, None);
        assert_eq!(system_id, Some("http://example.com/foo.dtd".to_string()));
    }

    #[test]
    fn test_parse_doctype_public() {
        let (public_id, system_id) = parse_doctype_ids(
            r#"html PUBLIC "-//W3C//DTD XHTML 1.0//EN" 'http://www.w3.org/xhtml1.dtd'"#,
        );
        assert_eq!(public_id, Some("-//W3C//DTD XHTML 1.0//EN".to_string()));
        assert_eq!(system_id, Some("http://www.w3.org/xhtml1.dtd".to_string()));
    }

    #[test]
    fn test_parse_doctype_without_external_subset() {
        let (public_id, system_id) = parse_doctype_ids("foo");
        assert_eq!(public_id, None);
        assert_eq!(system_id, None);
    }

    #[test]
    fn test_parse_doctype_ignores_internal_subset() {
        let (public_id, system_id) =
            parse_doctype_ids(r#"foo [<!ENTITY bar SYSTEM "http://example.com/e">]"#);
        assert_eq!(public_id, None);
        assert_eq!(system_id, None);
    }

    #[test]
    fn test_reader_config_default() {
        let config = ReaderConfig::default();
        assert_eq!(config.buffer_size, 65536);
    }
}
