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

use proptest::prelude::*;
use recstream_core::{EventCollector, StreamEvent};
use recstream_xml::read_records;
use std::io::Cursor;

fn events(xml: &str) -> Vec<StreamEvent> {
    read_records(Cursor::new(xml), "rec", EventCollector::new())
        .unwrap()
        .into_events()
}

/// A sibling element that can never collide with the boundary tag.
fn noise_element() -> impl Strategy<Value = String> {
    ("[a-z]{1,6}", "[a-zA-Z0-9 ]{0,16}")
        .prop_map(|(name, text)| format!("<n{name}>{text}</n{name}>"))
}

proptest! {
    // Inserting arbitrary well-formed siblings and text outside any
    // boundary element never changes the emitted stream.
    #[test]
    fn ignored_content_never_changes_the_stream(
        pre in prop::collection::vec(noise_element(), 0..4),
        post in prop::collection::vec(noise_element(), 0..4),
        gap_text in "[a-zA-Z0-9 ]{0,24}",
    ) {
        let record = r#"<rec id="r"><f>payload</f></rec>"#;
        let bare = format!("<root>{record}</root>");
        let noisy = format!(
            "<root>{}{gap_text}{record}{}</root>",
            pre.concat(),
            post.concat(),
        );

        prop_assert_eq!(events(&bare), events(&noisy));
    }

    // Tabs never survive into emitted literal values, wherever they occur.
    #[test]
    fn tabs_never_reach_the_output(text in "[a-z \t]{0,32}") {
        let xml = format!("<rec><f>{text}</f></rec>");
        let stream = events(&xml);

        let detabbed: String = text.chars().filter(|&c| c != '\t').collect();
        if detabbed.trim().is_empty() {
            // Whitespace-only content emits no literal at all.
            prop_assert!(stream.iter().all(|e| !e.is_literal()));
        } else {
            let expected = StreamEvent::Literal {
                name: "value".to_string(),
                value: detabbed,
            };
            prop_assert!(stream.contains(&expected));
        }
    }

    // Every emitted stream respects the grammar: records never overlap and
    // entities close inside their record.
    #[test]
    fn emitted_stream_is_well_formed(
        fields in prop::collection::vec(("[a-z]{1,6}", "[a-z0-9 ]{0,12}"), 0..6),
    ) {
        let body: String = fields
            .iter()
            .map(|(name, text)| format!("<f{name}>{text}</f{name}>"))
            .collect();
        let xml = format!("<dump><rec>{body}</rec><rec>{body}</rec></dump>");

        let mut record_open = false;
        let mut entity_depth = 0usize;
        for event in events(&xml) {
            match event {
                StreamEvent::StartRecord { .. } => {
                    prop_assert!(!record_open);
                    record_open = true;
                }
                StreamEvent::EndRecord => {
                    prop_assert!(record_open);
                    prop_assert_eq!(entity_depth, 0);
                    record_open = false;
                }
                StreamEvent::StartEntity { .. } => {
                    prop_assert!(record_open);
                    entity_depth += 1;
                }
                StreamEvent::EndEntity => {
                    prop_assert!(entity_depth > 0);
                    entity_depth -= 1;
                }
                StreamEvent::Literal { .. } => {
                    prop_assert!(record_open);
                }
            }
        }
        prop_assert!(!record_open);
    }
}
