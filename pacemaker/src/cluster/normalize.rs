/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2023. All rights reserved.
 * KubeOS is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use roxmltree::Node;
use serde_json::{Map, Value};

use crate::cluster::values::{ATTRIB_KEY, XML_LIST_ELEMENTS};

/// Converts an XML element into a generic nested structure.
///
/// The result is a single-key map `{tag: ...}`. Children of a tag listed in
/// [`XML_LIST_ELEMENTS`] become a sequence, one entry per child; if such an
/// element carries attributes of its own they are kept next to the sequence
/// under [`ATTRIB_KEY`]. For every other tag, attributes and child records
/// share one namespace: duplicate sibling tags merge last-write-wins, and a
/// child tag colliding with an attribute name replaces the attribute value.
/// An element with neither attributes nor children maps to its text content,
/// or null when empty.
///
/// The conversion is total and deterministic; it never fails for a
/// well-formed document.
pub fn element_to_value(element: Node) -> Value {
    let tag = element.tag_name().name().to_string();
    let children: Vec<Value> = element.children().filter(|c| c.is_element()).map(element_to_value).collect();
    let attributes = attribute_map(element);

    let mut ret = Map::new();
    if XML_LIST_ELEMENTS.contains(tag.as_str()) {
        if !attributes.is_empty() {
            ret.insert(ATTRIB_KEY.to_string(), Value::Object(attributes));
        }
        ret.insert(tag, Value::Array(children));
    } else if !attributes.is_empty() && !children.is_empty() {
        ret.insert(tag, Value::Object(merge_children(attributes, &children)));
    } else if !attributes.is_empty() {
        ret.insert(tag, Value::Object(attributes));
    } else if !children.is_empty() {
        ret.insert(tag, Value::Object(merge_children(Map::new(), &children)));
    } else {
        let text = match element.text() {
            Some(text) => Value::String(text.to_string()),
            None => Value::Null,
        };
        ret.insert(tag, text);
    }
    Value::Object(ret)
}

fn attribute_map(element: Node) -> Map<String, Value> {
    element
        .attributes()
        .map(|attribute| (attribute.name().to_string(), Value::String(attribute.value().to_string())))
        .collect()
}

/// Folds the children's single-key maps into `base`, later entries winning
/// on key collision. Keys already present keep their position.
fn merge_children(base: Map<String, Value>, children: &[Value]) -> Map<String, Value> {
    let mut merged = base;
    for child in children {
        if let Value::Object(entries) = child {
            for (key, value) in entries {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn normalize(xml: &str) -> Value {
        let doc = roxmltree::Document::parse(xml).unwrap();
        element_to_value(doc.root_element())
    }

    #[test]
    fn test_attributes_only() {
        let value = normalize(r#"<primitive id="rsc1" class="ocf" provider="heartbeat" type="IPaddr2"/>"#);
        assert_eq!(
            value,
            json!({"primitive": {"id": "rsc1", "class": "ocf", "provider": "heartbeat", "type": "IPaddr2"}})
        );
    }

    #[test]
    fn test_leaf_text_and_empty() {
        assert_eq!(normalize("<version>2.1.2</version>"), json!({"version": "2.1.2"}));
        assert_eq!(normalize("<version/>"), json!({"version": null}));
    }

    #[test]
    fn test_list_tag_keeps_every_child() {
        for count in 0..3 {
            let body: String = (0..count).map(|i| format!(r#"<node id="{}" online="true"/>"#, i)).collect();
            let value = normalize(&format!("<nodes>{}</nodes>", body));
            let list = value["nodes"].as_array().unwrap();
            assert_eq!(list.len(), count);
        }
    }

    #[test]
    fn test_list_tag_with_attributes_keeps_attrib() {
        let value = normalize(
            r#"<meta_attributes id="rsc-meta"><nvpair id="n1" name="target-role" value="Started"/></meta_attributes>"#,
        );
        assert_eq!(value["attrib"], json!({"id": "rsc-meta"}));
        assert_eq!(
            value["meta_attributes"],
            json!([{"nvpair": {"id": "n1", "name": "target-role", "value": "Started"}}])
        );
    }

    #[test]
    fn test_record_merges_attributes_and_children() {
        let value = normalize(r#"<op id="op1" name="monitor"><detail>fast</detail></op>"#);
        assert_eq!(value, json!({"op": {"id": "op1", "name": "monitor", "detail": "fast"}}));
    }

    // Duplicate sibling tags under a record merge last-write-wins. Known
    // lossy point, kept on purpose.
    #[test]
    fn test_record_duplicate_children_last_wins() {
        let value = normalize("<summary><stack>corosync</stack><stack>knet</stack></summary>");
        assert_eq!(value, json!({"summary": {"stack": "knet"}}));
    }

    #[test]
    fn test_child_overrides_colliding_attribute() {
        let value = normalize(r#"<op name="monitor"><name>probe</name></op>"#);
        assert_eq!(value, json!({"op": {"name": "probe"}}));
    }

    #[test]
    fn test_children_only_record() {
        let value = normalize("<summary><stack>corosync</stack><quorum>true</quorum></summary>");
        assert_eq!(value, json!({"summary": {"stack": "corosync", "quorum": "true"}}));
    }

    #[test]
    fn test_nested_list_child_contributes_attrib_to_parent_record() {
        let value = normalize(
            r#"<primitive id="p1"><meta_attributes id="p1-meta"><nvpair id="n1" name="a" value="b"/></meta_attributes></primitive>"#,
        );
        assert_eq!(value["primitive"]["id"], json!("p1"));
        assert_eq!(value["primitive"]["attrib"], json!({"id": "p1-meta"}));
        assert_eq!(value["primitive"]["meta_attributes"], json!([{"nvpair": {"id": "n1", "name": "a", "value": "b"}}]));
    }

    #[test]
    fn test_deterministic() {
        let xml = r#"<cib validate-with="pacemaker-3.8"><configuration><nodes><node id="1" uname="host1"/></nodes></configuration></cib>"#;
        assert_eq!(normalize(xml), normalize(xml));
    }
}
