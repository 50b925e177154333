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

use log::debug;
use roxmltree::{Document, Node};
use serde_json::{Map, Value};

use crate::api::{ClusterCapture, PropertyQuery};

/// Returns the `nvpair` elements of the `crm_config/cluster_property_set`
/// whose id matches, in document order. Unknown set ids yield an empty
/// list.
pub fn cluster_property_set_from_cib<'a, 'input>(
    doc: &'a Document<'input>,
    cluster_property_set_id: &str,
) -> Vec<Node<'a, 'input>> {
    let mut nvpairs = Vec::new();
    for crm_config in doc.root().descendants().filter(|n| n.has_tag_name("crm_config")) {
        for set in crm_config
            .children()
            .filter(|c| c.has_tag_name("cluster_property_set") && c.attribute("id") == Some(cluster_property_set_id))
        {
            nvpairs.extend(set.children().filter(|c| c.has_tag_name("nvpair")));
        }
    }
    nvpairs
}

/// Projects a cluster property set from a CIB capture into a flat
/// `{name: value}` mapping, optionally narrowed by the query's nvpair
/// predicates. When two surviving nvpairs share a name the later one wins.
///
/// Never fails: a status capture, unparseable XML or an unknown set id all
/// produce an empty mapping.
pub fn pcs_cluster_property_mapping(capture: &ClusterCapture, query: &PropertyQuery) -> Map<String, Value> {
    let xml = match capture.cib_xml() {
        Some(xml) => xml,
        None => return Map::new(),
    };
    let doc = match Document::parse(xml) {
        Ok(doc) => doc,
        Err(err) => {
            debug!("Property mapping got a capture that does not parse as XML: {}", err);
            return Map::new();
        },
    };

    let mut nvpairs = cluster_property_set_from_cib(&doc, &query.cluster_property_set_id);
    if let Some(id) = query.id.as_deref() {
        nvpairs.retain(|p| p.attribute("id") == Some(id));
    }
    if let Some(name) = query.name.as_deref() {
        nvpairs.retain(|p| p.attribute("name") == Some(name));
    }
    if let Some(fragment) = query.name_contains.as_deref() {
        nvpairs.retain(|p| p.attribute("name").map_or(false, |name| name.contains(fragment)));
    }
    if let Some(fragment) = query.id_contains.as_deref() {
        nvpairs.retain(|p| p.attribute("id").map_or(false, |id| id.contains(fragment)));
    }

    let mut mapping = Map::new();
    for nvpair in nvpairs {
        if let Some(name) = nvpair.attribute("name") {
            let value = match nvpair.attribute("value") {
                Some(value) => Value::String(value.to_string()),
                None => Value::Null,
            };
            mapping.insert(name.to_string(), value);
        }
    }
    mapping
}
