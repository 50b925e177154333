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
use serde_json::Value;

use crate::{
    api::{ClusterCapture, ResourceQuery},
    cluster::{
        normalize::element_to_value,
        resources::{
            agent_class_from_cib, agent_class_from_status, agent_provider_from_cib, agent_provider_from_status,
            agent_type_from_cib, agent_type_from_status, resources_from_cib, resources_from_status,
        },
    },
};

/// Filters the resources of a captured snapshot and returns the survivors
/// as normalized structures, in document order (top-level resources before
/// clone-nested ones).
///
/// Works for both capture variants; agent class/provider/type are projected
/// per schema. Never fails: a capture whose embedded XML does not parse
/// yields an empty list.
pub fn pcs_resources(capture: &ClusterCapture, query: &ResourceQuery) -> Vec<Value> {
    match capture {
        ClusterCapture::Cib(info) => filter_capture(&info.pacemaker_cib_xml, query, false),
        ClusterCapture::Status(info) => filter_capture(&info.pacemaker_status_xml, query, true),
    }
}

/// Status-only variant of [`pcs_resources`]: a CIB capture yields an empty
/// list, everything else behaves identically.
pub fn pcs_resources_from_status(capture: &ClusterCapture, query: &ResourceQuery) -> Vec<Value> {
    match capture {
        ClusterCapture::Status(info) => filter_capture(&info.pacemaker_status_xml, query, true),
        ClusterCapture::Cib(_) => Vec::new(),
    }
}

fn filter_capture(xml: &str, query: &ResourceQuery, from_status: bool) -> Vec<Value> {
    let doc = match Document::parse(xml) {
        Ok(doc) => doc,
        Err(err) => {
            debug!("Resource filter got a capture that does not parse as XML: {}", err);
            return Vec::new();
        },
    };
    let located = if from_status { resources_from_status(&doc, None) } else { resources_from_cib(&doc, None) };
    apply_query(located, query, from_status).iter().map(|resource| element_to_value(*resource)).collect()
}

/// A string predicate counts as supplied only when non-empty.
fn supplied(predicate: &Option<String>) -> Option<&str> {
    predicate.as_deref().filter(|value| !value.is_empty())
}

fn flag_is_set(resource: &Node, name: &str) -> bool {
    resource.attribute(name) == Some("true")
}

fn apply_query<'a, 'input>(
    mut resources: Vec<Node<'a, 'input>>,
    query: &ResourceQuery,
    from_status: bool,
) -> Vec<Node<'a, 'input>> {
    if let Some(id) = supplied(&query.id) {
        resources.retain(|r| r.attribute("id") == Some(id));
    }
    if let Some(fragment) = supplied(&query.id_contains) {
        resources.retain(|r| r.attribute("id").map_or(false, |id| id.contains(fragment)));
    }
    if let Some(agent) = supplied(&query.resource_agent) {
        resources.retain(|r| r.attribute("resource_agent") == Some(agent));
    }
    if let Some(provider) = supplied(&query.resource_agent_provider) {
        resources.retain(|r| {
            let found = if from_status { agent_provider_from_status(r) } else { agent_provider_from_cib(r) };
            found == Some(provider)
        });
    }
    if let Some(agent_type) = supplied(&query.resource_agent_type) {
        resources.retain(|r| {
            let found = if from_status { agent_type_from_status(r) } else { agent_type_from_cib(r) };
            found == Some(agent_type)
        });
    }
    if let Some(class) = supplied(&query.resource_agent_class) {
        resources.retain(|r| {
            let found = if from_status { agent_class_from_status(r) } else { agent_class_from_cib(r) };
            found == Some(class)
        });
    }
    if let Some(role) = supplied(&query.role) {
        resources.retain(|r| r.attribute("role") == Some(role));
    }
    if let Some(target_role) = supplied(&query.target_role) {
        resources.retain(|r| r.attribute("target_role") == Some(target_role));
    }
    // Flags only ever select for a state: `Some(false)` is the same as not
    // supplying the flag at all.
    if query.active == Some(true) {
        resources.retain(|r| flag_is_set(r, "active"));
    }
    if query.blocked == Some(true) {
        resources.retain(|r| flag_is_set(r, "blocked"));
    }
    if query.failed == Some(true) {
        resources.retain(|r| flag_is_set(r, "failed"));
    }
    if query.managed == Some(true) {
        resources.retain(|r| flag_is_set(r, "managed"));
    }
    if query.maintenance == Some(true) {
        resources.retain(|r| flag_is_set(r, "maintenance"));
    }
    resources
}
