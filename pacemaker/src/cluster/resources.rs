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

use roxmltree::{Document, Node};

/// Resource element tag in the CIB configuration schema.
const CIB_RESOURCE_TAG: &str = "primitive";
/// Resource element tag in the crm_mon status schema.
const STATUS_RESOURCE_TAG: &str = "resource";

/// Returns the primitives of a CIB document: every `primitive` directly
/// under a `resources` element first, then every `primitive` nested in a
/// `resources/clone`, each set in document order. With `resource_id` only
/// exact id matches are returned; no match yields an empty list.
pub fn resources_from_cib<'a, 'input>(
    doc: &'a Document<'input>,
    resource_id: Option<&str>,
) -> Vec<Node<'a, 'input>> {
    resources_by_tag(doc, CIB_RESOURCE_TAG, resource_id)
}

/// Same lookup against a crm_mon status document, where resources are
/// `resource` elements.
pub fn resources_from_status<'a, 'input>(
    doc: &'a Document<'input>,
    resource_id: Option<&str>,
) -> Vec<Node<'a, 'input>> {
    resources_by_tag(doc, STATUS_RESOURCE_TAG, resource_id)
}

fn resources_by_tag<'a, 'input>(
    doc: &'a Document<'input>,
    tag: &str,
    resource_id: Option<&str>,
) -> Vec<Node<'a, 'input>> {
    let id_matches = |node: &Node| match resource_id {
        Some(id) => node.attribute("id") == Some(id),
        None => true,
    };

    let mut found = Vec::new();
    for resources in doc.root().descendants().filter(|n| n.has_tag_name("resources")) {
        for child in resources.children().filter(|c| c.has_tag_name(tag)) {
            if id_matches(&child) {
                found.push(child);
            }
        }
    }
    for resources in doc.root().descendants().filter(|n| n.has_tag_name("resources")) {
        for clone in resources.children().filter(|c| c.has_tag_name("clone")) {
            for child in clone.children().filter(|c| c.has_tag_name(tag)) {
                if id_matches(&child) {
                    found.push(child);
                }
            }
        }
    }
    found
}

/// Resource agent class of a CIB primitive, from its `class` attribute.
pub fn agent_class_from_cib<'a>(resource: &Node<'a, '_>) -> Option<&'a str> {
    resource.attribute("class")
}

/// Resource agent provider of a CIB primitive. Absent for agent classes
/// without a provider segment, e.g. stonith.
pub fn agent_provider_from_cib<'a>(resource: &Node<'a, '_>) -> Option<&'a str> {
    resource.attribute("provider")
}

/// Resource agent type of a CIB primitive, from its `type` attribute.
pub fn agent_type_from_cib<'a>(resource: &Node<'a, '_>) -> Option<&'a str> {
    resource.attribute("type")
}

/// Resource agent class of a status resource, recovered from the combined
/// `resource_agent` attribute.
pub fn agent_class_from_status<'a>(resource: &Node<'a, '_>) -> Option<&'a str> {
    split_resource_agent(resource.attribute("resource_agent")?).0
}

/// Resource agent provider of a status resource. `None` when the agent is
/// serialized without a provider segment (`class:type`).
pub fn agent_provider_from_status<'a>(resource: &Node<'a, '_>) -> Option<&'a str> {
    split_resource_agent(resource.attribute("resource_agent")?).1
}

/// Resource agent type of a status resource.
pub fn agent_type_from_status<'a>(resource: &Node<'a, '_>) -> Option<&'a str> {
    split_resource_agent(resource.attribute("resource_agent")?).2
}

/// crm_mon serializes the agent as `class::provider:type`, or `class:type`
/// when the class has no provider. A value without any separator degrades
/// to a bare class.
fn split_resource_agent(agent: &str) -> (Option<&str>, Option<&str>, Option<&str>) {
    if let Some((class, rest)) = agent.split_once("::") {
        match rest.split_once(':') {
            Some((provider, agent_type)) => (Some(class), Some(provider), Some(agent_type)),
            None => (Some(class), None, Some(rest)),
        }
    } else {
        match agent.split_once(':') {
            Some((class, agent_type)) => (Some(class), None, Some(agent_type)),
            None => (Some(agent), None, None),
        }
    }
}
