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

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cluster::values::BOOTSTRAP_PROPERTY_SET;

/// One captured cluster snapshot, tagged by the schema it came from.
///
/// The filters take a capture by reference and re-parse the embedded XML
/// text; handing a capture of the wrong variant to a schema-specific filter
/// yields an empty result instead of an error.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum ClusterCapture {
    Cib(CibInfo),
    Status(StatusInfo),
}

impl ClusterCapture {
    pub fn cib_xml(&self) -> Option<&str> {
        match self {
            ClusterCapture::Cib(info) => Some(&info.pacemaker_cib_xml),
            ClusterCapture::Status(_) => None,
        }
    }

    pub fn status_xml(&self) -> Option<&str> {
        match self {
            ClusterCapture::Status(info) => Some(&info.pacemaker_status_xml),
            ClusterCapture::Cib(_) => None,
        }
    }
}

/// Cluster configuration snapshot: the normalized tree plus the raw
/// `cibadmin --query` output it was built from.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CibInfo {
    pub pacemaker_cib: Value,
    pub pacemaker_cib_xml: String,
}

/// Live cluster status snapshot: the normalized tree plus the raw
/// `pcs status xml` output it was built from.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct StatusInfo {
    pub pacemaker_status: Value,
    pub pacemaker_status_xml: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PcsCapabilities {
    pub pcs_version: String,
    pub pcs_capabilities: Vec<String>,
    pub pcs_version_full_raw: String,
}

/// Predicates for the resource filter pipeline. Supplied predicates are
/// ANDed; an empty string counts as not supplied. Boolean flags only ever
/// select for a state: `Some(false)` behaves exactly like `None`.
#[derive(Debug, Default, Clone)]
pub struct ResourceQuery {
    pub id: Option<String>,
    pub id_contains: Option<String>,
    pub resource_agent: Option<String>,
    pub resource_agent_class: Option<String>,
    pub resource_agent_provider: Option<String>,
    pub resource_agent_type: Option<String>,
    pub role: Option<String>,
    pub target_role: Option<String>,
    pub active: Option<bool>,
    pub blocked: Option<bool>,
    pub failed: Option<bool>,
    pub managed: Option<bool>,
    pub maintenance: Option<bool>,
}

/// Selects a cluster property set and narrows its nvpairs. Unlike
/// `ResourceQuery`, an empty string here is a real predicate.
#[derive(Debug, Clone)]
pub struct PropertyQuery {
    pub cluster_property_set_id: String,
    pub name: Option<String>,
    pub id: Option<String>,
    pub name_contains: Option<String>,
    pub id_contains: Option<String>,
}

impl Default for PropertyQuery {
    fn default() -> Self {
        Self {
            cluster_property_set_id: BOOTSTRAP_PROPERTY_SET.to_string(),
            name: None,
            id: None,
            name_contains: None,
            id_contains: None,
        }
    }
}
