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

use std::collections::HashSet;

use lazy_static::lazy_static;

pub const PCS_COMMAND: &str = "pcs";
pub const CIBADMIN_COMMAND: &str = "cibadmin";

/// Reserved key under which a list element's own XML attributes are kept.
pub const ATTRIB_KEY: &str = "attrib";

/// Id of the property set pacemaker creates at cluster bootstrap.
pub const BOOTSTRAP_PROPERTY_SET: &str = "cib-bootstrap-options";

lazy_static! {
    /// Tags whose child elements form a sequence rather than fields of one
    /// record. Cluster nodes are the canonical case:
    ///
    ///   <nodes>
    ///     <node name="host1" id="1" online="true" .../>
    ///     <node name="host2" id="2" online="true" .../>
    ///   </nodes>
    ///
    /// Without `nodes` in this set the two `node` children would collapse
    /// into a single record key and the second node would win.
    pub static ref XML_LIST_ELEMENTS: HashSet<&'static str> = [
        "nodes",
        "constraints",
        "crm_config",
        "cluster_property_set",
        "lrm_resources",
        "lrm_resource",
        "instance_attributes",
        "operations",
        "meta_attributes",
        "transient_attributes",
        "status",
        "fence_history",
        "node_attributes",
        "node_history",
        "resource_history",
        "resources",
        "clone",
        "node",
        "failures",
        "tags",
        "bans",
    ]
    .iter()
    .copied()
    .collect();
}
