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

pub mod capture;
pub mod filter;
pub mod normalize;
pub mod properties;
pub mod resources;
pub mod values;

pub use capture::{
    capture_cib, capture_status, cib_has_node, cib_has_resource, cib_query_xml, pcs_capabilities, run_pcs_command,
    status_xml,
};
pub use filter::{pcs_resources, pcs_resources_from_status};
pub use normalize::element_to_value;
pub use properties::{cluster_property_set_from_cib, pcs_cluster_property_mapping};
pub use resources::{resources_from_cib, resources_from_status};
