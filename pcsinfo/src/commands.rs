/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2024. All rights reserved.
 * KubeOS is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use clap::{Args, Parser, Subcommand};
use pacemaker::api::{PropertyQuery, ResourceQuery};

#[derive(Parser)]
#[clap(name = "pcsinfo")]
#[clap(author, version, about)]
#[clap(about = "CLI tool for querying pacemaker cluster configuration and status")]
pub struct Cli {
    /// Enable debug logging
    #[clap(short, long, action)]
    pub debug: bool,
    #[clap(subcommand)]
    pub commands: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the cluster configuration (cibadmin --query) as JSON
    Cib,
    /// Print the live cluster status (pcs status xml) as JSON
    Status,
    /// Print the pcs version and capability list
    Capabilities,
    /// List cluster resources, optionally filtered
    Resources {
        /// Read resources from the live status instead of the configuration
        #[arg(long, action)]
        from_status: bool,
        #[command(flatten)]
        filter: ResourceArgs,
    },
    /// Print a cluster property set as a name/value mapping
    ClusterProperties {
        #[command(flatten)]
        filter: PropertyArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct ResourceArgs {
    /// Keep only the resource with exactly this id
    #[arg(long)]
    pub id: Option<String>,
    /// Keep only resources whose id contains this string
    #[arg(long)]
    pub id_contains: Option<String>,
    /// Keep only resources with exactly this resource agent (status only)
    #[arg(long)]
    pub resource_agent: Option<String>,
    /// Keep only resources with this resource agent class
    #[arg(long)]
    pub resource_agent_class: Option<String>,
    /// Keep only resources with this resource agent provider
    #[arg(long)]
    pub resource_agent_provider: Option<String>,
    /// Keep only resources with this resource agent type
    #[arg(long)]
    pub resource_agent_type: Option<String>,
    /// Keep only resources in this role (status only)
    #[arg(long)]
    pub role: Option<String>,
    /// Keep only resources with this target role (status only)
    #[arg(long)]
    pub target_role: Option<String>,
    /// Keep only active resources (status only)
    #[arg(long, action)]
    pub active: bool,
    /// Keep only blocked resources (status only)
    #[arg(long, action)]
    pub blocked: bool,
    /// Keep only failed resources (status only)
    #[arg(long, action)]
    pub failed: bool,
    /// Keep only managed resources (status only)
    #[arg(long, action)]
    pub managed: bool,
    /// Keep only resources in maintenance (status only)
    #[arg(long, action)]
    pub maintenance: bool,
}

impl From<ResourceArgs> for ResourceQuery {
    fn from(args: ResourceArgs) -> Self {
        ResourceQuery {
            id: args.id,
            id_contains: args.id_contains,
            resource_agent: args.resource_agent,
            resource_agent_class: args.resource_agent_class,
            resource_agent_provider: args.resource_agent_provider,
            resource_agent_type: args.resource_agent_type,
            role: args.role,
            target_role: args.target_role,
            active: args.active.then_some(true),
            blocked: args.blocked.then_some(true),
            failed: args.failed.then_some(true),
            managed: args.managed.then_some(true),
            maintenance: args.maintenance.then_some(true),
        }
    }
}

#[derive(Args, Debug)]
pub struct PropertyArgs {
    /// Id of the cluster property set to read
    #[arg(long, default_value = "cib-bootstrap-options")]
    pub set_id: String,
    /// Keep only the property with exactly this name
    #[arg(long)]
    pub name: Option<String>,
    /// Keep only the property with exactly this id
    #[arg(long)]
    pub id: Option<String>,
    /// Keep only properties whose name contains this string
    #[arg(long)]
    pub name_contains: Option<String>,
    /// Keep only properties whose id contains this string
    #[arg(long)]
    pub id_contains: Option<String>,
}

impl From<PropertyArgs> for PropertyQuery {
    fn from(args: PropertyArgs) -> Self {
        PropertyQuery {
            cluster_property_set_id: args.set_id,
            name: args.name,
            id: args.id,
            name_contains: args.name_contains,
            id_contains: args.id_contains,
        }
    }
}
