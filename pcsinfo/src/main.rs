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

use std::process::exit;

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::error;
use pacemaker::{api::ClusterCapture, cluster, utils::RealCommandExecutor};

mod commands;

use crate::commands::{Cli, Commands};

fn run(commands: Commands) -> Result<String> {
    let executor = RealCommandExecutor {};
    let rendered = match commands {
        Commands::Cib => serde_json::to_string_pretty(&cluster::capture_cib(&executor)?)?,
        Commands::Status => serde_json::to_string_pretty(&cluster::capture_status(&executor)?)?,
        Commands::Capabilities => serde_json::to_string_pretty(&cluster::pcs_capabilities(&executor)?)?,
        Commands::Resources { from_status, filter } => {
            let query = filter.into();
            let resources = if from_status {
                let capture = ClusterCapture::Status(cluster::capture_status(&executor)?);
                cluster::pcs_resources_from_status(&capture, &query)
            } else {
                let capture = ClusterCapture::Cib(cluster::capture_cib(&executor)?);
                cluster::pcs_resources(&capture, &query)
            };
            serde_json::to_string_pretty(&resources)?
        },
        Commands::ClusterProperties { filter } => {
            let capture = ClusterCapture::Cib(cluster::capture_cib(&executor)?);
            let mapping = cluster::pcs_cluster_property_mapping(&capture, &filter.into());
            serde_json::to_string_pretty(&mapping)?
        },
    };
    Ok(rendered)
}

fn main() {
    let cli = Cli::parse();
    let default_log_level: &str = if cli.debug { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_log_level)).target(Target::Stdout).init();

    match run(cli.commands) {
        Ok(rendered) => println!("{}", rendered),
        Err(err) => {
            error!("{:#}", err);
            exit(1);
        },
    }
}
