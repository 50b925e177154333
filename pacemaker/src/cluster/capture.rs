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

use anyhow::{bail, Context, Result};
use log::debug;
use roxmltree::Document;

use crate::{
    api::{CibInfo, PcsCapabilities, StatusInfo},
    cluster::{normalize::element_to_value, resources::resources_from_cib, values},
    utils::CommandExecutor,
};

/// Runs `pcs` with the given arguments and returns its stdout.
///
/// `check_rc` makes a non-zero exit code fatal, `check_stderr` any output
/// on stderr; the error carries exit code, stdout and stderr. There are no
/// retries and no timeout.
pub fn run_pcs_command<T: CommandExecutor>(
    executor: &T,
    args: &[&str],
    check_rc: bool,
    check_stderr: bool,
) -> Result<String> {
    let output = executor.run_command_capture(values::PCS_COMMAND, args)?;
    if (check_stderr && !output.stderr.is_empty()) || (check_rc && output.code != 0) {
        bail!(
            "pcs {:?} failed: rc {}, stdout: {}, stderr: {}",
            args,
            output.code,
            output.stdout,
            output.stderr
        );
    }
    Ok(output.stdout)
}

/// Captures the live cluster status as raw XML via `pcs status xml`.
/// A non-zero exit code or any stderr output is fatal.
pub fn status_xml<T: CommandExecutor>(executor: &T) -> Result<String> {
    run_pcs_command(executor, &["status", "xml"], true, true)
}

/// Captures the stored cluster configuration as raw XML via
/// `cibadmin --query`. Same failure policy as [`status_xml`].
pub fn cib_query_xml<T: CommandExecutor>(executor: &T) -> Result<String> {
    let output = executor.run_command_capture(values::CIBADMIN_COMMAND, &["--query"])?;
    if !output.stderr.is_empty() || output.code != 0 {
        bail!(
            "cibadmin --query failed: rc {}, stdout: {}, stderr: {}",
            output.code,
            output.stdout,
            output.stderr
        );
    }
    Ok(output.stdout)
}

/// Captures and normalizes one CIB snapshot. Tool failure and malformed
/// XML are both fatal.
pub fn capture_cib<T: CommandExecutor>(executor: &T) -> Result<CibInfo> {
    let xml = cib_query_xml(executor)?;
    let pacemaker_cib = {
        let doc = Document::parse(&xml).context("cibadmin --query returned malformed XML")?;
        element_to_value(doc.root_element())
    };
    debug!("Captured CIB snapshot");
    Ok(CibInfo { pacemaker_cib, pacemaker_cib_xml: xml })
}

/// Captures and normalizes one live status snapshot. Tool failure and
/// malformed XML are both fatal.
pub fn capture_status<T: CommandExecutor>(executor: &T) -> Result<StatusInfo> {
    let xml = status_xml(executor)?;
    let pacemaker_status = {
        let doc = Document::parse(&xml).context("pcs status xml returned malformed XML")?;
        element_to_value(doc.root_element())
    };
    debug!("Captured cluster status snapshot");
    Ok(StatusInfo { pacemaker_status, pacemaker_status_xml: xml })
}

/// Reads `pcs --version --full`: the first line is the pcs version, the
/// second the space separated capability list.
pub fn pcs_capabilities<T: CommandExecutor>(executor: &T) -> Result<PcsCapabilities> {
    let raw = run_pcs_command(executor, &["--version", "--full"], true, true)?;
    let lines: Vec<&str> = raw.lines().collect();
    if lines.len() < 2 {
        bail!("Unexpected output from pcs --version --full: {:?}", raw);
    }
    let pcs_version = lines[0].to_string();
    let pcs_capabilities = lines[1].split(' ').map(str::to_string).collect();
    Ok(PcsCapabilities { pcs_version, pcs_capabilities, pcs_version_full_raw: raw })
}

/// True when the CIB configuration contains a primitive with this id,
/// either directly under `resources` or nested in a clone.
pub fn cib_has_resource(doc: &Document, resource_id: &str) -> bool {
    !resources_from_cib(doc, Some(resource_id)).is_empty()
}

/// True when the CIB `nodes` section lists a node with this uname.
pub fn cib_has_node(doc: &Document, uname: &str) -> bool {
    doc.root().descendants().any(|node| {
        node.has_tag_name("node")
            && node.attribute("uname") == Some(uname)
            && node.parent().map_or(false, |parent| parent.has_tag_name("nodes"))
    })
}
