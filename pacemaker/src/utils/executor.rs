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

use std::process::Command;

use anyhow::Result;
use log::trace;

/// Captured outcome of one external tool invocation. `code` is the process
/// exit status (-1 when the process was terminated by a signal); stdout and
/// stderr are decoded lossily as UTF-8.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Seam for the cluster command line tools. Callers decide which outcomes
/// are fatal; the executor only reports them.
pub trait CommandExecutor: Clone {
    /// Runs the command once, blocking, and hands back exit code, stdout
    /// and stderr without judging the outcome. Fails only when the process
    /// cannot be spawned. No timeout, no retries.
    fn run_command_capture<'a>(&self, name: &'a str, args: &[&'a str]) -> Result<CommandOutput>;
}

#[derive(Clone)]
pub struct RealCommandExecutor {}

impl CommandExecutor for RealCommandExecutor {
    fn run_command_capture<'a>(&self, name: &'a str, args: &[&'a str]) -> Result<CommandOutput> {
        let output = Command::new(name).args(args).output()?;
        trace!("run_command_capture: {} {:?} done, rc {:?}", name, args, output.status.code());
        Ok(CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder()
            .target(env_logger::Target::Stdout)
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .try_init();
    }

    #[test]
    fn test_run_command_capture() {
        init();
        let executor: RealCommandExecutor = RealCommandExecutor {};

        let output = executor.run_command_capture("echo", &["captured"]).unwrap();
        assert_eq!(output.code, 0);
        assert_eq!(output.stdout, "captured\n");
        assert_eq!(output.stderr, "");
    }

    #[test]
    fn test_run_command_capture_reports_failure() {
        init();
        let executor: RealCommandExecutor = RealCommandExecutor {};

        // A failing command is still a successful capture.
        let output = executor
            .run_command_capture("sh", &["-c", "echo oops >&2; exit 3"])
            .unwrap();
        assert_eq!(output.code, 3);
        assert_eq!(output.stdout, "");
        assert_eq!(output.stderr, "oops\n");
    }

    #[test]
    fn test_run_command_capture_spawn_error() {
        init();
        let executor: RealCommandExecutor = RealCommandExecutor {};
        let spawn = executor.run_command_capture("/nonexistent-tool", &[]);
        assert!(spawn.is_err());
    }
}
