//! Run operation
//!
//! Pushes a freshly built binary from the build output directory to the
//! attached device and executes it there: root request, push, chmod, remote
//! shell. Strictly ordered; a failed step aborts the rest.

use tracing::info;

use crate::config::ToolchainConfig;
use crate::error::Result;
use crate::exec::{run_sequence, CommandSpec};

/// Plan the four device-bridge invocations, in order.
pub fn plan(config: &ToolchainConfig, program: &str) -> Vec<CommandSpec> {
    let remote = config.device_path(program);

    let root = CommandSpec::new(&config.adb)
        .arg("root")
        .current_dir(&config.build_dir);

    let push = CommandSpec::new(&config.adb)
        .arg("push")
        .arg(program)
        .arg(remote.clone())
        .current_dir(&config.build_dir);

    let chmod = CommandSpec::new(&config.adb)
        .args(["shell", "chmod", "777"])
        .arg(remote.clone())
        .current_dir(&config.build_dir);

    let execute = CommandSpec::new(&config.adb)
        .arg("shell")
        .arg(remote)
        .current_dir(&config.build_dir);

    vec![root, push, chmod, execute]
}

/// Execute the deploy-and-run sequence for a binary in the build directory.
pub async fn execute(config: &ToolchainConfig, program: &str) -> Result<()> {
    info!("deploying {} to {}", program, config.device_path(program));
    run_sequence(&plan(config, program)).await
}
