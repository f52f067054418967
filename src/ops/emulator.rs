//! Emulator operation
//!
//! Launches the configured virtual device. The emulator executable expects to
//! be started from the SDK tools directory with ANDROID_HOME set and the
//! tools / platform-tools directories ahead of everything else on PATH.

use tracing::info;

use crate::config::ToolchainConfig;
use crate::error::Result;
use crate::exec::CommandSpec;

/// Plan the single emulator invocation.
pub fn plan(config: &ToolchainConfig) -> CommandSpec {
    CommandSpec::new(config.emulator())
        .arg(format!("@{}", config.avd_name))
        .current_dir(&config.tools_dir)
        .env("ANDROID_HOME", config.sdk_root.to_string_lossy())
        .prepend_path(&config.tools_dir)
        .prepend_path(&config.platform_tools_dir)
}

/// Launch the virtual device and wait for the emulator to exit.
pub async fn execute(config: &ToolchainConfig) -> Result<()> {
    info!("launching virtual device {}", config.avd_name);
    plan(config).run().await
}
