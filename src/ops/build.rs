//! Build operation
//!
//! CMake configure + build against the NDK toolchain file, using the
//! SDK-bundled Ninja as the make program. Both invocations run inside the
//! build output directory, which is created on demand.

use tracing::info;

use crate::config::ToolchainConfig;
use crate::error::Result;
use crate::exec::{run_sequence, CommandSpec};

/// Target ABI passed to the toolchain file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiTarget {
    X86_64,
    Arm64V8a,
}

impl AbiTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbiTarget::X86_64 => "x86_64",
            AbiTarget::Arm64V8a => "arm64-v8a",
        }
    }
}

/// Build configuration name passed to `cmake --build`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildProfile::Debug => "Debug",
            BuildProfile::Release => "Release",
        }
    }
}

/// Plan the configure and build invocations, in order.
pub fn plan(config: &ToolchainConfig, abi: AbiTarget, profile: BuildProfile) -> Vec<CommandSpec> {
    let configure = CommandSpec::new("cmake")
        .args(["-G", "Ninja"])
        .arg(format!(
            "-DCMAKE_TOOLCHAIN_FILE={}",
            config.toolchain_file.display()
        ))
        .arg(format!("-DANDROID_ABI={}", abi.as_str()))
        .arg(format!("-DANDROID_PLATFORM={}", config.platform))
        .arg(format!("-DCMAKE_MAKE_PROGRAM={}", config.ninja.display()))
        .arg("..")
        .current_dir(&config.build_dir);

    let build = CommandSpec::new("cmake")
        .args(["--build", "."])
        .args(["--config", profile.as_str()])
        .current_dir(&config.build_dir);

    vec![configure, build]
}

/// Execute the build: ensure the output directory, configure, build.
pub async fn execute(
    config: &ToolchainConfig,
    abi: AbiTarget,
    profile: BuildProfile,
) -> Result<()> {
    info!(
        "building {} / {} into {}",
        abi.as_str(),
        profile.as_str(),
        config.build_dir.display()
    );

    tokio::fs::create_dir_all(&config.build_dir).await?;
    run_sequence(&plan(config, abi, profile)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config() -> ToolchainConfig {
        ToolchainConfig::from_sdk_root(PathBuf::from("/sdk"))
    }

    #[test]
    fn plan_is_configure_then_build() {
        let config = test_config();
        let plan = plan(&config, AbiTarget::X86_64, BuildProfile::Debug);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].arg_list()[..2], ["-G", "Ninja"]);
        assert_eq!(plan[1].arg_list(), ["--build", ".", "--config", "Debug"]);
    }

    #[test]
    fn configure_carries_toolchain_abi_platform_and_ninja() {
        let config = test_config();
        let plan = plan(&config, AbiTarget::X86_64, BuildProfile::Debug);
        let line = plan[0].render();

        assert!(line.contains("-DCMAKE_TOOLCHAIN_FILE="));
        assert!(line.contains("android.toolchain.cmake"));
        assert!(line.contains("-DANDROID_ABI=x86_64"));
        assert!(line.contains("-DANDROID_PLATFORM=16"));
        assert!(line.contains("-DCMAKE_MAKE_PROGRAM="));
        assert!(line.contains("ninja"));
        assert!(line.ends_with(".."));
    }

    #[test]
    fn both_steps_run_in_the_build_directory() {
        let config = test_config();
        for spec in plan(&config, AbiTarget::Arm64V8a, BuildProfile::Release) {
            assert_eq!(spec.cwd(), Some(config.build_dir.as_path()));
        }
    }

    #[test]
    fn release_profile_is_forwarded() {
        let config = test_config();
        let plan = plan(&config, AbiTarget::Arm64V8a, BuildProfile::Release);
        assert!(plan[1].arg_list().contains(&"Release".to_string()));
        assert!(plan[0].render().contains("-DANDROID_ABI=arm64-v8a"));
    }
}
