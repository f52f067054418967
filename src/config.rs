//! Toolchain configuration
//!
//! All paths and identifiers the three operations need, resolved once at
//! startup and passed by reference. Nothing here changes for the lifetime of
//! the process.

use std::env;
use std::path::PathBuf;

use crate::error::{Result, RunnerError};

/// NDK release carrying the CMake toolchain file.
pub const NDK_VERSION: &str = "22.1.7171670";

/// ANDROID_PLATFORM value passed to the toolchain file.
pub const ANDROID_PLATFORM: &str = "16";

/// SDK-bundled CMake release whose Ninja we build with.
pub const SDK_CMAKE_VERSION: &str = "3.18.1";

/// Virtual device the `emulator` subcommand launches.
pub const AVD_NAME: &str = "Pixel_3a_API_26";

/// Build output directory, created next to the project sources.
pub const BUILD_DIR: &str = "build_android";

/// Device-side staging directory for pushed binaries.
pub const DEVICE_DIR: &str = "/data/local";

/// Resolved toolchain paths and identifiers
#[derive(Debug, Clone)]
pub struct ToolchainConfig {
    /// Android SDK root (ANDROID_HOME)
    pub sdk_root: PathBuf,
    /// `<sdk>/tools`, where the emulator executable lives
    pub tools_dir: PathBuf,
    /// `<sdk>/platform-tools`, where adb lives
    pub platform_tools_dir: PathBuf,
    /// CMake toolchain file inside the NDK
    pub toolchain_file: PathBuf,
    /// Target platform API level
    pub platform: String,
    /// SDK-bundled Ninja executable
    pub ninja: PathBuf,
    /// Device bridge executable
    pub adb: PathBuf,
    /// Virtual device launched by the emulator operation
    pub avd_name: String,
    /// Build output directory, relative to the project root
    pub build_dir: PathBuf,
}

impl ToolchainConfig {
    /// Resolve the configuration from the environment.
    ///
    /// ANDROID_HOME / ANDROID_SDK_ROOT take precedence; otherwise the SDK is
    /// expected at the default install location under the user profile
    /// directory.
    pub fn resolve() -> Result<Self> {
        let sdk_root = env::var_os("ANDROID_HOME")
            .or_else(|| env::var_os("ANDROID_SDK_ROOT"))
            .map(PathBuf::from)
            .or_else(default_sdk_root)
            .ok_or(RunnerError::SdkNotFound)?;

        Ok(Self::from_sdk_root(sdk_root))
    }

    /// Build the configuration from a known SDK root.
    pub fn from_sdk_root(sdk_root: PathBuf) -> Self {
        let ndk_root = sdk_root.join("ndk").join(NDK_VERSION);
        let toolchain_file = ndk_root
            .join("build")
            .join("cmake")
            .join("android.toolchain.cmake");
        let ninja = sdk_root
            .join("cmake")
            .join(SDK_CMAKE_VERSION)
            .join("bin")
            .join(exe("ninja"));
        let tools_dir = sdk_root.join("tools");
        let platform_tools_dir = sdk_root.join("platform-tools");
        let adb = platform_tools_dir.join(exe("adb"));

        Self {
            sdk_root,
            tools_dir,
            platform_tools_dir,
            toolchain_file,
            platform: ANDROID_PLATFORM.to_string(),
            ninja,
            adb,
            avd_name: AVD_NAME.to_string(),
            build_dir: PathBuf::from(BUILD_DIR),
        }
    }

    /// Emulator executable inside the tools directory.
    pub fn emulator(&self) -> PathBuf {
        self.tools_dir.join(exe("emulator"))
    }

    /// Device-side path for a pushed binary.
    pub fn device_path(&self, program: &str) -> String {
        format!("{}/{}", DEVICE_DIR, program)
    }
}

/// Default SDK install location under the user profile directory.
fn default_sdk_root() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    if cfg!(windows) {
        Some(home.join("AppData").join("Local").join("Android").join("Sdk"))
    } else {
        Some(home.join("Android").join("Sdk"))
    }
}

/// Platform executable name
fn exe(name: &str) -> String {
    if cfg!(windows) {
        format!("{}.exe", name)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn config_derives_toolchain_paths_from_sdk_root() {
        let config = ToolchainConfig::from_sdk_root(PathBuf::from("/opt/android-sdk"));

        assert_eq!(config.sdk_root, Path::new("/opt/android-sdk"));
        assert!(config
            .toolchain_file
            .ends_with(Path::new("build/cmake/android.toolchain.cmake")));
        assert!(config.toolchain_file.to_string_lossy().contains(NDK_VERSION));
        assert!(config.ninja.to_string_lossy().contains(SDK_CMAKE_VERSION));
        assert_eq!(config.platform_tools_dir, Path::new("/opt/android-sdk/platform-tools"));
        assert_eq!(config.tools_dir, Path::new("/opt/android-sdk/tools"));
        assert_eq!(config.avd_name, AVD_NAME);
    }

    #[test]
    fn device_path_joins_staging_dir_and_program() {
        let config = ToolchainConfig::from_sdk_root(PathBuf::from("/sdk"));
        assert_eq!(config.device_path("hello"), "/data/local/hello");
    }

    #[cfg(unix)]
    #[test]
    fn adb_and_emulator_have_no_exe_suffix_on_unix() {
        let config = ToolchainConfig::from_sdk_root(PathBuf::from("/sdk"));
        assert_eq!(config.adb, Path::new("/sdk/platform-tools/adb"));
        assert_eq!(config.emulator(), Path::new("/sdk/tools/emulator"));
    }
}
