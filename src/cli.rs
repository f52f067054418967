//! Command-line surface
//!
//! One-word subcommands mapping onto the three operations. Anything else is a
//! usage error reported by clap before any external tool runs.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Build, deploy and emulate Android native binaries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Cross-compile the project for the fixed x86_64 / Debug configuration
    Build,
    /// Push a built binary to the attached device and execute it
    Run {
        /// Binary name inside the build output directory
        program: String,
    },
    /// Launch the configured virtual device
    Emulator {
        /// Extra tokens are accepted and ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        _rest: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_subcommand_is_a_usage_error() {
        assert!(Cli::try_parse_from(["android-run"]).is_err());
    }

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        assert!(Cli::try_parse_from(["android-run", "deploy"]).is_err());
    }

    #[test]
    fn run_requires_a_program_argument() {
        assert!(Cli::try_parse_from(["android-run", "run"]).is_err());

        let cli = Cli::try_parse_from(["android-run", "run", "foo"]).unwrap();
        match cli.command {
            Commands::Run { program } => assert_eq!(program, "foo"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn build_and_emulator_parse_bare() {
        assert!(matches!(
            Cli::try_parse_from(["android-run", "build"]).unwrap().command,
            Commands::Build
        ));
        assert!(matches!(
            Cli::try_parse_from(["android-run", "emulator"]).unwrap().command,
            Commands::Emulator { .. }
        ));
    }

    #[test]
    fn emulator_ignores_extra_tokens() {
        for extra in [&["extra"][..], &["-list-avds"], &["a", "b", "c"]] {
            let mut argv = vec!["android-run", "emulator"];
            argv.extend_from_slice(extra);

            let cli = Cli::try_parse_from(argv).unwrap();
            assert!(matches!(cli.command, Commands::Emulator { .. }));
        }
    }
}
