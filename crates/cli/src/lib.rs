use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "labmock")]
#[command(about = "Labmock - mock HTTP APIs for hemostasis and point-of-care lab instruments")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the mock instrument service
    Start {
        /// Optional configuration file; defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the HTTP port
        #[arg(short, long)]
        port: Option<u16>,

        /// Override the log format (pretty, json, compact)
        #[arg(long)]
        log_format: Option<String>,
    },

    /// Validate a configuration file without starting the service
    Validate {
        /// Path to the configuration file
        #[arg(short, long, default_value = "labmock.yaml")]
        config: PathBuf,
    },

    /// Write a configuration file with all defaults
    Init {
        /// Output path for the new configuration file
        #[arg(short, long, default_value = "labmock.yaml")]
        output: PathBuf,
    },

    /// Print the registered routes in match order
    Routes,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_start_without_flags() {
        let cli = Cli::try_parse_from(["labmock", "start"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Start {
                config: None,
                host: None,
                port: None,
                log_format: None,
            }
        );
    }

    #[test]
    fn test_start_with_overrides() {
        let cli = Cli::try_parse_from([
            "labmock",
            "start",
            "--config",
            "lab.yaml",
            "--host",
            "127.0.0.1",
            "-p",
            "5050",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Start {
                config: Some(PathBuf::from("lab.yaml")),
                host: Some("127.0.0.1".to_string()),
                port: Some(5050),
                log_format: Some("json".to_string()),
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range_port() {
        assert!(Cli::try_parse_from(["labmock", "start", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_defaults_for_validate_and_init() {
        let cli = Cli::try_parse_from(["labmock", "validate"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Validate {
                config: PathBuf::from("labmock.yaml")
            }
        );

        let cli = Cli::try_parse_from(["labmock", "init", "-o", "out.yaml"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Init {
                output: PathBuf::from("out.yaml")
            }
        );

        let cli = Cli::try_parse_from(["labmock", "routes"]).unwrap();
        assert_eq!(cli.command, Commands::Routes);
    }
}
