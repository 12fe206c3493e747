use clap::{Parser, Subcommand};
use hello_mcp::commands::{
    build_dispatcher, call_tool, export_schemas, list_tools, show_config, write_config,
};
use hello_mcp::config::{Config, get_config_dir};
use hello_mcp::mcp::InvocationResponse;
use hello_mcp::{HelloError, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hello-mcp")]
#[command(about = "Tool registry and request dispatcher for a minimal MCP server")]
#[command(version)]
struct Cli {
    /// Directory holding config.toml (default: ~/.hello-mcp)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the configuration file, or show it
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List registered tools
    List,
    /// Dispatch a single tool call and print the response
    Call {
        /// Name of the tool to call
        tool: String,
        /// Arguments as a JSON object, e.g. '{"text": "hi"}'
        #[arg(long)]
        args: Option<String>,
    },
    /// Export tool schemas as a JSON array
    Export {
        /// Output file
        #[arg(default_value = "tool_schemas.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config { show } => {
            let config_dir = match cli.config_dir {
                Some(dir) => dir,
                None => get_config_dir()?,
            };
            let config = Config::load(config_dir)?;
            if show {
                show_config(&config)?;
            } else {
                let path = write_config(&config)?;
                println!("Configuration written to {}", path.display());
            }
        }
        Commands::List => {
            let dispatcher = build_dispatcher()?;
            list_tools(dispatcher.registry());
        }
        Commands::Call { tool, args } => {
            let dispatcher = build_dispatcher()?;
            let response = call_tool(&dispatcher, &tool, args.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            if let InvocationResponse::Failure { kind, message } = response {
                return Err(HelloError::CallFailed { kind, message });
            }
        }
        Commands::Export { output } => {
            let dispatcher = build_dispatcher()?;
            let count = export_schemas(dispatcher.registry(), &output)?;
            println!("Exported {} tool schemas to {}", count, output.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn cli_parsing() {
        let cli = Cli::try_parse_from(["hello-mcp", "list"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            assert!(matches!(parsed.command, Commands::List));
            assert!(parsed.config_dir.is_none());
        }
    }

    #[test]
    fn call_command_with_args() {
        let cli = Cli::try_parse_from(["hello-mcp", "call", "echo", "--args", r#"{"text":"hi"}"#]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Call { tool, args } = parsed.command {
                assert_eq!(tool, "echo");
                assert_eq!(args.as_deref(), Some(r#"{"text":"hi"}"#));
            } else {
                panic!("expected call command");
            }
        }
    }

    #[test]
    fn call_command_without_args() {
        let cli = Cli::try_parse_from(["hello-mcp", "call", "hello"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Call { tool, args } = parsed.command {
                assert_eq!(tool, "hello");
                assert_eq!(args, None);
            }
        }
    }

    #[test]
    fn export_default_output() {
        let cli = Cli::try_parse_from(["hello-mcp", "export"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Export { output } = parsed.command {
                assert_eq!(output, PathBuf::from("tool_schemas.json"));
            }
        }
    }

    #[test]
    fn config_show_flag_with_dir() {
        let cli = Cli::try_parse_from(["hello-mcp", "config", "--show", "--config-dir", "/tmp/x"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            assert_eq!(parsed.config_dir, Some(PathBuf::from("/tmp/x")));
            if let Commands::Config { show } = parsed.command {
                assert!(show);
            }
        }
    }

    #[test]
    fn invalid_command() {
        let cli = Cli::try_parse_from(["hello-mcp", "invalid"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        }
    }

    #[test]
    fn call_requires_tool_name() {
        let cli = Cli::try_parse_from(["hello-mcp", "call"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        }
    }
}
