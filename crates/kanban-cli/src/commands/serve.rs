//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use kanban_core::config::KanbanConfig;
use kanban_core::Store;
use kanban_web::BoardContext;
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(long, env = "KANBAN_PORT")]
    pub port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long, env = "KANBAN_HOST")]
    pub host: Option<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to ./kanban-serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

/// Pick host and port: flag or env var first, then config.
fn resolve_addr(args: &ServeArgs, config: &KanbanConfig) -> (String, u16) {
    let host = args
        .host
        .clone()
        .unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    (host, port)
}

pub async fn execute(args: ServeArgs, config: &KanbanConfig) -> Result<()> {
    let (host, port) = resolve_addr(&args, config);

    let store = Store::new(config.board.seed.initial_state());
    let ctx = BoardContext::new(store, config.board.title.as_str());

    println!();
    println!("  {} {}", "Kanban".cyan().bold(), "Web Board".bold());
    println!();
    println!("  {}  http://{}:{}", "Board".green(), host, port);
    println!("  {}    http://{}:{}/api/board", "API".green(), host, port);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    kanban_web::run_server(ctx, &host, port).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Cli, Commands};
    use clap::Parser;
    use kanban_core::config::{DEFAULT_HOST, DEFAULT_PORT};

    fn serve_args(argv: &[&str]) -> ServeArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Serve(args) => args,
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let args = serve_args(&["kanban", "serve", "--host", "0.0.0.0", "--port", "9000"]);
        let mut config = KanbanConfig::default();
        config.server.port = 8080;

        assert_eq!(resolve_addr(&args, &config), ("0.0.0.0".to_string(), 9000));
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let args = ServeArgs {
            port: None,
            host: None,
            log: false,
            log_file: None,
        };
        let mut config = KanbanConfig::default();
        config.server.host = "10.0.0.5".to_string();

        assert_eq!(resolve_addr(&args, &config), ("10.0.0.5".to_string(), DEFAULT_PORT));
        assert_eq!(
            resolve_addr(&args, &KanbanConfig::default()),
            (DEFAULT_HOST.to_string(), DEFAULT_PORT)
        );
    }

    #[test]
    fn test_env_overrides_config() {
        std::env::set_var("KANBAN_PORT", "7070");
        let args = serve_args(&["kanban", "serve", "--host", "127.0.0.2"]);
        std::env::remove_var("KANBAN_PORT");

        let mut config = KanbanConfig::default();
        config.server.port = 8080;
        assert_eq!(resolve_addr(&args, &config), ("127.0.0.2".to_string(), 7070));
    }

    #[test]
    fn test_log_file_requires_log() {
        assert!(Cli::try_parse_from(["kanban", "serve", "--log-file", "x.log"]).is_err());
        let args = serve_args(&["kanban", "serve", "--log", "--log-file", "x.log"]);
        assert!(args.log);
    }
}
