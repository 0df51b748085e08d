use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rolo",
    about = "Rolo — in-memory contact directory over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the contact directory server
    Serve(ServeArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on, overriding the config file
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,
    /// Accept cross-origin requests from any origin
    #[arg(long)]
    pub cors: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_serve_with_bind() {
        let cli = Cli::parse_from(["rolo", "serve", "--bind", "127.0.0.1:8080", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.bind, Some("127.0.0.1:8080".parse().unwrap()));
                assert!(!args.cors);
            }
            Command::Config => panic!("expected serve"),
        }
    }

    #[test]
    fn parses_global_config_flag() {
        let cli = Cli::parse_from(["rolo", "config", "--config", "rolo.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("rolo.toml")));
        assert!(matches!(cli.command, Command::Config));
    }
}
