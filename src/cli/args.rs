//! CLI argument definitions using clap
//!
//! Commands:
//! - promptdock serve --host <addr> --port <port>

use clap::{Parser, Subcommand};

/// promptdock - HTTP facade over a prompt-document store
#[derive(Parser, Debug)]
#[command(name = "promptdock")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the prompt facade HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 7071)]
        port: u16,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["promptdock", "serve"]).unwrap();
        let Command::Serve { host, port } = cli.command;
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, 7071);
    }

    #[test]
    fn test_serve_flags() {
        let cli =
            Cli::try_parse_from(["promptdock", "serve", "--host", "127.0.0.1", "--port", "9000"])
                .unwrap();
        let Command::Serve { host, port } = cli.command;
        assert_eq!(host, "127.0.0.1");
        assert_eq!(port, 9000);
    }
}
