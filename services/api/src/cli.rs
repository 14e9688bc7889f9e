use crate::check::{run_check, CheckArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use identity_screen::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Identity Screening Proxy",
    about = "Run the sanctions screening proxy or screen an identity from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Fill the intake form from flags and submit it to a running proxy
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["identity-screen-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_check_flags() {
        let cli = Cli::try_parse_from([
            "identity-screen-api",
            "check",
            "--full-name",
            "John Smith",
            "--birth-day",
            "5",
            "--birth-month",
            "1",
            "--birth-year",
            "1980",
            "--country",
            "USA",
            "--endpoint",
            "http://127.0.0.1:5000",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.full_name, "John Smith");
                assert_eq!(args.birth_month, "1");
                assert_eq!(args.endpoint.as_deref(), Some("http://127.0.0.1:5000"));
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn parses_serve_overrides() {
        let cli = Cli::try_parse_from(["identity-screen-api", "serve", "--port", "8080"])
            .expect("parses");

        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
