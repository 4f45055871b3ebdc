use crate::report::{run_evaluate, run_rules, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use signal_risk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "signal-risk",
    about = "Score signal bot settings for risk from the command line or over HTTP",
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
    /// Evaluate a set of settings and print warnings, score, and recommendations
    Evaluate(EvaluateArgs),
    /// Print the rule table used for scoring
    Rules,
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Rules => run_rules(),
    }
}
