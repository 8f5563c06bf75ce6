use crate::demo::{print_form, run_demo, DemoArgs, FormArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loc_compass::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Localization Competency Compass",
    about = "Serve and demonstrate the localization competency self-assessment",
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
    /// Run a canned assessment through scoring and print a text report
    Demo(DemoArgs),
    /// Print the rendered evaluation form markup for inspection
    Form(FormArgs),
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
        Command::Demo(args) => run_demo(args),
        Command::Form(args) => print_form(args),
    }
}
