//! UASD Portal CLI - the student portal from the terminal

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, RequestCommands, SubjectCommands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins over `--debug`, which wins over the `warn` default
fn init_logging(debug: bool) {
    let default_filter = if debug { "uasd=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { username, password } => cli::login::run(&opts, username, password).await,
        Commands::Logout => cli::logout::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Profile => cli::profile::run(&opts).await,
        Commands::News { limit } => cli::news::run(&opts, limit).await,
        Commands::Tasks { pending } => cli::tasks::run(&opts, pending).await,
        Commands::Subjects(cmd) => match cmd {
            SubjectCommands::Overview => cli::subjects::overview(&opts).await,
            SubjectCommands::Available { search } => {
                cli::subjects::available(&opts, search.as_deref()).await
            }
            SubjectCommands::Preselected => cli::subjects::preselected(&opts).await,
            SubjectCommands::Preselect { code } => cli::subjects::preselect(&opts, &code).await,
            SubjectCommands::Cancel { code } => cli::subjects::cancel(&opts, &code).await,
        },
        Commands::Requests(cmd) => match cmd {
            RequestCommands::List => cli::requests::list(&opts).await,
            RequestCommands::Types => cli::requests::types(&opts),
            RequestCommands::Create { kind, description } => {
                cli::requests::create(&opts, &kind, &description).await
            }
            RequestCommands::Cancel { id } => cli::requests::cancel(&opts, id).await,
        },
        Commands::Schedules { room, show } => {
            cli::schedules::run(&opts, room.as_deref(), show.as_deref()).await
        }
        Commands::Debts { unpaid, pay } => cli::debts::run(&opts, unpaid, pay.as_deref()).await,
        Commands::Events { show } => cli::events::run(&opts, show.as_deref()).await,
        Commands::Videos => cli::videos::run(&opts).await,
        Commands::ForgotPassword { username, email } => {
            cli::forgot_password::run(&opts, username, email).await
        }
        Commands::Completion { shell } => {
            cli::completion::run(shell);
            Ok(())
        }
        Commands::Version => {
            println!("uasd version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
