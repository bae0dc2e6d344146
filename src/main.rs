use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use langrank::config::Config;
use langrank::LrResult;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; flags typed on the command line override it
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Identify the language of a document
    Classify(cmd::classify::ClassifyArgs),
    /// Rebuild and overwrite stored language profiles
    Train(cmd::train::TrainArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &clap::ArgMatches) -> LrResult<()> {
    let cli_config = match &cli.command {
        Commands::Classify(args) => &args.config,
        Commands::Train(args) => &args.config,
    };

    let config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading Config from: {}", path.display());
            let mut file_config = Config::load_from_file(path)?;
            if let Some((_, sub_matches)) = matches.subcommand() {
                file_config.merge_from_cli(cli_config, sub_matches);
            }
            file_config
        }
        None => cli_config.clone(),
    };
    config.validate()?;

    match cli.command {
        Commands::Classify(args) => cmd::classify::run(&args, &config),
        Commands::Train(args) => cmd::train::run(&args, &config),
    }
}
