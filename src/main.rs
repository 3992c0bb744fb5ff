use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use lotoforge::api::LotoForgeState;
use lotoforge::config::FilterConfig;
use lotoforge::error::LfResult;
use lotoforge::store::DrawStore;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Draw history snapshot (JSON).
    #[arg(global = true, short, long, default_value = "data/loto7.json")]
    data: String,

    /// Partial filter config (JSON); flags given on the command line win.
    #[arg(global = true, short = 'c', long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,

    /// Print structured JSON instead of tables.
    #[arg(global = true, long, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Predict(cmd::predict::PredictArgs),
    Insights(cmd::insights::InsightsArgs),
    Evaluate(cmd::evaluate::EvaluateArgs),
    Import(cmd::import::ImportArgs),
    Add(cmd::add::AddArgs),
    Stats,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the JSON config file, then flags the user actually typed.
fn resolve_config(
    path: Option<&str>,
    flags: Option<(&FilterConfig, &ArgMatches)>,
) -> LfResult<FilterConfig> {
    let mut config = match path {
        Some(p) => {
            info!("⚖️  Loading filter config from: {}", p);
            FilterConfig::load_from_file(p)?
        }
        None => FilterConfig::default(),
    };
    if let Some((cli_config, sub_matches)) = flags {
        config.merge_from_cli(cli_config, sub_matches);
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli, matches: &ArgMatches) -> LfResult<()> {
    let flags = match &cli.command {
        Commands::Predict(args) => matches
            .subcommand_matches("predict")
            .map(|m| (&args.config, m)),
        Commands::Evaluate(args) => matches
            .subcommand_matches("evaluate")
            .map(|m| (&args.config, m)),
        _ => None,
    };
    let config = resolve_config(cli.config.as_deref(), flags)?;

    info!("📂 Loading draws: {}", cli.data);
    let store = DrawStore::open(&cli.data)?;
    if store.snapshot().is_empty() {
        warn!("⚠️  Dataset is empty; statistics fall back to neutral values.");
    }
    let state = LotoForgeState::new(store, config);

    match cli.command {
        Commands::Predict(args) => cmd::predict::run(args, &state, cli.json),
        Commands::Insights(args) => cmd::insights::run(args, &state, cli.json),
        Commands::Evaluate(args) => cmd::evaluate::run(args, &state, cli.json),
        Commands::Import(args) => cmd::import::run(args, &state, cli.json),
        Commands::Add(args) => cmd::add::run(args, &state, cli.json),
        Commands::Stats => cmd::stats::run(&state, cli.json),
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);
    let json = cli.json;

    if let Err(e) = run(cli, &matches) {
        if json {
            reports::print_json(&e.report());
        } else {
            error!("❌ {}", e);
        }
        process::exit(1);
    }
}
