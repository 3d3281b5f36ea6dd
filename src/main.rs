use anyhow::Result;
use clap::Parser;
use clonesim_lib::app::{self, App};
use clonesim_lib::model::config::AppConfig;
use clonesim_lib::model::metrics::init_logging;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "interactive")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "clonesim.toml")]
    config: String,

    /// RNG seed, overriding the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Ticks to run in headless mode
    #[arg(short, long, default_value_t = 100)]
    ticks: u64,

    /// Print the headless summary as JSON
    #[arg(long)]
    json: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
enum Mode {
    Interactive,
    Headless,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match args.mode {
        Mode::Interactive => "warn",
        Mode::Headless => "info",
    });

    let mut config = AppConfig::load(&args.config)?;
    if args.seed.is_some() {
        config.simulation.seed = args.seed;
    }

    if args.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut app = App::new(config)?;

    match args.mode {
        Mode::Headless => {
            let summary = app::run_headless(&mut app, args.ticks);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", app.summary());
            }
        }
        Mode::Interactive => {
            let stdin = std::io::stdin();
            app::repl::run(&mut app, stdin.lock(), std::io::stdout())?;
        }
    }

    Ok(())
}
