use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tinyrand::{Seeded, StdRand};
use tracing::{debug, info};

use scorecast::file::FromJsonFile;
use scorecast::random;
use scorecast::timed::Timed;
use scorecast_soccer::config::PredictionConfig;
use scorecast_soccer::domain::Fixture;
use scorecast_soccer::predictor::{fixture_seed, Predictor};
use scorecast_soccer::print;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// JSON file containing the fixtures to predict
    #[clap(short = 'f', long)]
    file: PathBuf,

    /// JSON file containing the prediction config
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// seed for reproducible predictions; taken from the clock if omitted
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// number of simulations per side, overriding the config
    #[clap(long)]
    simulations: Option<usize>,

    /// print the corrected scoregrid of each fixture
    #[clap(long)]
    scoregrid: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.simulations == Some(0) {
            bail!("the number of simulations must be positive");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let mut config = match &args.config {
        None => PredictionConfig::default(),
        Some(path) => PredictionConfig::from_json_file(path)?,
    };
    if let Some(simulations) = args.simulations {
        config.simulations = simulations;
    }
    debug!("config: {config:?}");
    let predictor = Predictor::try_from(config)?;

    let fixtures = Timed::result(|| Vec::<Fixture>::from_json_file(&args.file))?;
    debug!("read fixtures in {:?}", fixtures.elapsed);
    let fixtures = fixtures.value;
    let seed = args.seed.unwrap_or_else(random::clock_seed);
    info!("predicting {} fixture(s) with seed {seed}", fixtures.len());

    let results = predictor.predict_batch(&fixtures, seed);
    let table = print::tabulate_predictions(&fixtures, &results);
    info!("\n{}", Console::default().render(&table));

    if args.scoregrid {
        for (index, fixture) in fixtures.iter().enumerate() {
            let mut rand = StdRand::seed(fixture_seed(seed, index));
            let simulation = predictor.simulate(fixture, &mut rand);
            let table = print::tabulate_scoregrid(&simulation.scoregrid);
            info!(
                "{}: scoregrid (%)\n{}",
                fixture.name.as_deref().unwrap_or("fixture"),
                Console::default().render(&table)
            );
        }
    }
    Ok(())
}
