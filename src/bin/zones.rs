use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::anyhow;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use pitchzone::analysis::ZoneAnalysis;
use pitchzone::config::{Config, Options};
use pitchzone::data;
use pitchzone::print;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// directory to source the open data from
    #[clap(short = 'd', long, default_value = "data")]
    data: PathBuf,

    /// competition: epl, laliga or "fifa world cup"
    #[clap(short = 'c', long, default_value = "FIFA World Cup")]
    competition: String,

    /// team to analyse
    #[clap(short = 't', long, default_value = "England")]
    team: String,

    /// which of the team's matches to analyse: home, away or both
    #[clap(short = 's', long, default_value = "both")]
    scope: String,

    /// prefix of the generated constants; required when the scope is both
    #[clap(short = 'p', long)]
    prefix: Option<String>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if !self.data.is_dir() {
            return Err(anyhow!("data directory {} does not exist", self.data.display()));
        }
        Ok(())
    }
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Options {
            competition: args.competition,
            team_name: args.team,
            scope: args.scope,
            team_prefix: args.prefix,
        }
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
    debug!("args: {args:?}");
    let dir = args.data.clone();
    let config = Config::try_from(Options::from(args.clone()))?;
    args.validate()?;
    debug!("config: {config:?}");

    let start_time = Instant::now();
    let matches = data::read_matches(&dir, config.competition())?;
    let matches = data::select_matches(matches, config.team_name(), config.scope());
    info!(
        "{} {} match(es) for {} in {}: {:?}",
        matches.len(),
        config.scope(),
        config.team_name(),
        config.competition(),
        matches.iter().map(|m| m.match_id).collect::<Vec<_>>()
    );

    let match_events = data::read_match_events(&dir, &matches)?;
    let events = match_events.iter().flat_map(|m| m.events.iter());
    let analysis = ZoneAnalysis::compute(config.team_name(), events);
    info!(
        "{} shots taken ({} unclassified), {} shots faced ({} unclassified)",
        analysis.shots_taken.number_of_shots,
        analysis.shots_taken.skipped,
        analysis.shots_faced.number_of_shots,
        analysis.shots_faced.skipped
    );

    let console = Console::default();
    debug!(
        "shots taken:\n{}",
        console.render(&print::tabulate_shots(&analysis.shots_taken))
    );
    debug!(
        "shots faced:\n{}",
        console.render(&print::tabulate_shots(&analysis.shots_faced))
    );
    debug!(
        "passes made:\n{}",
        console.render(&print::tabulate_passes(&analysis.passes_made))
    );
    debug!(
        "passes faced:\n{}",
        console.render(&print::tabulate_passes(&analysis.passes_faced))
    );
    debug!(
        "probabilities:\n{}",
        console.render(&print::tabulate_probabilities(&analysis.probabilities))
    );

    println!("{}", print::format_defines(&analysis.probabilities, config.team_prefix()));
    info!("took {:.3}s", start_time.elapsed().as_millis() as f64 / 1_000.);
    Ok(())
}
