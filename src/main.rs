use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::info;

use scrabble_engine::agents::{Agent, AgentKind, SearchConfig};
use scrabble_engine::game::GameState;
use scrabble_engine::lexicon::Lexicon;
use scrabble_engine::logging::setup_logging;

/// Play a full game of Scrabble between configured agents.
#[derive(Parser, Debug)]
#[command(name = "scrabble", version, about = "Scrabble move generator and search agents")]
struct Args {
    /// Dictionary file, one word per line
    #[arg(long)]
    dict: PathBuf,

    /// One agent per seat
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [AgentKind::Greedy, AgentKind::Greedy]
    )]
    agents: Vec<AgentKind>,

    /// Seed for the bag shuffle, exchanges and search randomness
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// JSON file overriding the default search hyperparameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every move and print the board after each one
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> scrabble_engine::Result<()> {
    let args = Args::parse();
    setup_logging(if args.verbose { "debug" } else { "info" })?;

    let lexicon = Arc::new(Lexicon::from_file(&args.dict)?);
    info!(
        "loaded {} words from {}",
        lexicon.len(),
        args.dict.display()
    );

    let config = match &args.config {
        Some(path) => SearchConfig::from_json_file(path)?,
        None => SearchConfig::default(),
    };

    let mut agents: Vec<Box<dyn Agent>> = args
        .agents
        .iter()
        .enumerate()
        .map(|(i, kind)| kind.build(&config, args.seed.wrapping_add(i as u64 + 1)))
        .collect();
    let names: Vec<String> = agents
        .iter()
        .enumerate()
        .map(|(i, agent)| format!("{}-{}", agent.name(), i + 1))
        .collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let mut state = GameState::new(lexicon, &name_refs, args.seed);
    let mut turns = 0u32;
    while !state.is_terminal() {
        let idx = state.current_index();
        let play = agents[idx].choose_play(&state);
        let points = state.score_play(&play);
        info!("{} -> {play} ({points} points)", state.current_player().name);
        state.apply_play(&play);
        if args.verbose {
            println!("{}", state.board());
        }
        turns += 1;
    }

    info!("game over after {turns} turns");
    for player in state.players() {
        println!("{}: {} points", player.name, player.score);
    }
    if let Some(winner) = state.players().iter().max_by_key(|p| p.score) {
        println!("winner: {}", winner.name);
    }
    Ok(())
}
