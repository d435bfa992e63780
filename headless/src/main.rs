use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use game_core::{Config, FrameInput, MatchEvent, Params, Screen, Session, Side};

mod ai;
mod logging;

const DT: f32 = 1.0 / Params::TARGET_FPS as f32;

struct Args {
    config_path: Option<PathBuf>,
    preset: Option<String>,
    seed: u64,
    frames: u64,
    matches: u32,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            config_path: None,
            preset: None,
            seed: 12345,
            // Ten minutes of play at 60 FPS
            frames: 36_000,
            matches: 1,
        }
    }
}

fn print_usage() {
    eprintln!("Usage: headless [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <file.json>  Load match settings from a JSON file");
    eprintln!("  --preset <name>       pongdemonium (default), classic or arcade");
    eprintln!("  --seed <u64>          Seed for random deflection (default 12345)");
    eprintln!("  --frames <n>          Stop after this many frames (default 36000)");
    eprintln!("  --matches <n>         Matches to play before stopping (default 1)");
    eprintln!("  -h, --help            Show this help");
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value),
        None => bail!("{flag} requires a value"),
    }
}

/// Returns None when help was requested
fn parse_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                parsed.config_path = Some(PathBuf::from(next_value(&args, &mut i, "--config")?));
            }
            "--preset" => {
                parsed.preset = Some(next_value(&args, &mut i, "--preset")?.to_string());
            }
            "--seed" => {
                let value = next_value(&args, &mut i, "--seed")?;
                parsed.seed = value
                    .parse()
                    .with_context(|| format!("invalid --seed value {value:?}"))?;
            }
            "--frames" => {
                let value = next_value(&args, &mut i, "--frames")?;
                parsed.frames = value
                    .parse()
                    .with_context(|| format!("invalid --frames value {value:?}"))?;
            }
            "--matches" => {
                let value = next_value(&args, &mut i, "--matches")?;
                parsed.matches = value
                    .parse()
                    .with_context(|| format!("invalid --matches value {value:?}"))?;
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => {
                print_usage();
                bail!("unknown option: {other}");
            }
        }
        i += 1;
    }

    if parsed.config_path.is_some() && parsed.preset.is_some() {
        bail!("--config and --preset cannot be combined");
    }
    if parsed.matches == 0 {
        bail!("--matches must be at least 1");
    }

    Ok(Some(parsed))
}

fn load_config(args: &Args) -> Result<Config> {
    if let Some(path) = &args.config_path {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        return Ok(config);
    }

    match args.preset.as_deref() {
        Some(name) => match Config::preset(name) {
            Some(config) => Ok(config),
            None => bail!("unknown preset {name:?} (expected pongdemonium, classic or arcade)"),
        },
        None => Ok(Config::default()),
    }
}

fn main() -> Result<()> {
    logging::init_logging();

    let Some(args) = parse_args()? else {
        return Ok(());
    };
    let config = load_config(&args)?;
    let mut session = Session::new(config, args.seed).context("invalid match configuration")?;

    log::info!(
        "Playing {} match(es) on a {}x{} field, first to {}",
        args.matches,
        session.config().field_width,
        session.config().field_height,
        session.config().win_score
    );

    let mut wins = [0u32; 2];
    let mut played = 0u32;
    let mut frames = 0u64;

    while frames < args.frames && played < args.matches {
        let snapshot = session.snapshot();
        let config = session.config();

        let input = FrameInput {
            left: ai::track_ball(&snapshot, Side::Left, config),
            right: ai::track_ball(&snapshot, Side::Right, config),
            // Skip past the controls card and start the next match once one ends
            confirm: snapshot.screen == Screen::Controls || snapshot.winner().is_some(),
        };

        for event in session.frame(&input, DT).iter() {
            log::debug!("frame {frames}: {event:?}");
            if let MatchEvent::MatchWon { winner } = event {
                played += 1;
                match winner {
                    Side::Left => wins[0] += 1,
                    Side::Right => wins[1] += 1,
                }
            }
        }
        frames += 1;
    }

    let score = session.state().score;
    println!(
        "{played} match(es) in {frames} frames ({:.1} s simulated)",
        session.elapsed()
    );
    println!("wins: left {} / right {}", wins[0], wins[1]);
    println!("last score: {} - {}", score.left, score.right);

    if played < args.matches {
        log::warn!(
            "Frame limit reached after {played} of {} match(es)",
            args.matches
        );
    }

    Ok(())
}
