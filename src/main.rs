//! Breakout entry point
//!
//! Native builds have no window of their own: the game runs headless,
//! replaying recorded input, and reports through the logger.
//!
//! Usage: `breakout [SCRIPT.json] [--frames N] [--fast]` (set `RUST_LOG=info` to see output)
//!
//! Without a script the ball is served every time it can be with the mouse
//! held at the window center, for `--frames` frames.

use breakout::GameConfig;
use breakout::platform::{HeadlessFrontend, InputSnapshot, Pacing, run};

/// One minute at 60 fps
const DEFAULT_FRAMES: usize = 3600;

struct Args {
    script: Option<String>,
    frames: usize,
    pacing: Pacing,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        script: None,
        frames: DEFAULT_FRAMES,
        pacing: Pacing::Realtime,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--fast" => args.pacing = Pacing::Unlimited,
            "--frames" => {
                let value = iter.next().ok_or("--frames needs a value")?;
                args.frames = value
                    .parse()
                    .map_err(|e| format!("invalid frame count {value:?}: {e}"))?;
            }
            other if args.script.is_none() => args.script = Some(other.to_string()),
            other => return Err(format!("unexpected argument {other:?}")),
        }
    }

    Ok(args)
}

fn load_frontend(args: &Args, config: &GameConfig) -> Result<HeadlessFrontend, String> {
    match &args.script {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {path}: {e}"))?;
            let frontend = HeadlessFrontend::from_json(&json)
                .map_err(|e| format!("invalid input script {path}: {e}"))?;
            log::info!("Replaying {path}");
            Ok(frontend)
        }
        None => {
            let serve = InputSnapshot {
                primary_button: true,
                mouse_x: Some(config.window_width / 2.0),
                ..Default::default()
            };
            Ok(HeadlessFrontend::new(vec![serve; args.frames]))
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Breakout (headless) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            eprintln!("usage: breakout [SCRIPT.json] [--frames N] [--fast]");
            std::process::exit(2);
        }
    };

    let config = GameConfig::default();
    let mut frontend = match load_frontend(&args, &config) {
        Ok(frontend) => frontend,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };

    match run(&mut frontend, config, args.pacing) {
        Ok(summary) => {
            log::info!(
                "Finished: {} frames, {} bricks, {} lives lost, {} clears, {} game overs, best score {}",
                summary.frames,
                summary.bricks_destroyed,
                summary.lives_lost,
                summary.stage_clears,
                summary.game_overs,
                summary.best_score
            );
        }
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    }
}
