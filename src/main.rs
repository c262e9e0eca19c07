//! Magnet Survival headless runner
//!
//! Plays a session with the autopilot at a fixed 60 Hz clock and logs how
//! long it survived. Rendering and keyboard input live in the host
//! frontend; this binary exercises the simulation only.
//!
//! Usage: magnet-survival [--ticks N] [--seed S] [--tuning PATH]

use std::process::ExitCode;

use clap::{Arg, Command};
use magnet_survival::autopilot::Autopilot;
use magnet_survival::consts::TICK_RATE_HZ;
use magnet_survival::sim::{
    Clock, FixedStepClock, FrameView, GameEvent, GameState, ShapeOverlap, format_elapsed, tick,
};
use magnet_survival::{InitError, Tuning};

struct Args {
    ticks: u64,
    seed: u64,
    tuning: Option<String>,
}

fn command() -> Command {
    Command::new("magnet-survival")
        .about("Plays a headless Magnet Survival session with the autopilot")
        .arg(
            Arg::new("ticks")
                .long("ticks")
                .value_name("N")
                .help("Maximum number of 60 Hz ticks to simulate")
                .value_parser(clap::value_parser!(u64))
                .default_value("18000"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("S")
                .help("Autopilot RNG seed")
                .value_parser(clap::value_parser!(u64))
                .default_value("1"),
        )
        .arg(
            Arg::new("tuning")
                .long("tuning")
                .value_name("PATH")
                .help("JSON tuning file (defaults are used when omitted)"),
        )
}

fn parse_args<I, T>(argv: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = command().try_get_matches_from(argv)?;
    Ok(Args {
        ticks: matches.get_one::<u64>("ticks").copied().unwrap_or_default(),
        seed: matches.get_one::<u64>("seed").copied().unwrap_or_default(),
        tuning: matches.get_one::<String>("tuning").cloned(),
    })
}

fn run(args: &Args) -> Result<(), InitError> {
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let clock = FixedStepClock::from_hz(TICK_RATE_HZ);
    let mut state = GameState::new(tuning)?;
    let mut pilot = Autopilot::new(args.seed);
    let mut legs = 0u64;

    for _ in 0..args.ticks {
        let input = pilot.next_input(&state);
        tick(&mut state, &input, &clock, &ShapeOverlap);
        clock.step();

        for event in &state.events {
            match event {
                GameEvent::WeaponRetargeted { .. } => legs += 1,
                GameEvent::PlayerHit { health } => log::info!("Hit! {} hearts left", health),
                _ => {}
            }
        }
        if state.is_game_over() {
            break;
        }
    }

    let view = FrameView::capture(&state, clock.now());
    log::info!(
        "Finished: survived {} with {} hearts, {} frames, {} weapon legs{}",
        format_elapsed(view.elapsed),
        view.health,
        state.session.frame_count,
        legs,
        if view.game_over() { " (GAME OVER)" } else { "" }
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Magnet Survival (headless) starting...");

    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            // Help and version requests land here too
            let _ = e.print();
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Session failed to start: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = parse_args(["magnet-survival"]).expect("no flags");
        assert_eq!(args.ticks, 60 * 60 * 5);
        assert_eq!(args.seed, 1);
        assert!(args.tuning.is_none());
    }

    #[test]
    fn test_flags() {
        let args = parse_args([
            "magnet-survival",
            "--seed",
            "9",
            "--tuning",
            "balance.json",
            "--ticks",
            "120",
        ])
        .expect("valid flags");
        assert_eq!(args.ticks, 120);
        assert_eq!(args.seed, 9);
        assert_eq!(args.tuning.as_deref(), Some("balance.json"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse_args(["magnet-survival", "--ticks", "lots"]).is_err());
        assert!(parse_args(["magnet-survival", "--bogus", "1"]).is_err());
        assert!(parse_args(["magnet-survival", "--seed"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }
}
