//! Football Blitz CLI
//!
//! Headless text host: pick a team, call plays by name on stdin, and watch
//! the opponent drive between possessions.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::Parser;
use football_blitz::{
    find_team, DrivePhase, FieldGoalModel, GameConfig, GameSession, OpponentRules, PlayReport,
    Side,
};

/// Opponent snaps resolved per drive before control returns to stdin.
const MAX_OPPONENT_PLAYS: usize = 200;

#[derive(Parser)]
#[command(name = "football-blitz")]
#[command(about = "Call plays, score touchdowns, survive the opponent's drives", long_about = None)]
struct Cli {
    /// Team to coach (display only)
    #[arg(long, default_value = "49ers")]
    team: String,

    /// RNG seed for a reproducible game
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Give the opponent downs, touchdowns and extra points
    #[arg(long, default_value = "false")]
    symmetric: bool,

    /// Use the distance curve for field goals instead of a flat 70%
    #[arg(long, default_value = "false")]
    distance_field_goals: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let Some(team) = find_team(&cli.team) else {
        bail!("unknown team '{}'", cli.team);
    };

    let mut config = GameConfig::default().with_team(team).with_seed(cli.seed);
    if cli.symmetric {
        config = config.with_opponent(OpponentRules::Symmetric);
    }
    if cli.distance_field_goals {
        config = config.with_field_goal(FieldGoalModel::Distance);
    }

    let mut session = GameSession::new(config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if session.phase() == DrivePhase::AwaitingOpponentPlay {
            for report in session.resolve_opponent_drive(MAX_OPPONENT_PLAYS)? {
                print_report(&mut stdout, &report)?;
            }
            continue;
        }

        let snapshot = session.snapshot();
        writeln!(stdout, "\n{snapshot}")?;
        let names: Vec<&str> = snapshot.legal_plays.iter().map(|p| p.name()).collect();
        writeln!(stdout, "Plays: {}", names.join(", "))?;
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        match session.select_play_named(input) {
            Ok(report) => print_report(&mut stdout, &report)?,
            Err(err) if err.is_illegal_play() => writeln!(stdout, "{err}")?,
            Err(err) => return Err(err.into()),
        }
    }

    session.end();
    let state = session.state();
    writeln!(
        stdout,
        "\nFinal: {} {} - Opponent {}",
        state.team(),
        state.score(Side::Player),
        state.score(Side::Opponent)
    )?;
    Ok(())
}

fn print_report(out: &mut impl Write, report: &PlayReport) -> io::Result<()> {
    for line in &report.narratives {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
