use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mineboard_core::{Cascade, CellCount, Coord, OpenOutcome};
use rand::Rng;

use command::{Command, HELP};
use render::BoardView;
use session::{Session, SessionState};
use settings::Settings;

mod command;
mod render;
mod session;
mod settings;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum CascadeArg {
    /// Spread only from tiles without adjacent mines
    ZeroCount,
    /// Spread from every opened tile
    Always,
}

impl From<CascadeArg> for Cascade {
    fn from(arg: CascadeArg) -> Self {
        match arg {
            CascadeArg::ZeroCount => Cascade::ZeroCount,
            CascadeArg::Always => Cascade::Always,
        }
    }
}

/// Terminal minesweeper
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board side length, saved for the next session
    #[arg(short, long)]
    size: Option<Coord>,

    /// Amount of mines, saved for the next session
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,

    /// When opening a tile spreads to its neighbors
    #[arg(long, value_enum, default_value_t = CascadeArg::ZeroCount)]
    cascade: CascadeArg,

    /// Where preferences are kept between sessions
    #[arg(long, default_value = "mineboard.toml")]
    settings: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = Settings::sync(&args.settings, args.size, args.mines)?;

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("seed: {}", seed);

    let mut session = Session::new(settings.board_config()?, args.cascade.into(), seed)?;
    play(&mut session, io::stdin().lock(), io::stdout().lock())
}

fn play(session: &mut Session, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    writeln!(output, "{HELP}\n")?;
    writeln!(output, "{}", BoardView(session.board()))?;

    for line in input.lines() {
        let line = line?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };

        let update = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::NewGame => session.new_game().map(|()| true),
            Command::Open(coords) => session.open(coords).map(OpenOutcome::has_update),
            Command::Mark(coords) => session.toggle_mark(coords).map(|outcome| outcome.has_update()),
        };

        match update {
            Ok(true) => {
                writeln!(output, "{}", BoardView(session.board()))?;
                match session.state() {
                    SessionState::Won => writeln!(output, "You won! Type \"new\" to play again.")?,
                    SessionState::Lost => writeln!(output, "Boom. Type \"new\" to play again.")?,
                    SessionState::Playing => {}
                }
            }
            Ok(false) if session.state().is_finished() => {
                writeln!(output, "The game is over. Type \"new\" to play again.")?
            }
            Ok(false) => {}
            Err(err) => writeln!(output, "{err}")?,
        }
    }

    Ok(())
}
