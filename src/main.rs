use connect_four::{
    init_logging, render_history, render_session, Agent, AiAgent, CliAgent, Difficulty,
    GameConfig, GameSession, MoveOutcome, Player,
};

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Level {
    None,
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::None => Difficulty::None,
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Side {
    A,
    B,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::A => Player::A,
            Side::B => Player::B,
        }
    }
}

#[derive(clap::Args, Debug)]
struct BoardArgs {
    #[arg(long, default_value_t = connect_four::DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = connect_four::DEFAULT_COLS)]
    cols: usize,
    #[arg(long, default_value_t = connect_four::DEFAULT_WIN_LENGTH)]
    win_length: usize,
    #[arg(long, value_enum, default_value_t = Side::A, help = "Player that moves first")]
    first: Side,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

impl BoardArgs {
    fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_size(self.rows, self.cols)
            .with_win_length(self.win_length)
            .with_starting_player(self.first.into())
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal; Player B is the computer unless difficulty is `none`.
    Play {
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long, value_enum, default_value_t = Level::None)]
        difficulty: Level,
    },
    /// Watch two computer players.
    Watch {
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long, value_enum, default_value_t = Level::Medium)]
        a: Level,
        #[arg(long, value_enum, default_value_t = Level::Easy)]
        b: Level,
    },
}

/// Who moves for each player. A shared seat is two humans at one terminal.
enum Seats {
    Shared(Box<dyn Agent>),
    Split([Box<dyn Agent>; 2]),
}

impl Seats {
    fn agent(&mut self, player: Player) -> &mut dyn Agent {
        match self {
            Seats::Shared(agent) => agent.as_mut(),
            Seats::Split([a, b]) => match player {
                Player::A => a.as_mut(),
                Player::B => b.as_mut(),
            },
        }
    }
}

/// Drive a session until it ends or an agent gives up.
fn run(
    session: &mut GameSession,
    seats: &mut Seats,
    rng: &mut SmallRng,
    show_every_move: bool,
) -> anyhow::Result<()> {
    while let Some(player) = session.active_player() {
        let agent = seats.agent(player);
        let Some(column) = agent.select_column(rng, session) else {
            println!("{} ({}) left the game", player, agent.name());
            return Ok(());
        };
        match session.submit_move(column)? {
            MoveOutcome::Accepted { mv, .. } => {
                if show_every_move {
                    println!("{} plays column {}", player, mv.col + 1);
                    render_session(&mut std::io::stdout(), session)?;
                }
            }
            MoveOutcome::Rejected { reason, .. } => agent.handle_rejection(column, reason),
        }
    }
    let mut out = std::io::stdout();
    render_session(&mut out, session)?;
    render_history(&mut out, session)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { board, difficulty } => {
            let config = board.config().with_difficulty(difficulty.into());
            let mut session = GameSession::new(config)?;
            let mut rng = board.rng();
            // stdin can only be owned by one agent
            let mut seats = match AiAgent::from_config(session.config()) {
                None => Seats::Shared(Box::new(CliAgent::new())),
                Some(ai) => {
                    let human: Box<dyn Agent> = Box::new(CliAgent::new());
                    Seats::Split([human, Box::new(ai)])
                }
            };
            run(&mut session, &mut seats, &mut rng, false)?;
        }
        Commands::Watch { board, a, b } => {
            let mut session = GameSession::new(board.config())?;
            let mut rng = board.rng();
            let first: Box<dyn Agent> = Box::new(AiAgent::new(a.into()));
            let mut seats = Seats::Split([first, Box::new(AiAgent::new(b.into()))]);
            run(&mut session, &mut seats, &mut rng, true)?;
        }
    }
    Ok(())
}
