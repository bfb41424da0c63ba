use connect_four::prelude::*;
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play one computer-vs-computer game and print the result as JSON.
#[derive(Parser)]
struct Args {
    #[arg(long, default_value = "medium")]
    a: Difficulty,
    #[arg(long, default_value = "easy")]
    b: Difficulty,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut session = GameSession::standard();
    let mut agents = [AiAgent::new(args.a), AiAgent::new(args.b)];

    while let Some(player) = session.active_player() {
        let agent = match player {
            Player::A => &mut agents[0],
            Player::B => &mut agents[1],
        };
        let column = agent
            .select_column(&mut rng, &session)
            .ok_or_else(|| anyhow::anyhow!("{} ({}) has no move", player, agent.name()))?;
        session.submit_move(column)?;
    }

    let snapshot = session.snapshot();
    let result = json!({
        "status": format!("{}", snapshot.status),
        "winner": snapshot.status.winner(),
        "moves": snapshot.history.len(),
        "history": snapshot.history,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
