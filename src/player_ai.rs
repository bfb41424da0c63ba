use crate::{
    ai::{self, Difficulty},
    config::GameConfig,
    game::GameSession,
};
use rand::rngs::SmallRng;

use crate::player::Agent;

/// Computer opponent playing at a fixed difficulty.
pub struct AiAgent {
    difficulty: Difficulty,
}

impl AiAgent {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Computer opponent requested by the configuration, `None` when both
    /// sides are human.
    pub fn from_config(config: &GameConfig) -> Option<Self> {
        match config.difficulty {
            Difficulty::None => None,
            difficulty => Some(Self::new(difficulty)),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Agent for AiAgent {
    fn select_column(&mut self, rng: &mut SmallRng, session: &GameSession) -> Option<isize> {
        let me = session.active_player()?;
        match ai::choose_column(
            session.board(),
            self.difficulty,
            me,
            me.other(),
            session.config().win_length,
            rng,
        ) {
            Ok(col) => Some(col as isize),
            Err(e) => {
                log::warn!("{} cannot move: {}", me, e);
                None
            }
        }
    }

    fn name(&self) -> &str {
        self.difficulty.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use rand::SeedableRng;

    #[test]
    fn ai_vs_ai_reaches_terminal_state() {
        let mut rng = SmallRng::seed_from_u64(123);
        let mut agents = [AiAgent::new(Difficulty::Easy), AiAgent::new(Difficulty::Medium)];
        let mut session = GameSession::standard();
        let mut turn = 0;
        while let Some(player) = session.active_player() {
            let agent = &mut agents[player.index()];
            let col = agent.select_column(&mut rng, &session).unwrap();
            assert!(session.submit_move(col).unwrap().is_accepted());
            turn += 1;
            assert!(turn <= 42, "game took too many turns");
        }
        assert!(matches!(
            session.status(),
            GameStatus::Won(_) | GameStatus::Tied
        ));
        assert_eq!(session.move_count(), session.board().piece_count());
    }

    #[test]
    fn opponent_follows_configured_difficulty() {
        assert!(AiAgent::from_config(&GameConfig::default()).is_none());
        let config = GameConfig::default().with_difficulty(Difficulty::Medium);
        let session = GameSession::new(config).unwrap();
        let agent = AiAgent::from_config(session.config()).unwrap();
        assert_eq!(agent.difficulty(), Difficulty::Medium);
        assert_eq!(agent.name(), "medium");
    }

    #[test]
    fn hard_agent_gives_up() {
        let mut rng = SmallRng::seed_from_u64(1);
        let session = GameSession::standard();
        let mut agent = AiAgent::new(Difficulty::Hard);
        assert_eq!(agent.select_column(&mut rng, &session), None);
        assert_eq!(agent.name(), "hard");
    }
}
