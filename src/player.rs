use crate::common::MoveError;
use crate::game::GameSession;
use rand::rngs::SmallRng;

/// Source of column choices for one side of a game: a human input adapter
/// or the computer opponent.
pub trait Agent {
    /// Choose the next column for the session's active player. Returning
    /// `None` abandons the game.
    fn select_column(&mut self, rng: &mut SmallRng, session: &GameSession) -> Option<isize>;

    /// Display name.
    fn name(&self) -> &str;

    /// Inform the agent that its last submission was rejected.
    fn handle_rejection(&mut self, _column: isize, _reason: MoveError) {}
}
