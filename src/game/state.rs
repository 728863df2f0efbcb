//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Created but not dealt yet.
    Setup,
    /// Waiting for the current player to play or pick up.
    InProgress,
    /// An eight was played and its player has not called a suit yet.
    AwaitingSuit,
    /// A hand is empty.
    Finished,
}
