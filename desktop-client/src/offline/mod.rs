mod broadcaster;
mod local_game;

pub use broadcaster::LocalBroadcaster;
pub use local_game::{LocalGameSettings, spawn_local_game};
