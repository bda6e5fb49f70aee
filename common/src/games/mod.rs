mod broadcaster;
mod session_rng;

pub mod tictactoe;

pub use broadcaster::SessionBroadcaster;
pub use session_rng::SessionRng;
