use std::future::Future;

use super::tictactoe::SessionSnapshot;

/// Receives the session state after every applied action.
pub trait SessionBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SessionSnapshot) -> impl Future<Output = ()> + Send;
}
