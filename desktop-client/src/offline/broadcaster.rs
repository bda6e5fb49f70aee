use common::games::SessionBroadcaster;
use common::games::tictactoe::SessionSnapshot;
use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl SessionBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: SessionSnapshot) {
        self.shared_state.set_snapshot(snapshot);
    }
}
