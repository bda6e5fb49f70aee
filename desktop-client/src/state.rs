use std::sync::{Arc, Mutex, MutexGuard};

use common::games::tictactoe::SessionSnapshot;
use eframe::egui;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Latest session snapshot, written by the runner thread and read by the UI.
#[derive(Clone)]
pub struct SharedState {
    snapshot: Arc<Mutex<Option<SessionSnapshot>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_snapshot(&self, snapshot: SessionSnapshot) {
        *lock(&self.snapshot) = Some(snapshot);
        self.request_repaint();
    }

    pub fn get_snapshot(&self) -> Option<SessionSnapshot> {
        lock(&self.snapshot).clone()
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, context: egui::Context) {
        *lock(&self.context) = Some(context);
    }

    fn request_repaint(&self) {
        if let Some(context) = lock(&self.context).as_ref() {
            context.request_repaint();
        }
    }
}
