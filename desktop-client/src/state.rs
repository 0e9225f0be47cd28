use std::sync::{Arc, Mutex, PoisonError};

use eframe::egui;
use tictactoe_common::session::SessionSnapshot;

/// Latest published session state, shared between the session thread and the UI.
#[derive(Clone, Default)]
pub struct SharedState {
    snapshot: Arc<Mutex<Option<SessionSnapshot>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_snapshot(&self, snapshot: SessionSnapshot) {
        *self.snapshot.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot);
        self.request_repaint();
    }

    pub fn get_snapshot(&self) -> Option<SessionSnapshot> {
        *self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().unwrap_or_else(PoisonError::into_inner) = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().unwrap_or_else(PoisonError::into_inner).as_ref() {
            ctx.request_repaint();
        }
    }
}
