//! # Form State
//!
//! Holds the window's [`FormController`] behind an async lock.
//!
//! ## Thread Safety
//! Tauri may run two commands at the same time (a double click, or a list
//! click while an add is in flight). Every handler awaits SQLite while it
//! holds the controller, so the lock is a `tokio::sync::Mutex` and each
//! action finishes before the next one reads the form.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_add ───┐                                                        │
//! │                ├──► lock().await ──► FormController ──► Screen          │
//! │  submit_delete ┘         (one at a time)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::controller::FormController;

/// Tauri-managed wrapper around the form controller.
#[derive(Debug, Clone)]
pub struct FormState {
    controller: Arc<Mutex<FormController>>,
}

impl FormState {
    pub fn new(controller: FormController) -> Self {
        FormState {
            controller: Arc::new(Mutex::new(controller)),
        }
    }

    /// Waits for exclusive access to the controller.
    pub async fn lock(&self) -> MutexGuard<'_, FormController> {
        self.controller.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::FormFields;
    use stockroom_db::{Database, DbConfig};

    #[tokio::test]
    async fn test_clones_share_controller() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let state = FormState::new(FormController::new(db).await.unwrap());
        let other = state.clone();

        state.lock().await.set_fields(FormFields {
            product_id: "7".to_string(),
            ..FormFields::default()
        });

        assert_eq!(other.lock().await.fields().product_id, "7");
    }
}
