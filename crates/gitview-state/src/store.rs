use crate::model::AppState;
use crate::msg::{Msg, StoreEvent};
use gitview_core::services::{DialogService, FolderPicker, GitBackend};
use std::sync::{Arc, RwLock, mpsc};
use std::thread;

mod reducer;
mod runner;

use reducer::reduce;
use runner::{EffectRunner, worker_count};

/// External collaborators the orchestration core calls out to. All of them
/// are invoked from worker threads, never from the reducer thread.
pub struct Collaborators {
    pub backend: Arc<dyn GitBackend>,
    pub picker: Arc<dyn FolderPicker>,
    pub dialogs: Arc<dyn DialogService>,
}

pub struct AppStore {
    state: Arc<RwLock<AppState>>,
    msg_tx: mpsc::Sender<Msg>,
}

impl Clone for AppStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            msg_tx: self.msg_tx.clone(),
        }
    }
}

impl AppStore {
    pub fn new(collaborators: Collaborators) -> (Self, mpsc::Receiver<StoreEvent>) {
        let state = Arc::new(RwLock::new(AppState::default()));
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let (event_tx, event_rx) = mpsc::channel::<StoreEvent>();

        let thread_state = Arc::clone(&state);
        let thread_msg_tx = msg_tx.clone();

        thread::spawn(move || {
            let runner = EffectRunner::new(worker_count(), Arc::new(collaborators), thread_msg_tx);

            while let Ok(msg) = msg_rx.recv() {
                let effects = {
                    let mut app_state = thread_state.write().expect("state lock poisoned (write)");

                    reduce(&mut app_state, msg)
                };

                let _ = event_tx.send(StoreEvent::StateChanged);

                for effect in effects {
                    runner.run(effect);
                }
            }
        });

        (Self { state, msg_tx }, event_rx)
    }

    pub fn dispatch(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }

    pub fn snapshot(&self) -> AppState {
        self.state
            .read()
            .expect("state lock poisoned (read)")
            .clone()
    }
}
