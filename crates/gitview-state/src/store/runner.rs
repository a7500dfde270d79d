use crate::msg::{Effect, Msg};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

use super::Collaborators;

pub(super) fn worker_count() -> usize {
    // A handful of workers is enough; effects are short collaborator calls,
    // and a blocking dialog should not starve the backend fetches.
    match std::thread::available_parallelism() {
        Ok(n) => n.get().clamp(1, 4),
        Err(_) => 2,
    }
}

/// Runs effects against the collaborators on a small worker pool. Each effect
/// resolves into at most one completion `Msg`, tagged with the inputs that
/// spawned it, sent back to the reducer.
pub(super) struct EffectRunner {
    tx: mpsc::Sender<Effect>,
    _workers: Vec<thread::JoinHandle<()>>,
}

impl EffectRunner {
    pub(super) fn new(
        workers: usize,
        collaborators: Arc<Collaborators>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        let (tx, rx) = mpsc::channel::<Effect>();
        let rx = Arc::new(Mutex::new(rx));

        let _workers = (0..workers.max(1))
            .map(|_| {
                let rx = Arc::clone(&rx);
                let collaborators = Arc::clone(&collaborators);
                let msg_tx = msg_tx.clone();
                thread::spawn(move || {
                    loop {
                        let effect = {
                            let rx = rx.lock().expect("effect queue poisoned");
                            rx.recv()
                        };
                        match effect {
                            Ok(effect) => perform(&collaborators, &msg_tx, effect),
                            Err(_) => return,
                        }
                    }
                })
            })
            .collect();

        Self { tx, _workers }
    }

    pub(super) fn run(&self, effect: Effect) {
        let _ = self.tx.send(effect);
    }
}

/// Collaborator calls may block their worker (dialogs do, backends can);
/// the reducer thread itself never blocks on them.
fn perform(collaborators: &Collaborators, msg_tx: &mpsc::Sender<Msg>, effect: Effect) {
    match effect {
        Effect::PickFolder => {
            let selection = collaborators.picker.pick_folder();
            let _ = msg_tx.send(Msg::FolderPicked { selection });
        }
        Effect::DetectRepo { path } => {
            let result = collaborators.backend.is_repository(&path);
            let _ = msg_tx.send(Msg::RepoDetected { path, result });
        }
        Effect::ConfirmInit { path } => {
            let accepted = collaborators.dialogs.confirm(
                "This folder is not a Git repository. Do you want to initialize it as one?",
            );
            let _ = msg_tx.send(Msg::InitDecision { path, accepted });
        }
        Effect::InitRepo { path } => {
            let result = collaborators.backend.init_repository(&path);
            let _ = msg_tx.send(Msg::RepoInitialized { path, result });
        }
        Effect::Notify { kind, text } => {
            collaborators.dialogs.show_message(kind, &text);
        }
        Effect::LoadBranches { path } => {
            let result = collaborators.backend.list_branches(&path);
            let _ = msg_tx.send(Msg::BranchesLoaded { path, result });
        }
        Effect::LoadCurrentBranch { path } => {
            let result = collaborators.backend.current_branch(&path);
            let _ = msg_tx.send(Msg::CurrentBranchLoaded { path, result });
        }
        Effect::LoadCommitLog { path, branch } => {
            let result = collaborators.backend.list_commits(&path, &branch);
            let _ = msg_tx.send(Msg::CommitLogLoaded {
                path,
                branch,
                result,
            });
        }
    }
}
