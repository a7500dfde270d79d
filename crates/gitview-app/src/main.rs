use gitview_core::domain::WorkspacePane;
use gitview_core::services::{DialogService, FolderPicker, GitBackend, NoticeKind};
use gitview_state::model::Loadable;
use gitview_state::msg::Msg;
use gitview_state::session;
use gitview_state::store::{AppStore, Collaborators};
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

/// No native picker in this build; opening by picker always cancels.
struct HeadlessPicker;

impl FolderPicker for HeadlessPicker {
    fn pick_folder(&self) -> Option<PathBuf> {
        None
    }
}

/// Dialogs go to stderr. Confirmations decline, so nothing destructive
/// (like initializing a repository) happens without a real UI.
struct StderrDialogs;

impl DialogService for StderrDialogs {
    fn show_message(&self, kind: NoticeKind, text: &str) {
        let tag = match kind {
            NoticeKind::Info => "info",
            NoticeKind::Success => "ok",
            NoticeKind::Error => "error",
        };
        eprintln!("[{tag}] {text}");
    }

    fn confirm(&self, text: &str) -> bool {
        eprintln!("[confirm] {text} -- declining (headless)");
        false
    }
}

fn main() {
    let backend: Arc<dyn GitBackend> = if cfg!(feature = "git2") {
        #[cfg(feature = "git2")]
        {
            Arc::new(gitview_git2::Git2Backend)
        }

        #[cfg(not(feature = "git2"))]
        {
            gitview_git::default_backend()
        }
    } else {
        gitview_git::default_backend()
    };

    let (store, events) = AppStore::new(Collaborators {
        backend,
        picker: Arc::new(HeadlessPicker),
        dialogs: Arc::new(StderrDialogs),
    });
    store.dispatch(Msg::RestoreSession {
        recent_repos: session::load().list().to_vec(),
    });

    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            store.dispatch(Msg::OpenRecentRepo { path: path.clone() });
            store.dispatch(Msg::SelectWorkspace {
                pane: WorkspacePane::History,
            });
            wait_until_settled(&events);
            print_workspace(&store, &path);
        }
        None => {
            wait_until_settled(&events);
            let state = store.snapshot();
            if state.recent_repos.list().is_empty() {
                println!("No recent repositories.");
            } else {
                println!("Recent repositories:");
                for path in state.recent_repos.list() {
                    println!("  {}", path.display());
                }
            }
            println!("Usage: gitview-app <path-to-repository>");
        }
    }
}

/// Waits until the store has produced no state change for a short window.
/// There is no completion signal; quiescence stands in for one.
fn wait_until_settled(events: &mpsc::Receiver<gitview_state::msg::StoreEvent>) {
    let deadline = Instant::now() + Duration::from_secs(30);
    while Instant::now() < deadline {
        if events.recv_timeout(Duration::from_millis(500)).is_err() {
            return;
        }
    }
}

fn print_workspace(store: &AppStore, path: &std::path::Path) {
    let state = store.snapshot();

    println!("{}", path.display());
    println!("local branches:  {}", state.branches.local.join(", "));
    println!("remote branches: {}", state.branches.remote.join(", "));

    match (&state.current_branch, &state.log) {
        (Some(branch), Loadable::Ready(commits)) => {
            println!("history of {branch} ({} commits):", commits.len());
            for commit in commits.iter().take(20) {
                let marker = if commit.is_merge() { "M" } else { " " };
                println!("  {marker} {} {}", commit.id.short(), commit.summary);
            }
        }
        (_, Loadable::Error(message)) => eprintln!("[error] {message}"),
        _ => println!("history unavailable (no branch checked out?)"),
    }
}
