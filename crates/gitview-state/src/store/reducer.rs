use crate::model::{
    AppState, BranchSet, DiagnosticEntry, DiagnosticKind, Loadable, Notice, RecentRepos, Route,
    SelectionPhase,
};
use crate::msg::{Effect, Msg};
use crate::session;
use gitview_core::domain::WorkspacePane;
use gitview_core::services::NoticeKind;
use std::path::PathBuf;
use std::time::SystemTime;

const MAX_NOTICES: usize = 100;
const MAX_DIAGNOSTICS: usize = 200;

pub(super) fn reduce(state: &mut AppState, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::RestoreSession { recent_repos } => {
            state.recent_repos = RecentRepos::from_entries(recent_repos);
            Vec::new()
        }

        Msg::OpenRepoRequested => {
            state.selection = SelectionPhase::PickingFolder;
            vec![Effect::PickFolder]
        }
        Msg::FolderPicked { selection: None } => {
            state.selection = SelectionPhase::Idle;
            vec![push_notice(state, NoticeKind::Info, "No folder selected.")]
        }
        Msg::FolderPicked {
            selection: Some(path),
        } => {
            state.selection = SelectionPhase::CheckingRepoStatus { path: path.clone() };
            vec![Effect::DetectRepo { path }]
        }
        Msg::RepoDetected { path, result } => match result {
            Ok(true) => enter_repository(state, path, "This is a valid Git repository!"),
            Ok(false) => {
                state.selection = SelectionPhase::ConfirmingInit { path: path.clone() };
                vec![Effect::ConfirmInit { path }]
            }
            Err(e) => {
                state.selection = SelectionPhase::Idle;
                push_diagnostic(
                    state,
                    DiagnosticKind::Error,
                    format!("repository detection failed for {}: {e}", path.display()),
                );
                vec![push_notice(
                    state,
                    NoticeKind::Error,
                    "Failed to check if the folder is a Git repository.",
                )]
            }
        },
        Msg::InitDecision {
            path: _,
            accepted: false,
        } => {
            state.selection = SelectionPhase::Idle;
            vec![push_notice(state, NoticeKind::Info, "Operation cancelled.")]
        }
        Msg::InitDecision {
            path,
            accepted: true,
        } => {
            state.selection = SelectionPhase::Initializing { path: path.clone() };
            vec![Effect::InitRepo { path }]
        }
        Msg::RepoInitialized {
            path,
            result: Ok(()),
        } => enter_repository(state, path, "Initialized a new Git repository!"),
        Msg::RepoInitialized {
            path,
            result: Err(e),
        } => {
            state.selection = SelectionPhase::Idle;
            push_diagnostic(
                state,
                DiagnosticKind::Error,
                format!("initialization failed for {}: {e}", path.display()),
            );
            vec![push_notice(
                state,
                NoticeKind::Error,
                "Failed to initialize the Git repository.",
            )]
        }

        Msg::OpenRecentRepo { path } => navigate_to_repo(state, path),
        Msg::SelectWorkspace { pane } => select_workspace(state, pane),

        Msg::BranchesLoaded { path, result } => {
            // Stale if the user navigated away since the request was issued.
            if state.active_repo.as_deref() != Some(path.as_path()) {
                return Vec::new();
            }
            match result {
                Ok(entries) => state.branches = BranchSet::partition(entries),
                Err(e) => {
                    // Degrades to empty lists rather than blocking navigation.
                    state.branches = BranchSet::default();
                    push_diagnostic(
                        state,
                        DiagnosticKind::Warning,
                        format!("branch listing failed for {}: {e}", path.display()),
                    );
                }
            }
            Vec::new()
        }

        Msg::CurrentBranchLoaded { path, result } => {
            if state.active_repo.as_deref() != Some(path.as_path())
                || state.workspace != WorkspacePane::History
            {
                return Vec::new();
            }
            match result {
                Ok(branch) => {
                    state.current_branch = Some(branch.clone());
                    state.log = Loadable::Loading;
                    vec![Effect::LoadCommitLog { path, branch }]
                }
                Err(e) => {
                    // The history view shows its own "could not determine
                    // branch" placeholder; nothing else surfaces.
                    state.current_branch = None;
                    state.log = Loadable::NotLoaded;
                    push_diagnostic(
                        state,
                        DiagnosticKind::Warning,
                        format!("current branch unavailable for {}: {e}", path.display()),
                    );
                    Vec::new()
                }
            }
        }

        Msg::CommitLogLoaded {
            path,
            branch,
            result,
        } => {
            // Apply only if the initiating snapshot still matches the live
            // (location, branch, pane) triple; responses may arrive in any
            // order and there is no cancellation.
            let snapshot_is_current = state.active_repo.as_deref() == Some(path.as_path())
                && state.workspace == WorkspacePane::History
                && state.current_branch.as_deref() == Some(branch.as_str());
            if !snapshot_is_current {
                return Vec::new();
            }

            state.log = match result {
                Ok(commits) => Loadable::Ready(commits),
                Err(e) => {
                    push_diagnostic(
                        state,
                        DiagnosticKind::Error,
                        format!("commit log failed for {branch} in {}: {e}", path.display()),
                    );
                    let text = e.to_string();
                    if text.trim().is_empty() {
                        Loadable::Error("Failed to load commits".to_string())
                    } else {
                        Loadable::Error(text)
                    }
                }
            };
            Vec::new()
        }
    }
}

/// Success tail of the selection flow: notice, recents update, navigation.
fn enter_repository(state: &mut AppState, path: PathBuf, notice: &str) -> Vec<Effect> {
    state.selection = SelectionPhase::Idle;

    let mut effects = vec![push_notice(state, NoticeKind::Success, notice)];

    state.recent_repos.add(path.clone());
    let _ = session::persist(&state.recent_repos);

    effects.extend(navigate_to_repo(state, path));
    effects
}

fn navigate_to_repo(state: &mut AppState, path: PathBuf) -> Vec<Effect> {
    state.route = Route::RepoDetail { path: path.clone() };
    state.active_repo = Some(path.clone());
    state.workspace = WorkspacePane::WorkingCopy;
    state.branches = BranchSet::default();
    state.current_branch = None;
    state.log = Loadable::NotLoaded;

    vec![Effect::LoadBranches { path }]
}

fn select_workspace(state: &mut AppState, pane: WorkspacePane) -> Vec<Effect> {
    if state.workspace == pane {
        return Vec::new();
    }
    state.workspace = pane;

    // Derived branch context never survives a pane change: no stale branch
    // name or log may show for a view that did not produce it.
    state.current_branch = None;
    state.log = Loadable::NotLoaded;

    if pane == WorkspacePane::History
        && let Some(path) = state.active_repo.clone()
    {
        return vec![Effect::LoadCurrentBranch { path }];
    }
    Vec::new()
}

fn push_notice(state: &mut AppState, kind: NoticeKind, text: &str) -> Effect {
    state.notices.push(Notice {
        kind,
        text: text.to_string(),
    });
    if state.notices.len() > MAX_NOTICES {
        let excess = state.notices.len() - MAX_NOTICES;
        state.notices.drain(..excess);
    }

    Effect::Notify {
        kind,
        text: text.to_string(),
    }
}

fn push_diagnostic(state: &mut AppState, kind: DiagnosticKind, message: String) {
    state.diagnostics.push(DiagnosticEntry {
        time: SystemTime::now(),
        kind,
        message,
    });
    if state.diagnostics.len() > MAX_DIAGNOSTICS {
        let excess = state.diagnostics.len() - MAX_DIAGNOSTICS;
        state.diagnostics.drain(..excess);
    }
}
