use crate::model::RecentRepos;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

const SESSION_FILE: &str = "recent_repos.json";

/// The session file is a single JSON array of repository location strings,
/// most recent first.
pub fn load() -> RecentRepos {
    let Some(path) = session_file_path() else {
        return RecentRepos::default();
    };

    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> RecentRepos {
    let Ok(contents) = fs::read_to_string(path) else {
        return RecentRepos::default();
    };
    let Ok(raw) = serde_json::from_str::<Vec<String>>(&contents) else {
        return RecentRepos::default();
    };

    RecentRepos::from_entries(
        raw.iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .map(PathBuf::from),
    )
}

pub fn persist(recents: &RecentRepos) -> io::Result<()> {
    let Some(path) = session_file_path() else {
        return Ok(());
    };

    persist_to_path(recents, &path)
}

pub fn persist_to_path(recents: &RecentRepos, path: &Path) -> io::Result<()> {
    let entries: Vec<String> = recents
        .list()
        .iter()
        .map(|p| p.to_string_lossy().to_string())
        .collect();

    replace_file(path, &entries)
}

/// Writes through a staging file so readers never observe a half-written
/// session, then swaps it into place.
fn replace_file(path: &Path, value: &impl Serialize) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let staged = path.with_extension("tmp");
    fs::write(&staged, serde_json::to_vec(value).expect("session data is serializable"))?;

    if let Err(rename_err) = fs::rename(&staged, path) {
        // Not every platform lets rename replace an existing file
        // (Windows); degrade to copy and clean up the staging file.
        let copied = fs::copy(&staged, path);
        let _ = fs::remove_file(&staged);
        if let Err(copy_err) = copied {
            return Err(io::Error::new(
                copy_err.kind(),
                format!("rename failed: {rename_err}; copy failed: {copy_err}"),
            ));
        }
    }
    Ok(())
}

fn session_file_path() -> Option<PathBuf> {
    // Unit tests pass explicit paths and must never touch the real state
    // directory.
    if cfg!(test) {
        return None;
    }

    Some(state_dir()?.join(SESSION_FILE))
}

#[cfg(target_os = "linux")]
fn state_dir() -> Option<PathBuf> {
    match env::var_os("XDG_STATE_HOME") {
        Some(dir) => Some(PathBuf::from(dir).join("gitview")),
        None => {
            let home = env::var_os("HOME")?;
            Some(PathBuf::from(home).join(".local/state/gitview"))
        }
    }
}

#[cfg(target_os = "macos")]
fn state_dir() -> Option<PathBuf> {
    let home = env::var_os("HOME")?;
    Some(PathBuf::from(home).join("Library/Application Support/gitview"))
}

#[cfg(target_os = "windows")]
fn state_dir() -> Option<PathBuf> {
    let base = env::var_os("LOCALAPPDATA").or_else(|| env::var_os("APPDATA"))?;
    Some(PathBuf::from(base).join("gitview"))
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn state_dir() -> Option<PathBuf> {
    let home = env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".gitview"))
}
