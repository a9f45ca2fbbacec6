//! On-disk session store: authentication token and last-selected workspace.
//!
//! One store per directory, passed down explicitly so tests can run
//! against temporary directories without sharing global state. Both keys
//! are best-effort: missing or unreadable files mean a logged-out session
//! with no prior workspace.

use crate::data::Workspace;
use anyhow::{Context, Result};
use std::path::PathBuf;

const TOKEN_KEY: &str = "clickup_token";
const WORKSPACE_KEY: &str = "last_workspace";

pub fn default_dir() -> Result<PathBuf> {
    let dir = directories::ProjectDirs::from("", "", "taskdeck")
        .context("Could not determine data directory")?
        .data_dir()
        .to_path_buf();
    Ok(dir)
}

#[derive(Debug)]
pub struct SessionStore {
    dir: PathBuf,
    token: Option<String>,
    last_workspace: Option<Workspace>,
}

impl SessionStore {
    /// Open a store rooted at `dir`, restoring any persisted state.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let token = std::fs::read_to_string(dir.join(TOKEN_KEY))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let last_workspace = std::fs::read_to_string(dir.join(WORKSPACE_KEY))
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok());
        Self {
            dir,
            token,
            last_workspace,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn last_workspace(&self) -> Option<&Workspace> {
        self.last_workspace.as_ref()
    }

    /// Persist a token. Blank tokens are rejected before any I/O.
    pub fn save_token(&mut self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            anyhow::bail!("token must not be empty");
        }

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.dir.join(TOKEN_KEY);
        std::fs::write(&path, token)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        // Restrict token file permissions (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))?;
        }

        self.token = Some(token.to_string());
        Ok(())
    }

    pub fn save_last_workspace(&mut self, workspace: &Workspace) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.dir.join(WORKSPACE_KEY);
        let content = serde_json::to_string(workspace)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        self.last_workspace = Some(workspace.clone());
        Ok(())
    }

    /// Remove both persisted keys and forget the in-memory session.
    pub fn clear(&mut self) {
        for key in [TOKEN_KEY, WORKSPACE_KEY] {
            let path = self.dir.join(key);
            if let Err(e) = std::fs::remove_file(&path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Failed to remove {}: {}", path.display(), e);
                }
            }
        }
        self.token = None;
        self.last_workspace = None;
    }
}
