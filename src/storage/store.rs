use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::config::get_default_players;
use crate::domain::{Player, Session};
use crate::errors::store_context;
use crate::state::ViewState;

/// Key under which the whole planner state is saved
pub const STATE_KEY: &str = "tennisScheduler";

/// Everything the planner keeps between runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredState {
    pub sessions: Vec<Session>,
    pub players: Vec<Player>,
    pub view: ViewState,
}

impl StoredState {
    /// Saved roster, or the default one when none was saved
    pub fn roster(&self) -> Vec<Player> {
        if self.players.is_empty() {
            get_default_players()
        } else {
            self.players.clone()
        }
    }
}

/// File-based key-value store for the planner state.
///
/// Writes go to a temp file that is renamed over the state file, so readers
/// see either the old or the new state. Writers are serialized by `lock`.
pub struct StateStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl StateStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).context("Failed to create state directory")?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    /// Load the saved state.
    ///
    /// A missing file gives `None`. So does a file that no longer parses; the
    /// error is logged and the next save overwrites it.
    pub fn load_state(&self) -> Result<Option<StoredState>> {
        let path = self.state_path();
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).with_context(|| store_context("read", &path))?;
        match serde_json::from_str(&json) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                warn!("Ignoring unreadable state file {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    pub fn save_state(&self, state: &StoredState) -> Result<()> {
        let _guard = self.acquire()?;
        self.write_state(state)
    }

    /// Load (or start empty), apply `change`, save and return the result
    pub fn update_state<F>(&self, change: F) -> Result<StoredState>
    where
        F: FnOnce(&mut StoredState),
    {
        let _guard = self.acquire()?;
        let mut state = self.load_state()?.unwrap_or_default();
        change(&mut state);
        self.write_state(&state)?;
        Ok(state)
    }

    pub fn append_session(&self, session: Session) -> Result<StoredState> {
        info!(
            "Logging session at {} on {}",
            session.court_name, session.date
        );
        self.update_state(|state| state.sessions.push(session))
    }

    pub fn clear(&self) -> Result<()> {
        let _guard = self.acquire()?;
        let path = self.state_path();
        if path.exists() {
            fs::remove_file(&path).with_context(|| store_context("remove", &path))?;
        }
        Ok(())
    }

    fn state_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", STATE_KEY))
    }

    fn acquire(&self) -> Result<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| anyhow!("State store lock poisoned"))
    }

    // Caller holds the lock
    fn write_state(&self, state: &StoredState) -> Result<()> {
        let path = self.state_path();
        let temp_path = self
            .dir
            .join(format!("{}.json.{}.tmp", STATE_KEY, std::process::id()));

        let json = serde_json::to_string_pretty(state).context("Failed to serialize state")?;
        fs::write(&temp_path, json).with_context(|| store_context("write", &temp_path))?;
        fs::rename(&temp_path, &path).with_context(|| store_context("replace", &path))?;
        Ok(())
    }
}
