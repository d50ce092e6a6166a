//! Persistence for the project collection and the active-project selection.
//!
//! State lives in two named slots inside a data directory: `projects.json`
//! holds the full project collection as a JSON array, and `current_project`
//! holds the bare id of the last selected project. The store is best-effort:
//! no operation surfaces an error to its caller. Write failures are logged
//! and swallowed; reads of absent or corrupt data degrade to "no saved
//! state". The in-memory collection owned by the board stays authoritative
//! for the rest of the session either way.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::project::Project;

/// File name of the slot holding the serialized project collection.
pub const PROJECTS_SLOT: &str = "projects.json";
/// File name of the slot holding the active project id.
pub const CURRENT_PROJECT_SLOT: &str = "current_project";

/// Best-effort persistence for the board state.
///
/// Implementations must tolerate any corruption of previously stored data
/// by degrading to an empty collection rather than failing the caller.
pub trait ProjectStore {
    /// Mirror the full project collection to the store.
    fn save(&self, projects: &[Project]);

    /// Read the project collection back; empty on absence or any failure.
    fn load(&self) -> Vec<Project>;

    /// Persist which project is currently selected; `None` clears the slot.
    fn save_current_project_id(&self, id: Option<&str>);

    /// Read the persisted selection, if any.
    fn load_current_project_id(&self) -> Option<String>;

    /// Remove both slots.
    fn clear_all(&self);
}

/// JSON-file store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: &Path) -> Self {
        JsonStore { dir: dir.to_path_buf() }
    }

    fn projects_path(&self) -> PathBuf {
        self.dir.join(PROJECTS_SLOT)
    }

    fn current_path(&self) -> PathBuf {
        self.dir.join(CURRENT_PROJECT_SLOT)
    }

    /// Atomic-ish write via temp + rename.
    fn write_slot(&self, path: &Path, data: &str) -> std::io::Result<()> {
        let tmp = path.with_extension("tmp");
        let mut f = File::create(&tmp)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}

impl ProjectStore for JsonStore {
    fn save(&self, projects: &[Project]) {
        let data = match serde_json::to_string_pretty(projects) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Failed to serialise projects: {e}");
                return;
            }
        };
        if let Err(e) = self.write_slot(&self.projects_path(), &data) {
            eprintln!("Failed to save projects: {e}");
        }
    }

    fn load(&self) -> Vec<Project> {
        let path = self.projects_path();
        if !path.exists() {
            return Vec::new();
        }
        match fs::read_to_string(&path) {
            Ok(buf) => match serde_json::from_str(&buf) {
                Ok(projects) => projects,
                Err(e) => {
                    eprintln!("Error parsing saved projects, starting fresh: {e}");
                    Vec::new()
                }
            },
            Err(e) => {
                eprintln!("Error reading saved projects, starting fresh: {e}");
                Vec::new()
            }
        }
    }

    fn save_current_project_id(&self, id: Option<&str>) {
        match id {
            Some(id) => {
                if let Err(e) = self.write_slot(&self.current_path(), id) {
                    eprintln!("Failed to save current project id: {e}");
                }
            }
            None => {
                if let Err(e) = fs::remove_file(self.current_path()) {
                    if e.kind() != std::io::ErrorKind::NotFound {
                        eprintln!("Failed to clear current project id: {e}");
                    }
                }
            }
        }
    }

    fn load_current_project_id(&self) -> Option<String> {
        let id = fs::read_to_string(self.current_path()).ok()?;
        let id = id.trim();
        if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        }
    }

    fn clear_all(&self) {
        for path in [self.projects_path(), self.current_path()] {
            if let Err(e) = fs::remove_file(&path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    eprintln!("Failed to remove {}: {e}", path.display());
                }
            }
        }
    }
}

/// In-memory store; stands in for `JsonStore` in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: RefCell<Vec<Project>>,
    current: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectStore for MemoryStore {
    fn save(&self, projects: &[Project]) {
        *self.projects.borrow_mut() = projects.to_vec();
    }

    fn load(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    fn save_current_project_id(&self, id: Option<&str>) {
        *self.current.borrow_mut() = id.map(|s| s.to_string());
    }

    fn load_current_project_id(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    fn clear_all(&self) {
        self.projects.borrow_mut().clear();
        *self.current.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Priority, Status};
    use crate::task::{Comment, Task};
    use chrono::Utc;

    fn sample_projects() -> Vec<Project> {
        let comment = Comment {
            id: "1".to_string(),
            content: "Looks good so far.".to_string(),
            author: "Reviewer".to_string(),
            created_at: Utc::now(),
        };
        let task = Task {
            id: "1".to_string(),
            title: "Ship the login page".to_string(),
            description: "Email + password, nothing fancy".to_string(),
            status: Status::Progress,
            priority: Priority::High,
            assignee: Some("Ana".to_string()),
            reporter: "Ben".to_string(),
            comments: vec![comment],
            created_at: Utc::now(),
            updated_at: Utc::now(),
            story_points: Some(5),
            outcome: Some("Login shipped behind a flag".to_string()),
        };
        vec![Project {
            id: "1".to_string(),
            name: "Demo".to_string(),
            key: "DEM".to_string(),
            description: "Round-trip fixture".to_string(),
            tasks: vec![task],
            created_at: Utc::now(),
        }]
    }

    #[test]
    fn test_save_load_round_trip_preserves_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let projects = sample_projects();

        store.save(&projects);
        let loaded = store.load();

        // Field-exact, timestamps included.
        assert_eq!(loaded, projects);
    }

    #[test]
    fn test_load_without_prior_save_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        assert!(store.load().is_empty());
        assert!(store.load_current_project_id().is_none());
    }

    #[test]
    fn test_load_with_corrupt_slot_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        std::fs::write(dir.path().join(PROJECTS_SLOT), "not json at all {").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_current_project_slot_holds_bare_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        store.save_current_project_id(Some("42"));
        let raw = std::fs::read_to_string(dir.path().join(CURRENT_PROJECT_SLOT)).unwrap();
        assert_eq!(raw.trim(), "42");
        assert_eq!(store.load_current_project_id().as_deref(), Some("42"));

        store.save_current_project_id(None);
        assert!(store.load_current_project_id().is_none());
        // Clearing an already-clear slot is fine.
        store.save_current_project_id(None);
    }

    #[test]
    fn test_clear_all_removes_both_slots() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store.save(&sample_projects());
        store.save_current_project_id(Some("1"));

        store.clear_all();
        assert!(!dir.path().join(PROJECTS_SLOT).exists());
        assert!(!dir.path().join(CURRENT_PROJECT_SLOT).exists());
        store.clear_all();
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        let projects = sample_projects();
        store.save(&projects);
        store.save_current_project_id(Some("1"));
        assert_eq!(store.load(), projects);
        assert_eq!(store.load_current_project_id().as_deref(), Some("1"));
        store.clear_all();
        assert!(store.load().is_empty());
        assert!(store.load_current_project_id().is_none());
    }
}
