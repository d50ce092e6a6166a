//! Board state controller.
//!
//! The `Board` owns the authoritative in-memory project collection and the
//! current selection, and exposes every mutation the CLI and TUI perform.
//! After each mutation the full collection is mirrored through the injected
//! [`ProjectStore`]; the store is write-mostly and best-effort, so a failed
//! mirror never disturbs the in-memory state.
//!
//! Validation lives here, not in the presentation layer: empty required
//! fields and duplicate project keys abort the operation with a
//! [`BoardError`] and no state change. Unknown project/task ids are silent
//! no-ops.

use chrono::Utc;

use crate::fields::Status;
use crate::project::{normalise_key, Project};
use crate::store::ProjectStore;
use crate::task::{Comment, Task, TaskDraft};

/// Validation failures reported back to the user.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("project key '{0}' already exists")]
    DuplicateKey(String),
}

/// Authoritative application state: all projects plus the selection.
pub struct Board<S: ProjectStore> {
    store: S,
    user: String,
    projects: Vec<Project>,
    current_id: Option<String>,
}

impl<S: ProjectStore> Board<S> {
    /// Load saved state from the store. The persisted selection is restored
    /// when it still names a known project; otherwise the first project (if
    /// any) becomes current.
    pub fn open(store: S, user: String) -> Self {
        let projects = store.load();
        let current_id = store
            .load_current_project_id()
            .filter(|id| projects.iter().any(|p| &p.id == id))
            .or_else(|| projects.first().map(|p| p.id.clone()));
        Board { store, user, projects, current_id }
    }

    /// The acting user; recorded as task reporter and comment author.
    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn current_project(&self) -> Option<&Project> {
        let id = self.current_id.as_deref()?;
        self.projects.iter().find(|p| p.id == id)
    }

    fn current_project_mut(&mut self) -> Option<&mut Project> {
        let id = self.current_id.clone()?;
        self.projects.iter_mut().find(|p| p.id == id)
    }

    /// Resolve a project by id, or by key ignoring case.
    pub fn resolve_project(&self, ident: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == ident)
            .or_else(|| self.projects.iter().find(|p| p.key.eq_ignore_ascii_case(ident.trim())))
    }

    /// Create a project and make it the current selection.
    ///
    /// Name and key must be non-empty after trimming; the key is stored
    /// uppercased and must not collide case-insensitively with an existing
    /// project's key.
    pub fn create_project(
        &mut self,
        name: &str,
        key: &str,
        description: &str,
    ) -> Result<String, BoardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BoardError::EmptyField("project name"));
        }
        let key = normalise_key(key);
        if key.is_empty() {
            return Err(BoardError::EmptyField("project key"));
        }
        if self.projects.iter().any(|p| p.key.eq_ignore_ascii_case(&key)) {
            return Err(BoardError::DuplicateKey(key));
        }

        let id = next_id(self.projects.iter().map(|p| p.id.as_str()));
        self.projects.push(Project {
            id: id.clone(),
            name: name.to_string(),
            key,
            description: description.trim().to_string(),
            tasks: Vec::new(),
            created_at: Utc::now(),
        });
        self.current_id = Some(id.clone());
        self.store.save(&self.projects);
        self.store.save_current_project_id(Some(&id));
        Ok(id)
    }

    /// Select a project by id. Unknown ids are ignored; on success the
    /// selection is persisted. Returns whether the selection changed hands.
    pub fn select_project(&mut self, id: &str) -> bool {
        if !self.projects.iter().any(|p| p.id == id) {
            return false;
        }
        self.current_id = Some(id.to_string());
        self.store.save(&self.projects);
        self.store.save_current_project_id(Some(id));
        true
    }

    /// Append a task to the given project. New tasks start in the todo
    /// column. Title and description must be non-empty after trimming; an
    /// unknown project id is a silent no-op.
    pub fn add_task(&mut self, project_id: &str, draft: TaskDraft) -> Result<(), BoardError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyField("task title"));
        }
        let description = draft.description.trim();
        if description.is_empty() {
            return Err(BoardError::EmptyField("task description"));
        }

        let Some(project) = self.projects.iter_mut().find(|p| p.id == project_id) else {
            return Ok(());
        };

        let now = Utc::now();
        let task = Task {
            id: next_id(project.tasks.iter().map(|t| t.id.as_str())),
            title: title.to_string(),
            description: description.to_string(),
            status: Status::Todo,
            priority: draft.priority,
            assignee: draft.assignee.map(|a| a.trim().to_string()).filter(|a| !a.is_empty()),
            reporter: draft.reporter,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
            story_points: draft.story_points,
            outcome: None,
        };
        project.tasks.push(task);
        self.store.save(&self.projects);
        Ok(())
    }

    /// Move a task in the current project to another column.
    ///
    /// Transitions are unrestricted: any status may follow any other.
    pub fn change_task_status(&mut self, task_id: &str, new_status: Status) {
        let Some(task) = self.current_project_mut().and_then(|p| p.task_mut(task_id)) else {
            return;
        };
        task.status = new_status;
        task.touch();
        self.store.save(&self.projects);
    }

    /// Replace a task in the current project wholesale, matching on id.
    ///
    /// The caller is responsible for handing over a coherent snapshot,
    /// including a refreshed `updated_at`.
    pub fn update_task(&mut self, updated: Task) {
        let Some(task) = self.current_project_mut().and_then(|p| p.task_mut(&updated.id)) else {
            return;
        };
        *task = updated;
        self.store.save(&self.projects);
    }

    /// Append a comment to a task in the current project. Whitespace-only
    /// content is ignored; otherwise the comment gets a fresh id and
    /// timestamp, the acting user as author, and the task is touched.
    pub fn add_comment(&mut self, task_id: &str, content: &str) {
        let content = content.trim();
        if content.is_empty() {
            return;
        }
        let author = self.user.clone();
        let Some(task) = self.current_project_mut().and_then(|p| p.task_mut(task_id)) else {
            return;
        };
        task.comments.push(Comment {
            id: next_id(task.comments.iter().map(|c| c.id.as_str())),
            content: content.to_string(),
            author,
            created_at: Utc::now(),
        });
        task.touch();
        self.store.save(&self.projects);
    }

    /// Replace the whole collection with the given projects and select the
    /// first one. Used by demo seeding.
    pub fn replace_all(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        self.current_id = self.projects.first().map(|p| p.id.clone());
        self.store.save(&self.projects);
        self.store.save_current_project_id(self.current_id.as_deref());
    }

    /// Wipe both store slots and the in-memory state.
    pub fn clear_all(&mut self) {
        self.projects.clear();
        self.current_id = None;
        self.store.clear_all();
    }
}

/// Next id in a collection of decimal-string ids: max numeric id plus one.
/// Non-numeric ids are ignored; legacy timestamp-derived ids are numeric,
/// so the counter continues past them rather than colliding.
fn next_id<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let max = ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
    (max + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;
    use crate::store::MemoryStore;

    fn board() -> Board<MemoryStore> {
        Board::open(MemoryStore::new(), "Test User".to_string())
    }

    fn draft(title: &str, description: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            priority: Priority::Medium,
            assignee: None,
            reporter: "Test User".to_string(),
            story_points: None,
        }
    }

    #[test]
    fn test_create_project_selects_it() {
        let mut b = board();
        let id = b.create_project("Demo", "dem", "first project").unwrap();
        assert_eq!(b.current_project().unwrap().id, id);
        // Key is stored uppercased.
        assert_eq!(b.current_project().unwrap().key, "DEM");
    }

    #[test]
    fn test_duplicate_key_rejected_case_insensitively() {
        let mut b = board();
        b.create_project("Demo", "DEM", "").unwrap();
        let err = b.create_project("Demo2", "dem", "").unwrap_err();
        assert_eq!(err, BoardError::DuplicateKey("DEM".to_string()));
        assert_eq!(b.projects().len(), 1);
    }

    #[test]
    fn test_no_two_projects_share_a_key() {
        let mut b = board();
        for (name, key) in [("A", "one"), ("B", "TWO"), ("C", "One"), ("D", "two ")] {
            let _ = b.create_project(name, key, "");
        }
        let mut keys: Vec<String> = b.projects().iter().map(|p| p.key.to_lowercase()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), b.projects().len());
    }

    #[test]
    fn test_empty_name_or_key_rejected() {
        let mut b = board();
        assert_eq!(
            b.create_project("   ", "KEY", ""),
            Err(BoardError::EmptyField("project name"))
        );
        assert_eq!(
            b.create_project("Name", "  ", ""),
            Err(BoardError::EmptyField("project key"))
        );
        assert!(b.projects().is_empty());
    }

    #[test]
    fn test_select_project_unknown_id_is_noop() {
        let mut b = board();
        let id = b.create_project("Demo", "DEM", "").unwrap();
        assert!(!b.select_project("no-such-id"));
        assert_eq!(b.current_project().unwrap().id, id);
    }

    #[test]
    fn test_first_task_defaults_to_todo() {
        let mut b = board();
        let id = b.create_project("Demo", "DEM", "").unwrap();
        b.add_task(&id, draft("T1", "D1")).unwrap();

        let project = b.current_project().unwrap();
        assert_eq!(project.tasks.len(), 1);
        assert_eq!(project.tasks[0].status, Status::Todo);
        assert_eq!(project.tasks[0].title, "T1");
    }

    #[test]
    fn test_add_task_requires_title_and_description() {
        let mut b = board();
        let id = b.create_project("Demo", "DEM", "").unwrap();
        assert_eq!(
            b.add_task(&id, draft("  ", "D")),
            Err(BoardError::EmptyField("task title"))
        );
        assert_eq!(
            b.add_task(&id, draft("T", " \n ")),
            Err(BoardError::EmptyField("task description"))
        );
        assert!(b.current_project().unwrap().tasks.is_empty());
    }

    #[test]
    fn test_change_status_bumps_updated_at() {
        let mut b = board();
        let id = b.create_project("Demo", "DEM", "").unwrap();
        b.add_task(&id, draft("T1", "D1")).unwrap();
        let before = b.current_project().unwrap().tasks[0].updated_at;

        b.change_task_status("1", Status::Review);

        let task = &b.current_project().unwrap().tasks[0];
        assert_eq!(task.status, Status::Review);
        assert!(task.updated_at > before);
    }

    #[test]
    fn test_any_status_may_move_to_any_status() {
        let mut b = board();
        let id = b.create_project("Demo", "DEM", "").unwrap();
        b.add_task(&id, draft("T1", "D1")).unwrap();
        for status in [Status::Done, Status::Todo, Status::Review, Status::Progress] {
            b.change_task_status("1", status);
            assert_eq!(b.current_project().unwrap().tasks[0].status, status);
        }
    }

    #[test]
    fn test_blank_comment_is_ignored() {
        let mut b = board();
        let id = b.create_project("Demo", "DEM", "").unwrap();
        b.add_task(&id, draft("T1", "D1")).unwrap();

        b.add_comment("1", "   \n\t ");
        assert!(b.current_project().unwrap().tasks[0].comments.is_empty());
    }

    #[test]
    fn test_comment_gets_author_and_touches_task() {
        let mut b = board();
        let id = b.create_project("Demo", "DEM", "").unwrap();
        b.add_task(&id, draft("T1", "D1")).unwrap();
        let before = b.current_project().unwrap().tasks[0].updated_at;

        b.add_comment("1", "  ship it  ");

        let task = &b.current_project().unwrap().tasks[0];
        assert_eq!(task.comments.len(), 1);
        assert_eq!(task.comments[0].content, "ship it");
        assert_eq!(task.comments[0].author, "Test User");
        assert!(task.updated_at > before);
    }

    #[test]
    fn test_update_task_replaces_wholesale() {
        let mut b = board();
        let id = b.create_project("Demo", "DEM", "").unwrap();
        b.add_task(&id, draft("T1", "D1")).unwrap();

        let mut replacement = b.current_project().unwrap().tasks[0].clone();
        replacement.outcome = Some("done and dusted".to_string());
        replacement.priority = Priority::Urgent;
        replacement.touch();
        b.update_task(replacement.clone());

        assert_eq!(b.current_project().unwrap().tasks[0], replacement);
    }

    #[test]
    fn test_mutations_are_mirrored_to_the_store() {
        let mut b = board();
        let id = b.create_project("Demo", "DEM", "").unwrap();
        b.add_task(&id, draft("T1", "D1")).unwrap();
        b.add_comment("1", "note");

        // A second board over the same store sees everything.
        let store = std::mem::replace(&mut b.store, MemoryStore::new());
        let reopened = Board::open(store, "Someone Else".to_string());
        assert_eq!(reopened.current_project().unwrap().id, id);
        assert_eq!(reopened.current_project().unwrap().tasks[0].comments.len(), 1);
    }

    #[test]
    fn test_stale_persisted_selection_falls_back_to_first_project() {
        let mut b = board();
        b.create_project("Demo", "DEM", "").unwrap();
        b.store.save_current_project_id(Some("999"));

        let store = std::mem::replace(&mut b.store, MemoryStore::new());
        let reopened = Board::open(store, "Test User".to_string());
        assert_eq!(reopened.current_project().unwrap().key, "DEM");
    }

    #[test]
    fn test_resolve_project_by_id_or_key() {
        let mut b = board();
        let id = b.create_project("Demo", "DEM", "").unwrap();
        assert_eq!(b.resolve_project(&id).unwrap().key, "DEM");
        assert_eq!(b.resolve_project("dem").unwrap().id, id);
        assert!(b.resolve_project("nope").is_none());
    }

    #[test]
    fn test_next_id_continues_past_legacy_timestamp_ids() {
        let ids = ["1736981234567", "2", "1"];
        assert_eq!(next_id(ids.iter().copied()), "1736981234568");
        assert_eq!(next_id(["a", "b"].iter().copied()), "1");
        assert_eq!(next_id(std::iter::empty()), "1");
    }

    #[test]
    fn test_task_ids_are_scoped_per_project() {
        let mut b = board();
        let first = b.create_project("One", "ONE", "").unwrap();
        let second = b.create_project("Two", "TWO", "").unwrap();
        b.add_task(&first, draft("T1", "D")).unwrap();
        b.add_task(&second, draft("T2", "D")).unwrap();
        let p1 = b.resolve_project("ONE").unwrap();
        let p2 = b.resolve_project("TWO").unwrap();
        assert_eq!(p1.tasks[0].id, "1");
        assert_eq!(p2.tasks[0].id, "1");
    }
}
