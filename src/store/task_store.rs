//! In-memory task storage with change notification

use crate::models::Task;

/// In-memory task store
///
/// The store is the exclusive owner of the task collection. Every mutation
/// is followed synchronously by exactly one invocation of the subscribed
/// callback, carrying the full post-mutation collection. The store performs
/// no text validation; rejecting empty input is the caller's job.
pub struct TaskStore {
    tasks: Vec<Task>,
    on_change: Option<Box<dyn FnMut(&[Task])>>,
}

impl TaskStore {
    /// Create a store seeded with the two starter tasks
    pub fn new() -> Self {
        TaskStore::with_tasks(vec![
            Task::new(1, "Run a marathon"),
            Task::new(2, "Plant a garden"),
        ])
    }

    /// Create a store holding the given tasks
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        TaskStore {
            tasks,
            on_change: None,
        }
    }

    /// The current collection, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Register the change callback
    ///
    /// Single-slot: a later call replaces the earlier callback rather than
    /// adding a second subscriber.
    pub fn subscribe(&mut self, callback: impl FnMut(&[Task]) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Append a new task with the next available id
    ///
    /// The id is `max(existing ids) + 1`, or 1 for an empty collection, so
    /// deleting the highest-id task frees its numeric value for reuse.
    pub fn add_task(&mut self, text: impl Into<String>) {
        let id = self.next_id();
        self.tasks.push(Task::new(id, text));
        self.notify();
    }

    /// Replace the text of the task matching `id`
    ///
    /// No-op on an unmatched id, but still notifies.
    pub fn edit_task(&mut self, id: u64, new_text: impl Into<String>) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.text = new_text.into();
        }
        self.notify();
    }

    /// Remove the task matching `id`, preserving the order of the rest
    ///
    /// No-op on an unmatched id, but still notifies.
    pub fn delete_task(&mut self, id: u64) {
        self.tasks.retain(|t| t.id != id);
        self.notify();
    }

    /// Flip the completion flag of the task matching `id`
    ///
    /// No-op on an unmatched id, but still notifies.
    pub fn toggle_task(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.toggle();
        }
        self.notify();
    }

    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.tasks);
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::new()
    }
}
