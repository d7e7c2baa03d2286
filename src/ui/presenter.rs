//! Presenter boundary and terminal implementations

use crate::models::Task;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

/// Rendering boundary for the task collection
///
/// Each `render` call receives the full current collection and fully
/// replaces whatever was shown before; there is no incremental patching.
pub trait Presenter {
    fn render(&mut self, tasks: &[Task]);
}

/// Task row for table display
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Done")]
    done: String,
    #[tabled(rename = "Text")]
    text: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        TaskRow {
            id: format!("{}", task.id),
            done: if task.complete { "x".to_string() } else { String::new() },
            text: truncate(&task.text, 60),
        }
    }
}

/// Message shown when the collection is empty
const EMPTY_MESSAGE: &str = "Nothing to do! Add a task?";

/// Renders the collection as a table
#[derive(Debug, Default)]
pub struct TablePresenter;

impl Presenter for TablePresenter {
    fn render(&mut self, tasks: &[Task]) {
        if tasks.is_empty() {
            log::info!("{}", EMPTY_MESSAGE);
            return;
        }

        let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::single(0)).with(Alignment::right()))
            .to_string();

        println!("{}", table);
    }
}

/// Renders the collection as pretty-printed JSON
#[derive(Debug, Default)]
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn render(&mut self, tasks: &[Task]) {
        match serde_json::to_string_pretty(tasks) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Failed to serialize tasks: {}", e),
        }
    }
}

/// Truncate a string to a maximum length in bytes
fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }

    // Back up to a char boundary so multi-byte text cannot split mid-char.
    let mut cut = max - 3;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &s[..cut])
}

/// Format for error messages
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_row_from_task() {
        let mut task = Task::new(7, "Water the plants");
        let row = TaskRow::from(&task);
        assert_eq!(row.id, "7");
        assert_eq!(row.done, "");
        assert_eq!(row.text, "Water the plants");

        task.toggle();
        let row = TaskRow::from(&task);
        assert_eq!(row.done, "x");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly-10", 10), "exactly-10");
        assert_eq!(truncate("a-rather-long-text", 10), "a-rathe...");
    }

    #[test]
    fn test_truncate_multibyte_text() {
        // 31 two-byte chars = 62 bytes; the cut must land on a char boundary.
        let text = "é".repeat(31);
        let cut = truncate(&text, 60);
        assert_eq!(cut, format!("{}...", "é".repeat(28)));
        assert!(cut.len() <= 60);
    }

    #[test]
    fn test_render_long_multibyte_task() {
        let task = Task::new(1, "é".repeat(31));
        TablePresenter.render(&[task]);
    }

    #[test]
    fn test_empty_message_wording() {
        assert_eq!(EMPTY_MESSAGE, "Nothing to do! Add a task?");
    }
}
