//! Frontend Models
//!
//! Data structures matching backend API payloads.

use serde::{Deserialize, Serialize};

/// Todo record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

/// Client-side view filter over the todo list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters, in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Whether a todo is visible under this filter
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_wire_shape() {
        let todo: Todo = serde_json::from_str(r#"{"id":1,"text":"Buy milk","completed":false}"#)
            .expect("decode failed");
        assert_eq!(todo.id, 1);
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
    }
}
