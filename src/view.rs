//! View Logic
//!
//! Pure helpers shared by the rendering components: filtering, counters,
//! input normalization, and HTML escaping.

use crate::models::{Filter, Todo};

/// Counters shown under the list, always computed from the unfiltered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
}

/// Apply the active filter, preserving list order
pub fn filtered_todos(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .cloned()
        .collect()
}

/// Count totals over the unfiltered list
pub fn stats(todos: &[Todo]) -> Stats {
    Stats {
        total: todos.len(),
        completed: todos.iter().filter(|todo| todo.completed).count(),
    }
}

/// Trim user input; `None` when nothing is left
pub fn normalize_text(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Escape the five HTML-significant characters before interpolating
/// user-supplied text into markup
pub fn escape_for_display(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            text: format!("Todo {}", id),
            completed,
        }
    }

    #[test]
    fn test_filter_all_is_identity() {
        let todos = vec![make_todo(1, false), make_todo(2, true)];

        assert_eq!(filtered_todos(&todos, Filter::All), todos);
    }

    #[test]
    fn test_filter_active_keeps_uncompleted_in_order() {
        let todos = vec![
            make_todo(1, false),
            make_todo(2, true),
            make_todo(3, false),
            make_todo(4, true),
        ];

        let visible = filtered_todos(&todos, Filter::Active);

        let ids: Vec<u32> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(visible.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_filter_completed_keeps_completed_in_order() {
        let todos = vec![
            make_todo(1, false),
            make_todo(2, true),
            make_todo(3, false),
            make_todo(4, true),
        ];

        let visible = filtered_todos(&todos, Filter::Completed);

        let ids: Vec<u32> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4]);
        assert!(visible.iter().all(|t| t.completed));
    }

    #[test]
    fn test_stats_count_the_unfiltered_list() {
        let todos = vec![
            make_todo(1, false),
            make_todo(2, true),
            make_todo(3, true),
            make_todo(4, false),
        ];

        assert_eq!(
            stats(&todos),
            Stats {
                total: 4,
                completed: 2
            }
        );
    }

    #[test]
    fn test_stats_on_empty_list() {
        assert_eq!(
            stats(&[]),
            Stats {
                total: 0,
                completed: 0
            }
        );
    }

    #[test]
    fn test_normalize_text_rejects_blank_input() {
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text("   "), None);
    }

    #[test]
    fn test_normalize_text_trims() {
        assert_eq!(normalize_text("  Buy milk  "), Some("Buy milk"));
    }

    #[test]
    fn test_escape_replaces_html_significant_chars() {
        assert_eq!(
            escape_for_display(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_for_display("it's done"), "it&#039;s done");
    }

    #[test]
    fn test_escape_is_identity_without_html_chars() {
        assert_eq!(escape_for_display("Buy milk"), "Buy milk");
        // Idempotent when nothing needs escaping
        assert_eq!(escape_for_display(&escape_for_display("Buy milk")), "Buy milk");
    }
}
