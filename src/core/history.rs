//! Calculation history.
//!
//! Every successful evaluation is recorded as an immutable [`HistoryEntry`]
//! at the front of a [`History`] list. Entries carry short previews for
//! display while keeping the full source expression so a click can restore
//! it exactly.

use crate::evaluation::format_number;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Default number of characters kept in a preview before the ellipsis.
pub const DEFAULT_PREVIEW_WIDTH: usize = 10;

/// Default marker appended to truncated previews.
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Callback invoked synchronously for each inserted entry.
pub type InsertCallback = Box<dyn FnMut(&HistoryEntry) + Send>;

/// Record of one successful evaluation.
///
/// # Example
///
/// ```rust
/// use calcpad::core::History;
///
/// let mut history = History::new();
/// let entry = history.record("1234567890+1", 1234567891.0);
///
/// assert_eq!(entry.original_expression, "1234567890+1");
/// assert_eq!(entry.display_expression, "1234567890...");
/// assert_eq!(entry.display_result, "1234567891");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for this entry
    pub id: Uuid,
    /// Full, untruncated source text; restored on click
    pub original_expression: String,
    /// Preview of the expression, truncated past the preview width
    pub display_expression: String,
    /// Preview of the formatted result, truncated past the preview width
    pub display_result: String,
    /// The numeric result
    pub value: f64,
    /// When the evaluation was recorded
    pub recorded_at: DateTime<Utc>,
}

/// Shorten `text` to `width` characters followed by `ellipsis` when it is
/// longer than `width`; otherwise return it unchanged.
pub fn truncate_preview(text: &str, width: usize, ellipsis: &str) -> String {
    if text.chars().count() > width {
        let mut preview: String = text.chars().take(width).collect();
        preview.push_str(ellipsis);
        preview
    } else {
        text.to_string()
    }
}

/// Newest-first list of history entries.
///
/// Entries are only ever inserted at the front. Nothing is evicted or
/// reordered for the lifetime of the list.
pub struct History {
    entries: Vec<HistoryEntry>,
    preview_width: usize,
    ellipsis: String,
    on_insert: Vec<InsertCallback>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("entries", &self.entries)
            .field("preview_width", &self.preview_width)
            .field("ellipsis", &self.ellipsis)
            .field("on_insert", &self.on_insert.len())
            .finish()
    }
}

impl History {
    /// Create an empty history with the default preview width and ellipsis.
    pub fn new() -> Self {
        Self::with_preview(DEFAULT_PREVIEW_WIDTH, DEFAULT_ELLIPSIS)
    }

    /// Create an empty history with a custom preview format.
    pub fn with_preview(width: usize, ellipsis: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            preview_width: width,
            ellipsis: ellipsis.into(),
            on_insert: Vec::new(),
        }
    }

    /// Register a callback fired once for every entry inserted from now on.
    ///
    /// ```rust
    /// use calcpad::core::History;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    ///
    /// let mut history = History::new();
    /// history.on_insert(move |entry| sink.lock().unwrap().push(entry.display_result.clone()));
    /// history.record("1+1", 2.0);
    ///
    /// assert_eq!(*seen.lock().unwrap(), vec!["2".to_string()]);
    /// ```
    pub fn on_insert<F>(&mut self, callback: F)
    where
        F: FnMut(&HistoryEntry) + Send + 'static,
    {
        self.on_insert.push(Box::new(callback));
    }

    /// Record a successful evaluation at the front of the list.
    pub fn record(&mut self, original_expression: &str, value: f64) -> &HistoryEntry {
        let result_text = format_number(value);
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            original_expression: original_expression.to_string(),
            display_expression: truncate_preview(
                original_expression,
                self.preview_width,
                &self.ellipsis,
            ),
            display_result: truncate_preview(&result_text, self.preview_width, &self.ellipsis),
            value,
            recorded_at: Utc::now(),
        };

        debug!(
            id = %entry.id,
            expression = %entry.original_expression,
            result = %result_text,
            "recorded history entry"
        );

        self.entries.insert(0, entry);
        let inserted = &self.entries[0];
        for callback in &mut self.on_insert {
            callback(inserted);
        }
        inserted
    }

    /// Full original expression of the entry at `index` (0 is newest).
    pub fn restore(&self, index: usize) -> Option<&str> {
        self.entries
            .get(index)
            .map(|entry| entry.original_expression.as_str())
    }

    /// Entry at `index` (0 is newest).
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
