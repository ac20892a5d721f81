//! Extraction warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the tokenizer, the table parser and the CLI to report recoverable
//! problems in the input markup.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record a warning key, returning true the first time it is seen.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about a recoverable problem (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Table Parser", "data cell closed before any header cell");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    if record(format!("[{component}] {message}")) {
        eprintln!("{}", format!("[Tabula {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before extracting a new document)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::record;

    #[test]
    fn test_record_deduplicates() {
        let key = "[Test] dedup-only-once".to_string();
        assert!(record(key.clone()));
        assert!(!record(key));
    }
}
