//! Session persistence for the calculator.
//!
//! Saves the accumulator state and UI flags between runs so the calculator
//! reopens exactly where it was closed, stale error text included.
//!
//! Structure:
//! - Pure functions: default path
//! - Effect functions: session file I/O

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::Entry;

/// Current session format version.
const SESSION_VERSION: u32 = 1;

/// Session filename within the data directory.
const SESSION_FILENAME: &str = "session.json";

/// Everything worth restoring across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub version: u32,
    pub entry: Entry,
    pub show_specials: bool,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            version: SESSION_VERSION,
            entry: Entry::Idle,
            show_specials: false,
        }
    }
}

// ============================================================================
// PURE FUNCTIONS (Computations)
// ============================================================================

/// Returns the default session file path.
///
/// On Linux: ~/.local/share/calculadora/session.json
pub fn default_session_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("calculadora")
        .join(SESSION_FILENAME)
}

// ============================================================================
// EFFECT FUNCTIONS (Actions)
// ============================================================================

/// Load a session from disk.
pub fn load_session(path: &Path) -> io::Result<Session> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("Invalid session: {}", e))
    })
}

/// Save a session to disk, creating parent directories as needed.
pub fn save_session(session: &Session, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(session).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to serialize session: {}", e),
        )
    })?;
    fs::write(path, contents)
}

/// Load the session at `path`, falling back to a fresh one when the file
/// is missing, unreadable, or holds a state the keypad could never reach.
///
/// Startup must not fail over a stale file, so no error escapes here.
pub fn load_or_default(path: &Path) -> Session {
    match load_session(path) {
        Ok(session) if session.entry.is_well_formed() => session,
        _ => Session::default(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Op;
    use tempfile::TempDir;

    // --- Pure function tests ---

    #[test]
    fn test_default_session_path_is_reasonable() {
        let path = default_session_path();
        let path_str = path.to_string_lossy();

        assert!(path_str.contains("calculadora"));
        assert!(path_str.ends_with("session.json"));
    }

    // --- Effect function tests ---

    #[test]
    fn test_session_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");

        let session = Session {
            version: SESSION_VERSION,
            entry: Entry::Second {
                first: "5".to_string(),
                op: Op::Add,
                second: "3".to_string(),
            },
            show_specials: true,
        };

        save_session(&session, &path).unwrap();
        let loaded = load_session(&path).unwrap();

        assert_eq!(loaded, session);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("session.json");

        save_session(&Session::default(), &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();

        let result = load_session(&temp.path().join("absent.json"));

        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let temp = TempDir::new().unwrap();

        let session = load_or_default(&temp.path().join("absent.json"));

        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_load_or_default_on_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        fs::write(&path, "not json at all").unwrap();

        let session = load_or_default(&path);

        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_load_or_default_rejects_unreachable_states() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");

        // An empty first operand outside Idle cannot come from the keypad.
        let bogus = serde_json::json!({
            "version": SESSION_VERSION,
            "entry": { "First": { "first": "" } },
            "show_specials": false,
        });
        fs::write(&path, bogus.to_string()).unwrap();

        let session = load_or_default(&path);

        assert_eq!(session, Session::default());
    }
}
