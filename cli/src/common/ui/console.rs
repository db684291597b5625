//! # ActionCLI Console
//!
//! File: cli/src/common/ui/console.rs
//!
use std::io::Write;

/// Destination for an action's user-facing messages.
pub trait Console: Send + Sync {
    fn message(&self, line: &str);
}

/// Writes messages to stdout, one per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn message(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout (e.g. `| head`) is not an action failure.
        let _ = writeln!(stdout, "{}", line);
    }
}

/// Console that keeps every message in memory. Test-only.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingConsole {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn output(&self) -> String {
        self.lines().join("\n")
    }
}

#[cfg(test)]
impl Console for RecordingConsole {
    fn message(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_console_keeps_order() {
        let console = RecordingConsole::default();
        console.message("first");
        console.message("second");
        assert_eq!(console.lines(), vec!["first", "second"]);
        assert_eq!(console.output(), "first\nsecond");
    }
}
