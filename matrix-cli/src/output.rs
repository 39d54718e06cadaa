// Stderr status reporting for CLI commands
// Stdout is reserved for the rendered matrix

const BOLD_CYAN: &str = "\x1b[1;36m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Writes progress lines to stderr when enabled.
///
/// Commands create one with their `--verbose` flag so matrix output on
/// stdout is never interleaved with progress text.
#[derive(Debug, Clone, Copy)]
pub struct Status {
    enabled: bool,
}

impl Status {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Always-on reporter, for commands whose whole output is on stderr
    pub fn always() -> Self {
        Self::new(true)
    }

    fn emit(&self, line: String) {
        if self.enabled {
            eprintln!("{}", line);
        }
    }

    /// Right-aligned action word followed by a message
    pub fn action(&self, action: &str, message: &str) {
        self.emit(format!("{BOLD_CYAN}{:>12}{RESET} {}", action, message));
    }

    pub fn success(&self, message: &str) {
        self.emit(marked(BOLD_GREEN, "\u{2713}", message));
    }

    pub fn check(&self, message: &str) {
        self.emit(marked(GREEN, "\u{2713}", message));
    }

    pub fn warning(&self, message: &str) {
        self.emit(marked(YELLOW, "!", message));
    }

    pub fn info(&self, message: &str) {
        self.emit(marked(CYAN, "i", message));
    }

    pub fn dim(&self, message: &str) {
        self.emit(format!("{DIM}{}{RESET}", message));
    }

    pub fn header(&self, message: &str) {
        self.emit(format!("{BOLD}==> {}{RESET}", message));
    }

    /// Unstyled line, e.g. a table row
    pub fn plain(&self, message: &str) {
        self.emit(message.to_string());
    }
}

fn marked(color: &str, mark: &str, message: &str) -> String {
    format!("{color}  {mark}{RESET} {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marked_line_layout() {
        assert_eq!(
            marked(YELLOW, "!", "no builds matched"),
            "\x1b[33m  !\x1b[0m no builds matched"
        );
    }

    #[test]
    fn test_disabled_status_is_silent() {
        let status = Status::new(false);
        status.action("Generating", "matrix");
        status.warning("ignored");
        assert!(!status.enabled);
        assert!(Status::always().enabled);
    }
}
