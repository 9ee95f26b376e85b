//! Operator-facing status lines: `[+]` for progress, `[!]` for problems.

use std::io::IsTerminal;

/// Check if color output is enabled.
pub fn color_enabled() -> bool {
    // Respect NO_COLOR env (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    // --no-color is forwarded through this variable
    if std::env::var_os("TAGSCRAPE_NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

/// Check if --quiet mode is active.
pub fn is_quiet() -> bool {
    std::env::var_os("TAGSCRAPE_QUIET").is_some()
}

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    /// Plain output regardless of environment.
    pub fn plain() -> Self {
        Self { use_color: false }
    }

    /// `[+]` prefix.
    pub fn ok_sym(&self) -> String {
        self.paint(GREEN, "[+]")
    }

    /// `[!]` prefix.
    pub fn fail_sym(&self) -> String {
        self.paint(RED, "[!]")
    }

    pub fn yellow(&self, s: &str) -> String {
        self.paint(YELLOW, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

/// Progress line, hidden by --quiet.
pub fn print_ok(msg: &str) {
    if !is_quiet() {
        eprintln!("{} {msg}", Styled::new().ok_sym());
    }
}

/// Warning or retry hint, hidden by --quiet.
pub fn print_warn(msg: &str) {
    if !is_quiet() {
        eprintln!("{} {msg}", Styled::new().fail_sym());
    }
}

/// Fatal diagnostic. Always printed.
pub fn print_fail(msg: &str) {
    eprintln!("{} {msg}", Styled::new().fail_sym());
}
