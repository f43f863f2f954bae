// ABOUTME: Version and display constants for the evaluator and its demonstration REPL

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const WELCOME_MESSAGE: &str = "tiny-eval";
pub const WELCOME_SUBTITLE: &str = "An embeddable Scheme-flavored expression evaluator";

/// The line terminator `newline` writes. A plain `\n` regardless of host
/// platform — the evaluator has no concept of platform line endings.
pub const NEWLINE: &str = "\n";

pub const HELP_TEXT: &str = r#"
Available commands:
  (quit) or (exit)     - Exit the REPL
  (clear)              - Clear the screen
  (help)               - Show this message

Type any expression to evaluate it. Use Ctrl-D or (quit) to exit.
"#;
