//! CLI command messaging
//!
//! Tagged, colored status lines for the one-shot commands (`snapshot`,
//! `check`). Info and success go to stdout; warnings and errors to stderr so
//! they stay visible when stdout is piped.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warn,
    Error,
}

impl Tone {
    fn tag(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[1;33m[INFO]\x1b[0m",
            Tone::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
            Tone::Warn => "\x1b[1;91m[WARN]\x1b[0m",
            Tone::Error => "\x1b[1;31m[ERROR]\x1b[0m",
        }
    }
}

/// `[TAG] title\t details`, or just the title when there are no details.
pub fn format_line(tone: Tone, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tone.tag(), title)
    } else {
        format!("{} {}\t {}", tone.tag(), title, details)
    }
}

pub fn print_line(tone: Tone, title: &str, details: &str) {
    let line = format_line(tone, title, details);
    match tone {
        Tone::Info | Tone::Success => println!("{}", line),
        Tone::Warn | Tone::Error => eprintln!("{}", line),
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Info, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Warn, $title, &format!($($details)*))
    };
}

/// Errors take an optional details string rather than a format.
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Error, $title, "")
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Error, $title, $details)
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Success, $title, &format!($($details)*))
    };
}
