use colored::Colorize;
use std::fmt;
use std::io::IsTerminal;
use std::sync::{OnceLock, RwLock};

use cashflow_config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Warning,
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub use_color: bool,
    pub plain_mode: bool,
    pub high_contrast_mode: bool,
}

impl OutputPreferences {
    /// Color only when stdout is a terminal, the config allows it, and `NO_COLOR` is unset.
    pub fn detect(config: &Config) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let plain_mode = config.accessibility.plain_output;
        Self {
            use_color: stdout_tty && config.ui_color_enabled && !plain_mode && !no_color,
            plain_mode,
            high_contrast_mode: config.accessibility.high_contrast,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind, plain: bool) -> &'static str {
    match (kind, plain) {
        (MessageKind::Success, true) => "OK: ",
        (MessageKind::Success, false) => "[✓] ",
        (MessageKind::Warning, true) => "WARNING: ",
        (MessageKind::Warning, false) => "[!] ",
        (MessageKind::Section, _) => "",
    }
}

pub fn format_message(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => format!("{}{}", label(kind, prefs.plain_mode), text),
    };

    if !prefs.use_color {
        return formatted;
    }

    if prefs.high_contrast_mode {
        return formatted.bold().to_string();
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = format_message(kind, message, &preferences());
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        MessageKind::Warning => eprintln!("{}", formatted),
        MessageKind::Success => println!("{}", formatted),
    }
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}
