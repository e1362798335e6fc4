use chrono::{DateTime, Local};
use serde::Serialize;

/// Severity of an audit log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Scan progress and neutral facts
    Info,
    /// A scan step finished healthy
    Success,
    /// A recoverable problem was recorded
    Warning,
    /// A definite breakage was recorded
    Error,
    /// Free-form note
    Note,
}

impl LogLevel {
    /// Icon prefix used when rendering the entry
    pub fn icon(&self) -> &'static str {
        match self {
            LogLevel::Info => "ℹ️",
            LogLevel::Success => "✅",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
            LogLevel::Note => "📝",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "info"),
            LogLevel::Success => write!(f, "success"),
            LogLevel::Warning => write!(f, "warning"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Note => write!(f, "note"),
        }
    }
}

/// A timestamped, icon-tagged audit log entry
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} {}",
            self.timestamp.format("%H:%M:%S"),
            self.level.icon(),
            self.message
        )
    }
}

/// Append-only log of one audit run
///
/// Every scanner reports through here. Entries are kept for the report
/// writer and mirrored into `tracing`; with echo enabled they also go
/// straight to stdout as they happen.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<LogEntry>,
    echo: bool,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print entries to stdout as they are appended
    pub fn with_echo() -> Self {
        Self {
            entries: Vec::new(),
            echo: true,
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Info, message.into());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Success, message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Warning, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Error, message.into());
    }

    pub fn note(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Note, message.into());
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    fn push(&mut self, level: LogLevel, message: String) {
        match level {
            LogLevel::Warning => tracing::warn!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
            _ => tracing::info!("{}", message),
        }

        let entry = LogEntry {
            timestamp: Local::now(),
            level,
            message,
        };
        if self.echo {
            println!("{}", entry);
        }
        self.entries.push(entry);
    }
}
