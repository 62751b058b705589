//! Error types for the persona migrator
//!
//! Provides structured error handling with:
//! - Numeric error codes for machine parsing
//! - User-friendly messages with suggestions
//! - Exit codes matching the migration contract

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for migrator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Numeric error codes for machine parsing and documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    // Configuration errors (1xx)
    ConfigNotFound = 100,
    ConfigParseError = 101,
    ConfigValidation = 102,

    // IO errors (2xx)
    IoRead = 200,
    IoWrite = 201,
    IoRename = 202,
    IoRemove = 203,

    // Scan errors (3xx)
    RootNotFound = 300,

    // Migration errors (4xx)
    MissingPersonaFile = 400,
    ReferenceCollision = 401,

    // Internal errors (9xx)
    InternalError = 900,
}

impl ErrorCode {
    /// Get the string code (e.g., "E100")
    pub fn as_str(&self) -> String {
        format!("E{}", *self as u16)
    }

    /// Get the exit code for CLI
    ///
    /// A missing personas root exits 1; per-directory migration errors never
    /// terminate the process, so their codes only matter for the ambient
    /// subcommands (config management), which use the banded scheme.
    pub fn exit_code(&self) -> i32 {
        match *self as u16 {
            300..=399 => 1,  // Missing root
            100..=199 => 10, // Config errors
            200..=299 => 20, // IO errors
            _ => 1,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for the migrator
#[derive(Error, Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration parse error
    #[error("Failed to parse configuration: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<toml::de::Error>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    // ─────────────────────────────────────────────────────────────
    // IO Errors
    // ─────────────────────────────────────────────────────────────

    /// File read error
    #[error("Failed to read file: {path}")]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File write error
    #[error("Failed to write file: {path}")]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File move error
    #[error("Failed to move {from} to {to}")]
    IoRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File delete error
    #[error("Failed to remove file: {path}")]
    IoRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Scan Errors
    // ─────────────────────────────────────────────────────────────

    /// Personas root directory missing
    #[error("Personas root directory not found: {path}")]
    RootNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Migration Errors
    // ─────────────────────────────────────────────────────────────

    /// Persona directory lacks the required PERSONA.md
    #[error("No PERSONA.md found in {dir}")]
    MissingPersonaFile { dir: PathBuf },

    /// A reference file already exists at the destination
    #[error("Reference file {name} already exists in {dir}/references")]
    ReferenceCollision { name: String, dir: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Internal Errors
    // ─────────────────────────────────────────────────────────────

    /// Frontmatter serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    // ─────────────────────────────────────────────────────────────
    // Error Classification
    // ─────────────────────────────────────────────────────────────

    /// Get the numeric error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::ConfigNotFound { .. } => ErrorCode::ConfigNotFound,
            Error::ConfigParse { .. } => ErrorCode::ConfigParseError,
            Error::ConfigValidation { .. } => ErrorCode::ConfigValidation,
            Error::Config(_) => ErrorCode::ConfigValidation,
            Error::Toml(_) => ErrorCode::ConfigParseError,

            Error::IoRead { .. } => ErrorCode::IoRead,
            Error::IoWrite { .. } => ErrorCode::IoWrite,
            Error::IoRename { .. } => ErrorCode::IoRename,
            Error::IoRemove { .. } => ErrorCode::IoRemove,
            Error::Io(_) => ErrorCode::IoRead,

            Error::RootNotFound { .. } => ErrorCode::RootNotFound,

            Error::MissingPersonaFile { .. } => ErrorCode::MissingPersonaFile,
            Error::ReferenceCollision { .. } => ErrorCode::ReferenceCollision,

            Error::Yaml(_) => ErrorCode::InternalError,
            Error::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Whether this error is scoped to a single persona directory
    ///
    /// Directory-scoped errors fail that directory and the run continues;
    /// anything else aborts the whole batch.
    pub fn is_directory_scoped(&self) -> bool {
        !matches!(self, Error::RootNotFound { .. })
    }

    /// Get the exit code for CLI
    pub fn exit_code(&self) -> i32 {
        self.code().exit_code()
    }

    // ─────────────────────────────────────────────────────────────
    // User-Friendly Messages
    // ─────────────────────────────────────────────────────────────

    /// Get a user-friendly suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Error::ConfigNotFound { .. } => {
                Some("Run 'loom-migrate config init' to create a default configuration file.")
            }
            Error::ConfigParse { .. } => Some(
                "Check your configuration file syntax. Run 'loom-migrate config validate' to see details.",
            ),
            Error::ConfigValidation { .. } | Error::Config(_) => {
                Some("Review the configuration file and fix the invalid values.")
            }
            Error::RootNotFound { .. } => Some(
                "Run from a directory containing personas/, or set the root with --root or [migration].root.",
            ),
            Error::MissingPersonaFile { .. } => Some(
                "The directory may already be migrated; a converted persona keeps only SKILL.md.",
            ),
            Error::ReferenceCollision { .. } => Some(
                "Remove or rename the conflicting file under references/ and re-run the migration.",
            ),
            _ => None,
        }
    }

    /// Format the error for terminal display with colors
    pub fn format_for_terminal(&self) -> String {
        let mut output = format!("\x1b[31mError [{}]\x1b[0m: {}\n", self.code().as_str(), self);

        if let Some(hint) = self.suggestion() {
            output.push_str(&format!("\n\x1b[33mHint\x1b[0m: {}\n", hint));
        }

        output
    }

    /// Format the error for logging (no colors)
    pub fn format_for_log(&self) -> String {
        format!("[{}] {}", self.code().as_str(), self)
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_format() {
        assert_eq!(ErrorCode::ConfigNotFound.as_str(), "E100");
        assert_eq!(ErrorCode::RootNotFound.as_str(), "E300");
        assert_eq!(ErrorCode::MissingPersonaFile.as_str(), "E400");
    }

    #[test]
    fn test_missing_root_exits_one() {
        let err = Error::RootNotFound {
            path: PathBuf::from("personas"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_error_exit_codes() {
        let err = Error::ConfigNotFound {
            path: PathBuf::from("/test/config.toml"),
        };
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn test_directory_scoped() {
        let err = Error::MissingPersonaFile {
            dir: PathBuf::from("acme/analyst"),
        };
        assert!(err.is_directory_scoped());

        let err = Error::ReferenceCollision {
            name: "notes.txt".to_string(),
            dir: PathBuf::from("acme/analyst"),
        };
        assert!(err.is_directory_scoped());

        let err = Error::RootNotFound {
            path: PathBuf::from("personas"),
        };
        assert!(!err.is_directory_scoped());
    }

    #[test]
    fn test_error_display() {
        let err = Error::MissingPersonaFile {
            dir: PathBuf::from("acme/analyst"),
        };
        assert!(err.to_string().contains("No PERSONA.md"));
        assert!(err.to_string().contains("acme/analyst"));
    }

    #[test]
    fn test_error_suggestions() {
        let err = Error::ConfigNotFound {
            path: PathBuf::from("/test"),
        };
        assert!(err.suggestion().unwrap().contains("config init"));

        let err = Error::RootNotFound {
            path: PathBuf::from("personas"),
        };
        assert!(err.suggestion().unwrap().contains("personas/"));
    }

    #[test]
    fn test_format_for_terminal() {
        let err = Error::RootNotFound {
            path: PathBuf::from("personas"),
        };
        let formatted = err.format_for_terminal();
        assert!(formatted.contains("E300"));
        assert!(formatted.contains("\x1b[31m"));
        assert!(formatted.contains("Hint"));
    }

    #[test]
    fn test_format_for_log() {
        let err = Error::ReferenceCollision {
            name: "notes.txt".to_string(),
            dir: PathBuf::from("acme/analyst"),
        };
        let formatted = err.format_for_log();
        assert!(formatted.contains("[E401]"));
        assert!(!formatted.contains("\x1b["));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert_eq!(err.code(), ErrorCode::IoRead);
    }
}
