//! Global error handling for chettu
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for chettu operations
#[derive(Error, Debug)]
pub enum ChettuError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A pattern file exists but could not be read
    #[error("Ignore file error: {0}")]
    IgnoreFile(String),

    /// Pattern compilation errors
    #[error("Pattern error: {0}")]
    Pattern(#[from] ignore::Error),

    /// Traversal errors
    #[error("Walk error: {0}")]
    Walk(String),

    /// Output sink errors
    #[error("Output error: {0}")]
    Output(String),

    /// Clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Specialized Result type for chettu operations
pub type Result<T> = std::result::Result<T, ChettuError>;

/// Creates a ChettuError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::ChettuError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
