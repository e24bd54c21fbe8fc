//! Error types for JDK detection.
//!
//! Only structural validation can fail. Problems while running `javac` never
//! surface here; they leave the corresponding metadata fields as `None`.

use crate::Executable;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing a [`Jdk`](crate::Jdk).
///
/// # Example
///
/// ```rust
/// use jdk_detect::{Jdk, JdkError};
///
/// match Jdk::new("/definitely/not/a/jdk") {
///     Err(JdkError::DirectoryNotFound { path }) => println!("no such dir: {:?}", path),
///     Err(e) => println!("not a JDK: {}", e),
///     Ok(jdk) => println!("found JDK at {:?}", jdk.path),
/// }
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum JdkError {
    /// The directory argument was empty.
    #[error("Expected directory to be a valid path")]
    InvalidArgument,

    /// The resolved JDK home does not exist.
    #[error("Directory does not exist")]
    DirectoryNotFound {
        /// The resolved path that was checked.
        path: PathBuf,
    },

    /// The directory exists but has no JVM shared library at any expected location.
    #[error("Directory missing JVM library")]
    MissingJvmLibrary {
        /// The resolved JDK home.
        path: PathBuf,
    },

    /// A required program (`java`) is missing from the `bin` directory.
    #[error("Directory missing required program")]
    MissingRequiredProgram {
        /// The resolved JDK home.
        path: PathBuf,
        /// The program that was not found.
        program: Executable,
    },
}

impl JdkError {
    /// Human-readable description of the error, including the offending path.
    ///
    /// ```rust
    /// use jdk_detect::JdkError;
    ///
    /// assert_eq!(
    ///     JdkError::InvalidArgument.description(),
    ///     "Expected directory to be a valid path"
    /// );
    /// ```
    pub fn description(&self) -> String {
        match self {
            Self::InvalidArgument => self.to_string(),
            Self::DirectoryNotFound { path } | Self::MissingJvmLibrary { path } => {
                format!("{}: {}", self, path.display())
            }
            Self::MissingRequiredProgram { path, program } => {
                format!("{} `{}`: {}", self, program, path.display())
            }
        }
    }
}
