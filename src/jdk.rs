//! The JDK record and its two-phase construction.

use crate::detection::{extract_metadata, validate, Metadata};
use crate::{Arch, DetectOptions, Executable, JdkError, PlatformLayout};
use semver::Version;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// A detected Java Development Kit.
///
/// A `Jdk` is built in two phases:
///
/// 1. [`Jdk::new`] resolves the directory and validates its structure. This
///    is synchronous, touches only the filesystem and is the only phase that
///    can fail.
/// 2. [`Jdk::complete`] runs `javac` to fill in `version`, `build` and
///    `arch`. It never fails; anything it cannot determine is left `None`.
///
/// [`is_complete`](Jdk::is_complete) tells the two states apart, since
/// the metadata fields are `None` both before completion and after a
/// completion that found nothing.
///
/// `executables` is an ordinary public field. Removing an entry (for example
/// `javac`) before calling `complete()` is supported: completion only
/// consults what is in the map at that moment.
///
/// # Example
///
/// ```rust,no_run
/// use jdk_detect::{Executable, Jdk};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), jdk_detect::JdkError> {
///     let mut jdk = Jdk::new("/opt/jdk1.8.0_92")?;
///     assert!(!jdk.is_complete());
///
///     // Skip metadata by pretending javac is not there.
///     jdk.executables.remove(&Executable::Javac);
///     jdk.complete().await;
///     assert!(jdk.version.is_none());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Jdk {
    /// Absolute path of the JDK home, after bundle layout correction.
    pub path: PathBuf,

    /// Tools found under `bin`, keyed by logical name.
    pub executables: BTreeMap<Executable, PathBuf>,

    /// Normalized version, e.g. `"1.8.0"`.
    pub version: Option<String>,

    /// Build number within the version line.
    pub build: Option<u32>,

    /// Bit-width of the JDK's binaries.
    pub arch: Option<Arch>,

    #[serde(skip)]
    completed: bool,
}

impl Jdk {
    /// Resolve and validate `dir` using the host platform's layout.
    ///
    /// # Errors
    ///
    /// - [`JdkError::InvalidArgument`] if `dir` is empty
    /// - [`JdkError::DirectoryNotFound`] if the resolved home does not exist
    /// - [`JdkError::MissingJvmLibrary`] if no JVM library is present
    /// - [`JdkError::MissingRequiredProgram`] if `java` is missing
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, JdkError> {
        Self::with_layout(dir, PlatformLayout::current())
    }

    /// Resolve and validate `dir` against an explicit platform layout.
    pub fn with_layout(dir: impl AsRef<Path>, layout: &PlatformLayout) -> Result<Self, JdkError> {
        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() {
            return Err(JdkError::InvalidArgument);
        }

        let home = layout.resolve_home(&absolute(dir));
        let executables = validate(&home, layout)?;

        debug!(path = %home.display(), "JDK structure validated");
        Ok(Self {
            path: home,
            executables,
            version: None,
            build: None,
            arch: None,
            completed: false,
        })
    }

    /// Run metadata extraction with default options.
    pub async fn complete(&mut self) -> &mut Self {
        self.complete_with_options(&DetectOptions::default()).await
    }

    /// Run metadata extraction.
    ///
    /// Previous metadata is discarded first, so re-running after editing
    /// `executables` reflects the current map. Without a `javac` entry (or
    /// with `skip_metadata`) all three fields end up `None`.
    pub async fn complete_with_options(&mut self, options: &DetectOptions) -> &mut Self {
        let metadata = match self.executables.get(&Executable::Javac) {
            Some(javac) if !options.skip_metadata => {
                extract_metadata(javac, options.timeout).await
            }
            _ => Metadata::default(),
        };

        self.version = metadata.version;
        self.build = metadata.build;
        self.arch = metadata.arch;
        self.completed = true;
        self
    }

    /// Whether [`complete`](Jdk::complete) has run on this record.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Path of the given tool, if it was found.
    pub fn executable(&self, exe: Executable) -> Option<&Path> {
        self.executables.get(&exe).map(PathBuf::as_path)
    }

    /// The normalized version as a `semver::Version`.
    ///
    /// The build number is not included.
    pub fn semver(&self) -> Option<Version> {
        self.version
            .as_deref()
            .and_then(|v| Version::parse(v).ok())
    }
}

/// Make `path` absolute against the current directory and collapse `.` and
/// `..` lexically. Symlinks are left alone.
fn absolute(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    joined
        .components()
        .fold(PathBuf::new(), |mut normalized, component| {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other),
            }
            normalized
        })
}
