//! JDK detection functions.

use crate::{DetectOptions, Jdk, JdkError};
use futures::future::join_all;
use std::path::{Path, PathBuf};

/// Detect a JDK in a single directory.
///
/// This is [`Jdk::new`] followed by [`Jdk::complete`], using the default
/// [`DetectOptions`].
///
/// # Detection Process
///
/// 1. Resolve the directory (a `Contents/Home` bundle is descended into)
/// 2. Check the directory, the JVM library and the `java` executable
/// 3. If `javac` is present, run it to read version, build and architecture
///
/// # Errors
///
/// Only the structural checks of step 2 can fail; see [`JdkError`]. A
/// broken or slow `javac` leaves the metadata fields `None` instead.
///
/// # Example
///
/// ```rust
/// use jdk_detect::{detect, JdkError};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let result = detect("/definitely/not/a/jdk").await;
///     assert!(matches!(result, Err(JdkError::DirectoryNotFound { .. })));
/// }
/// ```
pub async fn detect(dir: impl AsRef<Path>) -> Result<Jdk, JdkError> {
    detect_with_options(dir, DetectOptions::default()).await
}

/// Detect a JDK in a single directory with custom options.
pub async fn detect_with_options(
    dir: impl AsRef<Path>,
    options: DetectOptions,
) -> Result<Jdk, JdkError> {
    let mut jdk = Jdk::new(dir)?;
    jdk.complete_with_options(&options).await;
    Ok(jdk)
}

/// Detect JDKs in several candidate directories in parallel.
///
/// Each directory is detected independently; results come back in input
/// order, paired with the directory as given.
///
/// # Performance
///
/// Detection is performed in parallel using `futures::future::join_all`,
/// so the total time is roughly that of the slowest `javac`, not the sum.
///
/// # Example
///
/// ```rust,no_run
/// use jdk_detect::detect_all;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let candidates = ["/usr/lib/jvm/java-8-openjdk", "/usr/lib/jvm/java-17-openjdk"];
///     for (dir, result) in detect_all(candidates).await {
///         match result {
///             Ok(jdk) => println!("{}: {:?}", dir.display(), jdk.version),
///             Err(e) => println!("{}: {}", dir.display(), e),
///         }
///     }
/// }
/// ```
pub async fn detect_all<I, P>(dirs: I) -> Vec<(PathBuf, Result<Jdk, JdkError>)>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let futures: Vec<_> = dirs
        .into_iter()
        .map(|dir| {
            let dir = dir.as_ref().to_path_buf();
            async move {
                let result = detect(&dir).await;
                (dir, result)
            }
        })
        .collect();

    join_all(futures).await
}
