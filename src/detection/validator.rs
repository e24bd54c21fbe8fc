//! Structural validation of a resolved JDK home.

use crate::{Executable, JdkError, PlatformLayout};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Validate a resolved JDK home and collect its executables.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. `home` exists, else [`JdkError::DirectoryNotFound`]
/// 2. a JVM library exists, else [`JdkError::MissingJvmLibrary`]
/// 3. every present executable is recorded
/// 4. every required executable was found, else
///    [`JdkError::MissingRequiredProgram`]
///
/// # Returns
///
/// Mapping of executable to absolute path, holding only the ones on disk.
pub(crate) fn validate(
    home: &Path,
    layout: &PlatformLayout,
) -> Result<BTreeMap<Executable, PathBuf>, JdkError> {
    if !home.exists() {
        return Err(JdkError::DirectoryNotFound {
            path: home.to_path_buf(),
        });
    }

    match layout.find_jvm_library(home) {
        Some(lib) => trace!(library = %lib.display(), "found JVM library"),
        None => {
            debug!(home = %home.display(), family = layout.family, "no JVM library found");
            return Err(JdkError::MissingJvmLibrary {
                path: home.to_path_buf(),
            });
        }
    }

    let executables: BTreeMap<_, _> = Executable::all()
        .map(|exe| (exe, layout.executable_path(home, exe)))
        .filter(|(_, path)| path.is_file())
        .collect();

    if let Some(program) = Executable::all()
        .filter(|exe| exe.is_required())
        .find(|exe| !executables.contains_key(exe))
    {
        debug!(home = %home.display(), %program, "required program missing");
        return Err(JdkError::MissingRequiredProgram {
            path: home.to_path_buf(),
            program,
        });
    }

    trace!(home = %home.display(), count = executables.len(), "executables discovered");
    Ok(executables)
}
