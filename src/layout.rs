//! Platform file layout of a JDK home.
//!
//! Everything that differs between platform families (executable suffix,
//! JVM library location, bundle nesting) lives in [`PlatformLayout`] tables,
//! so supporting another layout is a data change.

use crate::Executable;
use std::path::{Path, PathBuf};

/// Bundle sub-paths under which the real JDK home may be nested.
const BUNDLE_HOMES: &[&str] = &["Contents/Home"];

const UNIX_JVM_LIBRARIES: &[&str] = &[
    "lib/server/libjvm.so",
    "lib/client/libjvm.so",
    "jre/lib/amd64/server/libjvm.so",
    "jre/lib/amd64/client/libjvm.so",
    "jre/lib/i386/server/libjvm.so",
    "jre/lib/i386/client/libjvm.so",
    "jre/lib/aarch64/server/libjvm.so",
    "jre/lib/arm/server/libjvm.so",
    "jre/lib/arm/client/libjvm.so",
    "jre/lib/ppc64le/server/libjvm.so",
    "jre/lib/s390x/server/libjvm.so",
];

const MACOS_JVM_LIBRARIES: &[&str] = &[
    "lib/server/libjvm.dylib",
    "jre/lib/server/libjvm.dylib",
    "../Libraries/libjvm.dylib",
    "lib/libjli.dylib",
];

const WINDOWS_JVM_LIBRARIES: &[&str] = &[
    "bin/server/jvm.dll",
    "bin/client/jvm.dll",
    "jre/bin/server/jvm.dll",
    "jre/bin/client/jvm.dll",
];

/// Where a platform family puts the pieces of a JDK.
///
/// Relative paths use `/` as separator and are resolved against the JDK home
/// component by component.
///
/// # Example
///
/// ```rust
/// use jdk_detect::{Executable, PlatformLayout};
/// use std::path::Path;
///
/// let layout = PlatformLayout::WINDOWS;
/// assert_eq!(
///     layout.executable_path(Path::new("C:/jdk"), Executable::Javac),
///     Path::new("C:/jdk").join("bin").join("javac.exe")
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformLayout {
    /// Platform family name, for diagnostics.
    pub family: &'static str,
    /// Suffix appended to executable names.
    pub exe_suffix: &'static str,
    /// Nested home locations checked relative to the candidate directory.
    pub bundle_homes: &'static [&'static str],
    /// JVM shared library locations relative to the home, in lookup order.
    pub jvm_libraries: &'static [&'static str],
}

impl PlatformLayout {
    /// Linux and the other Unix-likes.
    pub const UNIX: PlatformLayout = PlatformLayout {
        family: "unix",
        exe_suffix: "",
        bundle_homes: BUNDLE_HOMES,
        jvm_libraries: UNIX_JVM_LIBRARIES,
    };

    /// macOS.
    pub const MACOS: PlatformLayout = PlatformLayout {
        family: "macos",
        exe_suffix: "",
        bundle_homes: BUNDLE_HOMES,
        jvm_libraries: MACOS_JVM_LIBRARIES,
    };

    /// Windows.
    pub const WINDOWS: PlatformLayout = PlatformLayout {
        family: "windows",
        exe_suffix: ".exe",
        bundle_homes: BUNDLE_HOMES,
        jvm_libraries: WINDOWS_JVM_LIBRARIES,
    };

    /// The layout of the platform this crate was compiled for.
    pub fn current() -> &'static PlatformLayout {
        if cfg!(windows) {
            &Self::WINDOWS
        } else if cfg!(target_os = "macos") {
            &Self::MACOS
        } else {
            &Self::UNIX
        }
    }

    /// Resolve a candidate directory to the JDK home.
    ///
    /// If one of the bundle sub-paths exists as a directory under `dir`, that
    /// nested directory is the home. Otherwise `dir` is returned unchanged.
    pub fn resolve_home(&self, dir: &Path) -> PathBuf {
        self.bundle_homes
            .iter()
            .map(|rel| join_relative(dir, rel))
            .find(|nested| nested.is_dir())
            .unwrap_or_else(|| dir.to_path_buf())
    }

    /// Candidate JVM library paths under `home`, in lookup order.
    pub fn jvm_library_candidates<'a>(
        &'a self,
        home: &'a Path,
    ) -> impl Iterator<Item = PathBuf> + 'a {
        self.jvm_libraries
            .iter()
            .map(move |rel| join_relative(home, rel))
    }

    /// The first JVM library candidate that exists as a file, if any.
    pub fn find_jvm_library(&self, home: &Path) -> Option<PathBuf> {
        self.jvm_library_candidates(home).find(|p| p.is_file())
    }

    /// Expected location of `exe` under `home`.
    pub fn executable_path(&self, home: &Path, exe: Executable) -> PathBuf {
        home.join("bin").join(exe.file_name(self.exe_suffix))
    }
}

fn join_relative(base: &Path, rel: &str) -> PathBuf {
    rel.split('/')
        .fold(base.to_path_buf(), |path, component| path.join(component))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_home_passthrough() {
        let dir = tempfile::tempdir().unwrap();
        let layout = PlatformLayout::current();
        assert_eq!(layout.resolve_home(dir.path()), dir.path());
    }

    #[test]
    fn test_resolve_home_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("Contents").join("Home");
        fs::create_dir_all(&nested).unwrap();

        let layout = PlatformLayout::current();
        assert_eq!(layout.resolve_home(dir.path()), nested);
    }

    #[test]
    fn test_resolve_home_ignores_bundle_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Contents")).unwrap();
        fs::write(dir.path().join("Contents").join("Home"), b"").unwrap();

        let layout = PlatformLayout::current();
        assert_eq!(layout.resolve_home(dir.path()), dir.path());
    }

    #[test]
    fn test_resolve_home_nonexistent() {
        let dir = Path::new("/nonexistent/jdk/dir");
        assert_eq!(PlatformLayout::UNIX.resolve_home(dir), dir);
    }

    #[test]
    fn test_executable_suffixes() {
        let home = Path::new("/opt/jdk");
        assert_eq!(
            PlatformLayout::UNIX.executable_path(home, Executable::Java),
            home.join("bin").join("java")
        );
        assert_eq!(
            PlatformLayout::MACOS.executable_path(home, Executable::Keytool),
            home.join("bin").join("keytool")
        );
        assert_eq!(
            PlatformLayout::WINDOWS.executable_path(home, Executable::Jarsigner),
            home.join("bin").join("jarsigner.exe")
        );
    }

    #[test]
    fn test_jvm_library_candidates_order() {
        let home = Path::new("/opt/jdk");
        let first = PlatformLayout::UNIX
            .jvm_library_candidates(home)
            .next()
            .unwrap();
        assert_eq!(first, home.join("lib").join("server").join("libjvm.so"));
        assert_eq!(
            PlatformLayout::WINDOWS.jvm_library_candidates(home).count(),
            WINDOWS_JVM_LIBRARIES.len()
        );
    }

    #[test]
    fn test_find_jvm_library_legacy_tree() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir
            .path()
            .join("jre")
            .join("lib")
            .join("i386")
            .join("client");
        fs::create_dir_all(&lib).unwrap();
        fs::write(lib.join("libjvm.so"), b"").unwrap();

        assert_eq!(
            PlatformLayout::UNIX.find_jvm_library(dir.path()),
            Some(lib.join("libjvm.so"))
        );
        assert_eq!(PlatformLayout::WINDOWS.find_jvm_library(dir.path()), None);
    }

    #[test]
    fn test_find_jvm_library_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(PlatformLayout::current().find_jvm_library(dir.path()), None);
    }
}
