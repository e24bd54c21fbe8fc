//! Executable enum identifying the JDK tools that are looked up.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A JDK tool located under the `bin` directory of a JDK home.
///
/// Only [`Executable::Java`] is required for a directory to count as a JDK.
/// The others are recorded when present; `javac` additionally drives metadata
/// extraction.
///
/// # Example
///
/// ```rust
/// use jdk_detect::Executable;
///
/// for exe in Executable::all() {
///     println!("{} (required: {})", exe.name(), exe.is_required());
/// }
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum Executable {
    /// The Java launcher.
    Java,
    /// The Java compiler.
    Javac,
    /// Key and certificate management tool.
    Keytool,
    /// JAR signing and verification tool.
    Jarsigner,
}

impl Executable {
    /// The logical name of the tool, without any platform suffix.
    ///
    /// ```rust
    /// use jdk_detect::Executable;
    ///
    /// assert_eq!(Executable::Jarsigner.name(), "jarsigner");
    /// ```
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// The file name of the tool on the given platform suffix (`""` or `".exe"`).
    pub fn file_name(&self, suffix: &str) -> String {
        format!("{}{}", self.name(), suffix)
    }

    /// Whether the absence of this tool disqualifies a directory as a JDK.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Java)
    }

    /// Iterator over all known executables, in lookup order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

impl std::fmt::Display for Executable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
