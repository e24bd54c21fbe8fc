//! Bit-width of a JDK's binaries.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Architecture of a JDK, as reported by its own runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arch {
    /// 32-bit JVM.
    #[serde(rename = "32bit")]
    Bits32,
    /// 64-bit JVM.
    #[serde(rename = "64bit")]
    Bits64,
}

impl Arch {
    /// The canonical string form, `"32bit"` or `"64bit"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bits32 => "32bit",
            Self::Bits64 => "64bit",
        }
    }

    /// Map a `sun.arch.data.model` value (`32` or `64`) to an architecture.
    pub fn from_data_model(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(Self::Bits32),
            64 => Some(Self::Bits64),
            _ => None,
        }
    }

    /// Map an `os.arch` property value to an architecture.
    ///
    /// ```rust
    /// use jdk_detect::Arch;
    ///
    /// assert_eq!(Arch::from_os_arch("amd64"), Some(Arch::Bits64));
    /// assert_eq!(Arch::from_os_arch("i386"), Some(Arch::Bits32));
    /// assert_eq!(Arch::from_os_arch("mips"), None);
    /// ```
    pub fn from_os_arch(os_arch: &str) -> Option<Self> {
        match os_arch.trim() {
            "amd64" | "x86_64" | "aarch64" | "ppc64" | "ppc64le" | "s390x" | "sparcv9"
            | "riscv64" => Some(Self::Bits64),
            "x86" | "i386" | "i486" | "i586" | "i686" | "arm" => Some(Self::Bits32),
            _ => None,
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "32bit" => Ok(Self::Bits32),
            "64bit" => Ok(Self::Bits64),
            other => Err(format!("unknown architecture: {}", other)),
        }
    }
}
