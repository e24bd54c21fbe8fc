//! Bit-width extraction from JVM property dumps and version banners.

use super::probe::ProbeError;
use crate::Arch;
use regex::Regex;
use std::sync::OnceLock;

/// Arguments that make `javac` forward `-XshowSettings:properties` to its JVM.
/// The flag exists since JDK 7.
pub(crate) const PROPERTIES_ARGS: &[&str] = &["-J-XshowSettings:properties", "-version"];

/// Arguments that make `javac` print its JVM's version banner. Works on every JDK.
pub(crate) const BANNER_ARGS: &[&str] = &["-J-version"];

fn property_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^\s*(sun\.arch\.data\.model|os\.arch)\s*=\s*(\S+)\s*$")
            .expect("Invalid regex pattern")
    })
}

/// Parse the architecture from `-XshowSettings:properties` output.
///
/// `sun.arch.data.model` is authoritative; `os.arch` is only consulted when
/// the data model is missing or unrecognized.
///
/// # Returns
///
/// `Ok(Arch)` if either property identifies the bit-width,
/// `Err(ProbeError::ParseFailed)` otherwise.
pub(crate) fn parse_arch(output: &str) -> Result<Arch, ProbeError> {
    let mut data_model = None;
    let mut os_arch = None;

    for caps in property_regex().captures_iter(output) {
        match &caps[1] {
            "sun.arch.data.model" => {
                data_model = data_model.or_else(|| {
                    caps[2].parse().ok().and_then(Arch::from_data_model)
                })
            }
            _ => os_arch = os_arch.or_else(|| Arch::from_os_arch(&caps[2])),
        }
    }

    data_model.or(os_arch).ok_or(ProbeError::ParseFailed)
}

fn banner_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^.*\bVM\b.*\(build [^)]*\).*$").expect("Invalid regex pattern")
    })
}

/// Parse the architecture from a JVM version banner, as printed by
/// `java -version` or `javac -J-version`.
///
/// - `Java HotSpot(TM) 64-Bit Server VM (build 20.45-b01, mixed mode)` -> 64bit
/// - `IBM J9 VM (build 2.6, JRE 1.6.0 Linux amd64-64 ...)` -> 64bit
/// - `Java HotSpot(TM) Client VM (build 20.45-b01, mixed mode, sharing)` -> 32bit
///
/// # Returns
///
/// `Ok(Arch)` if a VM banner line is present,
/// `Err(ProbeError::ParseFailed)` otherwise.
pub(crate) fn parse_vm_banner(output: &str) -> Result<Arch, ProbeError> {
    let line = banner_regex()
        .find(output)
        .ok_or(ProbeError::ParseFailed)?
        .as_str();

    if line.contains("64-Bit") || line.contains("-64") {
        Ok(Arch::Bits64)
    } else {
        Ok(Arch::Bits32)
    }
}
