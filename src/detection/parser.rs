//! Version output parsing.
//!
//! `javac -version` has printed its version in two historical shapes. Each
//! shape is a [`VersionScheme`]; [`SCHEMES`] lists them in priority order and
//! the first one that matches wins.

use super::probe::ProbeError;
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::trace;

/// Version and build number extracted from compiler output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedVersion {
    /// Normalized dotted triple, e.g. `1.8.0` or `11.0.2`.
    pub version: String,
    /// Build number, if the output carried one.
    pub build: Option<u32>,
}

/// One historical `javac -version` output format.
pub(crate) struct VersionScheme {
    pub name: &'static str,
    pattern: &'static str,
    regex: OnceLock<Regex>,
    extract: fn(&Captures<'_>) -> ParsedVersion,
}

impl VersionScheme {
    const fn new(
        name: &'static str,
        pattern: &'static str,
        extract: fn(&Captures<'_>) -> ParsedVersion,
    ) -> Self {
        Self {
            name,
            pattern,
            regex: OnceLock::new(),
            extract,
        }
    }

    fn regex(&self) -> &Regex {
        self.regex
            .get_or_init(|| Regex::new(self.pattern).expect("Invalid regex pattern"))
    }

    /// Parse `output` with this scheme alone.
    pub(crate) fn parse(&self, output: &str) -> Option<ParsedVersion> {
        self.regex()
            .captures(output)
            .map(|caps| (self.extract)(&caps))
    }
}

/// Known schemes, in priority order. Legacy comes first: `javac 1.8.0_92`
/// would otherwise also satisfy the modern pattern.
pub(crate) static SCHEMES: [VersionScheme; 2] = [
    // javac 1.8.0_92, javac 1.6.0_45, javac 1.8.0-ea-b101
    VersionScheme::new(
        "legacy",
        r"javac\s+1\.(\d+)\.(\d+)(?:_(\d+))?(?:-(?:b(\d+)|[A-Za-z]+))*",
        extract_legacy,
    ),
    // javac 11.0.2, javac 17, javac 9-ea, javac 21.0.1+12
    VersionScheme::new(
        "modern",
        r"javac\s+(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:\.\d+)*(?:-[A-Za-z0-9.]+)?(?:\+(\d+))?",
        extract_modern,
    ),
];

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

fn extract_legacy(caps: &Captures<'_>) -> ParsedVersion {
    ParsedVersion {
        version: format!("1.{}.{}", &caps[1], &caps[2]),
        build: number(caps, 3).or_else(|| number(caps, 4)),
    }
}

fn component<'t>(caps: &Captures<'t>, group: usize) -> &'t str {
    caps.get(group).map_or("0", |m| m.as_str())
}

fn extract_modern(caps: &Captures<'_>) -> ParsedVersion {
    ParsedVersion {
        version: format!(
            "{}.{}.{}",
            &caps[1],
            component(caps, 2),
            component(caps, 3)
        ),
        build: number(caps, 4),
    }
}

/// Parse version and build from `javac -version` output.
///
/// Handles output such as:
///
/// - `javac 1.6.0_45` -> 1.6.0, build 45
/// - `javac 1.8.0-ea-b101` -> 1.8.0, build 101
/// - `javac 11.0.2` -> 11.0.2, no build
/// - `javac 17` -> 17.0.0, no build
///
/// # Returns
///
/// `Ok(ParsedVersion)` from the first matching scheme, or
/// `Err(ProbeError::ParseFailed)` if none matches.
pub(crate) fn parse_version(output: &str) -> Result<ParsedVersion, ProbeError> {
    SCHEMES
        .iter()
        .find_map(|scheme| {
            let parsed = scheme.parse(output)?;
            trace!(scheme = scheme.name, version = %parsed.version, "version scheme matched");
            Some(parsed)
        })
        .ok_or(ProbeError::ParseFailed)
}
