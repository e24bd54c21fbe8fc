//! Metadata extraction: the version probe and the architecture probe.

use super::arch::{parse_arch, parse_vm_banner, BANNER_ARGS, PROPERTIES_ARGS};
use super::parser::{parse_version, ParsedVersion};
use super::probe::{run_javac, ProbeError};
use crate::Arch;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, trace};

/// What `javac` revealed about its JDK. Every field is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Metadata {
    pub version: Option<String>,
    pub build: Option<u32>,
    pub arch: Option<Arch>,
}

async fn probe_version(javac: &Path, limit: Duration) -> Result<ParsedVersion, ProbeError> {
    let output = run_javac(javac, &["-version"], limit).await?;
    parse_version(&output)
}

/// Read the bit-width from the JVM properties, falling back to the VM banner
/// for launchers older than JDK 7 that reject `-XshowSettings`.
async fn probe_arch(javac: &Path, limit: Duration) -> Result<Arch, ProbeError> {
    let properties = run_javac(javac, PROPERTIES_ARGS, limit)
        .await
        .and_then(|output| parse_arch(&output));

    match properties {
        Ok(arch) => Ok(arch),
        // No second invocation after a timeout.
        Err(ProbeError::Timeout) => Err(ProbeError::Timeout),
        Err(e) => {
            trace!(javac = %javac.display(), error = %e, "properties unavailable, reading VM banner");
            let output = run_javac(javac, BANNER_ARGS, limit).await?;
            parse_vm_banner(&output)
        }
    }
}

/// Run both probes against `javac` concurrently and merge the results.
///
/// A failing probe only blanks its own fields.
pub(crate) async fn extract_metadata(javac: &Path, limit: Duration) -> Metadata {
    let (version, arch) = futures::join!(probe_version(javac, limit), probe_arch(javac, limit));

    let mut metadata = Metadata::default();

    match version {
        Ok(parsed) => {
            metadata.version = Some(parsed.version);
            metadata.build = parsed.build;
        }
        Err(e) => debug!(javac = %javac.display(), error = %e, "version probe failed"),
    }

    match arch {
        Ok(arch) => metadata.arch = Some(arch),
        Err(e) => debug!(javac = %javac.display(), error = %e, "architecture probe failed"),
    }

    metadata
}
