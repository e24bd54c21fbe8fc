//! Detection implementation submodule.
//!
//! This module contains the internal steps of JDK detection:
//!
//! - `validate`: structural checks and executable discovery
//! - `run_javac`: async `javac` invocation with timeout
//! - `parse_version`: ordered version scheme matching
//! - `parse_arch`: bit-width extraction from JVM property dumps
//! - `extract_metadata`: the two independent probes, run concurrently

mod arch;
mod metadata;
mod parser;
mod probe;
mod validator;

pub(crate) use metadata::{extract_metadata, Metadata};
pub(crate) use validator::validate;
