//! Knobs for the metadata phase of detection.
//!
//! Structural validation has nothing to configure. [`DetectOptions`] only
//! affects how (and whether) `javac` is run by [`Jdk::complete_with_options`]
//! and [`detect_with_options`](crate::detect_with_options).
//!
//! [`Jdk::complete_with_options`]: crate::Jdk::complete_with_options

use std::time::Duration;

/// How `javac` is invoked while completing a [`Jdk`](crate::Jdk).
///
/// # Default Behavior
///
/// Completion may start up to three short-lived JVMs, one for the version
/// and one or two for the architecture. Each gets its own 5 second budget.
/// A JVM that has not answered by then counts as a failed probe. JDKs on
/// slow disks or heavily loaded hosts may need a larger budget.
///
/// `skip_metadata` is off, so `javac` is run whenever it is present.
///
/// # Example
///
/// ```rust
/// use jdk_detect::DetectOptions;
/// use std::time::Duration;
///
/// let patient = DetectOptions {
///     timeout: Duration::from_secs(30),
///     ..Default::default()
/// };
/// assert!(!patient.skip_metadata);
///
/// let structural_only = DetectOptions {
///     skip_metadata: true,
///     ..Default::default()
/// };
/// assert_eq!(structural_only.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Upper bound for each individual `javac` run.
    pub timeout: Duration,

    /// Never run `javac`; `version`, `build` and `arch` stay `None` while the
    /// record is still marked complete.
    pub skip_metadata: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            skip_metadata: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_run_javac_with_five_second_budget() {
        let opts = DetectOptions::default();
        assert_eq!(opts.timeout, Duration::from_secs(5));
        assert!(!opts.skip_metadata);
    }

    #[test]
    fn test_struct_update_keeps_other_default() {
        let opts = DetectOptions {
            skip_metadata: true,
            ..Default::default()
        };
        assert_eq!(opts.timeout, Duration::from_secs(5));
    }
}
