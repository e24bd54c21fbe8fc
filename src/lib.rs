//! # jdk-detect
//!
//! Detection of Java Development Kit installations.
//!
//! Given a single candidate directory, this crate decides whether it holds a
//! JDK and, if so, reports where its tools live and what `javac` says about
//! itself: version, build number and architecture.
//!
//! ## Features
//!
//! - `Jdk::new()` for synchronous structural validation (no subprocesses)
//! - `Jdk::complete()` for async metadata extraction via `javac`
//! - `detect()` composing both into a single call
//! - `detect_all()` for detecting several candidate directories in parallel
//! - `PlatformLayout` describing per-platform file locations as data
//!
//! ## Example
//!
//! ```rust,no_run
//! use jdk_detect::{detect, Executable};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     match detect("/usr/lib/jvm/java-8-openjdk-amd64").await {
//!         Ok(jdk) => {
//!             println!("JDK {:?} (build {:?}, {:?})", jdk.version, jdk.build, jdk.arch);
//!             println!("javac: {:?}", jdk.executable(Executable::Javac));
//!         }
//!         Err(e) => println!("not a JDK: {}", e),
//!     }
//! }
//! ```

mod arch;
mod detect;
mod detection;
mod errors;
mod executable;
mod jdk;
mod layout;
mod options;

pub use arch::Arch;
pub use detect::{detect, detect_all, detect_with_options};
pub use errors::JdkError;
pub use executable::Executable;
pub use jdk::Jdk;
pub use layout::PlatformLayout;
pub use options::DetectOptions;
