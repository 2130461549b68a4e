//! chromadoc-test - Regression test framework
//!
//! A small harness for the workspace's `tests/*_reg.rs` suites,
//! supporting three modes:
//!
//! - **Generate**: create golden files for comparison
//! - **Compare**: compare results with golden files (the default; a
//!   missing golden file is bootstrapped from the first run)
//! - **Display**: run without comparison, for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use chromadoc_test::RegParams;
//!
//! let mut rp = RegParams::new("decomposer");
//! rp.compare_values(3.0, clusters.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // chromadoc-test is at crates/chromadoc-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
