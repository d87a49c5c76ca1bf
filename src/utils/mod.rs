//! Utility modules
//!
//! - Error and result types
//! - Loss reporting for constructs left unconverted
//! - The external HwpEqn converter bridge
//! - Logging setup for the command-line tools

pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod external;
#[cfg(feature = "cli")]
pub mod logging;
pub mod loss;

// Re-export commonly used items
pub use error::{ConversionError, ConversionResult, ErrorKind, ParseError};
pub use loss::{ConversionReport, LossKind, LossRecord, LossReport};
