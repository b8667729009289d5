//! Run configuration for Propsy.
//!
//! A [`ResolutionRequest`] captures everything one run needs: the glob
//! pattern, the mode, the optional target property and default, and the
//! directories discovery and artifact generation work in.
//!
//! # Example
//!
//! ```
//! use propsy::config::{ResolutionMode, ResolutionRequest};
//!
//! let request = ResolutionRequest::new("**/gradle.properties")
//!     .with_property("version")
//!     .with_default("0.0.0");
//! assert_eq!(request.mode, ResolutionMode::Single);
//! assert!(request.validate().is_ok());
//! ```

pub mod request;

pub use request::{non_empty, ResolutionMode, ResolutionRequest};
