//! Template selection for profile pages
//!
//! A profile names one of four templates. This module maps that name onto a
//! [`TemplateKind`] (unknown names fall back to `modern`) and dispatches to
//! the registered [`LayoutVariant`] for it.
//!
//! # Example
//!
//! ```rust
//! use school_profile::template::{TemplateKind, TemplateRegistry};
//!
//! let registry = TemplateRegistry::default();
//! let kind = TemplateKind::from_name("retro");
//! assert_eq!(kind, TemplateKind::Modern);
//! assert_eq!(registry.variant(kind).kind(), TemplateKind::Modern);
//! ```

mod kind;
mod registry;

pub use kind::TemplateKind;
pub use registry::{LayoutVariant, TemplateRegistry};

use thiserror::Error;

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Name does not match any template
    #[error("unknown template: {name}")]
    Unknown { name: String },
}
