//! Common reusable UI components
//!
//! Shared presentation plumbing: modal dialogs, spinners, and inline
//! messages used across pages.

pub mod message;
pub mod modal;
pub mod spinner;

pub use message::{ErrorMessage, InfoMessage};
pub use modal::{BaseModal, ConfirmDialog};
pub use spinner::{InlineSpinner, LoadingSpinner};
