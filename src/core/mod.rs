//! Core domain model and reconciliation logic for group membership management

pub mod capability;
#[cfg(feature = "ssr")]
pub mod config;
pub mod model;
mod notify;
pub mod service;
pub mod sync;
pub mod validation;

#[cfg(test)]
mod tests;

pub use notify::*;
