//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Groups page (membership table, the main view)
//! - Not found page

mod groups;
mod not_found;

pub use groups::GroupsPage;
pub use not_found::NotFoundPage;
