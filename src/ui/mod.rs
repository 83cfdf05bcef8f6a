pub mod common;
pub mod icon;
pub mod identity;
pub mod notifications;
pub mod pages;
pub mod theme;

pub use icon::{Icon, icons};
