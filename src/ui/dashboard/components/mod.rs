//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod charts;
pub mod footer;
pub mod header;
pub mod logs;
pub mod settings;
pub mod sidebar;
pub mod stats;
pub mod tables;
pub mod toasts;
