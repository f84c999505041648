//! Dashboard component modules
//!
//! Contains the shell components drawn around the active panel

pub mod footer;
pub mod header;
pub mod nav;
