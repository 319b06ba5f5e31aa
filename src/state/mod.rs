//! View-local state for the harness page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain Rust structs. The page wraps them in `RwSignal` so controls re-render
//! on change, while the submit flow and the CLI read them directly.

pub mod registration;
