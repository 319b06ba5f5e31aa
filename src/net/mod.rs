//! Networking for the registration submit flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire payload and the failure type, `api` owns the
//! endpoint, the transport seam, and the submit operation.

pub mod api;
pub mod types;
