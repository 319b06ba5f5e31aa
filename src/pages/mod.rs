//! Page modules.
