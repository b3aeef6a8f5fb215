//! UI Components
//!
//! Presentation-only pieces of the shell. The toolbar renders the
//! command registry and reports clicks; it never mutates the buffer
//! itself.

pub mod toolbar;
