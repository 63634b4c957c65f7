//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`language`, `report`, `register`) so individual
//! pages can depend on small focused models. Everything here is plain data
//! with synchronous transitions; the Leptos layer wraps these in signals.

pub mod language;
pub mod register;
pub mod report;
