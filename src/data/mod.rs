//! Static configuration data and the case-store abstraction.
//!
//! The enumerations here (violence types, counties, user roles) are fixed
//! inputs to the forms, not computed values. The case store is a small
//! data-access seam with an in-memory implementation standing in for a real
//! intake backend.

pub mod cases;
pub mod options;
pub mod roles;
