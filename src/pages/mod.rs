//! One module per routed page.

pub mod contact;
pub mod dashboard;
pub mod delayed_cases;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod report;
pub mod resources;
