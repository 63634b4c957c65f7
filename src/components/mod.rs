//! Reusable view components shared across pages.

pub mod case_chart;
pub mod case_table;
pub mod county_stat_card;
pub mod feature_section;
pub mod hero;
pub mod layout;
pub mod navbar;
pub mod stat_section;
pub mod toast_host;
pub mod ussd_section;
