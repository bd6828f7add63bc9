//! UI component modules.
//!
//! ARCHITECTURE
//! ============
//! Components consume the auth handle and per-page state provided by
//! `pages`; none of them own session state.

pub mod analysis_panel;
pub mod firma_form;
pub mod firma_table;
pub mod nav_bar;
pub mod private_route;
pub mod upload_panel;
