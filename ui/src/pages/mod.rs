//! Routed pages.
//!
//! DESIGN
//! ======
//! Pages own their view state and the calls that fill it. Route protection is
//! applied by `app` through the guard components, never inside a page.

pub mod dashboard;
pub mod firma_detail;
pub mod login;
pub mod not_found;
pub mod register;
