//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`auth`, `firmalar`, `firma_detail`, `upload`) so
//! components depend on small focused models. Only `auth` is global; the
//! others are created per page.

pub mod auth;
pub mod firma_detail;
pub mod firmalar;
pub mod upload;
