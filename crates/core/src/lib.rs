//! Domain logic for the tourbase content platform.
//!
//! Pure types and rules shared by the database and API layers: the error
//! taxonomy, the ordering rules for sortable content collections, and
//! field-level validation. No I/O lives here.

pub mod error;
pub mod ordering;
pub mod types;
pub mod validation;
