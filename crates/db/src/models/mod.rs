//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod admin_user;
pub mod content_section;
pub mod faq;
pub mod gallery_item;
pub mod hero_slide;
pub mod site_settings;
pub mod testimonial;
pub mod tour_package;
