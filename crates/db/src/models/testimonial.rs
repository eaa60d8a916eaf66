//! Testimonial entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourbase_core::types::{DbId, Timestamp};

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub author_name: String,
    pub author_location: Option<String>,
    pub quote: String,
    pub rating: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a testimonial. Rating defaults to 5.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestimonial {
    pub author_name: String,
    pub author_location: Option<String>,
    pub quote: String,
    pub rating: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for updating a testimonial. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTestimonial {
    pub author_name: Option<String>,
    pub author_location: Option<String>,
    pub quote: Option<String>,
    pub rating: Option<i32>,
    pub is_active: Option<bool>,
}
