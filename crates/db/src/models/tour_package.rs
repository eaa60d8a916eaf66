//! Tour package entity model and DTOs.
//!
//! Packages are unordered content (the public site sorts them client-side
//! or by the featured flag). Structured sub-fields (highlights, itinerary)
//! are stored as native JSONB, never as stringified JSON in text columns.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use tourbase_core::types::{DbId, Timestamp};

/// One day of a package itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: i32,
    pub title: String,
    #[serde(default)]
    pub detail: Option<String>,
}

/// A row from the `tour_packages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourPackage {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub duration_days: Option<i32>,
    pub image_path: Option<String>,
    pub highlights: Json<Vec<String>>,
    pub itinerary: Json<Vec<ItineraryDay>>,
    pub is_featured: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a tour package.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTourPackage {
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub duration_days: Option<i32>,
    pub image_path: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}

/// DTO for updating a tour package. All fields optional; slug is immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTourPackage {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub duration_days: Option<i32>,
    pub image_path: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub itinerary: Option<Vec<ItineraryDay>>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}
