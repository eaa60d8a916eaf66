//! Site settings model and DTOs.
//!
//! A single-row table holding global site content. Social links and the
//! headline stats block are JSONB string maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use tourbase_core::types::{DbId, Timestamp};

/// The singleton row from the `site_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSettings {
    pub id: DbId,
    pub site_name: String,
    pub tagline: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    /// Platform name -> profile URL (e.g. `"instagram": "https://..."`).
    pub social_links: Json<BTreeMap<String, String>>,
    /// Label -> display value (e.g. `"travellers": "5000+"`).
    pub stats: Json<BTreeMap<String, String>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating site settings. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSiteSettings {
    pub site_name: Option<String>,
    pub tagline: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub social_links: Option<BTreeMap<String, String>>,
    pub stats: Option<BTreeMap<String, String>>,
}
