//! Repository for the singleton `site_settings` row.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::site_settings::{SiteSettings, UpdateSiteSettings};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, site_name, tagline, contact_email, contact_phone, address, \
    social_links, stats, created_at, updated_at";

/// Provides read/update access to the settings singleton.
///
/// The row is seeded by the initial migration; there is no insert or
/// delete path at runtime.
pub struct SiteSettingsRepo;

impl SiteSettingsRepo {
    /// Fetch the settings row.
    pub async fn get(pool: &PgPool) -> Result<SiteSettings, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings ORDER BY id LIMIT 1");
        sqlx::query_as::<_, SiteSettings>(&query).fetch_one(pool).await
    }

    /// Update the settings row. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateSiteSettings,
    ) -> Result<SiteSettings, sqlx::Error> {
        let query = format!(
            "UPDATE site_settings SET \
                site_name = COALESCE($1, site_name), \
                tagline = COALESCE($2, tagline), \
                contact_email = COALESCE($3, contact_email), \
                contact_phone = COALESCE($4, contact_phone), \
                address = COALESCE($5, address), \
                social_links = COALESCE($6, social_links), \
                stats = COALESCE($7, stats) \
             WHERE id = (SELECT id FROM site_settings ORDER BY id LIMIT 1) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(&input.site_name)
            .bind(&input.tagline)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .bind(&input.address)
            .bind(input.social_links.as_ref().map(Json))
            .bind(input.stats.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }
}
