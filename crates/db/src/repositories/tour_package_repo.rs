//! Repository for the `tour_packages` table.
//!
//! Packages are unordered; public listings sort by featured flag then
//! creation time. Structured sub-fields bind as JSONB.

use sqlx::types::Json;
use sqlx::PgPool;
use tourbase_core::types::DbId;

use crate::models::tour_package::{CreateTourPackage, TourPackage, UpdateTourPackage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, summary, description, price_cents, duration_days, \
    image_path, highlights, itinerary, is_featured, is_active, created_at, updated_at";

/// Provides CRUD operations for tour packages.
pub struct TourPackageRepo;

impl TourPackageRepo {
    /// Insert a new tour package, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTourPackage,
    ) -> Result<TourPackage, sqlx::Error> {
        let query = format!(
            "INSERT INTO tour_packages \
                (title, slug, summary, description, price_cents, duration_days, image_path, \
                 highlights, itinerary, is_featured, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, \
                COALESCE($10, false), COALESCE($11, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TourPackage>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.summary)
            .bind(&input.description)
            .bind(input.price_cents)
            .bind(input.duration_days)
            .bind(&input.image_path)
            .bind(Json(&input.highlights))
            .bind(Json(&input.itinerary))
            .bind(input.is_featured)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// List packages, optionally active-only and/or featured-only.
    ///
    /// Featured packages sort first, then newest first.
    pub async fn list(
        pool: &PgPool,
        active_only: bool,
        featured_only: bool,
    ) -> Result<Vec<TourPackage>, sqlx::Error> {
        let mut conditions: Vec<&str> = Vec::new();
        if active_only {
            conditions.push("is_active = true");
        }
        if featured_only {
            conditions.push("is_featured = true");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };
        let query = format!(
            "SELECT {COLUMNS} FROM tour_packages{where_clause} \
             ORDER BY is_featured DESC, created_at DESC"
        );
        sqlx::query_as::<_, TourPackage>(&query).fetch_all(pool).await
    }

    /// Find a package by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TourPackage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tour_packages WHERE id = $1");
        sqlx::query_as::<_, TourPackage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active package by its public slug.
    pub async fn find_active_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<TourPackage>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM tour_packages WHERE slug = $1 AND is_active = true");
        sqlx::query_as::<_, TourPackage>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Update a package. Only non-`None` fields are applied; slug is
    /// immutable.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTourPackage,
    ) -> Result<Option<TourPackage>, sqlx::Error> {
        let query = format!(
            "UPDATE tour_packages SET \
                title = COALESCE($2, title), \
                summary = COALESCE($3, summary), \
                description = COALESCE($4, description), \
                price_cents = COALESCE($5, price_cents), \
                duration_days = COALESCE($6, duration_days), \
                image_path = COALESCE($7, image_path), \
                highlights = COALESCE($8, highlights), \
                itinerary = COALESCE($9, itinerary), \
                is_featured = COALESCE($10, is_featured), \
                is_active = COALESCE($11, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TourPackage>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.description)
            .bind(input.price_cents)
            .bind(input.duration_days)
            .bind(&input.image_path)
            .bind(input.highlights.as_ref().map(Json))
            .bind(input.itinerary.as_ref().map(Json))
            .bind(input.is_featured)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a package. Returns `false` if already absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tour_packages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
