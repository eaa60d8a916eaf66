//! Repository for the `testimonials` table.

use sqlx::PgPool;
use tourbase_core::types::DbId;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author_name, author_location, quote, rating, is_active, \
    created_at, updated_at";

/// Provides CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a new testimonial, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (author_name, author_location, quote, rating, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, 5), COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.author_name)
            .bind(&input.author_location)
            .bind(&input.quote)
            .bind(input.rating)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// List testimonials newest first, optionally active-only.
    pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = if active_only {
            format!(
                "SELECT {COLUMNS} FROM testimonials \
                 WHERE is_active = true ORDER BY created_at DESC"
            )
        } else {
            format!("SELECT {COLUMNS} FROM testimonials ORDER BY created_at DESC")
        };
        sqlx::query_as::<_, Testimonial>(&query).fetch_all(pool).await
    }

    /// Find a testimonial by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a testimonial. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET \
                author_name = COALESCE($2, author_name), \
                author_location = COALESCE($3, author_location), \
                quote = COALESCE($4, quote), \
                rating = COALESCE($5, rating), \
                is_active = COALESCE($6, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.author_name)
            .bind(&input.author_location)
            .bind(&input.quote)
            .bind(input.rating)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial. Returns `false` if already absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
