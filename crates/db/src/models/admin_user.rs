//! Admin user model and DTOs.
//!
//! The password hash is never serialized into API responses.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourbase_core::types::{DbId, Timestamp};

/// A row from the `admin_users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminUser {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an admin user. The hash must already be PHC-formatted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdminUser {
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
