//! Guests repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, Entity},
    models::guest::{CreateGuest, Guest, GuestQuery, UpdateGuest},
};

/// Build a LIKE pattern matching the term as a literal substring.
/// `%`, `_` and the escape character itself are escaped so a search for
/// "100%" does not turn into a wildcard.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .trim()
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[derive(Clone)]
pub struct GuestsRepository {
    pool: Pool<Postgres>,
}

impl GuestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get guest by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Guest> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound { entity: Entity::Guest, id })
    }

    /// List active guests, optionally filtered by a substring match
    /// against name OR document (single search term, OR semantics)
    pub async fn search(&self, query: &GuestQuery) -> AppResult<Vec<Guest>> {
        let guests = match &query.search {
            Some(term) if !term.trim().is_empty() => {
                let pattern = like_pattern(term);
                sqlx::query_as::<_, Guest>(
                    r#"
                    SELECT * FROM guests
                    WHERE is_active
                      AND (LOWER(name) LIKE $1 OR LOWER(COALESCE(document, '')) LIKE $1)
                    ORDER BY name
                    "#,
                )
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            _ => {
                sqlx::query_as::<_, Guest>(
                    "SELECT * FROM guests WHERE is_active ORDER BY name",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(guests)
    }

    /// Create a new guest
    pub async fn create(&self, guest: &CreateGuest) -> AppResult<Guest> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO guests (name, document, phone, email, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, true, $5, $5)
            RETURNING id
            "#,
        )
        .bind(&guest.name)
        .bind(&guest.document)
        .bind(&guest.phone)
        .bind(&guest.email)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing guest (partial; an empty update performs no write)
    pub async fn update(&self, id: i32, guest: &UpdateGuest) -> AppResult<Guest> {
        if guest.is_empty() {
            return self.get_by_id(id).await;
        }

        let now = Utc::now();

        let mut sets = vec!["updated_at = $1".to_string()];
        let mut param_idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, param_idx));
                    param_idx += 1;
                }
            };
        }

        add_field!(guest.name, "name");
        add_field!(guest.document, "document");
        add_field!(guest.phone, "phone");
        add_field!(guest.email, "email");

        let query = format!("UPDATE guests SET {} WHERE id = {}", sets.join(", "), id);

        let mut builder = sqlx::query(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(guest.name);
        bind_field!(guest.document);
        bind_field!(guest.phone);
        bind_field!(guest.email);

        builder.execute(&self.pool).await?;

        self.get_by_id(id).await
    }

    /// Soft-archive a guest (history is preserved, row is never deleted)
    pub async fn archive(&self, id: i32) -> AppResult<Guest> {
        let now = Utc::now();

        sqlx::query("UPDATE guests SET is_active = false, archived_at = $1, updated_at = $1 WHERE id = $2")
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("A_B"), "%a\\_b%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
        assert_eq!(like_pattern("  Jane  "), "%jane%");
    }
}
