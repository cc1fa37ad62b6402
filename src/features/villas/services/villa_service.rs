use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::villas::dtos::{CreateVillaDto, UpdateVillaDto, VillaResponseDto};
use crate::features::villas::models::Villa;

const VILLA_COLUMNS: &str =
    "id, name, detail, occupants, square_meters, rate, amenity, image_url, created_at, updated_at";

/// Service for villa CRUD operations
pub struct VillaService {
    pool: SqlitePool,
}

impl VillaService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all villas
    pub async fn list(&self) -> Result<Vec<VillaResponseDto>> {
        let sql = format!("SELECT {VILLA_COLUMNS} FROM villas ORDER BY id");

        let villas = sqlx::query_as::<_, Villa>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list villas: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(villas.into_iter().map(|v| v.into()).collect())
    }

    /// Get a villa by id
    pub async fn get(&self, id: i64) -> Result<VillaResponseDto> {
        let villa = self.fetch_by_id(id).await?;

        villa
            .map(|v| v.into())
            .ok_or_else(|| AppError::NotFound(format!("Villa {} not found", id)))
    }

    /// Current row as the update shape, for applying patch operations.
    /// A missing row is rejected as a bad request rather than 404, matching
    /// the partial-update contract.
    pub async fn get_update_shape(&self, id: i64) -> Result<UpdateVillaDto> {
        let villa = self.fetch_by_id(id).await?;

        villa
            .map(|v| v.into())
            .ok_or_else(|| AppError::BadRequest(format!("Villa {} does not exist", id)))
    }

    /// Insert a new villa. The name must be unique case-insensitively; the
    /// check lives here, not in a storage constraint.
    pub async fn create(&self, dto: CreateVillaDto) -> Result<VillaResponseDto> {
        let lookup = format!("SELECT {VILLA_COLUMNS} FROM villas WHERE LOWER(name) = LOWER(?)");

        let duplicate = sqlx::query_as::<_, Villa>(&lookup)
            .bind(&dto.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check villa name: {:?}", e);
                AppError::Database(e)
            })?;

        if duplicate.is_some() {
            return Err(AppError::Validation(format!(
                "A villa named '{}' already exists",
                dto.name
            )));
        }

        let insert = format!(
            "INSERT INTO villas (name, detail, occupants, square_meters, rate, amenity, image_url, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {VILLA_COLUMNS}"
        );

        let now = Utc::now();
        let villa = sqlx::query_as::<_, Villa>(&insert)
            .bind(&dto.name)
            .bind(&dto.detail)
            .bind(dto.occupants)
            .bind(dto.square_meters)
            .bind(dto.rate)
            .bind(&dto.amenity)
            .bind(&dto.image_url)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create villa: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Created villa {} ('{}')", villa.id, villa.name);

        Ok(villa.into())
    }

    /// Overwrite the row matching the shape's id, refreshing updated_at.
    /// Existence is not checked: an update matching no row is a no-op.
    pub async fn update(&self, dto: UpdateVillaDto) -> Result<()> {
        sqlx::query(
            "UPDATE villas \
             SET name = ?, detail = ?, occupants = ?, square_meters = ?, rate = ?, \
                 amenity = ?, image_url = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&dto.name)
        .bind(&dto.detail)
        .bind(dto.occupants)
        .bind(dto.square_meters)
        .bind(dto.rate)
        .bind(&dto.amenity)
        .bind(&dto.image_url)
        .bind(Utc::now())
        .bind(dto.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update villa {}: {:?}", dto.id, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    /// Delete a villa by id
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM villas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete villa {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Villa {} not found", id)));
        }

        tracing::info!("Deleted villa {}", id);

        Ok(())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Villa>> {
        let sql = format!("SELECT {VILLA_COLUMNS} FROM villas WHERE id = ?");

        sqlx::query_as::<_, Villa>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch villa {}: {:?}", id, e);
                AppError::Database(e)
            })
    }
}
