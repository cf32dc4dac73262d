//! Business submissions and their review workflow.
//!
//! Rows move `PENDING -> APPROVED | REJECTED` through an admin review; an
//! owner edit sends the row back to `PENDING`.

use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use villagehub_core::{AppError, Paginated, PaginationMeta, PaginationParams};
use villagehub_models::business::{
    Business, BusinessFilterParams, BusinessStatus, CreateBusinessDto, ReviewBusinessDto,
    UpdateBusinessDto,
};

const COLUMNS: &str = "id, name, description, category, address, phone, image_url, owner_id, \
                       status, review_note, created_at, updated_at";

fn not_found() -> AppError {
    AppError::not_found(anyhow!("Business not found"))
}

pub struct BusinessService;

impl BusinessService {
    /// Public listing: approved businesses only.
    #[instrument(skip(db))]
    pub async fn list_approved(
        db: &PgPool,
        filters: &BusinessFilterParams,
    ) -> Result<Paginated<Business>, AppError> {
        let pattern = filters.search_pattern();
        let category = filters.category();
        let filter = "status = 'APPROVED' \
                      AND ($1::text IS NULL OR name ILIKE $1 OR description ILIKE $1) \
                      AND ($2::text IS NULL OR category = $2)";

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM businesses WHERE {filter}"
        ))
        .bind(&pattern)
        .bind(category)
        .fetch_one(db)
        .await?;

        let sql = format!(
            "SELECT {COLUMNS} FROM businesses WHERE {filter} ORDER BY name ASC LIMIT $3 OFFSET $4"
        );
        let businesses = sqlx::query_as::<_, Business>(&sql)
            .bind(&pattern)
            .bind(category)
            .bind(filters.pagination.limit())
            .bind(filters.pagination.offset())
            .fetch_all(db)
            .await?;

        Ok(Paginated::new(
            businesses,
            PaginationMeta::new(total, &filters.pagination),
        ))
    }

    /// Every submission, pending ones first. Used by the admin dashboard.
    #[instrument(skip(db))]
    pub async fn list_all(
        db: &PgPool,
        pagination: &PaginationParams,
    ) -> Result<Paginated<Business>, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM businesses")
            .fetch_one(db)
            .await?;

        let sql = format!(
            "SELECT {COLUMNS} FROM businesses \
             ORDER BY (status = 'PENDING') DESC, created_at DESC LIMIT $1 OFFSET $2"
        );
        let businesses = sqlx::query_as::<_, Business>(&sql)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(db)
            .await?;

        Ok(Paginated::new(businesses, PaginationMeta::new(total, pagination)))
    }

    #[instrument(skip(db))]
    pub async fn list_by_owner(db: &PgPool, owner_id: i32) -> Result<Vec<Business>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM businesses WHERE owner_id = $1 ORDER BY created_at DESC"
        );
        Ok(sqlx::query_as::<_, Business>(&sql)
            .bind(owner_id)
            .fetch_all(db)
            .await?)
    }

    #[instrument(skip(db))]
    pub async fn get_approved(db: &PgPool, id: i32) -> Result<Business, AppError> {
        sqlx::query_as::<_, Business>(&format!(
            "SELECT {COLUMNS} FROM businesses WHERE id = $1 AND status = 'APPROVED'"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(not_found)
    }

    /// Admin submissions skip review.
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        owner_id: i32,
        auto_approve: bool,
        dto: CreateBusinessDto,
    ) -> Result<Business, AppError> {
        let status = if auto_approve {
            BusinessStatus::Approved
        } else {
            BusinessStatus::Pending
        };

        let sql = format!(
            r#"INSERT INTO businesses (name, description, category, address, phone, image_url, owner_id, status)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING {COLUMNS}"#
        );
        let business = sqlx::query_as::<_, Business>(&sql)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.category.trim())
            .bind(&dto.address)
            .bind(&dto.phone)
            .bind(&dto.image_url)
            .bind(owner_id)
            .bind(status)
            .fetch_one(db)
            .await?;

        tracing::info!(
            business_id = business.id,
            owner_id,
            status = %business.status,
            "Business submitted"
        );
        Ok(business)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: i32,
        dto: UpdateBusinessDto,
    ) -> Result<Business, AppError> {
        Self::apply_update(db, id, None, dto).await
    }

    /// Owner edit; the row goes back to review. Other users' rows read as missing.
    #[instrument(skip(db, dto))]
    pub async fn update_owned(
        db: &PgPool,
        owner_id: i32,
        id: i32,
        dto: UpdateBusinessDto,
    ) -> Result<Business, AppError> {
        Self::apply_update(db, id, Some(owner_id), dto).await
    }

    async fn apply_update(
        db: &PgPool,
        id: i32,
        owner_id: Option<i32>,
        dto: UpdateBusinessDto,
    ) -> Result<Business, AppError> {
        let sql = format!(
            r#"UPDATE businesses SET
                 name = COALESCE($3, name),
                 description = COALESCE($4, description),
                 category = COALESCE($5, category),
                 address = COALESCE($6, address),
                 phone = COALESCE($7, phone),
                 image_url = COALESCE($8, image_url),
                 status = CASE WHEN $2::int IS NULL THEN status ELSE 'PENDING' END,
                 review_note = CASE WHEN $2::int IS NULL THEN review_note ELSE NULL END,
                 updated_at = NOW()
               WHERE id = $1 AND ($2::int IS NULL OR owner_id = $2)
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Business>(&sql)
            .bind(id)
            .bind(owner_id)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.category.as_deref().map(str::trim))
            .bind(&dto.address)
            .bind(&dto.phone)
            .bind(&dto.image_url)
            .fetch_optional(db)
            .await?
            .ok_or_else(not_found)
    }

    #[instrument(skip(db, dto))]
    pub async fn review(
        db: &PgPool,
        id: i32,
        dto: ReviewBusinessDto,
    ) -> Result<Business, AppError> {
        let sql = format!(
            r#"UPDATE businesses SET status = $2, review_note = $3, updated_at = NOW()
               WHERE id = $1
               RETURNING {COLUMNS}"#
        );
        let business = sqlx::query_as::<_, Business>(&sql)
            .bind(id)
            .bind(dto.status)
            .bind(&dto.review_note)
            .fetch_optional(db)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!(business_id = id, status = %business.status, "Business reviewed");
        Ok(business)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: i32) -> Result<(), AppError> {
        Self::apply_delete(db, id, None).await
    }

    #[instrument(skip(db))]
    pub async fn delete_owned(db: &PgPool, owner_id: i32, id: i32) -> Result<(), AppError> {
        Self::apply_delete(db, id, Some(owner_id)).await
    }

    async fn apply_delete(db: &PgPool, id: i32, owner_id: Option<i32>) -> Result<(), AppError> {
        let result = sqlx::query(
            "DELETE FROM businesses WHERE id = $1 AND ($2::int IS NULL OR owner_id = $2)",
        )
        .bind(id)
        .bind(owner_id)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }
        Ok(())
    }
}
