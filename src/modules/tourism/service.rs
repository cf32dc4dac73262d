use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use villagehub_core::{AppError, Paginated, PaginationMeta};
use villagehub_models::tourism::{
    CreateTourismSpotDto, TourismFilterParams, TourismSpot, UpdateTourismSpotDto,
};

const COLUMNS: &str =
    "id, name, description, location, image_url, ticket_price, open_hours, created_at, updated_at";

fn not_found() -> AppError {
    AppError::not_found(anyhow!("Tourism spot not found"))
}

pub struct TourismService;

impl TourismService {
    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        filters: &TourismFilterParams,
    ) -> Result<Paginated<TourismSpot>, AppError> {
        let pattern = filters.search_pattern();
        let filter = "($1::text IS NULL OR name ILIKE $1 OR location ILIKE $1)";

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM tourism_spots WHERE {filter}"
        ))
        .bind(&pattern)
        .fetch_one(db)
        .await?;

        let sql = format!(
            "SELECT {COLUMNS} FROM tourism_spots WHERE {filter} ORDER BY name ASC LIMIT $2 OFFSET $3"
        );
        let spots = sqlx::query_as::<_, TourismSpot>(&sql)
            .bind(&pattern)
            .bind(filters.pagination.limit())
            .bind(filters.pagination.offset())
            .fetch_all(db)
            .await?;

        Ok(Paginated::new(
            spots,
            PaginationMeta::new(total, &filters.pagination),
        ))
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: i32) -> Result<TourismSpot, AppError> {
        sqlx::query_as::<_, TourismSpot>(&format!(
            "SELECT {COLUMNS} FROM tourism_spots WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(not_found)
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateTourismSpotDto) -> Result<TourismSpot, AppError> {
        let sql = format!(
            r#"INSERT INTO tourism_spots (name, description, location, image_url, ticket_price, open_hours)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {COLUMNS}"#
        );
        let spot = sqlx::query_as::<_, TourismSpot>(&sql)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(&dto.location)
            .bind(&dto.image_url)
            .bind(dto.ticket_price)
            .bind(&dto.open_hours)
            .fetch_one(db)
            .await?;

        tracing::info!(spot_id = spot.id, "Tourism spot created");
        Ok(spot)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: i32,
        dto: UpdateTourismSpotDto,
    ) -> Result<TourismSpot, AppError> {
        let sql = format!(
            r#"UPDATE tourism_spots SET
                 name = COALESCE($2, name),
                 description = COALESCE($3, description),
                 location = COALESCE($4, location),
                 image_url = COALESCE($5, image_url),
                 ticket_price = COALESCE($6, ticket_price),
                 open_hours = COALESCE($7, open_hours),
                 updated_at = NOW()
               WHERE id = $1
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, TourismSpot>(&sql)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(&dto.location)
            .bind(&dto.image_url)
            .bind(dto.ticket_price)
            .bind(&dto.open_hours)
            .fetch_optional(db)
            .await?
            .ok_or_else(not_found)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tourism_spots WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }
        Ok(())
    }
}
