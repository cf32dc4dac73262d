use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use villagehub_core::{AppError, Paginated, PaginationMeta};
use villagehub_models::events::{CreateEventDto, Event, EventFilterParams, UpdateEventDto};

const COLUMNS: &str =
    "id, title, description, location, image_url, starts_at, ends_at, created_at, updated_at";

fn not_found() -> AppError {
    AppError::not_found(anyhow!("Event not found"))
}

pub struct EventService;

impl EventService {
    /// With `upcoming`, events that already ended are left out; an event
    /// without `ends_at` counts as ended once it has started.
    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        filters: &EventFilterParams,
    ) -> Result<Paginated<Event>, AppError> {
        let pattern = filters.search_pattern();
        let upcoming = filters.upcoming_only();
        let filter = "($1::text IS NULL OR title ILIKE $1 OR location ILIKE $1) \
                      AND (NOT $2 OR COALESCE(ends_at, starts_at) >= NOW())";

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM events WHERE {filter}"
        ))
        .bind(&pattern)
        .bind(upcoming)
        .fetch_one(db)
        .await?;

        let sql = format!(
            "SELECT {COLUMNS} FROM events WHERE {filter} ORDER BY starts_at ASC LIMIT $3 OFFSET $4"
        );
        let events = sqlx::query_as::<_, Event>(&sql)
            .bind(&pattern)
            .bind(upcoming)
            .bind(filters.pagination.limit())
            .bind(filters.pagination.offset())
            .fetch_all(db)
            .await?;

        Ok(Paginated::new(
            events,
            PaginationMeta::new(total, &filters.pagination),
        ))
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: i32) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(&format!("SELECT {COLUMNS} FROM events WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(not_found)
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateEventDto) -> Result<Event, AppError> {
        let sql = format!(
            r#"INSERT INTO events (title, description, location, image_url, starts_at, ends_at)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {COLUMNS}"#
        );
        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(&dto.location)
            .bind(&dto.image_url)
            .bind(dto.starts_at)
            .bind(dto.ends_at)
            .fetch_one(db)
            .await?;

        tracing::info!(event_id = event.id, "Event created");
        Ok(event)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(db: &PgPool, id: i32, dto: UpdateEventDto) -> Result<Event, AppError> {
        let current = Self::get(db, id).await?;
        let (starts_at, ends_at) = dto.merged_dates(&current).map_err(|e| {
            AppError::unprocessable(anyhow!(
                "{}",
                e.message.as_deref().unwrap_or("Invalid event dates")
            ))
        })?;

        let sql = format!(
            r#"UPDATE events SET
                 title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 location = COALESCE($4, location),
                 image_url = COALESCE($5, image_url),
                 starts_at = $6,
                 ends_at = $7,
                 updated_at = NOW()
               WHERE id = $1
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(&dto.location)
            .bind(&dto.image_url)
            .bind(starts_at)
            .bind(ends_at)
            .fetch_optional(db)
            .await?
            .ok_or_else(not_found)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }
        Ok(())
    }
}
