//! Sample directory content for development databases.

use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;

pub struct SampleSpot {
    pub name: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub ticket_price: Option<i64>,
    pub open_hours: Option<&'static str>,
}

pub struct SampleBusiness {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub address: &'static str,
    pub phone: Option<&'static str>,
}

pub struct SampleEvent {
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    /// Offset from now, in days
    pub starts_in_days: i64,
    pub duration_hours: Option<i64>,
}

impl SampleEvent {
    pub fn dates(&self, now: DateTime<Utc>) -> (DateTime<Utc>, Option<DateTime<Utc>>) {
        let starts_at = now + Duration::days(self.starts_in_days);
        let ends_at = self.duration_hours.map(|h| starts_at + Duration::hours(h));
        (starts_at, ends_at)
    }
}

pub const SPOTS: &[SampleSpot] = &[
    SampleSpot {
        name: "Air Terjun Tegenungan",
        description: "Waterfall with a natural pool, reachable by a short stairway.",
        location: "Banjar Tegenungan",
        ticket_price: Some(20_000),
        open_hours: Some("07:00-18:00"),
    },
    SampleSpot {
        name: "Sawah Terasering",
        description: "Rice terraces irrigated by the traditional subak system.",
        location: "Banjar Kaja",
        ticket_price: Some(15_000),
        open_hours: Some("08:00-17:00"),
    },
    SampleSpot {
        name: "Pura Desa",
        description: "The village temple; sarong required.",
        location: "Jl. Raya Desa",
        ticket_price: None,
        open_hours: None,
    },
];

pub const BUSINESSES: &[SampleBusiness] = &[
    SampleBusiness {
        name: "Warung Made",
        description: "Home-cooked nasi campur and babi guling.",
        category: "kuliner",
        address: "Jl. Raya Desa No. 12",
        phone: Some("081234567890"),
    },
    SampleBusiness {
        name: "Ukiran Kayu Wayan",
        description: "Hand-carved wooden masks and statues.",
        category: "kerajinan",
        address: "Banjar Kelod",
        phone: None,
    },
    SampleBusiness {
        name: "Homestay Sari",
        description: "Four rooms overlooking the rice fields.",
        category: "penginapan",
        address: "Banjar Kaja No. 3",
        phone: Some("081398765432"),
    },
];

pub const EVENTS: &[SampleEvent] = &[
    SampleEvent {
        title: "Pasar Malam",
        description: "Weekly night market on the village field.",
        location: "Lapangan Desa",
        starts_in_days: 3,
        duration_hours: Some(5),
    },
    SampleEvent {
        title: "Festival Layang-Layang",
        description: "Kite festival with teams from every banjar.",
        location: "Pantai Desa",
        starts_in_days: 21,
        duration_hours: Some(8),
    },
    SampleEvent {
        title: "Odalan Pura Desa",
        description: "Temple anniversary ceremony.",
        location: "Pura Desa",
        starts_in_days: 40,
        duration_hours: None,
    },
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub spots: usize,
    pub businesses: usize,
    pub events: usize,
}

/// Inserts the sample content. Businesses are owned by, and approved for,
/// the first admin account, so one must exist.
pub async fn seed(db: &PgPool) -> anyhow::Result<SeedReport> {
    let owner_id = sqlx::query_scalar::<_, i32>(
        "SELECT id FROM users WHERE role = 'ADMIN' ORDER BY id LIMIT 1",
    )
    .fetch_optional(db)
    .await?
    .context("no admin account found; run `villagehub-cli create-admin` first")?;

    let mut tx = db.begin().await?;
    let mut report = SeedReport::default();

    for spot in SPOTS {
        sqlx::query(
            r#"INSERT INTO tourism_spots (name, description, location, ticket_price, open_hours)
               VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(spot.name)
        .bind(spot.description)
        .bind(spot.location)
        .bind(spot.ticket_price)
        .bind(spot.open_hours)
        .execute(&mut *tx)
        .await?;
        report.spots += 1;
    }

    for business in BUSINESSES {
        sqlx::query(
            r#"INSERT INTO businesses (name, description, category, address, phone, owner_id, status)
               VALUES ($1, $2, $3, $4, $5, $6, 'APPROVED')"#,
        )
        .bind(business.name)
        .bind(business.description)
        .bind(business.category)
        .bind(business.address)
        .bind(business.phone)
        .bind(owner_id)
        .execute(&mut *tx)
        .await?;
        report.businesses += 1;
    }

    let now = Utc::now();
    for event in EVENTS {
        let (starts_at, ends_at) = event.dates(now);
        sqlx::query(
            r#"INSERT INTO events (title, description, location, starts_at, ends_at)
               VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(event.title)
        .bind(event.description)
        .bind(event.location)
        .bind(starts_at)
        .bind(ends_at)
        .execute(&mut *tx)
        .await?;
        report.events += 1;
    }

    tx.commit().await?;
    Ok(report)
}

/// Removes all directory content. Accounts are kept.
pub async fn clear(db: &PgPool) -> anyhow::Result<()> {
    sqlx::query("TRUNCATE tourism_spots, businesses, events RESTART IDENTITY")
        .execute(db)
        .await?;
    Ok(())
}
