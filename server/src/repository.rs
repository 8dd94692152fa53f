//! Event persistence.
//!
//! The [`EventRepository`] trait is the seam between the service layer and
//! storage: it is injected explicitly (constructed once in `main`, passed via
//! application state) rather than reached through process-global handles.
//! [`SqliteEventRepository`] is the production implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use thiserror::Error;

/// A stored event record.
///
/// `capacity` and `sold` are signed so that `capacity - sold` can go
/// negative without wrapping; oversold events are not rejected upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    /// Unique event identifier (opaque, caller-supplied)
    pub event_id: String,
    /// Free-form description
    pub event_description: String,
    /// Event start time (validated ISO-8601 text)
    pub start_time: String,
    /// Total ticket capacity
    pub capacity: i64,
    /// Tickets already sold
    pub sold: i64,
    /// Listed ticket price
    pub price: f64,
}

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// An event with this id already exists (primary key violation).
    #[error("event '{0}' already exists")]
    Duplicate(String),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage operations for event records.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert a new event.
    ///
    /// # Errors
    ///
    /// [`RepositoryError::Duplicate`] if the id is already taken,
    /// [`RepositoryError::Database`] for any other failure.
    async fn insert(&self, event: &EventRecord) -> Result<(), RepositoryError>;

    /// Fetch all stored events.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn fetch_all(&self) -> Result<Vec<EventRecord>, RepositoryError>;

    /// Fetch a single event by id, or `None` if no such event exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. An unknown id is NOT an error:
    /// it is the explicit not-found indicator the service layer maps to a
    /// defined failure.
    async fn fetch_by_id(&self, event_id: &str) -> Result<Option<EventRecord>, RepositoryError>;
}

/// `SQLite`-backed event repository.
pub struct SqliteEventRepository {
    pool: SqlitePool,
}

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS events (
    event_id          TEXT PRIMARY KEY,
    event_description TEXT NOT NULL DEFAULT '',
    start_time        TEXT NOT NULL,
    capacity          INTEGER NOT NULL,
    sold              INTEGER NOT NULL,
    price             REAL NOT NULL
)";

impl SqliteEventRepository {
    /// Connect to the database and create the schema if needed.
    ///
    /// The database file is created when missing, so a fresh deployment
    /// starts from an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the connection fails, or
    /// schema creation fails.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(sqlx::Error::from)?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let repository = Self { pool };
        repository.ensure_schema().await?;
        Ok(repository)
    }

    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn insert(&self, event: &EventRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO events (event_id, event_description, start_time, capacity, sold, price) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&event.event_id)
        .bind(&event.event_description)
        .bind(&event.start_time)
        .bind(event.capacity)
        .bind(event.sold)
        .bind(event.price)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::Duplicate(event.event_id.clone())
            }
            _ => RepositoryError::Database(e),
        })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<EventRecord>, RepositoryError> {
        let events = sqlx::query_as::<_, EventRecord>(
            "SELECT event_id, event_description, start_time, capacity, sold, price \
             FROM events ORDER BY event_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(events)
    }

    async fn fetch_by_id(&self, event_id: &str) -> Result<Option<EventRecord>, RepositoryError> {
        let event = sqlx::query_as::<_, EventRecord>(
            "SELECT event_id, event_description, start_time, capacity, sold, price \
             FROM events WHERE event_id = ?",
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }
}
