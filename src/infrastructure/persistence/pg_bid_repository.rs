//! PostgreSQL implementation of bid repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{Bid, NewBid};
use crate::domain::repositories::BidRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct BidRow {
    id: Uuid,
    product_id: Uuid,
    bidder_id: Uuid,
    amount: i64,
    date: DateTime<Utc>,
}

impl From<BidRow> for Bid {
    fn from(r: BidRow) -> Self {
        Bid::new(r.id, r.product_id, r.bidder_id, r.amount, r.date)
    }
}

/// PostgreSQL repository for bid storage.
///
/// The bid id is generated by the database (`gen_random_uuid()`). Schema
/// rules are checked before the insert; the table's `NOT NULL` and `CHECK`
/// constraints enforce the same rules for any other writer.
pub struct PgBidRepository {
    pool: Arc<PgPool>,
}

impl PgBidRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BidRepository for PgBidRepository {
    async fn create(&self, new_bid: NewBid) -> Result<Bid, AppError> {
        new_bid.validate()?;

        let row = sqlx::query_as::<_, BidRow>(
            r#"
            INSERT INTO bids (product_id, bidder_id, amount, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, product_id, bidder_id, amount, date
            "#,
        )
        .bind(new_bid.product_id)
        .bind(new_bid.bidder_id)
        .bind(new_bid.amount)
        .bind(new_bid.date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bid>, AppError> {
        let row = sqlx::query_as::<_, BidRow>(
            r#"
            SELECT id, product_id, bidder_id, amount, date
            FROM bids
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Bid::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM bids WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
