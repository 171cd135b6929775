use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use domain::{Id, Order, OrderRecord, OrderRepository, RepositoryError};

use crate::rehydrate;

/// PostgreSQL-backed order repository.
///
/// Persists one row per order with the flat representation stored as a
/// JSONB document, keyed by the order id.
#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a repository over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the given database URL with a small pool.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
        Ok(Self { pool })
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows: Vec<(serde_json::Value,)> = sqlx::query_as("SELECT data FROM orders")
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;

        rows.into_iter()
            .map(|(data,)| {
                let record: OrderRecord =
                    serde_json::from_value(data).map_err(RepositoryError::backend)?;
                rehydrate(record)
            })
            .collect()
    }

    async fn find_by_id(&self, id: &Id) -> Result<Option<Order>, RepositoryError> {
        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT data FROM orders WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(RepositoryError::backend)?;

        row.map(|(data,)| {
            let record: OrderRecord =
                serde_json::from_value(data).map_err(RepositoryError::backend)?;
            rehydrate(record)
        })
        .transpose()
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let record = order.to_record();
        let data = serde_json::to_value(&record).map_err(RepositoryError::backend)?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, data)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET data = EXCLUDED.data
            "#,
        )
        .bind(&record.id)
        .bind(data)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::backend)?;

        tracing::debug!(order_id = %record.id, "order saved");
        Ok(())
    }

    async fn delete(&self, id: &Id) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;
        Ok(())
    }
}
