//! PostgreSQL capacity repository
//!
//! Synchronous `postgres` client behind an r2d2 pool. Every query runs on
//! the blocking thread pool via `spawn_blocking`.
//!
//! ```text
//! capacity(id BIGSERIAL PK, name VARCHAR(50) UNIQUE, description VARCHAR(90))
//! capacity_technology(capacity_id BIGINT FK, technology_id BIGINT)
//! ```

use crate::constants::REPOSITORY_PROVIDER_POSTGRES;
use async_trait::async_trait;
use capacity_domain::entities::{Capacity, CapacityId, TechnologyId};
use capacity_domain::error::{Error, Result};
use capacity_domain::repositories::CapacityRepository;
use capacity_domain::value_objects::{PaginationRequest, SortDirection, SortField};
use r2d2::Pool;
use r2d2_postgres::PostgresConnectionManager;
use r2d2_postgres::postgres::{Client, NoTls};
use std::time::Duration;
use tracing::{debug, info};

/// Shared connection pool type
pub type PgPool = Pool<PostgresConnectionManager<NoTls>>;

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS capacity (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(50) NOT NULL UNIQUE,
    description VARCHAR(90) NOT NULL
);
CREATE TABLE IF NOT EXISTS capacity_technology (
    capacity_id BIGINT NOT NULL REFERENCES capacity(id) ON DELETE CASCADE,
    technology_id BIGINT NOT NULL,
    PRIMARY KEY (capacity_id, technology_id)
);
";

const INSERT_CAPACITY_SQL: &str =
    "INSERT INTO capacity (name, description) VALUES ($1, $2) RETURNING id";
const INSERT_LINK_SQL: &str =
    "INSERT INTO capacity_technology (capacity_id, technology_id) VALUES ($1, $2)";
const EXISTS_BY_NAME_SQL: &str = "SELECT EXISTS (SELECT 1 FROM capacity WHERE name = $1)";
const EXISTING_IDS_SQL: &str = "SELECT id FROM capacity WHERE id = ANY($1)";
const COUNT_SQL: &str = "SELECT COUNT(*) FROM capacity";
const TECHNOLOGY_IDS_SQL: &str =
    "SELECT technology_id FROM capacity_technology WHERE capacity_id = $1";

/// Build the paginated listing query for a sort
///
/// Parameters are `$1` = limit, `$2` = offset.
pub fn page_query(sort_by: SortField, direction: SortDirection) -> String {
    let order_by = match sort_by {
        SortField::Name => format!("c.name {}", direction.as_sql()),
        SortField::TechnologyCount => {
            format!("COUNT(ct.technology_id) {}, c.name ASC", direction.as_sql())
        }
    };
    format!(
        "SELECT c.id, c.name, c.description FROM capacity c \
         LEFT JOIN capacity_technology ct ON c.id = ct.capacity_id \
         GROUP BY c.id, c.name, c.description \
         ORDER BY {order_by} LIMIT $1 OFFSET $2"
    )
}

fn db_error(context: &str, error: r2d2_postgres::postgres::Error) -> Error {
    Error::database_with_source(context, error)
}

/// Connection pool settings
#[derive(Debug, Clone)]
pub struct PostgresPoolConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of idle connections
    pub min_idle: u32,
    /// Connection checkout timeout
    pub connection_timeout: Duration,
}

/// PostgreSQL capacity repository
#[derive(Clone)]
pub struct PostgresCapacityRepository {
    pool: PgPool,
}

impl PostgresCapacityRepository {
    /// Wrap an already-built pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a pool from settings and wrap it
    pub fn connect(config: &PostgresPoolConfig) -> Result<Self> {
        let manager = PostgresConnectionManager::new(
            config
                .url
                .parse()
                .map_err(|e| Error::configuration_with_source("Invalid database URL", e))?,
            NoTls,
        );

        let pool = Pool::builder()
            .max_size(config.max_connections)
            .min_idle(Some(config.min_idle))
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .map_err(|e| Error::database_with_source("Failed to create connection pool", e))?;

        info!(max_connections = config.max_connections, "PostgreSQL pool ready");
        Ok(Self::new(pool))
    }

    /// Create the tables when missing
    pub async fn ensure_schema(&self) -> Result<()> {
        self.run(|client| {
            client
                .batch_execute(SCHEMA_SQL)
                .map_err(|e| db_error("Failed to create schema", e))
        })
        .await
    }

    /// Run a blocking closure with a pooled connection
    async fn run<T, F>(&self, task: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Client) -> Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|e| Error::database_with_source("Failed to get database connection", e))?;
            task(&mut *connection)
        })
        .await
        .map_err(|e| Error::internal(format!("Database task failed: {e}")))?
    }
}

#[async_trait]
impl CapacityRepository for PostgresCapacityRepository {
    async fn save(&self, capacity: &Capacity) -> Result<Capacity> {
        let capacity = capacity.clone();
        self.run(move |client| {
            // Row and links commit together or not at all
            let mut tx = client
                .transaction()
                .map_err(|e| db_error("Failed to begin transaction", e))?;

            let row = tx
                .query_one(INSERT_CAPACITY_SQL, &[&capacity.name, &capacity.description])
                .map_err(|e| db_error("Failed to insert capacity", e))?;
            let id: CapacityId = row.get(0);

            for technology_id in &capacity.technology_ids {
                tx.execute(INSERT_LINK_SQL, &[&id, technology_id])
                    .map_err(|e| db_error("Failed to insert capacity technology link", e))?;
            }

            tx.commit()
                .map_err(|e| db_error("Failed to commit capacity", e))?;

            debug!(capacity_id = id, links = capacity.technology_ids.len(), "Capacity stored");
            Ok(capacity.with_id(id))
        })
        .await
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let name = name.to_string();
        self.run(move |client| {
            let row = client
                .query_one(EXISTS_BY_NAME_SQL, &[&name])
                .map_err(|e| db_error("Failed to check capacity name", e))?;
            Ok(row.get(0))
        })
        .await
    }

    async fn find_existing_ids(&self, ids: &[CapacityId]) -> Result<Vec<CapacityId>> {
        let ids = ids.to_vec();
        self.run(move |client| {
            let rows = client
                .query(EXISTING_IDS_SQL, &[&ids])
                .map_err(|e| db_error("Failed to look up capacity ids", e))?;
            Ok(rows.iter().map(|row| row.get(0)).collect())
        })
        .await
    }

    async fn find_page(&self, pagination: &PaginationRequest) -> Result<Vec<Capacity>> {
        let sql = page_query(pagination.sort_by(), pagination.sort_direction());
        let limit = i64::from(pagination.size());
        let offset = i64::try_from(pagination.offset())
            .map_err(|_| Error::invalid_argument("Page offset out of range"))?;

        self.run(move |client| {
            let rows = client
                .query(sql.as_str(), &[&limit, &offset])
                .map_err(|e| db_error("Failed to list capacities", e))?;
            Ok(rows
                .iter()
                .map(|row| {
                    Capacity::new(row.get::<_, String>(1), row.get::<_, String>(2), Vec::new())
                        .with_id(row.get(0))
                })
                .collect())
        })
        .await
    }

    async fn count(&self) -> Result<u64> {
        self.run(|client| {
            let row = client
                .query_one(COUNT_SQL, &[])
                .map_err(|e| db_error("Failed to count capacities", e))?;
            let total: i64 = row.get(0);
            u64::try_from(total).map_err(|_| Error::database(format!("Invalid count: {total}")))
        })
        .await
    }

    async fn find_technology_ids(&self, capacity_id: CapacityId) -> Result<Vec<TechnologyId>> {
        self.run(move |client| {
            let rows = client
                .query(TECHNOLOGY_IDS_SQL, &[&capacity_id])
                .map_err(|e| db_error("Failed to load capacity technologies", e))?;
            Ok(rows.iter().map(|row| row.get(0)).collect())
        })
        .await
    }

    fn provider_name(&self) -> &str {
        REPOSITORY_PROVIDER_POSTGRES
    }
}
