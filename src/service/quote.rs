use crate::{
    model::{Quote, QuoteError},
    provider::Provider,
    repository::quote,
};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rocket::tokio::task::spawn_blocking;
use rusqlite::{Connection, ErrorCode};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// VM instructions between deadline checks while a statement runs.
const PROGRESS_OPS: i32 = 100;

/// Fetches quotes from a provider and records each one in the quote store.
pub struct QuoteService {
    provider: Box<dyn Provider>,
    pool: Pool<SqliteConnectionManager>,
    db_timeout: Duration,
}

impl QuoteService {
    pub fn new(
        provider: Box<dyn Provider>,
        pool: Pool<SqliteConnectionManager>,
        db_timeout: Duration,
    ) -> QuoteService {
        QuoteService {
            provider,
            pool,
            db_timeout,
        }
    }

    pub async fn get(&self, pair: &str) -> Result<Quote, QuoteError> {
        let quote = self.provider.fetch(pair).await?;
        info!(provider = %self.provider.name(), %pair, bid = %quote.bid, "Got quote");
        self.save(quote).await
    }

    /// Inserts the quote, giving up once `db_timeout` has elapsed.
    pub async fn save(&self, quote: Quote) -> Result<Quote, QuoteError> {
        let deadline = Instant::now() + self.db_timeout;
        let budget = self.db_timeout;
        let pool = self.pool.clone();

        spawn_blocking(move || {
            insert_before(&quote, &pool, deadline, budget)?;
            Ok::<_, QuoteError>(quote)
        })
        .await?
    }
}

fn insert_before(
    row: &Quote,
    pool: &Pool<SqliteConnectionManager>,
    deadline: Instant,
    budget: Duration,
) -> Result<(), QuoteError> {
    let remaining = deadline.saturating_duration_since(Instant::now());
    if remaining.is_zero() {
        warn!(?budget, "Storage deadline exceeded before insert");
        return Err(QuoteError::StorageTimeout(budget));
    }

    let conn = pool.get_timeout(remaining).map_err(|e| {
        if Instant::now() >= deadline {
            QuoteError::StorageTimeout(budget)
        } else {
            QuoteError::Pool(e)
        }
    })?;

    let res = insert_with_deadline(row, &conn, deadline);
    conn.progress_handler(0, None::<fn() -> bool>);

    match res {
        Err(QuoteError::Storage(e)) if is_deadline_error(&e) => {
            warn!(?budget, %e, "Storage deadline exceeded");
            Err(QuoteError::StorageTimeout(budget))
        }
        res => res,
    }
}

fn insert_with_deadline(row: &Quote, conn: &Connection, deadline: Instant) -> Result<(), QuoteError> {
    conn.busy_timeout(deadline.saturating_duration_since(Instant::now()))?;
    conn.progress_handler(PROGRESS_OPS, Some(move || Instant::now() >= deadline));
    quote::insert(row, conn)?;
    Ok(())
}

fn is_deadline_error(e: &rusqlite::Error) -> bool {
    match e {
        rusqlite::Error::SqliteFailure(e, _) => matches!(
            e.code,
            ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked | ErrorCode::OperationInterrupted
        ),
        _ => false,
    }
}
