use crate::repository::quote;
use anyhow::Result;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::{fs::remove_file, path::Path};
use tracing::{info, warn};

/// Creates the database file with its `quotes` table unless the file exists.
///
/// An existing file is used as is: its schema is not checked here, so a file
/// without the table only fails once a quote is saved.
pub fn create_if_missing(db_path: &Path) -> Result<()> {
    if db_path.exists() {
        info!(db_path = %db_path.display(), "Using existing database");
        return Ok(());
    }

    warn!(db_path = %db_path.display(), "Creating database...");
    let conn = Connection::open(db_path)?;

    if let Err(e) = quote::create_table(&conn) {
        drop(conn);
        remove_file(db_path)?;
        return Err(e.into());
    }

    info!("Database has been created");
    Ok(())
}

pub fn pool(db_path: &Path) -> Result<Pool<SqliteConnectionManager>> {
    let manager = SqliteConnectionManager::file(db_path);
    Ok(Pool::new(manager)?)
}

#[cfg(test)]
mod test {
    use crate::{
        repository::quote,
        test::{quote, select_all},
    };
    use anyhow::Result;
    use rusqlite::Connection;
    use std::fs::File;

    #[test]
    fn create_if_missing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("quotes.db");
        super::create_if_missing(&path)?;
        assert!(path.exists());
        let conn = Connection::open(&path)?;
        assert!(select_all(&conn)?.is_empty());
        Ok(())
    }

    #[test]
    fn create_if_missing_keeps_existing_rows() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("quotes.db");
        super::create_if_missing(&path)?;
        quote::insert(&quote(), &Connection::open(&path)?)?;
        super::create_if_missing(&path)?;
        assert_eq!(vec![quote()], select_all(&Connection::open(&path)?)?);
        Ok(())
    }

    #[test]
    fn create_if_missing_skips_schema_check() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("quotes.db");
        File::create(&path)?;
        super::create_if_missing(&path)?;
        assert!(quote::insert(&quote(), &Connection::open(&path)?).is_err());
        Ok(())
    }

    #[test]
    fn pool() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("quotes.db");
        super::create_if_missing(&path)?;
        let pool = super::pool(&path)?;
        assert_eq!(1, quote::insert(&quote(), &*pool.get()?)?);
        Ok(())
    }
}
