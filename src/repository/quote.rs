use crate::model::Quote;
use rusqlite::{params, Connection, Result};

pub const CREATE_TABLE: &str = r#"
    CREATE TABLE quotes (
        code TEXT NOT NULL,
        codein TEXT NOT NULL,
        bid DECIMAL(8,2) NOT NULL,
        create_date TEXT NOT NULL
    )
"#;

pub fn create_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_TABLE)
}

/// The bid is bound as a blob so the column's NUMERIC affinity keeps the
/// upstream text byte for byte instead of rewriting it as a number.
pub fn insert(row: &Quote, conn: &Connection) -> Result<usize> {
    let query = "INSERT INTO quotes (code, codein, bid, create_date) VALUES (?, ?, ?, ?)";
    let params = params![&row.code, &row.codein, row.bid.as_bytes(), &row.create_date];
    conn.execute(query, params)
}

#[cfg(test)]
mod test {
    use crate::test::{quote, select_all};
    use rusqlite::{Connection, Result};

    #[test]
    fn insert() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        super::create_table(&conn)?;
        assert_eq!(1, super::insert(&quote(), &conn)?);
        assert_eq!(vec![quote()], select_all(&conn)?);
        Ok(())
    }

    #[test]
    fn insert_appends() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        super::create_table(&conn)?;
        super::insert(&quote(), &conn)?;
        super::insert(&quote(), &conn)?;
        assert_eq!(2, select_all(&conn)?.len());
        Ok(())
    }

    #[test]
    fn insert_keeps_bid_text() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        super::create_table(&conn)?;
        let bids = vec!["5.1230", "350000.0", "5.10", "0.00001234"];
        for bid in &bids {
            let mut row = quote();
            row.bid = bid.to_string();
            super::insert(&row, &conn)?;
        }

        let stored: Vec<String> = select_all(&conn)?.into_iter().map(|it| it.bid).collect();
        assert_eq!(bids, stored);

        let kind: String = conn.query_row("SELECT typeof(bid) FROM quotes LIMIT 1", [], |row| {
            row.get(0)
        })?;
        assert_eq!("blob", kind);
        Ok(())
    }

    #[test]
    fn insert_without_table() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        assert!(super::insert(&quote(), &conn).is_err());
        Ok(())
    }
}
