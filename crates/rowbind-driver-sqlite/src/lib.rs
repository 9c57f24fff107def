mod value;
pub(crate) use value::Value;

use rowbind_core::{
    driver::{Driver, Row},
    stmt::{self, Type},
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL.
    ///
    /// `sqlite::memory:` opens a fresh in-memory database per connection;
    /// `sqlite:<path>` opens (or creates) the database file at `path`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        match url.path() {
            ":memory:" => Ok(Self::InMemory),
            "" => Err(Error::invalid_connection_url(format!(
                "connection URL is missing a database path; url={}",
                url_str
            ))),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn connect(&self) -> Result<Box<dyn rowbind_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        tracing::trace!(url = %self.url(), "opened sqlite connection");
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }
}

impl rowbind_core::Connection for Connection {
    fn execute(&mut self, sql: &str, params: &[stmt::Value]) -> Result<u64> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter().map(Value::from)))
            .map_err(Error::driver_operation_failed)?;

        Ok(count as u64)
    }

    fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.connection
            .execute_batch(sql)
            .map_err(Error::driver_operation_failed)
    }

    fn insert(
        &mut self,
        sql: &str,
        params: &[stmt::Value],
        key_column: &str,
    ) -> Result<Option<stmt::Value>> {
        // SQLite reports generated keys through `RETURNING`.
        let sql = format!(
            "{} RETURNING {}",
            sql.trim_end().trim_end_matches(';'),
            quote_ident(key_column)
        );

        let mut stmt = self
            .connection
            .prepare_cached(&sql)
            .map_err(Error::driver_operation_failed)?;

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter().map(Value::from)))
            .map_err(Error::driver_operation_failed)?;

        let mut key = None;

        // Step through every returned row so the insert runs to completion.
        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            if key.is_none() {
                let value = Value::from_sql_native(row, 0)?.into_inner();
                if !value.is_null() {
                    key = Some(value);
                }
            }
        }

        Ok(key)
    }

    fn query(
        &mut self,
        sql: &str,
        params: &[stmt::Value],
        each: &mut dyn FnMut(&dyn Row) -> Result<()>,
    ) -> Result<()> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter().map(Value::from)))
            .map_err(Error::driver_operation_failed)?;

        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            each(&SqliteRow {
                row,
                columns: &columns,
            })?;
        }

        Ok(())
    }
}

struct SqliteRow<'a, 'stmt> {
    row: &'a rusqlite::Row<'stmt>,
    columns: &'a [String],
}

impl Row for SqliteRow<'_, '_> {
    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_name(&self, index: usize) -> Result<&str> {
        self.columns
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| {
                Error::driver_operation_failed(rusqlite::Error::InvalidColumnIndex(index))
            })
    }

    fn get(&self, index: usize, ty: &Type) -> Result<stmt::Value> {
        Ok(Value::from_sql(self.row, index, ty)?.into_inner())
    }
}

fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
