mod builder;
mod connect;

pub use builder::Builder;
pub use connect::Connect;

use crate::{MapRow, Result};

use rowbind_core::{
    driver::{Connection, Driver},
    stmt::Value,
    Error,
};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A database handle owning a single connection.
///
/// Every call runs one statement to completion while holding the connection,
/// then releases it. Calls block until the database responds.
pub struct Db {
    driver: Arc<dyn Driver>,
    connection: Mutex<Box<dyn Connection>>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(driver: Arc<dyn Driver>) -> Result<Self> {
        let connection = driver.connect()?;
        tracing::debug!(url = %driver.url(), "connected");

        Ok(Self {
            driver,
            connection: Mutex::new(connection),
        })
    }

    /// The driver this handle was built with.
    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    /// Executes a statement that returns no rows and reports how many rows it
    /// changed.
    pub fn execute(&self, sql: &str, params: &[Value]) -> Result<u64> {
        tracing::debug!(sql, "execute");
        self.connection().execute(sql, params)
    }

    /// Executes `;`-separated statements without parameters, e.g. DDL.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        tracing::debug!(sql, "execute batch");
        self.connection().execute_batch(sql)
    }

    /// Executes an insert and returns the key the database generated for
    /// `key_column`, or `None` if it generated none.
    pub fn insert_returning_key(
        &self,
        sql: &str,
        params: &[Value],
        key_column: &str,
    ) -> Result<Option<Value>> {
        tracing::debug!(sql, key_column, "insert");
        self.connection().insert(sql, params, key_column)
    }

    /// Runs a query and maps every row, in result order.
    pub fn query<T>(&self, sql: &str, params: &[Value], mapper: &impl MapRow<T>) -> Result<Vec<T>> {
        tracing::debug!(sql, "query");

        let mut ret = vec![];

        self.connection().query(sql, params, &mut |row| {
            let value = mapper.map_row(row, ret.len())?;
            ret.push(value);
            Ok(())
        })?;

        Ok(ret)
    }

    /// Runs a query that must produce exactly one row and maps it.
    ///
    /// No rows fails with a record-not-found error, more than one with a
    /// too-many-records error. Rows after the first are counted, not mapped.
    pub fn query_one<T>(&self, sql: &str, params: &[Value], mapper: &impl MapRow<T>) -> Result<T> {
        tracing::debug!(sql, "query one");

        let mut first = None;
        let mut count = 0usize;

        self.connection().query(sql, params, &mut |row| {
            if count == 0 {
                first = Some(mapper.map_row(row, 0)?);
            }
            count += 1;
            Ok(())
        })?;

        match (first, count) {
            (Some(value), 1) => Ok(value),
            (None, _) => Err(Error::record_not_found("expected 1 record, found 0")),
            (Some(_), count) => Err(Error::too_many_records(format!(
                "expected 1 record, found {count}"
            ))),
        }
    }

    fn connection(&self) -> MutexGuard<'_, Box<dyn Connection>> {
        // A panic while holding the guard cannot leave a statement open; the
        // connection itself is still usable.
        self.connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("url", &self.driver.url())
            .finish_non_exhaustive()
    }
}
