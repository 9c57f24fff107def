use super::{Connect, Db};
use crate::Result;

use rowbind_core::driver::Driver;

use std::sync::Arc;

/// Configures and opens a [`Db`].
#[derive(Debug, Default)]
pub struct Builder {
    /// Statements run once right after connecting.
    init_sql: Vec<String>,
}

impl Builder {
    /// Adds SQL to run once on the new connection, before the handle is
    /// returned. Typically used for `PRAGMA`s or `CREATE TABLE IF NOT EXISTS`.
    pub fn init_sql(&mut self, sql: impl Into<String>) -> &mut Self {
        self.init_sql.push(sql.into());
        self
    }

    /// Connects using a URL, picking the driver from its scheme.
    pub fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?)
    }

    /// Connects using an explicit driver.
    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let db = Db::new(Arc::new(driver))?;

        for sql in &self.init_sql {
            db.execute_batch(sql)?;
        }

        Ok(db)
    }
}
