use crate::{
    stmt::{Type, Value},
    Result,
};

use std::{borrow::Cow, fmt::Debug};

/// A database backend that can open connections.
pub trait Driver: Debug + Send + Sync + 'static {
    /// Returns the connection URL this driver was configured with.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A single, blocking database connection.
///
/// Statements prepared by a connection are scoped to the call that prepared
/// them and are released before the call returns, on success or failure.
pub trait Connection: Debug + Send + 'static {
    /// Executes a statement that returns no rows and reports the number of
    /// rows it changed.
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64>;

    /// Executes one or more `;`-separated statements without parameters.
    fn execute_batch(&mut self, sql: &str) -> Result<()>;

    /// Executes an insert and returns the value the store generated for
    /// `key_column`, or `None` if it did not generate one.
    fn insert(&mut self, sql: &str, params: &[Value], key_column: &str) -> Result<Option<Value>>;

    /// Executes a query, calling `each` once per result row in order.
    ///
    /// An error returned by `each` stops the iteration and is returned as is.
    fn query(
        &mut self,
        sql: &str,
        params: &[Value],
        each: &mut dyn FnMut(&dyn Row) -> Result<()>,
    ) -> Result<()>;
}

/// One row of a result set, as seen while the cursor is positioned on it.
pub trait Row {
    /// Number of columns in the result set.
    fn column_count(&self) -> usize;

    /// Name the database reports for the column at `index`, using its label
    /// (`AS` alias) when one was given.
    fn column_name(&self, index: usize) -> Result<&str>;

    /// Reads the column at `index`, coerced to `ty`. SQL `NULL` reads as
    /// [`Value::Null`] whatever the requested type.
    fn get(&self, index: usize, ty: &Type) -> Result<Value>;
}
