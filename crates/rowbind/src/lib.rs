// Lets the derive macro's `rowbind::` paths resolve inside this crate's own
// tests.
extern crate self as rowbind;

pub mod db;
pub use db::Db;

mod map_row;
pub use map_row::{MapRow, RowExt};

pub mod record;
pub use record::{Record, RecordMapper};

pub mod stmt;
pub use stmt::Primitive;

pub use rowbind_core::{
    bail,
    driver::{self, Connection, Driver, Row},
    err,
    schema::{Field, Name, RecordSchema},
    stmt::{Type, Value, ValueRecord},
    Error, Result,
};

pub use rowbind_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{record::load_field, stmt::Primitive, Record, Result};
    pub use rowbind_core::{
        schema::{Field, RecordSchema},
        stmt::{Type, ValueRecord},
    };
}
