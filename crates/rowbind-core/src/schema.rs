mod field;
pub use field::Field;

mod name;
pub use name::Name;

mod record;
pub use record::RecordSchema;
