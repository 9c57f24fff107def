use super::Name;
use crate::stmt::Type;

/// Describes one constructor parameter of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// The parameter name as declared on the record.
    pub name: &'static str,

    /// Column name to match instead of `name`, if one was given.
    pub column: Option<&'static str>,

    /// Type the column is read as.
    pub ty: Type,

    /// True if the parameter accepts `Null` (`Option` in Rust).
    pub nullable: bool,
}

impl Field {
    pub const fn new(name: &'static str, ty: Type) -> Self {
        Self {
            name,
            column: None,
            ty,
            nullable: false,
        }
    }

    pub const fn column(mut self, column: &'static str) -> Self {
        self.column = Some(column);
        self
    }

    pub const fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// The name a result column must normalize to in order to bind here.
    pub fn column_name(&self) -> &'static str {
        self.column.unwrap_or(self.name)
    }

    pub fn key(&self) -> Name {
        Name::new(self.column_name())
    }
}
