use rowbind_core::{
    stmt::{self, Value as CoreValue},
    Error, Result,
};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl From<&CoreValue> for Value {
    fn from(value: &CoreValue) -> Self {
        Self(value.clone())
    }
}

impl Value {
    /// Converts this SQLite driver value into the core rowbind value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Reads the column at `index` and converts it to `ty`.
    ///
    /// SQLite only stores NULL, INTEGER, REAL, TEXT and BLOB; everything else
    /// is derived from those storage classes here.
    pub fn from_sql(row: &Row<'_>, index: usize, ty: &stmt::Type) -> Result<Self> {
        let value = row
            .get_ref(index)
            .map_err(Error::driver_operation_failed)?;

        Self::from_value_ref(value, ty)
    }

    /// Reads the column at `index` using the storage class SQLite reports.
    pub fn from_sql_native(row: &Row<'_>, index: usize) -> Result<Self> {
        let value = row
            .get_ref(index)
            .map_err(Error::driver_operation_failed)?;

        let core_value = match value {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(v) => CoreValue::I64(v),
            ValueRef::Real(v) => CoreValue::F64(v),
            ValueRef::Text(v) => CoreValue::String(text(v)?),
            ValueRef::Blob(v) => CoreValue::Bytes(v.to_vec()),
        };

        Ok(Value(core_value))
    }

    fn from_value_ref(value: ValueRef<'_>, ty: &stmt::Type) -> Result<Self> {
        use stmt::Type;

        let core_value = match value {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(value) => match ty {
                Type::Bool => match value {
                    0 => CoreValue::Bool(false),
                    1 => CoreValue::Bool(true),
                    _ => return Err(Error::type_conversion(CoreValue::I64(value), "bool")),
                },
                Type::F64 => CoreValue::F64(value as f64),
                Type::String => CoreValue::String(value.to_string()),
                Type::Bytes => return Err(Error::type_conversion(CoreValue::I64(value), "Vec<u8>")),
                _ => integer(CoreValue::I64(value), ty)?,
            },
            ValueRef::Real(value) => match ty {
                Type::F64 => CoreValue::F64(value),
                Type::String => CoreValue::String(value.to_string()),
                _ => return Err(Error::type_conversion(CoreValue::F64(value), ty.rust_name())),
            },
            ValueRef::Text(value) => {
                let value = text(value)?;
                match ty {
                    Type::String => CoreValue::String(value),
                    Type::Bytes => CoreValue::Bytes(value.into_bytes()),
                    Type::Bool => {
                        let parsed = match value.trim() {
                            "1" => Some(true),
                            "0" => Some(false),
                            v if v.eq_ignore_ascii_case("true") => Some(true),
                            v if v.eq_ignore_ascii_case("false") => Some(false),
                            _ => None,
                        };
                        match parsed {
                            Some(v) => CoreValue::Bool(v),
                            None => {
                                return Err(Error::type_conversion(CoreValue::String(value), "bool"))
                            }
                        }
                    }
                    Type::F64 => match value.trim().parse::<f64>() {
                        Ok(v) => CoreValue::F64(v),
                        Err(_) => return Err(Error::type_conversion(CoreValue::String(value), "f64")),
                    },
                    _ => integer(CoreValue::String(value), ty)?,
                }
            }
            ValueRef::Blob(value) => match ty {
                Type::Bytes => CoreValue::Bytes(value.to_vec()),
                Type::String => CoreValue::String(text(value)?),
                _ => {
                    return Err(Error::type_conversion(
                        CoreValue::Bytes(value.to_vec()),
                        ty.rust_name(),
                    ))
                }
            },
        };

        Ok(Value(core_value))
    }
}

/// Decodes UTF-8 text; anything else is a conversion failure, not a driver
/// fault.
fn text(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|err| Error::type_conversion(CoreValue::Bytes(err.into_bytes()), "String"))
}

/// Narrows or widens an integer (or numeric string) to the integer type `ty`.
fn integer(value: CoreValue, ty: &stmt::Type) -> Result<CoreValue> {
    use stmt::Type;

    Ok(match ty {
        Type::I8 => CoreValue::I8(value.try_into()?),
        Type::I16 => CoreValue::I16(value.try_into()?),
        Type::I32 => CoreValue::I32(value.try_into()?),
        Type::I64 => CoreValue::I64(value.try_into()?),
        Type::U8 => CoreValue::U8(value.try_into()?),
        Type::U16 => CoreValue::U16(value.try_into()?),
        Type::U32 => CoreValue::U32(value.try_into()?),
        Type::U64 => CoreValue::U64(value.try_into()?),
        _ => return Err(Error::type_conversion(value, ty.rust_name())),
    })
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I8(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I16(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::U8(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U16(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U64(v) => i64::try_from(*v)
                .map(|v| ToSqlOutput::Owned(SqlValue::Integer(v)))
                .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
