use crate::Result;

use rowbind_core::stmt;

/// A Rust type a single column can be loaded into.
pub trait Primitive: Sized {
    /// The type the column is read as.
    const TYPE: stmt::Type;

    /// True if `Null` loads successfully (e.g. `Option`).
    const NULLABLE: bool = false;

    fn load(value: stmt::Value) -> Result<Self>;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl Primitive for $ty {
                const TYPE: stmt::Type = stmt::Type::$variant;

                fn load(value: stmt::Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f64 => F64,
    String => String,
}

impl Primitive for Vec<u8> {
    const TYPE: stmt::Type = stmt::Type::Bytes;

    fn load(value: stmt::Value) -> Result<Self> {
        value.into_bytes()
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: stmt::Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: stmt::Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}
