use super::Value;

macro_rules! impl_num {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }
        )*
    };
}

impl_num! {
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
}

// Integer conversions accept any integer variant whose value fits the target
// and use `try_into()` for the bounds check. Numeric strings are parsed.

macro_rules! try_convert_range {
    ($val:expr, $target_ty:ty) => {
        $val.try_into().map_err(|_| {
            crate::err!(
                "value {} is out of range for {}",
                $val,
                stringify!($target_ty)
            )
        })
    };
}

macro_rules! parse_string {
    ($s:expr, $target_ty:ty) => {
        $s.trim()
            .parse::<$target_ty>()
            .map_err(|_| crate::err!("cannot parse '{}' as {}", $s, stringify!($target_ty)))
    };
}

macro_rules! impl_try_from_value {
    ( $( $target:ident => $same:ident ),* $(,)? ) => {
        $(
            impl TryFrom<Value> for $target {
                type Error = crate::Error;

                // The same-type arm shadows one of the range-checked arms.
                #[allow(unreachable_patterns)]
                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$same(val) => Ok(val),
                        Value::I8(val) => try_convert_range!(val, $target),
                        Value::I16(val) => try_convert_range!(val, $target),
                        Value::I32(val) => try_convert_range!(val, $target),
                        Value::I64(val) => try_convert_range!(val, $target),
                        Value::U8(val) => try_convert_range!(val, $target),
                        Value::U16(val) => try_convert_range!(val, $target),
                        Value::U32(val) => try_convert_range!(val, $target),
                        Value::U64(val) => try_convert_range!(val, $target),
                        Value::String(s) => parse_string!(s, $target),
                        _ => Err(crate::Error::type_conversion(value, stringify!($target))),
                    }
                }
            }
        )*
    };
}

impl_try_from_value! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}
