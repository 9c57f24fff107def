mod primitive;
pub use primitive::Primitive;

/// Builds a fixed-size array of statement parameters, converting each
/// argument with `Value::from`.
///
/// ```ignore
/// db.query_one(FIND_BY_ID, &rowbind::params![id], &mapper)?;
/// ```
#[macro_export]
macro_rules! params {
    () => {
        [] as [$crate::Value; 0]
    };
    ($($param:expr),+ $(,)?) => {
        [$($crate::Value::from($param)),+]
    };
}
