extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `rowbind::Record` for a struct with named fields.
///
/// Each field becomes one constructor parameter, in declaration order. A
/// column is bound to a field when both names match after lowercasing and
/// removing underscores. `#[column("NAME")]` matches a different column name.
#[proc_macro_derive(Record, attributes(column))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rowbind_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
