mod fields;
mod util;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rowbind types
    rowbind: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let ident = &self.record.ident;
        let name = self.record.name();
        let field_descriptors = self.expand_field_descriptors();
        let load_fields = self.expand_load_fields();

        quote! {
            impl #rowbind::Record for #ident {
                const SCHEMA: #rowbind::RecordSchema = #rowbind::RecordSchema {
                    name: #name,
                    fields: &[ #( #field_descriptors ),* ],
                };

                fn load(mut record: #rowbind::ValueRecord) -> #rowbind::Result<Self> {
                    let _ = &mut record;
                    ::core::result::Result::Ok(Self {
                        #( #load_fields )*
                    })
                }
            }
        }
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    let rowbind = quote!(_rowbind::codegen_support);

    util::wrap_in_const(
        Expand {
            record,
            rowbind,
        }
        .expand(),
    )
}
