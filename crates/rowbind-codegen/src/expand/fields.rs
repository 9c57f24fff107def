use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// One `Field` descriptor per struct field, in declaration order.
    pub(super) fn expand_field_descriptors(&self) -> Vec<TokenStream> {
        let rowbind = &self.rowbind;

        self.record
            .fields
            .iter()
            .map(|field| {
                let name = field.name();
                let ty = &field.ty;
                let column = match &field.column {
                    Some(column) => {
                        let lit = &column.name;
                        quote!(::core::option::Option::Some(#lit))
                    }
                    None => quote!(::core::option::Option::None),
                };

                quote! {
                    #rowbind::Field {
                        name: #name,
                        column: #column,
                        ty: <#ty as #rowbind::Primitive>::TYPE,
                        nullable: <#ty as #rowbind::Primitive>::NULLABLE,
                    }
                }
            })
            .collect()
    }

    /// Struct initializers reading each field from its constructor position.
    pub(super) fn expand_load_fields(&self) -> Vec<TokenStream> {
        let rowbind = &self.rowbind;

        self.record
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let ident = &field.ident;
                let name = field.name();
                let index = util::int(index);

                quote! {
                    #ident: #rowbind::load_field(&mut record, #index, #name)?,
                }
            })
            .collect()
    }
}
