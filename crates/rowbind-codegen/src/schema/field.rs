use syn::ext::IdentExt;

use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// The Rust type of the field
    pub(crate) ty: syn::Type,

    /// Explicit column name, if given
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut column = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("column") {
                continue;
            }

            if column.is_some() {
                errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                continue;
            }

            match Column::from_ast(attr) {
                Ok(parsed) => column = Some(parsed),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ident.clone(),
            ty: field.ty.clone(),
            column,
        })
    }

    /// The name the generated descriptor reports for this field.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}
