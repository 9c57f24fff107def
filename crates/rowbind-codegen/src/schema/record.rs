use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Record fields, in constructor order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "#[derive(Record)] requires a struct with named fields",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "#[derive(Record)] does not support generic structs",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        for field in &node.named {
            match Field::from_ast(field) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
        })
    }

    pub(crate) fn name(&self) -> String {
        self.ident.to_string()
    }
}
