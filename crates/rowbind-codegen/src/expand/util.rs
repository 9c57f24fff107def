use proc_macro2::{Literal, TokenStream};
use quote::quote;

pub(crate) fn int(v: usize) -> Literal {
    Literal::usize_unsuffixed(v)
}

pub(crate) fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowbind as _rowbind;
            #code
        };
    }
}
