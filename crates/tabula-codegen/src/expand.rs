mod fields;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for tabula types
    tabula: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_ident = &self.model.ident;
        let tabula = &self.tabula;
        let fields = self.expand_field_defs();

        wrap_in_const(quote! {
            impl #tabula::Model for #model_ident {
                fn fields() -> Vec<#tabula::FieldDef<Self>> {
                    vec![ #( #fields, )* ]
                }
            }
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        tabula: quote!(_tabula::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use tabula as _tabula;
            #code
        };
    }
}
