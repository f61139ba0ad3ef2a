use super::Expand;
use crate::schema::{Field, FieldKind};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_field_defs(&self) -> Vec<TokenStream> {
        self.model
            .fields
            .iter()
            .map(|field| self.expand_field_def(field))
            .collect()
    }

    fn expand_field_def(&self, field: &Field) -> TokenStream {
        let tabula = &self.tabula;
        let index = field.index;
        let name = field.ident.to_string();
        let db = opt_str(field.attrs.db.as_ref());
        let option = opt_str(field.attrs.option.as_ref());

        let (kind, accessor) = match field.kind {
            FieldKind::Primitive => {
                let ty = &field.ty;
                let accessor = self.expand_accessor(field);
                (
                    quote!(<#ty as #tabula::Primitive>::KIND),
                    quote!(Some(#accessor)),
                )
            }
            FieldKind::Unsupported => (quote!(#tabula::Kind::Unsupported), quote!(None)),
        };

        quote! {
            #tabula::FieldDef {
                index: #index,
                name: #name,
                db: #db,
                option: #option,
                kind: #kind,
                accessor: #accessor,
            }
        }
    }

    fn expand_accessor(&self, field: &Field) -> TokenStream {
        let tabula = &self.tabula;
        let model_ident = &self.model.ident;
        let field_ident = &field.ident;
        let ty = &field.ty;

        quote! {
            #tabula::Accessor::<#model_ident> {
                get: |model: &#model_ident| -> #tabula::Value {
                    <#ty as #tabula::Primitive>::to_value(&model.#field_ident)
                },
                set: |model: &mut #model_ident, value: #tabula::Value| -> #tabula::Result<()> {
                    model.#field_ident = <#ty as #tabula::Primitive>::load(value)?;
                    Ok(())
                },
            }
        }
    }
}

fn opt_str(lit: Option<&syn::LitStr>) -> TokenStream {
    match lit {
        Some(lit) => quote!(Some(#lit)),
        None => quote!(None),
    }
}
