use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Every named field, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                ast,
                "`#[derive(Model)]` is only supported on structs",
            ));
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "model fields must be named",
            ));
        };

        // Models are registered by type, so they cannot be generic
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        for (index, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, index) {
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
}
