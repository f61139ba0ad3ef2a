use super::ErrorSet;

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing model
    pub(crate) index: usize,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Whether the binder can read and write the field
    pub(crate) kind: FieldKind,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// `#[db("column")]`
    pub(crate) db: Option<syn::LitStr>,

    /// `#[option("key=value;...")]`
    pub(crate) option: Option<syn::LitStr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    /// The type implements `Primitive`
    Primitive,

    /// Pointers, options, collections, nested structs, ...
    Unsupported,
}

const PRIMITIVES: &[&str] = &[
    "bool", "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize", "f32",
    "f64", "String", "Timestamp",
];

impl Field {
    pub(super) fn from_ast(field: &syn::Field, index: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            let slot = if attr.path().is_ident("db") {
                &mut attrs.db
            } else if attr.path().is_ident("option") {
                &mut attrs.option
            } else {
                continue;
            };

            match attr.parse_args::<syn::LitStr>() {
                Ok(_) if slot.is_some() => {
                    errs.push(syn::Error::new_spanned(attr, "duplicate attribute"));
                }
                Ok(lit) => *slot = Some(lit),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            index,
            ident: ident.clone(),
            attrs,
            ty: field.ty.clone(),
            kind: FieldKind::from_ty(&field.ty),
        })
    }
}

impl FieldKind {
    /// Classifies a field type by its syntax.
    pub(crate) fn from_ty(ty: &syn::Type) -> Self {
        match ty {
            syn::Type::Group(group) => Self::from_ty(&group.elem),
            syn::Type::Paren(paren) => Self::from_ty(&paren.elem),
            syn::Type::Path(path) if path.qself.is_none() => {
                let Some(segment) = path.path.segments.last() else {
                    return Self::Unsupported;
                };

                match &segment.arguments {
                    syn::PathArguments::None
                        if PRIMITIVES.iter().any(|name| segment.ident == name) =>
                    {
                        Self::Primitive
                    }
                    syn::PathArguments::AngleBracketed(args) if segment.ident == "Vec" => {
                        match args.args.iter().collect::<Vec<_>>()[..] {
                            [syn::GenericArgument::Type(syn::Type::Path(elem))]
                                if elem.qself.is_none() && elem.path.is_ident("u8") =>
                            {
                                Self::Primitive
                            }
                            _ => Self::Unsupported,
                        }
                    }
                    _ => Self::Unsupported,
                }
            }
            _ => Self::Unsupported,
        }
    }
}
