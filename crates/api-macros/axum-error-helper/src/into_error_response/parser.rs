use deluxe::ExtractAttributes;
use proc_macro2::Span;
use syn::{Expr, Fields, Ident, ItemEnum, Variant};

/// Represents:
/// ```rs
/// #[status(StatusCode::XYZ)]
/// ```
#[derive(ExtractAttributes, Debug)]
#[deluxe(attributes(status), default)]
pub(crate) struct StatusAttr(pub Expr);

impl Default for StatusAttr {
    fn default() -> Self {
        Self(syn::parse_quote! { ::axum::http::StatusCode::INTERNAL_SERVER_ERROR })
    }
}

#[derive(Debug)]
pub(crate) struct VariantMeta {
    pub ident: Ident,
    pub fields: Fields,
    pub status: Expr,
}

/// Strips the `#[status]` attributes off the variants, so they are
/// collected before any code is generated.
pub(crate) fn parse_enum(original_enum: &mut ItemEnum) -> syn::Result<Vec<VariantMeta>> {
    if original_enum.variants.is_empty() {
        return Err(syn::Error::new(
            original_enum.ident.span(),
            "IntoErrorResponse needs at least one variant",
        ));
    }

    original_enum
        .variants
        .iter_mut()
        .map(parse_variant)
        .collect()
}

fn parse_variant(variant: &mut Variant) -> syn::Result<VariantMeta> {
    let StatusAttr(status) = deluxe::extract_attributes(variant).map_err(|e| {
        syn::Error::new(Span::call_site(), format!("StatusCode extraction failed: {e}"))
    })?;

    Ok(VariantMeta {
        ident: variant.ident.clone(),
        fields: variant.fields.clone(),
        status,
    })
}
