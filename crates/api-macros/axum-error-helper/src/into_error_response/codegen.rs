use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Fields, Ident, ItemEnum};

use super::parser::parse_enum;

/// Pattern matching the variant without binding any field.
fn variant_pat(enum_ident: &Ident, ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(_) => quote! { #enum_ident::#ident { .. } },
        Fields::Unnamed(_) => quote! { #enum_ident::#ident ( .. ) },
        Fields::Unit => quote! { #enum_ident::#ident },
    }
}

pub(crate) fn expand(original_enum: &mut ItemEnum) -> syn::Result<TokenStream2> {
    let enum_ident = original_enum.ident.clone();
    let variants = parse_enum(original_enum)?;

    let match_arms = variants.iter().map(|v| {
        let pat = variant_pat(&enum_ident, &v.ident, &v.fields);
        let status = &v.status;

        quote! { #pat => #status, }
    });

    Ok(quote! {
        impl ::axum::response::IntoResponse for #enum_ident {
            fn into_response(self) -> ::axum::response::Response {
                let status_code: ::axum::http::StatusCode = match &self {
                    #(#match_arms)*
                };

                let message = self.to_string();
                let error = ::std::error::Error::source(&self).map(|source| source.to_string());

                if status_code.is_server_error() {
                    ::tracing::error!(exception.details = ?self, exception.message = %message);
                } else {
                    ::tracing::warn!(exception.details = ?self, exception.message = %message);
                }

                let body = ::axum::Json(::api_macros::Response { message, error });

                ::axum::response::IntoResponse::into_response((status_code, body))
            }
        }
    })
}
