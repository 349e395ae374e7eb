use proc_macro::TokenStream;
use syn::{DeriveInput, ItemEnum};

mod debug_chain;
mod into_error_response;

/// # Implements `axum::response::IntoResponse`
///
/// Every variant picks its status with `#[status(..)]`, falling back to
/// `500 Internal Server Error`. The body is json:
/// ```rust
/// struct ResponseBody {
///   message: String,       // Display of the error
///   error: Option<String>, // Display of its source
/// }
/// ```
/// Server errors are logged at `error` level, client errors at `warn`.
///
/// # Usage
///
/// ```rs
/// #[derive(thiserror::Error, IntoErrorResponse, DebugChain)]
/// pub enum LookupError {
///     #[error("{0}")]
///     #[status(StatusCode::BAD_REQUEST)]
///     InvalidId(String),
///     #[error("Erreur serveur")]
///     Unexpected(#[source] StoreError),
/// }
/// ```
#[proc_macro_derive(IntoErrorResponse, attributes(status))]
pub fn error_macro(item: TokenStream) -> TokenStream {
    let mut input: ItemEnum = match syn::parse(item) {
        Ok(input) => input,
        Err(error) => return error.to_compile_error().into(),
    };
    crate::into_error_response::expand(&mut input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// # Implements `std::fmt::Debug`
///
/// Prints the error followed by its sources, one per line, indented by depth:
/// ```text
/// lookup failed
///   + store unavailable
///     + connection reset
/// ```
#[proc_macro_derive(DebugChain)]
pub fn debug_chain_macro(item: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse(item) {
        Ok(input) => input,
        Err(error) => return error.to_compile_error().into(),
    };
    crate::debug_chain::impl_debug_chain(&input).into()
}
