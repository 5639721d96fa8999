extern crate proc_macro;
use proc_macro::TokenStream;

mod element;
mod verify;

//                 _  __
// __   _____ _ __(_)/ _|_   _
// \ \ / / _ \ '__| | |_| | | |
//  \ V /  __/ |  | |  _| |_| |
//   \_/ \___|_|  |_|_|  \__, |
//                       |___/
//  FIGLET: verify

/// Rewrites a `_: Verify<{ clause }, ..>` where-predicate into typenum trait bounds.
///
/// Applies to `fn` and `impl` items, and to the methods of an `impl`. Const blocks in a
/// function's return type are rewritten into the type they compute.
#[proc_macro_attribute]
pub fn verify(_attr: TokenStream, item: TokenStream) -> TokenStream {
    match verify::expand(item.into()) {
        Ok(verifiable_item) => verifiable_item.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

//  _____ _                           _
// | ____| | ___ _ __ ___   ___ _ __ | |_
// |  _| | |/ _ \ '_ ` _ \ / _ \ '_ \| __|
// | |___| |  __/ | | | | |  __/ | | | |_
// |_____|_|\___|_| |_| |_|\___|_| |_|\__|
//  FIGLET: Element

/// Implements `typeseq::Element`, giving the type an identity code.
///
/// The code is hashed from the crate, the source location of the derive and the item itself,
/// unless `#[element(code = N)]` supplies one. Type parameters must be elements themselves;
/// their codes follow the type's own.
#[proc_macro_derive(Element, attributes(element))]
pub fn derive_element(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    let call_site = proc_macro::Span::call_site();
    let site = format!(
        "{}:{}:{}:{}",
        std::env::var("CARGO_CRATE_NAME").unwrap_or_default(),
        call_site.file(),
        call_site.line(),
        call_site.column(),
    );
    match element::expand(input, &site) {
        Ok(element_impl) => element_impl.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
