use crate::verify::unsigned;
use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::spanned::Spanned;

/// Codes below this are taken by the implementations shipped with `typeseq`.
const RESERVED_CODES: u64 = 64;

/// First digit of every derived code. Four 16-bit digits of the hash follow it.
const DERIVED_TAG: u64 = 63;

/// Expands `#[derive(Element)]`. `site` names where the derive was invoked and keeps derived
/// codes of equally named types apart.
pub(crate) fn expand(input: syn::DeriveInput, site: &str) -> syn::Result<TokenStream> {
    let code = match explicit_code(&input.attrs)? {
        Some(code) => vec![code],
        None => derived_code(site, &input),
    };

    let mut generics = input.generics.clone();
    let mut ids = vec![];
    for param in &input.generics.params {
        match param {
            syn::GenericParam::Type(param) => {
                let ident = &param.ident;
                generics
                    .make_where_clause()
                    .predicates
                    .push(syn::parse_quote!(#ident: ::typeseq::Element));
                ids.push(quote!(<#ident as ::typeseq::Element>::Id));
            }
            syn::GenericParam::Lifetime(_) => (),
            syn::GenericParam::Const(param) => {
                return Err(syn::Error::new(
                    param.span(),
                    "const parameters cannot be part of an element identity",
                ))
            }
        }
    }

    // Parameter codes are joined right to left: A ++ (B ++ C).
    let mut parameters = match ids.pop() {
        Some(last) => last,
        None => quote!(::typeseq::Nil),
    };
    while let Some(id) = ids.pop() {
        generics
            .make_where_clause()
            .predicates
            .push(syn::parse_quote!(#id: ::typeseq::Concat<#parameters>));
        parameters = quote!(::typeseq::Concatenated<#id, #parameters>);
    }

    let id = code.into_iter().rev().fold(parameters, |id, digit| {
        let digit = unsigned(digit);
        quote!(::typeseq::Cons<#digit, #id>)
    });

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let item: syn::ItemImpl = syn::parse_quote! {
        impl #impl_generics ::typeseq::Element for #ident #ty_generics #where_clause {
            type Id = #id;
        }
    };
    Ok(item.into_token_stream())
}

fn explicit_code(attrs: &[syn::Attribute]) -> syn::Result<Option<u64>> {
    let mut code = None;
    for attr in attrs.iter().filter(|attr| attr.path.is_ident("element")) {
        let list = match attr.parse_meta()? {
            syn::Meta::List(list) => list,
            meta => {
                return Err(syn::Error::new(
                    meta.span(),
                    "expected `#[element(code = <integer>)]`",
                ))
            }
        };
        for nested in list.nested {
            match nested {
                syn::NestedMeta::Meta(syn::Meta::NameValue(syn::MetaNameValue {
                    ref path,
                    lit: syn::Lit::Int(ref value),
                    ..
                })) if path.is_ident("code") => {
                    if code.is_some() {
                        return Err(syn::Error::new(nested.span(), "duplicate `code`"));
                    }
                    let value: u64 = value.base10_parse()?;
                    if value < RESERVED_CODES {
                        return Err(syn::Error::new(
                            nested.span(),
                            format!("codes below {} are reserved", RESERVED_CODES),
                        ));
                    }
                    code = Some(value);
                }
                nested => return Err(syn::Error::new(nested.span(), "expected `code = <integer>`")),
            }
        }
    }
    Ok(code)
}

/// `DERIVED_TAG` followed by the 64-bit FNV-1a hash of the invocation site and the item,
/// most significant 16 bits first.
fn derived_code(site: &str, input: &syn::DeriveInput) -> Vec<u64> {
    let item = input.to_token_stream().to_string();
    let hash = fnv1a(site.bytes().chain(std::iter::once(0xff)).chain(item.bytes()));
    let mut code = vec![DERIVED_TAG];
    code.extend((0..4).rev().map(|digit| (hash >> (16 * digit)) & 0xffff));
    code
}

fn fnv1a(bytes: impl IntoIterator<Item = u8>) -> u64 {
    bytes.into_iter().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

//  _____         _
// |_   _|__  ___| |_ ___
//   | |/ _ \/ __| __/ __|
//   | |  __/\__ \ |_\__ \
//   |_|\___||___/\__|___/
//  FIGLET: Tests
