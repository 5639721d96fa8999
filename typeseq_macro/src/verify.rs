use proc_macro2::TokenStream;
use quote::ToTokens;
use std::convert::{TryFrom, TryInto};
use syn::spanned::Spanned;

pub(crate) fn expand(item: TokenStream) -> syn::Result<TokenStream> {
    let item: VerifiableItem = syn::parse2(item)?;
    Ok(item.into_token_stream())
}

//  ____                _
// |  _ \ __ _ _ __ ___(_)_ __   __ _
// | |_) / _` | '__/ __| | '_ \ / _` |
// |  __/ (_| | |  \__ \ | | | | (_| |
// |_|   \__,_|_|  |___/_|_| |_|\__, |
//                              |___/
//  FIGLET: Parsing

struct VerifiableItem(syn::Item);

impl syn::parse::Parse for VerifiableItem {
    fn parse(input: syn::parse::ParseStream<'_>) -> syn::Result<Self> {
        let mut item: syn::Item = input.parse()?;
        match &mut item {
            syn::Item::Fn(item) => verify_signature(&mut item.sig)?,
            syn::Item::Impl(item) => {
                replace_verify_bound(item.generics.make_where_clause())?;
                drop_empty_where_clause(&mut item.generics);
                for item in &mut item.items {
                    if let syn::ImplItem::Method(method) = item {
                        verify_signature(&mut method.sig)?;
                    }
                }
            }
            item => return Err(syn::Error::new(item.span(), "expected `fn` or `impl`")),
        }
        Ok(Self(item))
    }
}

impl quote::ToTokens for VerifiableItem {
    fn to_tokens(&self, out: &mut TokenStream) {
        self.0.to_tokens(out)
    }
}

fn verify_signature(sig: &mut syn::Signature) -> syn::Result<()> {
    let where_clause = sig.generics.make_where_clause();
    replace_verify_bound(where_clause)?;
    if let syn::ReturnType::Type(_, ty) = &mut sig.output {
        Translator::new(where_clause).translate(ty.as_mut())?;
    }
    drop_empty_where_clause(&mut sig.generics);
    Ok(())
}

fn drop_empty_where_clause(generics: &mut syn::Generics) {
    if let Some(where_clause) = &generics.where_clause {
        if where_clause.predicates.is_empty() {
            generics.where_clause = None;
        }
    }
}

impl TryFrom<&syn::PathArguments> for Logic {
    type Error = syn::Error;
    fn try_from(arguments: &syn::PathArguments) -> syn::Result<Self> {
        match arguments {
            syn::PathArguments::AngleBracketed(arguments) => Ok(Self {
                clauses: arguments
                    .args
                    .iter()
                    .map(Op::try_from)
                    .collect::<syn::Result<_>>()?,
            }),
            syn::PathArguments::None => Ok(Self { clauses: vec![] }),
            arguments => Err(syn::Error::new(arguments.span(), "expected `Verify<..>`")),
        }
    }
}

impl TryFrom<&syn::GenericArgument> for Op {
    type Error = syn::Error;
    fn try_from(argument: &syn::GenericArgument) -> syn::Result<Self> {
        match argument {
            syn::GenericArgument::Const(expr) => expr.clone().try_into(),
            syn::GenericArgument::Type(ty) => Ok(Op::Type(ty.clone())),
            argument => Err(syn::Error::new(
                argument.span(),
                "expected a `{ .. }` clause or a type",
            )),
        }
    }
}

impl TryFrom<syn::Expr> for Op {
    type Error = syn::Error;
    fn try_from(expr: syn::Expr) -> syn::Result<Self> {
        match expr {
            syn::Expr::Binary(syn::ExprBinary {
                op, left, right, ..
            }) => {
                // Fail early on operators without a trait.
                trait_path(&op)?;
                Ok(Op::Binary {
                    op,
                    left: Box::new((*left).try_into()?),
                    right: Box::new((*right).try_into()?),
                })
            }
            syn::Expr::Unary(syn::ExprUnary {
                op: syn::UnOp::Not(_),
                expr,
                ..
            }) => Ok(Op::Not(Box::new((*expr).try_into()?))),
            syn::Expr::Lit(syn::ExprLit { lit, .. }) => lit.try_into(),
            syn::Expr::Path(syn::ExprPath { qself, path, .. }) => {
                Ok(Op::Type(syn::Type::Path(syn::TypePath { qself, path })))
            }
            syn::Expr::Paren(syn::ExprParen { expr, .. })
            | syn::Expr::Group(syn::ExprGroup { expr, .. }) => (*expr).try_into(),
            syn::Expr::Block(syn::ExprBlock { block, .. }) if block.stmts.len() == 1 => {
                let span = block.span();
                match block.stmts.into_iter().next() {
                    Some(syn::Stmt::Expr(expr)) => expr.try_into(),
                    _ => Err(syn::Error::new(span, "expected a clause expression")),
                }
            }
            unsupported_expr => Err(syn::Error::new(
                unsupported_expr.span(),
                "unsupported clause expression",
            )),
        }
    }
}

impl TryFrom<syn::Lit> for Op {
    type Error = syn::Error;
    fn try_from(lit: syn::Lit) -> syn::Result<Self> {
        match lit {
            syn::Lit::Bool(syn::LitBool { value, .. }) => Ok(Op::Type(if value {
                syn::parse_quote!(::typeseq::typenum::B1)
            } else {
                syn::parse_quote!(::typeseq::typenum::B0)
            })),
            syn::Lit::Int(value) => Ok(Op::Type(unsigned(value.base10_parse()?))),
            unsupported_lit => Err(syn::Error::new(
                unsupported_lit.span(),
                "only bool and int literals are supported here",
            )),
        }
    }
}

//  _____                    _       _
// |_   _| __ __ _ _ __  ___| | __ _| |_ ___  _ __
//   | || '__/ _` | '_ \/ __| |/ _` | __/ _ \| '__|
//   | || | | (_| | | | \__ \ | (_| | || (_) | |
//   |_||_|  \__,_|_| |_|___/_|\__,_|\__\___/|_|
//  FIGLET: Translator

/// Rewrites const block arguments found in a type into the types they compute, recording the
/// bounds those types need in the where clause.
struct Translator<'g> {
    where_clause: &'g mut syn::WhereClause,
}

impl<'g> Translator<'g> {
    fn new(where_clause: &'g mut syn::WhereClause) -> Self {
        Self { where_clause }
    }

    fn translate(&mut self, ty: &mut syn::Type) -> syn::Result<()> {
        match ty {
            syn::Type::Path(syn::TypePath { path, .. }) => {
                for segment in &mut path.segments {
                    if let syn::PathArguments::AngleBracketed(arguments) = &mut segment.arguments {
                        for argument in &mut arguments.args {
                            self.translate_argument(argument)?;
                        }
                    }
                }
            }
            syn::Type::Tuple(syn::TypeTuple { elems, .. }) => {
                for elem in elems {
                    self.translate(elem)?;
                }
            }
            syn::Type::Array(syn::TypeArray { elem, .. })
            | syn::Type::Slice(syn::TypeSlice { elem, .. })
            | syn::Type::Reference(syn::TypeReference { elem, .. })
            | syn::Type::Paren(syn::TypeParen { elem, .. }) => self.translate(elem)?,
            _ => (),
        }
        Ok(())
    }

    fn translate_argument(&mut self, argument: &mut syn::GenericArgument) -> syn::Result<()> {
        match argument {
            syn::GenericArgument::Const(expr) => {
                let op: Op = expr.clone().try_into()?;
                let mut bounds = vec![];
                op.operand_bounds(&mut bounds)?;
                self.where_clause.predicates.extend(bounds);
                *argument = syn::GenericArgument::Type(op.into_type()?);
            }
            syn::GenericArgument::Type(ty) => self.translate(ty)?,
            _ => (),
        }
        Ok(())
    }
}

//  _____                    _       _   _
// |_   _| __ __ _ _ __  ___| | __ _| |_(_) ___  _ __  ___
//   | || '__/ _` | '_ \/ __| |/ _` | __| |/ _ \| '_ \/ __|
//   | || | | (_| | | | \__ \ | (_| | |_| | (_) | | | \__ \
//   |_||_|  \__,_|_| |_|___/_|\__,_|\__|_|\___/|_| |_|___/
//  FIGLET: Translations

fn replace_verify_bound(where_clause: &mut syn::WhereClause) -> syn::Result<()> {
    let (mut predicates, verify_bounds): (Vec<_>, Vec<_>) = where_clause
        .predicates
        .iter()
        .cloned()
        .partition(|predicate| match predicate {
            syn::WherePredicate::Type(syn::PredicateType {
                bounded_ty: syn::Type::Infer(_),
                ..
            }) => false,
            _ => true,
        });

    let bounds = match verify_bounds.as_slice() {
        [] => return Ok(()),
        [syn::WherePredicate::Type(syn::PredicateType { bounds, .. })] => bounds,
        [_, second, ..] => {
            return Err(syn::Error::new(
                second.span(),
                "did not expect to find second `Verify` bound",
            ))
        }
        [other] => return Err(syn::Error::new(other.span(), "expected `_: Verify<..>`")),
    };

    let path = match (bounds.len(), bounds.first()) {
        (1, Some(syn::TypeParamBound::Trait(syn::TraitBound { path, .. }))) => path,
        _ => return Err(syn::Error::new(bounds.span(), "expected `Verify<..>`")),
    };

    let arguments = match (path.segments.len(), path.segments.first()) {
        (1, Some(segment)) if segment.ident == "Verify" => &segment.arguments,
        _ => return Err(syn::Error::new(path.span(), "expected `Verify<..>`")),
    };

    let logic: Logic = arguments.try_into()?;
    for clause in logic.clauses {
        predicates.push(clause.predicate()?);
        if let Op::Binary { left, right, .. } = &clause {
            left.operand_bounds(&mut predicates)?;
            right.operand_bounds(&mut predicates)?;
        } else if let Op::Not(operand) = &clause {
            operand.operand_bounds(&mut predicates)?;
        }
    }

    where_clause.predicates = predicates.into_iter().collect();
    Ok(())
}

/// Type-level unsigned integer for `n`, using typenum's aliases where one exists.
pub(crate) fn unsigned(n: u64) -> syn::Type {
    if n <= 1024 {
        let alias = syn::Ident::new(&format!("U{}", n), proc_macro2::Span::call_site());
        return syn::parse_quote!(::typeseq::typenum::#alias);
    }
    unsigned_bits(n)
}

fn unsigned_bits(n: u64) -> syn::Type {
    if n == 0 {
        return syn::parse_quote!(::typeseq::typenum::UTerm);
    }
    let higher = unsigned_bits(n >> 1);
    if n & 1 == 1 {
        syn::parse_quote!(::typeseq::typenum::UInt<#higher, ::typeseq::typenum::B1>)
    } else {
        syn::parse_quote!(::typeseq::typenum::UInt<#higher, ::typeseq::typenum::B0>)
    }
}

fn trait_path(op: &syn::BinOp) -> syn::Result<syn::Path> {
    match op {
        syn::BinOp::Eq(_) => Ok(syn::parse_quote!(::typeseq::typenum::IsEqual)),
        syn::BinOp::Ne(_) => Ok(syn::parse_quote!(::typeseq::typenum::IsNotEqual)),
        syn::BinOp::Lt(_) => Ok(syn::parse_quote!(::typeseq::typenum::IsLess)),
        syn::BinOp::Le(_) => Ok(syn::parse_quote!(::typeseq::typenum::IsLessOrEqual)),
        syn::BinOp::Gt(_) => Ok(syn::parse_quote!(::typeseq::typenum::IsGreater)),
        syn::BinOp::Ge(_) => Ok(syn::parse_quote!(::typeseq::typenum::IsGreaterOrEqual)),
        syn::BinOp::Add(_) => Ok(syn::parse_quote!(::core::ops::Add)),
        syn::BinOp::Sub(_) => Ok(syn::parse_quote!(::core::ops::Sub)),
        syn::BinOp::Mul(_) => Ok(syn::parse_quote!(::core::ops::Mul)),
        syn::BinOp::Div(_) => Ok(syn::parse_quote!(::core::ops::Div)),
        syn::BinOp::Rem(_) => Ok(syn::parse_quote!(::core::ops::Rem)),
        syn::BinOp::Shl(_) => Ok(syn::parse_quote!(::core::ops::Shl)),
        syn::BinOp::Shr(_) => Ok(syn::parse_quote!(::core::ops::Shr)),
        syn::BinOp::BitAnd(_) | syn::BinOp::And(_) => Ok(syn::parse_quote!(::core::ops::BitAnd)),
        syn::BinOp::BitOr(_) | syn::BinOp::Or(_) => Ok(syn::parse_quote!(::core::ops::BitOr)),
        syn::BinOp::BitXor(_) => Ok(syn::parse_quote!(::core::ops::BitXor)),
        unsupported_op => Err(syn::Error::new(
            unsupported_op.span(),
            "unsupported operator in clause",
        )),
    }
}

impl Op {
    /// The bound requiring this clause to hold.
    fn predicate(&self) -> syn::Result<syn::WherePredicate> {
        match self {
            Op::Binary { op, left, right } => {
                let op = trait_path(op)?;
                let left = left.clone().into_type()?;
                let right = right.clone().into_type()?;
                Ok(syn::parse_quote! { #left: #op<#right, Output = ::typeseq::typenum::B1> })
            }
            Op::Not(operand) => {
                let operand = operand.clone().into_type()?;
                Ok(syn::parse_quote! {
                    #operand: ::core::ops::Not<Output = ::typeseq::typenum::B1>
                })
            }
            Op::Type(ty) => Ok(syn::parse_quote! {
                #ty: ::typeseq::typenum::IsEqual<
                    ::typeseq::typenum::B1,
                    Output = ::typeseq::typenum::B1
                >
            }),
        }
    }

    /// Bounds needed to name the type this operand computes.
    fn operand_bounds(&self, bounds: &mut Vec<syn::WherePredicate>) -> syn::Result<()> {
        match self {
            Op::Binary { op, left, right } => {
                let op = trait_path(op)?;
                let left_ty = left.clone().into_type()?;
                let right_ty = right.clone().into_type()?;
                bounds.push(syn::parse_quote! { #left_ty: #op<#right_ty> });
                left.operand_bounds(bounds)?;
                right.operand_bounds(bounds)
            }
            Op::Not(operand) => {
                let operand_ty = operand.clone().into_type()?;
                bounds.push(syn::parse_quote! { #operand_ty: ::core::ops::Not });
                operand.operand_bounds(bounds)
            }
            Op::Type(_) => Ok(()),
        }
    }

    /// The type this operand computes.
    fn into_type(self) -> syn::Result<syn::Type> {
        match self {
            Op::Binary { op, left, right } => {
                let op = trait_path(&op)?;
                let left = left.into_type()?;
                let right = right.into_type()?;
                Ok(syn::parse_quote! { <#left as #op<#right>>::Output })
            }
            Op::Not(operand) => {
                let operand = operand.into_type()?;
                Ok(syn::parse_quote! { <#operand as ::core::ops::Not>::Output })
            }
            Op::Type(ty) => Ok(ty),
        }
    }
}

//  _____
// |_   _|   _ _ __   ___  ___
//   | || | | | '_ \ / _ \/ __|
//   | || |_| | |_) |  __/\__ \
//   |_| \__, | .__/ \___||___/
//       |___/|_|
//  FIGLET: Types

#[derive(Debug)]
struct Logic {
    clauses: Vec<Op>,
}

#[derive(Clone, Debug)]
enum Op {
    Binary {
        op: syn::BinOp,
        left: Box<Self>,
        right: Box<Self>,
    },
    Not(Box<Self>),
    Type(syn::Type),
}

//  _____         _
// |_   _|__  ___| |_ ___
//   | |/ _ \/ __| __/ __|
//   | |  __/\__ \ |_\__ \
//   |_|\___||___/\__|___/
//  FIGLET: Tests
