use combine::error::ParseError;
use combine::parser::byte::{alpha_num, byte, bytes, spaces};
use combine::stream::position;
use combine::stream::Stream;
use combine::{
    any, attempt, between, choice, many, many1, optional, parser, sep_by1, sep_end_by,
    EasyParser, Parser,
};

/// A type as rustc prints it in a diagnostic.
#[derive(Debug, Eq, PartialEq)]
pub enum Ty {
    Path(Path),
    Qualified {
        ty: Box<Ty>,
        as_trait: Path,
        rest: Vec<Vec<u8>>,
    },
    Tuple(Vec<Ty>),
    Ref {
        lifetime: Option<Vec<u8>>,
        mutable: bool,
        ty: Box<Ty>,
    },
}

#[derive(Debug, Eq, PartialEq)]
pub struct Path {
    pub leading_colon: bool,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Eq, PartialEq)]
pub struct Segment {
    pub ident: Vec<u8>,
    pub args: Vec<Arg>,
}

#[derive(Debug, Eq, PartialEq)]
pub enum Arg {
    Lifetime(Vec<u8>),
    Binding(Vec<u8>, Ty),
    Type(Ty),
}

#[derive(Debug, Eq, PartialEq)]
pub enum Chunk {
    Parsed(Ty),
    Unparsed(u8),
}

fn ident<'b, Input>() -> impl Parser<Input, Output = Vec<u8>> + 'b
where
    Input: Stream<Token = u8, Range = &'b [u8]> + 'b,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    many1(choice((alpha_num(), byte(b'_'))))
}

fn lifetime<'b, Input>() -> impl Parser<Input, Output = Vec<u8>> + 'b
where
    Input: Stream<Token = u8, Range = &'b [u8]> + 'b,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (byte(b'\''), ident()).map(|(_quote, name)| name)
}

fn comma<'b, Input>() -> impl Parser<Input, Output = ()> + 'b
where
    Input: Stream<Token = u8, Range = &'b [u8]> + 'b,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (spaces(), byte(b','), spaces()).map(|_| ())
}

fn parse_path<'b, Input>() -> impl Parser<Input, Output = Path> + 'b
where
    Input: Stream<Token = u8, Range = &'b [u8]> + 'b,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let arg = || {
        choice((
            attempt(lifetime().map(Arg::Lifetime)),
            attempt(
                (ident(), bytes(b" = "), ty()).map(|(name, _, ty)| Arg::Binding(name, ty)),
            ),
            ty().map(Arg::Type),
        ))
    };
    let args = || between(byte(b'<'), byte(b'>'), sep_by1(arg(), comma()));
    let segment = || {
        (ident(), optional(attempt(args()))).map(|(ident, args)| Segment {
            ident,
            args: args.unwrap_or_default(),
        })
    };
    (
        optional(attempt(bytes(b"::"))),
        segment(),
        many(attempt((bytes(b"::"), segment()).map(|(_, segment)| segment))),
    )
        .map(|(leading_colon, first, rest): (_, _, Vec<_>)| Path {
            leading_colon: leading_colon.is_some(),
            segments: std::iter::once(first).chain(rest).collect(),
        })
}

parser! {
    fn path['b, Input]()(Input) -> Path
    where [Input: Stream<Token = u8, Range = &'b [u8]> + 'b]
    {
        parse_path()
    }
}

fn parse_ty<'b, Input>() -> impl Parser<Input, Output = Ty> + 'b
where
    Input: Stream<Token = u8, Range = &'b [u8]> + 'b,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let reference = || {
        (
            byte(b'&'),
            optional(attempt((lifetime(), byte(b' ')).map(|(lifetime, _)| lifetime))),
            optional(attempt(bytes(b"mut "))),
            ty(),
        )
            .map(|(_, lifetime, mutable, ty)| Ty::Ref {
                lifetime,
                mutable: mutable.is_some(),
                ty: Box::new(ty),
            })
    };
    let tuple = || between(byte(b'('), byte(b')'), sep_end_by(ty(), comma())).map(Ty::Tuple);
    let qualified = || {
        (
            between(
                byte(b'<'),
                byte(b'>'),
                (ty(), bytes(b" as "), path()),
            ),
            many(attempt((bytes(b"::"), ident()).map(|(_, ident)| ident))),
        )
            .map(|((ty, _, as_trait), rest)| Ty::Qualified {
                ty: Box::new(ty),
                as_trait,
                rest,
            })
    };
    choice((
        attempt(reference()),
        attempt(tuple()),
        attempt(qualified()),
        path().map(Ty::Path),
    ))
}

parser! {
    fn ty['b, Input]()(Input) -> Ty
    where [Input: Stream<Token = u8, Range = &'b [u8]> + 'b]
    {
        parse_ty()
    }
}

pub fn chunk<'b, Input>() -> impl Parser<Input, Output = Chunk> + 'b
where
    Input: Stream<Token = u8, Range = &'b [u8]> + 'b,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    choice((attempt(ty().map(Chunk::Parsed)), any().map(Chunk::Unparsed)))
}

/// Splits diagnostic text into the types found in it and the bytes between them.
pub struct Chunks<'b> {
    input: position::Stream<&'b [u8], position::IndexPositioner>,
}

impl<'b> Chunks<'b> {
    pub fn new(input: &'b [u8]) -> Self {
        Self {
            input: position::Stream::new(input),
        }
    }
}

impl<'b> Iterator for Chunks<'b> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let (chunk, rest) = chunk().easy_parse(self.input.clone()).ok()?;
        self.input = rest;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Chunk::*;

    fn simple(ident: &str) -> Segment {
        Segment {
            ident: ident.into(),
            args: vec![],
        }
    }

    fn path_ty(segments: Vec<Segment>) -> Ty {
        Ty::Path(Path {
            leading_colon: false,
            segments,
        })
    }

    fn first(input: &[u8]) -> Chunk {
        Chunks::new(input).next().unwrap()
    }

    #[test]
    fn chunks_iter_yields_next_byte_when_no_type_can_be_parsed() {
        assert_eq!(first(b">"), Unparsed(b'>'));
        assert_eq!(first(b"`"), Unparsed(b'`'));
    }

    #[test]
    fn chunks_iter_yields_multiple_items() {
        let chunks: Vec<_> = Chunks::new(b">ty").collect();
        assert_eq!(
            chunks,
            vec![Unparsed(b'>'), Parsed(path_ty(vec![simple("ty")]))]
        );
    }

    #[test]
    fn chunks_iter_yields_nothing_for_empty_input() {
        assert_eq!(Chunks::new(b"").next(), None);
    }

    #[test]
    fn path_with_generic_args() {
        assert_eq!(
            first(b"typenum::uint::UInt<typenum::uint::UTerm, typenum::bit::B1>"),
            Parsed(path_ty(vec![
                simple("typenum"),
                simple("uint"),
                Segment {
                    ident: "UInt".into(),
                    args: vec![
                        Arg::Type(path_ty(vec![
                            simple("typenum"),
                            simple("uint"),
                            simple("UTerm")
                        ])),
                        Arg::Type(path_ty(vec![
                            simple("typenum"),
                            simple("bit"),
                            simple("B1")
                        ])),
                    ],
                },
            ]))
        );
    }

    #[test]
    fn path_stops_before_unparseable_args() {
        let chunks: Vec<_> = Chunks::new(b"Foo<[u8; 4]>").collect();
        assert_eq!(chunks[0], Parsed(path_ty(vec![simple("Foo")])));
        assert_eq!(chunks[1], Unparsed(b'<'));
        assert_eq!(chunks[2], Unparsed(b'['));
    }

    #[test]
    fn binding_and_lifetime_args() {
        assert_eq!(
            first(b"Trait<'a, Output = B1>"),
            Parsed(path_ty(vec![Segment {
                ident: "Trait".into(),
                args: vec![
                    Arg::Lifetime("a".into()),
                    Arg::Binding("Output".into(), path_ty(vec![simple("B1")])),
                ],
            }]))
        );
    }

    #[test]
    fn references() {
        assert_eq!(
            first(b"&'static mut str"),
            Parsed(Ty::Ref {
                lifetime: Some("static".into()),
                mutable: true,
                ty: Box::new(path_ty(vec![simple("str")])),
            })
        );
        assert_eq!(
            first(b"&u8"),
            Parsed(Ty::Ref {
                lifetime: None,
                mutable: false,
                ty: Box::new(path_ty(vec![simple("u8")])),
            })
        );
    }

    #[test]
    fn tuples() {
        assert_eq!(first(b"()"), Parsed(Ty::Tuple(vec![])));
        assert_eq!(
            first(b"(u8,)"),
            Parsed(Ty::Tuple(vec![path_ty(vec![simple("u8")])]))
        );
        assert_eq!(
            first(b"(u8, bool)"),
            Parsed(Ty::Tuple(vec![
                path_ty(vec![simple("u8")]),
                path_ty(vec![simple("bool")]),
            ]))
        );
    }

    #[test]
    fn prose_in_parentheses_is_not_a_tuple() {
        assert_eq!(first(b"(see below)"), Unparsed(b'('));
    }

    #[test]
    fn qualified_path() {
        assert_eq!(
            first(b"<S as typeseq::Length>::Output"),
            Parsed(Ty::Qualified {
                ty: Box::new(path_ty(vec![simple("S")])),
                as_trait: Path {
                    leading_colon: false,
                    segments: vec![simple("typeseq"), simple("Length")],
                },
                rest: vec!["Output".into()],
            })
        );
    }

    #[test]
    fn leading_colon_is_kept() {
        assert_eq!(
            first(b"::core::ops::Not"),
            Parsed(Ty::Path(Path {
                leading_colon: true,
                segments: vec![simple("core"), simple("ops"), simple("Not")],
            }))
        );
    }
}
