use crate::parse::{Arg, Chunk, Chunks, Path, Ty};
use std::io::{self, Write};

/// Rewrites type-level numbers and sequences in diagnostic text into the notation they are
/// written in: `U5`, `B1` and `seq![i32, f32]`.
pub struct Translator<Output: Write> {
    output: Output,
}

impl<Output: Write> Translator<Output> {
    pub fn new(output: Output) -> Self {
        Self { output }
    }

    pub fn translate(mut self, input: impl AsRef<[u8]>) -> io::Result<()> {
        let mut buffer = Vec::new();
        for chunk in Chunks::new(input.as_ref()) {
            match chunk {
                Chunk::Unparsed(c) => buffer.push(c),
                Chunk::Parsed(ty) => {
                    self.output.write_all(&buffer)?;
                    buffer.clear();
                    self.write_ty(&ty)?;
                }
            }
        }
        self.output.write_all(&buffer)?;
        self.output.flush()
    }

    fn write_ty(&mut self, ty: &Ty) -> io::Result<()> {
        if let Some(n) = unsigned(ty) {
            return write!(self.output, "U{}", n);
        }
        if let Some(bit) = bit(ty) {
            return write!(self.output, "B{}", bit);
        }
        if let Some(elements) = sequence(ty) {
            self.output.write_all(b"seq![")?;
            self.write_separated(&elements)?;
            return self.output.write_all(b"]");
        }
        match ty {
            Ty::Path(path) => self.write_path(path),
            Ty::Qualified {
                ty,
                as_trait,
                rest,
            } => {
                self.output.write_all(b"<")?;
                self.write_ty(ty)?;
                self.output.write_all(b" as ")?;
                self.write_path(as_trait)?;
                self.output.write_all(b">")?;
                for ident in rest {
                    self.output.write_all(b"::")?;
                    self.output.write_all(ident)?;
                }
                Ok(())
            }
            Ty::Tuple(elements) => {
                self.output.write_all(b"(")?;
                self.write_separated(&elements.iter().collect::<Vec<_>>())?;
                if elements.len() == 1 {
                    self.output.write_all(b",")?;
                }
                self.output.write_all(b")")
            }
            Ty::Ref {
                lifetime,
                mutable,
                ty,
            } => {
                self.output.write_all(b"&")?;
                if let Some(lifetime) = lifetime {
                    self.output.write_all(b"'")?;
                    self.output.write_all(lifetime)?;
                    self.output.write_all(b" ")?;
                }
                if *mutable {
                    self.output.write_all(b"mut ")?;
                }
                self.write_ty(ty)
            }
        }
    }

    fn write_path(&mut self, path: &Path) -> io::Result<()> {
        if path.leading_colon {
            self.output.write_all(b"::")?;
        }
        for (i, segment) in path.segments.iter().enumerate() {
            if i > 0 {
                self.output.write_all(b"::")?;
            }
            self.output.write_all(&segment.ident)?;
            if segment.args.is_empty() {
                continue;
            }
            self.output.write_all(b"<")?;
            for (i, arg) in segment.args.iter().enumerate() {
                if i > 0 {
                    self.output.write_all(b", ")?;
                }
                match arg {
                    Arg::Lifetime(name) => {
                        self.output.write_all(b"'")?;
                        self.output.write_all(name)?;
                    }
                    Arg::Binding(name, ty) => {
                        self.output.write_all(name)?;
                        self.output.write_all(b" = ")?;
                        self.write_ty(ty)?;
                    }
                    Arg::Type(ty) => self.write_ty(ty)?,
                }
            }
            self.output.write_all(b">")?;
        }
        Ok(())
    }

    fn write_separated(&mut self, tys: &[&Ty]) -> io::Result<()> {
        for (i, ty) in tys.iter().enumerate() {
            if i > 0 {
                self.output.write_all(b", ")?;
            }
            self.write_ty(ty)?;
        }
        Ok(())
    }
}

/// The type arguments of `path` when it names `family::..::name`, or just `name`.
fn named<'t>(ty: &'t Ty, family: &str, name: &str) -> Option<Vec<&'t Ty>> {
    let path = match ty {
        Ty::Path(path) => path,
        _ => return None,
    };
    let (last, prefix) = path.segments.split_last()?;
    let in_family = match prefix.first() {
        None => !path.leading_colon,
        Some(first) => {
            first.ident == family.as_bytes() && prefix.iter().all(|s| s.args.is_empty())
        }
    };
    if !in_family || last.ident != name.as_bytes() {
        return None;
    }
    last.args
        .iter()
        .map(|arg| match arg {
            Arg::Type(ty) => Some(ty),
            _ => None,
        })
        .collect()
}

/// Whether `ty` names `family::..::name` (or just `name`) without arguments.
fn bare(ty: &Ty, family: &str, name: &str) -> bool {
    named(ty, family, name).map_or(false, |args| args.is_empty())
}

fn bit(ty: &Ty) -> Option<u8> {
    if bare(ty, "typenum", "B0") {
        Some(0)
    } else if bare(ty, "typenum", "B1") {
        Some(1)
    } else {
        None
    }
}

fn unsigned(ty: &Ty) -> Option<u128> {
    if bare(ty, "typenum", "UTerm") {
        return Some(0);
    }
    match named(ty, "typenum", "UInt")?.as_slice() {
        [msb, lsb] => unsigned(msb)?
            .checked_mul(2)?
            .checked_add(u128::from(bit(lsb)?)),
        _ => None,
    }
}

fn sequence(ty: &Ty) -> Option<Vec<&Ty>> {
    if bare(ty, "typeseq", "Nil") {
        return Some(vec![]);
    }
    match named(ty, "typeseq", "Cons")?.as_slice() {
        [head, tail] => {
            let mut elements = vec![*head];
            elements.extend(sequence(tail)?);
            Some(elements)
        }
        _ => None,
    }
}

//  _____         _
// |_   _|__  ___| |_ ___
//   | |/ _ \/ __| __/ __|
//   | |  __/\__ \ |_\__ \
//   |_|\___||___/\__|___/
//  FIGLET: Tests
