// Mon Feb 2 2026 - Alex

use std::fmt;

const RAW_QUALIFIER: &str = "raw ";

/// One level of indirection on a type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeModifier {
    Pointer,
    Reference,
}

impl TypeModifier {
    pub fn as_char(self) -> char {
        match self {
            TypeModifier::Pointer => '*',
            TypeModifier::Reference => '&',
        }
    }
}

/// A parsed type expression: base name plus the trailing pointer/reference
/// modifiers, in source order. The base name is taken as-is; it is not
/// checked against any known-types table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeDesc {
    pub name: String,
    pub modifiers: Vec<TypeModifier>,
}

impl TypeDesc {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            modifiers: Vec::new(),
        }
    }

    /// Parse a textual type expression, stripping trailing `*`/`&` markers
    /// right-to-left into the modifier sequence.
    pub fn parse(text: &str) -> Self {
        let mut rest = text.trim();
        let mut reversed = Vec::new();
        loop {
            rest = rest.trim_end();
            if let Some(stripped) = rest.strip_suffix('*') {
                reversed.push(TypeModifier::Pointer);
                rest = stripped;
            } else if let Some(stripped) = rest.strip_suffix('&') {
                reversed.push(TypeModifier::Reference);
                rest = stripped;
            } else {
                break;
            }
        }
        reversed.reverse();
        Self {
            name: rest.to_string(),
            modifiers: reversed,
        }
    }

    pub fn ends_with_pointer(&self) -> bool {
        self.modifiers.last() == Some(&TypeModifier::Pointer)
    }

    /// Rewrite a single trailing pointer modifier into a reference.
    /// Returns false (and changes nothing) when the type does not end in a
    /// pointer.
    pub fn make_last_pointer_reference(&mut self) -> bool {
        match self.modifiers.last_mut() {
            Some(last) if *last == TypeModifier::Pointer => {
                *last = TypeModifier::Reference;
                true
            }
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.modifiers.is_empty()
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for m in &self.modifiers {
            write!(f, "{}", m.as_char())?;
        }
        Ok(())
    }
}

/// Strip the `raw ` qualifier keyword from the front of a type expression,
/// returning the rest and whether the qualifier was present.
pub fn strip_raw_qualifier(text: &str) -> (&str, bool) {
    let trimmed = text.trim_start();
    match trimmed.strip_prefix(RAW_QUALIFIER) {
        Some(rest) => (rest.trim_start(), true),
        None => (trimmed, false),
    }
}
