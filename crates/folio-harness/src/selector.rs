#![forbid(unsafe_code)]

//! Minimal CSS selector subset for the in-memory document.
//!
//! Supported: type (`a`), universal (`*`), id (`#x`), class (`.x`),
//! attribute presence/equality (`[id]`, `[href="#x"]`), descendant and child
//! (`>`) combinators, and `,` groups. Anything else is rejected.

use core::fmt;

/// Selector text outside the supported subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedSelector(pub String);

impl fmt::Display for UnsupportedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported selector: {:?}", self.0)
    }
}

impl std::error::Error for UnsupportedSelector {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrCondition {
    Present(String),
    Equals(String, String),
}

/// One compound selector (`a.btn[href]`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<AttrCondition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
}

/// Compounds left to right; `combinator` relates a part to the one before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub compound: Compound,
    pub combinator: Option<Combinator>,
}

/// Comma-separated alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList(pub Vec<Vec<Part>>);

impl SelectorList {
    /// Parse selector text.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedSelector`] for empty input, dangling combinators,
    /// or syntax outside the subset.
    pub fn parse(selector: &str) -> Result<Self, UnsupportedSelector> {
        let unsupported = || UnsupportedSelector(selector.to_string());
        let mut groups = Vec::new();
        for group in selector.split(',') {
            let chain = parse_chain(group).ok_or_else(unsupported)?;
            groups.push(chain);
        }
        Ok(Self(groups))
    }
}

fn parse_chain(group: &str) -> Option<Vec<Part>> {
    let spaced = group.replace('>', " > ");
    let mut parts: Vec<Part> = Vec::new();
    let mut pending = None;
    for token in spaced.split_whitespace() {
        if token == ">" {
            if pending.is_some() || parts.is_empty() {
                return None;
            }
            pending = Some(Combinator::Child);
            continue;
        }
        let compound = parse_compound(token)?;
        let combinator = if parts.is_empty() {
            None
        } else {
            Some(pending.take().unwrap_or(Combinator::Descendant))
        };
        parts.push(Part {
            compound,
            combinator,
        });
    }
    if parts.is_empty() || pending.is_some() {
        return None;
    }
    Some(parts)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(src: &str) -> Option<(&str, &str)> {
    let end = src.find(|c: char| !is_ident_char(c)).unwrap_or(src.len());
    if end == 0 {
        return None;
    }
    Some(src.split_at(end))
}

fn parse_compound(token: &str) -> Option<Compound> {
    let mut compound = Compound::default();
    let mut rest = token;

    if let Some(after) = rest.strip_prefix('*') {
        rest = after;
    } else if rest.starts_with(is_ident_char) {
        let (tag, after) = take_ident(rest)?;
        compound.tag = Some(tag.to_ascii_lowercase());
        rest = after;
    }

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('#') {
            let (id, after) = take_ident(after)?;
            compound.id = Some(id.to_string());
            rest = after;
        } else if let Some(after) = rest.strip_prefix('.') {
            let (class, after) = take_ident(after)?;
            compound.classes.push(class.to_string());
            rest = after;
        } else if let Some(after) = rest.strip_prefix('[') {
            let close = after.find(']')?;
            compound.attrs.push(parse_attr(&after[..close])?);
            rest = &after[close + 1..];
        } else {
            return None;
        }
    }
    Some(compound)
}

fn parse_attr(body: &str) -> Option<AttrCondition> {
    match body.split_once('=') {
        None => {
            let (name, rest) = take_ident(body.trim())?;
            rest.is_empty()
                .then(|| AttrCondition::Present(name.to_ascii_lowercase()))
        }
        Some((name, value)) => {
            let (name, rest) = take_ident(name.trim())?;
            if !rest.is_empty() {
                return None;
            }
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            Some(AttrCondition::Equals(name.to_ascii_lowercase(), value.to_string()))
        }
    }
}
