//! Theme extraction from stylesheet text
//!
//! Scans free-form text for `--color-<role>: oklch(...)` custom-property
//! declarations and collects them into a role → color mapping. Anything
//! that does not look like such a declaration, or whose literal does not
//! parse, is dropped without failing the scan.
//!
//! When a role is declared more than once, the last declaration in the
//! text wins, matching CSS cascade order.

use std::collections::BTreeMap;

use tracing::debug;

use crate::color::Oklch;

const PREFIX: &[u8] = b"--color-";
const FUNCTION: &[u8] = b"oklch(";

/// A `--color-<role>: oklch(...)` declaration found in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Role name after the `--color-` prefix (e.g. `base-100`)
    pub role: &'a str,
    /// The `oklch(...)` literal, closing parenthesis included
    pub value: &'a str,
    /// Byte offset of the declaration in the source text
    pub offset: usize,
}

/// Iterator over color declarations in a text, in source order.
pub struct Declarations<'a> {
    text: &'a str,
    pos: usize,
}

/// Scan `text` for color custom-property declarations.
pub fn scan_declarations(text: &str) -> Declarations<'_> {
    Declarations { text, pos: 0 }
}

fn is_role_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

fn starts_with_ignore_case(bytes: &[u8], at: usize, needle: &[u8]) -> bool {
    bytes
        .get(at..at + needle.len())
        .is_some_and(|window| window.eq_ignore_ascii_case(needle))
}

impl<'a> Declarations<'a> {
    fn find_prefix(&self) -> Option<usize> {
        let bytes = self.text.as_bytes();
        (self.pos..bytes.len()).find(|&i| starts_with_ignore_case(bytes, i, PREFIX))
    }

    /// Try to read a full declaration starting at `start` (the prefix).
    /// Returns the declaration and the index just past it.
    fn read_at(&self, start: usize) -> Option<(Declaration<'a>, usize)> {
        let text = self.text;
        let bytes = text.as_bytes();

        let role_start = start + PREFIX.len();
        let mut i = role_start;
        while i < bytes.len() && is_role_byte(bytes[i]) {
            i += 1;
        }
        if i == role_start {
            return None;
        }
        let role = &text[role_start..i];

        i = skip_whitespace(bytes, i);
        if bytes.get(i) != Some(&b':') {
            return None;
        }
        i = skip_whitespace(bytes, i + 1);

        if !starts_with_ignore_case(bytes, i, FUNCTION) {
            return None;
        }
        let value_start = i;
        let args_start = i + FUNCTION.len();
        let close = args_start + bytes[args_start..].iter().position(|&b| b == b')')?;
        if close == args_start {
            return None;
        }
        let end = close + 1;

        Some((
            Declaration {
                role,
                value: &text[value_start..end],
                offset: start,
            },
            end,
        ))
    }
}

impl<'a> Iterator for Declarations<'a> {
    type Item = Declaration<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.find_prefix()?;
            match self.read_at(start) {
                Some((decl, end)) => {
                    self.pos = end;
                    return Some(decl);
                }
                None => self.pos = start + PREFIX.len(),
            }
        }
    }
}

/// A mapping from semantic role name to color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    colors: BTreeMap<String, Oklch>,
}

impl Theme {
    /// Create an empty theme
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a theme from stylesheet text.
    pub fn from_css(text: &str) -> Self {
        let mut theme = Self::new();
        for decl in scan_declarations(text) {
            let Some(color) = Oklch::parse(decl.value) else {
                debug!(
                    role = decl.role,
                    value = decl.value,
                    offset = decl.offset,
                    "skipping unparsable color declaration"
                );
                continue;
            };
            if let Some(previous) = theme.insert(decl.role, color) {
                debug!(
                    role = decl.role,
                    %previous,
                    current = %color,
                    "later declaration overrides earlier one"
                );
            }
        }
        theme
    }

    /// Set a role's color, returning the color it replaced.
    pub fn insert(&mut self, role: impl Into<String>, color: Oklch) -> Option<Oklch> {
        self.colors.insert(role.into(), color)
    }

    /// Look up a role
    pub fn get(&self, role: &str) -> Option<&Oklch> {
        self.colors.get(role)
    }

    /// Check whether a role is defined
    pub fn contains(&self, role: &str) -> bool {
        self.colors.contains_key(role)
    }

    /// Number of defined roles
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no roles are defined
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate roles and colors, ordered by role name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Oklch)> {
        self.colors.iter().map(|(role, color)| (role.as_str(), color))
    }
}

/// Extract a theme from stylesheet text. Same as [`Theme::from_css`].
pub fn extract_theme(text: &str) -> Theme {
    Theme::from_css(text)
}
