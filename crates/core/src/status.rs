//! Compact support tokens from the per-feature records.
//!
//! A token is `<code><separator><version>`, e.g. `y  4` or `a  all`. The code
//! is one character; the separator is always two characters wide.

const SEPARATOR_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportCode {
    Yes,
    No,
    Partial,
    Unknown,
}

impl SupportCode {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'y' => Some(SupportCode::Yes),
            'n' => Some(SupportCode::No),
            'a' => Some(SupportCode::Partial),
            'u' => Some(SupportCode::Unknown),
            _ => None,
        }
    }

    /// Class given to the rendered row.
    pub fn css_class(self) -> &'static str {
        match self {
            SupportCode::Yes => "yes",
            SupportCode::No => "no",
            SupportCode::Partial => "partial",
            SupportCode::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusToken<'a> {
    pub code: SupportCode,
    pub version: Option<&'a str>,
}

impl<'a> StatusToken<'a> {
    /// Returns `None` for an empty token or an unrecognized code.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let mut chars = raw.chars();
        let code = SupportCode::from_char(chars.next()?)?;
        let rest = chars.as_str();
        let version = rest
            .char_indices()
            .nth(SEPARATOR_WIDTH)
            .map(|(idx, _)| &rest[idx..])
            .filter(|v| !v.is_empty());
        Some(Self { code, version })
    }

    /// Minimum-version text shown in the panel.
    pub fn version_text(&self) -> String {
        match (self.code, self.version) {
            (SupportCode::No, _) | (_, None) => "None".to_string(),
            (_, Some("all")) => "All".to_string(),
            (_, Some(version)) => format!("{version}+"),
        }
    }
}
