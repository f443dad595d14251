//! Parsing of `max_expanded_height` values.
//!
//! Accepted forms:
//! - `640`, `640px`: absolute pixels
//! - `90vh`, `90%`: fraction of the viewport height
//! - `calc(100% - 32px)`, `calc(100vh - 32px)`: viewport height minus a gap

use std::fmt;

/// A resolved-on-demand height expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeightExpr {
    Px(f32),
    ViewportPercent(f32),
    ViewportMinus(f32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeightParseError {
    Empty,
    Malformed(String),
    Negative(String),
}

impl fmt::Display for HeightParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeightParseError::Empty => write!(f, "height expression is empty"),
            HeightParseError::Malformed(input) => {
                write!(f, "cannot parse height expression {input:?}")
            }
            HeightParseError::Negative(input) => {
                write!(f, "height expression {input:?} is negative")
            }
        }
    }
}

impl std::error::Error for HeightParseError {}

impl HeightExpr {
    /// The whole viewport height. Used when a configured value is unusable.
    pub const FULL_VIEWPORT: HeightExpr = HeightExpr::ViewportPercent(100.0);

    pub fn parse(input: &str) -> Result<Self, HeightParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(HeightParseError::Empty);
        }

        if let Some(inner) = trimmed
            .strip_prefix("calc(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_calc(inner, input);
        }

        if let Some(number) = trimmed.strip_suffix("px") {
            return parse_number(number, input).map(HeightExpr::Px);
        }
        if let Some(number) = trimmed
            .strip_suffix("vh")
            .or_else(|| trimmed.strip_suffix('%'))
        {
            return parse_number(number, input).map(HeightExpr::ViewportPercent);
        }

        parse_number(trimmed, input).map(HeightExpr::Px)
    }

    /// Resolves the expression against the current viewport height.
    pub fn resolve(&self, viewport_height: f32) -> f32 {
        match *self {
            HeightExpr::Px(px) => px,
            HeightExpr::ViewportPercent(percent) => viewport_height * percent / 100.0,
            HeightExpr::ViewportMinus(gap) => (viewport_height - gap).max(0.0),
        }
    }
}

fn parse_calc(inner: &str, original: &str) -> Result<HeightExpr, HeightParseError> {
    let malformed = || HeightParseError::Malformed(original.to_string());
    let (base, gap) = inner.split_once('-').ok_or_else(malformed)?;

    match base.trim() {
        "100%" | "100vh" => {}
        _ => return Err(malformed()),
    }

    let gap = gap.trim();
    let gap = gap.strip_suffix("px").unwrap_or(gap);
    parse_number(gap, original).map(HeightExpr::ViewportMinus)
}

fn parse_number(text: &str, original: &str) -> Result<f32, HeightParseError> {
    let value: f32 = text
        .trim()
        .parse()
        .map_err(|_| HeightParseError::Malformed(original.to_string()))?;
    if !value.is_finite() {
        return Err(HeightParseError::Malformed(original.to_string()));
    }
    if value < 0.0 {
        return Err(HeightParseError::Negative(original.to_string()));
    }
    Ok(value)
}
