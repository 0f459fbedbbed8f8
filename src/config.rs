use crate::constants::{
    ACTIVE_CLASS, ROOT_MARGIN, SECTION_SELECTOR, TRIGGER_SELECTOR, VISIBILITY_THRESHOLD,
    VISIBLE_CLASS,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),
    #[error("{field} selector is empty")]
    EmptySelector { field: &'static str },
    #[error("{field} class name {name:?} must be non-empty and contain no whitespace")]
    InvalidClassName { field: &'static str, name: String },
    #[error("root margin {0:?} must be 1-4 space-separated px or % lengths")]
    InvalidRootMargin(String),
}

/// Everything the initializer needs to wire sections and trigger buttons.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub section_selector: String,
    pub trigger_selector: String,
    pub visible_class: String,
    pub active_class: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section_selector: SECTION_SELECTOR.to_string(),
            trigger_selector: TRIGGER_SELECTOR.to_string(),
            visible_class: VISIBLE_CLASS.to_string(),
            active_class: ACTIVE_CLASS.to_string(),
            threshold: VISIBILITY_THRESHOLD,
            root_margin: ROOT_MARGIN.to_string(),
        }
    }
}

impl RevealConfig {
    /// Reject values the DOM would throw on (bad class tokens, bad margins).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }
        check_selector("section", &self.section_selector)?;
        check_selector("trigger", &self.trigger_selector)?;
        check_class_name("visible", &self.visible_class)?;
        check_class_name("active", &self.active_class)?;
        parse_root_margin(&self.root_margin)?;
        Ok(())
    }
}

fn check_selector(field: &'static str, selector: &str) -> Result<(), ConfigError> {
    if selector.trim().is_empty() {
        return Err(ConfigError::EmptySelector { field });
    }
    Ok(())
}

fn check_class_name(field: &'static str, name: &str) -> Result<(), ConfigError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidClassName {
            field,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// One side of an observer root margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

/// Parse a CSS-margin-like root margin into top/right/bottom/left, expanding
/// shorthand the same way the `margin` property does.
pub fn parse_root_margin(value: &str) -> Result<[MarginLength; 4], ConfigError> {
    let invalid = || ConfigError::InvalidRootMargin(value.to_string());
    let parts = value
        .split_whitespace()
        .map(parse_margin_length)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;
    match parts.as_slice() {
        [all] => Ok([*all; 4]),
        [v, h] => Ok([*v, *h, *v, *h]),
        [t, h, b] => Ok([*t, *h, *b, *h]),
        [t, r, b, l] => Ok([*t, *r, *b, *l]),
        _ => Err(invalid()),
    }
}

fn parse_margin_length(token: &str) -> Option<MarginLength> {
    let number = |s: &str| s.parse::<f64>().ok().filter(|n| n.is_finite());
    if let Some(n) = strip_unit(token, "px") {
        number(n).map(MarginLength::Px)
    } else if let Some(n) = token.strip_suffix('%') {
        number(n).map(MarginLength::Percent)
    } else {
        None
    }
}

// CSS units are ASCII case-insensitive.
fn strip_unit<'a>(token: &'a str, unit: &str) -> Option<&'a str> {
    let split = token.len().checked_sub(unit.len())?;
    if !token.is_char_boundary(split) {
        return None;
    }
    let (number, suffix) = token.split_at(split);
    suffix.eq_ignore_ascii_case(unit).then_some(number)
}
