/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

mod kind;
pub use kind::MetricKind;

mod point;
pub use point::MetricPoint;

mod record;
pub use record::MetricRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty name")]
    EmptyName,
    #[error("invalid graphic char: {0}")]
    InvalidGraphic(char),
    #[error("not alpha numeric char")]
    NotAlphaNumeric,
    #[error("unknown metric type: {0}")]
    UnknownMetricKind(String),
}

/// Check a metric name node, the allowed chars match the ones used by g3 metrics names.
pub(crate) fn check_node_name(s: &str) -> Result<(), ParseError> {
    if s.is_empty() {
        return Err(ParseError::EmptyName);
    }
    for c in s.chars() {
        if c.is_ascii() {
            match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '/' => {}
                _ => {
                    return if c.is_ascii_graphic() {
                        Err(ParseError::InvalidGraphic(c))
                    } else {
                        Err(ParseError::NotAlphaNumeric)
                    };
                }
            }
        } else if !c.is_alphanumeric() {
            return Err(ParseError::NotAlphaNumeric);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_name() {
        assert!(check_node_name("metrics").is_ok());
        assert!(check_node_name("traces-1.a_b/c").is_ok());
        assert!(check_node_name("指标").is_ok());
        assert_eq!(check_node_name(""), Err(ParseError::EmptyName));
        assert_eq!(check_node_name("a:b"), Err(ParseError::InvalidGraphic(':')));
        assert_eq!(check_node_name("a b"), Err(ParseError::NotAlphaNumeric));
    }
}
