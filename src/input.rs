//! Input utility functions

use crate::ast;
use std::str::FromStr;

/// Parse any address specification entered in by a user.
///
/// Addresses may be given as:
///
///  1. Hexadecimal, prefixed with `0x` or `$`; e.g. `0x1C` or `$1C`.
///  2. Decimal, with no prefix.
///  3. A branch label with the given label prefix; e.g. `loc_001C`.
pub fn parse_address(text_str: &str, label_prefix: &str) -> Option<u32> {
    let text_str = text_str.trim();

    if let Some(hex) = text_str
        .strip_prefix("0x")
        .or_else(|| text_str.strip_prefix("0X"))
        .or_else(|| text_str.strip_prefix('$'))
    {
        return u32::from_str_radix(hex, 16).ok();
    }

    if let Ok(address) = u32::from_str(text_str) {
        return Some(address);
    }

    match ast::Label::from_str(text_str) {
        Ok(label) if label.prefix() == label_prefix => Some(label.address()),
        _ => None,
    }
}
