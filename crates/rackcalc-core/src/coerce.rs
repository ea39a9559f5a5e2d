//! Turning form text into [`RackInputs`].
//!
//! The calculator only takes numbers. How malformed text becomes a number is
//! the caller's choice:
//!
//! - **lenient** keeps the longest numeric prefix and falls back to zero, the
//!   way an HTML number form behaves (`"3.7"` racks is 3, `"2.5U"` is 2.5,
//!   `"abc"` is 0);
//! - **strict** rejects anything that is not a complete number. Empty text is
//!   still zero in both modes.

use serde::{Deserialize, Serialize};

use crate::error::RackError;
use crate::inputs::RackInputs;

/// One of the four input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    TotalServers,
    ServerRu,
    RackTotal,
    RuPerRack,
}

impl InputField {
    /// Fields in form order.
    pub const ALL: [InputField; 4] = [
        InputField::TotalServers,
        InputField::ServerRu,
        InputField::RackTotal,
        InputField::RuPerRack,
    ];

    /// Label shown next to the field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TotalServers => "Total Servers",
            Self::ServerRu => "Server RU",
            Self::RackTotal => "Rack Total",
            Self::RuPerRack => "RU per Rack",
        }
    }

    /// Next field in form order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::TotalServers => Self::ServerRu,
            Self::ServerRu => Self::RackTotal,
            Self::RackTotal => Self::RuPerRack,
            Self::RuPerRack => Self::TotalServers,
        }
    }

    /// Previous field in form order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::TotalServers => Self::RuPerRack,
            Self::ServerRu => Self::TotalServers,
            Self::RackTotal => Self::ServerRu,
            Self::RuPerRack => Self::RackTotal,
        }
    }
}

/// Raw text of the four fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    pub total_servers: String,
    pub server_ru: String,
    pub rack_total: String,
    pub ru_per_rack: String,
}

impl RawInputs {
    #[must_use]
    pub fn new(
        total_servers: impl Into<String>,
        server_ru: impl Into<String>,
        rack_total: impl Into<String>,
        ru_per_rack: impl Into<String>,
    ) -> Self {
        Self {
            total_servers: total_servers.into(),
            server_ru: server_ru.into(),
            rack_total: rack_total.into(),
            ru_per_rack: ru_per_rack.into(),
        }
    }

    #[must_use]
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::TotalServers => &self.total_servers,
            InputField::ServerRu => &self.server_ru,
            InputField::RackTotal => &self.rack_total,
            InputField::RuPerRack => &self.ru_per_rack,
        }
    }

    pub fn get_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::TotalServers => &mut self.total_servers,
            InputField::ServerRu => &mut self.server_ru,
            InputField::RackTotal => &mut self.rack_total,
            InputField::RuPerRack => &mut self.ru_per_rack,
        }
    }

    /// Empty every field.
    pub fn clear(&mut self) {
        for field in InputField::ALL {
            self.get_mut(field).clear();
        }
    }

    /// Coerce with the lenient prefix rules. Never fails.
    #[must_use]
    pub fn to_inputs_lenient(&self) -> RackInputs {
        RackInputs {
            total_servers: parse_int_prefix(&self.total_servers),
            server_ru: parse_float_prefix(&self.server_ru),
            rack_total: parse_int_prefix(&self.rack_total),
            ru_per_rack: parse_float_prefix(&self.ru_per_rack),
        }
    }

    /// Coerce requiring every non-empty field to be a complete number.
    pub fn to_inputs_strict(&self) -> Result<RackInputs, RackError> {
        Ok(RackInputs {
            total_servers: parse_int_strict(InputField::TotalServers, &self.total_servers)?,
            server_ru: parse_float_strict(InputField::ServerRu, &self.server_ru)?,
            rack_total: parse_int_strict(InputField::RackTotal, &self.rack_total)?,
            ru_per_rack: parse_float_strict(InputField::RuPerRack, &self.ru_per_rack)?,
        })
    }
}

/// Longest leading `[+-]?digits` after whitespace, or 0.
///
/// Values beyond the `i64` range saturate.
#[must_use]
pub fn parse_int_prefix(text: &str) -> i64 {
    let s = text.trim_start();
    let (negative, sign_len) = match s.as_bytes().first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digits == 0 {
        return 0;
    }
    // Only overflow can fail on a signed digit string.
    s[..sign_len + digits].parse::<i64>().unwrap_or(if negative {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Longest leading decimal literal after whitespace, or 0.
#[must_use]
pub fn parse_float_prefix(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    end = digits_from(end);
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    let value = s[..end].parse::<f64>().unwrap_or(0.0);
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

fn parse_int_strict(field: InputField, text: &str) -> Result<i64, RackError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<i64>().map_err(|_| invalid(field, text))
}

fn parse_float_strict(field: InputField, text: &str) -> Result<f64, RackError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(field, text)),
    }
}

fn invalid(field: InputField, text: &str) -> RackError {
    RackError::InvalidInput {
        field: field.label(),
        value: text.to_string(),
    }
}
