//! Request DTOs for pricing endpoints.

use serde::Deserialize;

use super::models::BookingRequest;

/// Largest people count a form may ask a quote for; larger counts are capped.
pub const MAX_FORM_OCCUPANTS: u32 = 1_000;

/// Quote request as submitted by the booking form.
///
/// Accepts the form's field names (`roomType`, `peopleCount`, ...) and the
/// long names (`roomCategory`, `occupantCount`, ...). Missing or empty
/// fields take the [`BookingRequest`] defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default, alias = "roomCategory")]
    pub room_type: Option<String>,
    #[serde(default, alias = "bedCategory")]
    pub bed_type: Option<String>,
    #[serde(default, alias = "breakfastPlan")]
    pub breakfast: Option<String>,
    #[serde(default, alias = "occupantCount")]
    pub people_count: Option<FormCount>,
    #[serde(default)]
    pub check_in_date: Option<String>,
    #[serde(default)]
    pub check_out_date: Option<String>,
}

/// A count that arrives either as a JSON number or as form text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FormCount {
    Number(f64),
    Text(String),
}

impl FormCount {
    /// Integer value the way a browser form reads it: fractions are truncated
    /// and text is read up to its first non-digit (`"3 guests"` is 3).
    fn value(&self) -> Option<i64> {
        match self {
            FormCount::Number(n) => n.is_finite().then(|| n.trunc() as i64),
            FormCount::Text(s) => leading_integer(s),
        }
    }
}

/// Parse an optionally signed run of leading digits, ignoring leading
/// whitespace and anything after the digits. Saturates instead of overflowing.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(*d));
    Some(if negative { -magnitude } else { magnitude })
}

impl QuoteRequest {
    /// Apply the form's default substitution.
    ///
    /// A missing, unparseable or non-positive people count becomes 1, and
    /// counts above [`MAX_FORM_OCCUPANTS`] are capped.
    pub fn into_booking_request(self) -> BookingRequest {
        let defaults = BookingRequest::default();

        let occupant_count = self
            .people_count
            .as_ref()
            .and_then(FormCount::value)
            .filter(|n| *n > 0)
            .map(|n| n.min(i64::from(MAX_FORM_OCCUPANTS)) as u32)
            .unwrap_or(defaults.occupant_count);

        BookingRequest {
            room_category: non_empty(self.room_type).unwrap_or(defaults.room_category),
            bed_category: non_empty(self.bed_type).unwrap_or(defaults.bed_category),
            breakfast_plan: non_empty(self.breakfast).unwrap_or(defaults.breakfast_plan),
            occupant_count,
            check_in_date: self.check_in_date.unwrap_or_default(),
            check_out_date: self.check_out_date.unwrap_or_default(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
