//! Response DTOs for pricing endpoints.

use serde::Serialize;

use super::models::{room_display_name, BookingRequest, CostBreakdown};

/// Text lines shown next to a quote on the booking desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDisplay {
    pub room: String,
    pub bed: String,
    pub breakfast: String,
    pub people: String,
    pub duration: String,
    pub total: String,
}

impl QuoteDisplay {
    pub fn new(request: &BookingRequest, breakdown: &CostBreakdown) -> Self {
        Self {
            room: format!(
                "{} ({})",
                room_display_name(&request.room_category),
                format_rupees(breakdown.room_price)
            ),
            bed: format!(
                "{} ({})",
                request.bed_category,
                format_rupees(breakdown.bed_price)
            ),
            breakfast: format!(
                "{} ({})",
                request.breakfast_plan,
                format_rupees(breakdown.breakfast_price)
            ),
            people: breakdown.occupant_count.to_string(),
            duration: format_duration(breakdown.duration_days),
            total: format_rupees(breakdown.total_cost),
        }
    }
}

/// Response for a quote calculation
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub breakdown: CostBreakdown,
    pub display: QuoteDisplay,
}

impl QuoteResponse {
    pub fn new(request: &BookingRequest, breakdown: CostBreakdown) -> Self {
        Self {
            display: QuoteDisplay::new(request, &breakdown),
            breakdown,
        }
    }
}

/// Format an amount as rupees with thousands separators, e.g. `Rs 54,000`.
pub fn format_rupees(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("Rs -{}", grouped)
    } else {
        format!("Rs {}", grouped)
    }
}

/// `1 day`, `3 days`.
pub fn format_duration(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculate_booking_cost;

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(0), "Rs 0");
        assert_eq!(format_rupees(999), "Rs 999");
        assert_eq!(format_rupees(1000), "Rs 1,000");
        assert_eq!(format_rupees(54_000), "Rs 54,000");
        assert_eq!(format_rupees(1_234_567), "Rs 1,234,567");
        assert_eq!(format_rupees(-2500), "Rs -2,500");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0 days");
        assert_eq!(format_duration(1), "1 day");
        assert_eq!(format_duration(3), "3 days");
    }

    #[test]
    fn test_quote_display_lines() {
        let request = BookingRequest {
            room_category: "Normal".to_string(),
            bed_category: "Double".to_string(),
            breakfast_plan: "Exclude".to_string(),
            occupant_count: 2,
            check_in_date: "2025-03-01".to_string(),
            check_out_date: "2025-03-02".to_string(),
        };
        let breakdown = calculate_booking_cost(&request);
        let display = QuoteDisplay::new(&request, &breakdown);

        assert_eq!(display.room, "Ordinary Room (Rs 1,000)");
        assert_eq!(display.bed, "Double (Rs 2,000)");
        assert_eq!(display.breakfast, "Exclude (Rs 0)");
        assert_eq!(display.people, "2");
        assert_eq!(display.duration, "1 day");
        assert_eq!(display.total, "Rs 6,000");
    }

    #[test]
    fn test_quote_response_serializes_flat() {
        let request = BookingRequest::default();
        let response = QuoteResponse::new(&request, calculate_booking_cost(&request));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["roomPrice"], 1000);
        assert_eq!(json["totalCost"], 0);
        assert_eq!(json["durationDays"], 0);
        assert_eq!(json["display"]["duration"], "0 days");
    }
}
