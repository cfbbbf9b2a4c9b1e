//! Core pricing calculation functions.
//!
//! Pure functions for booking math - no storage access, no failure paths.
//! Every malformed input degrades to a default price or a zero duration.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::models::{BookingRequest, CostBreakdown, PriceTable};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Number of nights between check-in and check-out.
///
/// Dates are read as UTC. A bare `YYYY-MM-DD` means midnight; partial days
/// round up. Empty or unparseable input yields 0, and a check-out before
/// check-in is clamped to 0.
///
/// # Examples
/// ```
/// use boutique_hotel_web::pricing::calculate_duration;
///
/// assert_eq!(calculate_duration("2025-01-01", "2025-01-02"), 1);
/// assert_eq!(calculate_duration("2025-01-10", "2025-01-01"), 0);
/// assert_eq!(calculate_duration("", "2025-01-10"), 0);
/// ```
pub fn calculate_duration(check_in: &str, check_out: &str) -> i64 {
    let (Some(start), Some(end)) = (parse_instant(check_in), parse_instant(check_out)) else {
        return 0;
    };

    let seconds = (end - start).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    // ceiling division for positive values
    (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
}

/// Parse a date or datetime string into a UTC instant.
fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.and_utc())
}

/// Calculate the booking cost against the standard price table.
///
/// Formula: (room + bed + breakfast) × occupants × days.
///
/// # Examples
/// ```
/// use boutique_hotel_web::pricing::{calculate_booking_cost, BookingRequest};
///
/// let breakdown = calculate_booking_cost(&BookingRequest {
///     room_category: "Luxury".into(),
///     bed_category: "King".into(),
///     breakfast_plan: "Include".into(),
///     occupant_count: 2,
///     check_in_date: "2025-03-01".into(),
///     check_out_date: "2025-03-04".into(),
/// });
/// assert_eq!(breakdown.total_cost, 54_000);
/// ```
pub fn calculate_booking_cost(request: &BookingRequest) -> CostBreakdown {
    PriceTable::STANDARD.quote(request)
}

impl PriceTable {
    /// Calculate the booking cost against this table.
    ///
    /// A total too large for `i64` is reported as `i64::MAX`.
    pub fn quote(&self, request: &BookingRequest) -> CostBreakdown {
        let room_price = self.room_price(&request.room_category);
        let bed_price = self.bed_price(&request.bed_category);
        let breakfast_price = self.breakfast_price(&request.breakfast_plan);

        let duration_days = calculate_duration(&request.check_in_date, &request.check_out_date);

        let base_price = room_price + bed_price + breakfast_price;
        // saturates at i64::MAX instead of overflowing
        let total_cost = base_price
            .checked_mul(i64::from(request.occupant_count))
            .and_then(|per_night| per_night.checked_mul(duration_days))
            .unwrap_or(i64::MAX);

        CostBreakdown {
            room_price,
            bed_price,
            breakfast_price,
            base_price,
            occupant_count: request.occupant_count,
            duration_days,
            total_cost,
        }
    }
}
