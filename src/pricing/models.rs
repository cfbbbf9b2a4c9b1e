//! Domain models for the booking pricing engine.
//!
//! The price table is a fixed constant; requests and breakdowns are plain
//! values built fresh for every calculation.

use serde::Serialize;

/// Unit price used when a room or bed label is not in the table.
pub const FALLBACK_UNIT_PRICE: i64 = 1000;

/// Unit price used when a breakfast plan is absent from the table.
///
/// Equal to the "Include" price. A plan that is present with a price of 0
/// ("Exclude") is honored and never replaced by this value.
pub const FALLBACK_BREAKFAST_PRICE: i64 = 1000;

/// One row of a pricing dimension: a category label and its unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceEntry {
    pub label: &'static str,
    pub price: i64,
}

const fn entry(label: &'static str, price: i64) -> PriceEntry {
    PriceEntry { label, price }
}

/// Static price table covering the three pricing dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceTable {
    pub rooms: &'static [PriceEntry],
    pub beds: &'static [PriceEntry],
    pub breakfast: &'static [PriceEntry],
}

impl PriceTable {
    /// The hotel's published rates.
    pub const STANDARD: PriceTable = PriceTable {
        rooms: &[
            entry("Normal", 1000),
            entry("Semi Luxury", 2000),
            entry("Luxury", 5000),
        ],
        beds: &[
            entry("Single", 1000),
            entry("Double", 2000),
            entry("King", 3000),
        ],
        breakfast: &[entry("Include", 1000), entry("Exclude", 0)],
    };

    /// Room price, falling back to [`FALLBACK_UNIT_PRICE`] for unknown labels.
    pub fn room_price(&self, label: &str) -> i64 {
        lookup(self.rooms, label).unwrap_or(FALLBACK_UNIT_PRICE)
    }

    /// Bed price, falling back to [`FALLBACK_UNIT_PRICE`] for unknown labels.
    pub fn bed_price(&self, label: &str) -> i64 {
        lookup(self.beds, label).unwrap_or(FALLBACK_UNIT_PRICE)
    }

    /// Breakfast price. Only a label missing from the table falls back.
    pub fn breakfast_price(&self, label: &str) -> i64 {
        lookup(self.breakfast, label).unwrap_or(FALLBACK_BREAKFAST_PRICE)
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn lookup(entries: &[PriceEntry], label: &str) -> Option<i64> {
    entries.iter().find(|e| e.label == label).map(|e| e.price)
}

/// Display name for a room category, as shown on the booking desk.
pub fn room_display_name(label: &str) -> &'static str {
    match label {
        "Semi Luxury" => "Semi Luxury",
        "Luxury" => "Luxury",
        _ => "Ordinary Room",
    }
}

/// Input to a single cost calculation.
///
/// Defaults: room "Normal", bed "Single", breakfast "Include", one
/// occupant, and empty dates (which price to a zero total).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub room_category: String,
    pub bed_category: String,
    pub breakfast_plan: String,
    pub occupant_count: u32,
    pub check_in_date: String,
    pub check_out_date: String,
}

impl Default for BookingRequest {
    fn default() -> Self {
        Self {
            room_category: "Normal".to_string(),
            bed_category: "Single".to_string(),
            breakfast_plan: "Include".to_string(),
            occupant_count: 1,
            check_in_date: String::new(),
            check_out_date: String::new(),
        }
    }
}

/// Itemized result of a cost calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub room_price: i64,
    pub bed_price: i64,
    pub breakfast_price: i64,
    pub base_price: i64,
    pub occupant_count: u32,
    pub duration_days: i64,
    pub total_cost: i64,
}
