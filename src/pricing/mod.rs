//! Booking pricing engine.
//!
//! Turns room/bed/breakfast selections, a date range and an occupancy into
//! an itemized cost breakdown. Pricing never fails: unknown labels fall back
//! to default prices and bad dates price to zero nights.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{calculate_booking_cost, calculate_duration};
pub use models::{BookingRequest, CostBreakdown, PriceEntry, PriceTable};
pub use responses::{format_duration, format_rupees};
pub use routes::router;
