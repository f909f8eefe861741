use chrono::NaiveDate;

/// Days counted as one year when describing time to maturity.
const DAYS_PER_YEAR: i64 = 365;

/// Days counted as one month when describing time to maturity.
const DAYS_PER_MONTH: i64 = 30;

/// Whole years and leftover whole months from `from` until `to`.
///
/// Uses 365-day years and 30-day months. Dates already in the past yield
/// `(0, 0)`.
pub fn time_remaining(from: NaiveDate, to: NaiveDate) -> (u32, u32) {
    let days = (to - from).num_days();
    if days <= 0 {
        return (0, 0);
    }
    let years = days / DAYS_PER_YEAR;
    let months = (days % DAYS_PER_YEAR) / DAYS_PER_MONTH;
    (years as u32, months as u32)
}
