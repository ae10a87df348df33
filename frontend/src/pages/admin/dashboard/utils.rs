use crate::api::{Booking, BookingStatus};
use chrono::Datelike;
use std::collections::{BTreeMap, HashMap};

pub const TOP_HOUSES: usize = 5;
pub const RECENT_BOOKINGS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: u32,
    pub revenue: f64,
}

impl MonthlyRevenue {
    pub fn label(&self) -> String {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|date| date.format("%b %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HouseRevenue {
    pub house_id: i64,
    pub house_name: String,
    pub revenue: f64,
    pub bookings: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_bookings: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub canceled: usize,
    pub total_revenue: f64,
    pub average_booking_value: Option<f64>,
    pub monthly: Vec<MonthlyRevenue>,
    pub top_houses: Vec<HouseRevenue>,
}

/// One pass over the bookings. Only confirmed bookings earn revenue; months
/// are keyed by check-in date.
pub fn compute_stats(bookings: &[Booking]) -> DashboardStats {
    let mut stats = DashboardStats {
        total_bookings: bookings.len(),
        ..DashboardStats::default()
    };
    let mut monthly: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    let mut houses: HashMap<i64, HouseRevenue> = HashMap::new();

    for booking in bookings {
        match booking.status {
            BookingStatus::Pending => stats.pending += 1,
            BookingStatus::Canceled => stats.canceled += 1,
            BookingStatus::Confirmed => {
                stats.confirmed += 1;
                stats.total_revenue += booking.total_price;
                *monthly
                    .entry((booking.check_in.year(), booking.check_in.month()))
                    .or_default() += booking.total_price;
                let entry = houses.entry(booking.house_id).or_insert_with(|| HouseRevenue {
                    house_id: booking.house_id,
                    house_name: booking
                        .house_name
                        .clone()
                        .unwrap_or_else(|| format!("House #{}", booking.house_id)),
                    revenue: 0.0,
                    bookings: 0,
                });
                entry.revenue += booking.total_price;
                entry.bookings += 1;
            }
        }
    }

    if stats.confirmed > 0 {
        stats.average_booking_value = Some(stats.total_revenue / stats.confirmed as f64);
    }
    stats.monthly = monthly
        .into_iter()
        .map(|((year, month), revenue)| MonthlyRevenue { year, month, revenue })
        .collect();
    let mut top: Vec<HouseRevenue> = houses.into_values().collect();
    top.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.house_id.cmp(&b.house_id))
    });
    top.truncate(TOP_HOUSES);
    stats.top_houses = top;
    stats
}

/// Newest first by creation time, falling back to id for older records.
pub fn recent_bookings(bookings: &[Booking], count: usize) -> Vec<Booking> {
    let mut sorted = bookings.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
    sorted.truncate(count);
    sorted
}

/// Bar width in percent relative to the best month.
pub fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{booking, date};
    use chrono::{TimeZone, Utc};

    fn sample() -> Vec<Booking> {
        let mut first = booking(1, 10, 300.0, BookingStatus::Confirmed);
        first.check_in = date(2025, 8, 2);
        let mut second = booking(2, 11, 500.0, BookingStatus::Confirmed);
        second.check_in = date(2025, 7, 20);
        let mut third = booking(3, 10, 250.0, BookingStatus::Confirmed);
        third.check_in = date(2025, 8, 15);
        let pending = booking(4, 12, 900.0, BookingStatus::Pending);
        let canceled = booking(5, 11, 1000.0, BookingStatus::Canceled);
        vec![first, second, third, pending, canceled]
    }

    #[test]
    fn revenue_counts_confirmed_only() {
        let stats = compute_stats(&sample());
        assert_eq!(stats.total_bookings, 5);
        assert_eq!((stats.pending, stats.confirmed, stats.canceled), (1, 3, 1));
        assert_eq!(stats.total_revenue, 1050.0);
        assert_eq!(stats.average_booking_value, Some(350.0));
    }

    #[test]
    fn monthly_revenue_is_chronological() {
        let stats = compute_stats(&sample());
        let months: Vec<(u32, f64)> = stats.monthly.iter().map(|m| (m.month, m.revenue)).collect();
        assert_eq!(months, vec![(7, 500.0), (8, 550.0)]);
        assert_eq!(stats.monthly[0].label(), "Jul 2025");
    }

    #[test]
    fn top_houses_ranked_by_revenue() {
        let stats = compute_stats(&sample());
        assert_eq!(stats.top_houses.len(), 2);
        assert_eq!(stats.top_houses[0].house_id, 10);
        assert_eq!(stats.top_houses[0].bookings, 2);
        assert_eq!(stats.top_houses[1].house_name, "House 11");

        let many: Vec<Booking> = (1..=8)
            .map(|id| booking(id, id, id as f64 * 10.0, BookingStatus::Confirmed))
            .collect();
        let top = compute_stats(&many).top_houses;
        assert_eq!(top.len(), TOP_HOUSES);
        assert_eq!(top[0].house_id, 8);
    }

    #[test]
    fn empty_input_has_no_average() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn recent_bookings_prefer_creation_time() {
        let mut old = booking(9, 1, 10.0, BookingStatus::Pending);
        old.created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single();
        let mut new = booking(2, 1, 10.0, BookingStatus::Pending);
        new.created_at = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).single();
        let recent = recent_bookings(&[old, new], 1);
        assert_eq!(recent[0].id, 2);
    }

    #[test]
    fn bar_width_is_bounded() {
        assert_eq!(bar_width(50.0, 200.0), 25.0);
        assert_eq!(bar_width(10.0, 0.0), 0.0);
    }
}
