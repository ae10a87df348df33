use crate::{
    api::{BookedPeriod, CreateBooking, CreateReview, House, Review},
    utils::{time, validation},
};
use chrono::NaiveDate;
use thiserror::Error;

/// Half-open interval overlap: `[a_start, a_end)` and `[b_start, b_end)`
/// share at least one night. Back-to-back stays do not overlap.
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Canceled bookings never block a stay.
pub fn is_available(house: &House, check_in: NaiveDate, check_out: NaiveDate) -> bool {
    !house
        .bookings
        .iter()
        .filter(|period| period.status.is_active())
        .any(|period| ranges_overlap(check_in, check_out, period.check_in, period.check_out))
}

pub fn booking_total(price_per_night: f64, check_in: NaiveDate, check_out: NaiveDate) -> f64 {
    time::nights_between(check_in, check_out) as f64 * price_per_night
}

/// Active bookings that have not ended yet, soonest first.
pub fn upcoming_periods(house: &House, today: NaiveDate) -> Vec<BookedPeriod> {
    let mut periods: Vec<BookedPeriod> = house
        .bookings
        .iter()
        .filter(|period| period.status.is_active() && period.check_out > today)
        .cloned()
        .collect();
    periods.sort_by_key(|period| period.check_in);
    periods
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HouseFilter {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rooms: Option<u32>,
    pub category_id: Option<i64>,
}

impl HouseFilter {
    /// The requested stay, only when both ends are set and in order.
    pub fn stay(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if check_out > check_in => {
                Some((check_in, check_out))
            }
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, house: &House) -> bool {
        if let Some(min) = self.min_price {
            if house.price_per_night < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if house.price_per_night > max {
                return false;
            }
        }
        if let Some(rooms) = self.min_rooms {
            if house.room_count < rooms {
                return false;
            }
        }
        if let Some(category) = self.category_id {
            if house.category_id != Some(category) {
                return false;
            }
        }
        match self.stay() {
            Some((check_in, check_out)) => is_available(house, check_in, check_out),
            None => true,
        }
    }

    pub fn apply(&self, houses: &[House]) -> Vec<House> {
        houses
            .iter()
            .filter(|house| self.matches(house))
            .cloned()
            .collect()
    }
}

/// Raw values of the filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseFilterForm {
    pub check_in: String,
    pub check_out: String,
    pub min_price: String,
    pub max_price: String,
    pub min_rooms: String,
    pub category_id: String,
}

fn parse_optional<T: std::str::FromStr>(raw: &str, label: &str) -> Result<Option<T>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| format!("{} must be a number.", label))
}

impl HouseFilterForm {
    /// Builds the filter. Problems are reported alongside a filter that
    /// leaves out the offending criteria, so the list still renders.
    pub fn to_filter(&self) -> (HouseFilter, Option<String>) {
        let mut problems = Vec::new();
        let mut filter = HouseFilter::default();

        match (
            time::parse_date_input(&self.check_in),
            time::parse_date_input(&self.check_out),
        ) {
            (Ok(check_in), Ok(check_out)) => {
                if let (Some(start), Some(end)) = (check_in, check_out) {
                    if end <= start {
                        problems.push("Check-out must be after check-in.".to_string());
                    } else {
                        filter.check_in = check_in;
                        filter.check_out = check_out;
                    }
                } else if check_in.is_some() || check_out.is_some() {
                    problems.push("Choose both check-in and check-out.".to_string());
                }
            }
            (Err(err), _) | (_, Err(err)) => problems.push(err),
        }

        match parse_optional::<f64>(&self.min_price, "Minimum price") {
            Ok(value) => filter.min_price = value.filter(|v| *v >= 0.0),
            Err(err) => problems.push(err),
        }
        match parse_optional::<f64>(&self.max_price, "Maximum price") {
            Ok(value) => filter.max_price = value.filter(|v| *v >= 0.0),
            Err(err) => problems.push(err),
        }
        if let (Some(min), Some(max)) = (filter.min_price, filter.max_price) {
            if min > max {
                problems.push("Minimum price cannot exceed maximum price.".to_string());
                filter.min_price = None;
                filter.max_price = None;
            }
        }
        match parse_optional::<u32>(&self.min_rooms, "Rooms") {
            Ok(value) => filter.min_rooms = value.filter(|v| *v > 0),
            Err(err) => problems.push(err),
        }
        match parse_optional::<i64>(&self.category_id, "Category") {
            Ok(value) => filter.category_id = value,
            Err(err) => problems.push(err),
        }

        let error = (!problems.is_empty()).then(|| problems.join(" "));
        (filter, error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingFormError {
    #[error("Please enter your full name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Choose check-in and check-out dates.")]
    MissingDates,
    #[error("{0}")]
    InvalidDate(String),
    #[error("Check-in cannot be in the past.")]
    PastCheckIn,
    #[error("Check-out must be after check-in.")]
    InvalidRange,
    #[error("Guests must be between 1 and {0}.")]
    GuestCount(u32),
    #[error("The house is already booked for some of these dates.")]
    Unavailable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFormState {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
}

impl BookingFormState {
    pub fn prefilled(full_name: &str, email: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            email: email.to_string(),
            guests: "1".to_string(),
            ..Self::default()
        }
    }

    /// Stay length and price for the current dates, when they are usable.
    pub fn quote(&self, price_per_night: f64) -> Option<(i64, f64)> {
        let check_in = time::parse_date_input(&self.check_in).ok()??;
        let check_out = time::parse_date_input(&self.check_out).ok()??;
        if check_out <= check_in {
            return None;
        }
        Some((
            time::nights_between(check_in, check_out),
            booking_total(price_per_night, check_in, check_out),
        ))
    }

    pub fn validate(&self, house: &House, today: NaiveDate) -> Result<CreateBooking, BookingFormError> {
        let full_name = validation::non_blank(&self.full_name).ok_or(BookingFormError::MissingName)?;
        if !validation::is_valid_email(&self.email) {
            return Err(BookingFormError::InvalidEmail);
        }
        let check_in = time::parse_date_input(&self.check_in).map_err(BookingFormError::InvalidDate)?;
        let check_out =
            time::parse_date_input(&self.check_out).map_err(BookingFormError::InvalidDate)?;
        let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
            return Err(BookingFormError::MissingDates);
        };
        if check_in < today {
            return Err(BookingFormError::PastCheckIn);
        }
        if check_out <= check_in {
            return Err(BookingFormError::InvalidRange);
        }
        let capacity = house.max_guests.max(1);
        let guests = self
            .guests
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|guests| (1..=capacity).contains(guests))
            .ok_or(BookingFormError::GuestCount(capacity))?;
        if !is_available(house, check_in, check_out) {
            return Err(BookingFormError::Unavailable);
        }

        Ok(CreateBooking {
            house_id: house.id,
            full_name,
            email: self.email.trim().to_string(),
            phone: validation::non_blank(&self.phone),
            check_in,
            check_out,
            guests,
            total_price: booking_total(house.price_per_night, check_in, check_out),
        })
    }
}

pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
    Some(f64::from(sum) / reviews.len() as f64)
}

pub const MAX_REVIEW_LEN: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFormState {
    pub rating: u8,
    pub comment: String,
}

impl Default for ReviewFormState {
    fn default() -> Self {
        Self {
            rating: 5,
            comment: String::new(),
        }
    }
}

impl ReviewFormState {
    pub fn to_request(&self, house_id: i64) -> Result<CreateReview, String> {
        if !(1..=5).contains(&self.rating) {
            return Err("Rating must be between 1 and 5.".into());
        }
        let comment = validation::non_blank(&self.comment)
            .ok_or_else(|| "Please write a short comment.".to_string())?;
        if comment.chars().count() > MAX_REVIEW_LEN {
            return Err(format!("Comments are limited to {} characters.", MAX_REVIEW_LEN));
        }
        Ok(CreateReview {
            house_id,
            rating: self.rating,
            comment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BookingStatus;
    use crate::test_support::helpers::{booked, date, house};

    fn booked_house() -> House {
        let mut house = house(1, 100.0, 3);
        house.bookings = vec![
            booked(date(2025, 7, 10), date(2025, 7, 15), BookingStatus::Confirmed),
            booked(date(2025, 7, 20), date(2025, 7, 22), BookingStatus::Canceled),
            booked(date(2025, 7, 1), date(2025, 7, 3), BookingStatus::Pending),
        ];
        house
    }

    #[test]
    fn overlap_is_half_open() {
        let d = |day| date(2025, 7, day);
        assert!(ranges_overlap(d(10), d(15), d(14), d(16)));
        assert!(ranges_overlap(d(10), d(15), d(11), d(12)));
        assert!(!ranges_overlap(d(10), d(15), d(15), d(18)));
        assert!(!ranges_overlap(d(10), d(15), d(5), d(10)));
    }

    #[test]
    fn availability_ignores_canceled_bookings() {
        let house = booked_house();
        assert!(!is_available(&house, date(2025, 7, 12), date(2025, 7, 13)));
        assert!(!is_available(&house, date(2025, 7, 2), date(2025, 7, 5)));
        assert!(is_available(&house, date(2025, 7, 20), date(2025, 7, 22)));
        assert!(is_available(&house, date(2025, 7, 15), date(2025, 7, 18)));
    }

    #[test]
    fn booking_total_multiplies_nights() {
        assert_eq!(booking_total(120.0, date(2025, 7, 1), date(2025, 7, 4)), 360.0);
        assert_eq!(booking_total(120.0, date(2025, 7, 4), date(2025, 7, 1)), 0.0);
    }

    #[test]
    fn upcoming_periods_skip_past_and_canceled() {
        let periods = upcoming_periods(&booked_house(), date(2025, 7, 5));
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].check_in, date(2025, 7, 10));
    }

    #[test]
    fn filter_combines_criteria() {
        let mut cheap = house(1, 80.0, 2);
        cheap.category_id = Some(2);
        let big = booked_house();
        let houses = vec![cheap, big];

        let filter = HouseFilter {
            min_rooms: Some(3),
            ..HouseFilter::default()
        };
        assert_eq!(filter.apply(&houses).len(), 1);

        let filter = HouseFilter {
            max_price: Some(90.0),
            category_id: Some(2),
            ..HouseFilter::default()
        };
        assert_eq!(filter.apply(&houses)[0].price_per_night, 80.0);

        let filter = HouseFilter {
            check_in: Some(date(2025, 7, 11)),
            check_out: Some(date(2025, 7, 12)),
            ..HouseFilter::default()
        };
        assert_eq!(filter.apply(&houses).len(), 1);
        assert!(HouseFilter::default().is_empty());
    }

    #[test]
    fn filter_form_drops_invalid_range() {
        let form = HouseFilterForm {
            check_in: "2025-07-10".into(),
            check_out: "2025-07-08".into(),
            min_rooms: "2".into(),
            ..HouseFilterForm::default()
        };
        let (filter, error) = form.to_filter();
        assert_eq!(error.as_deref(), Some("Check-out must be after check-in."));
        assert!(filter.stay().is_none());
        assert_eq!(filter.min_rooms, Some(2));
    }

    #[test]
    fn filter_form_needs_both_dates() {
        let form = HouseFilterForm {
            check_in: "2025-07-10".into(),
            max_price: "300".into(),
            ..HouseFilterForm::default()
        };
        let (filter, error) = form.to_filter();
        assert_eq!(error.as_deref(), Some("Choose both check-in and check-out."));
        assert!(filter.stay().is_none());
        assert_eq!(filter.check_in, None);
        assert_eq!(filter.max_price, Some(300.0));

        let form = HouseFilterForm {
            check_out: "2025-07-12".into(),
            ..HouseFilterForm::default()
        };
        let (filter, error) = form.to_filter();
        assert!(error.is_some());
        assert_eq!(filter.check_out, None);

        let (filter, error) = HouseFilterForm::default().to_filter();
        assert!(error.is_none());
        assert!(filter.stay().is_none());
    }

    #[test]
    fn filter_form_reports_bad_numbers() {
        let form = HouseFilterForm {
            min_price: "abc".into(),
            max_price: "50".into(),
            ..HouseFilterForm::default()
        };
        let (filter, error) = form.to_filter();
        assert!(error.unwrap().contains("Minimum price must be a number."));
        assert_eq!(filter.max_price, Some(50.0));

        let form = HouseFilterForm {
            min_price: "200".into(),
            max_price: "50".into(),
            ..HouseFilterForm::default()
        };
        let (filter, error) = form.to_filter();
        assert!(error.is_some());
        assert!(filter.min_price.is_none() && filter.max_price.is_none());
    }

    #[test]
    fn booking_form_builds_request() {
        let house = booked_house();
        let form = BookingFormState {
            full_name: " Ayla Guest ".into(),
            email: "ayla@example.com".into(),
            phone: "".into(),
            check_in: "2025-07-15".into(),
            check_out: "2025-07-18".into(),
            guests: "4".into(),
        };
        let request = form.validate(&house, date(2025, 7, 1)).unwrap();
        assert_eq!(request.full_name, "Ayla Guest");
        assert_eq!(request.total_price, 300.0);
        assert!(request.phone.is_none());
        assert_eq!(form.quote(100.0), Some((3, 300.0)));
    }

    #[test]
    fn booking_form_rejects_problems_in_order() {
        let house = booked_house();
        let base = BookingFormState {
            full_name: "Ayla".into(),
            email: "ayla@example.com".into(),
            phone: String::new(),
            check_in: "2025-07-16".into(),
            check_out: "2025-07-18".into(),
            guests: "2".into(),
        };
        let today = date(2025, 7, 1);

        let form = BookingFormState { full_name: " ".into(), ..base.clone() };
        assert_eq!(form.validate(&house, today), Err(BookingFormError::MissingName));

        let form = BookingFormState { email: "nope".into(), ..base.clone() };
        assert_eq!(form.validate(&house, today), Err(BookingFormError::InvalidEmail));

        let form = BookingFormState { check_out: String::new(), ..base.clone() };
        assert_eq!(form.validate(&house, today), Err(BookingFormError::MissingDates));

        let form = BookingFormState { check_in: "2025-06-30".into(), ..base.clone() };
        assert_eq!(form.validate(&house, today), Err(BookingFormError::PastCheckIn));

        let form = BookingFormState { check_out: "2025-07-16".into(), ..base.clone() };
        assert_eq!(form.validate(&house, today), Err(BookingFormError::InvalidRange));

        let form = BookingFormState { guests: "7".into(), ..base.clone() };
        assert_eq!(form.validate(&house, today), Err(BookingFormError::GuestCount(6)));

        let form = BookingFormState {
            check_in: "2025-07-12".into(),
            ..base.clone()
        };
        assert_eq!(form.validate(&house, today), Err(BookingFormError::Unavailable));
        assert_eq!(
            BookingFormError::Unavailable.to_string(),
            "The house is already booked for some of these dates."
        );
    }

    #[test]
    fn review_form_requires_comment_and_rating() {
        let mut form = ReviewFormState::default();
        assert!(form.to_request(3).is_err());
        form.comment = "  Quiet and clean ".into();
        let request = form.to_request(3).unwrap();
        assert_eq!(request.comment, "Quiet and clean");
        assert_eq!(request.rating, 5);
        form.rating = 0;
        assert_eq!(form.to_request(3).unwrap_err(), "Rating must be between 1 and 5.");
        form.rating = 4;
        form.comment = "x".repeat(MAX_REVIEW_LEN + 1);
        assert!(form.to_request(3).is_err());
    }

    #[test]
    fn average_rating_of_reviews() {
        let review = |rating| Review {
            id: i64::from(rating),
            house_id: 1,
            author_name: "Guest".into(),
            rating,
            comment: "ok".into(),
            created_at: None,
        };
        assert_eq!(average_rating(&[]), None);
        assert_eq!(average_rating(&[review(4), review(5)]), Some(4.5));
    }
}
