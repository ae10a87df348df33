#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{BookedPeriod, Booking, BookingStatus, House, Tour, TourPackage};
    use crate::state::auth::{AuthState, CurrentUser};
    use chrono::NaiveDate;
    use leptos::*;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn admin_user() -> CurrentUser {
        CurrentUser {
            id: "u-admin".into(),
            email: "admin@example.com".into(),
            name: "Site Admin".into(),
            roles: vec!["Admin".into()],
            is_admin: true,
        }
    }

    pub fn regular_user() -> CurrentUser {
        CurrentUser {
            id: "u-guest".into(),
            email: "guest@example.com".into(),
            name: "Ayla Guest".into(),
            roles: vec!["User".into()],
            is_admin: false,
        }
    }

    pub fn provide_auth(
        user: Option<CurrentUser>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn house(id: i64, price: f64, rooms: u32) -> House {
        House {
            id,
            name: format!("House {}", id),
            description: "Stone house with a garden".into(),
            location: "Sheki".into(),
            price_per_night: price,
            room_count: rooms,
            max_guests: rooms * 2,
            category_id: Some(1),
            category_name: Some("Cottages".into()),
            images: vec![],
            advantages: vec![],
            rating: Some(4.5),
            bookings: vec![],
        }
    }

    pub fn booked(check_in: NaiveDate, check_out: NaiveDate, status: BookingStatus) -> BookedPeriod {
        BookedPeriod {
            check_in,
            check_out,
            status,
        }
    }

    pub fn booking(id: i64, house_id: i64, total: f64, status: BookingStatus) -> Booking {
        Booking {
            id,
            house_id,
            house_name: Some(format!("House {}", house_id)),
            user_id: Some("u-guest".into()),
            full_name: "Ayla Guest".into(),
            email: "guest@example.com".into(),
            phone: None,
            check_in: date(2025, 7, 1),
            check_out: date(2025, 7, 4),
            guests: 2,
            total_price: total,
            status,
            created_at: None,
        }
    }

    pub fn tour(id: i64, prices: &[f64]) -> Tour {
        Tour {
            id,
            title: format!("Tour {}", id),
            description: "Mountain villages and waterfalls".into(),
            destination: "Gabala".into(),
            duration_days: 3,
            start_date: None,
            images: vec![],
            packages: prices
                .iter()
                .enumerate()
                .map(|(i, price)| TourPackage {
                    id: Some(i as i64 + 1),
                    name: format!("Package {}", i + 1),
                    price: *price,
                    description: None,
                })
                .collect(),
        }
    }
}
