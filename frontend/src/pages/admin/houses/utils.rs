use crate::{
    api::{House, HousePayload},
    pages::admin::utils::parse_optional_id,
    utils::validation,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseFormState {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub location: String,
    pub price_per_night: String,
    pub room_count: String,
    pub max_guests: String,
    pub category_id: String,
    pub advantage_ids: Vec<i64>,
    pub images: Vec<String>,
}

impl HouseFormState {
    pub fn from_house(house: &House) -> Self {
        Self {
            id: Some(house.id),
            name: house.name.clone(),
            description: house.description.clone(),
            location: house.location.clone(),
            price_per_night: house.price_per_night.to_string(),
            room_count: house.room_count.to_string(),
            max_guests: house.max_guests.to_string(),
            category_id: house.category_id.map(|id| id.to_string()).unwrap_or_default(),
            advantage_ids: house.advantages.iter().map(|a| a.id).collect(),
            images: house.images.clone(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn toggle_advantage(&mut self, id: i64) {
        toggle_id(&mut self.advantage_ids, id);
    }

    pub fn to_payload(&self) -> Result<HousePayload, String> {
        let name = validation::non_blank(&self.name).ok_or("Name is required.")?;
        let location = validation::non_blank(&self.location).ok_or("Location is required.")?;
        let price_per_night = self
            .price_per_night
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price > 0.0)
            .ok_or("Price per night must be a positive number.")?;
        let room_count = parse_positive(&self.room_count, "Rooms")?;
        let max_guests = parse_positive(&self.max_guests, "Max guests")?;
        let category_id = parse_optional_id(&self.category_id)?;

        Ok(HousePayload {
            name,
            description: self.description.trim().to_string(),
            location,
            price_per_night,
            room_count,
            max_guests,
            category_id,
            advantage_ids: self.advantage_ids.clone(),
            images: self.images.clone(),
        })
    }
}

pub fn toggle_id(ids: &mut Vec<i64>, id: i64) {
    if let Some(pos) = ids.iter().position(|existing| *existing == id) {
        ids.remove(pos);
    } else {
        ids.push(id);
    }
}

fn parse_positive(raw: &str, label: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| format!("{} must be a whole number of at least 1.", label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Advantage;
    use crate::test_support::helpers::house;

    #[test]
    fn editing_round_trips_through_payload() {
        let mut existing = house(3, 120.5, 2);
        existing.advantages = vec![Advantage { id: 7, name: "Wi-Fi".into(), icon: None }];
        let form = HouseFormState::from_house(&existing);
        assert!(!form.is_new());
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.price_per_night, 120.5);
        assert_eq!(payload.category_id, Some(1));
        assert_eq!(payload.advantage_ids, vec![7]);
    }

    #[test]
    fn validation_messages() {
        let form = HouseFormState {
            name: "Cabin".into(),
            location: "Sheki".into(),
            price_per_night: "0".into(),
            room_count: "2".into(),
            max_guests: "4".into(),
            ..HouseFormState::default()
        };
        assert_eq!(form.to_payload().unwrap_err(), "Price per night must be a positive number.");

        let form = HouseFormState { price_per_night: "80".into(), room_count: "0".into(), ..form };
        assert_eq!(form.to_payload().unwrap_err(), "Rooms must be a whole number of at least 1.");

        let form = HouseFormState { room_count: "1".into(), category_id: "abc".into(), ..form };
        assert!(form.to_payload().is_err());

        let form = HouseFormState { category_id: String::new(), ..form };
        assert_eq!(form.to_payload().unwrap().category_id, None);

        assert_eq!(HouseFormState::default().to_payload().unwrap_err(), "Name is required.");
    }

    #[test]
    fn toggle_advantage_adds_and_removes() {
        let mut form = HouseFormState::default();
        form.toggle_advantage(2);
        form.toggle_advantage(5);
        form.toggle_advantage(2);
        assert_eq!(form.advantage_ids, vec![5]);
    }
}
