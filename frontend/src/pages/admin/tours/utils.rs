use crate::{
    api::{Tour, TourPackage, TourPayload},
    utils::{time, validation},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRow {
    pub id: Option<i64>,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl PackageRow {
    fn from_package(package: &TourPackage) -> Self {
        Self {
            id: package.id,
            name: package.name.clone(),
            price: package.price.to_string(),
            description: package.description.clone().unwrap_or_default(),
        }
    }

    fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.price.trim().is_empty() && self.description.trim().is_empty()
    }

    fn to_package(&self, position: usize) -> Result<TourPackage, String> {
        let name = validation::non_blank(&self.name)
            .ok_or_else(|| format!("Package {} needs a name.", position))?;
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or_else(|| format!("Package \"{}\" needs a price of 0 or more.", name))?;
        Ok(TourPackage {
            id: self.id,
            name,
            price,
            description: validation::non_blank(&self.description),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourFormState {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub destination: String,
    pub duration_days: String,
    pub start_date: String,
    pub images: Vec<String>,
    pub packages: Vec<PackageRow>,
}

impl TourFormState {
    /// A new tour starts with one empty package row.
    pub fn blank() -> Self {
        Self {
            packages: vec![PackageRow::default()],
            ..Self::default()
        }
    }

    pub fn from_tour(tour: &Tour) -> Self {
        Self {
            id: Some(tour.id),
            title: tour.title.clone(),
            description: tour.description.clone(),
            destination: tour.destination.clone(),
            duration_days: tour.duration_days.to_string(),
            start_date: tour.start_date.map(time::format_date_input).unwrap_or_default(),
            images: tour.images.clone(),
            packages: tour.packages.iter().map(PackageRow::from_package).collect(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Blank package rows are ignored; a tour needs at least one package.
    pub fn to_payload(&self) -> Result<TourPayload, String> {
        let title = validation::non_blank(&self.title).ok_or("Title is required.")?;
        let destination =
            validation::non_blank(&self.destination).ok_or("Destination is required.")?;
        let duration_days = self
            .duration_days
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|days| *days > 0)
            .ok_or("Duration must be at least one day.")?;
        let start_date = time::parse_date_input(&self.start_date)?;
        let packages = self
            .packages
            .iter()
            .filter(|row| !row.is_blank())
            .enumerate()
            .map(|(index, row)| row.to_package(index + 1))
            .collect::<Result<Vec<_>, _>>()?;
        if packages.is_empty() {
            return Err("Add at least one package.".into());
        }

        Ok(TourPayload {
            title,
            description: self.description.trim().to_string(),
            destination,
            duration_days,
            start_date,
            images: self.images.clone(),
            packages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{date, tour};

    #[test]
    fn existing_tour_round_trips() {
        let mut existing = tour(2, &[150.0, 99.5]);
        existing.start_date = Some(date(2025, 9, 1));
        let form = TourFormState::from_tour(&existing);
        assert_eq!(form.start_date, "2025-09-01");
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.packages.len(), 2);
        assert_eq!(payload.packages[1].price, 99.5);
        assert_eq!(payload.packages[0].id, Some(1));
        assert_eq!(payload.start_date, Some(date(2025, 9, 1)));
    }

    #[test]
    fn blank_rows_are_skipped_but_one_package_is_required() {
        let mut form = TourFormState {
            title: "Waterfalls".into(),
            destination: "Gabala".into(),
            duration_days: "2".into(),
            ..TourFormState::blank()
        };
        assert_eq!(form.to_payload().unwrap_err(), "Add at least one package.");

        form.packages.push(PackageRow {
            name: "Standard".into(),
            price: "120".into(),
            ..PackageRow::default()
        });
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.packages.len(), 1);
        assert_eq!(payload.packages[0].description, None);
    }

    #[test]
    fn package_errors_name_the_row() {
        let form = TourFormState {
            title: "Waterfalls".into(),
            destination: "Gabala".into(),
            duration_days: "2".into(),
            packages: vec![PackageRow {
                name: "Premium".into(),
                price: "-5".into(),
                ..PackageRow::default()
            }],
            ..TourFormState::default()
        };
        assert_eq!(
            form.to_payload().unwrap_err(),
            "Package \"Premium\" needs a price of 0 or more."
        );

        let form = TourFormState { duration_days: "0".into(), ..form };
        assert_eq!(form.to_payload().unwrap_err(), "Duration must be at least one day.");

        let form = TourFormState { duration_days: "1".into(), start_date: "soon".into(), ..form };
        assert_eq!(form.to_payload().unwrap_err(), "Invalid date: soon");
    }
}
