use crate::api::{Tour, TourPackage};

/// Case-insensitive match on title or destination; a blank query keeps all.
pub fn search_tours(tours: &[Tour], query: &str) -> Vec<Tour> {
    let needle = query.trim().to_lowercase();
    tours
        .iter()
        .filter(|tour| {
            needle.is_empty()
                || tour.title.to_lowercase().contains(&needle)
                || tour.destination.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

pub fn packages_by_price(tour: &Tour) -> Vec<TourPackage> {
    let mut packages = tour.packages.clone();
    packages.sort_by(|a, b| a.price.total_cmp(&b.price));
    packages
}
