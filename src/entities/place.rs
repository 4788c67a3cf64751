// 📍 Place Entity - Points of interest around the property
//
// Category is a plain string id. The tab controller does not validate ids,
// and an unknown id matches nothing.

use serde::{Deserialize, Serialize};

/// Category id that matches every place
pub const ALL_CATEGORIES: &str = "all";

/// Tab order shown on the neighborhood page
pub const PLACE_CATEGORIES: [&str; 7] = [
    ALL_CATEGORIES,
    "dining",
    "shopping",
    "entertainment",
    "golf",
    "culture",
    "wellness",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub distance_miles: f32,
    pub address: String,
}

pub struct PlaceRegistry {
    places: Vec<Place>,
}

impl PlaceRegistry {
    pub fn new(places: Vec<Place>) -> Self {
        PlaceRegistry { places }
    }

    pub fn with_defaults() -> Self {
        PlaceRegistry::new(default_places())
    }

    pub fn all(&self) -> &[Place] {
        &self.places
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }
}

impl Default for PlaceRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn place(id: &str, name: &str, category: &str, distance_miles: f32, address: &str, description: &str) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        distance_miles,
        address: address.to_string(),
    }
}

fn default_places() -> Vec<Place> {
    vec![
        place("wynn-steakhouse", "SW Steakhouse", "dining", 0.4, "3131 Las Vegas Blvd S", "Lakeside steakhouse with an evening show on the Lake of Dreams."),
        place("delmonico", "Delmonico Steakhouse", "dining", 1.1, "3355 Las Vegas Blvd S", "Classic Creole-inflected steakhouse."),
        place("wing-lei", "Wing Lei", "dining", 0.4, "3131 Las Vegas Blvd S", "Refined French-inspired Chinese cuisine."),
        place("lotus-of-siam", "Lotus of Siam", "dining", 1.6, "620 E Flamingo Rd", "Northern Thai institution with a celebrated wine list."),
        place("wynn-esplanade", "Wynn Esplanade", "shopping", 0.4, "3131 Las Vegas Blvd S", "Luxury boutiques along a skylit promenade."),
        place("fashion-show", "Fashion Show Mall", "shopping", 0.7, "3200 Las Vegas Blvd S", "Department stores and flagship retailers."),
        place("forum-shops", "The Forum Shops", "shopping", 1.3, "3500 Las Vegas Blvd S", "Upscale shopping under a painted Roman sky."),
        place("sphere", "Sphere", "entertainment", 0.9, "255 Sands Ave", "Immersive venue for concerts and films."),
        place("encore-theater", "Encore Theater", "entertainment", 0.4, "3131 Las Vegas Blvd S", "Intimate headliner stage."),
        place("wynn-golf", "Wynn Golf Club", "golf", 0.3, "3131 Las Vegas Blvd S", "Championship course on the Strip."),
        place("las-vegas-country-club", "Las Vegas Country Club", "golf", 1.2, "3000 Joe W Brown Dr", "Private club with an 18-hole course."),
        place("smith-center", "The Smith Center", "culture", 3.1, "361 Symphony Park Ave", "Performing arts center home to the philharmonic."),
        place("neon-museum", "The Neon Museum", "culture", 3.4, "770 Las Vegas Blvd N", "Outdoor collection of restored historic signs."),
        place("turnberry-spa", "The Spa at Turnberry", "wellness", 0.0, "2827 Paradise Rd", "Residents' spa with treatment suites and fitness studio."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_places_cover_every_category() {
        let registry = PlaceRegistry::with_defaults();
        assert!(registry.all().len() > 6);

        for category in PLACE_CATEGORIES.iter().filter(|c| **c != ALL_CATEGORIES) {
            assert!(
                registry.all().iter().any(|p| p.category == *category),
                "no place in {}",
                category
            );
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let registry = PlaceRegistry::with_defaults();
        let mut ids: Vec<&str> = registry.all().iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), registry.all().len());
    }
}
