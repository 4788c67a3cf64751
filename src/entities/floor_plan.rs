// 🏢 Floor Plan Entity - Residences offered across the four towers
//
// Floor plans are compiled-in VALUES: they are never mutated at runtime.
// The registry is the single source the filter, comparison and API layers read from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// PLAN TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanType {
    #[serde(rename = "1-Bedroom")]
    OneBedroom,

    #[serde(rename = "2-Bedroom")]
    TwoBedroom,

    #[serde(rename = "3-Bedroom")]
    ThreeBedroom,

    #[serde(rename = "Penthouse")]
    Penthouse,

    #[serde(rename = "Estate")]
    Estate,
}

impl PlanType {
    pub const ALL: [PlanType; 5] = [
        PlanType::OneBedroom,
        PlanType::TwoBedroom,
        PlanType::ThreeBedroom,
        PlanType::Penthouse,
        PlanType::Estate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::OneBedroom => "1-Bedroom",
            PlanType::TwoBedroom => "2-Bedroom",
            PlanType::ThreeBedroom => "3-Bedroom",
            PlanType::Penthouse => "Penthouse",
            PlanType::Estate => "Estate",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = anyhow::Error;

    /// Accepts the display label ("2-Bedroom") case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PlanType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| anyhow::anyhow!("Unknown plan type: {}", s))
    }
}

// ============================================================================
// FLOOR PLAN ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlan {
    /// Stable identity (e.g., "plan-b")
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub plan_type: PlanType,

    pub bedrooms: u8,
    pub bathrooms: f32,

    /// Interior square footage varies by floor and tower
    pub sqft_min: u32,
    pub sqft_max: u32,

    /// Asking price range in USD
    pub price_min: u64,
    pub price_max: u64,

    /// Tower ids this plan is offered in
    pub towers: Vec<u8>,

    pub features: Vec<String>,
    pub images: Vec<String>,
}

impl FloorPlan {
    /// Offered in the given tower?
    pub fn in_tower(&self, tower_id: u8) -> bool {
        self.towers.contains(&tower_id)
    }

    /// Midpoint of the square footage range, used for display
    pub fn representative_sqft(&self) -> u32 {
        self.sqft_min + (self.sqft_max - self.sqft_min) / 2
    }
}

// ============================================================================
// FLOOR PLAN REGISTRY
// ============================================================================

/// Compiled-in table of every floor plan, in display order
pub struct FloorPlanRegistry {
    plans: Vec<FloorPlan>,
}

impl FloorPlanRegistry {
    pub fn new(plans: Vec<FloorPlan>) -> Self {
        FloorPlanRegistry { plans }
    }

    /// Registry with the sales-gallery plan table
    pub fn with_defaults() -> Self {
        FloorPlanRegistry::new(default_plans())
    }

    pub fn all(&self) -> &[FloorPlan] {
        &self.plans
    }

    pub fn find_by_id(&self, id: &str) -> Option<&FloorPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn by_type(&self, plan_type: PlanType) -> Vec<&FloorPlan> {
        self.plans.iter().filter(|p| p.plan_type == plan_type).collect()
    }

    pub fn count(&self) -> usize {
        self.plans.len()
    }
}

impl Default for FloorPlanRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[allow(clippy::too_many_arguments)]
fn plan(
    id: &str,
    name: &str,
    plan_type: PlanType,
    bedrooms: u8,
    bathrooms: f32,
    sqft: (u32, u32),
    price: (u64, u64),
    towers: &[u8],
    features: &[&str],
) -> FloorPlan {
    FloorPlan {
        id: id.to_string(),
        name: name.to_string(),
        plan_type,
        bedrooms,
        bathrooms,
        sqft_min: sqft.0,
        sqft_max: sqft.1,
        price_min: price.0,
        price_max: price.1,
        towers: towers.to_vec(),
        features: features.iter().map(|f| f.to_string()).collect(),
        images: vec![
            format!("/static/plans/{}.webp", id),
            format!("/static/plans/{}-view.webp", id),
        ],
    }
}

fn default_plans() -> Vec<FloorPlan> {
    vec![
        plan(
            "plan-a", "The Aspen", PlanType::OneBedroom, 1, 1.5,
            (1_200, 1_450), (850_000, 1_100_000), &[1, 2],
            &["Floor-to-ceiling windows", "Juliet balcony", "Walk-in closet"],
        ),
        plan(
            "plan-b", "The Birch", PlanType::TwoBedroom, 2, 2.5,
            (1_900, 2_200), (1_300_000, 1_750_000), &[1, 2, 3],
            &["Wraparound terrace", "Chef's kitchen", "Strip views"],
        ),
        plan(
            "plan-c", "The Cypress", PlanType::TwoBedroom, 2, 2.5,
            (2_300, 2_600), (1_600_000, 2_100_000), &[2, 3, 4],
            &["Corner residence", "Library", "Mountain views"],
        ),
        plan(
            "plan-d", "The Dogwood", PlanType::ThreeBedroom, 3, 3.5,
            (2_900, 3_300), (2_200_000, 2_900_000), &[1, 3, 4],
            &["Private elevator foyer", "Family room", "Wine storage"],
        ),
        plan(
            "plan-e", "The Elm", PlanType::ThreeBedroom, 3, 4.0,
            (3_400, 3_800), (2_600_000, 3_400_000), &[3, 4],
            &["Two terraces", "Media room", "Golf course views"],
        ),
        plan(
            "plan-f", "The Fairway", PlanType::Penthouse, 4, 4.5,
            (4_200, 4_800), (4_200_000, 5_500_000), &[2, 4],
            &["Double-height living room", "Summer kitchen", "Private study"],
        ),
        plan(
            "plan-g", "The Grove", PlanType::Penthouse, 4, 5.0,
            (5_000, 5_600), (5_200_000, 6_800_000), &[3, 4],
            &["Rooftop terrace", "Spa bath", "Staff quarters"],
        ),
        plan(
            "plan-h", "The Highland", PlanType::Estate, 5, 6.0,
            (6_200, 7_200), (7_500_000, 9_800_000), &[4],
            &["Full-floor residence", "Gallery hall", "Three terraces"],
        ),
        plan(
            "plan-i", "The Icon", PlanType::Estate, 5, 6.5,
            (7_800, 8_000), (10_500_000, 14_000_000), &[4],
            &["Top-floor estate", "Private pool terrace", "360-degree views"],
        ),
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_nine_plans() {
        let registry = FloorPlanRegistry::with_defaults();
        assert_eq!(registry.count(), 9);
        assert_eq!(registry.all()[0].id, "plan-a");
        assert_eq!(registry.all()[8].id, "plan-i");
    }

    #[test]
    fn test_only_b_and_c_are_two_bedroom() {
        let registry = FloorPlanRegistry::with_defaults();
        let ids: Vec<&str> = registry
            .by_type(PlanType::TwoBedroom)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["plan-b", "plan-c"]);
    }

    #[test]
    fn test_ranges_are_well_formed() {
        let registry = FloorPlanRegistry::with_defaults();
        for p in registry.all() {
            assert!(p.sqft_min <= p.sqft_max, "{} sqft", p.id);
            assert!(p.price_min <= p.price_max, "{} price", p.id);
            assert!(!p.towers.is_empty(), "{} towers", p.id);
        }
    }

    #[test]
    fn test_plan_type_parse() {
        assert_eq!("2-bedroom".parse::<PlanType>().unwrap(), PlanType::TwoBedroom);
        assert_eq!(" Penthouse ".parse::<PlanType>().unwrap(), PlanType::Penthouse);
        assert!("studio".parse::<PlanType>().is_err());
    }

    #[test]
    fn test_plan_serializes_with_type_label() {
        let registry = FloorPlanRegistry::with_defaults();
        let json = serde_json::to_value(registry.find_by_id("plan-b").unwrap()).unwrap();
        assert_eq!(json["type"], "2-Bedroom");
        assert_eq!(json["sqftMin"], 1_900);
    }

    #[test]
    fn test_representative_sqft() {
        let registry = FloorPlanRegistry::with_defaults();
        let a = registry.find_by_id("plan-a").unwrap();
        assert_eq!(a.representative_sqft(), 1_325);
        assert!(a.in_tower(2));
        assert!(!a.in_tower(4));
    }
}
