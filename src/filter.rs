// 🔎 Filter Predicate Evaluator - narrows the floor plan table
//
// Pure and deterministic: safe to call on every input change.
// Order of the input table is preserved in the output.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::{FloorPlan, Place, PlanType, ALL_CATEGORIES};

pub const DEFAULT_MIN_SIZE: u32 = 0;
pub const DEFAULT_MAX_SIZE: u32 = 10_000;
pub const DEFAULT_MIN_PRICE: u64 = 0;
pub const DEFAULT_MAX_PRICE: u64 = 15_000_000;

// ============================================================================
// TYPE FILTER
// ============================================================================

/// "all" or a single plan type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeFilter {
    All,
    Only(PlanType),
}

impl TypeFilter {
    pub fn accepts(&self, plan_type: PlanType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == plan_type,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str("all"),
            TypeFilter::Only(t) => f.write_str(t.as_str()),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(TypeFilter::All)
        } else {
            Ok(TypeFilter::Only(s.parse()?))
        }
    }
}

impl TryFrom<String> for TypeFilter {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TypeFilter> for String {
    fn from(value: TypeFilter) -> Self {
        value.to_string()
    }
}

// ============================================================================
// FILTER CRITERIA
// ============================================================================

/// Active filter state. Replaced wholesale on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(rename = "type")]
    pub plan_type: TypeFilter,
    pub min_size: u32,
    pub max_size: u32,
    pub min_price: u64,
    pub max_price: u64,
    pub tower_id: Option<u8>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            plan_type: TypeFilter::All,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            tower_id: None,
        }
    }
}

impl FilterCriteria {
    pub fn with_type(mut self, plan_type: TypeFilter) -> Self {
        self.plan_type = plan_type;
        self
    }

    pub fn with_size(mut self, min: u32, max: u32) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    pub fn with_price(mut self, min: u64, max: u64) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_tower(mut self, tower_id: Option<u8>) -> Self {
        self.tower_id = tower_id;
        self
    }

    /// Check that both ranges are ordered.
    ///
    /// `filter` itself never rejects criteria: an inverted range just matches nothing.
    /// Callers accepting external input (the HTTP layer) use this to answer 400.
    pub fn validate(&self) -> Result<()> {
        if self.min_size > self.max_size {
            bail!("minSize ({}) is greater than maxSize ({})", self.min_size, self.max_size);
        }
        if self.min_price > self.max_price {
            bail!("minPrice ({}) is greater than maxPrice ({})", self.min_price, self.max_price);
        }
        Ok(())
    }

    /// Does this floor plan satisfy every active constraint?
    pub fn matches(&self, plan: &FloorPlan) -> bool {
        self.plan_type.accepts(plan.plan_type)
            && overlaps(plan.sqft_min as u64, plan.sqft_max as u64, self.min_size as u64, self.max_size as u64)
            && overlaps(plan.price_min, plan.price_max, self.min_price, self.max_price)
            && self.tower_id.map_or(true, |tower| plan.in_tower(tower))
    }
}

/// Inclusive range overlap. An inverted range on either side overlaps nothing.
fn overlaps(a_min: u64, a_max: u64, b_min: u64, b_max: u64) -> bool {
    a_min <= a_max && b_min <= b_max && a_min <= b_max && b_min <= a_max
}

// ============================================================================
// EVALUATORS
// ============================================================================

/// Floor plans matching `criteria`, in table order
pub fn filter<'a>(entities: &'a [FloorPlan], criteria: &FilterCriteria) -> Vec<&'a FloorPlan> {
    entities.iter().filter(|plan| criteria.matches(plan)).collect()
}

/// Places in `category`, or every place for "all".
/// Unknown ids are not validated and yield no matches.
pub fn filter_places<'a>(places: &'a [Place], category: &str) -> Vec<&'a Place> {
    places
        .iter()
        .filter(|place| category == ALL_CATEGORIES || place.category == category)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{FloorPlanRegistry, PlaceRegistry};
    use proptest::prelude::*;

    fn ids<'a>(plans: &[&'a FloorPlan]) -> Vec<&'a str> {
        plans.iter().map(|&p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_criteria_return_everything_in_order() {
        let registry = FloorPlanRegistry::with_defaults();
        let result = filter(registry.all(), &FilterCriteria::default());

        assert_eq!(result.len(), registry.count());
        for (got, expected) in result.iter().zip(registry.all()) {
            assert_eq!(got.id, expected.id);
        }
    }

    #[test]
    fn test_two_bedroom_scenario() {
        let registry = FloorPlanRegistry::with_defaults();
        let criteria = FilterCriteria {
            plan_type: TypeFilter::Only(PlanType::TwoBedroom),
            min_size: 0,
            max_size: 10_000,
            min_price: 0,
            max_price: 15_000_000,
            tower_id: None,
        };

        assert_eq!(ids(&filter(registry.all(), &criteria)), vec!["plan-b", "plan-c"]);
    }

    #[test]
    fn test_size_range_is_inclusive_overlap() {
        let registry = FloorPlanRegistry::with_defaults();

        // plan-a tops out at exactly 1,450 sqft
        let criteria = FilterCriteria::default().with_size(1_450, 1_900);
        assert_eq!(ids(&filter(registry.all(), &criteria)), vec!["plan-a", "plan-b"]);

        let criteria = FilterCriteria::default().with_size(1_451, 1_899);
        assert!(filter(registry.all(), &criteria).is_empty());
    }

    #[test]
    fn test_price_range_overlap() {
        let registry = FloorPlanRegistry::with_defaults();
        let criteria = FilterCriteria::default().with_price(5_000_000, 7_600_000);

        assert_eq!(ids(&filter(registry.all(), &criteria)), vec!["plan-f", "plan-g", "plan-h"]);
    }

    #[test]
    fn test_tower_filter() {
        let registry = FloorPlanRegistry::with_defaults();
        let criteria = FilterCriteria::default().with_tower(Some(1));

        assert_eq!(ids(&filter(registry.all(), &criteria)), vec!["plan-a", "plan-b", "plan-d"]);
    }

    #[test]
    fn test_inverted_range_matches_nothing_and_fails_validation() {
        let registry = FloorPlanRegistry::with_defaults();
        let criteria = FilterCriteria::default().with_price(3_000_000, 1_000_000);

        assert!(filter(registry.all(), &criteria).is_empty());
        assert!(criteria.validate().is_err());
        assert!(FilterCriteria::default().validate().is_ok());
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let registry = FloorPlanRegistry::with_defaults();
        let criteria = FilterCriteria::default()
            .with_type(TypeFilter::Only(PlanType::Estate))
            .with_tower(Some(1));

        assert!(filter(registry.all(), &criteria).is_empty());
    }

    #[test]
    fn test_type_filter_parsing_and_serde() {
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!(
            "3-Bedroom".parse::<TypeFilter>().unwrap(),
            TypeFilter::Only(PlanType::ThreeBedroom)
        );
        assert!("loft".parse::<TypeFilter>().is_err());

        let json = serde_json::to_value(FilterCriteria::default()).unwrap();
        assert_eq!(json["type"], "all");
        assert_eq!(json["maxPrice"], 15_000_000);
        assert!(json["towerId"].is_null());

        let parsed: FilterCriteria = serde_json::from_value(serde_json::json!({
            "type": "Penthouse",
            "minSize": 0,
            "maxSize": 6000,
            "minPrice": 0,
            "maxPrice": 9000000,
            "towerId": 4
        }))
        .unwrap();
        assert_eq!(parsed.plan_type, TypeFilter::Only(PlanType::Penthouse));
        assert_eq!(parsed.tower_id, Some(4));
    }

    #[test]
    fn test_filter_places_by_category() {
        let registry = PlaceRegistry::with_defaults();

        let dining = filter_places(registry.all(), "dining");
        assert_eq!(dining.len(), 4);
        assert!(dining.iter().all(|p| p.category == "dining"));

        assert_eq!(filter_places(registry.all(), "all").len(), registry.all().len());
        assert!(filter_places(registry.all(), "nightlife").is_empty());
    }

    fn type_filter_strategy() -> impl Strategy<Value = TypeFilter> {
        prop_oneof![
            Just(TypeFilter::All),
            proptest::sample::select(PlanType::ALL.to_vec()).prop_map(TypeFilter::Only),
        ]
    }

    proptest! {
        /// A type-restricted filter never lets a different type through
        #[test]
        fn prop_type_mismatch_is_excluded(
            plan_type in type_filter_strategy(),
            min_size in 0u32..9_000,
            max_price in 0u64..16_000_000,
            tower in proptest::option::of(1u8..=4),
        ) {
            let registry = FloorPlanRegistry::with_defaults();
            let criteria = FilterCriteria::default()
                .with_type(plan_type)
                .with_size(min_size, DEFAULT_MAX_SIZE)
                .with_price(0, max_price)
                .with_tower(tower);

            for plan in filter(registry.all(), &criteria) {
                prop_assert!(plan_type.accepts(plan.plan_type));
                prop_assert!(criteria.matches(plan));
            }
        }

        /// Results are always an order-preserving subsequence of the input
        #[test]
        fn prop_result_is_ordered_subset(
            plan_type in type_filter_strategy(),
            min_size in 0u32..10_000,
            max_size in 0u32..10_000,
        ) {
            let registry = FloorPlanRegistry::with_defaults();
            let criteria = FilterCriteria::default()
                .with_type(plan_type)
                .with_size(min_size, max_size);

            let result = filter(registry.all(), &criteria);
            let positions: Vec<usize> = result
                .iter()
                .map(|p| registry.all().iter().position(|q| q.id == p.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
