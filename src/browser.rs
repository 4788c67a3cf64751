// 🧭 Listing Browsers - filter state → evaluator → paginator, composed
//
// PlaceBrowser: category tabs drive the place list; a category change resets the window.
// FloorPlanBrowser: criteria drive the plan list; a criteria change keeps the window.

use crate::category::{CategoryListener, CategoryTabs};
use crate::entities::{FloorPlan, Place};
use crate::filter::{filter, filter_places, FilterCriteria};
use crate::pagination::Paginator;

// ============================================================================
// PLACE BROWSER
// ============================================================================

#[derive(Debug)]
pub struct PlaceBrowser {
    places: Vec<Place>,
    tabs: CategoryTabs,
    paginator: Paginator,
}

impl PlaceBrowser {
    pub fn new(places: Vec<Place>) -> Self {
        PlaceBrowser {
            places,
            tabs: CategoryTabs::new(),
            paginator: Paginator::new(),
        }
    }

    pub fn active_category(&self) -> &str {
        self.tabs.active()
    }

    pub fn subscribe(&mut self, listener: CategoryListener) {
        self.tabs.subscribe(listener);
    }

    /// Switch tabs. The visible window goes back to one page when the category changes.
    pub fn set_active_category(&mut self, id: &str) {
        if self.tabs.set_active(id) {
            self.paginator.reset();
        }
    }

    pub fn filtered(&self) -> Vec<&Place> {
        filter_places(&self.places, self.tabs.active())
    }

    pub fn visible(&self) -> Vec<&Place> {
        let filtered = self.filtered();
        self.paginator.visible_slice(&filtered).to_vec()
    }

    pub fn has_more(&self) -> bool {
        self.paginator.has_more(self.filtered().len())
    }

    pub fn load_more(&mut self) {
        self.paginator.load_more();
    }

    pub fn window(&self) -> usize {
        self.paginator.window()
    }
}

// ============================================================================
// FLOOR PLAN BROWSER
// ============================================================================

#[derive(Debug)]
pub struct FloorPlanBrowser {
    plans: Vec<FloorPlan>,
    criteria: FilterCriteria,
    paginator: Paginator,
}

impl FloorPlanBrowser {
    pub fn new(plans: Vec<FloorPlan>) -> Self {
        FloorPlanBrowser {
            plans,
            criteria: FilterCriteria::default(),
            paginator: Paginator::new(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the criteria wholesale. The visible window is left as is.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn reset_criteria(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn filtered(&self) -> Vec<&FloorPlan> {
        filter(&self.plans, &self.criteria)
    }

    pub fn visible(&self) -> Vec<&FloorPlan> {
        let filtered = self.filtered();
        self.paginator.visible_slice(&filtered).to_vec()
    }

    pub fn has_more(&self) -> bool {
        self.paginator.has_more(self.filtered().len())
    }

    pub fn load_more(&mut self) {
        self.paginator.load_more();
    }

    pub fn window(&self) -> usize {
        self.paginator.window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{FloorPlanRegistry, PlaceRegistry, PlanType};
    use crate::filter::TypeFilter;
    use crate::pagination::PAGE_SIZE;

    #[test]
    fn test_category_change_resets_window_to_first_page() {
        let registry = PlaceRegistry::with_defaults();
        let mut browser = PlaceBrowser::new(registry.all().to_vec());

        browser.set_active_category("dining");
        browser.load_more();
        assert_eq!(browser.window(), 12);

        browser.set_active_category("all");
        assert_eq!(browser.window(), PAGE_SIZE);

        let shown = browser.visible();
        let visible: Vec<&str> = shown.iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<&str> = registry.all()[..6].iter().map(|p| p.id.as_str()).collect();
        assert_eq!(visible, expected);
        assert!(browser.has_more());
    }

    #[test]
    fn test_reselecting_same_category_keeps_window() {
        let registry = PlaceRegistry::with_defaults();
        let mut browser = PlaceBrowser::new(registry.all().to_vec());

        browser.load_more();
        browser.set_active_category("all");
        assert_eq!(browser.window(), 12);
    }

    #[test]
    fn test_small_category_has_no_more() {
        let registry = PlaceRegistry::with_defaults();
        let mut browser = PlaceBrowser::new(registry.all().to_vec());

        browser.set_active_category("golf");
        assert_eq!(browser.visible().len(), 2);
        assert!(!browser.has_more());
    }

    #[test]
    fn test_unknown_category_yields_empty_state() {
        let registry = PlaceRegistry::with_defaults();
        let mut browser = PlaceBrowser::new(registry.all().to_vec());

        browser.set_active_category("nightlife");
        assert!(browser.visible().is_empty());
        assert!(!browser.has_more());
    }

    #[test]
    fn test_criteria_change_keeps_window() {
        let registry = FloorPlanRegistry::with_defaults();
        let mut browser = FloorPlanBrowser::new(registry.all().to_vec());

        assert_eq!(browser.visible().len(), 6);
        assert!(browser.has_more());
        browser.load_more();
        assert_eq!(browser.visible().len(), 9);

        browser.set_criteria(
            FilterCriteria::default().with_type(TypeFilter::Only(PlanType::TwoBedroom)),
        );
        assert_eq!(browser.window(), 12);

        let shown = browser.visible();
        let ids: Vec<&str> = shown.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["plan-b", "plan-c"]);

        browser.reset_criteria();
        assert_eq!(browser.filtered().len(), 9);
    }
}
