// 🗂️ Category Tab Controller - one active category at a time
//
// Radio semantics. Ids are not validated: an unknown id is a legal state
// that matches no places.

use crate::entities::ALL_CATEGORIES;

/// Called with (previous, current) after the active category changes
pub type CategoryListener = Box<dyn FnMut(&str, &str) + Send>;

pub struct CategoryTabs {
    active: String,
    listeners: Vec<CategoryListener>,
}

impl CategoryTabs {
    /// Starts on "all"
    pub fn new() -> Self {
        CategoryTabs {
            active: ALL_CATEGORIES.to_string(),
            listeners: Vec::new(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn subscribe(&mut self, listener: CategoryListener) {
        self.listeners.push(listener);
    }

    /// Make `id` the active category.
    ///
    /// Listeners run only on an actual change; re-selecting the active tab is a no-op.
    /// Returns whether the active category changed.
    pub fn set_active(&mut self, id: &str) -> bool {
        if self.active == id {
            return false;
        }

        let previous = std::mem::replace(&mut self.active, id.to_string());
        log::debug!("category changed: {} -> {}", previous, self.active);

        for listener in self.listeners.iter_mut() {
            listener(&previous, &self.active);
        }
        true
    }
}

impl Default for CategoryTabs {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CategoryTabs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryTabs")
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
