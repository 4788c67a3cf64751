// 📄 Paginator - the VisibleWindow over a filtered list
//
// "Load more" grows the window by a fixed page; nothing is ever un-loaded
// except through an explicit reset.

/// Cards added per "load more" and shown on first render
pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    window: usize,
    page_size: usize,
}

impl Paginator {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Paginator {
            window: page_size,
            page_size,
        }
    }

    /// Paginator already grown to `window` items (at least one page)
    pub fn with_window(window: usize) -> Self {
        Paginator {
            window: window.max(PAGE_SIZE),
            page_size: PAGE_SIZE,
        }
    }

    /// Number of items currently allowed on screen
    pub fn window(&self) -> usize {
        self.window
    }

    /// First `window` items (or all of them if fewer)
    pub fn visible_slice<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        &filtered[..self.window.min(filtered.len())]
    }

    pub fn has_more(&self, filtered_len: usize) -> bool {
        self.window < filtered_len
    }

    pub fn load_more(&mut self) {
        self.window = self.window.saturating_add(self.page_size);
    }

    /// Back to the first page
    pub fn reset(&mut self) {
        self.window = self.page_size;
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}
