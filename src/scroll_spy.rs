// 📑 Scroll Spy - which table-of-contents section is on screen

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    /// (section id, top offset), sorted by offset
    sections: Vec<(String, u32)>,
    threshold: u32,
}

impl ScrollSpy {
    pub fn new(mut sections: Vec<(String, u32)>, threshold: u32) -> Self {
        sections.sort_by_key(|(_, offset)| *offset);
        ScrollSpy { sections, threshold }
    }

    /// Last section whose top has scrolled within `threshold` of the viewport top
    pub fn active_at(&self, scroll_y: u32) -> Option<&str> {
        let line = scroll_y.saturating_add(self.threshold);
        self.sections
            .iter()
            .take_while(|(_, offset)| *offset <= line)
            .last()
            .map(|(id, _)| id.as_str())
    }
}
