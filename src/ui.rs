use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use turnberry_place::{
    ComparisonSelection, Config, Debouncer, FilterCriteria, FloorPlan, FloorPlanBrowser,
    FloorPlanRegistry, PlaceBrowser, PlaceRegistry, PlanType, ScrollSpy, SelectionState,
    Testimonial, TestimonialCarousel, TypeFilter, MAX_COMPARE, PLACE_CATEGORIES,
};

const PRICE_STEP: u64 = 500_000;
const FILTER_SETTLE: Duration = Duration::from_millis(300);
const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    FloorPlans,
    Neighborhood,
    Compare,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::FloorPlans => Page::Neighborhood,
            Page::Neighborhood => Page::Compare,
            Page::Compare => Page::FloorPlans,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::FloorPlans => Page::Compare,
            Page::Neighborhood => Page::FloorPlans,
            Page::Compare => Page::Neighborhood,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::FloorPlans => "Floor Plans",
            Page::Neighborhood => "Neighborhood",
            Page::Compare => "Compare",
        }
    }
}

pub struct App {
    pub registry: FloorPlanRegistry,
    pub plans: FloorPlanBrowser,
    pub places: PlaceBrowser,
    pub comparison: ComparisonSelection,
    pub testimonials: Vec<Testimonial>,
    pub carousel: TestimonialCarousel,
    pub pending_max_price: Debouncer<u64>,
    pub plan_state: TableState,
    pub place_state: TableState,
    pub current_page: Page,
    pub show_detail: bool,
}

impl App {
    pub fn new(config: &Config, testimonials: Vec<Testimonial>) -> Self {
        let registry = FloorPlanRegistry::with_defaults();
        let plans = FloorPlanBrowser::new(registry.all().to_vec());
        let places = PlaceBrowser::new(PlaceRegistry::with_defaults().all().to_vec());
        let carousel = TestimonialCarousel::new(
            testimonials.len(),
            config.carousel_interval,
            config.reduced_motion,
        );

        let mut plan_state = TableState::default();
        plan_state.select(Some(0));
        let mut place_state = TableState::default();
        place_state.select(Some(0));

        Self {
            registry,
            plans,
            places,
            comparison: ComparisonSelection::new(),
            testimonials,
            carousel,
            pending_max_price: Debouncer::new(FILTER_SETTLE),
            plan_state,
            place_state,
            current_page: Page::FloorPlans,
            show_detail: false,
        }
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    pub fn selected_plan(&self) -> Option<&FloorPlan> {
        let visible = self.plans.visible();
        self.plan_state.selected().and_then(|i| visible.get(i).copied())
    }

    /// Apply criteria immediately and move the cursor back to the top
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) {
        self.plans.set_criteria(criteria);
        self.reset_plan_cursor();
    }

    pub fn apply_type(&mut self, plan_type: TypeFilter) {
        let criteria = self.plans.criteria().with_type(plan_type);
        self.apply_criteria(criteria);
    }

    /// Cycle the tower filter: none → 1 → 2 → 3 → 4 → none
    pub fn cycle_tower(&mut self) {
        let next = match self.plans.criteria().tower_id {
            None => Some(1),
            Some(4) => None,
            Some(id) => Some(id + 1),
        };
        let criteria = self.plans.criteria().with_tower(next);
        self.apply_criteria(criteria);
    }

    /// Nudge the max price. Key repeats are debounced before the filter runs.
    pub fn adjust_max_price(&mut self, raise: bool, now: Instant) {
        let min_price = self.plans.criteria().min_price;
        let current = self
            .pending_max_price
            .flush()
            .unwrap_or(self.plans.criteria().max_price);
        let max_price = if raise {
            current.saturating_add(PRICE_STEP)
        } else {
            current.saturating_sub(PRICE_STEP).max(min_price)
        };
        self.pending_max_price.push(max_price, now);
    }

    /// Max price as shown: the pending value while keys are still arriving
    pub fn displayed_max_price(&self) -> u64 {
        self.pending_max_price
            .peek()
            .copied()
            .unwrap_or(self.plans.criteria().max_price)
    }

    /// Merge debounced price input onto the live criteria once it has gone quiet
    pub fn settle(&mut self, now: Instant) {
        if let Some(max_price) = self.pending_max_price.poll(now) {
            let criteria = *self.plans.criteria();
            self.apply_criteria(criteria.with_price(criteria.min_price, max_price));
        }
    }

    /// Plan type group under the cursor, tracked like a table of contents
    pub fn current_section(&self) -> Option<String> {
        let mut sections: Vec<(String, u32)> = Vec::new();
        for (row, plan) in self.plans.visible().iter().enumerate() {
            let id = plan.plan_type.as_str();
            if sections.last().map_or(true, |(last, _)| last != id) {
                sections.push((id.to_string(), row as u32));
            }
        }
        let row = self.plan_state.selected()? as u32;
        ScrollSpy::new(sections, 0).active_at(row).map(str::to_string)
    }

    /// Run timers: settle filter input and advance the carousel
    pub fn tick(&mut self, elapsed: Duration, now: Instant) {
        self.settle(now);
        self.carousel.tick(elapsed);
    }

    pub fn clear_filter(&mut self) {
        self.pending_max_price.flush();
        self.plans.reset_criteria();
        self.reset_plan_cursor();
    }

    pub fn toggle_compare(&mut self) {
        if let Some(id) = self.selected_plan().map(|p| p.id.clone()) {
            self.comparison.toggle(&id);
        }
    }

    pub fn load_more(&mut self) {
        match self.current_page {
            Page::FloorPlans => self.plans.load_more(),
            Page::Neighborhood => self.places.load_more(),
            Page::Compare => {}
        }
    }

    /// Step through the category tabs
    pub fn shift_category(&mut self, forward: bool) {
        let current = PLACE_CATEGORIES
            .iter()
            .position(|c| *c == self.places.active_category())
            .unwrap_or(0);
        let len = PLACE_CATEGORIES.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.places.set_active_category(PLACE_CATEGORIES[next]);
        self.place_state.select(Some(0));
    }

    fn reset_plan_cursor(&mut self) {
        if self.plans.visible().is_empty() {
            self.plan_state.select(None);
        } else {
            self.plan_state.select(Some(0));
        }
    }

    fn move_cursor(&mut self, forward: bool) {
        let (state, len) = match self.current_page {
            Page::FloorPlans => (&mut self.plan_state, self.plans.visible().len()),
            Page::Neighborhood => (&mut self.place_state, self.places.visible().len()),
            Page::Compare => return,
        };
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) if forward => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn next(&mut self) {
        self.move_cursor(true);
    }

    pub fn previous(&mut self) {
        self.move_cursor(false);
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    session_result(res)
}

/// Outcome of the event loop, reported once the terminal is restored
fn session_result(res: io::Result<()>) -> Result<()> {
    if let Err(err) = &res {
        log::error!("terminal browser failed: {:?}", err);
    }
    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Enter => app.toggle_detail(),
                    KeyCode::Tab => {
                        if key.modifiers.contains(KeyModifiers::SHIFT) {
                            app.previous_page();
                        } else {
                            app.next_page();
                        }
                    }
                    KeyCode::BackTab => app.previous_page(),
                    KeyCode::Char('c') => app.clear_filter(),
                    KeyCode::Char('x') => app.comparison.clear(),
                    KeyCode::Char(' ') if app.current_page == Page::FloorPlans => app.toggle_compare(),
                    KeyCode::Char('m') => app.load_more(),
                    KeyCode::Char('t') if app.current_page == Page::FloorPlans => app.cycle_tower(),
                    KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_max_price(true, Instant::now()),
                    KeyCode::Char('-') => app.adjust_max_price(false, Instant::now()),
                    KeyCode::Char(digit @ '1'..='6') if app.current_page == Page::FloorPlans => {
                        let plan_type = match digit {
                            '1' => TypeFilter::All,
                            d => TypeFilter::Only(PlanType::ALL[(d as usize) - ('2' as usize)]),
                        };
                        app.apply_type(plan_type);
                    }
                    KeyCode::Right if app.current_page == Page::Neighborhood => app.shift_category(true),
                    KeyCode::Left if app.current_page == Page::Neighborhood => app.shift_category(false),
                    KeyCode::Char(']') => app.carousel.next(),
                    KeyCode::Char('[') => app.carousel.prev(),
                    KeyCode::Down | KeyCode::Char('j') => app.next(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous(),
                    _ => {}
                }
            }
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick), now);
        last_tick = now;
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(4), // Testimonial carousel
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    if app.show_detail && app.current_page == Page::FloorPlans {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        render_plans(f, content_chunks[0], app);
        render_plan_detail(f, content_chunks[1], app);
    } else {
        match app.current_page {
            Page::FloorPlans => render_plans(f, chunks[1], app),
            Page::Neighborhood => render_places(f, chunks[1], app),
            Page::Compare => render_compare(f, chunks[1], app),
        }
    }

    render_testimonial(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);
}

fn key_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn header_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, page) in [Page::FloorPlans, Page::Neighborhood, Page::Compare].iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }
        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tab_spans.push(Span::styled(page.title().to_string(), style));
    }

    let compare_color = match app.comparison.state() {
        SelectionState::Empty => Color::DarkGray,
        SelectionState::Partial(_) => Color::Cyan,
        SelectionState::Full => Color::Green,
    };
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Comparing {}/{}", app.comparison.len(), MAX_COMPARE),
        Style::default().fg(compare_color),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Turnberry Place "),
    );

    f.render_widget(header, area);
}

fn render_plans(f: &mut Frame, area: Rect, app: &mut App) {
    let criteria = *app.plans.criteria();
    let filtered_len = app.plans.filtered().len();
    let title = format!(
        " Floor Plans - type: {} | tower: {} | max {} | {} of {} shown{}{} ",
        criteria.plan_type,
        criteria.tower_id.map_or("any".to_string(), |t| t.to_string()),
        format_price(app.displayed_max_price()),
        app.plans.visible().len(),
        filtered_len,
        if app.plans.has_more() { " (m: more)" } else { "" },
        app.current_section().map_or(String::new(), |s| format!(" | in {}", s)),
    );

    if filtered_len == 0 {
        let empty = Paragraph::new("\n  No residences match these filters. Press c to clear.")
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        ["", "Plan", "Type", "Sq Ft", "Price", "Towers"]
            .iter()
            .map(|h| Cell::from(*h).style(header_style())),
    )
    .style(Style::default().bg(Color::DarkGray))
    .height(1);

    let rows: Vec<Row> = app
        .plans
        .visible()
        .iter()
        .map(|plan| {
            let marker = if app.comparison.contains(&plan.id) { "◆" } else { " " };
            Row::new(vec![
                Cell::from(marker).style(Style::default().fg(Color::Green)),
                Cell::from(plan.name.clone()),
                Cell::from(plan.plan_type.as_str()).style(Style::default().fg(type_color(plan.plan_type))),
                Cell::from(format!("{}–{}", plan.sqft_min, plan.sqft_max)),
                Cell::from(format!("{}–{}", format_price(plan.price_min), format_price(plan.price_max))),
                Cell::from(
                    plan.towers
                        .iter()
                        .map(|t| t.to_string())
                        .collect::<Vec<_>>()
                        .join(","),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(16),
            Constraint::Length(11),
            Constraint::Length(13),
            Constraint::Length(18),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title),
    )
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.plan_state);
}

fn render_plan_detail(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Residence Details ");

    let plan = match app.selected_plan() {
        Some(p) => p,
        None => {
            f.render_widget(Paragraph::new("No floor plan selected").block(block), area);
            return;
        }
    };

    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut content = vec![
        Line::from(""),
        Line::from(vec![Span::styled("  Plan: ", label), Span::raw(plan.name.clone())]),
        Line::from(vec![
            Span::styled("  Layout: ", label),
            Span::raw(format!("{} bed / {} bath", plan.bedrooms, plan.bathrooms)),
        ]),
        Line::from(vec![
            Span::styled("  Typical size: ", label),
            Span::raw(format!("{} sq ft", plan.representative_sqft())),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  FEATURES",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
    ];
    content.extend(plan.features.iter().map(|feature| Line::from(format!("  • {}", feature))));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "  Space to compare, Enter to close",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_places(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let mut tabs = vec![Span::raw(" ")];
    for category in PLACE_CATEGORIES {
        let style = if category == app.places.active_category() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tabs.push(Span::styled(category.to_string(), style));
        tabs.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(tabs)), chunks[0]);

    let total = app.places.filtered().len();
    let title = format!(
        " Nearby - {} of {}{} ",
        app.places.visible().len(),
        total,
        if app.places.has_more() { " (m: more)" } else { "" },
    );

    if total == 0 {
        let empty = Paragraph::new("\n  Nothing nearby in this category yet.")
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let rows: Vec<Row> = app
        .places
        .visible()
        .iter()
        .map(|place| {
            Row::new(vec![
                Cell::from(place.name.clone()),
                Cell::from(place.category.clone()).style(Style::default().fg(Color::Cyan)),
                Cell::from(format!("{:.1} mi", place.distance_miles)),
                Cell::from(place.description.clone()),
            ])
        })
        .collect();

    let header = Row::new(
        ["Name", "Category", "Distance", "About"]
            .iter()
            .map(|h| Cell::from(*h).style(header_style())),
    )
    .style(Style::default().bg(Color::DarkGray));

    let table = Table::new(
        rows,
        [
            Constraint::Length(24),
            Constraint::Length(14),
            Constraint::Length(9),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, chunks[1], &mut app.place_state);
}

fn render_compare(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.comparison.resolve(&app.registry);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Side-by-side (x: clear all) ");

    if selected.is_empty() {
        let hint = Paragraph::new("\n  Select up to three floor plans with Space on the Floor Plans page.")
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let mut header = vec![Cell::from("")];
    header.extend(selected.iter().map(|p| Cell::from(p.name.clone()).style(header_style())));

    let attributes: [(&str, fn(&FloorPlan) -> String); 5] = [
        ("Type", |p| p.plan_type.to_string()),
        ("Bedrooms", |p| p.bedrooms.to_string()),
        ("Bathrooms", |p| p.bathrooms.to_string()),
        ("Sq Ft", |p| format!("{}–{}", p.sqft_min, p.sqft_max)),
        ("Price", |p| format!("{}–{}", format_price(p.price_min), format_price(p.price_max))),
    ];

    let rows: Vec<Row> = attributes
        .iter()
        .map(|(name, value)| {
            let mut cells = vec![Cell::from(*name).style(Style::default().fg(Color::Cyan))];
            cells.extend(selected.iter().map(|p| Cell::from(value(*p))));
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(12)];
    widths.extend(selected.iter().map(|_| Constraint::Length(22)));

    let table = Table::new(rows, widths).header(Row::new(header)).block(block);
    f.render_widget(table, area);
}

fn render_testimonial(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.testimonials.get(app.carousel.index()) {
        Some(t) => vec![
            Line::from(Span::styled(
                format!("  “{}”", t.quote),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                format!("  - {}, {}", t.author, t.residence),
                Style::default().fg(Color::DarkGray),
            )),
        ],
        None => vec![Line::from("")],
    };

    let title = format!(
        " Residents {}/{} ",
        app.carousel.index() + 1,
        app.carousel.len().max(1)
    );
    let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![];

    if app.pending_max_price.is_pending() {
        status_spans.push(Span::styled(" updating… ", Style::default().fg(Color::Green)));
        status_spans.push(Span::raw("|"));
    }

    let hints: &[(&str, &str)] = match app.current_page {
        Page::FloorPlans => &[
            ("1-6", " Type | "),
            ("t", " Tower | "),
            ("+/-", " Max price | "),
            ("Space", " Compare | "),
            ("c", " Clear | "),
        ],
        Page::Neighborhood => &[("←/→", " Category | ")],
        Page::Compare => &[("x", " Clear | ")],
    };

    status_spans.push(Span::raw(" "));
    for (key, label) in hints {
        status_spans.push(Span::styled(*key, key_style()));
        status_spans.push(Span::raw(*label));
    }
    status_spans.push(Span::styled("m", key_style()));
    status_spans.push(Span::raw(" More | "));
    status_spans.push(Span::styled("Tab", key_style()));
    status_spans.push(Span::raw(" Page | "));
    status_spans.push(Span::styled("[/]", key_style()));
    status_spans.push(Span::raw(" Quotes | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn type_color(plan_type: PlanType) -> Color {
    match plan_type {
        PlanType::OneBedroom => Color::White,
        PlanType::TwoBedroom => Color::Cyan,
        PlanType::ThreeBedroom => Color::Green,
        PlanType::Penthouse => Color::Yellow,
        PlanType::Estate => Color::Magenta,
    }
}

/// $1.3M / $850K
fn format_price(amount: u64) -> String {
    if amount >= 1_000_000 {
        let millions = format!("{:.2}", amount as f64 / 1_000_000.0);
        format!("${}M", millions.trim_end_matches('0').trim_end_matches('.'))
    } else {
        format!("${}K", amount / 1_000)
    }
}
