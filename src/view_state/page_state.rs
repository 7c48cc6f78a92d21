//! Pagination cursor over the remote employee collection.

/// Number of employees requested per page.
pub const PAGE_SIZE: u32 = 7;

/// Direction of a pagination intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDelta {
    Prev,
    Next,
}

impl PageDelta {
    fn offset(self) -> i64 {
        match self {
            PageDelta::Prev => -1,
            PageDelta::Next => 1,
        }
    }
}

/// Current pagination cursor.
///
/// `current_page` and `total_count` are only ever replaced with values the
/// server reported; navigation intents are checked against them but do not
/// move them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: u32,
    page_size: u32,
    total_count: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl PageState {
    /// Creates a cursor on page 1 of an empty collection.
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_count: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// `ceil(total_count / page_size)`, never less than 1.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_count.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    /// The page a navigation intent would land on, or `None` if it would
    /// leave `[1, total_pages]`.
    ///
    /// Derived from the current counts every time it is called.
    pub fn target(&self, delta: PageDelta) -> Option<u32> {
        let target = i64::from(self.current_page) + delta.offset();
        if target < 1 || target > i64::from(self.total_pages()) {
            return None;
        }
        u32::try_from(target).ok()
    }

    /// Moves back to the first page without touching the total.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Applies a server response.
    ///
    /// The total is taken verbatim. The page is taken from the server but
    /// kept inside `[1, total_pages]` so the displayed cursor is always
    /// valid. Returns true if the reported page had to be adjusted.
    pub fn apply(&mut self, reported_page: u32, total_count: u64) -> bool {
        self.total_count = total_count;
        let page = reported_page.clamp(1, self.total_pages());
        self.current_page = page;
        page != reported_page
    }

    /// Whether the "previous" control should be enabled.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the "next" control should be enabled.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Snapshot for the renderer.
    pub fn view(&self) -> PaginationView {
        PaginationView {
            current_page: self.current_page,
            total_pages: self.total_pages(),
            total_count: self.total_count,
            prev_enabled: self.has_prev(),
            next_enabled: self.has_next(),
        }
    }
}

/// What the pagination controls should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationView {
    /// Label such as `Page 2 of 3`.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

impl Default for PaginationView {
    fn default() -> Self {
        PageState::default().view()
    }
}
