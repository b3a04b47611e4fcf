// src/domain/article/criteria.rs
//! Offset pagination for the article board.
//!
//! `Criteria` is what a list request asks for; `PageMaker` turns it plus the
//! total row count into the page links shown under the list.

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE_NUM: u32 = 10;
pub const MAX_PER_PAGE_NUM: u32 = 100;
pub const DISPLAY_PAGE_NUM: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criteria {
    page: u32,
    per_page_num: u32,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page_num: DEFAULT_PER_PAGE_NUM,
        }
    }
}

impl Criteria {
    /// Normalises raw request input; never fails.
    ///
    /// Pages below 1 are clamped to 1, page sizes outside `1..=100` fall back
    /// to the default of 10.
    pub fn new(page: Option<i64>, per_page_num: Option<i64>) -> Self {
        let page = page
            .map(|p| u32::try_from(p.max(1)).unwrap_or(u32::MAX))
            .unwrap_or(DEFAULT_PAGE);

        let per_page_num = per_page_num
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| (1..=MAX_PER_PAGE_NUM).contains(n))
            .unwrap_or(DEFAULT_PER_PAGE_NUM);

        Self { page, per_page_num }
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn per_page_num(&self) -> u32 {
        self.per_page_num
    }

    /// Row offset of the first article on this page.
    pub fn page_start(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page_num)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page_num)
    }

    pub fn make_query(&self, page: u32) -> String {
        format!("?page={page}&perPageNum={}", self.per_page_num)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMaker {
    criteria: Criteria,
    total_count: u64,
    start_page: u32,
    end_page: u32,
    prev: bool,
    next: bool,
}

impl PageMaker {
    pub fn new(criteria: Criteria, total_count: u64) -> Self {
        let per_page = u64::from(criteria.per_page_num());

        let block_end = criteria
            .page()
            .div_ceil(DISPLAY_PAGE_NUM)
            .saturating_mul(DISPLAY_PAGE_NUM);
        let start_page = block_end - DISPLAY_PAGE_NUM + 1;

        let last_page = u32::try_from(total_count.div_ceil(per_page)).unwrap_or(u32::MAX);
        let end_page = block_end.min(last_page);

        // Past the last page the block is empty, so there is nothing to go back to.
        let prev = start_page != 1 && start_page <= end_page;
        let next = u64::from(end_page) * per_page < total_count;

        Self {
            criteria,
            total_count,
            start_page,
            end_page,
            prev,
            next,
        }
    }

    pub const fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    pub const fn start_page(&self) -> u32 {
        self.start_page
    }

    pub const fn end_page(&self) -> u32 {
        self.end_page
    }

    pub const fn prev(&self) -> bool {
        self.prev
    }

    pub const fn next(&self) -> bool {
        self.next
    }

    /// Page numbers to render as links; empty when there are no rows.
    pub fn pages(&self) -> Vec<u32> {
        (self.start_page..=self.end_page).collect()
    }

    pub fn make_query(&self, page: u32) -> String {
        self.criteria.make_query(page)
    }
}
