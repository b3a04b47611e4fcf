use crate::domain::article::PageMaker;

/// One page of a list together with the navigation for the surrounding pages.
#[derive(Debug, Clone)]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub page_maker: PageMaker,
}

impl<T> OffsetPage<T> {
    pub const fn new(items: Vec<T>, page_maker: PageMaker) -> Self {
        Self { items, page_maker }
    }
}
