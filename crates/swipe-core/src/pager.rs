//! Page index bookkeeping and the prev/next enabled state derived from it

/// Current page within a fixed number of pages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    page_count: usize,
}

impl Pager {
    pub fn new(page_count: usize) -> Self {
        Self {
            current: 0,
            page_count,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Replace the page count and go back to the first page
    pub fn reset(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.current = 0;
    }

    /// Jump to `page` without bounds checking.
    ///
    /// Indicator clicks are trusted to carry a valid index.
    pub fn set_current(&mut self, page: usize) {
        self.current = page;
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.page_count
    }

    pub fn prev_disabled(&self) -> bool {
        self.is_first()
    }

    pub fn next_disabled(&self) -> bool {
        self.is_last()
    }

    /// Index of the previous page, if there is one
    pub fn prev_index(&self) -> Option<usize> {
        if self.is_first() {
            None
        } else {
            Some(self.current - 1)
        }
    }

    /// Index of the next page, if there is one
    pub fn next_index(&self) -> Option<usize> {
        if self.is_last() {
            None
        } else {
            Some(self.current + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pager_starts_on_first_page() {
        let pager = Pager::new(3);
        assert_eq!(pager.current(), 0);
        assert!(pager.prev_disabled());
        assert!(!pager.next_disabled());
    }

    #[test]
    fn test_single_page_disables_both() {
        let pager = Pager::new(1);
        assert!(pager.prev_disabled());
        assert!(pager.next_disabled());
        assert_eq!(pager.prev_index(), None);
        assert_eq!(pager.next_index(), None);
    }

    #[test]
    fn test_neighbours() {
        let mut pager = Pager::new(3);
        assert_eq!(pager.next_index(), Some(1));
        pager.set_current(2);
        assert_eq!(pager.next_index(), None);
        assert_eq!(pager.prev_index(), Some(1));
        assert!(pager.next_disabled());
        assert!(!pager.prev_disabled());
    }

    #[test]
    fn test_reset() {
        let mut pager = Pager::new(4);
        pager.set_current(2);
        pager.reset(2);
        assert_eq!(pager.current(), 0);
        assert_eq!(pager.page_count(), 2);
    }
}
