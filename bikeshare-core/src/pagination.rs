use crate::{BikeshareError, TripRecord};

/// number of raw records shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// one window of records returned by a [`PageCursor`].
#[derive(Clone, Debug, PartialEq)]
pub struct Page<'a> {
    pub records: &'a [TripRecord],
    /// true if more records follow this page
    pub has_more: bool,
}

impl Page<'_> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// walks a record collection in fixed-size pages. start over by building a
/// new cursor over the same collection.
#[derive(Clone, Debug)]
pub struct PageCursor<'a> {
    records: &'a [TripRecord],
    position: usize,
    page_size: usize,
}

impl<'a> PageCursor<'a> {
    pub fn new(records: &'a [TripRecord]) -> Self {
        Self {
            records,
            position: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(
        records: &'a [TripRecord],
        page_size: usize,
    ) -> Result<Self, BikeshareError> {
        if page_size == 0 {
            return Err(BikeshareError::InvalidInput {
                input: page_size.to_string(),
                expected: String::from("a page size of at least 1"),
            });
        }
        Ok(Self {
            records,
            position: 0,
            page_size,
        })
    }

    /// returns the next page and advances the cursor. once the collection is
    /// exhausted every call returns an empty page with `has_more` false.
    pub fn next_page(&mut self) -> Page<'a> {
        let start = self.position.min(self.records.len());
        let end = start.saturating_add(self.page_size).min(self.records.len());
        self.position = end;
        Page {
            records: &self.records[start..end],
            has_more: end < self.records.len(),
        }
    }
}

impl<'a> Iterator for PageCursor<'a> {
    type Item = &'a [TripRecord];

    /// yields non-empty pages only.
    fn next(&mut self) -> Option<Self::Item> {
        let page = self.next_page();
        if page.is_empty() {
            None
        } else {
            Some(page.records)
        }
    }
}
