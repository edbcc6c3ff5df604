use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid page: from must not be negative and size must be positive (from={from}, size={size})")]
pub struct InvalidPage {
    pub from: i64,
    pub size: i64,
}

/// A validated `from`/`size` pair as received from list endpoints.
///
/// `from` is the zero-based offset of the first wanted element. Stores that page by
/// number use [`PageRequest::page_offset`], which rounds `from` down to the start of
/// the page that contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    from: usize,
    size: usize,
}

impl PageRequest {
    pub fn new(from: i64, size: i64) -> Result<Self, InvalidPage> {
        if from < 0 || size <= 0 {
            return Err(InvalidPage { from, size });
        }
        Ok(Self {
            from: from as usize,
            size: size as usize,
        })
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn page_number(&self) -> usize {
        self.from / self.size
    }

    pub fn page_offset(&self) -> usize {
        self.page_number() * self.size
    }

    /// Element-offset slice `[from, from + size)`; empty when `from` is past the end.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().skip(self.from).take(self.size).collect()
    }

    /// Page-number slice starting at [`PageRequest::page_offset`].
    pub fn page<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.page_offset())
            .take(self.size)
            .collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { from: 0, size: 10 }
    }
}
