use crate::error::{ReaderError, Result};

/// the line range a page covers, computed fresh for every paginate call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

impl PageWindow {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// convert a 1-based page number and page size into a line window
    ///
    /// pages beyond the end of a file are valid and simply read nothing
    pub fn for_page(page: usize, per_page: usize) -> Result<Self> {
        if page < 1 {
            return Err(ReaderError::InvalidArgument(format!(
                "page must be at least 1, got {}",
                page
            )));
        }
        if per_page < 1 {
            return Err(ReaderError::InvalidArgument(format!(
                "per_page must be at least 1, got {}",
                per_page
            )));
        }

        let offset = (page - 1).checked_mul(per_page).ok_or_else(|| {
            ReaderError::InvalidArgument(format!(
                "page {} with {} per page is out of range",
                page, per_page
            ))
        })?;

        Ok(Self::new(offset, per_page))
    }
}
