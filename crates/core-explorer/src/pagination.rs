/// Fixed number of rows shown per table page.
pub const ROWS_PER_PAGE: i64 = 50;

/// A request for one page of a table. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub table_name: String,
    pub page: i64,
}

impl PageRequest {
    #[must_use]
    pub const fn new(table_name: String, page: i64) -> Self {
        let page = if page > 0 { page } else { 1 };
        Self { table_name, page }
    }

    /// Builds a request from the raw `page` query value. Absent, unparsable or
    /// non-positive values fall back to the first page.
    #[must_use]
    pub fn from_param(table_name: String, page: Option<&str>) -> Self {
        let page = page
            .and_then(|value| value.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(table_name, page)
    }

    #[must_use]
    pub const fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(ROWS_PER_PAGE)
    }

    #[must_use]
    pub const fn limit(&self) -> i64 {
        ROWS_PER_PAGE
    }
}

/// Page metadata derived from the requested page and the table row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: i64,
    pub next_page: i64,
    pub prev_page: i64,
    pub has_next_page: bool,
    pub total_pages: i64,
    pub total_rows: i64,
    pub offset: i64,
    pub limit: i64,
}

impl Pagination {
    #[must_use]
    pub const fn new(request: &PageRequest, total_rows: i64) -> Self {
        let total_pages = total_pages(total_rows);
        Self {
            current_page: request.page,
            next_page: request.page.saturating_add(1),
            prev_page: request.page - 1,
            has_next_page: request.page < total_pages,
            total_pages,
            total_rows,
            offset: request.offset(),
            limit: request.limit(),
        }
    }

    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.prev_page > 0
    }
}

#[must_use]
pub const fn total_pages(total_rows: i64) -> i64 {
    if total_rows <= 0 {
        0
    } else {
        (total_rows - 1) / ROWS_PER_PAGE + 1
    }
}
