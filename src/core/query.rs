//! Query parameters and pagination utilities
//!
//! [`QueryParams`] is the raw, string-typed form of a listing request as it
//! arrives on the query string. [`ListingQuery`] is the normalised query spec
//! handed to the listing engine. Normalisation never fails: malformed values
//! fall back to defaults.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Query parameters for listing requests
///
/// Every field is kept as an optional string so that malformed input never
/// rejects the request. Aliases of one field may appear together on the query
/// string: the first one wins and the other filters are kept.
///
/// # Example
/// ```text
/// GET /news?search=exam&category=academic&dateRange=week&sort=date-desc&page=2&limit=5
/// GET /notes?q=graph&per_page=3
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    /// Free-text search over title and description (`q`)
    pub search: Option<String>,

    /// Category filter
    pub category: Option<String>,

    /// `today | week | month | year | none` (`dateRange`, `range`)
    pub date_range: Option<String>,

    /// `date-asc | date-desc | title-asc | title-desc` (plus aliases)
    pub sort: Option<String>,

    /// Page number (starts at 1)
    pub page: Option<String>,

    /// Number of items per page (`per_page`, `pageSize`, `page_size`)
    pub limit: Option<String>,
}

impl QueryParams {
    /// Build from raw key/value pairs; unknown keys are ignored
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            params.set(key.as_ref(), value.into());
        }
        params
    }

    fn set(&mut self, key: &str, value: String) {
        let slot = match key {
            "search" | "q" => &mut self.search,
            "category" => &mut self.category,
            "date_range" | "dateRange" | "range" => &mut self.date_range,
            "sort" => &mut self.sort,
            "page" => &mut self.page,
            "limit" | "per_page" | "pageSize" | "page_size" => &mut self.limit,
            _ => return,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }
}

impl<'de> Deserialize<'de> for QueryParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ParamsVisitor;

        impl<'de> serde::de::Visitor<'de> for ParamsVisitor {
            type Value = QueryParams;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of listing parameters")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut params = QueryParams::default();
                while let Some(key) = map.next_key::<String>()? {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        params.set(&key, value);
                    }
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(ParamsVisitor)
    }
}

/// Page size defaults for one collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDefaults {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

fn default_page_size() -> usize {
    20
}

fn default_max_page_size() -> usize {
    100
}

impl Default for ListingDefaults {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl ListingDefaults {
    pub fn new(page_size: usize, max_page_size: usize) -> Self {
        Self {
            page_size,
            max_page_size,
        }
    }
}

/// Date window around "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    Today,
    Week,
    Month,
    Year,
    /// Match all dates (also used for absent or unrecognised values)
    #[default]
    None,
}

impl DateRange {
    /// Lenient parse; anything unrecognised means [`DateRange::None`]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "today" | "24hours" | "day" => DateRange::Today,
            "week" => DateRange::Week,
            "month" => DateRange::Month,
            "year" => DateRange::Year,
            _ => DateRange::None,
        }
    }

    /// Half-width of the window in days
    pub fn window_days(self) -> Option<u64> {
        match self {
            DateRange::Today => Some(0),
            DateRange::Week => Some(7),
            DateRange::Month => Some(30),
            DateRange::Year => Some(365),
            DateRange::None => None,
        }
    }

    /// Inclusive bounds `[today - window, today + window]`
    pub fn bounds(self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let days = Days::new(self.window_days()?);
        let start = today.checked_sub_days(days).unwrap_or(NaiveDate::MIN);
        let end = today.checked_add_days(days).unwrap_or(NaiveDate::MAX);
        Some((start, end))
    }

    pub fn contains(self, today: NaiveDate, date: NaiveDate) -> bool {
        match self.bounds(today) {
            Some((start, end)) => start <= date && date <= end,
            None => true,
        }
    }
}

/// Listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    DateAsc,
    #[default]
    DateDesc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    /// Lenient parse; anything unrecognised means the default (`date-desc`)
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "date-asc" | "oldest" | "asc" | "date" => SortKey::DateAsc,
            "date-desc" | "newest" | "desc" => SortKey::DateDesc,
            "title-asc" | "name-asc" | "title" | "name" => SortKey::TitleAsc,
            "title-desc" | "name-desc" => SortKey::TitleDesc,
            _ => SortKey::default(),
        }
    }
}

/// Normalised query spec handed to the listing engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// Lower-cased, trimmed search text; empty matches all
    pub search: String,
    /// Category filter; `None` matches all
    pub category: Option<String>,
    pub date_range: DateRange,
    pub sort: SortKey,
    /// Requested page (1-based), before clamping to the last page
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::from_params(&QueryParams::default(), &ListingDefaults::default())
    }
}

impl ListingQuery {
    /// Normalise raw parameters; never fails
    pub fn from_params(params: &QueryParams, defaults: &ListingDefaults) -> Self {
        let max_page_size = defaults.max_page_size.max(1);
        let page_size = positive(params.limit.as_deref())
            .unwrap_or(defaults.page_size)
            .clamp(1, max_page_size);

        Self {
            search: params
                .search
                .as_deref()
                .map(|s| s.trim().to_lowercase())
                .unwrap_or_default(),
            category: params.category.as_deref().and_then(category_filter),
            date_range: params
                .date_range
                .as_deref()
                .map(DateRange::parse)
                .unwrap_or_default(),
            sort: params.sort.as_deref().map(SortKey::parse).unwrap_or_default(),
            page: positive(params.page.as_deref()).unwrap_or(1),
            page_size,
        }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.trim().to_lowercase();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category_filter(category);
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page.max(1);
        self.page_size = page_size.max(1);
        self
    }

    /// Page actually served once the total is known
    pub fn effective_page(&self, total: usize) -> usize {
        let last_page = total.div_ceil(self.page_size).max(1);
        self.page.clamp(1, last_page)
    }

    /// Offset of the first item of the effective page
    pub fn offset(&self, total: usize) -> usize {
        (self.effective_page(total) - 1) * self.page_size
    }
}

/// Blank and `all` mean no category filter
fn category_filter(raw: &str) -> Option<String> {
    let category = raw.trim();
    (!category.is_empty() && !category.eq_ignore_ascii_case("all")).then(|| category.to_string())
}

fn positive(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

/// One page of a listing
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// The paginated items
    pub items: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> Page<T> {
    pub fn total(&self) -> usize {
        self.pagination.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        // Ensure limit is at least 1 to avoid division by zero
        let limit = limit.max(1);
        let page = page.max(1);
        // An empty listing still has one (empty) page
        let total_pages = total.div_ceil(limit).max(1);
        let start = (page - 1) * limit;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start + limit < total,
            has_prev: page > 1,
        }
    }
}
