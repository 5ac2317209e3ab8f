//! Hypermedia links and paginated listings.

use crate::api::error::ApiError;
use crate::config::PagingConfig;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }
}

/// A resource body with its links appended.
#[derive(Clone, Debug, Serialize)]
pub struct Linked<T> {
    #[serde(flatten)]
    pub data: T,
    pub links: Vec<Link>,
}

impl<T> Linked<T> {
    pub fn new(data: T, links: Vec<Link>) -> Self {
        Self { data, links }
    }
}

/// Query string of every listing: `?page=0&size=20`. Pages are zero-based.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub size: Option<usize>,
}

impl PageQuery {
    /// Resolve to `(page, size)`, applying the default size and capping at the max.
    pub fn resolve(&self, paging: PagingConfig) -> Result<(usize, usize), ApiError> {
        let size = self.size.unwrap_or(paging.default_size);
        if size == 0 {
            return Err(ApiError::InvalidPageSize);
        }
        Ok((self.page.unwrap_or(0), size.min(paging.max_size)))
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub links: Vec<Link>,
}

impl<T> Page<T> {
    /// Cut one page out of `items` and link its neighbours under `base`.
    pub fn from_items(items: Vec<T>, page: usize, size: usize, base: &str) -> Self {
        let total_elements = items.len();
        let total_pages = total_elements.div_ceil(size);
        let content: Vec<T> = items.into_iter().skip(page.saturating_mul(size)).take(size).collect();

        let href = |p: usize| format!("{base}?page={p}&size={size}");
        let mut links = vec![Link::new("self", href(page))];
        if page.checked_add(1).is_some_and(|next| next < total_pages) {
            links.push(Link::new("next", href(page + 1)));
        }
        if page > 0 && total_pages > 0 {
            links.push(Link::new("prev", href((page - 1).min(total_pages - 1))));
        }

        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
            links,
        }
    }
}
