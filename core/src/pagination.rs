//! Accumulation of paginated list responses.
//!
//! List endpoints wrap each page in an envelope whose `isLastPage` flag is
//! the only completion signal. The first request omits `pageNumber` (the
//! server's page 0); later requests ask for page 1, 2, ... until a page is
//! flagged last. Pages are fetched strictly one after another.

use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;

/// One page of a list response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub page_size: u32,
    pub is_last_page: bool,
    #[serde(default)]
    pub total_count: u64,
}

/// Fetch every page and concatenate their content in arrival order.
///
/// `fetch` receives `None` for the first page and `Some(n)` for page `n`
/// afterwards. The first error aborts the walk and is returned as is; no
/// partial result is produced.
pub fn collect_pages<T, F>(mut fetch: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(Option<u32>) -> Result<PageEnvelope<T>, ApiError>,
{
    let first = fetch(None)?;
    debug!(
        page = 0,
        items = first.content.len(),
        total = first.total_count,
        last = first.is_last_page,
        "fetched page"
    );
    let mut is_last = first.is_last_page;
    let mut content = Vec::with_capacity(first.content.len());
    content.extend(first.content);

    let mut page_number = 1;
    while !is_last {
        let page = fetch(Some(page_number))?;
        debug!(
            page = page_number,
            items = page.content.len(),
            last = page.is_last_page,
            "fetched page"
        );
        content.extend(page.content);
        is_last = page.is_last_page;
        page_number += 1;
    }
    Ok(content)
}
