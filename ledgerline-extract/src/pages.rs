//! Ordered assembly of per-page extracted text.
//!
//! Page retrieval can fan out, but transaction continuity depends on
//! document order: results are always joined by page index, never by
//! completion order.

use std::future::Future;

use anyhow::Result;
use futures_util::future::try_join_all;

/// Concatenate per-page text in page order, one line break between pages.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|page| page.as_ref())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fetch every page concurrently and return the texts indexed by page
/// number. A failed page fails the whole document.
pub async fn fetch_pages_ordered<F, Fut>(page_count: usize, fetch: F) -> Result<Vec<String>>
where
    F: Fn(usize) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    try_join_all((0..page_count).map(fetch)).await
}
