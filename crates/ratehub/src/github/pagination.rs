use super::transport::Transport;
use crate::prelude::*;
use ratehub_core::pagination::next_page_url;
use serde::de::DeserializeOwned;
use std::collections::HashSet;

/// Drain a paginated collection starting at `first_url`
///
/// Pages are requested one at a time, in order, following the `rel="next"`
/// link of each response until a page comes back without one. The records
/// of every page are concatenated in server order.
///
/// All or nothing: the first non-success status aborts the drain with
/// [`Error::Transport`] and the records gathered so far are discarded.
/// A `next` link pointing back at a page already fetched fails with
/// [`Error::PaginationLoop`].
pub async fn fetch_all<T, S>(transport: &S, first_url: &str) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
    S: Transport,
{
    let mut records = Vec::new();
    let mut next_url = Some(first_url.to_string());
    let mut visited = HashSet::new();
    let mut pages = 0;

    while let Some(url) = next_url {
        if !visited.insert(url.clone()) {
            log::warn!("GET {url} was already fetched, aborting pagination");
            return Err(Error::PaginationLoop { url });
        }
        pages += 1;
        log::debug!("GET {url} (page {pages})");

        let response = transport.get(&url).await?;
        if !response.is_success() {
            log::warn!("GET {url} failed with status {}", response.status);
        }
        let response = response.error_for_status()?;

        let page: Vec<T> = response.json(&url)?;
        records.extend(page);

        next_url = next_page_url(response.link.as_deref());
    }

    log::info!(
        "Fetched {} records in {} pages from {}",
        records.len(),
        pages,
        first_url
    );

    Ok(records)
}
