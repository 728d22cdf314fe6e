use std::collections::HashSet;

use super::prelude::*;

/// Latch that keeps a listing from being counted twice within one
/// browsing session. Best-effort: not deduplicated across sessions.
#[derive(Debug, Default)]
pub struct ViewSession {
    seen: HashSet<Id>,
}

impl ViewSession {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Increments the view counter, at most once per session and listing.
/// Returns the counter after the call.
pub fn record_view<R: ListingRepo>(repo: &R, session: &mut ViewSession, id: &str) -> Result<u64> {
    let mut listing = repo.get_listing(id)?;
    if !session.seen.insert(listing.id.clone()) {
        return Ok(listing.views);
    }
    listing.views += 1;
    repo.update_listing(&listing)?;
    Ok(listing.views)
}
