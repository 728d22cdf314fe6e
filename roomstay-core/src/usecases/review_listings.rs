use super::prelude::*;

/// Bulk moderation: moves all given listings to `status` and returns
/// how many were affected.
pub fn review_listings<R: ListingRepo>(
    repo: &R,
    ids: &[&str],
    status: ModerationStatus,
) -> Result<usize> {
    log::info!(
        "Changing moderation status of {} listings to {}",
        ids.len(),
        status,
    );
    let listing_count = repo.review_listings(ids, status)?;
    log::info!(
        "Changed moderation status of {} listings to {}",
        listing_count,
        status
    );
    Ok(listing_count)
}

/// Flips availability, independent of the moderation status.
pub fn toggle_availability<R: ListingRepo>(repo: &R, id: &str) -> Result<bool> {
    let mut listing = repo.get_listing(id)?;
    listing.is_available = !listing.is_available;
    repo.update_listing(&listing)?;
    log::info!(
        "Listing {} is now {}",
        listing.id,
        if listing.is_available {
            "available"
        } else {
            "unavailable"
        }
    );
    Ok(listing.is_available)
}

/// Flips the verified badge, independent of the moderation status.
pub fn toggle_verified<R: ListingRepo>(repo: &R, id: &str) -> Result<bool> {
    let mut listing = repo.get_listing(id)?;
    listing.is_verified = !listing.is_verified;
    repo.update_listing(&listing)?;
    log::info!(
        "Listing {} is now {}",
        listing.id,
        if listing.is_verified {
            "verified"
        } else {
            "unverified"
        }
    );
    Ok(listing.is_verified)
}
