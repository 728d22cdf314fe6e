use super::{prelude::*, Requester};

/// All listings the requester owns, in collection order.
pub fn owned_listings<R: ListingRepo>(repo: &R, requester: &Requester) -> Result<Vec<Listing>> {
    Ok(repo
        .all_listings()?
        .into_iter()
        .filter(|l| l.is_owned_by(requester.id.as_ref(), requester.phone.as_deref()))
        .collect())
}
