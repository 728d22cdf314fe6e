use super::{authorize::authorize_listing_owner, prelude::*, Requester};

/// Removes the record entirely; there is no soft-delete.
pub fn delete_listing<R: ListingRepo>(repo: &R, requester: &Requester, id: &str) -> Result<()> {
    let listing = repo.get_listing(id)?;
    authorize_listing_owner(&listing, requester)?;
    repo.delete_listing(id)?;
    log::info!("Deleted listing {id}");
    Ok(())
}
