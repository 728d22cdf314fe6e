use super::prelude::*;

/// The acting identity, as far as the core is concerned: an opaque
/// pair injected by the (external) auth layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requester {
    pub id: Option<Id>,
    pub phone: Option<String>,
}

impl Requester {
    pub fn with_id(id: Id) -> Self {
        Self {
            id: Some(id),
            phone: None,
        }
    }

    pub fn with_phone(phone: impl Into<String>) -> Self {
        Self {
            id: None,
            phone: Some(phone.into()),
        }
    }
}

/// Edit/delete authorization: the requester's id or phone has to match
/// the listing's ownership records.
pub fn authorize_listing_owner(listing: &Listing, requester: &Requester) -> Result<()> {
    if listing.is_owned_by(requester.id.as_ref(), requester.phone.as_deref()) {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}
