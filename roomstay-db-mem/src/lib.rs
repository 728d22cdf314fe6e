//! In-memory implementation of the listing repository.
//!
//! Reads hand out snapshots: a `Vec` cloned under the read lock, never
//! mutated by a later writer. Mutations are last-write-wins; there is a
//! single logical writer (the local session) by design.

use std::sync::{PoisonError, RwLock};

use anyhow::anyhow;
use roomstay_core::{
    entities::{listing::Listing, status::ModerationStatus},
    repositories::{Error, ListingRepo},
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default)]
pub struct InMemoryListings {
    // Most recent first.
    listings: RwLock<Vec<Listing>>,
}

fn poisoned<T>(_: PoisonError<T>) -> Error {
    Error::Other(anyhow!("listing store lock poisoned"))
}

impl InMemoryListings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepopulates the store, e.g. with demo data. The given order is
    /// kept, so pass the most recent listing first.
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: RwLock::new(listings),
        }
    }
}

impl ListingRepo for InMemoryListings {
    fn create_listing(&self, listing: Listing) -> Result<()> {
        let mut listings = self.listings.write().map_err(poisoned)?;
        if listings.iter().any(|l| l.id == listing.id) {
            return Err(Error::AlreadyExists);
        }
        listings.insert(0, listing);
        Ok(())
    }

    fn get_listing(&self, id: &str) -> Result<Listing> {
        self.listings
            .read()
            .map_err(poisoned)?
            .iter()
            .find(|l| l.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_listings(&self) -> Result<Vec<Listing>> {
        Ok(self.listings.read().map_err(poisoned)?.clone())
    }

    fn count_listings(&self) -> Result<usize> {
        Ok(self.listings.read().map_err(poisoned)?.len())
    }

    fn update_listing(&self, listing: &Listing) -> Result<()> {
        let mut listings = self.listings.write().map_err(poisoned)?;
        let existing = listings
            .iter_mut()
            .find(|l| l.id == listing.id)
            .ok_or(Error::NotFound)?;
        *existing = listing.clone();
        Ok(())
    }

    fn review_listings(&self, ids: &[&str], status: ModerationStatus) -> Result<usize> {
        let mut listings = self.listings.write().map_err(poisoned)?;
        let mut count = 0;
        for listing in listings.iter_mut() {
            if ids.contains(&listing.id.as_str()) {
                listing.status = status;
                count += 1;
            }
        }
        Ok(count)
    }

    fn delete_listing(&self, id: &str) -> Result<()> {
        let mut listings = self.listings.write().map_err(poisoned)?;
        let len_before = listings.len();
        listings.retain(|l| l.id.as_str() != id);
        if listings.len() == len_before {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}
