// Low-level store access traits.
// The repository holds the listing collection as an ordered sequence
// (most recent first) and exposes point mutations on it. Reads return
// snapshots that are never mutated by a concurrent writer.

use crate::entities::{listing::Listing, status::ModerationStatus};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ListingRepo {
    /// Prepends a new listing, rejecting duplicate ids.
    fn create_listing(&self, listing: Listing) -> Result<()>;

    fn get_listing(&self, id: &str) -> Result<Listing>;

    /// Snapshot of the whole collection, most recent first.
    fn all_listings(&self) -> Result<Vec<Listing>>;
    fn count_listings(&self) -> Result<usize>;

    fn update_listing(&self, listing: &Listing) -> Result<()>;

    /// Sets the moderation status of all matching ids and returns how
    /// many listings were affected. Unknown ids are skipped silently.
    fn review_listings(&self, ids: &[&str], status: ModerationStatus) -> Result<usize>;

    fn delete_listing(&self, id: &str) -> Result<()>;
}
