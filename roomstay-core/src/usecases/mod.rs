mod authorize;
mod create_new_listing;
mod dashboard_stats;
mod delete_listing;
mod error;
mod moderation_queue;
mod owned_listings;
mod query_listings;
mod record_view;
mod review_listings;
mod update_listing;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, create_new_listing::*, dashboard_stats::*, delete_listing::*, error::Error,
    moderation_queue::*, owned_listings::*, query_listings::*, record_view::*, review_listings::*,
    update_listing::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::repositories::*;
    pub use roomstay_entities::{contact::*, geo::*, id::*, listing::*, status::*, time::*};
}
