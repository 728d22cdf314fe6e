//! # roomstay-core
//!
//! The business logic of the Roomstay marketplace core: the city
//! gazetteer, the location resolver, and the listing usecases. All
//! persistence and environment access happens through the traits in
//! [`repositories`] and [`gateways`].

pub use roomstay_entities as entities;

pub mod gateways;
pub mod gazetteer;
pub mod location;
pub mod repositories;
pub mod usecases;
pub mod util;

pub use repositories::Error as RepoError;
