//! Tank content-type catalog - what a tank can be configured to hold

pub mod schema;
pub mod store;

pub use schema::{TankResourceDef, TankType};
pub use store::{CatalogError, TankTypeCatalog};
