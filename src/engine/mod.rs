//! Recomputation engine - capacity math, fill-preserving rescaling, type
//! switching, and resource synchronization

pub mod capacity;
pub mod rescale;
pub mod switcher;
pub mod sync;

pub use capacity::{derived_dry_mass, resource_capacity};
pub use rescale::rescale_amount;
pub use switcher::{FieldVisibility, RecomputeReport, SwitcherSettings, TankContentSwitcher};
pub use sync::SyncOutcome;
