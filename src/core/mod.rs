pub mod error;
pub mod scene;

pub use error::{Result, TankError};
pub use scene::Scene;
