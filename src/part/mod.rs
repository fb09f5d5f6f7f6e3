//! Host container stand-in
//!
//! The host application owns the physical part; this module models the slice
//! of it the content switcher reads and mutates: volume, dry mass, and the
//! ordered live resource list. The resource list order matches the selected
//! type's definition order after any successful recomputation.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One live resource on a container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartResource {
    /// Resource identifier known to the host.
    pub name: String,
    /// Maximum quantity the container can hold.
    pub max_amount: f64,
    /// Current quantity.
    pub amount: f64,
    /// Whether the host shows a live editor control for this resource.
    pub tweakable: bool,
    /// Mass of one unit in tons.
    pub unit_mass: f64,
}

impl PartResource {
    /// Fill fraction, or NaN when the capacity is zero.
    pub fn fill_fraction(&self) -> f64 {
        self.amount / self.max_amount
    }
}

/// A physical container as the content switcher sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankPart {
    /// Container volume in kL; externally set, never mutated autonomously.
    pub volume: f64,
    /// Dry mass in tons; derived from the selected type when the container
    /// is volume-driven, host-supplied otherwise.
    pub dry_mass: f64,
    /// Live resources, in the selected type's definition order.
    pub resources: Vec<PartResource>,
}

impl TankPart {
    pub fn new(volume: f64) -> Self {
        Self {
            volume,
            dry_mass: 0.0,
            resources: Vec::new(),
        }
    }

    /// Look up a live resource by name.
    pub fn resource(&self, name: &str) -> Option<&PartResource> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// Total mass of currently held resources, in tons.
    pub fn resource_mass(&self) -> f64 {
        self.resources.iter().map(|r| r.amount * r.unit_mass).sum()
    }

    /// Dry mass plus held resource mass (wet mass), in tons.
    pub fn total_mass(&self) -> f64 {
        self.dry_mass + self.resource_mass()
    }

    /// Name-keyed (capacity, amount) view for collaborators.
    pub fn levels(&self) -> AHashMap<&str, (f64, f64)> {
        self.resources
            .iter()
            .map(|r| (r.name.as_str(), (r.max_amount, r.amount)))
            .collect()
    }
}
