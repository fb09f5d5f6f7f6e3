//! Content-type definitions
//!
//! A `TankType` names a bundle of resource ratios. Definitions are built once
//! at catalog load and never mutated afterwards; every container using the
//! catalog reads the same shared entries.

use serde::{Deserialize, Serialize};

/// A named bundle of resource ratios a tank can be switched to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankType {
    /// Unique-by-convention name; lookups take the first match.
    pub name: String,
    /// Dry mass contributed per kL of container volume (t/kL).
    pub dry_density: f64,
    /// Structural types hold no resources and hide the volume display.
    pub is_structural: bool,
    /// Ordered ratio list; the order defines the positional pairing the
    /// in-place update path relies on.
    pub resources: Vec<TankResourceDef>,
}

impl TankType {
    /// Resource definitions that actually materialize on a container.
    ///
    /// Structural types expose none, regardless of any ratios configured on
    /// them.
    pub fn active_resources(&self) -> &[TankResourceDef] {
        if self.is_structural {
            &[]
        } else {
            &self.resources
        }
    }
}

/// One resource's contribution to a tank type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankResourceDef {
    /// Resource identifier known to the host.
    pub name: String,
    /// Capacity units per kL of container volume.
    pub units_per_kl: f64,
    /// Capacity units per ton of container dry mass.
    pub units_per_t: f64,
    /// Whether the host shows a live editor control for this resource.
    pub tweakable: bool,
    /// Mass of one unit in tons; used for the wet-mass display.
    pub unit_mass: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fuel_def() -> TankResourceDef {
        TankResourceDef {
            name: "LiquidFuel".into(),
            units_per_kl: 78.22,
            units_per_t: 0.0,
            tweakable: true,
            unit_mass: 0.005,
        }
    }

    #[test]
    fn test_active_resources_plain_type() {
        let t = TankType {
            name: "Fuel".into(),
            dry_density: 0.05,
            is_structural: false,
            resources: vec![fuel_def()],
        };
        assert_eq!(t.active_resources().len(), 1);
    }

    #[test]
    fn test_active_resources_structural_type() {
        // Ratios on a structural type must be treated as absent.
        let t = TankType {
            name: "Structural".into(),
            dry_density: 0.04,
            is_structural: true,
            resources: vec![fuel_def()],
        };
        assert!(t.active_resources().is_empty());
    }
}
