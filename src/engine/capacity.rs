//! Capacity and mass calculation
//!
//! Pure functions; identical inputs always produce identical outputs, which
//! is what makes the exact-equality no-op fast path in the synchronization
//! strategy sound.

use crate::catalog::TankResourceDef;

/// Round to 2 decimal places, half away from zero.
///
/// Capacities and amounts are kept at this precision everywhere.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 3 decimal places, half away from zero.
///
/// Masses are kept at this precision.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Capacity of one resource for a container.
///
/// `volume * volume_multiplier * units_per_kl + dry_mass * units_per_t`,
/// rounded to 2 decimals. Inputs must be non-negative; volume is validated
/// upstream.
pub fn resource_capacity(
    volume: f64,
    volume_multiplier: f64,
    def: &TankResourceDef,
    dry_mass: f64,
) -> f64 {
    round2(volume * volume_multiplier * def.units_per_kl + dry_mass * def.units_per_t)
}

/// Dry mass of a volume-driven container, in tons.
pub fn derived_dry_mass(dry_density: f64, volume: f64, volume_multiplier: f64) -> f64 {
    round3(dry_density * volume * volume_multiplier)
}
