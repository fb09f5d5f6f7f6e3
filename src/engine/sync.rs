//! Resource synchronization strategy
//!
//! Prefers fiddling with the existing live resources over rebuilding the
//! set: an in-place update leaves the host panel's rows (and any slider the
//! user is dragging) alive. The in-place path applies only when the live
//! list still matches the selected type field-for-field; anything else
//! rebuilds from the definition.

use crate::catalog::{TankResourceDef, TankType};
use crate::display::ResourceDisplay;
use crate::engine::capacity::resource_capacity;
use crate::engine::rescale::rescale_amount;
use crate::part::{PartResource, TankPart};

/// What a synchronization pass did to the live resource set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Nothing changed; no notification is owed.
    NoChange,
    /// Capacities updated in place; the resource set itself is unchanged.
    UpdatedInPlace,
    /// The resource set was discarded and rebuilt from the definition.
    Rebuilt,
}

/// Bring the live resource set in line with the selected type.
///
/// A type change always rebuilds: resource identities may differ, and
/// positional correspondence with the live list is only trusted while the
/// type is unchanged.
pub fn synchronize(
    part: &mut TankPart,
    tank_type: &TankType,
    volume_multiplier: f64,
    type_changed: bool,
    display: &mut dyn ResourceDisplay,
) -> SyncOutcome {
    let defs = tank_type.active_resources();

    if !type_changed {
        if let Some(updated) = update_in_place(part, defs, volume_multiplier, display) {
            return if updated {
                SyncOutcome::UpdatedInPlace
            } else {
                SyncOutcome::NoChange
            };
        }
    }

    rebuild(part, defs, volume_multiplier, display);
    SyncOutcome::Rebuilt
}

/// Try the cheap path. `Some(updated)` on success, `None` when the live set
/// no longer matches the definition and a rebuild is required. Partial edits
/// made before bailing out are harmless - the rebuild recomputes everything.
fn update_in_place(
    part: &mut TankPart,
    defs: &[TankResourceDef],
    volume_multiplier: f64,
    display: &mut dyn ResourceDisplay,
) -> Option<bool> {
    if part.resources.len() != defs.len() {
        tracing::warn!(
            live = part.resources.len(),
            defined = defs.len(),
            "Selected and existing resource counts differ"
        );
        return None;
    }

    let volume = part.volume;
    let dry_mass = part.dry_mass;
    let mut updated = false;

    for (res, def) in part.resources.iter_mut().zip(defs) {
        if res.name != def.name {
            tracing::warn!(
                live = %res.name,
                defined = %def.name,
                "Selected and existing resource names differ"
            );
            return None;
        }

        let max_amount = resource_capacity(volume, volume_multiplier, def, dry_mass);

        // Exact compare is sound: both sides come from the same rounded
        // computation.
        if res.max_amount == max_amount {
            continue;
        }

        res.amount = rescale_amount(res.max_amount, res.amount, max_amount);
        res.max_amount = max_amount;

        if def.tweakable && !display.sync_resource(res) {
            tracing::warn!(resource = %res.name, "No display control for resource");
            return None;
        }

        updated = true;
    }

    Some(updated)
}

/// Discard the live set and build it afresh, full. No fill-fraction memory
/// survives this path.
fn rebuild(
    part: &mut TankPart,
    defs: &[TankResourceDef],
    volume_multiplier: f64,
    display: &mut dyn ResourceDisplay,
) {
    part.resources.clear();

    for def in defs {
        let max_amount = resource_capacity(part.volume, volume_multiplier, def, part.dry_mass);
        part.resources.push(PartResource {
            name: def.name.clone(),
            max_amount,
            amount: max_amount,
            tweakable: def.tweakable,
            unit_mass: def.unit_mass,
        });
    }

    display.invalidate();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{EditorPanel, NoDisplay};

    fn def(name: &str, units_per_kl: f64) -> TankResourceDef {
        TankResourceDef {
            name: name.into(),
            units_per_kl,
            units_per_t: 0.0,
            tweakable: true,
            unit_mass: 0.005,
        }
    }

    fn fuel_type() -> TankType {
        TankType {
            name: "Mixed".into(),
            dry_density: 0.1089,
            is_structural: false,
            resources: vec![def("LiquidFuel", 78.0), def("Oxidizer", 95.0)],
        }
    }

    fn filled_part(tank_type: &TankType, volume: f64) -> TankPart {
        let mut part = TankPart::new(volume);
        rebuild(
            &mut part,
            tank_type.active_resources(),
            1.0,
            &mut NoDisplay,
        );
        part
    }

    #[test]
    fn test_rebuild_fills_to_capacity() {
        let tank_type = fuel_type();
        let part = filled_part(&tank_type, 10.0);

        assert_eq!(part.resources.len(), 2);
        assert_eq!(part.resources[0].name, "LiquidFuel");
        assert_eq!(part.resources[0].max_amount, 780.0);
        assert_eq!(part.resources[0].amount, 780.0);
        assert_eq!(part.resources[1].name, "Oxidizer");
        assert_eq!(part.resources[1].max_amount, 950.0);
    }

    #[test]
    fn test_type_change_always_rebuilds() {
        let tank_type = fuel_type();
        let mut part = filled_part(&tank_type, 10.0);
        part.resources[0].amount = 100.0;

        let outcome = synchronize(&mut part, &tank_type, 1.0, true, &mut NoDisplay);

        // Same definition, same capacities - but the type-changed flag
        // forbids the in-place path, so the half-empty tank comes back full.
        assert_eq!(outcome, SyncOutcome::Rebuilt);
        assert_eq!(part.resources[0].amount, 780.0);
    }

    #[test]
    fn test_in_place_preserves_fill_fraction() {
        let tank_type = fuel_type();
        let mut part = filled_part(&tank_type, 10.0);
        part.resources[0].amount = 390.0; // half full
        part.resources[1].amount = 0.0; // empty

        part.volume = 20.0;
        let outcome = synchronize(&mut part, &tank_type, 1.0, false, &mut NoDisplay);

        assert_eq!(outcome, SyncOutcome::UpdatedInPlace);
        assert_eq!(part.resources[0].max_amount, 1560.0);
        assert_eq!(part.resources[0].amount, 780.0);
        assert_eq!(part.resources[1].max_amount, 1900.0);
        assert_eq!(part.resources[1].amount, 0.0);
    }

    #[test]
    fn test_unchanged_capacity_is_noop() {
        let tank_type = fuel_type();
        let mut part = filled_part(&tank_type, 10.0);
        part.resources[0].amount = 390.0;

        let outcome = synchronize(&mut part, &tank_type, 1.0, false, &mut NoDisplay);

        assert_eq!(outcome, SyncOutcome::NoChange);
        assert_eq!(part.resources[0].amount, 390.0);
    }

    #[test]
    fn test_count_mismatch_rebuilds() {
        let tank_type = fuel_type();
        let mut part = filled_part(&tank_type, 10.0);
        part.resources.pop();

        let outcome = synchronize(&mut part, &tank_type, 1.0, false, &mut NoDisplay);
        assert_eq!(outcome, SyncOutcome::Rebuilt);
        assert_eq!(part.resources.len(), 2);
    }

    #[test]
    fn test_name_mismatch_rebuilds_even_with_matching_count() {
        let tank_type = fuel_type();
        let mut part = filled_part(&tank_type, 10.0);
        part.resources[1].name = "Monopropellant".into();
        part.resources[1].amount = 1.0;

        part.volume = 20.0;
        let outcome = synchronize(&mut part, &tank_type, 1.0, false, &mut NoDisplay);

        assert_eq!(outcome, SyncOutcome::Rebuilt);
        assert_eq!(part.resources[1].name, "Oxidizer");
        assert_eq!(part.resources[1].amount, part.resources[1].max_amount);
    }

    #[test]
    fn test_missing_control_abandons_in_place() {
        let tank_type = fuel_type();
        let mut part = filled_part(&tank_type, 10.0);
        part.resources[0].amount = 390.0;

        let mut panel = EditorPanel::new();
        panel.rebuild_rows(&part.resources);
        panel.remove_row("Oxidizer");

        part.volume = 20.0;
        let outcome = synchronize(&mut part, &tank_type, 1.0, false, &mut panel);

        // LiquidFuel was rescaled in place before the Oxidizer control came
        // up missing; the rebuild discards that partial edit.
        assert_eq!(outcome, SyncOutcome::Rebuilt);
        assert_eq!(part.resources[0].amount, part.resources[0].max_amount);
        assert!(panel.is_dirty());
    }

    #[test]
    fn test_non_tweakable_resources_skip_display() {
        let mut tank_type = fuel_type();
        tank_type.resources[0].tweakable = false;
        tank_type.resources[1].tweakable = false;

        let mut part = filled_part(&tank_type, 10.0);
        part.volume = 20.0;

        // An empty panel would miss every control, but nothing tweakable
        // needs syncing.
        let mut panel = EditorPanel::new();
        let outcome = synchronize(&mut part, &tank_type, 1.0, false, &mut panel);
        assert_eq!(outcome, SyncOutcome::UpdatedInPlace);
    }

    #[test]
    fn test_structural_type_rebuilds_to_empty() {
        let tank_type = fuel_type();
        let mut part = filled_part(&tank_type, 10.0);

        let structural = TankType {
            name: "Structural".into(),
            dry_density: 0.04,
            is_structural: true,
            resources: vec![def("LiquidFuel", 78.0)],
        };
        let outcome = synchronize(&mut part, &structural, 1.0, true, &mut NoDisplay);

        assert_eq!(outcome, SyncOutcome::Rebuilt);
        assert!(part.resources.is_empty());
    }
}
