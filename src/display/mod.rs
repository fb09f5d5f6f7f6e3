//! Live resource display synchronization
//!
//! The host owns the on-screen panel showing one row per resource. In-place
//! recomputation keeps those rows current without rebuilding the panel, so
//! sliders the user is dragging survive. The engine reaches the panel only
//! through the `ResourceDisplay` capability it was constructed with.

use crate::part::{PartResource, TankPart};
use ahash::AHashMap;

/// Capability for pushing recomputed values to a live display panel.
///
/// Injected into the switcher at construction; the engine never looks up
/// host UI objects itself.
pub trait ResourceDisplay {
    /// Push updated capacity/amount to the live control for a resource.
    ///
    /// Returns false when the panel has no control for the resource; the
    /// caller treats that as a recoverable miss and falls back to a full
    /// rebuild.
    fn sync_resource(&mut self, resource: &PartResource) -> bool;

    /// Mark the panel dirty after a structural rebuild so the host recreates
    /// its rows.
    fn invalidate(&mut self);
}

/// Display for headless hosts with no panel at all.
///
/// There is nothing to keep in sync, so every sync trivially succeeds and
/// fill fractions survive in-place updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDisplay;

impl ResourceDisplay for NoDisplay {
    fn sync_resource(&mut self, _resource: &PartResource) -> bool {
        true
    }

    fn invalidate(&mut self) {}
}

/// One row of a live panel: the formatted texts a host control would show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub max_text: String,
    pub amount_text: String,
}

/// In-memory stand-in for a host editor panel.
///
/// Rows are keyed by resource name and created by the host (`rebuild_rows`)
/// after the panel has been invalidated. Syncing a resource with no row
/// reports a miss, exactly like a control lookup failing on a real panel.
#[derive(Debug, Clone, Default)]
pub struct EditorPanel {
    rows: AHashMap<String, PanelRow>,
    dirty: bool,
}

impl EditorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host-side reaction to an invalidated panel: recreate one row per
    /// live resource and clear the dirty flag.
    pub fn rebuild_rows(&mut self, resources: &[PartResource]) {
        self.rows.clear();
        for res in resources {
            self.rows.insert(res.name.clone(), row_for(res));
        }
        self.dirty = false;
    }

    /// Drop a single row; used by hosts (and tests) to model a control that
    /// went missing.
    pub fn remove_row(&mut self, resource_name: &str) {
        self.rows.remove(resource_name);
    }

    pub fn row(&self, resource_name: &str) -> Option<&PanelRow> {
        self.rows.get(resource_name)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl ResourceDisplay for EditorPanel {
    fn sync_resource(&mut self, resource: &PartResource) -> bool {
        match self.rows.get_mut(&resource.name) {
            Some(row) => {
                *row = row_for(resource);
                true
            }
            None => false,
        }
    }

    fn invalidate(&mut self) {
        self.dirty = true;
    }
}

fn row_for(resource: &PartResource) -> PanelRow {
    PanelRow {
        max_text: format!("{:.1}", resource.max_amount),
        amount_text: format!("{:.1}", resource.amount),
    }
}

/// Human-readable mass summary for the editor.
///
/// Structural containers have nothing to be wet with, so only the dry value
/// is shown.
pub fn mass_summary(part: &TankPart, structural: bool) -> String {
    if structural {
        format!("{:.3}t", part.dry_mass)
    } else {
        format!(
            "Dry: {:.3}t / Wet: {:.3}t",
            part.dry_mass,
            part.total_mass()
        )
    }
}
