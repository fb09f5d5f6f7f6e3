//! Tank content switching
//!
//! Owns the selection state machine for one container: resolves the
//! persisted type name against the shared catalog, gates recomputation on
//! the host scene, and orchestrates the mass-then-capacities recomputation
//! pass. The live display panel is reached only through the injected
//! `ResourceDisplay` capability.

use std::sync::Arc;

use crate::catalog::{TankType, TankTypeCatalog};
use crate::core::error::{Result, TankError};
use crate::core::scene::Scene;
use crate::display::{mass_summary, ResourceDisplay};
use crate::engine::capacity::derived_dry_mass;
use crate::engine::sync::{synchronize, SyncOutcome};
use crate::part::TankPart;

/// Per-container configuration, including the persisted fields.
#[derive(Debug, Clone)]
pub struct SwitcherSettings {
    /// Whether volume drives mass and capacity display for this container.
    pub use_volume: bool,
    /// Uniform scaling applied wherever volume is consumed.
    pub volume_multiplier: f64,
    /// Persisted selection; may be empty or name an unknown type.
    pub tank_type: String,
}

impl Default for SwitcherSettings {
    fn default() -> Self {
        Self {
            use_volume: false,
            volume_multiplier: 1.0,
            tank_type: String::new(),
        }
    }
}

/// Which editor fields the host should show for this container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility {
    pub volume: bool,
    pub mass: bool,
    /// The type chooser; hidden when there is nothing to choose between.
    pub tank_type: bool,
}

/// Result of one recomputation pass.
#[derive(Debug, Clone)]
pub struct RecomputeReport {
    /// What happened to the live resource set.
    pub outcome: SyncOutcome,
    /// Structural-change notification: true exactly when capacities changed
    /// or the set was rebuilt. Collaborators react to this.
    pub resources_changed: bool,
    /// Container dry mass after the pass, in tons.
    pub dry_mass: f64,
    /// Mass summary for the editor; `None` when the container is not
    /// volume-driven.
    pub mass_display: Option<String>,
    /// Field visibility after the pass.
    pub fields: FieldVisibility,
}

/// Content switcher for a single container.
pub struct TankContentSwitcher<D: ResourceDisplay> {
    catalog: Arc<TankTypeCatalog>,
    display: D,
    scene: Scene,
    enabled: bool,
    use_volume: bool,
    volume_multiplier: f64,
    /// Persisted selection, round-tripped verbatim until resolution policy
    /// overwrites it.
    tank_type: String,
    /// Resolved selection: an index into the catalog, or `None` until the
    /// first resolution.
    selected: Option<usize>,
}

impl<D: ResourceDisplay> TankContentSwitcher<D> {
    pub fn new(catalog: Arc<TankTypeCatalog>, display: D, settings: SwitcherSettings) -> Self {
        Self {
            catalog,
            display,
            scene: Scene::Editor,
            enabled: false,
            use_volume: settings.use_volume,
            volume_multiplier: settings.volume_multiplier,
            tank_type: settings.tank_type,
            selected: None,
        }
    }

    /// Bring the switcher up in the given scene.
    ///
    /// In flight the switcher disables itself for the session. In the editor
    /// it resolves defaults and, for a container that already has volume,
    /// immediately recomputes.
    pub fn start(&mut self, scene: Scene, part: &mut TankPart) -> Option<RecomputeReport> {
        self.scene = scene;

        if !scene.is_editor() {
            self.enabled = false;
            return None;
        }

        self.initialize();
        if !self.enabled {
            return None;
        }

        if part.volume != 0.0 {
            self.update_tank_type(part)
        } else {
            None
        }
    }

    fn initialize(&mut self) {
        if self.catalog.is_empty() {
            tracing::error!("No tank type options available");
            self.enabled = false;
            return;
        }

        if self.tank_type.is_empty() {
            if let Some(first) = self.catalog.first() {
                self.tank_type = first.name.clone();
            }
        }

        self.enabled = true;
    }

    /// Per-tick entry point while editing. Picks up pending type requests;
    /// a defined no-op outside the editor scene.
    pub fn tick(&mut self, part: &mut TankPart) -> Option<RecomputeReport> {
        if !self.enabled || !self.scene.is_editor() {
            return None;
        }
        self.update_tank_type(part)
    }

    /// Request a different content type; takes effect on the next tick.
    pub fn request_type(&mut self, name: &str) {
        self.tank_type = name.to_string();
    }

    /// Volume-change notification from the sizing collaborator.
    ///
    /// Ignored in flight (contents are frozen) and on containers that are
    /// not volume-driven; a non-positive volume is a caller error and
    /// mutates nothing.
    pub fn change_volume(
        &mut self,
        part: &mut TankPart,
        volume: f64,
    ) -> Result<Option<RecomputeReport>> {
        if !self.scene.is_editor() {
            return Ok(None);
        }

        if !self.use_volume {
            tracing::error!("Volume update on a container that is not volume-driven");
            return Ok(None);
        }

        if !volume.is_finite() || volume <= 0.0 {
            return Err(TankError::InvalidVolume(volume));
        }

        part.volume = volume;

        // Nothing to recompute until the selection resolves; the volume
        // itself is kept.
        if self.selected.is_none() {
            return Ok(None);
        }
        Ok(Some(self.recompute(part, false)))
    }

    /// The currently resolved type, if any.
    pub fn selected_type(&self) -> Option<&TankType> {
        self.selected.and_then(|i| self.catalog.all().get(i))
    }

    /// The persisted selection field, verbatim.
    pub fn tank_type(&self) -> &str {
        &self.tank_type
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Editor field visibility for the current state.
    pub fn field_visibility(&self) -> FieldVisibility {
        let structural = self.selected_type().is_some_and(|t| t.is_structural);
        FieldVisibility {
            volume: self.enabled && self.use_volume && !structural,
            mass: self.enabled && self.use_volume,
            tank_type: self.enabled && self.catalog.len() > 1,
        }
    }

    /// Resolve the requested type name and recompute when it changed.
    ///
    /// Selection policy: an unknown name falls back to the catalog default
    /// when nothing was resolved yet, and reverts to the previous selection
    /// otherwise. A request naming the already-resolved type does nothing.
    fn update_tank_type(&mut self, part: &mut TankPart) -> Option<RecomputeReport> {
        if let Some(current) = self.selected_type() {
            if current.name == self.tank_type {
                return None;
            }
        }

        match self.catalog.position(&self.tank_type) {
            Some(idx) => {
                self.selected = Some(idx);
            }
            None => match self.selected_type() {
                None => {
                    let first = self.catalog.first()?;
                    tracing::warn!(
                        requested = %self.tank_type,
                        fallback = %first.name,
                        "Initially selected tank type does not exist, reverting to default"
                    );
                    self.tank_type = first.name.clone();
                    self.selected = Some(0);
                }
                Some(previous) => {
                    let kept = previous.name.clone();
                    tracing::warn!(
                        requested = %self.tank_type,
                        kept = %kept,
                        "Selected tank type does not exist, reverting to previous"
                    );
                    self.tank_type = kept;
                    return None;
                }
            },
        }

        Some(self.recompute(part, true))
    }

    /// One recomputation pass: mass first (capacities depend on it), then
    /// the synchronization strategy, then the mass summary.
    fn recompute(&mut self, part: &mut TankPart, type_changed: bool) -> RecomputeReport {
        let catalog = Arc::clone(&self.catalog);
        let Some(tank_type) = self.selected.and_then(|i| catalog.all().get(i)) else {
            // Callers resolve the selection before recomputing.
            return RecomputeReport {
                outcome: SyncOutcome::NoChange,
                resources_changed: false,
                dry_mass: part.dry_mass,
                mass_display: None,
                fields: self.field_visibility(),
            };
        };

        if self.use_volume {
            part.dry_mass =
                derived_dry_mass(tank_type.dry_density, part.volume, self.volume_multiplier);
        }

        let outcome = synchronize(
            part,
            tank_type,
            self.volume_multiplier,
            type_changed,
            &mut self.display,
        );

        let mass_display = self
            .use_volume
            .then(|| mass_summary(part, tank_type.is_structural));

        RecomputeReport {
            outcome,
            resources_changed: outcome != SyncOutcome::NoChange,
            dry_mass: part.dry_mass,
            mass_display,
            fields: self.field_visibility(),
        }
    }
}
