//! Procedural Tanks - Entry Point
//!
//! Interactive demo: loads the sample tank type catalog, creates one
//! editor-scene container, and lets you switch content types, resize the
//! tank, and drain resources while watching the recomputation reports.

use procedural_tanks::catalog::TankTypeCatalog;
use procedural_tanks::core::error::Result;
use procedural_tanks::core::scene::Scene;
use procedural_tanks::display::EditorPanel;
use procedural_tanks::engine::{SwitcherSettings, SyncOutcome, TankContentSwitcher};
use procedural_tanks::part::TankPart;

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("procedural_tanks=debug")
        .init();

    tracing::info!("Procedural Tanks starting...");

    let catalog = Arc::new(TankTypeCatalog::load_from_toml(Path::new(
        "data/tank_types.toml",
    ))?);

    let mut part = TankPart::new(10.0);
    let mut switcher = TankContentSwitcher::new(
        Arc::clone(&catalog),
        EditorPanel::new(),
        SwitcherSettings {
            use_volume: true,
            volume_multiplier: 1.0,
            tank_type: String::new(),
        },
    );

    if let Some(report) = switcher.start(Scene::Editor, &mut part) {
        react_to_report(&mut switcher, &part, report.outcome);
    }
    // Containers with pending state resolve on the first tick.
    if let Some(report) = switcher.tick(&mut part) {
        react_to_report(&mut switcher, &part, report.outcome);
    }

    println!("\n=== PROCEDURAL TANKS ===");
    println!("Editor-time tank content switching demo");
    println!();
    println!("Commands:");
    println!("  types               - List available tank types");
    println!("  type <name>         - Switch the tank to a content type");
    println!("  volume <kL>         - Resize the tank");
    println!("  drain <name> <amt>  - Remove some of a resource");
    println!("  status / s          - Show the container state");
    println!("  quit / q            - Exit");
    println!();

    loop {
        display_status(&switcher, &part);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            ["quit"] | ["q"] => break,
            ["status"] | ["s"] => {}
            ["types"] => {
                for name in catalog.option_names() {
                    println!("  {}", name);
                }
            }
            ["type", name] => {
                switcher.request_type(name);
                match switcher.tick(&mut part) {
                    Some(report) => {
                        println!("Switched: {:?}", report.outcome);
                        react_to_report(&mut switcher, &part, report.outcome);
                    }
                    None => println!("No change (unknown type names are reverted)"),
                }
            }
            ["volume", value] => match value.parse::<f64>() {
                Ok(volume) => match switcher.change_volume(&mut part, volume) {
                    Ok(Some(report)) => {
                        println!("Resized: {:?}", report.outcome);
                        react_to_report(&mut switcher, &part, report.outcome);
                    }
                    Ok(None) => println!("Volume change ignored"),
                    Err(e) => println!("Error: {}", e),
                },
                Err(_) => println!("Not a number: {}", value),
            },
            ["drain", name, amount] => match amount.parse::<f64>() {
                Ok(amount) => {
                    match part.resources.iter_mut().find(|r| r.name == *name) {
                        Some(res) => {
                            res.amount = (res.amount - amount).max(0.0);
                            println!("{}: {:.2} / {:.2}", res.name, res.amount, res.max_amount);
                        }
                        None => println!("No such resource: {}", name),
                    }
                }
                Err(_) => println!("Not a number: {}", amount),
            },
            _ => println!("Unknown command: {}", input),
        }
    }

    tracing::info!("Procedural Tanks shutting down");
    Ok(())
}

/// Host-side reaction to a recomputation: a rebuilt resource set means the
/// panel was invalidated and its rows must be recreated.
fn react_to_report(
    switcher: &mut TankContentSwitcher<EditorPanel>,
    part: &TankPart,
    outcome: SyncOutcome,
) {
    if outcome == SyncOutcome::Rebuilt && switcher.display().is_dirty() {
        switcher.display_mut().rebuild_rows(&part.resources);
    }
}

fn display_status(switcher: &TankContentSwitcher<EditorPanel>, part: &TankPart) {
    println!();
    println!(
        "Tank type: {} | Volume: {:.3} kL",
        switcher.tank_type(),
        part.volume
    );
    if let Some(tank_type) = switcher.selected_type() {
        println!(
            "Mass: {}",
            procedural_tanks::display::mass_summary(part, tank_type.is_structural)
        );
    }
    if part.resources.is_empty() {
        println!("Resources: (none)");
    } else {
        for res in &part.resources {
            println!(
                "  {:<16} {:>10.2} / {:>10.2}",
                res.name, res.amount, res.max_amount
            );
        }
    }
}
