use clap::Args;
use estate_atlas::error::AppError;
use estate_atlas::lifecycle::{resolve_stage_index, LifecycleEntity, LifecycleProgress};
use estate_atlas::locations::{LocationDirectory, LocationSearchResult};
use serde::Serialize;
use std::io::Write;

#[derive(Args, Debug)]
pub(crate) struct LocationSearchArgs {
    /// Case-insensitive fragment of a city, area, or compound name
    pub(crate) query: String,
}

#[derive(Args, Debug)]
pub(crate) struct LifecycleArgs {
    /// Entity type: tenant or property
    pub(crate) entity: String,
    /// Current status label, e.g. "Rented" or "Pending"
    pub(crate) label: String,
}

#[derive(Debug, Serialize)]
struct LocationCsvRow<'a> {
    kind: &'static str,
    id: &'static str,
    name: &'static str,
    parent_name: &'static str,
    full_path: &'a str,
}

impl<'a> From<&'a LocationSearchResult> for LocationCsvRow<'a> {
    fn from(entry: &'a LocationSearchResult) -> Self {
        Self {
            kind: entry.kind.label(),
            id: entry.id,
            name: entry.name,
            parent_name: entry.parent_name.unwrap_or_default(),
            full_path: &entry.full_path,
        }
    }
}

pub(crate) fn run_location_search(args: LocationSearchArgs) -> Result<(), AppError> {
    let results = LocationDirectory::standard().search(&args.query);
    if results.is_empty() {
        println!("No locations match '{}'", args.query);
        return Ok(());
    }

    println!("{} location(s) match '{}'", results.len(), args.query);
    for result in &results {
        render_location(result);
    }
    Ok(())
}

pub(crate) fn run_location_export<W: Write>(out: W) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    for entry in &LocationDirectory::standard().flatten() {
        writer
            .serialize(LocationCsvRow::from(entry))
            .map_err(|err| AppError::Export(Box::new(err)))?;
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn run_lifecycle_resolve(args: LifecycleArgs) -> Result<(), AppError> {
    let entity: LifecycleEntity = args.entity.parse()?;
    let progress = resolve_stage_index(entity, &args.label);
    render_progress(&progress, &args.label);
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let directory = LocationDirectory::standard();

    println!("Location directory");
    println!(
        "- {} cities | {} areas | {} compounds | {} regions",
        directory.cities().len(),
        directory.areas().len(),
        directory.compounds().len(),
        directory.regions().len()
    );
    for region in directory.regions() {
        let areas = directory.areas_by_region(region.id);
        println!(
            "  - {} ({} cities, {} areas)",
            region.name,
            region.city_ids.len(),
            areas.len()
        );
    }

    for query in ["Mivida", "zayed", "coast"] {
        println!("\nSearch '{query}'");
        for result in directory.search(query) {
            render_location(&result);
        }
    }

    println!("\nLifecycle stages");
    let samples = [
        (LifecycleEntity::Tenant, "Rented"),
        (LifecycleEntity::Property, "Active"),
        (LifecycleEntity::Property, "Pending"),
        (LifecycleEntity::Property, "Rejected"),
    ];
    for (entity, label) in samples {
        render_progress(&resolve_stage_index(entity, label), label);
    }

    Ok(())
}

fn render_location(result: &LocationSearchResult) {
    println!("- [{}] {} ({})", result.kind.label(), result.full_path, result.id);
}

fn render_progress(progress: &LifecycleProgress, label: &str) {
    let note = if progress.matched {
        String::new()
    } else {
        format!(" (unrecognised label '{label}', showing first stage)")
    };
    println!(
        "- {} '{}' -> stage {} of {}: {}{}",
        progress.entity.label(),
        label,
        progress.current_index + 1,
        progress.stages.len(),
        progress.current_label,
        note
    );

    let timeline = progress
        .stage_states()
        .into_iter()
        .map(|(stage, state)| format!("{stage} [{}]", state.label()))
        .collect::<Vec<_>>()
        .join(" > ");
    println!("  {timeline}");
}
