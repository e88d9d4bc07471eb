//! Report commands: load the sources, run a selection through the
//! dashboard core, and print the result.

use crate::{SelectionArgs, SourceArgs};
use anyhow::Context;
use laq_core::month::YearMonth;
use laq_core::pollutant::{Pollutant, ALL_POLLUTANTS};
use laq_core::store::{MeasurementStore, LA_OZONE_CSV, LA_PM25_CSV};
use laq_views::dashboard::{Dashboard, DashboardConfig};
use laq_views::filter::SelectionState;
use laq_views::views::ViewPayload;
use log::info;

/// Print the full view payload as pretty JSON.
pub fn run_views(sources: &SourceArgs, selection: &SelectionArgs) -> anyhow::Result<()> {
    let payload = compute_payload(sources, selection)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

/// Print only the statistics summary lines.
pub fn run_summary(sources: &SourceArgs, selection: &SelectionArgs) -> anyhow::Result<()> {
    let payload = compute_payload(sources, selection)?;
    for line in &payload.statistics {
        println!("{line}");
    }
    Ok(())
}

/// List the months available for selection, oldest first.
pub fn run_months(sources: &SourceArgs) -> anyhow::Result<()> {
    let store = load_store(sources)?;
    for month in store.months() {
        println!("{month}");
    }
    Ok(())
}

fn compute_payload(
    sources: &SourceArgs,
    selection: &SelectionArgs,
) -> anyhow::Result<ViewPayload> {
    let store = load_store(sources)?;
    let config = DashboardConfig {
        poor_air_threshold: selection.threshold,
        default_period: None,
    };
    let dashboard = Dashboard::new(store, config);
    let selection = parse_selection(selection)?;
    info!(
        "report: computing views for {} pollutant(s)",
        selection.pollutants.len()
    );
    Ok(dashboard.on_selection_changed(&selection)?)
}

fn load_store(sources: &SourceArgs) -> anyhow::Result<MeasurementStore> {
    let ozone = read_source(&sources.ozone_csv, LA_OZONE_CSV)?;
    let pm25 = read_source(&sources.pm25_csv, LA_PM25_CSV)?;
    Ok(MeasurementStore::load(&ozone, &pm25)?)
}

fn read_source(path: &Option<String>, bundled: &str) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
        None => Ok(bundled.to_string()),
    }
}

fn parse_selection(args: &SelectionArgs) -> anyhow::Result<SelectionState> {
    let period = args
        .month
        .as_deref()
        .map(str::parse::<YearMonth>)
        .transpose()?;
    let pollutants = match &args.pollutants {
        Some(list) => list
            .split(',')
            .map(|label| {
                Pollutant::from_label(label)
                    .ok_or_else(|| anyhow::anyhow!("unknown pollutant {label:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?,
        None => ALL_POLLUTANTS.to_vec(),
    };
    Ok(SelectionState { pollutants, period })
}
