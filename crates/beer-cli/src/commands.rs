use std::collections::BTreeSet;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use beer_cli::config::DashboardConfig;
use beer_cli::render::{hierarchy_table, map_table, page_footer, page_table, summary_table};
use beer_cli::session::run_session;
use beer_explore::Dashboard;
use beer_ingest::DatasetStore;
use beer_model::{
    ClickData, DashboardState, DashboardView, HierarchyChart, PageWindow, SortDirection, SortSpec,
};

use crate::cli::{Cli, HierarchyArgs, HierarchyFormatArg, ViewArgs, ViewFormatArg};

/// Configuration and dataset shared by every command.
pub struct Loaded {
    pub config: DashboardConfig,
    pub store: DatasetStore,
}

impl Loaded {
    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard::new(&self.store, self.config.view_options())
    }

    fn initial_state(&self) -> DashboardState {
        DashboardState::default().with_page(PageWindow {
            page_index: 0,
            page_size: self.config.table.page_size,
        })
    }
}

pub fn load(cli: &Cli) -> Result<Loaded> {
    let config = DashboardConfig::load_or_default(cli.config.as_deref())?
        .with_paths(cli.beers.clone(), cli.countries.clone());
    let paths = config.dataset_paths();
    let span = info_span!("load", beers = %paths.beers.display());
    let _guard = span.enter();
    let store = DatasetStore::load(&paths).with_context(|| {
        format!(
            "load dataset ({}, {})",
            paths.beers.display(),
            paths.countries.display()
        )
    })?;
    Ok(Loaded { config, store })
}

pub fn run_summary(loaded: &Loaded) -> Result<()> {
    let store = &loaded.store;
    let origins: BTreeSet<&str> = store
        .beers()
        .iter()
        .map(|beer| beer.country.as_str())
        .collect();
    let mapped = origins
        .iter()
        .filter(|country| store.country(country).is_some())
        .count();
    println!("Beers: {}", store.beers().len());
    println!("Columns: {}", store.columns().join(", "));
    println!(
        "Countries: {} in table, {} of {} origins mapped",
        store.countries().len(),
        mapped,
        origins.len()
    );
    println!("{}", summary_table(&loaded.dashboard().hierarchy()));
    Ok(())
}

pub fn run_view(loaded: &Loaded, args: &ViewArgs) -> Result<()> {
    let state = view_state(loaded, args);
    let view = loaded.dashboard().on_interaction(&state);
    info!(
        selection = %state.selection(),
        rows = view.table.total_rows,
        "view resolved"
    );
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        ViewFormatArg::Table => {
            writeln!(out, "Selection: {}", describe_selection(&state))?;
            writeln!(out, "{}", map_table(&view.map))?;
            writeln!(out, "{}", page_table(&view.table))?;
            writeln!(out, "{}", page_footer(&view.table))?;
        }
        ViewFormatArg::Json => {
            serde_json::to_writer_pretty(&mut out, &view).context("encode view")?;
            writeln!(out)?;
        }
        ViewFormatArg::Csv => write_page_csv(&mut out, &view)?,
    }
    Ok(())
}

fn view_state(loaded: &Loaded, args: &ViewArgs) -> DashboardState {
    let page_size = args
        .page_size
        .map_or(loaded.config.table.page_size, |size| size as usize);
    let mut state = DashboardState::default().with_page(PageWindow {
        page_index: args.page,
        page_size,
    });
    if let Some(select) = &args.select {
        state = state.with_click(ClickData::node(select.clone()));
    }
    if let Some(column) = &args.sort {
        let direction = args.direction.unwrap_or(if args.descending {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        });
        state = state.with_sort(Some(SortSpec::new(column.clone(), direction)));
    }
    state
}

fn describe_selection(state: &DashboardState) -> String {
    let selection = state.selection();
    if selection.is_empty() {
        "all beers".to_string()
    } else {
        selection.to_string()
    }
}

/// Writes the visible page as CSV: header of column names, one record per row.
fn write_page_csv<W: Write>(out: W, view: &DashboardView) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(view.table.columns.iter().map(|c| c.name.as_str()))
        .context("write CSV header")?;
    for row in &view.table.rows {
        writer
            .write_record(row.iter().map(ToString::to_string))
            .context("write CSV row")?;
    }
    writer.flush().context("flush CSV")?;
    Ok(())
}

pub fn run_hierarchy(loaded: &Loaded, args: &HierarchyArgs) -> Result<()> {
    let chart = hierarchy_chart(loaded, args.max_depth);
    match args.format {
        HierarchyFormatArg::Table => {
            println!("{}", hierarchy_table(&chart, args.max_depth));
        }
        HierarchyFormatArg::Json => {
            let text = serde_json::to_string_pretty(&chart).context("encode hierarchy")?;
            println!("{text}");
        }
    }
    Ok(())
}

/// The drill-down chart without nodes deeper than `max_depth`.
fn hierarchy_chart(loaded: &Loaded, max_depth: usize) -> HierarchyChart {
    let mut chart = loaded.dashboard().hierarchy();
    chart.nodes.retain(|node| node.depth <= max_depth);
    chart
}

pub fn run_interactive(loaded: &Loaded) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &loaded.dashboard(),
        loaded.initial_state(),
        stdin.lock(),
        stdout.lock(),
    )?;
    Ok(())
}
