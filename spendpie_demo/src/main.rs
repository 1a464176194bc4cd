// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host demo for `spendpie_view`.
//!
//! Loads the bundled spending payload (or `--payload PATH`), lays the chart out in a
//! phone-sized view, replays taps, survives a simulated rotation, and writes an SVG
//! snapshot after each step.
//!
//! ```text
//! spendpie_demo [--payload PATH] [--out-dir DIR] [--size WxH]
//!               [--unit UNIT] [--all-percents] [X,Y ...]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use kurbo::Point;
use spendpie_charts::{PercentLabels, PieStyle};
use spendpie_core::Record;
use spendpie_view::{
    MeasureSpec, PieChartView, SavedState, SvgCanvas, TouchEvent, ViewConfig, payload,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const BUNDLED_PAYLOAD: &str = include_str!("../data/payload.json");

#[derive(Debug, Parser)]
#[command(name = "spendpie_demo")]
#[command(about = "Render spending as a pie chart and replay taps into SVG snapshots")]
struct Options {
    /// Spending payload (JSON array of records); the bundled one when omitted
    #[arg(long)]
    payload: Option<PathBuf>,

    /// Directory the snapshots are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// View size in pixels
    #[arg(long, value_name = "WxH", default_value = "1080x1920", value_parser = parse_size)]
    size: (u32, u32),

    /// Unit shown after the selected amount, e.g. "руб"
    #[arg(long)]
    unit: Option<String>,

    /// Draw a percentage on every slice, not only the selected one
    #[arg(long)]
    all_percents: bool,

    /// Taps to replay; one in the middle of every slice when omitted
    #[arg(value_name = "X,Y", value_parser = parse_tap)]
    taps: Vec<Point>,
}

impl Options {
    fn style(&self) -> PieStyle {
        let mut style = PieStyle::default();
        if let Some(unit) = &self.unit {
            style = style.with_amount_unit(unit.as_str());
        }
        if self.all_percents {
            style = style.with_percent_labels(PercentLabels::All);
        }
        style
    }
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("{s:?} does not look like 1080x1920"))?;
    let w = w.parse().map_err(|e| format!("width {w:?}: {e}"))?;
    let h = h.parse().map_err(|e| format!("height {h:?}: {e}"))?;
    Ok((w, h))
}

fn parse_tap(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("{s:?} does not look like X,Y"))?;
    let x = x.parse().map_err(|e| format!("x {x:?}: {e}"))?;
    let y = y.parse().map_err(|e| format!("y {y:?}: {e}"))?;
    Ok(Point::new(x, y))
}

fn load(options: &Options) -> anyhow::Result<Vec<Record>> {
    let records = match &options.payload {
        Some(path) => payload::load_records(path)?,
        None => payload::parse_records(BUNDLED_PAYLOAD).context("bundled payload is malformed")?,
    };
    for record in &records {
        debug!(category = %record.category, amount = record.amount, "record");
    }
    Ok(records)
}

/// Taps in the middle of every slice's ring, for runs without explicit taps.
fn default_taps(view: &PieChartView) -> Vec<Point> {
    let geometry = view.geometry();
    view.slices()
        .slices()
        .iter()
        .map(|slice| {
            let mid = (slice.start_angle + slice.angle / 2.0).to_radians();
            Point::new(
                geometry.center.x + geometry.radius * mid.cos(),
                geometry.center.y + geometry.radius * mid.sin(),
            )
        })
        .collect()
}

fn snapshot(view: &mut PieChartView, dir: &Path, name: &str) -> anyhow::Result<()> {
    let (width, height) = view.size();
    let mut canvas = SvgCanvas::new(width, height);
    view.draw(&mut canvas);
    let path = dir.join(name);
    std::fs::write(&path, canvas.to_svg_string())
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote snapshot");
    Ok(())
}

fn build_view(records: &[Record], options: &Options) -> PieChartView {
    let mut view =
        PieChartView::new(ViewConfig::default().with_density(3.0)).with_style(options.style());
    let (width, height) = view.on_measure(
        MeasureSpec::Exactly(options.size.0),
        MeasureSpec::Exactly(options.size.1),
    );
    view.on_size_changed(f64::from(width), f64::from(height));
    view.set_data(records);
    view.set_on_category_click_listener(|category| {
        info!(category, "category tapped");
    });
    view
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = Options::parse();
    std::fs::create_dir_all(&options.out_dir)
        .with_context(|| format!("create {}", options.out_dir.display()))?;

    let records = load(&options)?;
    info!(records = records.len(), "loaded spending records");

    let mut view = build_view(&records, &options);
    snapshot(&mut view, &options.out_dir, "spendpie_0.svg")?;

    let taps = if options.taps.is_empty() {
        default_taps(&view)
    } else {
        options.taps.clone()
    };
    for (i, tap) in taps.iter().enumerate() {
        if view.on_touch_event(&TouchEvent::down(tap.x, tap.y)) {
            snapshot(&mut view, &options.out_dir, &format!("spendpie_{}.svg", i + 1))?;
        }
    }

    // Simulate a rotation: the old view goes away, a new one restores its state.
    let bundle = view.save_state(None).to_json()?;
    let mut rotated = build_view(&records, &options);
    rotated.restore_state(SavedState::from_json(&bundle)?);
    if rotated.selected_category() != view.selected_category() {
        bail!("selection was not restored after rotation");
    }
    snapshot(&mut rotated, &options.out_dir, "spendpie_rotated.svg")?;

    Ok(())
}
