use color_eyre::eyre::eyre;
use color_eyre::Result;
use market_dashboard_core::chart::ChartSlot;
use market_dashboard_core::{
    run_request, Dashboard, DashboardConfig, DashboardView, LocationOptions, Period, Settled,
};
use std::cell::RefCell;

use crate::source::HttpSource;

/// Run the application in headless mode (no UI)
pub async fn run_headless(config: &DashboardConfig, json: bool) -> Result<()> {
    let source = HttpSource::new(config)?;

    let mut locations = LocationOptions::new(source.suburbs().await?);
    let gnaf_id = locations
        .select_initial(config.default_location.as_deref())
        .map(|suburb| suburb.gnaf_id.clone())
        .ok_or_else(|| eyre!("No suburbs available from {}", source.base_url()))?;

    let dashboard = RefCell::new(Dashboard::new(config));
    let view = RefCell::new(DashboardView::new(config.default_period));
    let pending = {
        let mut surface = view.borrow_mut();
        dashboard
            .borrow_mut()
            .select_location(&gnaf_id, &mut *surface)
            .ok_or_else(|| eyre!("Nothing to load for {gnaf_id}"))?
    };

    match run_request(&dashboard, &view, &source, pending).await {
        Settled::Rendered => {}
        Settled::Failed(error) => return Err(eyre!(error.user_message())),
        Settled::Discarded => return Err(eyre!("Request was superseded")),
    }

    let generated_at = chrono::Local::now().to_rfc3339();
    let report = build_report(&view.borrow(), &gnaf_id, generated_at)
        .ok_or_else(|| eyre!("Dashboard has no content to report"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report_text(&report));
    }

    Ok(())
}

fn build_report(
    view: &DashboardView,
    gnaf_id: &str,
    generated_at: String,
) -> Option<HeadlessReport> {
    let header = view.header()?;
    let kpis = view.kpis()?;

    let charts = [ChartSlot::Price, ChartSlot::Yield]
        .into_iter()
        .filter_map(|slot| view.chart(slot))
        .map(|spec| HeadlessChart {
            title: spec.title.clone(),
            points: spec.len(),
            latest: spec.tooltip_lines(spec.len().saturating_sub(1)),
        })
        .collect();

    let transactions = view
        .table()
        .unwrap_or_default()
        .iter()
        .map(|row| HeadlessTransaction {
            date: row.date.clone(),
            address: row.address.clone(),
            price: row.price.clone(),
            transaction_type: row.transaction_type.clone(),
        })
        .collect();

    Some(HeadlessReport {
        generated_at,
        gnaf_id: gnaf_id.to_string(),
        title: header.title.clone(),
        details: header.details.clone(),
        period: view.active_period(),
        median_price: kpis.median_price.clone(),
        growth_5y: kpis.growth.text.clone(),
        avg_yield: kpis.avg_yield.clone(),
        charts,
        transactions,
    })
}

fn render_report_text(report: &HeadlessReport) -> String {
    let mut lines = vec![
        String::new(),
        report.title.clone(),
        "=".repeat(report.title.chars().count().max(3)),
        report.details.clone(),
        String::new(),
        format!("Median Price: {}", report.median_price),
        format!("5-Year Growth: {}", report.growth_5y),
        format!("Rental Yield: {}", report.avg_yield),
    ];

    for chart in &report.charts {
        lines.push(String::new());
        lines.push(format!("{} ({} points)", chart.title, chart.points));
        lines.extend(chart.latest.iter().map(|line| format!("- {line}")));
    }

    if !report.transactions.is_empty() {
        lines.push(String::new());
        lines.push("Recent Transactions:".to_string());
        lines.extend(report.transactions.iter().map(|row| {
            format!(
                "- {} | {} | {} | {}",
                row.date, row.address, row.price, row.transaction_type
            )
        }));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[derive(Debug, serde::Serialize)]
struct HeadlessReport {
    generated_at: String,
    gnaf_id: String,
    title: String,
    details: String,
    period: Period,
    median_price: String,
    growth_5y: String,
    avg_yield: String,
    charts: Vec<HeadlessChart>,
    transactions: Vec<HeadlessTransaction>,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessChart {
    title: String,
    points: usize,
    latest: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessTransaction {
    date: String,
    address: String,
    price: String,
    transaction_type: String,
}
