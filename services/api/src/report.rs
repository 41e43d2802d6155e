use crate::infra::load_dataset;
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use enrollment_dashboard::dashboard::report::ChartSeries;
use enrollment_dashboard::dashboard::{
    compute_view, DerivedView, FilterOptions, FilterSpec, TermSelection,
};
use enrollment_dashboard::error::AppError;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum TermArg {
    All,
    Spring,
    Fall,
}

impl From<TermArg> for TermSelection {
    fn from(value: TermArg) -> Self {
        match value {
            TermArg::All => TermSelection::All,
            TermArg::Spring => TermSelection::Spring,
            TermArg::Fall => TermSelection::Fall,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Dataset CSV to load (defaults to APP_DATASET_PATH)
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Year to include; repeat or comma-separate. Defaults to every year in the dataset.
    #[arg(long = "year", value_delimiter = ',')]
    pub(crate) years: Vec<i32>,
    /// Select no years at all
    #[arg(long, conflicts_with = "years")]
    pub(crate) no_years: bool,
    /// Term filter
    #[arg(long, value_enum, default_value = "all")]
    pub(crate) term: TermArg,
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct FiltersArgs {
    /// Dataset CSV to load (defaults to APP_DATASET_PATH)
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    generated_on: NaiveDate,
    view: &'a DerivedView,
    series: Vec<ChartSeries>,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        dataset,
        years,
        no_years,
        term,
        format,
    } = args;

    let dataset = load_dataset(dataset)?;
    let filter = if no_years {
        FilterSpec::new(Vec::<i32>::new(), term.into())
    } else if years.is_empty() {
        FilterSpec::new(dataset.years(), term.into())
    } else {
        FilterSpec::new(years, term.into())
    };

    let view = compute_view(&dataset, &filter);
    let generated_on = Local::now().date_naive();

    match format {
        OutputFormat::Text => print!("{}", render_text(&view, generated_on)?),
        OutputFormat::Json => {
            let document = ReportDocument {
                generated_on,
                view: &view,
                series: view.series(),
            };
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }

    Ok(())
}

pub(crate) fn run_filters(args: FiltersArgs) -> Result<(), AppError> {
    let dataset = load_dataset(args.dataset)?;
    let options = FilterOptions::from_dataset(&dataset);

    let years: Vec<String> = options.years.iter().map(i32::to_string).collect();
    let terms: Vec<&str> = options.terms.iter().map(|term| term.label).collect();
    println!("Years: {}", years.join(", "));
    println!("Terms: {}", terms.join(", "));
    Ok(())
}

pub(crate) fn render_text(
    view: &DerivedView,
    generated_on: NaiveDate,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, view, generated_on)?;
    Ok(out)
}

fn write_report(
    out: &mut String,
    view: &DerivedView,
    generated_on: NaiveDate,
) -> std::fmt::Result {
    writeln!(out, "University Student Dashboard (generated {generated_on})")?;
    writeln!(
        out,
        "Filters: years [{}] | term {}",
        describe_years(&view.filter),
        view.filter.term.label()
    )?;
    writeln!(out, "Records matched: {}", view.record_count)?;

    if view.is_empty() {
        writeln!(
            out,
            "No records match the current selection; all metrics are zero."
        )?;
    }

    writeln!(out, "\nKey Performance Metrics")?;
    writeln!(
        out,
        "- Total Applications: {}",
        format_count(view.kpis.applications)
    )?;
    writeln!(out, "- Total Admitted: {}", format_count(view.kpis.admitted))?;
    writeln!(out, "- Total Enrolled: {}", format_count(view.kpis.enrolled))?;
    writeln!(
        out,
        "- Acceptance rate {:.1}% | yield {:.1}%",
        view.kpis.acceptance_rate * 100.0,
        view.kpis.yield_rate * 100.0
    )?;

    writeln!(out, "\nRetention Rate Over Time")?;
    for point in &view.retention_trend {
        writeln!(out, "- {}: {:.1}%", point.year, point.mean)?;
    }

    writeln!(out, "\nStudent Satisfaction Over Time")?;
    for point in &view.satisfaction_trend {
        writeln!(out, "- {}: {:.1}%", point.year, point.mean)?;
    }

    writeln!(out, "\nDepartmental Enrollment Breakdown")?;
    for total in &view.department_enrollment {
        writeln!(
            out,
            "- {}: {}",
            total.department_label,
            format_count(total.enrolled)
        )?;
    }

    if let Some(term_enrollment) = &view.term_enrollment {
        writeln!(out, "\nSpring vs Fall Enrollment Over Time")?;
        for entry in term_enrollment {
            writeln!(
                out,
                "- {} {}: {}",
                entry.year,
                entry.term_label,
                format_count(entry.enrolled)
            )?;
        }
    }

    writeln!(out, "\nDepartmental Comparison: Retention vs. Satisfaction (weighted)")?;
    for entry in &view.department_comparison {
        writeln!(
            out,
            "- {}: share {:.1}% | retention score {:.2} | satisfaction score {:.2}",
            entry.department_label,
            entry.weight * 100.0,
            entry.avg_retention,
            entry.avg_satisfaction
        )?;
    }

    Ok(())
}

fn describe_years(filter: &FilterSpec) -> String {
    filter
        .years
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders `1234567` as `1,234,567`.
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
