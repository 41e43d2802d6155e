use crate::report::{run_filters, run_report, FiltersArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use enrollment_dashboard::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "University Student Dashboard",
    about = "Serve or print admissions and enrollment metrics for a university dataset",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print KPIs, trends and department comparison for a filter selection
    Report(ReportArgs),
    /// List the years and terms available for filtering
    Filters(FiltersArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured dataset CSV path
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report(args) => run_report(args),
        Command::Filters(args) => run_filters(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{OutputFormat, TermArg};

    #[test]
    fn report_accepts_repeated_and_comma_separated_years() {
        let cli = Cli::try_parse_from([
            "enrollment-dashboard",
            "report",
            "--year",
            "2015,2016",
            "--year",
            "2018",
            "--term",
            "fall",
            "--format",
            "json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Report(args)) => {
                assert_eq!(args.years, vec![2015, 2016, 2018]);
                assert!(matches!(args.term, TermArg::Fall));
                assert!(matches!(args.format, OutputFormat::Json));
            }
            other => panic!("expected report command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["enrollment-dashboard"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
