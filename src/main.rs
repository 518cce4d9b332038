use chrono::Utc;
use clap::{Parser, ValueEnum};
use indicatif::{MultiProgress, ProgressBar};
use std::fs;
use std::io::Write;
use std::process::ExitCode;
use waste_dashboard::analyze::Analyzer;
use waste_dashboard::filter::{
    filter_reports, filter_reports_for_map, filter_users, sort_reports, ReportCriteria, Selection,
    SortKey, UserCriteria,
};
use waste_dashboard::model::{
    mock_reports, mock_users, mock_wards, Dataset, Report, ReportStatus, Result, User, UserRole,
    Ward,
};
use waste_dashboard::report::{DashboardView, MapView, MarkdownReport, ReportsView, UsersView};
use waste_dashboard::utils::{logging, MultiProgressNew};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Dashboard,
    Reports,
    Users,
    Map,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Ward waste-management dashboard rendered as Markdown")]
struct Args {
    /// Users file; the built-in users are used when absent
    #[arg(long = "users")]
    users_path: Option<String>,
    /// Wards file; the built-in wards are used when absent
    #[arg(long = "wards")]
    wards_path: Option<String>,
    /// Reports file; the built-in reports are used when absent
    #[arg(long = "reports")]
    reports_path: Option<String>,
    #[arg(long = "view", value_enum, default_value_t = View::Reports)]
    view: View,
    #[arg(long = "search", default_value = "")]
    search: String,
    #[arg(long = "ward", default_value = "all")]
    ward: String,
    #[arg(long = "status", default_value = "all")]
    status: String,
    #[arg(long = "role", default_value = "all")]
    role: String,
    /// newest, oldest, status or ward; anything else sorts newest first
    #[arg(long = "sort", default_value = "newest")]
    sort: String,
    /// Assign a pending report to an officer for this run, as REPORT_ID=USER_ID
    #[arg(long = "assign", value_name = "REPORT=USER")]
    assign: Vec<String>,
    /// Start work on an assigned report for this run
    #[arg(long = "start", value_name = "REPORT")]
    start: Vec<String>,
    /// Resolve an assigned or in-progress report for this run
    #[arg(long = "resolve", value_name = "REPORT")]
    resolve: Vec<String>,
    /// Close a resolved report for this run
    #[arg(long = "close", value_name = "REPORT")]
    close: Vec<String>,
    /// Write the view to a file instead of stdout
    #[arg(long = "output")]
    output: Option<String>,
    #[arg(long = "quiet")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::initialize();
    let args = Args::parse();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let mut dataset = load_dataset(args).await?;
    apply_actions(&mut dataset, args)?;

    let markdown = render(&dataset, args)?;
    match &args.output {
        Some(path) => {
            fs::write(path, markdown)?;
            tracing::info!(path = %path, view = ?args.view, "view written");
        }
        None => std::io::stdout().write_all(markdown.as_bytes())?,
    }
    Ok(())
}

async fn load_dataset(args: &Args) -> Result<Dataset> {
    async fn load_collection<T, F>(
        name: &str,
        path: Option<&str>,
        pb: &ProgressBar,
        parser: F,
        fallback: fn() -> Vec<T>,
    ) -> Result<Vec<T>>
    where
        F: FnOnce(&str) -> Result<Vec<T>>,
    {
        let Some(path) = path else {
            let vec = fallback();
            pb.finish_with_message(format!("✅ Using built-in {name} ({} elements)", vec.len()));
            return Ok(vec);
        };
        pb.set_message(format!("Read file `{path}` ..."));
        match parser(path) {
            Ok(vec) => {
                pb.finish_with_message(format!(
                    "✅ Completed parsing file `{path}` (find {} {name})",
                    vec.len()
                ));
                tracing::debug!(path, count = vec.len(), "{name} loaded");
                Ok(vec)
            }
            Err(err) => {
                pb.abandon_with_message(format!("❌ Failed to parse `{path}`"));
                Err(format!("{path}: {err}").into())
            }
        }
    }

    let multi_progress = MultiProgress::for_terminal(args.quiet);
    let users_pb = multi_progress.add_step("Waiting users".to_string());
    let wards_pb = multi_progress.add_step("Waiting wards".to_string());
    let reports_pb = multi_progress.add_step("Waiting reports".to_string());

    let (users, wards, reports) = futures::join!(
        load_collection(
            "users",
            args.users_path.as_deref(),
            &users_pb,
            User::from_config,
            mock_users
        ),
        load_collection(
            "wards",
            args.wards_path.as_deref(),
            &wards_pb,
            Ward::from_config,
            mock_wards
        ),
        load_collection(
            "reports",
            args.reports_path.as_deref(),
            &reports_pb,
            Report::from_config,
            mock_reports
        ),
    );
    let dataset = Dataset::new(users?, wards?, reports?);
    tracing::info!(
        users = dataset.users.len(),
        wards = dataset.wards.len(),
        reports = dataset.reports.len(),
        "dataset ready"
    );
    Ok(dataset)
}

fn apply_actions(dataset: &mut Dataset, args: &Args) -> Result<()> {
    let now = Utc::now();
    for assignment in &args.assign {
        let Some((report_id, user_id)) = assignment.split_once('=') else {
            return Err(format!("Expected REPORT=USER, got `{assignment}`").into());
        };
        dataset.assign_report(report_id.trim(), user_id.trim(), now)?;
    }
    for report_id in &args.start {
        dataset.start_report(report_id.trim(), now)?;
    }
    for report_id in &args.resolve {
        dataset.resolve_report(report_id.trim(), now)?;
    }
    for report_id in &args.close {
        dataset.close_report(report_id.trim(), now)?;
    }
    Ok(())
}

fn render(dataset: &Dataset, args: &Args) -> Result<String> {
    match args.view {
        View::Dashboard => {
            DashboardView::new(dataset.analyze(), &dataset.reports).report_create()
        }
        View::Reports => {
            let criteria = ReportCriteria {
                search_term: args.search.clone(),
                ward: ward_selection(dataset, &args.ward),
                status: args.status.parse::<Selection<ReportStatus>>()?,
            };
            let sort = SortKey::from(args.sort.as_str());
            let reports = sort_reports(filter_reports(&dataset.reports, &criteria), sort);
            tracing::info!(found = reports.len(), sort = sort.as_str(), "reports filtered");
            ReportsView { reports, sort }.report_create()
        }
        View::Users => {
            let criteria = UserCriteria {
                search_term: args.search.clone(),
                role: args.role.parse::<Selection<UserRole>>()?,
            };
            let users = filter_users(&dataset.users, &criteria);
            tracing::info!(found = users.len(), "users filtered");
            UsersView { users }.report_create()
        }
        View::Map => {
            let ward = ward_selection(dataset, &args.ward);
            let status = args.status.parse::<Selection<ReportStatus>>()?;
            let markers = filter_reports_for_map(&dataset.reports, &ward, &status);
            tracing::info!(markers = markers.len(), "map markers placed");
            MapView { markers }.report_create()
        }
    }
}

fn ward_selection(dataset: &Dataset, ward: &str) -> Selection<String> {
    let selection = match ward.parse::<Selection<String>>() {
        Ok(selection) => selection,
        Err(never) => match never {},
    };
    if let Selection::Only(name) = &selection {
        if !dataset.ward_names().contains(&name.as_str()) {
            tracing::warn!(ward = %name, "ward is not in the ward list");
        }
    }
    selection
}
