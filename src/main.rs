use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use energy_audit::config::AppConfig;
use energy_audit::error::AppError;
use energy_audit::telemetry;
use energy_audit::workflows::audit::{
    audit_router, AuditIngestService, AuditRecord, AuditSubmission, CheckStatus,
    InMemoryAuditStore, IngestOutcome, TechnicalReview,
};
use energy_audit::workflows::billing;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::fs::File;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Energy Audit Engine",
    about = "Run the building energy audit service or review an audit from the command line",
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
    /// Validate, compute metrics, and classify an audit submission offline
    Review(ReviewArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ReviewArgs {
    /// Path to an audit submission JSON file
    #[arg(long)]
    audit_json: PathBuf,
    /// Optional utility-bill CSV export replacing the submission's utilities
    #[arg(long)]
    utility_csv: Option<PathBuf>,
    /// Include the technical sub-check table in the output
    #[arg(long)]
    list_checks: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Review(args) => run_review(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.http.host = host;
    }
    if let Some(port) = args.port.take() {
        config.http.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let store = Arc::new(InMemoryAuditStore::new());
    let service = Arc::new(AuditIngestService::new(store));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(audit_router(service))
        .layer(prometheus_layer);

    let addr = config.http.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "energy audit engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_review(args: ReviewArgs) -> Result<(), AppError> {
    let ReviewArgs {
        audit_json,
        utility_csv,
        list_checks,
    } = args;

    let file = File::open(audit_json)?;
    let mut submission: AuditSubmission = serde_json::from_reader(file)?;

    if let Some(path) = utility_csv {
        submission.utilities = billing::import_from_path(path)?;
    }

    let store = Arc::new(InMemoryAuditStore::new());
    let service = AuditIngestService::new(store);
    let review = service.technical_review(&submission);

    match service.ingest(submission)? {
        IngestOutcome::Committed(record) => {
            render_review(&record, &review, list_checks);
        }
        IngestOutcome::Rejected(report) => {
            println!("Audit rejected by validation:");
            for (field, message) in &report.errors {
                println!("- {field}: {message}");
            }
            std::process::exit(2);
        }
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn render_review(record: &AuditRecord, review: &TechnicalReview, list_checks: bool) {
    let submission = &record.submission;
    let metrics = &record.metrics;

    println!("Energy audit review");
    println!(
        "{} | {} | {}",
        submission.name,
        submission.building_class.label(),
        submission.depth.label()
    );

    println!("\nDerived metrics");
    println!("- EPI (gross): {} kWh/m2/yr", metrics.gross_intensity);
    println!("- EPI (net area): {} kWh/m2/yr", metrics.net_intensity);
    println!("- Cost intensity: {} per sq ft", metrics.cost_intensity);
    match submission.benchmark_intensity {
        Some(benchmark) if benchmark > 0.0 => {
            println!(
                "- Rating: {} (benchmark {benchmark} kWh/m2/yr)",
                metrics.rating.label()
            );
        }
        _ => println!("- Rating: {} (no benchmark supplied)", metrics.rating.label()),
    }

    let failures = review.failures();
    if failures.is_empty() {
        println!("\nTechnical checks: no failures");
    } else {
        println!("\nTechnical check failures");
        for failure in &failures {
            println!("- {failure}");
        }
    }

    if list_checks {
        println!("\nTechnical check detail");
        println!(
            "- Window-to-wall: {} ({:.1}% of {:.0}% limit)",
            review.window_to_wall.status.label(),
            review.window_to_wall.ratio_pct,
            review.window_to_wall.limit_pct
        );
        println!(
            "- Skylight-to-roof: {} ({:.1}% of {:.0}% limit)",
            review.skylight_to_roof.status.label(),
            review.skylight_to_roof.ratio_pct,
            review.skylight_to_roof.limit_pct
        );
        match (&review.hvac.metric, review.hvac.minimum_efficiency) {
            (Some(metric), Some(minimum)) => println!(
                "- HVAC efficiency: {} (min {metric} {minimum})",
                review.hvac.status.label()
            ),
            _ => println!("- HVAC efficiency: {}", review.hvac.status.label()),
        }
        if review.lighting.status == CheckStatus::NotApplicable {
            println!("- Lighting power density: N/A");
        } else {
            println!(
                "- Lighting power density: {} ({} of max {} W/m2)",
                review.lighting.status.label(),
                review.lighting.density,
                review.lighting.ceiling
            );
        }
        match (review.motor.declared, review.motor.required) {
            (Some(declared), Some(required)) => println!(
                "- Motor class: {} (declared {}, required {})",
                review.motor.status.label(),
                declared.label(),
                required.label()
            ),
            _ => println!("- Motor class: {}", review.motor.status.label()),
        }
        println!("- Solar water heating: {}", review.solar_water.status.label());
        if let Some(complete) = review.mandatory_complete {
            println!(
                "- Mandatory walkthrough checklist: {}",
                if complete { "complete" } else { "incomplete" }
            );
        }
    }
}
