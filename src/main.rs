/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : Fetches ad performance metrics from BigQuery (or a built-in sample
              set when the warehouse is unreachable) and renders them as PNG charts.

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::bigquery_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod model;
use model::configs::{system_config::*, total_config::*, warehouse_config::*};

mod dto;
use dto::workflow_report::*;

mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    chart_service_impl::*, derived_field_service_impl::*, extract_service_impl::*,
    fallback_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    /* Global logger and initial settings */
    dotenv().ok();

    let system_config: &SystemConfig = get_system_config_info();

    let _logger: Option<LoggerHandle> = match set_global_logger(system_config.log_dir()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("[main] Logger could not be started, continuing without it: {:?}", e);
            None
        }
    };

    info!("Ads metrics visualizer start!");

    /* The config was read before the logger existed, report its outcome now */
    match get_config_load_error() {
        Some(cause) => error!("[main] Server config not loaded: {}", cause),
        None => info!("Server config loaded from {}", *SERVER_CONFIG_PATH),
    }

    let warehouse_config: &WarehouseConfig = get_warehouse_config_info();

    /* Warehouse client: a failure here disables extraction for this run */
    let warehouse: Option<BigQueryRepositoryImpl> =
        match BigQueryRepositoryImpl::new(warehouse_config) {
            Ok(repo) => {
                info!(
                    "Warehouse client initialized for project: {}",
                    warehouse_config.project_id()
                );
                Some(repo)
            }
            Err(e) => {
                error!("[main] An issue occurred while initializing the warehouse client. {:?}", e);
                None
            }
        };

    /* Dependency injection */
    let extract_service: ExtractServiceImpl<BigQueryRepositoryImpl> =
        ExtractServiceImpl::new(warehouse);

    if !extract_service.is_enabled() {
        warn!("Warehouse extraction is disabled, the sample data set will be used.");
    }

    let main_controller: MainController<
        ExtractServiceImpl<BigQueryRepositoryImpl>,
        FallbackServiceImpl,
        DerivedFieldServiceImpl,
        ChartServiceImpl,
    > = MainController::new(
        extract_service,
        FallbackServiceImpl::new(),
        DerivedFieldServiceImpl::new(),
        ChartServiceImpl::new(),
    );

    let report: WorkflowReport = main_controller
        .main_task(
            warehouse_config.project_id(),
            warehouse_config.dataset_id(),
            warehouse_config.table_id(),
            Path::new(system_config.output_dir()),
        )
        .await;

    info!(
        "Ads metrics visualizer finished: {} data, {} rows, {} charts written.",
        report.data_source(),
        report.row_count(),
        report.written_count()
    );
}
