/*
Author      : weightbot maintainers
Create date : 2024-03-01
Description : Telegram bot that collects weight readings into a CSV log and
              replies with trend statistics and a chart.

History     : 2024-03-01       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::{csv_weight_repository_impl::*, telegram_repository_impl::*};

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod model;
use model::configs::total_config::*;

mod dto;

mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_service_impl::*, notification_service_impl::*, stats_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* Global logger and environment */
    dotenv().ok();
    let _logger: LoggerHandle = set_global_logger().unwrap_or_else(|e| {
        eprintln!("[main] Failed to initialize logger: {:?}", e);
        std::process::exit(1)
    });

    info!("Weight bot start!");

    let config: Arc<TotalConfig> = match TotalConfig::load(&SERVER_CONFIG_PATH) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!("[main] {:?}", e);
            std::process::exit(1)
        }
    };

    let telegram_repo: Arc<TelegramRepositoryImpl> =
        match TelegramRepositoryImpl::new(config.telegram()) {
            Ok(repo) => Arc::new(repo),
            Err(e) => {
                error!("[main] An issue occurred while initializing telegram_repo. {:?}", e);
                std::process::exit(1)
            }
        };

    let weight_repo: Arc<CsvWeightRepositoryImpl> = Arc::new(CsvWeightRepositoryImpl::new(
        config.storage(),
        *config.stats().timezone(),
    ));

    /* Dependency injection */
    let stats_service: StatsServiceImpl =
        StatsServiceImpl::new(*config.goal(), *config.stats().weekly_mean_days());
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();
    let notification_service: NotificationServiceImpl<TelegramRepositoryImpl> =
        NotificationServiceImpl::new(Arc::clone(&telegram_repo));

    let main_controller: Arc<
        MainController<
            CsvWeightRepositoryImpl,
            TelegramRepositoryImpl,
            StatsServiceImpl,
            ChartServiceImpl,
            NotificationServiceImpl<TelegramRepositoryImpl>,
        >,
    > = Arc::new(MainController::new(
        Arc::clone(&config),
        weight_repo,
        telegram_repo,
        stats_service,
        chart_service,
        notification_service,
    ));

    if let Err(e) = main_controller.main_task().await {
        error!("[main] {:?}", e);
        std::process::exit(1)
    }
}
