use crate::common::*;

use crate::dto::{stats::stats_request::*, stats::weight_stats::*, telegram::telegram_update::*};

use crate::enums::{bot_command::*, stats_window::*};

use crate::model::{
    configs::total_config::*,
    reading::{weight_band::*, weight_reading::*},
};

use crate::traits::repository_traits::{telegram_repository::*, weight_repository::*};
use crate::traits::service_traits::{chart_service::*, notification_service::*, stats_service::*};

use crate::utils_modules::time_utils::*;

const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

pub struct MainController<W, T, S, C, N>
where
    W: WeightRepository,
    T: TelegramRepository,
    S: StatsService,
    C: ChartService,
    N: NotificationService,
{
    config: Arc<TotalConfig>,
    weight_repo: Arc<W>,
    telegram_repo: Arc<T>,
    stats_service: S,
    chart_service: C,
    notification_service: N,
    weight_band: WeightBand,
}

impl<W, T, S, C, N> MainController<W, T, S, C, N>
where
    W: WeightRepository + 'static,
    T: TelegramRepository + 'static,
    S: StatsService + 'static,
    C: ChartService + 'static,
    N: NotificationService + 'static,
{
    pub fn new(
        config: Arc<TotalConfig>,
        weight_repo: Arc<W>,
        telegram_repo: Arc<T>,
        stats_service: S,
        chart_service: C,
        notification_service: N,
    ) -> Self {
        let weight_band: WeightBand = WeightBand::from_stats_config(config.stats());

        MainController {
            config,
            weight_repo,
            telegram_repo,
            stats_service,
            chart_service,
            notification_service,
            weight_band,
        }
    }

    #[doc = r#"
        Main loop of the bot.

        1. Makes sure the weight log exists (a failure here is fatal).
        2. Long-polls Telegram for updates and acknowledges them by advancing the offset.
        3. Hands every update to its own task, so a failing or slow reply never
           holds up the others. A failed poll is logged and retried after a short delay.

        # Returns
        * `anyhow::Result<()>` - only returns on a startup failure
    "#]
    pub async fn main_task(self: Arc<Self>) -> anyhow::Result<()> {
        self.weight_repo
            .initialize_store()
            .await
            .context("[MainController->main_task] Failed to initialize the weight log")?;

        info!("Polling Telegram for updates");

        let mut offset: i64 = 0;

        loop {
            let updates: Vec<TelegramUpdate> = match self.telegram_repo.get_updates(offset).await {
                Ok(updates) => updates,
                Err(e) => {
                    error!("[MainController->main_task] Failed to fetch updates: {:?}", e);
                    sleep(POLL_RETRY_DELAY).await;
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);

                let controller: Arc<Self> = Arc::clone(&self);
                tokio::spawn(async move {
                    controller.dispatch_update(update).await;
                });
            }
        }
    }

    #[doc = "Routes one update to its handler and turns a handler error into a failure notice."]
    pub async fn dispatch_update(&self, update: TelegramUpdate) {
        let Some((chat_id, text)) = update.text_message() else {
            return;
        };

        if !self.config.telegram().is_chat_allowed(chat_id) {
            warn!(
                "[MainController->dispatch_update] Ignoring update {} from chat {}",
                update.update_id, chat_id
            );
            return;
        }

        let result: anyhow::Result<()> = if let Some(command) = parse_bot_command(text) {
            match command {
                BotCommand::Start => self.handle_start(chat_id).await,
                BotCommand::Stats(days) => {
                    let window: StatsWindow = days.map_or(StatsWindow::Full, StatsWindow::LastDays);
                    self.handle_stats(chat_id, StatsRequest::new(window, true))
                        .await
                }
            }
        } else if let Some(weight) = parse_weight(text, &self.weight_band) {
            self.handle_weight(chat_id, weight, text.trim()).await
        } else {
            return;
        };

        if let Err(e) = result {
            error!("Update {:?} caused error {:?}", update, e);

            if let Err(notice_err) = self.notification_service.send_failure_notice(chat_id).await {
                error!(
                    "[MainController->dispatch_update] Failed to send failure notice to chat {}: {:?}",
                    chat_id, notice_err
                );
            }
        }
    }

    async fn handle_start(&self, chat_id: i64) -> anyhow::Result<()> {
        self.notification_service.send_welcome(chat_id).await
    }

    #[doc = "Stores an accepted weight, then replies with statistics over the recent window."]
    async fn handle_weight(
        &self,
        chat_id: i64,
        weight: f64,
        weight_text: &str,
    ) -> anyhow::Result<()> {
        self.notification_service.send_typing(chat_id).await?;

        let reading: WeightReading =
            WeightReading::new(now_in(self.config.stats().timezone()), weight);
        self.weight_repo.append_reading(&reading).await?;

        self.notification_service
            .send_weight_stored(chat_id, weight_text)
            .await?;

        let recent: StatsWindow = StatsWindow::LastDays(*self.config.stats().recent_window_days());
        self.handle_stats(chat_id, StatsRequest::new(recent, false))
            .await
    }

    #[doc = r#"
        Statistics reply: summary text, chart image, progress text.

        The chart lives in a temporary file owned by this call; it is removed when
        `chart_file` drops, whether or not the upload succeeded.
    "#]
    async fn handle_stats(&self, chat_id: i64, request: StatsRequest) -> anyhow::Result<()> {
        self.notification_service.send_typing(chat_id).await?;

        let readings: Vec<WeightReading> = self.weight_repo.load_readings().await?;
        let stats: WeightStats = self
            .stats_service
            .compute_weight_stats(&readings, &request)?;

        info!(
            "Stats for chat {} over the {}: {} readings, trend {:.2} -> {:.2}kg",
            chat_id,
            request.window,
            stats.window_readings.len(),
            stats.trend.start_weight,
            stats.trend.end_weight
        );

        let now: DateTime<Tz> = now_in(self.config.stats().timezone());
        self.notification_service
            .send_stats_summary(chat_id, &stats, &now)
            .await?;

        self.notification_service.send_typing(chat_id).await?;

        let chart_file: NamedTempFile = tempfile::Builder::new()
            .prefix("weightbot_")
            .suffix(".png")
            .tempfile()
            .context("[MainController->handle_stats] Failed to create chart file")?;

        self.chart_service
            .generate_weight_chart(&stats, chart_file.path())
            .await?;
        self.notification_service
            .send_chart(chat_id, chart_file.path())
            .await?;

        drop(chart_file);

        self.notification_service.send_progress(chat_id, &stats).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::configs::{
        goal_config::*, stats_config::*, storage_config::*, telegram_config::*,
    };
    use crate::repository::csv_weight_repository_impl::*;
    use crate::service::{notification_service_impl::*, stats_service_impl::*};

    #[derive(Debug, Clone, PartialEq)]
    enum Sent {
        Text(i64, String),
        Typing(i64),
        Photo { chat_id: i64, existed: bool },
    }

    #[derive(Default)]
    struct FakeTelegram {
        sent: Mutex<Vec<Sent>>,
    }

    #[async_trait]
    impl TelegramRepository for FakeTelegram {
        async fn get_updates(&self, _offset: i64) -> anyhow::Result<Vec<TelegramUpdate>> {
            Ok(Vec::new())
        }

        async fn send_message(&self, chat_id: i64, text: &str) -> anyhow::Result<()> {
            self.sent.lock().await.push(Sent::Text(chat_id, text.to_string()));
            Ok(())
        }

        async fn send_typing(&self, chat_id: i64) -> anyhow::Result<()> {
            self.sent.lock().await.push(Sent::Typing(chat_id));
            Ok(())
        }

        async fn send_photo(&self, chat_id: i64, photo_path: &Path) -> anyhow::Result<()> {
            let existed: bool = photo_path.is_file();
            self.sent.lock().await.push(Sent::Photo { chat_id, existed });
            Ok(())
        }
    }

    /* writes a placeholder image, or fails after touching the file */
    #[derive(Default)]
    struct FakeChart {
        fail: bool,
        paths: Mutex<Vec<PathBuf>>,
    }

    #[async_trait]
    impl ChartService for FakeChart {
        async fn generate_weight_chart(
            &self,
            _stats: &WeightStats,
            output_path: &Path,
        ) -> anyhow::Result<()> {
            fs::write(output_path, b"png")?;
            self.paths.lock().await.push(output_path.to_path_buf());

            if self.fail {
                return Err(anyhow!("renderer exploded"));
            }
            Ok(())
        }
    }

    type TestController = MainController<
        CsvWeightRepositoryImpl,
        FakeTelegram,
        StatsServiceImpl,
        FakeChart,
        NotificationServiceImpl<FakeTelegram>,
    >;

    struct Harness {
        _dir: tempfile::TempDir,
        controller: TestController,
        telegram: Arc<FakeTelegram>,
        repo: Arc<CsvWeightRepositoryImpl>,
    }

    async fn harness(allowed_chat_ids: Vec<i64>, chart_fails: bool) -> Harness {
        let dir = tempfile::tempdir().unwrap();

        let config = Arc::new(TotalConfig {
            telegram: TelegramConfig {
                bot_token: "123:abc".to_string(),
                api_url: "http://localhost".to_string(),
                poll_timeout_sec: 1,
                allowed_chat_ids,
            },
            storage: StorageConfig {
                csv_path: dir.path().join("weight.csv"),
            },
            goal: GoalConfig::new(-1.0),
            stats: StatsConfig::default(),
        });

        let repo = Arc::new(CsvWeightRepositoryImpl::new(
            config.storage(),
            *config.stats().timezone(),
        ));
        repo.initialize_store().await.unwrap();

        let telegram = Arc::new(FakeTelegram::default());

        let controller = MainController::new(
            Arc::clone(&config),
            Arc::clone(&repo),
            Arc::clone(&telegram),
            StatsServiceImpl::new(*config.goal(), *config.stats().weekly_mean_days()),
            FakeChart {
                fail: chart_fails,
                ..FakeChart::default()
            },
            NotificationServiceImpl::new(Arc::clone(&telegram)),
        );

        Harness {
            _dir: dir,
            controller,
            telegram,
            repo,
        }
    }

    fn text_update(update_id: i64, chat_id: i64, text: &str) -> TelegramUpdate {
        serde_json::from_value(json!({
            "update_id": update_id,
            "message": {
                "message_id": update_id,
                "chat": { "id": chat_id },
                "text": text,
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn start_sends_welcome() {
        let h = harness(Vec::new(), false).await;

        h.controller.dispatch_update(text_update(1, 7, "/start")).await;

        assert_eq!(
            *h.telegram.sent.lock().await,
            vec![Sent::Text(7, WELCOME_MESSAGE.to_string())]
        );
    }

    #[tokio::test]
    async fn weight_is_stored_and_followed_by_stats() {
        let h = harness(Vec::new(), false).await;

        h.controller.dispatch_update(text_update(1, 7, " 85.5 ")).await;

        let readings = h.repo.load_readings().await.unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].weight, 85.5);

        let sent = h.telegram.sent.lock().await.clone();
        assert_eq!(sent.len(), 7);
        assert_eq!(sent[0], Sent::Typing(7));
        assert_eq!(sent[1], Sent::Text(7, "85.5kg successfully stored!".to_string()));
        assert_eq!(sent[2], Sent::Typing(7));
        assert!(matches!(&sent[3], Sent::Text(7, text) if text.starts_with("Your weight mean the past week is 85.5kg")));
        assert_eq!(sent[4], Sent::Typing(7));
        assert_eq!(sent[5], Sent::Photo { chat_id: 7, existed: true });
        assert_eq!(sent[6], Sent::Text(7, "You have lost 0.0kg in 0 days".to_string()));
    }

    #[tokio::test]
    async fn acknowledgement_echoes_the_typed_weight() {
        let h = harness(Vec::new(), false).await;

        h.controller.dispatch_update(text_update(1, 7, " 85.50\n")).await;

        let sent = h.telegram.sent.lock().await.clone();
        assert_eq!(sent[1], Sent::Text(7, "85.50kg successfully stored!".to_string()));
        assert_eq!(h.repo.load_readings().await.unwrap()[0].weight, 85.5);
    }

    #[tokio::test]
    async fn huge_stats_window_falls_back_to_full_history() {
        let h = harness(Vec::new(), false).await;
        h.controller.dispatch_update(text_update(1, 7, "84")).await;
        h.telegram.sent.lock().await.clear();

        h.controller
            .dispatch_update(text_update(2, 7, "/stats 200000000000000"))
            .await;
        h.controller
            .dispatch_update(text_update(3, 7, &format!("/stats {}", i64::MAX)))
            .await;

        let sent = h.telegram.sent.lock().await.clone();
        assert_eq!(sent.len(), 10);
        for reply in sent.chunks(5) {
            assert_eq!(reply[0], Sent::Typing(7));
            assert!(matches!(&reply[1], Sent::Text(7, text) if text.starts_with("Your weight mean the past week is 84.0kg")));
            assert_eq!(reply[3], Sent::Photo { chat_id: 7, existed: true });
            assert_eq!(reply[4], Sent::Text(7, "You have lost 0.0kg in 0 days".to_string()));
        }
        assert!(!sent.contains(&Sent::Text(7, FAILURE_MESSAGE.to_string())));
    }

    #[tokio::test]
    async fn rejected_text_is_ignored() {
        let h = harness(Vec::new(), false).await;

        for (i, text) in ["hello", "200", "50", "/help"].iter().enumerate() {
            h.controller.dispatch_update(text_update(i as i64, 7, text)).await;
        }

        assert!(h.telegram.sent.lock().await.is_empty());
        assert!(h.repo.load_readings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn stats_on_empty_log_sends_failure_notice() {
        let h = harness(Vec::new(), false).await;

        h.controller.dispatch_update(text_update(1, 7, "/stats")).await;

        let sent = h.telegram.sent.lock().await.clone();
        assert_eq!(
            sent,
            vec![Sent::Typing(7), Sent::Text(7, FAILURE_MESSAGE.to_string())]
        );
    }

    #[tokio::test]
    async fn chart_failure_cleans_up_and_notifies() {
        let h = harness(Vec::new(), true).await;

        h.controller.dispatch_update(text_update(1, 7, "82")).await;

        let sent = h.telegram.sent.lock().await.clone();
        assert_eq!(sent.last(), Some(&Sent::Text(7, FAILURE_MESSAGE.to_string())));
        assert!(!sent.iter().any(|s| matches!(s, Sent::Photo { .. })));

        /* the reading itself was stored before the failure */
        assert_eq!(h.repo.load_readings().await.unwrap().len(), 1);

        let paths = h.controller.chart_service.paths.lock().await.clone();
        assert_eq!(paths.len(), 1);
        assert!(!paths[0].exists());
    }

    #[tokio::test]
    async fn chart_file_is_removed_after_upload() {
        let h = harness(Vec::new(), false).await;

        h.controller.dispatch_update(text_update(1, 7, "/stats")).await;
        h.controller.dispatch_update(text_update(2, 7, "84")).await;
        h.controller.dispatch_update(text_update(3, 7, "/stats 30")).await;

        let paths = h.controller.chart_service.paths.lock().await.clone();
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| !p.exists()));
    }

    #[tokio::test]
    async fn chats_outside_the_allow_list_are_ignored() {
        let h = harness(vec![7], false).await;

        h.controller.dispatch_update(text_update(1, 8, "85")).await;
        h.controller.dispatch_update(text_update(2, 8, "/start")).await;

        assert!(h.telegram.sent.lock().await.is_empty());
        assert!(h.repo.load_readings().await.unwrap().is_empty());
    }
}
