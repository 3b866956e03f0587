use std::{sync::Arc, time::Duration};

use tokio::time::{interval, MissedTickBehavior};

use crate::repositories::{content_store::ContentStore, data_source::DataSource};

/// Re-reads the data source every `every`, swapping in the new content.
///
/// The first tick fires immediately and is skipped; startup already loaded.
pub async fn start_refresh_task(store: ContentStore, source: Arc<dyn DataSource>, every: Duration) {
    let mut interval = interval(every);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval.tick().await;

    tracing::info!("Content refresh scheduled every {}", humantime::format_duration(every));

    loop {
        interval.tick().await;

        let report = store.refresh(source.as_ref()).await;
        if report.failures > 0 {
            tracing::warn!("Content refresh finished with {} failed document(s)", report.failures);
        }
    }
}
