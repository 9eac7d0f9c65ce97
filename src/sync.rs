//! Manual Sync
//!
//! `Idle → Refreshing → Waiting → Reloading → Idle`
//!
//! The refresh call asks the upstream script to re-read its source sheet;
//! the pause gives it time to finish before the directory is read again.
//! Any failure drops straight back to `Idle`. There is no retry.

use std::future::Future;

use tracing::{debug, info, warn};

use crate::commands::{load_people, ApiError, DirectorySource};
use crate::config::Config;
use crate::models::Person;

pub const SYNC_DONE_MESSAGE: &str = "조직도가 최신화되었습니다.";
pub const SYNC_FAILED_MESSAGE: &str = "동기화 중 오류가 발생했습니다.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncPhase {
    #[default]
    Idle,
    Refreshing,
    Waiting,
    Reloading,
}

impl SyncPhase {
    pub fn is_busy(self) -> bool {
        self != SyncPhase::Idle
    }

    /// Phase after the current step succeeds
    pub fn advance(self) -> SyncPhase {
        match self {
            SyncPhase::Idle => SyncPhase::Refreshing,
            SyncPhase::Refreshing => SyncPhase::Waiting,
            SyncPhase::Waiting => SyncPhase::Reloading,
            SyncPhase::Reloading => SyncPhase::Idle,
        }
    }

    /// Progress text for the loading overlay
    pub fn label(self) -> &'static str {
        match self {
            SyncPhase::Idle => "",
            SyncPhase::Refreshing => "최신 데이터를 요청하는 중...",
            SyncPhase::Waiting => "변경 사항을 반영하는 중...",
            SyncPhase::Reloading => "조직도를 다시 불러오는 중...",
        }
    }
}

/// A sync starts only from `Idle`; clicks during a running sync are dropped.
pub fn should_start_sync(phase: SyncPhase) -> bool {
    !phase.is_busy()
}

/// Run one sync cycle.
///
/// `settle` produces the pause between refresh and reload; `on_phase` is told
/// about every transition, ending with `Idle` whether or not the sync worked.
pub async fn run_sync<S, W, F>(
    source: &S,
    config: &Config,
    settle: W,
    mut on_phase: impl FnMut(SyncPhase),
) -> Result<Vec<Person>, ApiError>
where
    S: DirectorySource,
    W: FnOnce(u32) -> F,
    F: Future<Output = ()>,
{
    let mut phase = SyncPhase::Idle.advance();
    on_phase(phase);

    let result: Result<Vec<Person>, ApiError> = async {
        source.request_refresh().await?;

        phase = phase.advance();
        on_phase(phase);
        debug!("waiting {}ms for upstream refresh", config.sync_settle_ms);
        settle(config.sync_settle_ms).await;

        phase = phase.advance();
        on_phase(phase);
        load_people(source, config).await
    }
    .await;

    on_phase(SyncPhase::Idle);
    match &result {
        Ok(people) => info!("sync finished with {} records", people.len()),
        Err(err) => warn!("sync failed during {:?}: {}", phase, err),
    }
    result
}
