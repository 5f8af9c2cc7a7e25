//! 分析运行状态模块
//!
//! 把输入、流水线会话和驱动定时器整合为 `AnalysisRun`：
//! - 输入的持有与切换
//! - 启动、推进与重置流水线
//! - 界面所需的快照信号

use crate::notice::Notices;
use crate::services::{AppServices, BrowserSession};
use crate::web::TimerSlot;
use factfusion_shared::error::PipelineError;
use factfusion_shared::{
    AnalysisInput, AppResult, ContentKind, FileSelection, Phase, PipelineSnapshot, SessionUser,
};
use leptos::prelude::*;
use std::time::Duration;

/// 分析运行状态
///
/// 信号部分是 `Copy` 的，会话和定时器放在本地 `StoredValue` 中，
/// 随组件卸载一起释放，未完成的运行不会留下任何记录。
#[derive(Clone, Copy)]
pub struct AnalysisRun {
    pub tab: RwSignal<ContentKind>,
    pub text: RwSignal<String>,
    pub file: RwSignal<Option<FileSelection>>,
    pub snapshot: RwSignal<PipelineSnapshot>,
    session: StoredValue<Option<BrowserSession>, LocalStorage>,
    driver: StoredValue<TimerSlot, LocalStorage>,
    notices: Notices,
    interval: Duration,
}

impl AnalysisRun {
    pub fn new(notices: Notices, interval: Duration) -> Self {
        let run = Self {
            tab: RwSignal::new(ContentKind::Text),
            text: RwSignal::new(String::new()),
            file: RwSignal::new(None),
            snapshot: RwSignal::new(PipelineSnapshot::idle()),
            session: StoredValue::new_local(None),
            driver: StoredValue::new_local(TimerSlot::new()),
            notices,
            interval,
        };

        // 停止驱动要在 Effect 中做，不能在 Interval 回调里清除自己
        Effect::new(move |_| {
            let phase = run.snapshot.with(|s| s.phase);
            if matches!(phase, Phase::Complete | Phase::Idle) {
                run.driver.update_value(TimerSlot::clear);
            }
            if phase == Phase::Complete {
                tracing::info!("analysis complete");
            }
        });

        run
    }

    pub fn is_busy(&self) -> bool {
        self.snapshot.with(PipelineSnapshot::is_busy)
    }

    /// 切换标签页：清空输入并回到空闲
    pub fn select_tab(&self, kind: ContentKind) {
        if self.tab.get_untracked() == kind {
            return;
        }
        self.tab.set(kind);
        self.text.set(String::new());
        self.file.set(None);
        self.reset();
    }

    /// 新的文件选择会丢弃上一次的结果
    pub fn set_file(&self, file: Option<FileSelection>) {
        self.file.set(file);
        self.reset();
    }

    fn input(&self) -> Option<AnalysisInput> {
        match self.tab.get_untracked() {
            ContentKind::Text => Some(AnalysisInput::Text(self.text.get_untracked())),
            _ => self.file.get_untracked().map(AnalysisInput::File),
        }
    }

    /// 启动一次分析
    ///
    /// 会话按所有者创建；登录用户变化时换成新的会话。
    pub fn start(&self, services: &AppServices, owner: &SessionUser) -> AppResult<()> {
        let input = self.input().ok_or(PipelineError::MissingInput)?;

        let started = self.session.try_update_value(|slot| {
            if slot
                .as_ref()
                .is_none_or(|s| s.history().owner_id() != owner.id)
            {
                *slot = Some(services.analysis_session(owner));
            }
            let session = slot.get_or_insert_with(|| services.analysis_session(owner));
            (session.start(input), session.snapshot())
        });

        let Some((result, snapshot)) = started else {
            return Ok(());
        };
        self.snapshot.set(snapshot);
        let delay = result?;
        tracing::info!(delay_ms = delay.as_millis() as u64, "analysis started");

        let run = *self;
        self.driver
            .update_value(|driver| driver.every(self.interval, move || run.tick()));
        Ok(())
    }

    /// 推进一个间隔
    fn tick(&self) {
        let interval = self.interval;
        let advanced = self
            .session
            .try_update_value(|slot| {
                slot.as_mut()
                    .map(|session| (session.advance(interval), session.snapshot()))
            })
            .flatten();

        let Some((result, snapshot)) = advanced else {
            return;
        };
        if let Err(e) = result {
            self.notices.report(&e.into());
        }
        self.snapshot.set(snapshot);
    }

    /// 丢弃当前运行，回到空闲
    pub fn reset(&self) {
        self.driver.update_value(TimerSlot::clear);
        self.session.update_value(|slot| {
            if let Some(session) = slot.as_mut() {
                session.reset();
            }
        });
        self.snapshot.set(PipelineSnapshot::idle());
    }
}
