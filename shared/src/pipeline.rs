//! 模拟分析流水线
//!
//! 状态机：`Idle → Validating → Analyzing → Revealing → Complete`，
//! 重新上传（`reset`）后回到 `Idle`。
//!
//! 时间和随机数都由外部注入：
//! - `advance(elapsed)` 推进时间，浏览器中由定时器驱动，测试中直接调用
//! - `RandomSource` 决定耗时与分数
//!
//! `AnalysisSession` 把流水线与当前用户的历史仓库绑定，
//! 每次出分恰好追加一条记录。

use crate::config::AppConfig;
use crate::date::Clock;
use crate::error::{PipelineError, StoreError};
use crate::intake::{ContentKind, FileSelection};
use crate::models::{AnalysisRecord, make_id};
use crate::repository::HistoryRepository;
use crate::store::Store;
use serde::Serialize;
use std::time::Duration;

/// 分数下限（含）
pub const SCORE_MIN: u8 = 30;
/// 分数取值个数：`floor(r * 65) + 30` 落在 [30, 94]
pub const SCORE_SPAN: u8 = 65;

/// 出分后逐字显示的摘要
pub const NARRATIVE: &str = "Our analysis indicates that this content contains a mix of accurate and \
questionable information. While some facts align with verified data, others are presented in a \
potentially misleading context.";

/// 粘贴文本时记录中使用的文件名
pub const TEXT_INPUT_NAME: &str = "pasted-text.txt";

// =========================================================
// 注入点
// =========================================================

/// [0, 1) 区间的随机数来源
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

fn unit(r: f64) -> f64 {
    if r.is_nan() { 0.0 } else { r.clamp(0.0, 1.0) }
}

/// `floor(r * 65) + 30`，r 被夹到 [0, 1)，结果恒在 [30, 94]
pub fn score_from_unit(r: f64) -> u8 {
    let step = (unit(r) * SCORE_SPAN as f64).floor() as u8;
    SCORE_MIN + step.min(SCORE_SPAN - 1)
}

/// 模拟耗时的区间与显示节奏
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineTiming {
    pub min_delay: Duration,
    pub max_delay: Duration,
    pub reveal_interval: Duration,
}

impl PipelineTiming {
    /// 在 [min, max) 中均匀取值
    pub fn delay_from_unit(&self, r: f64) -> Duration {
        let min = self.min_delay.as_millis() as u64;
        let max = (self.max_delay.as_millis() as u64).max(min + 1);
        let span = max - min;
        let offset = ((unit(r) * span as f64).floor() as u64).min(span - 1);
        Duration::from_millis(min + offset)
    }
}

impl Default for PipelineTiming {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for PipelineTiming {
    fn from(config: &AppConfig) -> Self {
        Self {
            min_delay: Duration::from_millis(config.min_analysis_ms),
            max_delay: Duration::from_millis(config.max_analysis_ms),
            reveal_interval: config.reveal_interval(),
        }
    }
}

// =========================================================
// 输入
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    Text(String),
    File(FileSelection),
}

impl AnalysisInput {
    pub fn is_empty(&self) -> bool {
        match self {
            AnalysisInput::Text(text) => text.trim().is_empty(),
            AnalysisInput::File(file) => file.name.is_empty(),
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            AnalysisInput::Text(_) => TEXT_INPUT_NAME,
            AnalysisInput::File(file) => &file.name,
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            AnalysisInput::Text(_) => ContentKind::Text,
            AnalysisInput::File(file) => file.kind,
        }
    }
}

// =========================================================
// 状态
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    /// 只在 `start` 调用内部短暂存在
    Validating,
    Analyzing {
        delay: Duration,
        elapsed: Duration,
    },
    Revealing {
        shown: usize,
        carry: Duration,
    },
    Complete,
}

/// 不带数据的阶段，供界面判断
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Validating,
    Analyzing,
    Revealing,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// 出分，记录需要持久化
    Scored(AnalysisRecord),
    /// 当前已显示的字符数
    Revealed(usize),
    Completed,
}

/// 界面渲染所需的全部状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSnapshot {
    pub phase: Phase,
    pub record: Option<AnalysisRecord>,
    pub revealed: String,
}

impl PipelineSnapshot {
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            record: None,
            revealed: String::new(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Analyzing
    }

    pub fn score(&self) -> Option<u8> {
        self.record.as_ref().map(|r| r.trust_score)
    }
}

// =========================================================
// 流水线
// =========================================================

pub struct AnalysisPipeline<R, C> {
    state: PipelineState,
    timing: PipelineTiming,
    random: R,
    clock: C,
    input: Option<(AnalysisInput, String)>,
    result: Option<AnalysisRecord>,
    narrative_len: usize,
}

impl<R: RandomSource, C: Clock> AnalysisPipeline<R, C> {
    pub fn new(timing: PipelineTiming, random: R, clock: C) -> Self {
        Self {
            state: PipelineState::Idle,
            timing,
            random,
            clock,
            input: None,
            result: None,
            narrative_len: NARRATIVE.chars().count(),
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            PipelineState::Idle => Phase::Idle,
            PipelineState::Validating => Phase::Validating,
            PipelineState::Analyzing { .. } => Phase::Analyzing,
            PipelineState::Revealing { .. } => Phase::Revealing,
            PipelineState::Complete => Phase::Complete,
        }
    }

    /// 分析进行中时触发按钮应禁用
    pub fn is_busy(&self) -> bool {
        matches!(self.state, PipelineState::Analyzing { .. })
    }

    pub fn result(&self) -> Option<&AnalysisRecord> {
        self.result.as_ref()
    }

    pub fn timing(&self) -> &PipelineTiming {
        &self.timing
    }

    /// 已显示的摘要前缀
    pub fn revealed_text(&self) -> &str {
        let shown = match self.state {
            PipelineState::Revealing { shown, .. } => shown,
            PipelineState::Complete => self.narrative_len,
            _ => 0,
        };
        match NARRATIVE.char_indices().nth(shown) {
            Some((idx, _)) => &NARRATIVE[..idx],
            None => NARRATIVE,
        }
    }

    pub fn snapshot(&self) -> PipelineSnapshot {
        PipelineSnapshot {
            phase: self.phase(),
            record: self.result.clone(),
            revealed: self.revealed_text().to_string(),
        }
    }

    /// 开始一次分析，返回需要等待的时长
    ///
    /// 输入为空时回到 `Idle`；进行中再次调用返回 `Busy`。
    pub fn start(&mut self, input: AnalysisInput, owner_id: &str) -> Result<Duration, PipelineError> {
        if self.is_busy() {
            return Err(PipelineError::Busy);
        }

        self.state = PipelineState::Validating;
        if input.is_empty() {
            self.state = PipelineState::Idle;
            return Err(PipelineError::MissingInput);
        }

        let delay = self.timing.delay_from_unit(self.random.next_unit());
        self.result = None;
        self.input = Some((input, owner_id.to_string()));
        self.state = PipelineState::Analyzing {
            delay,
            elapsed: Duration::ZERO,
        };
        tracing::debug!(delay_ms = delay.as_millis() as u64, "analysis started");
        Ok(delay)
    }

    /// 推进时间
    ///
    /// 超出当前阶段的时间会顺延到下一阶段。
    pub fn advance(&mut self, elapsed: Duration) -> Vec<PipelineEvent> {
        let mut events = Vec::new();
        let mut budget = elapsed;

        if let PipelineState::Analyzing { delay, elapsed: spent } = self.state {
            let spent = spent + budget;
            if spent < delay {
                self.state = PipelineState::Analyzing {
                    delay,
                    elapsed: spent,
                };
                return events;
            }
            budget = spent - delay;
            let record = self.score();
            tracing::info!(score = record.trust_score, id = %record.id, "analysis scored");
            self.result = Some(record.clone());
            self.state = PipelineState::Revealing {
                shown: 0,
                carry: Duration::ZERO,
            };
            events.push(PipelineEvent::Scored(record));
        }

        if let PipelineState::Revealing { shown, carry } = self.state {
            let interval = self.timing.reveal_interval.max(Duration::from_millis(1));
            let pool = carry + budget;
            let steps = (pool.as_millis() / interval.as_millis()) as usize;
            let shown_now = (shown + steps).min(self.narrative_len);
            let carry = pool - interval * steps as u32;

            if shown_now != shown {
                events.push(PipelineEvent::Revealed(shown_now));
            }
            if shown_now >= self.narrative_len {
                self.state = PipelineState::Complete;
                events.push(PipelineEvent::Completed);
            } else {
                self.state = PipelineState::Revealing {
                    shown: shown_now,
                    carry,
                };
            }
        }

        events
    }

    /// 新的上传：丢弃结果并回到 `Idle`
    pub fn reset(&mut self) {
        self.state = PipelineState::Idle;
        self.input = None;
        self.result = None;
    }

    fn score(&mut self) -> AnalysisRecord {
        let trust_score = score_from_unit(self.random.next_unit());
        let now = self.clock.now();
        let (file_name, kind, user_id) = match &self.input {
            Some((input, owner)) => (input.file_name().to_string(), input.kind(), owner.clone()),
            None => (String::new(), ContentKind::Unknown, String::new()),
        };
        AnalysisRecord {
            id: make_id("analysis", now),
            user_id,
            file_name,
            file_type: kind,
            trust_score,
            date: now.to_iso_string(),
        }
    }
}

// =========================================================
// 会话：流水线 + 历史仓库
// =========================================================

pub struct AnalysisSession<S, R, C> {
    pipeline: AnalysisPipeline<R, C>,
    history: HistoryRepository<S>,
}

impl<S, R, C> AnalysisSession<S, R, C>
where
    S: Store,
    R: RandomSource,
    C: Clock,
{
    pub fn new(pipeline: AnalysisPipeline<R, C>, history: HistoryRepository<S>) -> Self {
        Self { pipeline, history }
    }

    pub fn pipeline(&self) -> &AnalysisPipeline<R, C> {
        &self.pipeline
    }

    pub fn history(&self) -> &HistoryRepository<S> {
        &self.history
    }

    pub fn snapshot(&self) -> PipelineSnapshot {
        self.pipeline.snapshot()
    }

    pub fn start(&mut self, input: AnalysisInput) -> Result<Duration, PipelineError> {
        let owner = self.history.owner_id().to_string();
        self.pipeline.start(input, &owner)
    }

    /// 推进时间并持久化新出的分数
    ///
    /// 写入失败时结果仍保留在流水线中，仅返回错误。
    pub fn advance(&mut self, elapsed: Duration) -> Result<Vec<PipelineEvent>, StoreError> {
        let events = self.pipeline.advance(elapsed);
        for event in &events {
            if let PipelineEvent::Scored(record) = event {
                self.history.append(record.clone()).inspect_err(|e| {
                    tracing::error!(error = %e, "failed to persist analysis record");
                })?;
            }
        }
        Ok(events)
    }

    pub fn reset(&mut self) {
        self.pipeline.reset();
    }
}

#[cfg(test)]
mod tests;
