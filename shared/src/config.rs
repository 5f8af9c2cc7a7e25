//! 运行时配置
//!
//! 所有时序常量和存储前缀都集中在此。
//! 前端通过 `with_overrides` 传入构建时变量，读不到就用默认值。

use serde::{Deserialize, Serialize};
use std::time::Duration;

// =========================================================
// 默认值
// =========================================================

pub const DEFAULT_STORAGE_PREFIX: &str = "factfusion";
pub const DEFAULT_MIN_ANALYSIS_MS: u64 = 3_000;
pub const DEFAULT_MAX_ANALYSIS_MS: u64 = 6_000;
pub const DEFAULT_REVEAL_INTERVAL_MS: u64 = 30;
pub const DEFAULT_LOADING_STEP_MS: u64 = 30;
pub const DEFAULT_NOTICE_MS: u64 = 3_000;
pub const DEFAULT_DEMO_RUN_MS: u64 = 2_000;
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1_000;
pub const DEFAULT_APPLICATION_DELAY_MS: u64 = 1_500;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 本地存储键名前缀
    pub storage_prefix: String,
    /// 模拟分析耗时下限（含）
    pub min_analysis_ms: u64,
    /// 模拟分析耗时上限（不含）
    pub max_analysis_ms: u64,
    /// 摘要逐字显示的间隔
    pub reveal_interval_ms: u64,
    /// 加载页每 1% 进度的间隔
    pub loading_step_ms: u64,
    /// 提示自动消失的时间
    pub notice_ms: u64,
    /// 控制面板演示标签页的模拟运行时间
    pub demo_run_ms: u64,
    /// 联系/反馈表单的模拟提交时间
    pub submit_delay_ms: u64,
    /// 职位申请的模拟提交时间
    pub application_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
            min_analysis_ms: DEFAULT_MIN_ANALYSIS_MS,
            max_analysis_ms: DEFAULT_MAX_ANALYSIS_MS,
            reveal_interval_ms: DEFAULT_REVEAL_INTERVAL_MS,
            loading_step_ms: DEFAULT_LOADING_STEP_MS,
            notice_ms: DEFAULT_NOTICE_MS,
            demo_run_ms: DEFAULT_DEMO_RUN_MS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            application_delay_ms: DEFAULT_APPLICATION_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// 使用构建时变量覆盖默认值
    ///
    /// 每个参数对应一个 `option_env!` 的结果；无法解析的值会被忽略。
    pub fn with_overrides(
        storage_prefix: Option<&str>,
        min_analysis_ms: Option<&str>,
        max_analysis_ms: Option<&str>,
        reveal_interval_ms: Option<&str>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(prefix) = storage_prefix.map(str::trim).filter(|p| !p.is_empty()) {
            config.storage_prefix = prefix.to_string();
        }
        if let Some(ms) = parse_ms(min_analysis_ms) {
            config.min_analysis_ms = ms;
        }
        if let Some(ms) = parse_ms(max_analysis_ms) {
            config.max_analysis_ms = ms;
        }
        if let Some(ms) = parse_ms(reveal_interval_ms).filter(|ms| *ms > 0) {
            config.reveal_interval_ms = ms;
        }
        // 上限必须大于下限，否则区间为空
        if config.max_analysis_ms <= config.min_analysis_ms {
            config.max_analysis_ms = config.min_analysis_ms + 1;
        }
        config
    }

    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    pub fn loading_step(&self) -> Duration {
        Duration::from_millis(self.loading_step_ms)
    }

    pub fn demo_run(&self) -> Duration {
        Duration::from_millis(self.demo_run_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn application_delay(&self) -> Duration {
        Duration::from_millis(self.application_delay_ms)
    }
}

fn parse_ms(value: Option<&str>) -> Option<u64> {
    value.and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_fall_back_to_defaults() {
        let config = AppConfig::with_overrides(None, Some("abc"), None, Some("0"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn overrides_apply_and_keep_range_non_empty() {
        let config = AppConfig::with_overrides(Some("demo"), Some("500"), Some("100"), Some("10"));
        assert_eq!(config.storage_prefix, "demo");
        assert_eq!(config.min_analysis_ms, 500);
        assert_eq!(config.max_analysis_ms, 501);
        assert_eq!(config.reveal_interval(), Duration::from_millis(10));
    }
}
