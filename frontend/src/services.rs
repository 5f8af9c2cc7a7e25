//! 应用服务
//!
//! 构建时配置、存储键名和浏览器存储在启动时组装一次，
//! 通过 Context 提供给各组件，组件按需取出对应的仓库。

use crate::web::BrowserStore;
use factfusion_shared::{
    AnalysisPipeline, AnalysisSession, AppConfig, AuthService, HistoryRepository, Inbox,
    PipelineTiming, SessionUser, StorageKeys, SystemClock, ThemeRepository,
};
use leptos::prelude::*;

/// 浏览器中的分析会话：随机数来自 `Math.random`
pub type BrowserSession = AnalysisSession<BrowserStore, fn() -> f64, SystemClock>;

#[derive(Debug, Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub keys: StorageKeys,
    pub store: BrowserStore,
}

impl AppServices {
    /// 读取构建时变量（`trunk build` 时的环境变量），缺省用默认值
    pub fn from_build_env() -> Self {
        let config = AppConfig::with_overrides(
            option_env!("FACTFUSION_STORAGE_PREFIX"),
            option_env!("FACTFUSION_MIN_ANALYSIS_MS"),
            option_env!("FACTFUSION_MAX_ANALYSIS_MS"),
            option_env!("FACTFUSION_REVEAL_INTERVAL_MS"),
        );
        tracing::debug!(?config, "configuration loaded");
        Self {
            keys: StorageKeys::new(config.storage_prefix.clone()),
            config,
            store: BrowserStore,
        }
    }

    pub fn auth(&self) -> AuthService<BrowserStore, SystemClock> {
        AuthService::new(self.store, &self.keys, SystemClock)
    }

    pub fn history(&self, owner: &SessionUser) -> HistoryRepository<BrowserStore> {
        HistoryRepository::for_owner(self.store, &self.keys, owner)
    }

    pub fn inbox(&self) -> Inbox<BrowserStore> {
        Inbox::new(self.store, &self.keys)
    }

    pub fn themes(&self) -> ThemeRepository<BrowserStore> {
        ThemeRepository::new(self.store, &self.keys)
    }

    pub fn analysis_session(&self, owner: &SessionUser) -> BrowserSession {
        let random: fn() -> f64 = js_sys::Math::random;
        let pipeline = AnalysisPipeline::new(PipelineTiming::from(&self.config), random, SystemClock);
        AnalysisSession::new(pipeline, self.history(owner))
    }
}

pub fn provide_services(services: AppServices) {
    provide_context(services);
}

/// 从 Context 获取应用服务
pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices should be provided")
}
