//! FactFusion 共享逻辑
//!
//! 不依赖浏览器的部分都在这里：领域模型、存储抽象、认证规则、
//! 模拟分析流水线和导出格式。前端只负责把它们接到 DOM 与定时器上。

pub mod auth;
pub mod band;
pub mod config;
pub mod date;
pub mod demo;
pub mod error;
pub mod forms;
pub mod intake;
pub mod loading;
pub mod models;
pub mod pdf;
pub mod pipeline;
pub mod report;
pub mod repository;
pub mod store;

pub use auth::{AuthFailure, AuthService};
pub use band::TrustBand;
pub use config::AppConfig;
pub use date::{Clock, SystemClock, Timestamp};
pub use error::{AppError, AppResult, Notice, Severity};
pub use intake::{ContentKind, FileSelection};
pub use models::{AnalysisRecord, ContactMessage, Feedback, JobApplication, SessionUser};
pub use pipeline::{AnalysisInput, AnalysisPipeline, AnalysisSession, Phase, PipelineSnapshot, PipelineTiming};
pub use repository::{HistoryRepository, Inbox, SessionRepository, Theme, ThemeRepository};
pub use store::{MemoryStore, StorageKeys, Store};
