//! 浏览器 API 封装模块
//!
//! 所有直接接触 `web_sys` / `gloo-*` 的代码都集中在此，
//! 组件只使用这里导出的类型。

mod download;
mod object_url;
mod raster;
pub mod route;
pub mod router;
mod storage;
mod timer;

pub use download::{MIME_JSON, MIME_PDF, download_bytes, download_text};
pub use object_url::PreviewUrl;
pub use raster::rasterize;
pub use storage::BrowserStore;
pub use timer::TimerSlot;
