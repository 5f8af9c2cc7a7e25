//! Blob URL 生命周期
//!
//! `PreviewUrl` 在创建时调用 `URL.createObjectURL`，drop 时调用 `revokeObjectURL`。
//! 清除选择、替换文件、组件卸载三种情况都会 drop 它。

use web_sys::{Blob, Url};

pub struct PreviewUrl {
    url: String,
}

impl PreviewUrl {
    /// 为文件或 Blob 创建预览地址；浏览器拒绝时返回 None
    pub fn new(blob: &Blob) -> Option<Self> {
        match Url::create_object_url_with_blob(blob) {
            Ok(url) => Some(Self { url }),
            Err(e) => {
                tracing::warn!(error = ?e, "createObjectURL failed");
                None
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.url) {
            tracing::warn!(error = ?e, "revokeObjectURL failed");
        }
    }
}
