//! LocalStorage 封装模块
//!
//! 基于 `gloo-storage` 为共享层的 `Store` trait 提供浏览器实现。

use factfusion_shared::error::{StoreError, StoreResult};
use factfusion_shared::store::Store;
use gloo_storage::Storage;
use gloo_storage::errors::StorageError;
use serde::{Serialize, de::DeserializeOwned};

/// 浏览器本地存储
///
/// 无状态，可随意复制；所有实例读写同一个 `window.localStorage`。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    /// 隐私模式或禁用存储时 `localStorage` 可能不存在
    pub fn is_available() -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some()
    }

    fn ensure_available() -> StoreResult<()> {
        if Self::is_available() {
            Ok(())
        } else {
            Err(StoreError::Unavailable("localStorage is not accessible".into()))
        }
    }
}

impl Store for BrowserStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        Self::ensure_available()?;
        match gloo_storage::LocalStorage::get::<T>(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(source)) => Err(StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        Self::ensure_available()?;
        gloo_storage::LocalStorage::set(key, value).map_err(|e| match e {
            StorageError::SerdeError(e) => StoreError::Serialize(e),
            // 配额已满等
            other => StoreError::Unavailable(other.to_string()),
        })
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        Self::ensure_available()?;
        gloo_storage::LocalStorage::delete(key);
        Ok(())
    }
}
