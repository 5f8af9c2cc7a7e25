//! 键值存储抽象
//!
//! - `Store`: 以 JSON 读写的键值存储，浏览器中由 LocalStorage 实现
//! - `MemoryStore`: 内存实现，用于测试和无存储环境
//! - `Collection`: 存放在单个键下的只追加列表（append / list / clear）

use crate::error::{StoreError, StoreResult};
use serde::{Serialize, de::DeserializeOwned};
use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

// =========================================================
// Store trait
// =========================================================

pub trait Store {
    /// 读取并反序列化；键不存在时返回 `Ok(None)`，内容损坏时返回 `StoreError::Corrupt`
    fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>>;

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()>;

    fn delete(&self, key: &str) -> StoreResult<()>;
}

impl<S: Store + ?Sized> Store for &S {
    fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        (**self).load(key)
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        (**self).save(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }
}

// =========================================================
// 内存实现
// =========================================================

/// 内存存储
///
/// 克隆后共享同一份数据，行为与同一页面内的 LocalStorage 一致。
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直接写入原始字符串（用于模拟损坏数据）
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.data
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.borrow().contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.data.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Store for MemoryStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let data = self.data.borrow();
        let Some(raw) = data.get(key) else {
            return Ok(None);
        };
        serde_json::from_str(raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.data.borrow_mut().insert(key.to_string(), raw);
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }
}

// =========================================================
// 键名
// =========================================================

/// 所有存储键名的唯一来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    prefix: String,
}

impl StorageKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn user(&self) -> String {
        format!("{}_user", self.prefix)
    }

    /// 分析历史按所有者分键存放
    pub fn history(&self, owner_id: &str) -> String {
        format!("{}_history:{}", self.prefix, owner_id)
    }

    pub fn contacts(&self) -> String {
        format!("{}_contacts", self.prefix)
    }

    pub fn feedback(&self) -> String {
        format!("{}_feedback", self.prefix)
    }

    pub fn applications(&self) -> String {
        format!("{}_applications", self.prefix)
    }

    pub fn theme(&self) -> String {
        format!("{}_theme", self.prefix)
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_STORAGE_PREFIX)
    }
}

// =========================================================
// Collection
// =========================================================

/// 单键下的 JSON 数组
///
/// 追加是"读-改-写"，没有事务保证：同一存储的并发写入以最后一次为准。
pub struct Collection<T, S> {
    store: S,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T, S> Collection<T, S>
where
    T: Serialize + DeserializeOwned,
    S: Store,
{
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// 读取全部条目
    ///
    /// 内容损坏时删除该键并返回空列表。
    pub fn list(&self) -> StoreResult<Vec<T>> {
        match self.store.load::<Vec<T>>(&self.key) {
            Ok(items) => Ok(items.unwrap_or_default()),
            Err(StoreError::Corrupt { key, source }) => {
                tracing::warn!(%key, error = %source, "discarding corrupted collection");
                self.store.delete(&key)?;
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    pub fn append(&self, item: T) -> StoreResult<()> {
        let mut items = self.list()?;
        items.push(item);
        self.store.save(&self.key, &items)
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.store.delete(&self.key)
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.list()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_list_clear() {
        let store = MemoryStore::new();
        let list: Collection<u32, _> = Collection::new(store.clone(), "nums");

        assert!(list.is_empty().unwrap());
        list.append(1).unwrap();
        list.append(2).unwrap();
        assert_eq!(list.list().unwrap(), vec![1, 2]);
        assert_eq!(store.raw("nums").as_deref(), Some("[1,2]"));

        list.clear().unwrap();
        assert!(!store.contains("nums"));
        assert!(list.list().unwrap().is_empty());
    }

    #[test]
    fn corrupted_collection_is_discarded() {
        let store = MemoryStore::new();
        store.insert_raw("nums", "{not json");
        let list: Collection<u32, _> = Collection::new(&store, "nums");

        assert!(list.list().unwrap().is_empty());
        assert!(!store.contains("nums"));

        list.append(7).unwrap();
        assert_eq!(list.list().unwrap(), vec![7]);
    }

    #[test]
    fn memory_store_reports_corruption() {
        let store = MemoryStore::new();
        store.insert_raw("user", "42x");
        let err = store.load::<String>("user").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "user"));
    }

    #[test]
    fn keys_use_prefix() {
        let keys = StorageKeys::default();
        assert_eq!(keys.user(), "factfusion_user");
        assert_eq!(keys.history("u1"), "factfusion_history:u1");
        assert_eq!(keys.contacts(), "factfusion_contacts");
        assert_eq!(keys.feedback(), "factfusion_feedback");
        assert_eq!(keys.applications(), "factfusion_applications");
        assert_eq!(StorageKeys::new("demo").theme(), "demo_theme");
    }
}
