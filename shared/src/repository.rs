//! 仓库层
//!
//! 在 `Store` 之上为每类实体提供显式的方法，业务代码不直接拼接键名。
//! 分析历史在写入时按已认证用户分键，读取时也只能看到自己的记录。

use crate::error::{StoreError, StoreResult};
use crate::models::{AnalysisRecord, ContactMessage, Feedback, JobApplication, SessionUser};
use crate::store::{Collection, StorageKeys, Store};
use serde::{Deserialize, Serialize};

// =========================================================
// 会话
// =========================================================

/// 单一会话用户（单设备、单会话）
#[derive(Clone)]
pub struct SessionRepository<S> {
    store: S,
    key: String,
}

impl<S: Store> SessionRepository<S> {
    pub fn new(store: S, keys: &StorageKeys) -> Self {
        Self {
            store,
            key: keys.user(),
        }
    }

    /// 读取已保存的用户；内容损坏时删除并视为未登录
    pub fn get(&self) -> StoreResult<Option<SessionUser>> {
        match self.store.load::<SessionUser>(&self.key) {
            Ok(user) => Ok(user),
            Err(StoreError::Corrupt { key, source }) => {
                tracing::warn!(%key, error = %source, "discarding corrupted session");
                self.store.delete(&key)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub fn set(&self, user: &SessionUser) -> StoreResult<()> {
        self.store.save(&self.key, user)
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.store.delete(&self.key)
    }
}

// =========================================================
// 分析历史
// =========================================================

/// 某个用户的分析历史
pub struct HistoryRepository<S> {
    owner_id: String,
    records: Collection<AnalysisRecord, S>,
}

impl<S: Store> HistoryRepository<S> {
    pub fn for_owner(store: S, keys: &StorageKeys, owner: &SessionUser) -> Self {
        Self {
            owner_id: owner.id.clone(),
            records: Collection::new(store, keys.history(&owner.id)),
        }
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// 追加一条记录；记录的 `user_id` 必须是当前所有者
    pub fn append(&self, record: AnalysisRecord) -> StoreResult<()> {
        if record.user_id != self.owner_id {
            return Err(StoreError::OwnerMismatch {
                owner: self.owner_id.clone(),
                record: record.user_id,
            });
        }
        self.records.append(record)
    }

    /// 按写入顺序
    pub fn list(&self) -> StoreResult<Vec<AnalysisRecord>> {
        self.records.list()
    }

    /// 最新的在前，最多 `limit` 条
    pub fn recent(&self, limit: usize) -> StoreResult<Vec<AnalysisRecord>> {
        let mut records = self.records.list()?;
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.records.clear()
    }

    pub fn summary(&self) -> StoreResult<HistorySummary> {
        Ok(HistorySummary::from_records(&self.records.list()?))
    }
}

/// 控制面板统计卡片所需的汇总
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistorySummary {
    pub count: usize,
    pub average_score: Option<f64>,
    pub last: Option<AnalysisRecord>,
}

impl HistorySummary {
    pub fn from_records(records: &[AnalysisRecord]) -> Self {
        let count = records.len();
        let average_score = (count > 0).then(|| {
            let total: u32 = records.iter().map(|r| r.trust_score as u32).sum();
            total as f64 / count as f64
        });
        Self {
            count,
            average_score,
            last: records.last().cloned(),
        }
    }
}

// =========================================================
// 表单提交（只写）
// =========================================================

/// 联系、反馈、职位申请三个只写列表
pub struct Inbox<S> {
    pub contacts: Collection<ContactMessage, S>,
    pub feedback: Collection<Feedback, S>,
    pub applications: Collection<JobApplication, S>,
}

impl<S: Store + Clone> Inbox<S> {
    pub fn new(store: S, keys: &StorageKeys) -> Self {
        Self {
            contacts: Collection::new(store.clone(), keys.contacts()),
            feedback: Collection::new(store.clone(), keys.feedback()),
            applications: Collection::new(store, keys.applications()),
        }
    }
}

// =========================================================
// 主题偏好
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// daisyUI 的 `data-theme` 取值
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

pub struct ThemeRepository<S> {
    store: S,
    key: String,
}

impl<S: Store> ThemeRepository<S> {
    pub fn new(store: S, keys: &StorageKeys) -> Self {
        Self {
            store,
            key: keys.theme(),
        }
    }

    /// 读取失败一律回落到默认主题
    pub fn get(&self) -> Theme {
        self.store
            .load::<Theme>(&self.key)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    pub fn set(&self, theme: Theme) -> StoreResult<()> {
        self.store.save(&self.key, &theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::ContentKind;
    use crate::store::MemoryStore;

    fn record(id: &str, owner: &str, score: u8) -> AnalysisRecord {
        AnalysisRecord {
            id: id.into(),
            user_id: owner.into(),
            file_name: "doc.txt".into(),
            file_type: ContentKind::Text,
            trust_score: score,
            date: "2024-05-01T08:30:00.000Z".into(),
        }
    }

    fn user(id: &str) -> SessionUser {
        SessionUser {
            id: id.into(),
            name: id.into(),
            email: format!("{id}@example.com"),
        }
    }

    #[test]
    fn history_is_scoped_per_owner() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        let alice = HistoryRepository::for_owner(store.clone(), &keys, &user("alice"));
        let bob = HistoryRepository::for_owner(store.clone(), &keys, &user("bob"));

        alice.append(record("a1", "alice", 70)).unwrap();
        bob.append(record("b1", "bob", 40)).unwrap();

        assert_eq!(alice.list().unwrap().len(), 1);
        assert_eq!(bob.list().unwrap()[0].id, "b1");
    }

    #[test]
    fn history_rejects_foreign_records() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        let alice = HistoryRepository::for_owner(store, &keys, &user("alice"));

        let err = alice.append(record("b1", "bob", 40)).unwrap_err();
        assert!(matches!(err, StoreError::OwnerMismatch { .. }));
        assert!(alice.list().unwrap().is_empty());
    }

    #[test]
    fn recent_is_newest_first_and_summary_averages() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        let repo = HistoryRepository::for_owner(store, &keys, &user("u"));
        for (i, score) in [30u8, 60, 90].into_iter().enumerate() {
            repo.append(record(&format!("r{i}"), "u", score)).unwrap();
        }

        let recent = repo.recent(2).unwrap();
        assert_eq!(recent.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), ["r2", "r1"]);

        let summary = repo.summary().unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average_score, Some(60.0));
        assert_eq!(summary.last.unwrap().id, "r2");
    }

    #[test]
    fn empty_summary_has_no_average() {
        let summary = HistorySummary::from_records(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average_score, None);
        assert!(summary.last.is_none());
    }

    #[test]
    fn corrupted_session_is_discarded() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        store.insert_raw(&keys.user(), "{\"id\":");
        let sessions = SessionRepository::new(store.clone(), &keys);

        assert_eq!(sessions.get().unwrap(), None);
        assert!(!store.contains(&keys.user()));
    }

    #[test]
    fn inbox_collections_use_separate_keys() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        let inbox = Inbox::new(store.clone(), &keys);
        inbox
            .contacts
            .append(ContactMessage {
                id: "contact_1".into(),
                name: "N".into(),
                email: "n@x.io".into(),
                message: "hi".into(),
                timestamp: String::new(),
            })
            .unwrap();

        assert!(store.contains("factfusion_contacts"));
        assert!(!store.contains("factfusion_feedback"));
        assert_eq!(inbox.contacts.len().unwrap(), 1);
    }

    #[test]
    fn theme_defaults_and_persists() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        let themes = ThemeRepository::new(store.clone(), &keys);
        assert_eq!(themes.get(), Theme::Dark);

        themes.set(Theme::Dark.toggled()).unwrap();
        assert_eq!(themes.get(), Theme::Light);
        assert_eq!(store.raw("factfusion_theme").as_deref(), Some("\"light\""));
    }
}
