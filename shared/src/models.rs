//! 领域模型
//!
//! 字段名使用 camelCase 序列化，与本地存储中的 JSON 布局一致。
//! 所有非 id 字段带 `#[serde(default)]`，旧版本记录缺字段时仍可读取。

use crate::date::Timestamp;
use crate::intake::ContentKind;
use serde::{Deserialize, Serialize};

pub const ADMIN_EMAIL: &str = "admin@gmail.com";
pub const ADMIN_PASSWORD: &str = "admin";
pub const ADMIN_ID: &str = "admin_user";
pub const ADMIN_NAME: &str = "admin";

/// 以时间戳生成 `<prefix>_<ms>` 形式的 ID
pub fn make_id(prefix: &str, now: Timestamp) -> String {
    format!("{}_{}", prefix, now.as_millis())
}

/// 当前登录用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl SessionUser {
    pub fn admin() -> Self {
        Self {
            id: ADMIN_ID.to_string(),
            name: ADMIN_NAME.to_string(),
            email: ADMIN_EMAIL.to_string(),
        }
    }
}

/// 一次模拟分析的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_type: ContentKind,
    #[serde(default)]
    pub trust_score: u8,
    /// ISO 8601
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    #[serde(default)]
    pub analysis_id: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    /// 用户未同意被联系时为空
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub resume_name: String,
    #[serde(default)]
    pub resume_size: u64,
    #[serde(default)]
    pub cover_letter: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_uses_camel_case_layout() {
        let record = AnalysisRecord {
            id: "analysis_1".into(),
            user_id: "admin_user".into(),
            file_name: "a.png".into(),
            file_type: ContentKind::Image,
            trust_score: 72,
            date: "2024-05-01T08:30:00.000Z".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["userId"], "admin_user");
        assert_eq!(json["fileName"], "a.png");
        assert_eq!(json["fileType"], "image");
        assert_eq!(json["trustScore"], 72);
    }

    #[test]
    fn legacy_record_with_missing_fields_still_loads() {
        let record: AnalysisRecord =
            serde_json::from_str(r#"{"id":"analysis_9","trustScore":50}"#).unwrap();
        assert_eq!(record.trust_score, 50);
        assert_eq!(record.file_type, ContentKind::Unknown);
        assert!(record.user_id.is_empty());
    }

    #[test]
    fn ids_embed_timestamp() {
        assert_eq!(make_id("user", Timestamp::new(42)), "user_42");
    }
}
