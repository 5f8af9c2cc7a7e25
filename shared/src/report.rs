//! 导出报告
//!
//! JSON 报告由结构体手工组装，不直接序列化界面状态。
//! 同样的记录、用户和时间总是得到同样的输出。

use crate::band::TrustBand;
use crate::date::Timestamp;
use crate::error::ExportError;
use crate::intake::{ContentKind, base_name};
use crate::models::{AnalysisRecord, SessionUser};
use crate::pipeline::NARRATIVE;
use serde::Serialize;

pub const REPORT_TITLE: &str = "FactFusion Analysis Report";
/// 控制面板"下载报告"的固定文件名（不含扩展名）
pub const DASHBOARD_REPORT_NAME: &str = "factfusion-analysis-report";

// =========================================================
// 固定发现
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingTone {
    Warning,
    Positive,
    Negative,
}

impl FindingTone {
    /// 列表圆点的颜色名
    pub fn color(&self) -> &'static str {
        match self {
            FindingTone::Warning => "yellow",
            FindingTone::Positive => "green",
            FindingTone::Negative => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub tone: FindingTone,
    pub text: &'static str,
}

pub const FINDINGS: [Finding; 3] = [
    Finding {
        tone: FindingTone::Warning,
        text: "Some claims in this content could not be verified against our database.",
    },
    Finding {
        tone: FindingTone::Positive,
        text: "Sources referenced appear to be legitimate.",
    },
    Finding {
        tone: FindingTone::Negative,
        text: "Statistical data presented shows some discrepancies with official records.",
    },
];

// =========================================================
// 单次分析报告
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub report: &'static str,
    pub id: String,
    pub generated_at: String,
    pub analyzed_at: String,
    pub file: ReportFile,
    pub trust_score: u8,
    pub band: ReportBand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
    pub findings: Vec<Finding>,
    pub summary: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportFile {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportBand {
    pub status: &'static str,
    pub label: &'static str,
}

impl From<TrustBand> for ReportBand {
    fn from(band: TrustBand) -> Self {
        Self {
            status: band.status(),
            label: band.label(),
        }
    }
}

impl AnalysisReport {
    pub fn build(record: &AnalysisRecord, user: Option<&SessionUser>, generated_at: Timestamp) -> Self {
        Self {
            report: REPORT_TITLE,
            id: record.id.clone(),
            generated_at: generated_at.to_iso_string(),
            analyzed_at: record.date.clone(),
            file: ReportFile {
                name: record.file_name.clone(),
                kind: record.file_type,
            },
            trust_score: record.trust_score,
            band: TrustBand::from_score(record.trust_score as f64).into(),
            user: user.cloned(),
            findings: FINDINGS.to_vec(),
            summary: NARRATIVE,
        }
    }
}

// =========================================================
// 控制面板汇总报告
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub report: &'static str,
    pub date: String,
    pub results: DashboardResults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResults {
    pub trust_score: u8,
    pub sources: u32,
    pub claims: u32,
    pub verified: u32,
    pub unverified: u32,
}

impl DashboardReport {
    pub fn new(at: Timestamp) -> Self {
        Self {
            report: REPORT_TITLE,
            date: at.to_iso_string(),
            results: DashboardResults {
                trust_score: 78,
                sources: 12,
                claims: 8,
                verified: 6,
                unverified: 2,
            },
        }
    }
}

// =========================================================
// 序列化与命名
// =========================================================

/// 两个空格缩进的 JSON
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, ExportError> {
    serde_json::to_string_pretty(value).map_err(|e| ExportError::Encode(e.to_string()))
}

/// `factfusion-<文件基名>-<YYYY-MM-DD>`，不含扩展名
pub fn export_file_name(file_name: &str, at: Timestamp) -> String {
    let base = base_name(file_name.trim());
    let base = if base.is_empty() { "analysis" } else { base };
    format!("factfusion-{}-{}", base, at.date_stamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT: Timestamp = Timestamp::new(1_714_552_200_123);

    fn record() -> AnalysisRecord {
        AnalysisRecord {
            id: "analysis_1714552200000".into(),
            user_id: "admin_user".into(),
            file_name: "speech.mp3".into(),
            file_type: ContentKind::Audio,
            trust_score: 67,
            date: "2024-05-01T08:30:00.000Z".into(),
        }
    }

    #[test]
    fn report_carries_record_score_and_band() {
        let report = AnalysisReport::build(&record(), Some(&SessionUser::admin()), AT);
        let json: serde_json::Value = serde_json::from_str(&to_json_pretty(&report).unwrap()).unwrap();

        assert_eq!(json["report"], REPORT_TITLE);
        assert_eq!(json["trustScore"], 67);
        assert_eq!(json["band"]["status"], "Partially Verified");
        assert_eq!(json["file"]["type"], "audio");
        assert_eq!(json["user"]["id"], "admin_user");
        assert_eq!(json["generatedAt"], "2024-05-01T08:30:00.123Z");
        assert_eq!(json["findings"].as_array().unwrap().len(), 3);
        assert_eq!(json["findings"][1]["tone"], "positive");
    }

    #[test]
    fn report_omits_missing_user() {
        let report = AnalysisReport::build(&record(), None, AT);
        let json = to_json_pretty(&report).unwrap();
        assert!(!json.contains("\"user\""));
    }

    #[test]
    fn json_is_two_space_indented_and_stable() {
        let report = AnalysisReport::build(&record(), None, AT);
        let first = to_json_pretty(&report).unwrap();
        let second = to_json_pretty(&AnalysisReport::build(&record(), None, AT)).unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with("{\n  \"report\": "));
    }

    #[test]
    fn dashboard_report_has_fixed_results() {
        let json: serde_json::Value =
            serde_json::from_str(&to_json_pretty(&DashboardReport::new(AT)).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "report": "FactFusion Analysis Report",
                "date": "2024-05-01T08:30:00.123Z",
                "results": {
                    "trustScore": 78,
                    "sources": 12,
                    "claims": 8,
                    "verified": 6,
                    "unverified": 2
                }
            })
        );
    }

    #[test]
    fn export_names_use_base_name_and_date() {
        assert_eq!(export_file_name("speech.mp3", AT), "factfusion-speech-2024-05-01");
        assert_eq!(export_file_name("archive.tar.gz", AT), "factfusion-archive.tar-2024-05-01");
        assert_eq!(export_file_name("", AT), "factfusion-analysis-2024-05-01");
    }
}
