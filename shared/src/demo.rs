//! 控制面板演示数据
//!
//! 各媒体类别的固定案例，以及历史为空时显示的示例列表。
//! 分档统一使用 `TrustBand`。

use crate::band::TrustBand;
use crate::intake::ContentKind;

/// 一个媒体类别的演示案例
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCase {
    pub kind: ContentKind,
    pub title: &'static str,
    pub description: &'static str,
    pub claim: &'static str,
    pub sources: [&'static str; 3],
    pub score: u8,
    pub explanation: &'static str,
}

impl DemoCase {
    pub fn band(&self) -> TrustBand {
        TrustBand::from_score(self.score as f64)
    }

    /// 未知类别回落到文本案例
    pub fn for_kind(kind: ContentKind) -> &'static DemoCase {
        DEMO_CASES
            .iter()
            .find(|c| c.kind == kind)
            .unwrap_or(&DEMO_CASES[0])
    }
}

pub const DEMO_CASES: [DemoCase; 4] = [
    DemoCase {
        kind: ContentKind::Text,
        title: "Text Analysis Dashboard",
        description: "Analyze articles, social media posts, and news content",
        claim: "Global temperatures have risen by 5°C in the last decade.",
        sources: ["Climate Science Journal", "Global Weather Data", "International Panel Reports"],
        score: 35,
        explanation: "This claim significantly exaggerates the actual temperature increase. Scientific \
consensus shows global temperatures have risen approximately 0.2°C in the last decade, not 5°C as claimed.",
    },
    DemoCase {
        kind: ContentKind::Image,
        title: "Image Verification Dashboard",
        description: "Detect manipulated images and verify visual content",
        claim: "Photo shows political leader at controversial event.",
        sources: ["Image metadata", "Visual comparison algorithms", "Event records"],
        score: 20,
        explanation: "Our analysis detected significant manipulation. This image has been digitally \
altered to place the subject at an event they never attended. The lighting inconsistencies and digital \
artifacts confirm tampering.",
    },
    DemoCase {
        kind: ContentKind::Audio,
        title: "Audio Authentication Dashboard",
        description: "Analyze voice recordings and audio content",
        claim: "Recording of CEO announcing company bankruptcy.",
        sources: ["Voice pattern analysis", "Audio forensics", "Company statements"],
        score: 65,
        explanation: "This audio clip contains authentic voice patterns matching the claimed speaker, \
but context analysis suggests selective editing to change the meaning of the statements. Some segments \
appear to be from different recordings.",
    },
    DemoCase {
        kind: ContentKind::Video,
        title: "Video Verification Dashboard",
        description: "Detect deepfakes and analyze video content",
        claim: "Video shows natural disaster occurring in real-time.",
        sources: ["Visual analysis", "Metadata examination", "Location verification"],
        score: 85,
        explanation: "Our analysis confirms this is authentic footage of the claimed event. Metadata, \
lighting conditions, and environmental details all match verified reports of this natural disaster. No \
evidence of manipulation was detected.",
    },
];

// =========================================================
// 演示标签页状态
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoPhase {
    #[default]
    Ready,
    Running,
    Shown,
}

/// 当前标签与运行阶段；切换标签会清空结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoTabs {
    pub active: ContentKind,
    pub phase: DemoPhase,
}

impl Default for DemoTabs {
    fn default() -> Self {
        Self {
            active: ContentKind::Text,
            phase: DemoPhase::Ready,
        }
    }
}

impl DemoTabs {
    pub fn select(&mut self, kind: ContentKind) {
        self.active = kind;
        self.phase = DemoPhase::Ready;
    }

    /// 返回 false 表示已在运行
    pub fn run(&mut self) -> bool {
        if self.phase == DemoPhase::Running {
            return false;
        }
        self.phase = DemoPhase::Running;
        true
    }

    /// 只有仍在运行同一个标签时才显示结果
    pub fn finish(&mut self, kind: ContentKind) {
        if self.phase == DemoPhase::Running && self.active == kind {
            self.phase = DemoPhase::Shown;
        }
    }

    pub fn case(&self) -> &'static DemoCase {
        DemoCase::for_kind(self.active)
    }
}

// =========================================================
// 示例历史
// =========================================================

/// 用户还没有任何分析记录时显示的条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAnalysis {
    pub title: &'static str,
    pub kind: ContentKind,
    pub when: &'static str,
    pub score: u8,
}

pub const DEMO_RECENT: [DemoAnalysis; 3] = [
    DemoAnalysis {
        title: "Climate change article",
        kind: ContentKind::Text,
        when: "2 hours ago",
        score: 35,
    },
    DemoAnalysis {
        title: "Political speech recording",
        kind: ContentKind::Audio,
        when: "Yesterday",
        score: 82,
    },
    DemoAnalysis {
        title: "News footage verification",
        kind: ContentKind::Video,
        when: "3 days ago",
        score: 68,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_has_a_case_with_canonical_band() {
        for kind in ContentKind::TABS {
            let case = DemoCase::for_kind(kind);
            assert_eq!(case.kind, kind);
        }
        assert_eq!(DemoCase::for_kind(ContentKind::Image).band(), TrustBand::Misleading);
        assert_eq!(DemoCase::for_kind(ContentKind::Audio).band(), TrustBand::PartiallyVerified);
        assert_eq!(DemoCase::for_kind(ContentKind::Video).band(), TrustBand::Verified);
        assert_eq!(DemoCase::for_kind(ContentKind::Unknown).kind, ContentKind::Text);
    }

    #[test]
    fn switching_tabs_discards_running_demo() {
        let mut tabs = DemoTabs::default();
        assert!(tabs.run());
        assert!(!tabs.run());

        tabs.select(ContentKind::Audio);
        // 旧标签的定时器到期不影响新标签
        tabs.finish(ContentKind::Text);
        assert_eq!(tabs.phase, DemoPhase::Ready);

        tabs.run();
        tabs.finish(ContentKind::Audio);
        assert_eq!(tabs.phase, DemoPhase::Shown);
        assert_eq!(tabs.case().score, 65);
    }
}
