//! 信任分数分档
//!
//! 全站唯一的分档表：可视化组件、控制面板和导出报告都从这里取标签与颜色。

use serde::{Deserialize, Serialize};

/// 分数分档
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustBand {
    /// >= 80
    Verified,
    /// 60..80
    PartiallyVerified,
    /// 40..60
    Questionable,
    /// < 40
    Misleading,
}

/// 分档对应的图标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandIcon {
    CheckCircle,
    Info,
    AlertTriangle,
    XCircle,
}

impl TrustBand {
    pub const ALL: [TrustBand; 4] = [
        TrustBand::Verified,
        TrustBand::PartiallyVerified,
        TrustBand::Questionable,
        TrustBand::Misleading,
    ];

    /// 接受任意分数，先夹到 [0, 100]
    pub fn from_score(score: f64) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 100.0) };
        if score >= 80.0 {
            Self::Verified
        } else if score >= 60.0 {
            Self::PartiallyVerified
        } else if score >= 40.0 {
            Self::Questionable
        } else {
            Self::Misleading
        }
    }

    /// 状态徽章上的文字
    pub fn status(&self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::PartiallyVerified => "Partially Verified",
            Self::Questionable => "Questionable",
            Self::Misleading => "Misleading",
        }
    }

    /// 可视化组件下方的描述
    pub fn label(&self) -> &'static str {
        match self {
            Self::Verified => "Highly Trustworthy",
            Self::PartiallyVerified => "Somewhat Trustworthy",
            Self::Questionable => "Questionable",
            Self::Misleading => "Untrustworthy",
        }
    }

    pub fn icon(&self) -> BandIcon {
        match self {
            Self::Verified => BandIcon::CheckCircle,
            Self::PartiallyVerified => BandIcon::Info,
            Self::Questionable => BandIcon::AlertTriangle,
            Self::Misleading => BandIcon::XCircle,
        }
    }

    /// 颜色名，前端拼接为 `text-*` / `bg-*` / `stroke-*`
    pub fn color(&self) -> &'static str {
        match self {
            Self::Verified => "green",
            Self::PartiallyVerified => "yellow",
            Self::Questionable => "orange",
            Self::Misleading => "red",
        }
    }

    /// 渐变端点的十六进制颜色（SVG 使用）
    pub fn gradient(&self) -> (&'static str, &'static str) {
        match self {
            Self::Verified => ("#22c55e", "#16a34a"),
            Self::PartiallyVerified => ("#facc15", "#eab308"),
            Self::Questionable => ("#f97316", "#ea580c"),
            Self::Misleading => ("#ef4444", "#dc2626"),
        }
    }
}

/// 进度环周长（r = 45 的圆，取整）
pub const RING_CIRCUMFERENCE: f64 = 283.0;

/// 进度环的 stroke-dashoffset
pub fn ring_offset(score: f64) -> f64 {
    let score = score.clamp(0.0, 100.0);
    RING_CIRCUMFERENCE - (RING_CIRCUMFERENCE * score) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_on_the_low_end() {
        assert_eq!(TrustBand::from_score(100.0), TrustBand::Verified);
        assert_eq!(TrustBand::from_score(80.0), TrustBand::Verified);
        assert_eq!(TrustBand::from_score(79.9), TrustBand::PartiallyVerified);
        assert_eq!(TrustBand::from_score(60.0), TrustBand::PartiallyVerified);
        assert_eq!(TrustBand::from_score(59.0), TrustBand::Questionable);
        assert_eq!(TrustBand::from_score(40.0), TrustBand::Questionable);
        assert_eq!(TrustBand::from_score(39.0), TrustBand::Misleading);
        assert_eq!(TrustBand::from_score(0.0), TrustBand::Misleading);
    }

    #[test]
    fn banding_is_total_over_score_range() {
        for score in 0..=100 {
            let band = TrustBand::from_score(score as f64);
            assert!(TrustBand::ALL.contains(&band));
        }
        assert_eq!(TrustBand::from_score(f64::NAN), TrustBand::Misleading);
        assert_eq!(TrustBand::from_score(250.0), TrustBand::Verified);
    }

    #[test]
    fn presentation_per_band() {
        let band = TrustBand::from_score(45.0);
        assert_eq!(band.status(), "Questionable");
        assert_eq!(band.color(), "orange");
        assert_eq!(band.icon(), BandIcon::AlertTriangle);
        assert_eq!(TrustBand::Misleading.label(), "Untrustworthy");
    }

    #[test]
    fn ring_offset_spans_circumference() {
        assert_eq!(ring_offset(0.0), 283.0);
        assert_eq!(ring_offset(100.0), 0.0);
        assert_eq!(ring_offset(50.0), 141.5);
    }
}
