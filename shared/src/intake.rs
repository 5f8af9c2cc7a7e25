//! 文件接收
//!
//! 按扩展名把文件归入内容类别，并决定是否接受。
//! 纯逻辑，不接触 DOM；预览 URL 的生命周期由前端管理。

use crate::error::IntakeError;
use serde::{Deserialize, Serialize};
use std::fmt;

const TEXT_EXTENSIONS: &[&str] = &["txt", "doc", "docx", "pdf", "rtf"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "m4a"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "webm"];

/// 内容类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
    Audio,
    Video,
    /// 旧版本记录中的未知取值（如 MIME 字符串）也落入此处
    #[default]
    #[serde(other)]
    Unknown,
}

impl ContentKind {
    /// 分析表单中的四个标签页
    pub const TABS: [ContentKind; 4] = [
        ContentKind::Text,
        ContentKind::Image,
        ContentKind::Audio,
        ContentKind::Video,
    ];

    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_ascii_lowercase();
        let ext = ext.as_str();
        if TEXT_EXTENSIONS.contains(&ext) {
            Self::Text
        } else if IMAGE_EXTENSIONS.contains(&ext) {
            Self::Image
        } else if AUDIO_EXTENSIONS.contains(&ext) {
            Self::Audio
        } else if VIDEO_EXTENSIONS.contains(&ext) {
            Self::Video
        } else {
            Self::Unknown
        }
    }

    pub fn from_file_name(name: &str) -> Self {
        Self::from_extension(extension(name))
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Text => TEXT_EXTENSIONS,
            Self::Image => IMAGE_EXTENSIONS,
            Self::Audio => AUDIO_EXTENSIONS,
            Self::Video => VIDEO_EXTENSIONS,
            Self::Unknown => &[],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Unknown => "unknown",
        }
    }

    /// 可以生成浏览器预览的类别
    pub fn is_previewable(&self) -> bool {
        matches!(self, Self::Image | Self::Audio | Self::Video)
    }

    /// `<input type="file" accept=...>` 的取值
    pub fn accept_attr(&self) -> String {
        dotted(self.extensions().iter())
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn dotted<'a>(exts: impl Iterator<Item = &'a &'a str>) -> String {
    exts.map(|e| format!(".{e}")).collect::<Vec<_>>().join(",")
}

/// 取最后一个 `.` 之后的部分；没有扩展名时返回空串
pub fn extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => "",
    }
}

/// 去掉扩展名的文件名，用于导出文件命名
pub fn base_name(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((base, _)) if !base.is_empty() => base,
        _ => name,
    }
}

// =========================================================
// 接收规则
// =========================================================

/// 已接受的文件描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub name: String,
    pub size: u64,
    pub kind: ContentKind,
}

/// 校验一次文件选择
///
/// `tab` 为 `Some` 时表示处于限定类别的标签页，类别不一致即拒绝。
/// 被拒绝时调用方不应修改任何状态。
pub fn accept(name: &str, size: u64, tab: Option<ContentKind>) -> Result<FileSelection, IntakeError> {
    let ext = extension(name).to_ascii_lowercase();
    let kind = ContentKind::from_extension(&ext);

    if kind == ContentKind::Unknown {
        return Err(IntakeError::UnsupportedType { extension: ext });
    }

    if let Some(expected) = tab {
        if expected != kind {
            return Err(IntakeError::TabMismatch {
                expected: expected.as_str(),
                extension: ext,
            });
        }
    }

    Ok(FileSelection {
        name: name.to_string(),
        size,
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_extension_table() {
        let cases = [
            ("notes.TXT", ContentKind::Text),
            ("paper.docx", ContentKind::Text),
            ("scan.pdf", ContentKind::Text),
            ("photo.jpeg", ContentKind::Image),
            ("anim.webp", ContentKind::Image),
            ("clip.m4a", ContentKind::Audio),
            ("song.ogg", ContentKind::Audio),
            ("movie.MOV", ContentKind::Video),
            ("stream.webm", ContentKind::Video),
            ("setup.exe", ContentKind::Unknown),
            ("README", ContentKind::Unknown),
        ];
        for (name, kind) in cases {
            assert_eq!(ContentKind::from_file_name(name), kind, "{name}");
        }
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = accept("payload.exe", 10, None).unwrap_err();
        assert_eq!(
            err,
            IntakeError::UnsupportedType {
                extension: "exe".into()
            }
        );
    }

    #[test]
    fn tab_mismatch_is_rejected() {
        let err = accept("song.mp3", 10, Some(ContentKind::Image)).unwrap_err();
        assert!(matches!(err, IntakeError::TabMismatch { expected: "image", .. }));

        let ok = accept("song.mp3", 10, Some(ContentKind::Audio)).unwrap();
        assert_eq!(ok.kind, ContentKind::Audio);
        assert_eq!(ok.size, 10);
    }

    #[test]
    fn names_and_accept_attrs() {
        assert_eq!(extension("a.b.png"), "png");
        assert_eq!(base_name("report.final.pdf"), "report.final");
        assert_eq!(base_name(".hidden"), ".hidden");
        assert_eq!(ContentKind::Audio.accept_attr(), ".mp3,.wav,.ogg,.m4a");
    }

    #[test]
    fn unknown_kind_deserializes_from_legacy_values() {
        let kind: ContentKind = serde_json::from_str("\"image/png\"").unwrap();
        assert_eq!(kind, ContentKind::Unknown);
        let kind: ContentKind = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(kind, ContentKind::Video);
    }
}
