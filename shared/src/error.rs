//! 错误定义
//!
//! 各子系统拥有独立的错误枚举，统一汇总为 `AppError`，
//! 通过 `From` 转换让 `?` 可以跨层传播。
//! 每种错误都能映射为一条面向用户的提示（`Notice`）。

use thiserror::Error;

// =========================================================
// 面向用户的提示
// =========================================================

/// 提示的严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// 短暂显示的用户提示（toast）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

// =========================================================
// 子系统错误
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// 不区分是邮箱还是密码出错
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("email already in use")]
    EmailInUse,
    #[error("invalid registration details")]
    InvalidDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("unsupported file type: .{extension}")]
    UnsupportedType { extension: String },
    #[error("expected a {expected} file, got .{extension}")]
    TabMismatch {
        expected: &'static str,
        extension: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("no content to analyze")]
    MissingInput,
    #[error("an analysis is already running")]
    Busy,
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// 底层存储不可用或写入失败
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// 存储的内容无法解析
    #[error("corrupted entry under `{key}`")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    /// 试图把记录写入不属于其所有者的历史
    #[error("record owned by `{record}` cannot be written to history of `{owner}`")]
    OwnerMismatch { owner: String, record: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("rasterization failed: {0}")]
    Raster(String),
    #[error("encoding failed: {0}")]
    Encode(String),
    #[error("download failed: {0}")]
    Download(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing required fields")]
    MissingFields,
    #[error("rating must be between 1 and 5")]
    InvalidRating,
}

// =========================================================
// 统一错误类型
// =========================================================

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Form(#[from] FormError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl AppError {
    /// 映射为用户提示
    pub fn notice(&self) -> Notice {
        match self {
            AppError::Auth(AuthError::InvalidCredentials) => {
                Notice::error("Invalid credentials", "Please check your email and password")
            }
            AppError::Auth(AuthError::EmailInUse) => {
                Notice::error("Registration failed", "This email is already in use")
            }
            AppError::Auth(AuthError::InvalidDetails) => {
                Notice::error("Invalid information", "Please check your registration details")
            }
            AppError::Intake(IntakeError::UnsupportedType { extension }) => Notice::error(
                "Unsupported file",
                format!("Files of type .{extension} cannot be analyzed"),
            ),
            AppError::Intake(IntakeError::TabMismatch { expected, .. }) => Notice::error(
                "Wrong file type",
                format!("Please upload a {expected} file for this tab"),
            ),
            AppError::Pipeline(PipelineError::MissingInput) => {
                Notice::error("Input required", "Please provide content to analyze.")
            }
            AppError::Pipeline(PipelineError::Busy) => {
                Notice::error("Analysis in progress", "Please wait for the current analysis")
            }
            AppError::Store(_) => {
                Notice::error("Storage error", "Your data could not be saved locally")
            }
            AppError::Export(_) => Notice::error(
                "Download failed",
                "There was an error generating your report",
            ),
            AppError::Form(FormError::MissingFields) => {
                Notice::error("Missing information", "Please fill in all required fields")
            }
            AppError::Form(FormError::InvalidRating) => {
                Notice::error("Missing rating", "Please rate the analysis from 1 to 5 stars")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_do_not_reveal_field() {
        let notice = AppError::from(AuthError::InvalidCredentials).notice();
        assert!(notice.is_error());
        assert_eq!(notice.title, "Invalid credentials");
        assert!(!notice.description.contains("password is"));
    }

    #[test]
    fn intake_error_names_extension() {
        let err = AppError::from(IntakeError::UnsupportedType {
            extension: "exe".into(),
        });
        assert_eq!(err.to_string(), "unsupported file type: .exe");
        assert!(err.notice().description.contains(".exe"));
    }

    #[test]
    fn export_errors_share_generic_notice() {
        let a = AppError::from(ExportError::Raster("canvas tainted".into())).notice();
        let b = AppError::from(ExportError::Download("no window".into())).notice();
        assert_eq!(a, b);
        assert_eq!(a.title, "Download failed");
    }
}
