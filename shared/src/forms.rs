//! 表单草稿
//!
//! 界面收集的原始输入，校验通过后生成带 ID 与时间戳的实体。

use crate::date::Clock;
use crate::error::FormError;
use crate::models::{ContactMessage, Feedback, JobApplication, make_id};

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn submit(&self, clock: &impl Clock) -> Result<ContactMessage, FormError> {
        if blank(&self.name) || blank(&self.email) || blank(&self.message) {
            return Err(FormError::MissingFields);
        }
        let now = clock.now();
        Ok(ContactMessage {
            id: make_id("contact", now),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.clone(),
            timestamp: now.to_iso_string(),
        })
    }
}

pub const UNKNOWN_ANALYSIS: &str = "unknown";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub analysis_id: Option<String>,
    /// 0 表示尚未评分
    pub rating: u8,
    pub comment: String,
    pub allow_contact: bool,
    pub email: String,
}

impl FeedbackDraft {
    pub fn can_submit(&self) -> bool {
        (1..=5).contains(&self.rating)
    }

    pub fn submit(&self, clock: &impl Clock) -> Result<Feedback, FormError> {
        if !self.can_submit() {
            return Err(FormError::InvalidRating);
        }
        if self.allow_contact && blank(&self.email) {
            return Err(FormError::MissingFields);
        }
        let now = clock.now();
        Ok(Feedback {
            id: make_id("feedback", now),
            analysis_id: self
                .analysis_id
                .clone()
                .filter(|id| !blank(id))
                .unwrap_or_else(|| UNKNOWN_ANALYSIS.to_string()),
            rating: self.rating,
            comment: self.comment.clone(),
            email: if self.allow_contact {
                self.email.trim().to_string()
            } else {
                String::new()
            },
            timestamp: now.to_iso_string(),
        })
    }
}

/// 只保存简历文件的名称和大小
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub job_title: String,
    pub name: String,
    pub email: String,
    pub resume: Option<ResumeFile>,
    pub cover_letter: String,
}

impl ApplicationDraft {
    pub fn submit(&self, clock: &impl Clock) -> Result<JobApplication, FormError> {
        let Some(resume) = &self.resume else {
            return Err(FormError::MissingFields);
        };
        if blank(&self.name) || blank(&self.email) || blank(&self.cover_letter) {
            return Err(FormError::MissingFields);
        }
        let now = clock.now();
        Ok(JobApplication {
            id: make_id("application", now),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            resume_name: resume.name.clone(),
            resume_size: resume.size,
            cover_letter: self.cover_letter.clone(),
            job_title: self.job_title.clone(),
            timestamp: now.to_iso_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::new(1_714_552_200_123)
    }

    #[test]
    fn contact_requires_every_field() {
        let mut draft = ContactDraft {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            message: "  ".into(),
        };
        assert_eq!(draft.submit(&clock()), Err(FormError::MissingFields));

        draft.message = "Hello".into();
        let msg = draft.submit(&clock()).unwrap();
        assert_eq!(msg.id, "contact_1714552200123");
        assert_eq!(msg.timestamp, "2024-05-01T08:30:00.123Z");
    }

    #[test]
    fn feedback_needs_rating_and_hides_email_without_consent() {
        let mut draft = FeedbackDraft {
            comment: "useful".into(),
            email: "ann@example.com".into(),
            ..Default::default()
        };
        assert_eq!(draft.submit(&clock()), Err(FormError::InvalidRating));

        draft.rating = 4;
        let feedback = draft.submit(&clock()).unwrap();
        assert_eq!(feedback.analysis_id, "unknown");
        assert_eq!(feedback.email, "");

        draft.allow_contact = true;
        draft.analysis_id = Some("analysis_1".into());
        let feedback = draft.submit(&clock()).unwrap();
        assert_eq!(feedback.analysis_id, "analysis_1");
        assert_eq!(feedback.email, "ann@example.com");
    }

    #[test]
    fn feedback_rejects_out_of_range_rating() {
        let draft = FeedbackDraft {
            rating: 6,
            ..Default::default()
        };
        assert_eq!(draft.submit(&clock()), Err(FormError::InvalidRating));
    }

    #[test]
    fn application_requires_resume() {
        let mut draft = ApplicationDraft {
            job_title: "Frontend Engineer".into(),
            name: "Ann".into(),
            email: "ann@example.com".into(),
            resume: None,
            cover_letter: "Hi".into(),
        };
        assert_eq!(draft.submit(&clock()), Err(FormError::MissingFields));

        draft.resume = Some(ResumeFile {
            name: "cv.pdf".into(),
            size: 1024,
        });
        let app = draft.submit(&clock()).unwrap();
        assert_eq!(app.id, "application_1714552200123");
        assert_eq!(app.resume_name, "cv.pdf");
        assert_eq!(app.resume_size, 1024);
        assert_eq!(app.job_title, "Frontend Engineer");
    }
}
