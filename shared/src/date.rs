//! 时间类型模块
//!
//! 提供两种时间抽象：
//! - `Timestamp`: 可序列化的毫秒时间戳，用于 ID 生成和存储
//! - `Clock`: 可注入的时钟，生产环境读取系统时间，测试中使用固定值

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::ops::{Add, Sub};
use std::time::Duration;

// =========================================================
// Timestamp - 可传输的时间戳类型
// =========================================================

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    fn to_datetime(self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.0).unwrap_or_default()
    }

    /// ISO 8601 格式，精确到毫秒，例如 `2024-05-01T08:30:00.000Z`
    pub fn to_iso_string(&self) -> String {
        self.to_datetime()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// 日期戳 `YYYY-MM-DD`，用于导出文件名
    pub fn date_stamp(&self) -> String {
        self.to_datetime().format("%Y-%m-%d").to_string()
    }

    /// 从 ISO 8601 / RFC 3339 字符串解析
    ///
    /// 返回 None 如果解析失败
    pub fn parse(s: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| Self(dt.timestamp_millis()))
    }
}

/// 相对时间描述，例如 `5 minutes ago`、`Yesterday`、`3 days ago`
///
/// `then` 晚于 `now` 时视为刚刚。
pub fn relative_label(then: Timestamp, now: Timestamp) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    let secs = (now - then).as_secs();
    let plural = |n: u64, unit: &str| {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    };

    match secs {
        s if s < MINUTE => "Just now".to_string(),
        s if s < HOUR => plural(s / MINUTE, "minute"),
        s if s < DAY => plural(s / HOUR, "hour"),
        s if s < 2 * DAY => "Yesterday".to_string(),
        s => plural(s / DAY, "day"),
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs.as_millis() as i64)
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    /// 计算两个时间戳之间的差值（返回 Duration）
    fn sub(self, rhs: Timestamp) -> Self::Output {
        let diff_ms = (self.0 - rhs.0).max(0);
        Duration::from_millis(diff_ms as u64)
    }
}

// =========================================================
// Clock - 可注入的时钟
// =========================================================

/// 时钟抽象
///
/// 所有需要"当前时间"的逻辑（ID 生成、记录日期）都通过此 trait 获取，
/// 使测试可以得到确定的输出。
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Timestamp {
        Timestamp(Utc::now().timestamp_millis())
    }
}

/// 固定时钟，可以手动推进
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Cell<i64>,
}

impl FixedClock {
    pub fn new(ms: i64) -> Self {
        Self { now: Cell::new(ms) }
    }

    pub fn set(&self, ms: i64) {
        self.now.set(ms);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by.as_millis() as i64);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.now.get())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_string_matches_js_format() {
        let ts = Timestamp::new(1_714_552_200_123);
        assert_eq!(ts.to_iso_string(), "2024-05-01T08:30:00.123Z");
        assert_eq!(ts.date_stamp(), "2024-05-01");
    }

    #[test]
    fn parse_round_trips_iso_string() {
        let ts = Timestamp::new(1_700_000_000_000);
        assert_eq!(Timestamp::parse(&ts.to_iso_string()), Some(ts));
        assert_eq!(Timestamp::parse("not a date"), None);
    }

    #[test]
    fn relative_labels() {
        let now = Timestamp::new(1_714_552_200_000);
        let ago = |secs: i64| Timestamp::new(now.as_millis() - secs * 1000);

        assert_eq!(relative_label(ago(10), now), "Just now");
        assert_eq!(relative_label(ago(60), now), "1 minute ago");
        assert_eq!(relative_label(ago(2 * 3600 + 5), now), "2 hours ago");
        assert_eq!(relative_label(ago(30 * 3600), now), "Yesterday");
        assert_eq!(relative_label(ago(3 * 86_400), now), "3 days ago");
        // 未来时间
        assert_eq!(relative_label(ago(-100), now), "Just now");
    }

    #[test]
    fn fixed_clock_advances() {
        let clock = FixedClock::new(1_000);
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now().as_millis(), 1_250);
        assert_eq!(clock.now() - Timestamp::new(1_000), Duration::from_millis(250));
    }
}
