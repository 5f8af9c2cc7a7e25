//! 加载页进度
//!
//! 每一步前进 1%，到达里程碑时更换提示文字；到 100 后再等待一段时间结束。

use std::time::Duration;

pub const INITIAL_TEXT: &str = "Initializing...";

/// 到达 100% 后的停留时间
pub const COMPLETE_DELAY: Duration = Duration::from_millis(500);

/// 内部页面的加载页最多显示这么久
pub const INTERNAL_PAGE_CAP: Duration = Duration::from_millis(1500);

const MILESTONES: [(u8, &str); 4] = [
    (25, "Analyzing data..."),
    (50, "Processing information..."),
    (75, "Preparing algorithms..."),
    (95, "Almost ready..."),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingProgress {
    percent: u8,
    text: &'static str,
}

impl Default for LoadingProgress {
    fn default() -> Self {
        Self {
            percent: 0,
            text: INITIAL_TEXT,
        }
    }
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn is_full(&self) -> bool {
        self.percent >= 100
    }

    /// 前进一步，返回新到达的里程碑文字
    pub fn step(&mut self) -> Option<&'static str> {
        if self.is_full() {
            return None;
        }
        self.percent += 1;
        let reached = MILESTONES
            .iter()
            .find(|(at, _)| *at == self.percent)
            .map(|(_, text)| *text);
        if let Some(text) = reached {
            self.text = text;
        }
        reached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestones_change_text_in_order() {
        let mut progress = LoadingProgress::new();
        let mut seen = Vec::new();
        while !progress.is_full() {
            if let Some(text) = progress.step() {
                seen.push((progress.percent(), text));
            }
        }

        assert_eq!(seen, MILESTONES.to_vec());
        assert_eq!(progress.text(), "Almost ready...");
    }

    #[test]
    fn stops_at_one_hundred() {
        let mut progress = LoadingProgress::new();
        for _ in 0..150 {
            progress.step();
        }
        assert_eq!(progress.percent(), 100);
        assert_eq!(progress.step(), None);
    }

    #[test]
    fn text_holds_between_milestones() {
        let mut progress = LoadingProgress::new();
        for _ in 0..30 {
            progress.step();
        }
        assert_eq!(progress.text(), "Analyzing data...");
    }
}
