//! 定时器封装模块
//!
//! 基于 `gloo-timers` 的回调定时器。`TimerSlot` 同一时间只持有一个定时器：
//! 设置新的会取消旧的，被 drop 时全部取消，组件卸载后不会再有回调触发。
//!
//! 注意：不要在定时器自己的回调里替换或清空它所在的槽，
//! 应通过 Effect 或事件处理函数来做。

use gloo_timers::callback::{Interval, Timeout};
use std::time::Duration;

enum Timer {
    Once(#[allow(dead_code)] Timeout),
    Every(#[allow(dead_code)] Interval),
}

fn millis(duration: Duration) -> u32 {
    duration.as_millis().min(u32::MAX as u128) as u32
}

/// 单个定时器的持有者
#[derive(Default)]
pub struct TimerSlot {
    timer: Option<Timer>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// 一次性定时器，替换当前持有的定时器
    pub fn once<F>(&mut self, after: Duration, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.timer = Some(Timer::Once(Timeout::new(millis(after), callback)));
    }

    /// 周期性定时器，替换当前持有的定时器
    pub fn every<F>(&mut self, period: Duration, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.timer = Some(Timer::Every(Interval::new(millis(period), callback)));
    }

    /// 取消定时器
    ///
    /// 通常不需要手动调用，因为 drop 时会自动清除。
    pub fn clear(&mut self) {
        self.timer = None;
    }
}
