//! 提示消息（toast）
//!
//! 同一时间只显示一条，新的提示会替换旧的并重新计时。

use crate::web::TimerSlot;
use factfusion_shared::{AppError, Notice};
use leptos::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy)]
pub struct Notices {
    current: RwSignal<Option<Notice>>,
    timer: StoredValue<TimerSlot, LocalStorage>,
    duration: Duration,
}

impl Notices {
    fn new(duration: Duration) -> Self {
        Self {
            current: RwSignal::new(None),
            timer: StoredValue::new_local(TimerSlot::new()),
            duration,
        }
    }

    pub fn show(&self, notice: Notice) {
        if notice.is_error() {
            tracing::warn!(title = %notice.title, "{}", notice.description);
        } else {
            tracing::info!(title = %notice.title, "{}", notice.description);
        }
        self.current.set(Some(notice));

        let current = self.current;
        self.timer
            .update_value(|timer| timer.once(self.duration, move || current.set(None)));
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(Notice::info(title, description));
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(Notice::error(title, description));
    }

    /// 把错误映射为用户提示
    pub fn report(&self, err: &AppError) {
        tracing::error!(error = %err, "operation failed");
        self.show(err.notice());
    }

    pub fn dismiss(&self) {
        self.current.set(None);
        self.timer.update_value(TimerSlot::clear);
    }

    pub fn current(&self) -> Signal<Option<Notice>> {
        self.current.into()
    }
}

pub fn provide_notices(duration: Duration) -> Notices {
    let notices = Notices::new(duration);
    provide_context(notices);
    notices
}

/// 从 Context 获取提示服务
pub fn use_notices() -> Notices {
    use_context::<Notices>().expect("Notices should be provided")
}

/// 右上角的提示框
#[component]
pub fn NoticeToast() -> impl IntoView {
    let notices = use_notices();
    let current = notices.current();

    view! {
        <Show when=move || current.get().is_some()>
            <div class="toast toast-top toast-end z-[60]">
                <div
                    role="alert"
                    class=move || {
                        if current.get().is_some_and(|n| n.is_error()) {
                            "alert alert-error shadow-lg"
                        } else {
                            "alert alert-success shadow-lg"
                        }
                    }
                    on:click=move |_| notices.dismiss()
                >
                    <div class="flex flex-col">
                        <span class="font-semibold">
                            {move || current.get().map(|n| n.title).unwrap_or_default()}
                        </span>
                        <span class="text-sm">
                            {move || current.get().map(|n| n.description).unwrap_or_default()}
                        </span>
                    </div>
                </div>
            </div>
        </Show>
    }
}
