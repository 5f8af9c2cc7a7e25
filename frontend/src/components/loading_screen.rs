use crate::services::use_services;
use crate::web::TimerSlot;
use factfusion_shared::loading::{COMPLETE_DELAY, LoadingProgress};
use leptos::prelude::*;
use std::time::Duration;

/// 全屏加载页
///
/// 进度每步 +1%，到 100% 后停留片刻再调用 `on_complete`。
#[component]
pub fn LoadingScreen(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let step = use_services().config.loading_step();
    let progress = RwSignal::new(LoadingProgress::new());
    let timer = StoredValue::new_local(TimerSlot::new());

    timer.update_value(|t| {
        t.every(step, move || {
            progress.update(|p| {
                p.step();
            });
        })
    });

    // 换成一次性定时器要在 Effect 中做，不能在 Interval 回调里替换自己
    Effect::new(move |_| {
        if progress.with(LoadingProgress::is_full) {
            timer.update_value(|t| t.once(COMPLETE_DELAY, move || on_complete.run(())));
        }
    });

    view! {
        <div class="fixed inset-0 z-50 flex flex-col items-center justify-center bg-base-300">
            <div class="relative mb-12 flex items-center justify-center w-24 h-24">
                <span class="loading loading-ring w-24 text-primary opacity-40 absolute"></span>
                <div class="relative w-16 h-16 rounded-full bg-gradient-to-tr from-primary to-secondary flex items-center justify-center">
                    <div class="absolute inset-1 rounded-full bg-base-300"></div>
                    <span class="relative font-bold text-xl">"FF"</span>
                </div>
            </div>
            <progress
                class="progress progress-primary w-64 sm:w-80 mb-4"
                value=move || progress.with(|p| p.percent()).to_string()
                max="100"
            ></progress>
            <div class="text-sm opacity-80 animate-pulse">{move || progress.with(|p| p.text())}</div>
            <div class="text-xs opacity-60 mt-2">{move || format!("{}%", progress.with(|p| p.percent()))}</div>
        </div>
    }
}

/// 先显示加载页，完成（或到达上限）后再渲染子内容
#[component]
pub fn LoadingGate(
    /// 最长显示时间；`None` 表示等进度走完
    #[prop(optional)]
    cap: Option<Duration>,
    children: ChildrenFn,
) -> impl IntoView {
    let done = RwSignal::new(false);
    let timer = StoredValue::new_local(TimerSlot::new());

    if let Some(cap) = cap {
        timer.update_value(|t| t.once(cap, move || done.set(true)));
    }

    view! {
        <Show
            when=move || done.get()
            fallback=move || view! { <LoadingScreen on_complete=move |_: ()| done.set(true) /> }
        >
            {children()}
        </Show>
    }
}
