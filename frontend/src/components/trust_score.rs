//! 信任分数可视化
//!
//! 分析中显示转圈；出分后 500ms 开始把进度环从 0 动画到分数，
//! 动画本身交给 CSS transition。

use crate::components::icons::{BandIconView, Loader};
use crate::web::TimerSlot;
use factfusion_shared::TrustBand;
use factfusion_shared::band::{RING_CIRCUMFERENCE, ring_offset};
use leptos::prelude::*;
use std::time::Duration;

const ANIMATION_DELAY: Duration = Duration::from_millis(500);

#[component]
pub fn TrustScore(
    #[prop(into)] score: Signal<Option<u8>>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let offset = RwSignal::new(RING_CIRCUMFERENCE);
    let timer = StoredValue::new_local(TimerSlot::new());

    // 新分数到来时从 0 重新开始
    Effect::new(move |_| {
        offset.set(RING_CIRCUMFERENCE);
        match score.get() {
            Some(value) => timer.update_value(|t| {
                t.once(ANIMATION_DELAY, move || offset.set(ring_offset(value as f64)))
            }),
            None => timer.update_value(TimerSlot::clear),
        }
    });

    let band = move || score.get().map(|s| TrustBand::from_score(s as f64));

    view! {
        <div class="flex flex-col items-center">
            <Show
                when=move || !busy.get()
                fallback=|| {
                    view! {
                        <div class="w-40 h-40 flex items-center justify-center">
                            <Loader attr:class="w-12 h-12 animate-spin text-primary" />
                        </div>
                    }
                }
            >
                {move || {
                    band()
                        .map(|band| {
                            let (from, to) = band.gradient();
                            view! {
                                <div class="relative w-40 h-40">
                                    <svg class="w-full h-full -rotate-90" viewBox="0 0 100 100">
                                        <defs>
                                            <linearGradient id="trust-gradient" x1="0%" y1="0%" x2="100%" y2="0%">
                                                <stop offset="0%" stop-color=from />
                                                <stop offset="100%" stop-color=to />
                                            </linearGradient>
                                        </defs>
                                        <circle
                                            cx="50"
                                            cy="50"
                                            r="45"
                                            fill="none"
                                            stroke="currentColor"
                                            stroke-width="8"
                                            class="opacity-10"
                                        />
                                        <circle
                                            cx="50"
                                            cy="50"
                                            r="45"
                                            fill="none"
                                            stroke="url(#trust-gradient)"
                                            stroke-width="8"
                                            stroke-linecap="round"
                                            stroke-dasharray=RING_CIRCUMFERENCE.to_string()
                                            stroke-dashoffset=move || offset.get().to_string()
                                            style="transition: stroke-dashoffset 1.5s ease-out"
                                        />
                                    </svg>
                                    <div class="absolute inset-0 flex flex-col items-center justify-center">
                                        <span class="text-3xl font-bold">
                                            {move || format!("{}%", score.get().unwrap_or_default())}
                                        </span>
                                    </div>
                                </div>
                                <div class=format!(
                                    "mt-3 flex items-center gap-2 font-medium text-{}-500",
                                    band.color(),
                                )>
                                    <BandIconView icon=band.icon() class="w-5 h-5" />
                                    <span>{band.label()}</span>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
