//! 控制面板的媒体演示标签页
//!
//! 每个标签页对应一个固定案例，"运行"只是等待一段时间后显示结果。
//! 切换标签会丢弃正在进行的演示。

use crate::components::icons::{BandIconView, KindIcon, Search};
use crate::services::use_services;
use crate::web::TimerSlot;
use factfusion_shared::ContentKind;
use factfusion_shared::demo::{DemoPhase, DemoTabs};
use leptos::prelude::*;

#[component]
pub fn DashboardTabs() -> impl IntoView {
    let run_time = use_services().config.demo_run();
    let tabs = RwSignal::new(DemoTabs::default());
    let timer = StoredValue::new_local(TimerSlot::new());

    let select = move |kind: ContentKind| {
        timer.update_value(TimerSlot::clear);
        tabs.update(|t| t.select(kind));
    };

    let run = move |_| {
        let mut started = false;
        tabs.update(|t| started = t.run());
        if !started {
            return;
        }
        let kind = tabs.with_untracked(|t| t.active);
        timer.update_value(|t| t.once(run_time, move || tabs.update(|t| t.finish(kind))));
    };

    let case = move || tabs.with(|t| t.case());
    let phase = move || tabs.with(|t| t.phase);

    view! {
        <div class="card bg-base-100 shadow-xl h-full">
            <div class="card-body">
                <div role="tablist" class="tabs tabs-bordered mb-4">
                    {ContentKind::TABS
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    type="button"
                                    role="tab"
                                    class=move || {
                                        if tabs.with(|t| t.active == kind) { "tab tab-active gap-2" } else { "tab gap-2" }
                                    }
                                    on:click=move |_| select(kind)
                                >
                                    <KindIcon kind=kind class="w-4 h-4" />
                                    <span class="capitalize">{kind.as_str()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex justify-between items-start gap-4 mb-6">
                    <div>
                        <h2 class="text-xl font-bold">{move || case().title}</h2>
                        <p class="opacity-70 text-sm">{move || case().description}</p>
                    </div>
                    <button
                        type="button"
                        class="btn btn-primary btn-sm gap-2"
                        disabled=move || phase() == DemoPhase::Running
                        on:click=run
                    >
                        <Search attr:class="w-4 h-4" />
                        "Run Analysis"
                    </button>
                </div>

                {move || match phase() {
                    DemoPhase::Ready => view! {
                        <div class="flex-1 flex items-center justify-center opacity-60 py-16">
                            "Select \"Run Analysis\" to see a sample verification."
                        </div>
                    }
                    .into_any(),
                    DemoPhase::Running => view! {
                        <div class="space-y-4 py-8">
                            <DemoProgress label="Loading content..." value=25 />
                            <DemoProgress label="Analyzing claims..." value=65 />
                            <DemoProgress label="Verifying sources..." value=40 />
                        </div>
                    }
                    .into_any(),
                    DemoPhase::Shown => {
                        let case = case();
                        let band = case.band();
                        view! {
                            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                                <div class="lg:col-span-2 space-y-4">
                                    <div class="bg-base-200 p-4 rounded-lg">
                                        <h3 class="font-semibold mb-3">"Claim Analysis"</h3>
                                        <div class="text-sm opacity-70 mb-1">"Identified Claim:"</div>
                                        <p class="mb-4">{case.claim}</p>
                                        <div class="text-sm opacity-70 mb-1">"Sources Consulted:"</div>
                                        <ul class="list-disc list-inside text-sm">
                                            {case.sources.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                                        </ul>
                                    </div>
                                    <div class="bg-base-200 p-4 rounded-lg">
                                        <h3 class="font-semibold mb-2">"Analysis Explanation"</h3>
                                        <p class="text-sm">{case.explanation}</p>
                                    </div>
                                </div>
                                <div class="bg-base-200 p-4 rounded-lg flex flex-col items-center justify-center gap-3">
                                    <div class=format!("text-5xl font-bold text-{}-500", band.color())>
                                        {format!("{}%", case.score)}
                                    </div>
                                    <div class=format!("flex items-center gap-2 text-{}-500", band.color())>
                                        <BandIconView icon=band.icon() class="w-5 h-5" />
                                        <span class="font-medium">{band.status()}</span>
                                    </div>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn DemoProgress(label: &'static str, value: u8) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between text-sm mb-1">
                <span>{label}</span>
                <span>{format!("{value}%")}</span>
            </div>
            <progress class="progress progress-primary w-full" value=value.to_string() max="100"></progress>
        </div>
    }
}
