//! 分析表单
//!
//! 拆分为三部分：
//! - `run_state`：输入、流水线会话与驱动定时器
//! - `input_tabs`：四个输入标签页
//! - `results_panel`：结果、导出与反馈

mod input_tabs;
mod results_panel;
mod run_state;

use crate::auth::use_auth;
use crate::components::icons::{ArrowRight, Loader};
use crate::notice::use_notices;
use crate::services::use_services;
use factfusion_shared::Phase;
use input_tabs::InputTabs;
use leptos::prelude::*;
use results_panel::ResultsPanel;
use run_state::AnalysisRun;

#[component]
pub fn AnalysisForm() -> impl IntoView {
    let services = use_services();
    let auth = use_auth();
    let notices = use_notices();
    let run = AnalysisRun::new(notices, services.config.reveal_interval());

    let on_analyze = move |_| {
        let Some(user) = auth.user.get_untracked() else {
            notices.error("Authentication required", "Please log in to access this page");
            return;
        };
        if let Err(e) = run.start(&services, &user) {
            notices.report(&e);
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl w-full max-w-3xl mx-auto">
            <div class="card-body p-6 sm:p-8">
                <h2 class="text-2xl font-bold mb-6 text-center">"Fact Check Any Content"</h2>

                <InputTabs run=run />

                <div class="mt-8 flex justify-center">
                    <button
                        type="button"
                        class="btn btn-primary btn-lg px-8 gap-2"
                        disabled=move || run.is_busy()
                        on:click=on_analyze
                    >
                        {move || {
                            if run.is_busy() {
                                view! {
                                    <Loader attr:class="w-5 h-5 animate-spin" />
                                    "Analyzing..."
                                }
                                    .into_any()
                            } else {
                                view! {
                                    "Analyze"
                                    <ArrowRight attr:class="w-5 h-5" />
                                }
                                    .into_any()
                            }
                        }}
                    </button>
                </div>

                <Show when=move || run.snapshot.with(|s| s.phase != Phase::Idle)>
                    <ResultsPanel run=run />
                </Show>
            </div>
        </div>
    }
}
