//! 结果区域组件
//!
//! 分数可视化、固定发现、逐字显示的摘要，以及导出与反馈入口。
//! PDF 导出截取的正是这个区域。

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::run_state::AnalysisRun;
use crate::auth::use_auth;
use crate::components::feedback_form::FeedbackForm;
use crate::components::icons::{Download, FileText, MessageSquare};
use crate::components::modal::Modal;
use crate::components::trust_score::TrustScore;
use crate::exports;
use crate::notice::use_notices;
use factfusion_shared::Phase;
use factfusion_shared::report::FINDINGS;

#[component]
pub fn ResultsPanel(run: AnalysisRun) -> impl IntoView {
    let auth = use_auth();
    let notices = use_notices();
    let exporting = RwSignal::new(false);
    let show_feedback = RwSignal::new(false);
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    let score = Signal::derive(move || run.snapshot.with(|s| s.score()));
    let busy = Signal::derive(move || run.is_busy());
    let complete = move || run.snapshot.with(|s| s.phase == Phase::Complete);
    let record = move || run.snapshot.with_untracked(|s| s.record.clone());

    let on_export_pdf = move |_| {
        let (Some(record), Some(panel)) = (record(), panel_ref.get_untracked()) else {
            return;
        };
        exporting.set(true);
        spawn_local(async move {
            match exports::export_pdf(panel.into(), record).await {
                Ok(()) => notices.info("Download started", "Your PDF report is being downloaded"),
                Err(e) => notices.report(&e.into()),
            }
            exporting.set(false);
        });
    };

    let on_export_json = move |_| {
        let Some(record) = record() else {
            return;
        };
        exporting.set(true);
        let user = auth.user.get_untracked();
        match exports::export_json(&record, user.as_ref()) {
            Ok(()) => notices.info("Download started", "Your JSON report is being downloaded"),
            Err(e) => notices.report(&e.into()),
        }
        exporting.set(false);
    };

    view! {
        <div class="mt-10 border-t border-base-content/10 pt-6" node_ref=panel_ref>
            <div class="text-center mb-6">
                <h3 class="text-xl font-semibold mb-2">"Analysis Results"</h3>
                <p class="opacity-70">"Here's what our fact-checking AI found about your content."</p>
            </div>

            <div class="flex flex-col md:flex-row gap-8 items-center">
                <div class="w-full md:w-1/3 flex justify-center">
                    <TrustScore score=score busy=busy />
                </div>

                <Show when=move || score.get().is_some()>
                    <div class="w-full md:w-2/3 space-y-4">
                        <div class="bg-base-200 p-4 rounded-lg">
                            <h4 class="font-medium mb-2">"Key Findings"</h4>
                            <ul class="space-y-2 text-sm">
                                {FINDINGS
                                    .into_iter()
                                    .map(|finding| {
                                        view! {
                                            <li class="flex items-start gap-2">
                                                <div class=format!("mt-1 text-{}-500", finding.tone.color())>"•"</div>
                                                <div>{finding.text}</div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div class="space-y-2">
                            <h4 class="font-medium">"Detailed Report"</h4>
                            <div class="bg-base-200 p-3 rounded-lg text-sm min-h-16">
                                <p>
                                    {move || run.snapshot.with(|s| s.revealed.clone())}
                                    <Show when=move || !complete()>
                                        <span class="animate-pulse">"|"</span>
                                    </Show>
                                </p>
                            </div>
                        </div>

                        <Show when=complete>
                            <div class="flex flex-wrap justify-end gap-3 pt-2" data-html2canvas-ignore="true">
                                <button
                                    type="button"
                                    class="btn btn-outline btn-sm gap-2"
                                    on:click=move |_| show_feedback.set(true)
                                >
                                    <MessageSquare attr:class="w-4 h-4" />
                                    "Give Feedback"
                                </button>
                                <button
                                    type="button"
                                    class="btn btn-outline btn-sm gap-2"
                                    disabled=move || exporting.get()
                                    on:click=on_export_json
                                >
                                    <FileText attr:class="w-4 h-4" />
                                    "Export JSON"
                                </button>
                                <button
                                    type="button"
                                    class="btn btn-primary btn-sm gap-2"
                                    disabled=move || exporting.get()
                                    on:click=on_export_pdf
                                >
                                    {move || {
                                        if exporting.get() {
                                            view! { <span class="loading loading-spinner loading-xs"></span> }.into_any()
                                        } else {
                                            view! { <Download attr:class="w-4 h-4" /> }.into_any()
                                        }
                                    }}
                                    "Export PDF"
                                </button>
                            </div>
                        </Show>
                    </div>
                </Show>
            </div>

            <Modal open=show_feedback title="Analysis Feedback">
                <FeedbackForm
                    analysis_id=run.snapshot.with_untracked(|s| s.record.as_ref().map(|r| r.id.clone()))
                    on_done=move |_: ()| show_feedback.set(false)
                />
            </Modal>
        </div>
    }
}
