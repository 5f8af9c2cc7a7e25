//! 分析反馈表单
//!
//! 评分必填；同意被联系时才保存邮箱。模拟一次提交延迟后写入本地。

use crate::components::icons::{MessageSquare, Send, Star};
use crate::notice::use_notices;
use crate::services::use_services;
use crate::web::TimerSlot;
use factfusion_shared::SystemClock;
use factfusion_shared::forms::FeedbackDraft;
use leptos::prelude::*;

#[component]
pub fn FeedbackForm(
    /// 被评价的分析记录
    analysis_id: Option<String>,
    #[prop(into)] on_done: Callback<()>,
) -> impl IntoView {
    let services = use_services();
    let notices = use_notices();
    let delay = services.config.submit_delay();
    let timer = StoredValue::new_local(TimerSlot::new());

    let rating = RwSignal::new(0u8);
    let comment = RwSignal::new(String::new());
    let allow_contact = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = FeedbackDraft {
            analysis_id: analysis_id.clone(),
            rating: rating.get_untracked(),
            comment: comment.get_untracked(),
            allow_contact: allow_contact.get_untracked(),
            email: email.get_untracked(),
        };
        let feedback = match draft.submit(&SystemClock) {
            Ok(feedback) => feedback,
            Err(e) => {
                notices.report(&e.into());
                return;
            }
        };

        submitting.set(true);
        let inbox = services.inbox();
        timer.update_value(|t| {
            t.once(delay, move || {
                submitting.set(false);
                match inbox.feedback.append(feedback) {
                    Ok(()) => {
                        notices.info(
                            "Thank you for your feedback!",
                            "Your input helps us improve our analysis engine.",
                        );
                        on_done.run(());
                    }
                    Err(e) => notices.report(&e.into()),
                }
            })
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div>
                <label class="block mb-2">"How accurate was our analysis?"</label>
                <div class="flex justify-center gap-3">
                    {(1..=5u8)
                        .map(|star| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if rating.get() >= star {
                                            "btn btn-circle btn-primary"
                                        } else {
                                            "btn btn-circle btn-ghost bg-base-200"
                                        }
                                    }
                                    aria-label=format!("{star} stars")
                                    on:click=move |_| rating.set(star)
                                >
                                    <Star attr:class="w-5 h-5" />
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="form-control">
                <label for="feedback-comment" class="label">
                    <span class="label-text">"Your feedback"</span>
                </label>
                <textarea
                    id="feedback-comment"
                    class="textarea textarea-bordered h-32 resize-none"
                    placeholder="Tell us what you think about the analysis results..."
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="bg-base-200 p-4 rounded-lg space-y-3">
                <label class="label cursor-pointer">
                    <span class="label-text flex items-center gap-2">
                        <MessageSquare attr:class="w-5 h-5 text-primary" />
                        "Allow us to contact you"
                    </span>
                    <input
                        type="checkbox"
                        class="toggle toggle-primary"
                        prop:checked=move || allow_contact.get()
                        on:change=move |ev| allow_contact.set(event_target_checked(&ev))
                    />
                </label>
                <Show when=move || allow_contact.get()>
                    <input
                        type="email"
                        required
                        class="input input-bordered w-full"
                        placeholder="your@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </Show>
            </div>

            <button
                type="submit"
                class="btn btn-primary w-full gap-2"
                disabled=move || submitting.get() || rating.get() == 0
            >
                {move || {
                    if submitting.get() {
                        view! { <span class="loading loading-spinner"></span> "Submitting..." }.into_any()
                    } else {
                        view! { <Send attr:class="w-4 h-4" /> "Submit Feedback" }.into_any()
                    }
                }}
            </button>
        </form>
    }
}
