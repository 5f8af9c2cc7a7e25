//! 职位申请表单
//!
//! 简历只记录文件名和大小，不读取内容。

use crate::components::icons::{Send, Upload};
use crate::notice::use_notices;
use crate::services::use_services;
use crate::web::TimerSlot;
use factfusion_shared::SystemClock;
use factfusion_shared::forms::{ApplicationDraft, ResumeFile};
use leptos::prelude::*;
use web_sys::HtmlInputElement;

const RESUME_ACCEPT: &str = ".pdf,.doc,.docx";

#[component]
pub fn JobApplicationForm(
    #[prop(into)] job_title: String,
    #[prop(into)] on_done: Callback<()>,
) -> impl IntoView {
    let services = use_services();
    let notices = use_notices();
    let delay = services.config.application_delay();
    let timer = StoredValue::new_local(TimerSlot::new());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let resume = RwSignal::new(None::<ResumeFile>);
    let cover_letter = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_resume = move |ev: leptos::web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        resume.set(file.map(|f| ResumeFile {
            name: f.name(),
            size: f.size() as u64,
        }));
    };

    let title = job_title.clone();
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ApplicationDraft {
            job_title: title.clone(),
            name: name.get_untracked(),
            email: email.get_untracked(),
            resume: resume.get_untracked(),
            cover_letter: cover_letter.get_untracked(),
        };
        let application = match draft.submit(&SystemClock) {
            Ok(application) => application,
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
                match inbox.applications.append(application) {
                    Ok(()) => {
                        notices.info(
                            "Application submitted!",
                            "We'll review your application and contact you soon.",
                        );
                        on_done.run(());
                    }
                    Err(e) => notices.report(&e.into()),
                }
            })
        });
    };

    view! {
        <p class="opacity-70 -mt-4 mb-4">{job_title}</p>
        <form on:submit=on_submit class="space-y-4">
            <div class="form-control">
                <label for="applicant-name" class="label">
                    <span class="label-text">"Full Name"</span>
                </label>
                <input
                    id="applicant-name"
                    type="text"
                    class="input input-bordered w-full"
                    placeholder="John Doe"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <label for="applicant-email" class="label">
                    <span class="label-text">"Email Address"</span>
                </label>
                <input
                    id="applicant-email"
                    type="email"
                    class="input input-bordered w-full"
                    placeholder="your@email.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <label for="resume-upload" class="label">
                    <span class="label-text">"Resume"</span>
                </label>
                <input
                    id="resume-upload"
                    type="file"
                    class="hidden"
                    accept=RESUME_ACCEPT
                    on:change=on_resume
                />
                <label
                    for="resume-upload"
                    class="flex items-center gap-3 cursor-pointer border-2 border-dashed border-base-content/20 rounded-lg p-4 hover:border-primary"
                >
                    <Upload attr:class="w-5 h-5 text-primary" />
                    <span class="text-sm">
                        {move || {
                            resume
                                .get()
                                .map(|r| r.name)
                                .unwrap_or_else(|| "Upload your resume (PDF, DOC, DOCX)".to_string())
                        }}
                    </span>
                </label>
            </div>
            <div class="form-control">
                <label for="cover-letter" class="label">
                    <span class="label-text">"Cover Letter"</span>
                </label>
                <textarea
                    id="cover-letter"
                    class="textarea textarea-bordered h-32 resize-none"
                    placeholder="Tell us why you're interested in this position..."
                    prop:value=move || cover_letter.get()
                    on:input=move |ev| cover_letter.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary w-full gap-2" disabled=move || submitting.get()>
                {move || {
                    if submitting.get() {
                        view! { <span class="loading loading-spinner"></span> "Submitting..." }.into_any()
                    } else {
                        view! { <Send attr:class="w-4 h-4" /> "Submit Application" }.into_any()
                    }
                }}
            </button>
        </form>
    }
}
