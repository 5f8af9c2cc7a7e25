use crate::components::icons::{Mail, MapPin, Phone, Send};
use crate::components::modal::Modal;
use crate::notice::use_notices;
use crate::services::use_services;
use crate::web::TimerSlot;
use factfusion_shared::SystemClock;
use factfusion_shared::forms::ContactDraft;
use leptos::prelude::*;

/// 联系表单：三个字段都必填，模拟提交延迟后写入本地
#[component]
pub fn ContactForm(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let services = use_services();
    let notices = use_notices();
    let delay = services.config.submit_delay();
    let timer = StoredValue::new_local(TimerSlot::new());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ContactDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let contact = match draft.submit(&SystemClock) {
            Ok(contact) => contact,
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
                match inbox.contacts.append(contact) {
                    Ok(()) => {
                        notices.info("Message sent!", "We'll get back to you soon.");
                        on_done.run(());
                    }
                    Err(e) => notices.report(&e.into()),
                }
            })
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="form-control">
                <label for="contact-name" class="label">
                    <span class="label-text">"Your Name"</span>
                </label>
                <input
                    id="contact-name"
                    type="text"
                    class="input input-bordered w-full"
                    placeholder="John Doe"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <label for="contact-email" class="label">
                    <span class="label-text">"Email Address"</span>
                </label>
                <input
                    id="contact-email"
                    type="email"
                    class="input input-bordered w-full"
                    placeholder="your@email.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <label for="contact-message" class="label">
                    <span class="label-text">"Message"</span>
                </label>
                <textarea
                    id="contact-message"
                    class="textarea textarea-bordered h-32 resize-none"
                    placeholder="How can we help you?"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary w-full gap-2" disabled=move || submitting.get()>
                {move || {
                    if submitting.get() {
                        view! { <span class="loading loading-spinner"></span> "Sending..." }.into_any()
                    } else {
                        view! { <Send attr:class="w-4 h-4" /> "Send Message" }.into_any()
                    }
                }}
            </button>
        </form>
    }
}

/// 联系方式与联系表单
#[component]
pub fn ContactModal(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Modal open=open title="Contact Us">
            <div class="space-y-4 mb-6">
                <div class="bg-base-200 p-4 rounded-xl flex items-start gap-4">
                    <div class="bg-primary/20 p-3 rounded-full">
                        <Mail attr:class="w-6 h-6 text-primary" />
                    </div>
                    <div>
                        <h4 class="font-medium">"Email"</h4>
                        <p class="opacity-70 mt-1">"Got questions? Send us a message!"</p>
                        <a href="mailto:contact@factfusion.com" class="link link-primary mt-2 inline-block">
                            "contact@factfusion.com"
                        </a>
                    </div>
                </div>
                <div class="bg-base-200 p-4 rounded-xl flex items-start gap-4">
                    <div class="bg-secondary/20 p-3 rounded-full">
                        <Phone attr:class="w-6 h-6 text-secondary" />
                    </div>
                    <div>
                        <h4 class="font-medium">"Phone"</h4>
                        <p class="opacity-70 mt-1">"Call us for immediate assistance"</p>
                        <a href="tel:+18001234567" class="link link-secondary mt-2 inline-block">
                            "+1 (800) 123-4567"
                        </a>
                    </div>
                </div>
                <div class="bg-base-200 p-4 rounded-xl flex items-start gap-4">
                    <div class="bg-primary/20 p-3 rounded-full">
                        <MapPin attr:class="w-6 h-6 text-primary" />
                    </div>
                    <div>
                        <h4 class="font-medium">"Office"</h4>
                        <p class="opacity-70 mt-1">"Visit our headquarters"</p>
                        <p class="mt-2">"123 Tech Avenue, San Francisco, CA 94107, United States"</p>
                    </div>
                </div>
            </div>
            <div class="divider">"or write to us"</div>
            <ContactForm on_done=move |_: ()| open.set(false) />
        </Modal>
    }
}
