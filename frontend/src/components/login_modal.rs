use crate::auth::{login, register, use_auth};
use crate::components::icons::User;
use crate::components::modal::Modal;
use crate::notice::use_notices;
use crate::services::use_services;
use leptos::prelude::*;

/// 登录 / 注册模态框
///
/// 两种模式共用一个表单，注册时多一个姓名字段。
#[component]
pub fn LoginModal(open: RwSignal<bool>) -> impl IntoView {
    let services = StoredValue::new(use_services());
    let auth = use_auth();
    let notices = use_notices();

    let registering = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_v = email.get_untracked();
        let password_v = password.get_untracked();

        let result = if registering.get_untracked() {
            let name_v = name.get_untracked();
            if name_v.trim().is_empty() {
                notices.error("Missing information", "Please enter your name");
                return;
            }
            services
                .with_value(|services| register(&auth, services, &name_v, &email_v, &password_v))
                .map(|user| ("Registration successful", format!("Welcome, {}!", user.name)))
        } else {
            services
                .with_value(|services| login(&auth, services, &email_v, &password_v))
                .map(|user| ("Login successful", format!("Welcome back, {}!", user.name)))
        };

        match result {
            Ok((title, description)) => {
                notices.info(title, description);
                password.set(String::new());
                open.set(false);
            }
            Err(e) => notices.report(&e),
        }
    };

    view! {
        <Modal open=open>
            <div class="mb-6 text-center">
                <div class="w-16 h-16 mx-auto mb-4 rounded-full bg-gradient-to-r from-primary to-secondary flex items-center justify-center">
                    <User attr:class="w-8 h-8 text-primary-content" />
                </div>
                <h2 class="text-2xl font-bold">
                    {move || if registering.get() { "Create Account" } else { "Welcome Back" }}
                </h2>
                <p class="opacity-70 mt-1">
                    {move || {
                        if registering.get() {
                            "Sign up to analyze content with FactFusion"
                        } else {
                            "Log in to continue to FactFusion"
                        }
                    }}
                </p>
            </div>

            <form on:submit=on_submit class="space-y-4">
                <Show when=move || registering.get()>
                    <div class="form-control">
                        <label for="name" class="label">
                            <span class="label-text">"Full Name"</span>
                        </label>
                        <input
                            id="name"
                            type="text"
                            class="input input-bordered w-full"
                            placeholder="John Doe"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>
                </Show>
                <div class="form-control">
                    <label for="email" class="label">
                        <span class="label-text">"Email"</span>
                    </label>
                    <input
                        id="email"
                        type="email"
                        required
                        class="input input-bordered w-full"
                        placeholder="your@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-control">
                    <label for="password" class="label">
                        <span class="label-text">"Password"</span>
                    </label>
                    <input
                        id="password"
                        type="password"
                        required
                        class="input input-bordered w-full"
                        placeholder="********"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary w-full">
                    {move || if registering.get() { "Create Account" } else { "Sign In" }}
                </button>
            </form>

            <p class="mt-6 text-center opacity-80">
                {move || {
                    if registering.get() { "Already have an account? " } else { "Don't have an account? " }
                }}
                <button
                    type="button"
                    class="link link-primary font-medium"
                    on:click=move |_| registering.update(|r| *r = !*r)
                >
                    {move || if registering.get() { "Sign In" } else { "Sign Up" }}
                </button>
            </p>
        </Modal>
    }
}
