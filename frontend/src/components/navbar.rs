use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, Moon, ShieldCheck, Sun, User};
use crate::components::login_modal::LoginModal;
use crate::notice::use_notices;
use crate::services::use_services;
use crate::theme::use_theme;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use factfusion_shared::Theme;
use leptos::prelude::*;

/// 顶部导航栏
#[component]
pub fn Navbar() -> impl IntoView {
    let router = use_router();
    let auth = use_auth();
    let theme = use_theme();
    let notices = use_notices();
    let services = StoredValue::new(use_services());
    let login_open = RwSignal::new(false);

    let current = router.current_route();
    let link_class = move |route: AppRoute| {
        move || {
            if current.get() == route {
                "btn btn-ghost btn-sm text-primary"
            } else {
                "btn btn-ghost btn-sm opacity-80"
            }
            .to_string()
        }
    };

    let on_logout = move |_| {
        let result = services.with_value(|services| logout(&auth, services));
        match result {
            Ok(()) => notices.info("Logged out", "You have been successfully logged out"),
            Err(e) => notices.report(&e),
        }
    };

    view! {
        <div class="navbar bg-base-100/80 backdrop-blur-md shadow-sm fixed top-0 z-40 px-4">
            <div class="navbar-start">
                <div class="dropdown md:hidden">
                    <div tabindex="0" role="button" class="btn btn-ghost btn-sm">"☰"</div>
                    <ul tabindex="0" class="menu menu-sm dropdown-content bg-base-100 rounded-box z-50 mt-3 w-48 p-2 shadow">
                        {AppRoute::NAV
                            .into_iter()
                            .map(|route| {
                                view! {
                                    <li>
                                        <Link to=route>{route.label()}</Link>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <Link to=AppRoute::Home class="btn btn-ghost text-xl gap-2">
                    <ShieldCheck attr:class="w-6 h-6 text-primary" />
                    <span class="font-bold">"FactFusion"</span>
                </Link>
            </div>

            <div class="navbar-center hidden md:flex gap-1">
                {AppRoute::NAV
                    .into_iter()
                    .map(|route| {
                        view! {
                            <Link to=route class=Signal::derive(link_class(route))>
                                {route.label()}
                            </Link>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="navbar-end gap-2">
                <button
                    type="button"
                    class="btn btn-ghost btn-circle btn-sm"
                    aria-label="Toggle theme"
                    on:click=move |_| theme.toggle()
                >
                    {move || match theme.theme.get() {
                        Theme::Dark => view! { <Sun attr:class="w-5 h-5" /> }.into_any(),
                        Theme::Light => view! { <Moon attr:class="w-5 h-5" /> }.into_any(),
                    }}
                </button>
                {move || match auth.user.get() {
                    Some(user) => view! {
                        <span class="hidden sm:flex items-center gap-1 text-sm opacity-80">
                            <User attr:class="w-4 h-4" />
                            {user.name}
                        </span>
                        <button type="button" class="btn btn-outline btn-sm gap-1" on:click=on_logout>
                            <LogOut attr:class="w-4 h-4" />
                            "Logout"
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <button
                            type="button"
                            class="btn btn-primary btn-sm"
                            on:click=move |_| login_open.set(true)
                        >
                            "Login / Register"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </div>
        <LoginModal open=login_open />
    }
}
