use crate::components::icons::{ArrowLeft, Home};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

/// 404 页面
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let router = use_router();
    let path = router.current_path();

    Effect::new(move |_| {
        tracing::warn!(path = %path.get(), "user attempted to access non-existent route");
    });

    view! {
        <div class="min-h-screen bg-base-200 flex flex-col items-center justify-center p-4">
            <div class="card bg-base-100 shadow-xl max-w-md w-full">
                <div class="card-body items-center text-center">
                    <div class="relative w-24 h-24 mb-6">
                        <div class="absolute inset-0 bg-gradient-to-tr from-primary to-secondary rounded-full opacity-80"></div>
                        <div class="absolute inset-2 bg-base-100 rounded-full flex items-center justify-center">
                            <span class="font-bold text-4xl">"404"</span>
                        </div>
                    </div>
                    <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
                    <p class="text-lg opacity-70 mb-8">
                        "The page you're looking for doesn't exist or has been moved."
                    </p>
                    <div class="flex flex-col sm:flex-row justify-center gap-4">
                        <button
                            type="button"
                            class="btn btn-primary gap-2"
                            on:click=move |_| router.go(AppRoute::Home)
                        >
                            <Home attr:class="w-5 h-5" />
                            "Return Home"
                        </button>
                        <button type="button" class="btn btn-outline gap-2" on:click=move |_| router.back()>
                            <ArrowLeft attr:class="w-5 h-5" />
                            "Go Back"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
