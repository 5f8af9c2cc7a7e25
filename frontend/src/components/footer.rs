use crate::components::icons::{Mail, MapPin, Phone, ShieldCheck};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-base-200 pt-16 pb-8 px-4 mt-auto">
            <div class="container mx-auto max-w-6xl">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-10 mb-12">
                    <div>
                        <div class="flex items-center gap-2 mb-4">
                            <ShieldCheck attr:class="w-6 h-6 text-primary" />
                            <span class="font-bold text-xl">"FactFusion"</span>
                        </div>
                        <p class="opacity-70 text-sm">
                            "FactFusion combines cutting-edge AI technology with comprehensive data analysis to provide the most accurate and reliable fact-checking available."
                        </p>
                    </div>
                    <div>
                        <h4 class="footer-title">"Product"</h4>
                        <ul class="space-y-2 text-sm">
                            {AppRoute::NAV
                                .into_iter()
                                .map(|route| {
                                    view! {
                                        <li>
                                            <Link to=route class="link link-hover opacity-80">
                                                {route.label()}
                                            </Link>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer-title">"Contact"</h4>
                        <ul class="space-y-3 text-sm opacity-80">
                            <li class="flex items-center gap-2">
                                <Mail attr:class="w-4 h-4 text-primary" />
                                "info@factfusion.com"
                            </li>
                            <li class="flex items-center gap-2">
                                <Phone attr:class="w-4 h-4 text-primary" />
                                "+1 (123) 456-7890"
                            </li>
                            <li class="flex items-center gap-2">
                                <MapPin attr:class="w-4 h-4 text-primary" />
                                "123 Truth Street, Knowledge City"
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="border-t border-base-content/10 pt-6 text-center text-sm opacity-60">
                    "© 2024 FactFusion. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
