use crate::components::analysis_form::AnalysisForm;
use crate::components::footer::Footer;
use crate::components::loading_screen::LoadingGate;
use crate::components::navbar::Navbar;
use factfusion_shared::loading::INTERNAL_PAGE_CAP;
use leptos::prelude::*;

/// 分析页
#[component]
pub fn AnalysisPage() -> impl IntoView {
    view! {
        <LoadingGate cap=INTERNAL_PAGE_CAP>
            <div class="min-h-screen bg-base-200 flex flex-col">
                <Navbar />
                <main class="flex-1 pt-28 pb-20 px-4">
                    <div class="container mx-auto max-w-6xl">
                        <div class="text-center mb-16">
                            <h1 class="text-3xl md:text-4xl font-bold mb-4">
                                "AI-Powered "
                                <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary to-secondary">
                                    "Fact Analysis"
                                </span>
                            </h1>
                            <p class="text-lg opacity-80 max-w-2xl mx-auto">
                                "Submit any text, image, audio, or video content and get a detailed factual analysis powered by advanced AI algorithms."
                            </p>
                        </div>
                        <AnalysisForm />
                    </div>
                </main>
                <Footer />
            </div>
        </LoadingGate>
    }
}
