//! 首页
//!
//! 纯展示：标语轮播、功能列表、使用流程。

use crate::components::footer::Footer;
use crate::components::icons::*;
use crate::components::navbar::Navbar;
use crate::web::TimerSlot;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use std::time::Duration;

const PHRASES: [&str; 5] = [
    "detect fake news",
    "verify claims",
    "analyze content",
    "check sources",
    "fight misinformation",
];

const PHRASE_INTERVAL: Duration = Duration::from_secs(3);

const FEATURES: [(&str, &str); 8] = [
    ("Text Analysis", "Analyze articles, social media posts, and textual claims from any source."),
    ("Image Verification", "Detect manipulated images and verify visual content with advanced algorithms."),
    ("Audio Processing", "Identify manipulated audio clips and transcribe content for analysis."),
    ("Video Examination", "Analyze video content frame by frame to detect deepfakes and manipulation."),
    ("Trust Scoring", "Get detailed trust scores with confidence intervals and verification metrics."),
    ("Source Comparison", "Cross-reference claims against our vast database of verified information."),
    ("Data Visualization", "View interactive visualizations of analysis results and confidence metrics."),
    ("AI Assistant", "Get explanations and insights from our AI about verification results."),
];

const STEPS: [(&str, &str); 5] = [
    ("Submit Content", "Upload or paste the text, image, audio, or video content you want to analyze."),
    ("AI Analysis", "Our AI algorithms scan the content to identify claims and extract key information."),
    ("Database Comparison", "Claims are cross-referenced against our verified sources and fact-checking databases."),
    ("Trust Scoring", "A detailed trust score is generated based on multiple verification factors."),
    ("Results & Insights", "Receive comprehensive results with visualization and AI-powered explanations."),
];

fn feature_icon(index: usize) -> AnyView {
    let class = "w-6 h-6 text-primary";
    match index {
        0 => view! { <FileText attr:class=class /> }.into_any(),
        1 => view! { <Image attr:class=class /> }.into_any(),
        2 => view! { <Music attr:class=class /> }.into_any(),
        3 => view! { <Video attr:class=class /> }.into_any(),
        4 => view! { <ShieldCheck attr:class=class /> }.into_any(),
        5 => view! { <Database attr:class=class /> }.into_any(),
        6 => view! { <BarChart attr:class=class /> }.into_any(),
        _ => view! { <Sparkles attr:class=class /> }.into_any(),
    }
}

#[component]
fn Hero() -> impl IntoView {
    let router = use_router();
    let phrase = RwSignal::new(0usize);
    let timer = StoredValue::new_local(TimerSlot::new());
    timer.update_value(|t| {
        t.every(PHRASE_INTERVAL, move || phrase.update(|i| *i = (*i + 1) % PHRASES.len()))
    });

    view! {
        <section class="min-h-[80vh] flex items-center justify-center px-4 pt-24">
            <div class="text-center max-w-4xl">
                <h1 class="text-3xl md:text-4xl lg:text-6xl font-bold mb-6 leading-tight tracking-tight">
                    "The Science of Truth in a"
                    <br />
                    "World of "
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary to-secondary">
                        "Misinformation"
                    </span>
                </h1>
                <p class="text-xl md:text-2xl opacity-80 mb-8">
                    "Advanced AI technology to "
                    <span class="font-semibold text-primary">{move || PHRASES[phrase.get()]}</span>
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mt-8">
                    <button
                        type="button"
                        class="btn btn-primary btn-lg gap-2"
                        on:click=move |_| router.go(AppRoute::Analysis)
                    >
                        "Start Analysis"
                        <ArrowRight attr:class="w-5 h-5" />
                    </button>
                    <button
                        type="button"
                        class="btn btn-outline btn-lg"
                        on:click=move |_| router.go(AppRoute::Dashboard)
                    >
                        "View Dashboard"
                    </button>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-16 text-sm">
                    {[
                        "Analyze claims from any source instantly",
                        "AI-powered fact-checking technology",
                        "Detailed trust score analysis",
                        "Supports text, image, audio & video",
                    ]
                        .into_iter()
                        .map(|text| {
                            view! {
                                <div class="card bg-base-200 p-4 flex flex-col items-center gap-2">
                                    <CheckCircle attr:class="w-5 h-5 text-success" />
                                    <span>{text}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="py-20 px-4 bg-base-200">
            <div class="container mx-auto max-w-6xl">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-6">"Powerful Features"</h2>
                    <p class="text-lg opacity-80 max-w-3xl mx-auto">
                        "Our platform combines cutting-edge AI technology with comprehensive data analysis to provide the most accurate and reliable fact-checking available."
                    </p>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {FEATURES
                        .into_iter()
                        .enumerate()
                        .map(|(i, (title, description))| {
                            view! {
                                <div class="card bg-base-100 shadow p-6">
                                    <div class="w-12 h-12 rounded-lg bg-primary/10 flex items-center justify-center mb-4">
                                        {feature_icon(i)}
                                    </div>
                                    <h3 class="font-semibold text-lg mb-2">{title}</h3>
                                    <p class="text-sm opacity-70">{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section class="py-20 px-4">
            <div class="container mx-auto max-w-4xl">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-6">"How It Works"</h2>
                    <p class="text-lg opacity-80">
                        "Our advanced fact-checking process combines AI technology with extensive data analysis to deliver accurate results."
                    </p>
                </div>
                <ul class="steps steps-vertical w-full">
                    {STEPS
                        .into_iter()
                        .map(|(title, description)| {
                            view! {
                                <li class="step step-primary">
                                    <div class="text-left py-4">
                                        <h3 class="font-semibold">{title}</h3>
                                        <p class="text-sm opacity-70">{description}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col overflow-x-hidden">
            <Navbar />
            <main>
                <Hero />
                <Features />
                <HowItWorks />
            </main>
            <Footer />
        </div>
    }
}
