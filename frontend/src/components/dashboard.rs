use crate::auth::use_auth;
use crate::components::contact_form::ContactModal;
use crate::components::dashboard_tabs::DashboardTabs;
use crate::components::footer::Footer;
use crate::components::icons::{BarChart, Clock, Download, KindIcon, Phone, ShieldCheck, Users};
use crate::components::loading_screen::LoadingGate;
use crate::components::navbar::Navbar;
use crate::exports;
use crate::notice::use_notices;
use crate::services::use_services;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use factfusion_shared::date::relative_label;
use factfusion_shared::demo::DEMO_RECENT;
use factfusion_shared::loading::INTERNAL_PAGE_CAP;
use factfusion_shared::repository::HistorySummary;
use factfusion_shared::{AnalysisRecord, Clock as _, ContentKind, SystemClock, Timestamp, TrustBand};
use leptos::prelude::*;

const RECENT_LIMIT: usize = 5;

/// 最近分析列表中的一行
#[derive(Debug, Clone, PartialEq)]
struct RecentRow {
    title: String,
    kind: ContentKind,
    when: String,
    score: u8,
}

impl RecentRow {
    fn from_record(record: &AnalysisRecord, now: Timestamp) -> Self {
        let when = Timestamp::parse(&record.date)
            .map(|then| relative_label(then, now))
            .unwrap_or_else(|| record.date.clone());
        Self {
            title: record.file_name.clone(),
            kind: record.file_type,
            when,
            score: record.trust_score,
        }
    }

    /// 没有历史记录时显示的示例
    fn demo() -> Vec<Self> {
        DEMO_RECENT
            .iter()
            .map(|d| Self {
                title: d.title.to_string(),
                kind: d.kind,
                when: d.when.to_string(),
                score: d.score,
            })
            .collect()
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <LoadingGate cap=INTERNAL_PAGE_CAP>
            <div class="min-h-screen bg-base-200 flex flex-col">
                <Navbar />
                <DashboardContent />
                <Footer />
            </div>
        </LoadingGate>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notices = use_notices();
    let services = StoredValue::new(use_services());
    let contact_open = RwSignal::new(false);

    // 历史读取失败时按空历史处理，界面退回示例数据
    let history = Memo::new(move |_| {
        let user = auth.user.get()?;
        let now = SystemClock.now();
        services.with_value(|s| {
            let repo = s.history(&user);
            let loaded = repo.recent(RECENT_LIMIT).and_then(|recent| {
                repo.summary().map(|summary| (recent, summary))
            });
            match loaded {
                Ok((recent, summary)) => Some((
                    recent.iter().map(|r| RecentRow::from_record(r, now)).collect::<Vec<_>>(),
                    summary,
                )),
                Err(e) => {
                    tracing::warn!(error = %e, "could not load analysis history");
                    None
                }
            }
        })
    });

    let rows = move || match history.get() {
        Some((rows, _)) if !rows.is_empty() => rows,
        _ => RecentRow::demo(),
    };
    let summary = move || history.get().map(|(_, s)| s).unwrap_or_default();

    let download_report = move || match exports::export_dashboard_report() {
        Ok(()) => notices.info("Download started", "Your analysis report is being downloaded"),
        Err(e) => notices.report(&e.into()),
    };

    let view_positions = move |_| {
        router.go(AppRoute::About);
        notices.info("Careers", "View our open positions on the About page");
    };

    view! {
        <main class="flex-1 pt-24 pb-20 px-4">
            <div class="container mx-auto max-w-7xl flex flex-col lg:flex-row gap-8">
                // 侧栏
                <aside class="lg:w-64 flex-shrink-0 space-y-6">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body p-5">
                            <h3 class="font-medium mb-2">"Recent Analyses"</h3>
                            <div class="space-y-3">
                                <For
                                    each=rows
                                    key=|row| (row.title.clone(), row.when.clone(), row.score)
                                    children=move |row| view! { <RecentItem row=row /> }
                                />
                            </div>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body p-5">
                            <h3 class="font-medium mb-2">"Actions"</h3>
                            <div class="space-y-3">
                                <button
                                    type="button"
                                    class="btn btn-outline btn-sm w-full justify-start gap-2"
                                    on:click=move |_| download_report()
                                >
                                    <Download attr:class="w-4 h-4" />
                                    "Download Report"
                                </button>
                                <button
                                    type="button"
                                    class="btn btn-outline btn-sm w-full justify-start gap-2"
                                    on:click=view_positions
                                >
                                    <Users attr:class="w-4 h-4" />
                                    "View Open Positions"
                                </button>
                                <button
                                    type="button"
                                    class="btn btn-outline btn-sm w-full justify-start gap-2"
                                    on:click=move |_| contact_open.set(true)
                                >
                                    <Phone attr:class="w-4 h-4" />
                                    "Contact Us"
                                </button>
                            </div>
                        </div>
                    </div>
                </aside>

                // 主区域
                <section class="flex-1 min-w-0">
                    <div class="flex flex-col sm:flex-row justify-between sm:items-center gap-4 mb-6">
                        <div>
                            <h1 class="text-2xl font-bold">"Analysis Dashboard"</h1>
                            <p class="opacity-70">"Verify content across different media formats"</p>
                        </div>
                        <div class="flex gap-3">
                            <button
                                type="button"
                                class="btn btn-outline gap-2"
                                on:click=move |_| download_report()
                            >
                                <Download attr:class="w-4 h-4" />
                                "Export"
                            </button>
                            <button
                                type="button"
                                class="btn btn-primary"
                                on:click=move |_| router.go(AppRoute::Analysis)
                            >
                                "New Analysis"
                            </button>
                        </div>
                    </div>

                    <Stats summary=Signal::derive(summary) />

                    <div class="min-h-[600px]">
                        <DashboardTabs />
                    </div>
                </section>
            </div>
            <ContactModal open=contact_open />
        </main>
    }
}

#[component]
fn RecentItem(row: RecentRow) -> impl IntoView {
    let band = TrustBand::from_score(row.score as f64);
    view! {
        <div class="p-3 bg-base-200 rounded-lg flex items-center justify-between gap-3">
            <div class="flex-1 min-w-0">
                <h4 class="font-medium text-sm truncate">{row.title}</h4>
                <div class="flex items-center gap-2 text-xs opacity-60">
                    <KindIcon kind=row.kind class="w-3 h-3" />
                    <span class="capitalize">{row.kind.as_str()}</span>
                    <span>"•"</span>
                    <span>{row.when}</span>
                </div>
            </div>
            <div
                class=format!("w-2 h-8 rounded-full bg-{}-500", band.color())
                title=format!("{}%", row.score)
            ></div>
        </div>
    }
}

#[component]
fn Stats(summary: Signal<HistorySummary>) -> impl IntoView {
    let count = move || summary.with(|s| s.count).to_string();
    let average = move || {
        summary
            .with(|s| s.average_score)
            .map(|avg| format!("{avg:.1}%"))
            .unwrap_or_else(|| "-".to_string())
    };
    let average_note = move || {
        summary
            .with(|s| s.average_score)
            .map(|avg| TrustBand::from_score(avg).status())
            .unwrap_or("No analyses yet")
    };
    let last = move || {
        summary.with(|s| {
            s.last
                .as_ref()
                .map(|r| r.file_name.clone())
                .unwrap_or_else(|| "None".to_string())
        })
    };
    let last_when = move || {
        summary.with(|s| {
            s.last
                .as_ref()
                .and_then(|r| Timestamp::parse(&r.date))
                .map(|then| relative_label(then, SystemClock.now()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="stats stats-vertical sm:stats-horizontal shadow w-full mb-8 bg-base-100">
            <div class="stat">
                <div class="stat-figure text-primary">
                    <BarChart attr:class="w-6 h-6" />
                </div>
                <div class="stat-title">"Analyses Completed"</div>
                <div class="stat-value text-2xl">{count}</div>
            </div>
            <div class="stat">
                <div class="stat-figure text-secondary">
                    <ShieldCheck attr:class="w-6 h-6" />
                </div>
                <div class="stat-title">"Average Trust Score"</div>
                <div class="stat-value text-2xl">{average}</div>
                <div class="stat-desc">{average_note}</div>
            </div>
            <div class="stat min-w-0">
                <div class="stat-figure text-primary">
                    <Clock attr:class="w-6 h-6" />
                </div>
                <div class="stat-title">"Last Analysis"</div>
                <div class="stat-value text-lg truncate">{last}</div>
                <div class="stat-desc">{last_when}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_row_uses_relative_date() {
        let now = Timestamp::parse("2024-05-03T12:00:00.000Z").unwrap();
        let record = AnalysisRecord {
            id: "1".into(),
            user_id: "u".into(),
            file_name: "speech.mp3".into(),
            file_type: ContentKind::Audio,
            trust_score: 82,
            date: "2024-05-03T10:00:00.000Z".into(),
        };

        let row = RecentRow::from_record(&record, now);
        assert_eq!(row.when, "2 hours ago");
        assert_eq!(row.kind, ContentKind::Audio);
    }

    #[test]
    fn unparsable_date_is_shown_as_is() {
        let record = AnalysisRecord {
            id: "1".into(),
            user_id: "u".into(),
            file_name: "a.txt".into(),
            file_type: ContentKind::Text,
            trust_score: 50,
            date: "someday".into(),
        };
        let row = RecentRow::from_record(&record, Timestamp::new(0));
        assert_eq!(row.when, "someday");
    }

    #[test]
    fn demo_rows_match_demo_data() {
        let rows = RecentRow::demo();
        assert_eq!(rows.len(), DEMO_RECENT.len());
        assert_eq!(rows[0].title, "Climate change article");
    }
}
