//! 图标组件（Lucide 路径）
//!
//! 尺寸与颜色通过 `attr:class` 传入。

use factfusion_shared::ContentKind;
use factfusion_shared::band::BandIcon;
use leptos::prelude::*;

macro_rules! lucide {
    ($($name:ident => { $($body:tt)* })*) => {
        $(
            #[component]
            pub fn $name() -> impl IntoView {
                view! {
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        $($body)*
                    </svg>
                }
            }
        )*
    };
}

lucide! {
    AlertTriangle => {
        <path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" />
        <path d="M12 9v4" />
        <path d="M12 17h.01" />
    }
    ArrowLeft => {
        <path d="m12 19-7-7 7-7" />
        <path d="M19 12H5" />
    }
    ArrowRight => {
        <path d="M5 12h14" />
        <path d="m12 5 7 7-7 7" />
    }
    BarChart => {
        <line x1="12" x2="12" y1="20" y2="10" />
        <line x1="18" x2="18" y1="20" y2="4" />
        <line x1="6" x2="6" y1="20" y2="16" />
    }
    Briefcase => {
        <rect width="20" height="14" x="2" y="7" rx="2" ry="2" />
        <path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" />
    }
    CheckCircle => {
        <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
        <path d="m9 11 3 3L22 4" />
    }
    Clock => {
        <circle cx="12" cy="12" r="10" />
        <polyline points="12 6 12 12 16 14" />
    }
    Database => {
        <ellipse cx="12" cy="5" rx="9" ry="3" />
        <path d="M3 5V19A9 3 0 0 0 21 19V5" />
        <path d="M3 12A9 3 0 0 0 21 12" />
    }
    Download => {
        <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
        <polyline points="7 10 12 15 17 10" />
        <line x1="12" x2="12" y1="15" y2="3" />
    }
    FileText => {
        <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
        <path d="M14 2v4a2 2 0 0 0 2 2h4" />
        <path d="M10 9H8" />
        <path d="M16 13H8" />
        <path d="M16 17H8" />
    }
    Home => {
        <path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
        <polyline points="9 22 9 12 15 12 15 22" />
    }
    Image => {
        <rect width="18" height="18" x="3" y="3" rx="2" ry="2" />
        <circle cx="9" cy="9" r="2" />
        <path d="m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" />
    }
    Info => {
        <circle cx="12" cy="12" r="10" />
        <path d="M12 16v-4" />
        <path d="M12 8h.01" />
    }
    Loader => {
        <path d="M21 12a9 9 0 1 1-6.219-8.56" />
    }
    LogOut => {
        <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" />
        <polyline points="16 17 21 12 16 7" />
        <line x1="21" x2="9" y1="12" y2="12" />
    }
    Mail => {
        <rect width="20" height="16" x="2" y="4" rx="2" />
        <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
    }
    MapPin => {
        <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
        <circle cx="12" cy="10" r="3" />
    }
    MessageSquare => {
        <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
    }
    Moon => {
        <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />
    }
    Music => {
        <path d="M9 18V5l12-2v13" />
        <circle cx="6" cy="18" r="3" />
        <circle cx="18" cy="16" r="3" />
    }
    Phone => {
        <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
    }
    Search => {
        <circle cx="11" cy="11" r="8" />
        <path d="m21 21-4.3-4.3" />
    }
    Send => {
        <path d="m22 2-7 20-4-9-9-4Z" />
        <path d="M22 2 11 13" />
    }
    ShieldCheck => {
        <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
        <path d="m9 12 2 2 4-4" />
    }
    Sparkles => {
        <path d="m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" />
    }
    Star => {
        <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
    }
    Sun => {
        <circle cx="12" cy="12" r="4" />
        <path d="M12 2v2" />
        <path d="M12 20v2" />
        <path d="m4.93 4.93 1.41 1.41" />
        <path d="m17.66 17.66 1.41 1.41" />
        <path d="M2 12h2" />
        <path d="M20 12h2" />
        <path d="m6.34 17.66-1.41 1.41" />
        <path d="m19.07 4.93-1.41 1.41" />
    }
    Upload => {
        <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
        <polyline points="17 8 12 3 7 8" />
        <line x1="12" x2="12" y1="3" y2="15" />
    }
    User => {
        <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
        <circle cx="12" cy="7" r="4" />
    }
    Users => {
        <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
        <circle cx="9" cy="7" r="4" />
        <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
        <path d="M16 3.13a4 4 0 0 1 0 7.75" />
    }
    Video => {
        <path d="m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5" />
        <rect x="2" y="6" width="14" height="12" rx="2" />
    }
    X => {
        <path d="M18 6 6 18" />
        <path d="m6 6 12 12" />
    }
    XCircle => {
        <circle cx="12" cy="12" r="10" />
        <path d="m15 9-6 6" />
        <path d="m9 9 6 6" />
    }
}

/// 分档图标
#[component]
pub fn BandIconView(icon: BandIcon, #[prop(into)] class: String) -> impl IntoView {
    match icon {
        BandIcon::CheckCircle => view! { <CheckCircle attr:class=class /> }.into_any(),
        BandIcon::Info => view! { <Info attr:class=class /> }.into_any(),
        BandIcon::AlertTriangle => view! { <AlertTriangle attr:class=class /> }.into_any(),
        BandIcon::XCircle => view! { <XCircle attr:class=class /> }.into_any(),
    }
}

/// 内容类别图标
#[component]
pub fn KindIcon(kind: ContentKind, #[prop(into)] class: String) -> impl IntoView {
    match kind {
        ContentKind::Image => view! { <Image attr:class=class /> }.into_any(),
        ContentKind::Audio => view! { <Music attr:class=class /> }.into_any(),
        ContentKind::Video => view! { <Video attr:class=class /> }.into_any(),
        ContentKind::Text | ContentKind::Unknown => view! { <FileText attr:class=class /> }.into_any(),
    }
}
