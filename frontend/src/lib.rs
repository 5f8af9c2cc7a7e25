//! FactFusion 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web`: 浏览器 API 封装与路由服务
//! - `services`: 配置与存储仓库的组装
//! - `auth` / `theme` / `notice`: 全局状态
//! - `components`: UI 组件层（含各页面）

mod auth;
mod exports;
mod notice;
mod services;
mod theme;
pub(crate) mod web;

mod components {
    pub mod about;
    pub mod analysis;
    mod analysis_form;
    mod contact_form;
    pub mod dashboard;
    mod dashboard_tabs;
    mod feedback_form;
    mod file_upload;
    mod footer;
    pub mod home;
    mod icons;
    mod job_application_form;
    mod loading_screen;
    mod login_modal;
    mod modal;
    mod navbar;
    pub mod not_found;
    mod trust_score;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::about::AboutPage;
use crate::components::analysis::AnalysisPage;
use crate::components::dashboard::DashboardPage;
use crate::components::home::HomePage;
use crate::components::not_found::NotFoundPage;
use crate::notice::{NoticeToast, provide_notices};
use crate::services::{AppServices, provide_services};
use crate::theme::provide_theme;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Analysis => view! { <AnalysisPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 组装服务与全局状态
    let services = AppServices::from_build_env();
    let notices = provide_notices(services.config.notice_duration());
    provide_theme(&services);

    // 2. 创建认证上下文，并从 LocalStorage 恢复登录
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx, &services);
    provide_services(services);

    // 3. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router
            is_authenticated=is_authenticated
            on_denied=move |route: AppRoute| {
                tracing::debug!(%route, "protected page requested without a session");
                notices.error("Authentication required", "Please log in to access this page");
            }
        >
            <RouterOutlet matcher=route_matcher />
        </Router>
        <NoticeToast />
    }
}
