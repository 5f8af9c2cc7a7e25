//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送或替换 History 状态（内部工具函数）
fn write_history(path: &str, use_push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if use_push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if let Err(e) = result {
        tracing::warn!(path, error = ?e, "history update failed");
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由
    current_route: RwSignal<AppRoute>,
    /// 当前地址栏路径（404 页面需要原始路径）
    current_path: RwSignal<String>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
    /// 守卫拒绝访问时的回调
    on_denied: Option<Callback<AppRoute>>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// # Arguments
    /// * `is_authenticated` - 认证状态信号，由外部注入实现解耦
    /// * `on_denied` - 被守卫拦截时调用，参数为被拒绝的路由
    fn new(is_authenticated: Signal<bool>, on_denied: Option<Callback<AppRoute>>) -> Self {
        // 1. 初始化当前路由（从 URL 解析）
        let path = current_path();
        let initial_route = AppRoute::from_path(&path);

        Self {
            current_route: RwSignal::new(initial_route),
            current_path: RwSignal::new(path),
            is_authenticated,
            on_denied,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> Signal<AppRoute> {
        self.current_route.into()
    }

    /// 获取当前路径信号
    pub fn current_path(&self) -> Signal<String> {
        self.current_path.into()
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 加载。被拒绝时跳到守卫给出的路由。
    pub fn go(&self, route: AppRoute) {
        let is_auth = self.is_authenticated.get_untracked();

        // --- Step 1: 验证目标路由 ---
        let allowed = route.guard(is_auth);
        if allowed != route {
            tracing::info!(target = %route, "access denied, redirecting");
            self.commit(allowed, allowed.to_path(), true);
            self.deny(route);
            return;
        }

        // --- Step 2: 加载页面 (更新状态) ---
        self.commit(route, route.to_path(), true);
    }

    /// 浏览器后退
    pub fn back(&self) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }

    fn commit(&self, route: AppRoute, path: &str, use_push: bool) {
        write_history(path, use_push);
        self.current_path.set(path.to_string());
        self.current_route.set(route);
        scroll_to_top();
    }

    fn deny(&self, route: AppRoute) {
        if let Some(on_denied) = self.on_denied {
            on_denied.run(route);
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            let target_route = AppRoute::from_path(&path);
            let allowed = target_route.guard(router.is_authenticated.get_untracked());

            // popstate 时也执行守卫逻辑
            if allowed != target_route {
                write_history(allowed.to_path(), false);
                router.current_path.set(allowed.to_path().to_string());
                router.current_route.set(allowed);
                router.deny(target_route);
            } else {
                router.current_path.set(path);
                router.current_route.set(target_route);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    ///
    /// 首次运行时也会执行，覆盖直接打开受保护地址的情况。
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();

            if !is_auth && route.requires_auth() {
                tracing::info!(route = %route, "not authenticated, leaving protected page");
                let redirect = AppRoute::auth_failure_redirect();
                router.commit(redirect, redirect.to_path(), false);
                router.deny(route);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>, on_denied: Option<Callback<AppRoute>>) -> RouterService {
    let router = RouterService::new(is_authenticated, on_denied);

    // 初始化监听器
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 被守卫拦截时的回调
    #[prop(optional, into)]
    on_denied: Option<Callback<AppRoute>>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    // 提供路由服务到 Context
    provide_router(is_authenticated, on_denied);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接：拦截点击，交给路由服务处理
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        // 保留 Ctrl/Cmd 点击在新标签页打开的行为
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
            return;
        }
        ev.prevent_default();
        router.go(to);
    };

    view! {
        <a href=to.to_path() class=move || class.get().unwrap_or_default() on:click=on_click>
            {children()}
        </a>
    }
}
