//! 认证模块
//!
//! 管理当前登录用户，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。
//! 规则本身在共享层的 `AuthService` 中，这里只负责把结果同步到信号。

use crate::services::AppServices;
use factfusion_shared::{AppResult, SessionUser};
use leptos::prelude::*;

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 当前用户；`None` 表示未登录
    pub user: RwSignal<Option<SessionUser>>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let user = self.user;
        Signal::derive(move || user.with(Option::is_some))
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 恢复上次登录的用户；内容损坏时视为未登录。
pub fn init_auth(ctx: &AuthContext, services: &AppServices) {
    let restored = match services.auth().restore() {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, "could not restore session");
            None
        }
    };
    if let Some(user) = &restored {
        tracing::info!(user_id = %user.id, "session restored");
    }
    ctx.user.set(restored);
}

/// 登录并保存状态
pub fn login(ctx: &AuthContext, services: &AppServices, email: &str, password: &str) -> AppResult<SessionUser> {
    let user = services.auth().login(email, password)?;
    ctx.user.set(Some(user.clone()));
    Ok(user)
}

/// 注册并登录
pub fn register(
    ctx: &AuthContext,
    services: &AppServices,
    name: &str,
    email: &str,
    password: &str,
) -> AppResult<SessionUser> {
    let user = services.auth().register(name, email, password)?;
    ctx.user.set(Some(user.clone()));
    Ok(user)
}

/// 注销并清除状态
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext, services: &AppServices) -> AppResult<()> {
    // 存储失败也要清空内存状态
    let result = services.auth().logout();
    ctx.user.set(None);
    result.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_signal_follows_user() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AuthContext::new();
            let is_authenticated = ctx.is_authenticated_signal();
            assert!(!is_authenticated.get_untracked());

            ctx.user.set(Some(SessionUser {
                id: "admin_user".into(),
                name: "admin".into(),
                email: "admin@gmail.com".into(),
            }));
            assert!(is_authenticated.get_untracked());

            ctx.user.set(None);
            assert!(!is_authenticated.get_untracked());
        });
    }
}
