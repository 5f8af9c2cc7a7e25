//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 内容分析 (需要认证)
    Analysis,
    /// 控制面板 (需要认证)
    Dashboard,
    /// 关于我们与招聘
    About,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 导航栏中的顺序
    pub const NAV: [AppRoute; 4] = [Self::Home, Self::Analysis, Self::Dashboard, Self::About];

    /// 将 URL path 解析为路由枚举
    ///
    /// 末尾的 `/` 被忽略
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/index.html" => Self::Home,
            "/analysis" => Self::Analysis,
            "/dashboard" => Self::Dashboard,
            "/about" => Self::About,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Analysis => "/analysis",
            Self::Dashboard => "/dashboard",
            Self::About => "/about",
            Self::NotFound => "/404",
        }
    }

    /// 导航栏文字
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Analysis => "Analysis",
            Self::Dashboard => "Dashboard",
            Self::About => "About Us",
            Self::NotFound => "Not Found",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Analysis | Self::Dashboard)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Home
    }

    /// 守卫：返回实际应该进入的路由
    pub fn guard(self, is_authenticated: bool) -> Self {
        if self.requires_auth() && !is_authenticated {
            Self::auth_failure_redirect()
        } else {
            self
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_for_known_routes() {
        for route in AppRoute::NAV {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::from_path("/dashboard/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn protected_routes_redirect_home_when_anonymous() {
        assert_eq!(AppRoute::Dashboard.guard(false), AppRoute::Home);
        assert_eq!(AppRoute::Analysis.guard(false), AppRoute::Home);
        assert_eq!(AppRoute::Analysis.guard(true), AppRoute::Analysis);
        assert_eq!(AppRoute::About.guard(false), AppRoute::About);
        assert_eq!(AppRoute::NotFound.guard(false), AppRoute::NotFound);
    }
}
