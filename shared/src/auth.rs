//! 模拟认证
//!
//! 没有服务器，也没有密码存储：规则全部在本地判定，
//! 成功后只把"当前用户"写入会话仓库。

use crate::date::Clock;
use crate::error::{AuthError, StoreError};
use crate::models::{ADMIN_EMAIL, ADMIN_PASSWORD, SessionUser, make_id};
use crate::repository::SessionRepository;
use crate::store::{StorageKeys, Store};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error)]
pub enum AuthFailure {
    #[error(transparent)]
    Rejected(#[from] AuthError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<AuthFailure> for crate::error::AppError {
    fn from(e: AuthFailure) -> Self {
        match e {
            AuthFailure::Rejected(e) => e.into(),
            AuthFailure::Store(e) => e.into(),
        }
    }
}

/// 邮箱与密码的形状检查
fn credentials_look_valid(email: &str, password: &str) -> bool {
    email.contains('@') && password.chars().count() >= MIN_PASSWORD_LEN
}

/// 邮箱 `@` 之前的部分
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// 登录规则（不涉及存储）
pub fn check_login(email: &str, password: &str, clock: &impl Clock) -> Result<SessionUser, AuthError> {
    if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
        return Ok(SessionUser::admin());
    }
    if !credentials_look_valid(email, password) {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(SessionUser {
        id: make_id("user", clock.now()),
        name: local_part(email).to_string(),
        email: email.to_string(),
    })
}

/// 注册规则（不涉及存储）
pub fn check_register(
    name: &str,
    email: &str,
    password: &str,
    clock: &impl Clock,
) -> Result<SessionUser, AuthError> {
    if email == ADMIN_EMAIL {
        return Err(AuthError::EmailInUse);
    }
    if name.trim().is_empty() || !credentials_look_valid(email, password) {
        return Err(AuthError::InvalidDetails);
    }
    Ok(SessionUser {
        id: make_id("user", clock.now()),
        name: name.to_string(),
        email: email.to_string(),
    })
}

/// 认证服务
///
/// 持有会话仓库与时钟，封装登录、注册、注销与启动时恢复。
pub struct AuthService<S, C> {
    sessions: SessionRepository<S>,
    clock: C,
}

impl<S: Store, C: Clock> AuthService<S, C> {
    pub fn new(store: S, keys: &StorageKeys, clock: C) -> Self {
        Self {
            sessions: SessionRepository::new(store, keys),
            clock,
        }
    }

    /// 读取上次保存的用户
    pub fn restore(&self) -> Result<Option<SessionUser>, StoreError> {
        self.sessions.get()
    }

    pub fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthFailure> {
        let user = check_login(email, password, &self.clock)?;
        self.sessions.set(&user)?;
        tracing::info!(user_id = %user.id, "login succeeded");
        Ok(user)
    }

    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<SessionUser, AuthFailure> {
        let user = check_register(name, email, password, &self.clock)?;
        self.sessions.set(&user)?;
        tracing::info!(user_id = %user.id, "registration succeeded");
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), StoreError> {
        self.sessions.clear()?;
        tracing::info!("logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::FixedClock;
    use crate::store::MemoryStore;

    fn service(store: &MemoryStore) -> AuthService<MemoryStore, FixedClock> {
        AuthService::new(store.clone(), &StorageKeys::default(), FixedClock::new(1_700_000_000_000))
    }

    #[test]
    fn admin_login_stores_fixed_user() {
        let store = MemoryStore::new();
        let auth = service(&store);

        let user = auth.login("admin@gmail.com", "admin").unwrap();
        assert_eq!(user, SessionUser::admin());
        assert_eq!(
            store.raw("factfusion_user").as_deref(),
            Some(r#"{"id":"admin_user","name":"admin","email":"admin@gmail.com"}"#)
        );
    }

    #[test]
    fn regular_login_derives_name_from_email() {
        let store = MemoryStore::new();
        let auth = service(&store);

        let user = auth.login("jane.doe@example.com", "secret1").unwrap();
        assert_eq!(user.id, "user_1700000000000");
        assert_eq!(user.name, "jane.doe");
        assert_eq!(auth.restore().unwrap(), Some(user));
    }

    #[test]
    fn login_rejects_bad_shapes_without_writing() {
        let store = MemoryStore::new();
        let auth = service(&store);

        for (email, password) in [("no-at-sign", "longenough"), ("a@b.c", "short"), ("admin@gmail.com", "wrong")] {
            let err = auth.login(email, password).unwrap_err();
            assert!(matches!(err, AuthFailure::Rejected(AuthError::InvalidCredentials)));
        }
        assert!(store.keys().is_empty());
    }

    #[test]
    fn register_rules() {
        let store = MemoryStore::new();
        let auth = service(&store);

        let err = auth.register("Admin", "admin@gmail.com", "whatever1").unwrap_err();
        assert!(matches!(err, AuthFailure::Rejected(AuthError::EmailInUse)));

        let err = auth.register("  ", "a@b.c", "secret1").unwrap_err();
        assert!(matches!(err, AuthFailure::Rejected(AuthError::InvalidDetails)));

        let err = auth.register("Ann", "a@b.c", "123").unwrap_err();
        assert!(matches!(err, AuthFailure::Rejected(AuthError::InvalidDetails)));

        let user = auth.register("Ann", "ann@b.c", "secret1").unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(user.id, "user_1700000000000");
    }

    #[test]
    fn logout_clears_session() {
        let store = MemoryStore::new();
        let auth = service(&store);
        auth.login("admin@gmail.com", "admin").unwrap();

        auth.logout().unwrap();
        assert_eq!(auth.restore().unwrap(), None);
    }

    #[test]
    fn login_overwrites_previous_user() {
        let store = MemoryStore::new();
        let auth = service(&store);
        auth.login("first@example.com", "secret1").unwrap();
        auth.login("admin@gmail.com", "admin").unwrap();

        assert_eq!(auth.restore().unwrap().unwrap().id, "admin_user");
    }
}
