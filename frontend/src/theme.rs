//! 明暗主题
//!
//! 主题写在 `<html data-theme>` 上，daisyUI 据此切换配色；选择会持久化。

use crate::services::AppServices;
use factfusion_shared::Theme;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

fn apply(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
            tracing::warn!(error = ?e, "failed to apply theme");
        }
    }
}

pub fn provide_theme(services: &AppServices) -> ThemeContext {
    let themes = services.themes();
    let ctx = ThemeContext {
        theme: RwSignal::new(themes.get()),
    };

    Effect::new(move |_| {
        let theme = ctx.theme.get();
        apply(theme);
        if let Err(e) = themes.set(theme) {
            tracing::warn!(error = %e, "failed to persist theme");
        }
    });

    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
