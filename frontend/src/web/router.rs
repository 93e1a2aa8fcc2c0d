//! 路由外壳 - History API 适配
//!
//! 所有对 window.history 的操作都集中在此模块。
//! 守卫判定由核心的 `RouterService` 完成，这里只负责：
//! 把导航意图写入 History、监听后退/前进、渲染当前路由。

use leptos::prelude::*;
use rubro::{AppRoute, NavigationSink, ProfileStatus, RouterService};
use wasm_bindgen::prelude::*;

use crate::context::use_app;

/// 获取当前浏览器路径
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 浏览器 History 作为导航出口
pub struct BrowserHistory;

impl NavigationSink for BrowserHistory {
    fn push(&self, route: &AppRoute) {
        push_history_state(route.to_path());
    }

    fn redirect(&self, route: &AppRoute) {
        web_sys::console::log_1(&format!("[Router] Redirecting to {}", route).into());
        replace_history_state(route.to_path());
    }
}

/// 初始化浏览器后退/前进按钮监听
pub fn init_popstate_listener(router: RouterService) {
    let closure = Closure::<dyn Fn()>::new(move || {
        // popstate 时也执行守卫逻辑
        router.sync_location(&current_path());
    });

    if let Some(window) = web_sys::window() {
        let _ =
            window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }

    // 泄漏闭包以保持监听器存活
    closure.forget();
}

/// 导航函数（返回一个可调用的闭包）
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let ctx = use_app();
    move |to: &str| {
        ctx.services().router.navigate(to);
    }
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件；守卫尚未决定时显示加载状态，
/// 用户资料获取失败时提供重试按钮。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let ctx = use_app();

    move || {
        let state = ctx.route.get();
        if state.pending && matches!(ctx.profile.get(), ProfileStatus::Unavailable) {
            view! {
                <div class="flex flex-col items-center justify-center gap-4 min-h-screen">
                    <p class="text-base-content/70">"No pudimos cargar tu perfil."</p>
                    <button class="btn btn-primary btn-sm" on:click=move |_| {
                        ctx.services().profile.refresh();
                    }>
                        "Reintentar"
                    </button>
                </div>
            }
            .into_any()
        } else if state.pending {
            view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any()
        } else {
            matcher(state.route)
        }
    }
}
