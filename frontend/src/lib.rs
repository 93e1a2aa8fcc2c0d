//! Rubro 前端应用
//!
//! 浏览器外壳：核心状态机全部在 `rubro` crate 中，这里只负责接线与渲染。
//! - `api`: GraphQL 客户端（实现核心的远程契约）
//! - `context`: 组装核心服务，并把 Observable 桥接为 Leptos 信号
//! - `web`: 浏览器 API 适配（History、LocalStorage、定时器、构建期配置）
//! - `components`: UI 组件层

mod api;
mod context;
mod components {
    pub mod guidance;
    pub mod login;
    pub mod main_view;
    pub mod notifications;
    pub mod onboarding;
    pub mod register_credentials;
    pub mod wizard;
}

pub(crate) mod web {
    mod env;
    pub mod router;
    mod runtime;
    mod storage;

    pub use env::BuildEnv;
    pub use runtime::BrowserRuntime;
    pub use storage::BrowserSessionStorage;
}

use crate::components::login::LoginPage;
use crate::components::main_view::MainView;
use crate::components::notifications::NotificationToasts;
use crate::components::onboarding::OnboardingPage;
use crate::components::register_credentials::RegisterCredentialsPage;
use crate::context::AppContext;
use crate::web::router::RouterOutlet;

use leptos::prelude::*;
use rubro::AppRoute;

/// 路由匹配函数
///
/// 守卫已经在 `RouterService` 中执行，这里只做路由到视图的映射。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Onboarding => view! { <OnboardingPage /> }.into_any(),
        AppRoute::Main => view! { <MainView /> }.into_any(),
        AppRoute::RegisterCredentials => view! { <RegisterCredentialsPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Página no encontrada"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 组装核心服务并提供上下文
    let ctx = AppContext::init();
    provide_context(ctx);

    view! {
        <NotificationToasts />
        <RouterOutlet matcher=route_matcher />
    }
}
