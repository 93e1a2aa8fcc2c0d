//! 应用上下文
//!
//! 组装核心服务（单线程、基于 `Rc`），放进 `StoredValue::new_local`，
//! 并把每个 Observable 订阅到一个 Leptos 信号上。组件只读信号、调用服务，
//! 不直接持有任何状态。

use crate::api::GraphQlClient;
use crate::web::router::{BrowserHistory, current_path, init_popstate_listener};
use crate::web::{BrowserRuntime, BrowserSessionStorage, BuildEnv};
use leptos::prelude::*;
use rubro::{
    ActivityWizard, AuthService, ClientConfig, Notice, NotificationCenter, ProfileStatus,
    RouterService, RouterState, SessionStore, UserProfileCache, WizardState,
};
use std::rc::Rc;

/// 核心服务句柄（全部可廉价克隆）
#[derive(Clone)]
pub struct Services {
    pub config: ClientConfig,
    pub session: SessionStore,
    pub notices: NotificationCenter,
    pub auth: AuthService,
    pub profile: UserProfileCache,
    pub router: RouterService,
    pub wizard: ActivityWizard,
}

#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Services, LocalStorage>,
    pub logged_in: RwSignal<bool>,
    pub profile: RwSignal<ProfileStatus>,
    pub route: RwSignal<RouterState>,
    pub wizard: RwSignal<WizardState>,
    pub notices: RwSignal<Vec<Notice>>,
}

impl AppContext {
    pub fn init() -> Self {
        let config = ClientConfig::from_env(&BuildEnv);
        web_sys::console::log_1(&format!("[Config] API endpoint: {}", config.api_url).into());

        let session = SessionStore::open(Rc::new(BrowserSessionStorage::new(
            config.session_key.clone(),
        )));
        let notices = NotificationCenter::new();
        let client = Rc::new(GraphQlClient::new(config.api_url.clone(), session.clone()));
        let auth = AuthService::new(client.clone(), session.clone(), notices.clone());
        client.on_unauthorized({
            let auth = auth.clone();
            move || auth.expire_session()
        });

        // 先创建 profile cache，它必须比 router 先订阅 session
        let profile = UserProfileCache::new(
            session.clone(),
            client.clone(),
            Rc::new(BrowserRuntime),
            config.profile_retry_delay,
        );
        let router = RouterService::new(
            &current_path(),
            session.clone(),
            profile.clone(),
            Rc::new(BrowserHistory),
        );
        init_popstate_listener(router.clone());
        let wizard = ActivityWizard::new(client, notices.clone());

        // Observable -> Signal 桥接，订阅与应用同生命周期
        let logged_in = RwSignal::new(session.is_logged_in());
        session
            .subscribe(move |s| logged_in.set(s.is_logged_in()))
            .detach();

        let profile_sig = RwSignal::new(profile.status());
        profile.subscribe(move |s| profile_sig.set(s.clone())).detach();

        let route = RwSignal::new(router.state());
        router.subscribe(move |s| route.set(s.clone())).detach();

        let wizard_sig = RwSignal::new(wizard.state());
        wizard.subscribe(move |s| wizard_sig.set(s.clone())).detach();

        let notices_sig = RwSignal::new(notices.notices());
        notices
            .subscribe(move |list| notices_sig.set(list.clone()))
            .detach();

        Self {
            services: StoredValue::new_local(Services {
                config,
                session,
                notices,
                auth,
                profile,
                router,
                wizard,
            }),
            logged_in,
            profile: profile_sig,
            route,
            wizard: wizard_sig,
            notices: notices_sig,
        }
    }

    pub fn services(&self) -> Services {
        self.services.get_value()
    }
}

/// 从 Context 获取应用上下文
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
        .expect("AppContext not found in context. Ensure App provides it.")
}
