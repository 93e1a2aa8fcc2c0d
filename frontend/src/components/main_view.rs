use crate::components::wizard::ActivityWizardPanel;
use crate::context::use_app;
use leptos::prelude::*;
use rubro::ProfileStatus;

#[component]
pub fn MainView() -> impl IntoView {
    let ctx = use_app();

    let greeting = move || match ctx.profile.get() {
        ProfileStatus::Loaded(profile) => view! {
            <h2 class="text-xl text-base-content/70">{profile.full_name}</h2>
        }
        .into_any(),
        ProfileStatus::Unavailable => view! {
            <button class="btn btn-ghost btn-sm" on:click=move |_| {
                ctx.services().profile.refresh();
            }>
                "Reintentar"
            </button>
        }
        .into_any(),
        _ => view! { <div class="skeleton h-8 w-48"></div> }.into_any(),
    };

    // 注销后路由服务会自动重定向到登录页
    let on_logout = move |_| ctx.services().auth.logout();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <a class="btn btn-ghost text-xl">"Rubro"</a>
                        {greeting}
                    </div>
                    <div class="flex-none">
                        <button on:click=on_logout class="btn btn-outline btn-error">
                            "Cerrar sesión"
                        </button>
                    </div>
                </div>

                <ActivityWizardPanel />
            </div>
        </div>
    }
}
