use crate::context::use_app;
use crate::web::router::use_navigate;
use leptos::prelude::*;
use rubro::ProfileStatus;

/// Landing page for users who still have to link their bank.
///
/// The bank linking itself happens outside this app; once it is done the
/// profile is refetched so the onboarding flag is current again.
#[component]
pub fn RegisterCredentialsPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();

    let linked = move || {
        matches!(ctx.profile.get(), ProfileStatus::Loaded(p) if p.has_bank_credentials)
    };

    // 刷新后的 profile 显示已绑定时，进入主界面
    Effect::new(move |_| {
        if linked() {
            navigate("/main");
        }
    });

    let on_done = move |_| ctx.services().profile.invalidate();
    let on_logout = move |_| ctx.services().auth.logout();

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-3xl font-bold">"Registra tus credenciales bancarias"</h1>
                    <p>
                        "Para revisar tus ingresos necesitamos acceso de solo lectura a tu cuenta bancaria."
                    </p>
                    <div class="flex justify-center gap-2">
                        <button
                            class="btn btn-primary"
                            disabled=move || ctx.profile.get().is_loading()
                            on:click=on_done
                        >
                            "Ya registré mis credenciales"
                        </button>
                        <button class="btn btn-ghost" on:click=on_logout>
                            "Cerrar sesión"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
