use crate::context::use_app;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Login,
    Register,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();

    let (tab, set_tab) = signal(Tab::Login);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    // 成功后不需要手动导航：会话变化会让路由服务自动重定向
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);

        let auth = ctx.services().auth;
        let (email, password, confirm) = (
            email.get_untracked(),
            password.get_untracked(),
            confirm.get_untracked(),
        );
        let mode = tab.get_untracked();
        spawn_local(async move {
            let result = match mode {
                Tab::Login => auth.login(&email, &password).await,
                Tab::Register => auth.register(&email, &password, &confirm).await,
            };
            if let Err(e) = result {
                web_sys::console::warn_1(&format!("[Auth] {}", e).into());
            }
            set_is_submitting.set(false);
        });
    };

    let tab_class = move |t: Tab| {
        if tab.get() == t {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Rubro"</h1>
                    <p class="text-base-content/70">"Tu asistente tributario"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div role="tablist" class="tabs tabs-bordered px-8 pt-6">
                        <a role="tab" class=move || tab_class(Tab::Login) on:click=move |_| set_tab.set(Tab::Login)>
                            "Iniciar Sesión"
                        </a>
                        <a role="tab" class=move || tab_class(Tab::Register) on:click=move |_| set_tab.set(Tab::Register)>
                            "Registrarse"
                        </a>
                    </div>

                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <Show when=move || tab.get() == Tab::Register>
                            <div class="form-control">
                                <label class="label" for="confirm">
                                    <span class="label-text">"Confirmar Contraseña"</span>
                                </label>
                                <input
                                    id="confirm"
                                    type="password"
                                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                    prop:value=confirm
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                        </Show>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || match (is_submitting.get(), tab.get()) {
                                    (true, _) => view! { <span class="loading loading-spinner"></span> }.into_any(),
                                    (false, Tab::Login) => "Iniciar Sesión".into_any(),
                                    (false, Tab::Register) => "Registrarse".into_any(),
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
