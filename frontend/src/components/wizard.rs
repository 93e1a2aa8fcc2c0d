use crate::components::guidance::ActivityGuidance;
use crate::context::use_app;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rubro::WizardState;

/// 活动分类向导：输入 -> 分类中 -> 确认 -> 指南
#[component]
pub fn ActivityWizardPanel() -> impl IntoView {
    let ctx = use_app();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let wizard = ctx.services().wizard;
        spawn_local(async move {
            wizard.submit().await;
        });
    };

    view! {
        <section class="card w-full bg-gradient-to-br from-blue-500 to-blue-300 text-white shadow-xl">
            <div class="card-body items-center">
                {move || match ctx.wizard.get() {
                    WizardState::AwaitingInput { draft } => view! {
                        <div class="text-center mb-8">
                            <h2 class="text-3xl font-bold mb-2">"¿Quieres iniciar actividades en el SII?"</h2>
                            <p class="text-xl">
                                "Cuentanos un poco sobre que actividades realizas y te guiamos con el proceso."
                            </p>
                        </div>
                        <form class="w-full max-w-2xl join" on:submit=on_submit>
                            <input
                                type="text"
                                class="input input-bordered join-item w-full text-base-content"
                                placeholder="Ejemplo: Corto el pelo en la peluqueria de mi barrio"
                                prop:value=draft
                                on:input=move |ev| {
                                    ctx.services().wizard.update_draft(&event_target_value(&ev));
                                }
                            />
                            <button type="submit" class="btn join-item">"Enviar"</button>
                        </form>
                    }
                    .into_any(),
                    WizardState::Classifying { .. } => view! {
                        <h2 class="text-2xl font-semibold py-2">
                            "Estamos revisando la tributación de tu rubro..."
                        </h2>
                        <span class="loading loading-bars loading-lg"></span>
                    }
                    .into_any(),
                    WizardState::AwaitingConfirmation { classification } => view! {
                        <h2 class="text-2xl font-semibold py-2">"¿Es esta tu actividad económica?"</h2>
                        <p class="text-xl py-2">{classification.resolved_activity}</p>
                        <div class="card-actions justify-center mt-3 gap-2">
                            <button
                                class="btn btn-success"
                                on:click=move |_| {
                                    ctx.services().wizard.confirm();
                                }
                            >
                                "Confirmar"
                            </button>
                            <button
                                class="btn btn-error"
                                on:click=move |_| {
                                    ctx.services().wizard.reject();
                                }
                            >
                                "Volver a buscar"
                            </button>
                        </div>
                    }
                    .into_any(),
                    WizardState::ShowingGuidance { .. } => view! {
                        <ActivityGuidance />
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}
