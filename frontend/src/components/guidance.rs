use crate::context::use_app;
use leptos::prelude::*;
use rubro::wizard::{GuidanceStep, Segment};

fn render_step(step: &GuidanceStep) -> AnyView {
    step.segments()
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.into_any(),
            Segment::Emphasis(text) => view! { <strong>{text}</strong> }.into_any(),
        })
        .collect_view()
        .into_any()
}

#[component]
pub fn ActivityGuidance() -> impl IntoView {
    let ctx = use_app();
    let steps = ctx.services().wizard.guidance();

    view! {
        <div class="w-full p-4">
            <h2 class="text-3xl font-semibold text-center mb-4">"Guía de Actividades"</h2>
            <ul class="space-y-4">
                {steps
                    .iter()
                    .map(|step| {
                        view! {
                            <li class="flex gap-3 items-start rounded-xl bg-white/10 p-4 text-lg">
                                <span class="mt-2 h-3 w-3 shrink-0 rounded-full bg-white"></span>
                                <p>{render_step(step)}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="flex justify-center mt-6">
                <button class="btn btn-outline text-white" on:click=move |_| ctx.services().wizard.reset()>
                    "Consultar otra actividad"
                </button>
            </div>
        </div>
    }
}
