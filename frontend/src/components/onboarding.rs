use crate::web::router::use_navigate;
use leptos::prelude::*;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-4xl font-bold">"Bienvenido a Rubro"</h1>
                    <p class="py-6">
                        "Te ayudamos a iniciar actividades en el SII y a llevar el control de tus ingresos."
                    </p>
                    <button class="btn btn-primary" on:click=move |_| navigate("/login")>
                        "Comenzar"
                    </button>
                </div>
            </div>
        </div>
    }
}
