use crate::app::AppRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="text-center space-y-4 py-20">
            <h1 class="text-5xl font-bold text-gray-300">{"404"}</h1>
            <p class="text-gray-600">{"This page does not exist."}</p>
            <Link<AppRoute> to={AppRoute::Home} classes="text-blue-600 hover:underline">
                {"Back to home"}
            </Link<AppRoute>>
        </section>
    }
}
