use crate::app::AppRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <section class="space-y-6">
            <h1 class="text-4xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                {"Hi, welcome to my portfolio"}
            </h1>
            <p class="text-gray-600 max-w-2xl">
                {"Software developer. Have a look at what I build, or get in touch."}
            </p>
            <div class="flex gap-3">
                <Link<AppRoute> to={AppRoute::Projects} classes="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700">
                    {"See projects"}
                </Link<AppRoute>>
                <Link<AppRoute> to={AppRoute::Contact} classes="px-4 py-2 rounded-lg bg-gray-100 text-gray-700 text-sm font-medium hover:bg-gray-200">
                    {"Contact"}
                </Link<AppRoute>>
            </div>
        </section>
    }
}
