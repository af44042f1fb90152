use yew::prelude::*;

#[function_component(AboutMe)]
pub fn about_me() -> Html {
    html! {
        <section class="space-y-4 max-w-2xl">
            <h1 class="text-3xl font-bold">{"About me"}</h1>
            <p class="text-gray-600">
                {"I work across the stack, from browser front ends to the services behind them."}
            </p>
        </section>
    }
}
