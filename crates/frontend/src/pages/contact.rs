use crate::components::{Icon, IconKind};
use yew::prelude::*;

const EMAIL: &str = "hello@example.com";

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section class="space-y-4 max-w-2xl">
            <h1 class="text-3xl font-bold">{"Contact"}</h1>
            <a href={format!("mailto:{EMAIL}")} class="inline-flex items-center gap-2 text-blue-600 hover:underline">
                <Icon kind={IconKind::Mail} class={classes!("w-5", "h-5")} />
                {EMAIL}
            </a>
        </section>
    }
}
