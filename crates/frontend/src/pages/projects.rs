use yew::prelude::*;

struct Project {
    name: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        name: "Folio",
        summary: "This site: a Yew single-page app with a token-gated admin area.",
        tags: &["rust", "wasm", "yew"],
    },
    Project {
        name: "Side projects",
        summary: "Smaller experiments and tools.",
        tags: &["misc"],
    },
];

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section class="space-y-6">
            <h1 class="text-3xl font-bold">{"Projects"}</h1>
            <div class="grid gap-4 sm:grid-cols-2">
                { for PROJECTS.iter().map(|project| html! {
                    <article class="bg-white rounded-lg shadow p-6 space-y-2">
                        <h2 class="text-lg font-semibold">{project.name}</h2>
                        <p class="text-sm text-gray-600">{project.summary}</p>
                        <div class="flex gap-2">
                            { for project.tags.iter().map(|tag| html! {
                                <span class="text-xs px-2 py-1 rounded bg-gray-100 text-gray-600">{*tag}</span>
                            }) }
                        </div>
                    </article>
                }) }
            </div>
        </section>
    }
}
