//! Admin login
//!
//! Tokens are issued by the server; this page only stores one together with
//! its local expiry so the navigation guard lets the visitor through.

use crate::app::AppRoute;
use crate::components::{Icon, IconKind};
use crate::config::use_site_config;
use crate::storage::BrowserStorage;
use folio_core::{Clock, SystemClock, session};
use tracing::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(AdminLogin)]
pub fn admin_login() -> Html {
    let site_config = use_site_config();
    let navigator = use_navigator();
    let token = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_token_input = {
        let token = token.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            token.set(input.value());
        })
    };

    let on_submit = {
        let token = token.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let stored = session::start(
                &BrowserStorage,
                &site_config.storage,
                &token,
                SystemClock.now_millis(),
                site_config.session.ttl_millis(),
            );
            match stored {
                Ok(_) => {
                    error.set(None);
                    if let Some(navigator) = &navigator {
                        navigator.push(&AppRoute::from_path(site_config.dashboard_path()));
                    }
                }
                Err(err) => {
                    warn!(error = %err, "Admin login failed");
                    error.set(Some(err.to_string()));
                }
            }
        })
    };

    html! {
        <div class="flex items-center justify-center py-10">
            <div class="max-w-md w-full bg-white rounded-lg shadow-lg p-8 space-y-6">
                <div class="text-center">
                    <div class="inline-flex items-center justify-center w-14 h-14 bg-gradient-to-br from-blue-500 to-purple-600 rounded-full mb-4 text-white">
                        <Icon kind={IconKind::Lock} class={classes!("w-7", "h-7")} />
                    </div>
                    <h1 class="text-2xl font-bold">{"Admin"}</h1>
                    <p class="text-sm text-gray-500">{"Paste the access token issued by the server"}</p>
                </div>

                if let Some(message) = &*error {
                    <div class="bg-red-50 border border-red-200 rounded-lg p-3 text-center">
                        <p class="text-red-700 text-sm">{message}</p>
                    </div>
                }

                <form class="space-y-4" onsubmit={on_submit}>
                    <input
                        type="password"
                        autocomplete="off"
                        class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:border-blue-400"
                        placeholder="Access token"
                        value={(*token).clone()}
                        oninput={on_token_input}
                    />
                    <button
                        type="submit"
                        class="w-full px-4 py-3 bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 text-white rounded-lg font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={token.trim().is_empty()}
                    >
                        {"Sign in"}
                    </button>
                </form>
            </div>
        </div>
    }
}
