use crate::app::AppRoute;
use crate::components::{Icon, IconKind, Spinner, SpinnerSize};
use crate::config::use_site_config;
use crate::storage::BrowserStorage;
use folio_core::{Clock, SessionStatus, SiteConfig, SystemClock, session};
use gloo::timers::callback::Interval;
use tracing::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

/// Human readable remaining session time, e.g. `1h 05m` or `4m 09s`
fn format_remaining(remaining_ms: i64) -> String {
    let secs = remaining_ms.max(0) / 1000;
    let (hours, mins, secs) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{hours}h {mins:02}m")
    } else {
        format!("{mins}m {secs:02}s")
    }
}

fn end_session(site_config: &SiteConfig, navigator: Option<&Navigator>) {
    if let Err(err) = session::clear(&BrowserStorage, &site_config.storage) {
        warn!(error = %err, "Failed to clear admin session");
    }
    if let Some(navigator) = navigator {
        navigator.push(&AppRoute::from_path(site_config.login_path()));
    }
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let site_config = use_site_config();
    let navigator = use_navigator();
    let now = use_state(|| SystemClock.now_millis());

    // Re-check the stored expiry periodically
    {
        let now = now.clone();
        use_effect_with(
            site_config.session.revalidate_interval_ms,
            move |interval_ms| {
                let interval =
                    Interval::new(*interval_ms, move || now.set(SystemClock.now_millis()));
                move || drop(interval)
            },
        );
    }

    let status = session::read(&BrowserStorage, &site_config.storage).status(*now);

    {
        let site_config = site_config.clone();
        let navigator = navigator.clone();
        use_effect_with(status, move |status| {
            if !matches!(status, SessionStatus::Active { .. }) {
                info!(?status, "Admin session ended while on dashboard");
                end_session(&site_config, navigator.as_ref());
            }
        });
    }

    let on_logout = {
        let site_config = site_config.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            info!("Admin logout");
            end_session(&site_config, navigator.as_ref());
        })
    };

    let SessionStatus::Active { remaining_ms } = status else {
        return html! {
            <div class="flex justify-center py-20">
                <Spinner size={SpinnerSize::Large} label="Session ended, redirecting to login" />
            </div>
        };
    };

    html! {
        <section class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl font-bold">{"Dashboard"}</h1>
                <button
                    onclick={on_logout}
                    class="px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 hover:bg-gray-200 rounded-lg transition-colors flex items-center gap-2"
                >
                    <Icon kind={IconKind::Logout} />
                    {"Logout"}
                </button>
            </div>
            <div class="bg-white rounded-lg shadow p-6 flex items-center gap-3 text-gray-600">
                <Icon kind={IconKind::Clock} class={classes!("w-5", "h-5")} />
                <span>{format!("Session expires in {}", format_remaining(remaining_ms))}</span>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(0), "0m 00s");
        assert_eq!(format_remaining(-5_000), "0m 00s");
        assert_eq!(format_remaining(9_999), "0m 09s");
        assert_eq!(format_remaining(249_000), "4m 09s");
        assert_eq!(format_remaining(3_600_000), "1h 00m");
        assert_eq!(format_remaining(3_900_000), "1h 05m");
    }
}
