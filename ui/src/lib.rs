// The client-side Dioxus application logic.

use api::config::ApiConfig;
use api::prefs::user_prefs::UserPrefs;
use api::store::RemoteStore;
use api::MockApi;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use components::theme_toggle::ThemeToggle;
use components::toaster::Toaster;
use components::toaster::Toasts;
use hooks::use_stores::use_initial_fetch;
use screens::loans::LoansScreen;
use screens::transactions::TransactionsScreen;
use screens::users::UsersScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// The three screens, all sharing one layout.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DashboardLayout)]
        #[route("/", UsersScreen)]
        Users {},
        #[route("/transactions", TransactionsScreen)]
        Transactions {},
        #[route("/loans", LoansScreen)]
        Loans {},
}

impl Route {
    /// Heading shown above the screen.
    fn title(&self) -> &'static str {
        match self {
            Route::Users {} => "Users",
            Route::Transactions {} => "Transaction Management",
            Route::Loans {} => "Loan Management",
        }
    }
}

const NAV: [(Route, &str); 3] = [
    (Route::Users {}, "Users"),
    (Route::Transactions {}, "Transactions"),
    (Route::Loans {}, "Loan Management"),
];

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let dashboard_css = r#"
    .dashboard-nav a.active {
        color: var(--pico-primary);
        font-weight: bold;
        border-bottom: 3px solid var(--pico-primary);
    }
    .dashboard-nav a:not(.active) {
        color: var(--pico-muted-color);
    }
    nav[aria-label="Pagination"] {
        justify-content: center;
        margin-top: 1rem;
    }
    nav[aria-label="Pagination"] button {
        padding: 0.25rem 0.75rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet { href: PICO_CSS }
        style { "{dashboard_css}" }
        AppBody {}
    }
}

/// Builds the long-lived state. Only fails if the HTTP client can't be
/// constructed.
#[component]
fn AppBody() -> Element {
    let setup = use_hook(|| {
        let config = ApiConfig::from_env();
        info!("using mock API at {}", config.base_url);
        let slot = compat::local_slot(&config);
        MockApi::new(config)
            .map(|api| AppState::new(api, slot))
            .map_err(|e| e.to_string())
    });

    match setup {
        Ok(app_state) => rsx! {
            LoadedApp { app_state }
        },
        Err(e) => rsx! {
            p { "An error occurred: {e}" }
        },
    }
}

/// This component holds the main app logic and only runs when setup succeeded.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let prefs = use_signal(|| UserPrefs::load(app_state.slot.as_ref()));
    let users = use_signal(RemoteStore::new);
    let loans = use_signal(RemoteStore::new);
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| AppStateMut {
        users,
        loans,
        prefs,
        toasts,
    });

    use_initial_fetch();

    // Pico reads the theme from the root element.
    use_effect(move || {
        let theme = prefs.read().theme();
        document::eval(&format!(
            "document.documentElement.setAttribute('data-theme', '{}');",
            theme.as_str()
        ));
    });

    rsx! {
        Toaster {}
        Router::<Route> {}
    }
}

#[component]
fn DashboardLayout() -> Element {
    let route = use_route::<Route>();

    rsx! {
        Container {
            header {
                nav {
                    class: "dashboard-nav",
                    ul {
                        li { strong { "Fintech Dashboard" } }
                    }
                    ul {
                        for (to, label) in NAV {
                            li {
                                Link { to, active_class: "active", "{label}" }
                            }
                        }
                        li { ThemeToggle {} }
                    }
                }
            }
            h4 { "{route.title()}" }
            Outlet::<Route> {}
        }
    }
}
