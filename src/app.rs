//! Root application component with routing, services and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::layout::AdminLayout;
use crate::config::AppConfig;
use crate::net::api::UserApi;
use crate::net::client::RequestClient;
use crate::net::transport::FetchTransport;
use crate::pages::{login::LoginPage, register::RegisterPage, welcome::WelcomePage};
use crate::state::bootstrap::Bootstrap;
use crate::state::settings::LayoutSettings;
use crate::state::store::{AppState, AppStore};
use crate::util::auth::install_route_guard;
use crate::util::navigation::{Navigator, RouterNavigator};
use crate::util::notify::{Notice, Notifier, ToastNotifier};

pub type Api = UserApi<FetchTransport>;

/// Long-lived collaborators shared by pages and components.
#[derive(Clone)]
pub struct Services {
    pub config: AppConfig,
    pub api: Api,
    pub bootstrap: Rc<Bootstrap<Api>>,
    pub store: Rc<AppStore>,
    pub navigator: Rc<dyn Navigator>,
}

/// Context handle for [`Services`]. The services hold `Rc`s, so they live in
/// local arena storage.
pub type ServicesHandle = StoredValue<Services, LocalStorage>;

/// Fetch the shared services handle from context.
///
/// The handle is `Copy`, so event handlers capture it and call
/// `get_value()` when they fire.
pub fn use_services() -> ServicesHandle {
    expect_context::<ServicesHandle>()
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build().unwrap_or_else(|e| {
        log::error!("invalid build configuration, using defaults: {e}");
        AppConfig::default()
    });

    view! {
        <Router>
            <Shell config/>
        </Router>
    }
}

/// Everything that needs the router: services, bootstrap, guard and routes.
#[component]
fn Shell(config: AppConfig) -> impl IntoView {
    let location = use_location();
    let navigator: Rc<dyn Navigator> = Rc::new(RouterNavigator::from_router());

    let notice = RwSignal::new(None::<Notice>);
    let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier::new(notice));

    let client = RequestClient::new(config.request.clone(), FetchTransport, Rc::clone(&navigator), notifier);
    let api = UserApi::new(Rc::new(client));

    let store = Rc::new(AppStore::new(AppState::new(LayoutSettings::default())));
    let app_state = store.mirror();

    let bootstrap = Rc::new(Bootstrap::new(api.clone(), Rc::clone(&navigator), Rc::clone(&store)));

    provide_context(app_state);
    provide_context(notice);
    provide_context::<ServicesHandle>(StoredValue::new_local(Services {
        config,
        api,
        bootstrap: Rc::clone(&bootstrap),
        store,
        navigator: Rc::clone(&navigator),
    }));

    install_route_guard(app_state, location.pathname, navigator);

    leptos::task::spawn_local(async move {
        bootstrap.run().await;
    });

    let title = move || app_state.with(|s| s.settings.title.clone());

    view! {
        <Title text=title/>
        <AdminLayout>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("user"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("user"), StaticSegment("register")) view=RegisterPage/>
                <Route path=StaticSegment("welcome") view=WelcomePage/>
                <Route path=StaticSegment("") view=WelcomePage/>
            </Routes>
        </AdminLayout>
    }
}
