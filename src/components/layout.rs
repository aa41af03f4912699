//! Admin shell: header, watermark, background art and footer around pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `AppState` from context and renders from the derived `LayoutConfig`.
//! While the session bootstrap is loading, page content is held back so the
//! route guard and pages only ever see a settled session.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::use_services;
use crate::components::notice::NoticeToast;
use crate::components::settings_drawer::SettingsDrawer;
use crate::config::LOGIN_PATH;
use crate::net::client::RequestOptions;
use crate::state::layout::LayoutConfig;
use crate::state::store::AppState;
use crate::util::auth::is_public_route;
use crate::util::navigation::redirect_search;

pub const FOOTER_TEXT: &str = "User Center";

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let app_state = expect_context::<RwSignal<AppState>>();
    let services = use_services();
    let location = use_location();
    let env = services.with_value(|s| s.config.env);

    let layout = Memo::new(move |_| LayoutConfig::from_state(&app_state.get(), env));
    let loading = move || app_state.with(AppState::loading);
    let public = move || is_public_route(&location.pathname.get());
    let theme = move || layout.with(|l| l.settings.nav_theme.as_attr());
    let shell_class = move || {
        let mut class = format!("admin-shell admin-shell--{}", layout.with(|l| l.settings.layout.as_str()));
        if layout.with(|l| l.settings.color_weak) {
            class.push_str(" admin-shell--weak");
        }
        if layout.with(|l| l.settings.fixed_header) {
            class.push_str(" admin-shell--fixed-header");
        }
        class
    };

    let on_logout = move |_| {
        let services = services.get_value();
        leptos::task::spawn_local(async move {
            if let Err(e) = services.api.logout(RequestOptions::silent()).await {
                log::warn!("logout request failed: {e}");
            }
            let from = services.navigator.pathname();
            services.bootstrap.clear_session();
            services.navigator.replace(LOGIN_PATH, &redirect_search(&from));
        });
    };

    view! {
        <div class=shell_class data-theme=theme>
            <NoticeToast/>
            <Show when=move || !public()>
                <header class="admin-header">
                    <img class="admin-header__logo" src=move || layout.with(|l| l.settings.logo.clone())/>
                    <span class="admin-header__title">{move || layout.with(|l| l.settings.title.clone())}</span>
                    <nav class="admin-header__links">
                        {move || {
                            layout
                                .with(|l| l.links.clone())
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a href=link.href target="_blank" rel="noopener noreferrer">
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()
                        }}
                    </nav>
                    <Show when=move || layout.with(|l| l.avatar_title.is_some())>
                        <span class="admin-header__user">
                            <Show when=move || layout.with(|l| l.avatar_src.is_some())>
                                <img
                                    class="admin-header__avatar"
                                    src=move || layout.with(|l| l.avatar_src.clone().unwrap_or_default())
                                />
                            </Show>
                            <span>{move || layout.with(|l| l.avatar_title.clone().unwrap_or_default())}</span>
                            <button class="admin-header__logout" on:click=on_logout>
                                "Log out"
                            </button>
                        </span>
                    </Show>
                </header>
            </Show>
            <div class="admin-backgrounds">
                {move || {
                    layout
                        .with(|l| l.background_images)
                        .iter()
                        .map(|image| view! { <img src=image.src style=image.style()/> })
                        .collect_view()
                }}
            </div>
            <Show when=loading>
                <div class="admin-loading">"Loading..."</div>
            </Show>
            <main class=move || if loading() { "admin-content admin-content--hidden" } else { "admin-content" }>
                {children()}
            </main>
            <Show when=move || layout.with(|l| l.watermark.is_some())>
                <div class="admin-watermark">{move || layout.with(|l| l.watermark.clone().unwrap_or_default())}</div>
            </Show>
            <Show when=move || layout.with(|l| l.show_settings_drawer)>
                <SettingsDrawer/>
            </Show>
            <footer class="admin-footer">{FOOTER_TEXT}</footer>
        </div>
    }
}
