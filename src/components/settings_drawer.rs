//! Developer settings drawer for live layout tweaks.

use leptos::prelude::*;

use crate::app::use_services;
use crate::state::settings::{LayoutMode, NavTheme, SettingsPatch};
use crate::state::store::AppState;

#[component]
pub fn SettingsDrawer() -> impl IntoView {
    let app_state = expect_context::<RwSignal<AppState>>();
    let services = use_services();
    let open = RwSignal::new(false);

    let apply = move |patch: SettingsPatch| services.with_value(|s| s.store.update_settings(patch));

    let dark = move || app_state.with(|s| s.settings.nav_theme == NavTheme::RealDark);
    let color_weak = move || app_state.with(|s| s.settings.color_weak);
    let fixed_header = move || app_state.with(|s| s.settings.fixed_header);
    let current_mode = move || app_state.with(|s| s.settings.layout);

    view! {
        <aside class=move || if open.get() { "settings-drawer settings-drawer--open" } else { "settings-drawer" }>
            <button class="settings-drawer__toggle" on:click=move |_| open.update(|o| *o = !*o)>
                "Settings"
            </button>
            <Show when=move || open.get()>
                <div class="settings-drawer__body">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=dark
                            on:change=move |ev| {
                                let theme = if event_target_checked(&ev) { NavTheme::RealDark } else { NavTheme::Light };
                                apply(SettingsPatch { nav_theme: Some(theme), ..SettingsPatch::default() });
                            }
                        />
                        "Dark navigation"
                    </label>
                    <label>
                        "Layout"
                        <select on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if let Some(mode) = LayoutMode::ALL.into_iter().find(|m| m.as_str() == value) {
                                apply(SettingsPatch { layout: Some(mode), ..SettingsPatch::default() });
                            }
                        }>
                            {LayoutMode::ALL
                                .into_iter()
                                .map(|mode| {
                                    view! {
                                        <option value=mode.as_str() selected=move || current_mode() == mode>
                                            {mode.as_str()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=fixed_header
                            on:change=move |ev| {
                                apply(SettingsPatch { fixed_header: Some(event_target_checked(&ev)), ..SettingsPatch::default() });
                            }
                        />
                        "Fixed header"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=color_weak
                            on:change=move |ev| {
                                apply(SettingsPatch { color_weak: Some(event_target_checked(&ev)), ..SettingsPatch::default() });
                            }
                        />
                        "Weak color"
                    </label>
                </div>
            </Show>
        </aside>
    }
}
