//! Landing page for signed-in users.

use leptos::prelude::*;

use crate::state::store::AppState;

#[component]
pub fn WelcomePage() -> impl IntoView {
    let app_state = expect_context::<RwSignal<AppState>>();
    let name = move || {
        app_state.with(|s| s.current_user.as_ref().map(|u| u.display_name().to_owned())).unwrap_or_default()
    };
    let is_admin = move || app_state.with(|s| s.current_user.as_ref().is_some_and(|u| u.is_admin()));

    view! {
        <div class="welcome-page">
            <h1>"Welcome, " {name}</h1>
            <p>"You are signed in to the user center."</p>
            <Show when=is_admin>
                <p class="welcome-page__role">"Administrator"</p>
            </Show>
        </div>
    }
}
