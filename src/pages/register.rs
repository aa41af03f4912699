//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use super::login::{MIN_ACCOUNT_LEN, MIN_PASSWORD_LEN};
use crate::app::use_services;
use crate::config::LOGIN_PATH;
use crate::net::client::RequestOptions;
use crate::net::types::RegisterParams;

pub const MAX_PLANET_CODE_LEN: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegisterInputError {
    #[error("account must be at least {} characters", MIN_ACCOUNT_LEN)]
    AccountTooShort,
    #[error("password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("planet code is required")]
    MissingPlanetCode,
    #[error("planet code must be at most {} characters", MAX_PLANET_CODE_LEN)]
    PlanetCodeTooLong,
}

/// Raw form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub account: String,
    pub password: String,
    pub check_password: String,
    pub planet_code: String,
}

/// Check the form fields and build the registration request.
///
/// # Errors
///
/// Returns the first [`RegisterInputError`] found.
pub fn validate_register_input(form: &RegisterForm) -> Result<RegisterParams, RegisterInputError> {
    let account = form.account.trim();
    if account.chars().count() < MIN_ACCOUNT_LEN {
        return Err(RegisterInputError::AccountTooShort);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(RegisterInputError::PasswordTooShort);
    }
    if form.password != form.check_password {
        return Err(RegisterInputError::PasswordMismatch);
    }
    let planet_code = form.planet_code.trim();
    if planet_code.is_empty() {
        return Err(RegisterInputError::MissingPlanetCode);
    }
    if planet_code.chars().count() > MAX_PLANET_CODE_LEN {
        return Err(RegisterInputError::PlanetCodeTooLong);
    }
    Ok(RegisterParams {
        user_account: Some(account.to_owned()),
        user_password: Some(form.password.clone()),
        check_password: Some(form.check_password.clone()),
        planet_code: Some(planet_code.to_owned()),
        kind: Some("account".to_owned()),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let services = use_services();
    let form = RwSignal::new(RegisterForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let params = match validate_register_input(&form.get()) {
            Ok(params) => params,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Registering...".to_owned());

        let services = services.get_value();
        leptos::task::spawn_local(async move {
            match services.api.register(&params, RequestOptions::default()).await {
                Ok(id) => {
                    log::info!("registered user {id}");
                    services.navigator.push(LOGIN_PATH);
                }
                Err(e) => {
                    info.set(format!("Registration failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"User Center"</h1>
                <p class="login-card__subtitle">"Create Account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Account"
                        prop:value=move || form.with(|f| f.account.clone())
                        on:input=move |ev| form.update(|f| f.account = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || form.with(|f| f.check_password.clone())
                        on:input=move |ev| form.update(|f| f.check_password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        maxlength="5"
                        placeholder="Planet code"
                        prop:value=move || form.with(|f| f.planet_code.clone())
                        on:input=move |ev| form.update(|f| f.planet_code = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a class="login-link" href=LOGIN_PATH>"Already have an account? Sign in"</a>
            </div>
        </div>
    }
}
