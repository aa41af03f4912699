//! Login page: account + password, then back to where the user was headed.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::use_services;
use crate::config::REGISTER_PATH;
use crate::net::client::RequestOptions;
use crate::net::types::LoginParams;
use crate::util::navigation::redirect_target;

pub const MIN_ACCOUNT_LEN: usize = 4;
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginInputError {
    #[error("account is required")]
    MissingAccount,
    #[error("account must be at least {} characters", MIN_ACCOUNT_LEN)]
    AccountTooShort,
    #[error("password is required")]
    MissingPassword,
    #[error("password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

/// Check the form fields and build the login request.
///
/// # Errors
///
/// Returns the first [`LoginInputError`] found.
pub fn validate_login_input(account: &str, password: &str) -> Result<LoginParams, LoginInputError> {
    let account = account.trim();
    if account.is_empty() {
        return Err(LoginInputError::MissingAccount);
    }
    if account.chars().count() < MIN_ACCOUNT_LEN {
        return Err(LoginInputError::AccountTooShort);
    }
    if password.is_empty() {
        return Err(LoginInputError::MissingPassword);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(LoginInputError::PasswordTooShort);
    }
    Ok(LoginParams {
        user_account: Some(account.to_owned()),
        user_password: Some(password.to_owned()),
        auto_login: None,
        kind: Some("account".to_owned()),
    })
}

/// Where to go after a successful login.
pub fn post_login_target(search: &str) -> String {
    redirect_target(search).unwrap_or_else(|| "/".to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let location = use_location();
    let services = use_services();
    let account = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let params = match validate_login_input(&account.get(), &password.get()) {
            Ok(params) => params,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let services = services.get_value();
        let search = location.search.get_untracked();
        leptos::task::spawn_local(async move {
            match services.api.login(&params, RequestOptions::default()).await {
                Ok(user) => {
                    log::info!("signed in as {}", user.display_name());
                    services.bootstrap.refresh().await;
                    services.navigator.push(&post_login_target(&search));
                }
                Err(e) => {
                    info.set(format!("Sign in failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"User Center"</h1>
                <p class="login-card__subtitle">"Account Login"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Account"
                        prop:value=move || account.get()
                        on:input=move |ev| account.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a class="login-link" href=REGISTER_PATH>"Create an account"</a>
            </div>
        </div>
    }
}
