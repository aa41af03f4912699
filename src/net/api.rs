//! REST API helpers for the user-center backend.
//!
//! Every call returns the intercepted envelope's payload. Endpoints and
//! parameter shapes match the backend's `/api/user/*` controller plus the
//! notice and rule list endpoints used by the console chrome.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::rc::Rc;

use async_trait::async_trait;

use super::client::{RequestClient, RequestOptions};
use super::error::ApiError;
use super::transport::Transport;
use super::types::{
    CurrentUser, DeleteUserParams, LoginParams, NoticeIconList, PageParams, RegisterParams, RegisterResult,
    RuleList, SearchParams,
};
use crate::state::bootstrap::SessionSource;

pub const CURRENT_USER_ENDPOINT: &str = "/api/user/current";
pub const LOGIN_ENDPOINT: &str = "/api/user/login";
pub const REGISTER_ENDPOINT: &str = "/api/user/register";
pub const LOGOUT_ENDPOINT: &str = "/api/user/logout";
pub const SEARCH_ENDPOINT: &str = "/api/user/search";
pub const DELETE_ENDPOINT: &str = "/api/user/delete";
pub const NOTICES_ENDPOINT: &str = "/api/notices";
pub const RULE_ENDPOINT: &str = "/api/rule";

pub struct UserApi<T> {
    client: Rc<RequestClient<T>>,
}

impl<T> Clone for UserApi<T> {
    fn clone(&self) -> Self {
        Self { client: Rc::clone(&self.client) }
    }
}

impl<T: Transport> UserApi<T> {
    pub fn new(client: Rc<RequestClient<T>>) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Propagates the request pipeline's [`ApiError`].
    pub async fn current_user(&self, options: RequestOptions) -> Result<CurrentUser, ApiError> {
        Ok(self.client.get(CURRENT_USER_ENDPOINT, &[], options).await?.data)
    }

    /// Log in and return the session's user.
    ///
    /// # Errors
    ///
    /// Propagates the request pipeline's [`ApiError`].
    pub async fn login(&self, params: &LoginParams, options: RequestOptions) -> Result<CurrentUser, ApiError> {
        Ok(self.client.post(LOGIN_ENDPOINT, Some(params), options).await?.data)
    }

    /// Register an account and return its id.
    ///
    /// # Errors
    ///
    /// Propagates the request pipeline's [`ApiError`].
    pub async fn register(&self, params: &RegisterParams, options: RequestOptions) -> Result<RegisterResult, ApiError> {
        Ok(self.client.post(REGISTER_ENDPOINT, Some(params), options).await?.data)
    }

    /// # Errors
    ///
    /// Propagates the request pipeline's [`ApiError`].
    pub async fn logout(&self, options: RequestOptions) -> Result<i64, ApiError> {
        Ok(self.client.post::<(), _>(LOGOUT_ENDPOINT, None, options).await?.data)
    }

    /// Admin-only user search; an empty username lists everyone.
    ///
    /// # Errors
    ///
    /// Propagates the request pipeline's [`ApiError`].
    pub async fn search_users(&self, params: &SearchParams, options: RequestOptions) -> Result<Vec<CurrentUser>, ApiError> {
        let query: Vec<(&str, String)> = params
            .username
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| ("username", name.to_owned()))
            .into_iter()
            .collect();
        Ok(self.client.get(SEARCH_ENDPOINT, &query, options).await?.data)
    }

    /// Admin-only delete.
    ///
    /// # Errors
    ///
    /// Propagates the request pipeline's [`ApiError`].
    pub async fn delete_user(&self, params: &DeleteUserParams, options: RequestOptions) -> Result<bool, ApiError> {
        Ok(self.client.post(DELETE_ENDPOINT, Some(params), options).await?.data)
    }

    /// # Errors
    ///
    /// Propagates the request pipeline's [`ApiError`].
    pub async fn notices(&self, options: RequestOptions) -> Result<NoticeIconList, ApiError> {
        Ok(self.client.get(NOTICES_ENDPOINT, &[], options).await?.data)
    }

    /// # Errors
    ///
    /// Propagates the request pipeline's [`ApiError`].
    pub async fn rules(&self, params: &PageParams, options: RequestOptions) -> Result<RuleList, ApiError> {
        Ok(self.client.get(RULE_ENDPOINT, &params.query_pairs(), options).await?.data)
    }
}

#[async_trait(?Send)]
impl<T: Transport> SessionSource for UserApi<T> {
    async fn fetch_current_user(&self, options: RequestOptions) -> Result<CurrentUser, ApiError> {
        self.current_user(options).await
    }
}
