//! Chrome configuration derived from application state.
//!
//! DESIGN
//! ======
//! The shell renders from a `LayoutConfig` value instead of reading the store
//! piecemeal, so everything the chrome shows for a given state is decided in
//! one pure function.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::sync::Arc;

use super::settings::LayoutSettings;
use super::store::AppState;
use crate::config::AppEnv;

/// Developer API documentation served by the backend.
pub const API_DOCS_PATH: &str = "/api/doc.html";

/// A decorative image pinned to the layout background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundImage {
    pub src: &'static str,
    pub left: Option<i32>,
    pub right: Option<i32>,
    pub bottom: Option<i32>,
    pub height: Option<&'static str>,
    pub width: Option<&'static str>,
}

impl BackgroundImage {
    /// Inline CSS positioning this image.
    pub fn style(&self) -> String {
        let mut parts = vec!["position: absolute".to_owned()];
        if let Some(left) = self.left {
            parts.push(format!("left: {left}px"));
        }
        if let Some(right) = self.right {
            parts.push(format!("right: {right}px"));
        }
        if let Some(bottom) = self.bottom {
            parts.push(format!("bottom: {bottom}px"));
        }
        if let Some(height) = self.height {
            parts.push(format!("height: {height}"));
        }
        if let Some(width) = self.width {
            parts.push(format!("width: {width}"));
        }
        parts.join("; ")
    }
}

pub const BACKGROUND_IMAGES: [BackgroundImage; 3] = [
    BackgroundImage {
        src: "https://mdn.alipayobjects.com/yuyan_qk0oxh/afts/img/D2LWSqNny4sAAAAAAAAAAAAAFl94AQBr",
        left: Some(85),
        right: None,
        bottom: Some(100),
        height: Some("303px"),
        width: None,
    },
    BackgroundImage {
        src: "https://mdn.alipayobjects.com/yuyan_qk0oxh/afts/img/C2TWRpJpiC0AAAAAAAAAAAAAFl94AQBr",
        left: None,
        right: Some(-45),
        bottom: Some(-68),
        height: Some("303px"),
        width: None,
    },
    BackgroundImage {
        src: "https://mdn.alipayobjects.com/yuyan_qk0oxh/afts/img/F6vSTbj8KpYAAAAAAAAAAAAAFl94AQBr",
        left: Some(0),
        right: None,
        bottom: Some(0),
        height: None,
        width: Some("331px"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub avatar_src: Option<String>,
    pub avatar_title: Option<String>,
    pub watermark: Option<String>,
    pub background_images: &'static [BackgroundImage],
    pub links: Vec<NavLink>,
    pub show_settings_drawer: bool,
    pub settings: Arc<LayoutSettings>,
}

impl LayoutConfig {
    pub fn from_state(state: &AppState, env: AppEnv) -> Self {
        let user = state.current_user.as_deref();
        let links = if env.is_dev() { vec![NavLink { label: "API docs", href: API_DOCS_PATH }] } else { Vec::new() };
        Self {
            avatar_src: user.and_then(|u| u.avatar_url.clone()),
            avatar_title: user.map(|u| u.display_name().to_owned()),
            watermark: user.and_then(|u| u.username.clone()),
            background_images: &BACKGROUND_IMAGES,
            links,
            show_settings_drawer: env.is_dev(),
            settings: Arc::clone(&state.settings),
        }
    }
}
