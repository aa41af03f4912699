//! Layout settings: theme and chrome options for the shell.
//!
//! DESIGN
//! ======
//! `LayoutSettings` is always complete; runtime overrides arrive as a
//! `SettingsPatch` whose `None` fields leave the current value untouched.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "User Center";
pub const DEFAULT_LOGO: &str = "https://gw.alipayobjects.com/zos/rmsportal/KDpgvguMpGfqaHMjJjRK.svg";
pub const DEFAULT_PRIMARY_COLOR: &str = "#1890ff";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavTheme {
    #[default]
    Light,
    RealDark,
}

impl NavTheme {
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::RealDark => "dark",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Side,
    Top,
    #[default]
    Mix,
}

impl LayoutMode {
    pub const ALL: [Self; 3] = [Self::Side, Self::Top, Self::Mix];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Side => "side",
            Self::Top => "top",
            Self::Mix => "mix",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentWidth {
    #[default]
    Fluid,
    Fixed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutSettings {
    pub nav_theme: NavTheme,
    pub color_primary: String,
    pub layout: LayoutMode,
    pub content_width: ContentWidth,
    pub fixed_header: bool,
    pub fix_siderbar: bool,
    pub color_weak: bool,
    pub title: String,
    pub pwa: bool,
    pub logo: String,
    pub iconfont_url: String,
    pub split_menus: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            nav_theme: NavTheme::Light,
            color_primary: DEFAULT_PRIMARY_COLOR.to_owned(),
            layout: LayoutMode::Mix,
            content_width: ContentWidth::Fluid,
            fixed_header: false,
            fix_siderbar: true,
            color_weak: false,
            title: DEFAULT_TITLE.to_owned(),
            pwa: true,
            logo: DEFAULT_LOGO.to_owned(),
            iconfont_url: String::new(),
            split_menus: false,
        }
    }
}

impl LayoutSettings {
    /// A new settings value with `patch` laid over `self`.
    pub fn merged(&self, patch: &SettingsPatch) -> Self {
        Self {
            nav_theme: patch.nav_theme.unwrap_or(self.nav_theme),
            color_primary: patch.color_primary.clone().unwrap_or_else(|| self.color_primary.clone()),
            layout: patch.layout.unwrap_or(self.layout),
            content_width: patch.content_width.unwrap_or(self.content_width),
            fixed_header: patch.fixed_header.unwrap_or(self.fixed_header),
            fix_siderbar: patch.fix_siderbar.unwrap_or(self.fix_siderbar),
            color_weak: patch.color_weak.unwrap_or(self.color_weak),
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            pwa: patch.pwa.unwrap_or(self.pwa),
            logo: patch.logo.clone().unwrap_or_else(|| self.logo.clone()),
            iconfont_url: patch.iconfont_url.clone().unwrap_or_else(|| self.iconfont_url.clone()),
            split_menus: patch.split_menus.unwrap_or(self.split_menus),
        }
    }
}

/// Partial override of [`LayoutSettings`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_theme: Option<NavTheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_width: Option<ContentWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_siderbar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_weak: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwa: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iconfont_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_menus: Option<bool>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
