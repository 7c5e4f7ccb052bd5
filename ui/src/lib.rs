//! Shared UI crate for Planwise: selection and session state, the analysis
//! workflows, chart rendering, and the Dioxus views built on them.

use dioxus::prelude::*;

pub mod charts;
pub mod core;
pub mod i18n;
pub mod views;

/// Base stylesheet shared by every platform crate.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::{register_nav, AppNavbar, NavBuilder};

    pub mod file_list;
    pub mod file_picker;
    pub use file_list::FileList;
    pub use file_picker::FilePicker;

    pub mod notice;
    pub mod panels;
    pub use notice::{announce, NoticeBanner};
    pub use panels::{Loader, ResultPanel};
}
