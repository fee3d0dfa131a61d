mod feed_panel;
mod screens;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use feed_panel::render_live_feed;
pub(crate) use screens::{
    DemoAction, render_configure, render_connecting, render_idle, render_progress,
};
pub(crate) use styles::{UiStyleExt, display_value, status_border, tone_color};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
