use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// Brand palette
#[derive(Clone, Copy)]
pub struct UiColors {
    pub dark: Color32,
    pub dark_mid: Color32,
    pub dark_light: Color32,
    pub violet: Color32,
    pub violet_light: Color32,
    pub orange: Color32,
    pub orange_light: Color32,
    pub white: Color32,
    pub text_muted: Color32,
    pub text_sub: Color32,
    pub border: Color32,
    pub border_active: Color32,
    pub green: Color32,
    pub green_soft: Color32,
    pub green_border: Color32,
    pub orange_soft: Color32,
    pub card: Color32,
    pub skeleton: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub feed_panel_width: f32,
    pub demo_max_width: f32,
    /// Repaint cadence when nothing is animating
    pub idle_repaint_ms: u64,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        dark: Color32::from_rgb(0x06, 0x04, 0x30),
        dark_mid: Color32::from_rgb(0x0d, 0x0a, 0x2e),
        dark_light: Color32::from_rgb(0x16, 0x12, 0x40),
        violet: Color32::from_rgb(0x3b, 0x12, 0x8d),
        violet_light: Color32::from_rgb(0x50, 0x19, 0xbe),
        orange: Color32::from_rgb(0xf7, 0x58, 0x35),
        orange_light: Color32::from_rgb(0xff, 0x74, 0x55),
        white: Color32::WHITE,
        // white @ 55% / 35% / 7% over the dark background
        text_muted: Color32::from_rgb(0x8f, 0x8e, 0xa5),
        text_sub: Color32::from_rgb(0x5d, 0x5b, 0x7a),
        border: Color32::from_rgb(0x18, 0x16, 0x40),
        border_active: Color32::from_rgb(0x5e, 0x24, 0x3a),
        green: Color32::from_rgb(0x3e, 0xcf, 0x8e),
        green_soft: Color32::from_rgb(0x0f, 0x2d, 0x3c),
        green_border: Color32::from_rgb(0x1d, 0x53, 0x5a),
        orange_soft: Color32::from_rgb(0x20, 0x0f, 0x2f),
        card: Color32::from_rgb(0x14, 0x12, 0x3a),
        skeleton: Color32::from_rgb(0x1d, 0x1b, 0x40),
    },
    feed_panel_width: 340.0,
    demo_max_width: 640.0,
    idle_repaint_ms: 250,
};

impl UiConfig {
    /// Top nav bar
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.dark,
            stroke: Stroke::new(1.0, self.colors.border),
            inner_margin: Margin::symmetric(16, 10),
            ..Default::default()
        }
    }

    /// Live feed column
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.dark_mid,
            stroke: Stroke::new(1.0, self.colors.border),
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.dark,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(24),
            ..Default::default()
        }
    }

    /// The "blockchain terminal" box around every phase screen
    pub fn terminal_frame(&self) -> Frame {
        Frame {
            fill: self.colors.dark_mid,
            stroke: Stroke::new(1.0, self.colors.border),
            corner_radius: CornerRadius::same(16),
            inner_margin: Margin::same(20),
            ..Default::default()
        }
    }

    /// Border colour follows the card's status
    pub fn card_frame(&self, border: Color32) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, border),
            corner_radius: CornerRadius::same(12),
            inner_margin: Margin::same(14),
            ..Default::default()
        }
    }

    pub fn badge_frame(&self, fill: Color32, border: Color32) -> Frame {
        Frame {
            fill,
            stroke: Stroke::new(1.0, border),
            corner_radius: CornerRadius::same(8),
            inner_margin: Margin::symmetric(10, 6),
            ..Default::default()
        }
    }
}
