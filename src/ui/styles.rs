use {
    crate::{
        engine::StepStatus,
        synthetic::RowTone,
        ui::UI_CONFIG,
        utils::truncate_hex,
    },
    eframe::egui::{Align, Button, Color32, CornerRadius, Layout, Response, RichText, Ui, Vec2},
};

/// Card border for a step status
pub fn status_border(status: StepStatus) -> Color32 {
    match status {
        StepStatus::Confirmed => UI_CONFIG.colors.green_border,
        StepStatus::Loading => UI_CONFIG.colors.border_active,
        StepStatus::Unstarted => UI_CONFIG.colors.border,
    }
}

pub fn tone_color(tone: RowTone) -> Color32 {
    match tone {
        RowTone::Hash => UI_CONFIG.colors.text_muted,
        RowTone::Positive => UI_CONFIG.colors.green,
        RowTone::Highlight => UI_CONFIG.colors.orange,
        RowTone::Plain => Color32::from_gray(200),
    }
}

/// Hashes are shown truncated; everything else verbatim.
pub fn display_value(tone: RowTone, value: &str) -> String {
    match tone {
        RowTone::Hash => truncate_hex(value),
        _ => value.to_string(),
    }
}

pub(crate) trait UiStyleExt {
    fn label_muted(&mut self, text: impl Into<String>);
    fn label_sub(&mut self, text: impl Into<String>);
    fn kicker(&mut self, text: &str);
    /// Full-width orange call-to-action
    fn primary_button(&mut self, text: &str, full_width: bool) -> Response;
    /// Outlined orange button
    fn secondary_button(&mut self, text: &str) -> Response;
    /// `label ........ value` on one line
    fn key_value(&mut self, label: &str, value: &str, color: Color32);
    /// Grey pulsing bars standing in for data that isn't there yet
    fn skeleton_lines(&mut self, widths: &[f32]);
}

impl UiStyleExt for Ui {
    fn label_muted(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.text_muted));
    }

    fn label_sub(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.text_sub));
    }

    fn kicker(&mut self, text: &str) {
        self.horizontal(|ui| {
            ui.label(RichText::new("●").color(UI_CONFIG.colors.orange));
            ui.label_muted(text);
        });
    }

    fn primary_button(&mut self, text: &str, full_width: bool) -> Response {
        let mut btn = Button::new(RichText::new(text).strong().color(UI_CONFIG.colors.white))
            .fill(UI_CONFIG.colors.orange)
            .corner_radius(CornerRadius::same(12));
        if full_width {
            btn = btn.min_size(Vec2::new(self.available_width(), 44.0));
        } else {
            btn = btn.min_size(Vec2::new(0.0, 40.0));
        }
        let response = self.add(btn);
        if response.hovered() {
            self.ctx().set_cursor_icon(eframe::egui::CursorIcon::PointingHand);
        }
        response
    }

    fn secondary_button(&mut self, text: &str) -> Response {
        self.add(
            Button::new(RichText::new(text).strong().color(UI_CONFIG.colors.orange))
                .fill(Color32::TRANSPARENT)
                .stroke((1.0, UI_CONFIG.colors.border_active))
                .corner_radius(CornerRadius::same(8)),
        )
    }

    fn key_value(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{}:", label))
                    .monospace()
                    .small()
                    .color(UI_CONFIG.colors.text_sub),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(value).monospace().small().color(color));
            });
        });
    }

    fn skeleton_lines(&mut self, widths: &[f32]) {
        let t = self.input(|i| i.time) as f32;
        let pulse = 0.6 + 0.4 * (t * 3.0).sin().abs();
        let color = UI_CONFIG.colors.skeleton.gamma_multiply(pulse);
        for w in widths {
            let width = self.available_width() * w.clamp(0.0, 1.0);
            let (rect, _) = self.allocate_exact_size(Vec2::new(width, 8.0), eframe::egui::Sense::hover());
            self.painter().rect_filled(rect, CornerRadius::same(4), color);
            self.add_space(4.0);
        }
        self.ctx().request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_truncated_for_display() {
        let h = format!("0x{}", "f".repeat(64));
        assert_eq!(display_value(RowTone::Hash, &h).len(), 21);
        assert_eq!(display_value(RowTone::Plain, "USDC"), "USDC");
    }

    #[test]
    fn loading_and_confirmed_cards_stand_out() {
        assert_ne!(status_border(StepStatus::Loading), status_border(StepStatus::Unstarted));
        assert_ne!(status_border(StepStatus::Confirmed), status_border(StepStatus::Loading));
    }
}
