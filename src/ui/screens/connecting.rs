use eframe::egui::{RichText, Spinner, Ui};

use crate::ui::{UI_CONFIG, UI_TEXT};

pub(crate) fn render_connecting(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.add(Spinner::new().size(32.0).color(UI_CONFIG.colors.orange));
        ui.add_space(12.0);
        ui.label(
            RichText::new(&UI_TEXT.connecting_heading)
                .strong()
                .size(18.0)
                .color(UI_CONFIG.colors.white),
        );
        ui.label(
            RichText::new(&UI_TEXT.connecting_hint)
                .monospace()
                .small()
                .color(UI_CONFIG.colors.text_muted),
        );
        ui.add_space(48.0);
    });
}
