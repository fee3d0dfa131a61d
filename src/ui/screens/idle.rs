use eframe::egui::{RichText, Ui};

use crate::ui::{DemoAction, UI_CONFIG, UI_TEXT, UiStyleExt};

pub(crate) fn render_idle(ui: &mut Ui) -> Option<DemoAction> {
    let mut action = None;
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new("▶").size(32.0).color(UI_CONFIG.colors.orange));
        ui.add_space(12.0);
        ui.label(
            RichText::new(&UI_TEXT.idle_heading)
                .strong()
                .size(18.0)
                .color(UI_CONFIG.colors.white),
        );
        ui.label_muted(&UI_TEXT.idle_hint);
        ui.add_space(16.0);
        if ui.primary_button(&UI_TEXT.idle_button, false).clicked() {
            action = Some(DemoAction::ConnectWallet);
        }
        ui.add_space(48.0);
    });
    action
}
