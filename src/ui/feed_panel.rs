use eframe::egui::{Align, Layout, RichText, ScrollArea, Ui};

use crate::{
    synthetic::LiveFeed,
    ui::{UI_CONFIG, UI_TEXT},
    utils::{TimeUtils, fmt_usd, truncate_hex},
};

pub(crate) fn render_live_feed(ui: &mut Ui, feed: &LiveFeed) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("●").small().color(UI_CONFIG.colors.green));
        ui.label(
            RichText::new(&UI_TEXT.feed_heading)
                .strong()
                .color(UI_CONFIG.colors.white),
        );
    });
    ui.separator();

    let now = feed.now();
    ScrollArea::vertical().id_salt("live_feed").show(ui, |ui| {
        for entry in feed.entries() {
            UI_CONFIG
                .badge_frame(UI_CONFIG.colors.dark_light, UI_CONFIG.colors.border)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(entry.kind.emoji()).size(16.0));
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(entry.kind.to_string())
                                        .small()
                                        .strong()
                                        .color(UI_CONFIG.colors.white),
                                );
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    ui.label(
                                        RichText::new(TimeUtils::format_age(entry.age(now)))
                                            .small()
                                            .color(UI_CONFIG.colors.text_sub),
                                    );
                                });
                            });
                            ui.label(
                                RichText::new(truncate_hex(&entry.tx_hash))
                                    .monospace()
                                    .small()
                                    .color(UI_CONFIG.colors.text_sub),
                            );
                            ui.label(
                                RichText::new(fmt_usd(entry.amount_usd))
                                    .small()
                                    .strong()
                                    .color(UI_CONFIG.colors.orange),
                            );
                        });
                    });
                });
            ui.add_space(6.0);
        }
    });
}
