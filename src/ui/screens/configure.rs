use {
    eframe::egui::{Align, ComboBox, Grid, Layout, RichText, Ui},
    strum::IntoEnumIterator,
};

use crate::{
    domain::{Commodity, Country, TradeAmount, TradeForm, protocol_fee_label},
    ui::{DemoAction, UI_CONFIG, UI_TEXT, UiStyleExt},
    utils::{fmt_usd, truncate_hex},
};

pub(crate) fn render_configure(
    ui: &mut Ui,
    form: &mut TradeForm,
    wallet: &str,
) -> Option<DemoAction> {
    let mut action = None;

    UI_CONFIG
        .badge_frame(UI_CONFIG.colors.green_soft, UI_CONFIG.colors.green_border)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let green = UI_CONFIG.colors.green;
                ui.label(RichText::new("●").color(green));
                ui.label(
                    RichText::new(format!("{} {}", UI_TEXT.cfg_wallet, truncate_hex(wallet)))
                        .monospace()
                        .small()
                        .color(green),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(&UI_TEXT.cfg_connected).small().color(green));
                });
            });
        });

    ui.add_space(16.0);
    ui.label(
        RichText::new(&UI_TEXT.cfg_heading)
            .strong()
            .size(17.0)
            .color(UI_CONFIG.colors.white),
    );
    ui.add_space(10.0);

    Grid::new("trade_form_grid")
        .num_columns(2)
        .spacing([16.0, 10.0])
        .show(ui, |ui| {
            ui.label_sub(&UI_TEXT.cfg_commodity);
            ui.label_sub(&UI_TEXT.cfg_amount);
            ui.end_row();

            ComboBox::from_id_salt("commodity")
                .width(220.0)
                .selected_text(form.commodity.to_string())
                .show_ui(ui, |ui| {
                    for c in Commodity::iter() {
                        ui.selectable_value(&mut form.commodity, c, c.to_string());
                    }
                });
            ComboBox::from_id_salt("amount")
                .width(220.0)
                .selected_text(form.amount.to_string())
                .show_ui(ui, |ui| {
                    for a in TradeAmount::iter() {
                        ui.selectable_value(&mut form.amount, a, a.to_string());
                    }
                });
            ui.end_row();

            ui.label_sub(&UI_TEXT.cfg_seller);
            ui.label_sub(&UI_TEXT.cfg_buyer);
            ui.end_row();

            let mut seller = form.seller();
            ComboBox::from_id_salt("seller")
                .width(220.0)
                .selected_text(seller.to_string())
                .show_ui(ui, |ui| {
                    for c in Country::seller_options() {
                        ui.selectable_value(&mut seller, c, c.to_string());
                    }
                });
            if seller != form.seller() {
                form.set_seller(seller);
            }

            let mut buyer = form.buyer();
            ComboBox::from_id_salt("buyer")
                .width(220.0)
                .selected_text(buyer.to_string())
                .show_ui(ui, |ui| {
                    for c in Country::buyer_options(form.seller()) {
                        ui.selectable_value(&mut buyer, c, c.to_string());
                    }
                });
            if buyer != form.buyer() {
                form.set_buyer(buyer);
            }
            ui.end_row();
        });

    ui.add_space(14.0);
    UI_CONFIG
        .badge_frame(UI_CONFIG.colors.orange_soft, UI_CONFIG.colors.border_active)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new(&UI_TEXT.cfg_summary)
                        .monospace()
                        .small()
                        .color(UI_CONFIG.colors.text_sub),
                );
                ui.label(
                    RichText::new(format!(
                        "{} | {} USDC | {} → {}",
                        form.commodity,
                        form.amount,
                        form.seller(),
                        form.buyer()
                    ))
                    .monospace()
                    .small()
                    .color(UI_CONFIG.colors.orange),
                );
            });
            ui.label(
                RichText::new(format!(
                    "{} {} ({})",
                    UI_TEXT.cfg_fee,
                    fmt_usd(form.amount.protocol_fee()),
                    protocol_fee_label()
                ))
                .monospace()
                .small()
                .color(UI_CONFIG.colors.text_sub),
            );
        });

    ui.add_space(14.0);
    if ui.primary_button(&UI_TEXT.cfg_submit, true).clicked() {
        action = Some(DemoAction::InitializeTrade);
    }
    action
}
