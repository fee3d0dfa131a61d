use eframe::egui::{Align, Layout, ProgressBar, RichText, Spinner, Ui};

use crate::{
    engine::{DemoSequencer, Phase, Step, StepStatus},
    synthetic::SyntheticTradeRecord,
    ui::{DemoAction, UI_CONFIG, UI_TEXT, UiStyleExt, display_value, status_border, tone_color},
    utils::fmt_usd,
};

/// Running and Done share one screen; Done adds the completion block.
pub(crate) fn render_progress(ui: &mut Ui, seq: &DemoSequencer) -> Option<DemoAction> {
    let (Some(trade), Some(record)) = (seq.trade(), seq.record()) else {
        log::warn!("Progress screen shown without a trade in flight");
        return None;
    };
    let mut action = None;
    let done = seq.phase() == Phase::Done;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(format!("{} {}", trade.commodity(), UI_TEXT.run_trade_suffix))
                    .strong()
                    .color(UI_CONFIG.colors.white),
            );
            ui.label_sub(format!(
                "{} → {} · {} USDC",
                trade.seller(),
                trade.buyer(),
                trade.amount()
            ));
        });
        if done {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(&UI_TEXT.run_complete_badge)
                        .small()
                        .strong()
                        .color(UI_CONFIG.colors.green),
                );
            });
        }
    });

    ui.add_space(6.0);
    ui.add(
        ProgressBar::new(seq.progress_pct() / 100.0)
            .desired_height(4.0)
            .fill(UI_CONFIG.colors.orange)
            .animate(!done),
    );
    ui.add_space(10.0);

    for (step, status) in seq.statuses().iter() {
        render_tx_card(ui, step, status, record);
        ui.add_space(8.0);
    }

    if done {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(&UI_TEXT.done_heading)
                    .strong()
                    .size(22.0)
                    .color(UI_CONFIG.colors.green),
            );
            ui.label_muted(format!(
                "{} {}",
                fmt_usd(trade.amount().usd()),
                UI_TEXT.done_released
            ));
            ui.add_space(10.0);
            if ui.secondary_button(&UI_TEXT.done_reset).clicked() {
                action = Some(DemoAction::StartNewTrade);
            }
        });
    }
    action
}

/// Unstarted steps are not drawn at all.
fn render_tx_card(ui: &mut Ui, step: Step, status: StepStatus, record: &SyntheticTradeRecord) {
    if status == StepStatus::Unstarted {
        return;
    }
    UI_CONFIG.card_frame(status_border(status)).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(step.to_string()).strong().color(UI_CONFIG.colors.white));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| match status {
                StepStatus::Loading => {
                    ui.label(
                        RichText::new(&UI_TEXT.run_processing)
                            .small()
                            .color(UI_CONFIG.colors.orange),
                    );
                    ui.add(Spinner::new().size(12.0).color(UI_CONFIG.colors.orange));
                }
                StepStatus::Confirmed => {
                    ui.label(
                        RichText::new(&UI_TEXT.run_confirmed)
                            .small()
                            .strong()
                            .color(UI_CONFIG.colors.green),
                    );
                }
                StepStatus::Unstarted => {}
            });
        });
        ui.add_space(6.0);
        match status {
            StepStatus::Confirmed => {
                for row in record.rows(step) {
                    ui.key_value(row.label, &display_value(row.tone, &row.value), tone_color(row.tone));
                }
            }
            StepStatus::Loading => ui.skeleton_lines(&[0.8, 0.6, 0.9]),
            StepStatus::Unstarted => {}
        }
    });
}
