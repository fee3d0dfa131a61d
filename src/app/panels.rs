use eframe::egui::{
    Align, CentralPanel, Context, Layout, RichText, ScrollArea, SidePanel, TopBottomPanel, Ui,
};

use crate::{
    app::App,
    engine::Phase,
    ui::{
        DemoAction, UI_CONFIG, UI_TEXT, UiStyleExt, render_configure, render_connecting,
        render_idle, render_live_feed, render_progress,
    },
    utils::fmt_num,
};

impl App {
    pub(crate) fn render_top_panel(&self, ctx: &Context) {
        TopBottomPanel::top("nav")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&UI_TEXT.nav_brand)
                            .strong()
                            .size(20.0)
                            .color(UI_CONFIG.colors.white),
                    );
                    ui.label_sub(&UI_TEXT.nav_tagline);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        UI_CONFIG
                            .badge_frame(UI_CONFIG.colors.green_soft, UI_CONFIG.colors.green_border)
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(format!(
                                        "● {} #{}",
                                        UI_TEXT.nav_block,
                                        fmt_num(self.block_ticker.height())
                                    ))
                                    .monospace()
                                    .small()
                                    .color(UI_CONFIG.colors.green),
                                );
                            });
                    });
                });
            });
    }

    pub(crate) fn render_feed_panel(&self, ctx: &Context) {
        SidePanel::right("live_feed_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .resizable(false)
            .exact_width(UI_CONFIG.feed_panel_width)
            .show(ctx, |ui| render_live_feed(ui, &self.feed));
    }

    /// Section header plus the terminal box holding the current phase's screen.
    pub(crate) fn render_central_panel(&mut self, ctx: &Context) -> Option<DemoAction> {
        let mut action = None;
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(UI_CONFIG.demo_max_width);
                            ui.kicker(&UI_TEXT.demo_kicker);
                            ui.label(
                                RichText::new(&UI_TEXT.demo_title)
                                    .strong()
                                    .size(30.0)
                                    .color(UI_CONFIG.colors.white),
                            );
                            ui.label_muted(&UI_TEXT.demo_subtitle);
                            ui.add_space(20.0);

                            UI_CONFIG.terminal_frame().show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.label(
                                    RichText::new(&UI_TEXT.terminal_title)
                                        .monospace()
                                        .small()
                                        .color(UI_CONFIG.colors.text_sub),
                                );
                                ui.separator();
                                ui.with_layout(Layout::top_down(Align::Min), |ui| {
                                    action = self.render_phase(ui);
                                });
                            });
                        });
                    });
            });
        action
    }

    fn render_phase(&mut self, ui: &mut Ui) -> Option<DemoAction> {
        match self.sequencer.phase() {
            Phase::Idle => render_idle(ui),
            Phase::Connecting => {
                render_connecting(ui);
                None
            }
            Phase::Configuring => {
                let wallet = self.sequencer.wallet_address().unwrap_or_default();
                render_configure(ui, &mut self.form, wallet)
            }
            Phase::Running | Phase::Done => render_progress(ui, &self.sequencer),
        }
    }
}
