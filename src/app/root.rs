use {
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
    rand::{SeedableRng, rngs::StdRng},
    std::time::Duration,
};

use crate::{
    Cli,
    config::DF,
    domain::TradeForm,
    engine::{DemoSequencer, Phase, SequencerEvent},
    synthetic::{BlockTicker, LiveFeed},
    ui::{DemoAction, UI_CONFIG},
    utils::{AppInstant, TimeUtils},
};

pub struct App {
    pub(crate) sequencer: DemoSequencer,
    pub(crate) form: TradeForm,
    pub(crate) feed: LiveFeed,
    pub(crate) block_ticker: BlockTicker,
    feed_rng: StdRng,
    started: AppInstant,
    time_scale: f32,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        Self::from_args(args)
    }

    fn from_args(args: Cli) -> Self {
        let seed = args.seed.unwrap_or_else(rand::random);
        if DF.log_rng_seed {
            log::info!("Demo RNG seed: {} (replay with --seed {})", seed, seed);
        }
        // Sequencer and feed draw from separate streams so the feed never shifts a run's data.
        let mut feed_rng = StdRng::seed_from_u64(seed.wrapping_add(1));
        let feed = LiveFeed::new(&mut feed_rng);

        Self {
            sequencer: DemoSequencer::seeded(seed),
            form: TradeForm::default(),
            feed,
            block_ticker: BlockTicker::default(),
            feed_rng,
            started: AppInstant::now(),
            time_scale: args.time_scale,
        }
    }

    /// Simulated time since launch
    fn sim_now(&self) -> Duration {
        TimeUtils::scale(self.started.elapsed(), self.time_scale)
    }

    /// Catches the sequencer, live feed and block ticker up to `now`.
    pub(crate) fn tick(&mut self, now: Duration) {
        let events = self.sequencer.advance_to(now);
        log_events(&events);

        self.feed.advance_to(&mut self.feed_rng, now);
        self.block_ticker.advance_to(now);
    }

    pub(crate) fn apply_action(&mut self, action: DemoAction) {
        let result = match action {
            DemoAction::ConnectWallet => self.sequencer.connect(),
            DemoAction::InitializeTrade => self
                .form
                .to_configuration()
                .and_then(|config| self.sequencer.submit(config)),
            DemoAction::StartNewTrade => self.sequencer.reset(),
        };
        match result {
            Ok(events) => log_events(&events),
            Err(e) => log::error!("{:?} rejected: {:#}", action, e),
        }
    }

    fn schedule_repaint(&self, ctx: &Context) {
        match self.sequencer.phase() {
            // Spinners and the progress bar animate every frame.
            Phase::Connecting | Phase::Running => ctx.request_repaint(),
            _ => ctx.request_repaint_after(Duration::from_millis(UI_CONFIG.idle_repaint_ms)),
        }
    }
}

fn log_events(events: &[SequencerEvent]) {
    for event in events {
        match event {
            SequencerEvent::PhaseChanged { .. } => {}
            SequencerEvent::StepsUpdated { .. } if !DF.log_step_updates => {}
            _ => log::info!("{}", event),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.tick(self.sim_now());

        self.render_top_panel(ctx);
        self.render_feed_panel(ctx);
        if let Some(action) = self.render_central_panel(ctx) {
            self.apply_action(action);
        }
        self.schedule_repaint(ctx);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.sequencer.shutdown();
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let colors = &UI_CONFIG.colors;
    let mut visuals = Visuals::dark();
    visuals.window_fill = colors.dark_mid;
    visuals.panel_fill = colors.dark;
    visuals.extreme_bg_color = colors.dark_light;
    visuals.selection.bg_fill = colors.violet;
    visuals.hyperlink_color = colors.violet_light;
    visuals.widgets.noninteractive.fg_stroke.color = colors.text_muted;
    visuals.widgets.inactive.fg_stroke.color = colors.white;
    visuals.widgets.inactive.bg_fill = colors.dark_light;
    visuals.widgets.inactive.weak_bg_fill = colors.dark_light;
    visuals.widgets.hovered.fg_stroke.color = colors.orange_light;
    visuals.widgets.hovered.bg_stroke.color = colors.border_active;
    visuals.widgets.active.fg_stroke.color = colors.white;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StepStatusVector;

    fn app() -> App {
        App::from_args(Cli {
            seed: Some(7),
            time_scale: 1.0,
        })
    }

    #[test]
    fn actions_drive_a_full_run() {
        let mut app = app();
        app.apply_action(DemoAction::ConnectWallet);
        assert_eq!(app.sequencer.phase(), Phase::Connecting);

        app.tick(Duration::from_millis(1_800));
        assert_eq!(app.sequencer.phase(), Phase::Configuring);

        app.apply_action(DemoAction::InitializeTrade);
        assert_eq!(app.sequencer.phase(), Phase::Running);

        app.tick(Duration::from_millis(1_800 + 10_800));
        assert_eq!(app.sequencer.phase(), Phase::Done);

        app.apply_action(DemoAction::StartNewTrade);
        assert_eq!(app.sequencer.phase(), Phase::Configuring);
        assert_eq!(app.sequencer.statuses(), StepStatusVector::ALL_UNSTARTED);
    }

    #[test]
    fn out_of_phase_action_is_ignored() {
        let mut app = app();
        app.apply_action(DemoAction::StartNewTrade);
        assert_eq!(app.sequencer.phase(), Phase::Idle);
    }

    #[test]
    fn feed_and_ticker_follow_the_clock() {
        let mut app = app();
        let height = app.block_ticker.height();
        app.tick(Duration::from_secs(24));
        assert_eq!(app.block_ticker.height(), height + 2);
        assert_eq!(app.feed.len(), 9);
    }
}
