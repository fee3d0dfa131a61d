mod configure;
mod connecting;
mod idle;
mod progress;

pub(crate) use configure::render_configure;
pub(crate) use connecting::render_connecting;
pub(crate) use idle::render_idle;
pub(crate) use progress::render_progress;

/// What the user asked for on a phase screen. Applied by the app after the frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DemoAction {
    ConnectWallet,
    InitializeTrade,
    StartNewTrade,
}
