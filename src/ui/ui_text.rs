use std::sync::LazyLock;

pub struct UiText {
    // --- Nav ---
    pub nav_brand: String,
    pub nav_block: String,
    pub nav_tagline: String,

    // --- Section header ---
    pub demo_kicker: String,
    pub demo_title: String,
    pub demo_subtitle: String,
    pub terminal_title: String,

    // --- Idle ---
    pub idle_heading: String,
    pub idle_hint: String,
    pub idle_button: String,

    // --- Connecting ---
    pub connecting_heading: String,
    pub connecting_hint: String,

    // --- Configure ---
    pub cfg_wallet: String,
    pub cfg_connected: String,
    pub cfg_heading: String,
    pub cfg_commodity: String,
    pub cfg_amount: String,
    pub cfg_seller: String,
    pub cfg_buyer: String,
    pub cfg_summary: String,
    pub cfg_fee: String,
    pub cfg_submit: String,

    // --- Running / Done ---
    pub run_trade_suffix: String,
    pub run_processing: String,
    pub run_confirmed: String,
    pub run_complete_badge: String,
    pub done_heading: String,
    pub done_released: String,
    pub done_reset: String,

    // --- Feed ---
    pub feed_heading: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    nav_brand: "Trade3".to_string(),
    nav_block: "Block".to_string(),
    nav_tagline: "Trade finance, settled on-chain".to_string(),

    demo_kicker: "Interactive Demo".to_string(),
    demo_title: "See It In Action".to_string(),
    demo_subtitle: "Simulate a real blockchain trade finance transaction, step by step.".to_string(),
    terminal_title: "trade3.io - blockchain terminal".to_string(),

    idle_heading: "Ready to simulate a trade".to_string(),
    idle_hint: "Connect your wallet to begin".to_string(),
    idle_button: "Connect Wallet".to_string(),

    connecting_heading: "Connecting Wallet…".to_string(),
    connecting_hint: "Awaiting signature…".to_string(),

    cfg_wallet: "Wallet:".to_string(),
    cfg_connected: "Connected".to_string(),
    cfg_heading: "Configure Trade".to_string(),
    cfg_commodity: "Commodity".to_string(),
    cfg_amount: "Trade Value (USD)".to_string(),
    cfg_seller: "Seller Country".to_string(),
    cfg_buyer: "Buyer Country".to_string(),
    cfg_summary: "Trade Summary:".to_string(),
    cfg_fee: "Protocol fee:".to_string(),
    cfg_submit: "Initialize Blockchain Trade →".to_string(),

    run_trade_suffix: "Trade".to_string(),
    run_processing: "Processing…".to_string(),
    run_confirmed: "✓ Confirmed".to_string(),
    run_complete_badge: "✓ Complete".to_string(),
    done_heading: "Trade Complete ✓".to_string(),
    done_released: "USDC auto-released to seller".to_string(),
    done_reset: "Start New Trade".to_string(),

    feed_heading: "Live Network Activity".to_string(),
});
