/// Native window settings
pub struct WindowConfig {
    pub app_name: &'static str,
    pub title: &'static str,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

pub const WINDOW: WindowConfig = WindowConfig {
    app_name: "Trade3 Demo",
    title: "Trade3 - Trade finance, settled on-chain",
    inner_size: [1280.0, 820.0],
    min_inner_size: [900.0, 600.0],
};
