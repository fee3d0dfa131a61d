mod panels;
mod root;

pub use root::App;
