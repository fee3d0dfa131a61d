mod format_utils;
pub(crate) mod time_utils;

pub use format_utils::{fmt_num, fmt_usd, truncate_hex, truncate_middle};
pub use time_utils::{AppInstant, TimeUtils};
