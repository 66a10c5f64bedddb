pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";
pub(crate) const WARNING_SIGN: &str = "\u{26A0}\u{FE0F}";
