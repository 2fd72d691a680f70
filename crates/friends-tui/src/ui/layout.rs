// Layout constants shared by the render pass

/// Horizontal padding for the header, list and footer
pub const CONTENT_PADDING_H: u16 = 2;

/// Title line plus one spacer
pub const HEADER_HEIGHT: u16 = 2;

/// Key hints
pub const FOOTER_HEIGHT: u16 = 1;

/// Status line at the very bottom
pub const STATUSBAR_HEIGHT: u16 = 1;

/// Rows jumped by PageUp/PageDown
pub const PAGE_ROWS: usize = 10;
