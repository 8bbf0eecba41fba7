// Mount point sizes
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;
pub const SIDEBAR_WIDTH: u16 = 20;
pub const CART_WIDTH: u16 = 26;
pub const CART_TOTAL_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;

// Plant cards
pub const CARD_WIDTH: u16 = 28;
pub const CARD_HEIGHT: u16 = 9;
pub const CARD_DESCRIPTION_LINES: u16 = 3;

// Glyphs
pub const CURSOR_INDICATOR: char = '▌';
pub const ACTIVE_MARKER: &str = "▶ ";
pub const INACTIVE_MARKER: &str = "  ";
pub const REMOVE_GLYPH: &str = "×";
pub const ELLIPSIS: char = '…';

// Fixed texts
pub const LOADING_TEXT: &str = "Loading plants...";
pub const DETAIL_LOADING_TEXT: &str = "Loading plant details...";
pub const EMPTY_CART_TEXT: &str = "Your cart is empty";
pub const TOO_SMALL_TEXT: &str = "Terminal too small";
pub const CLOSE_BUTTON: &str = "[ Close ]";
pub const OK_BUTTON: &str = "[ OK ]";
