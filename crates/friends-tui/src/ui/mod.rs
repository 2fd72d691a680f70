pub mod app;
pub mod layout;
pub mod menu_widget;
pub mod terminal;
pub mod theme;

pub use app::App;
pub use menu_widget::TerminalMenu;
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
