pub mod schedule;
pub mod settings;
pub mod nav_menu;

pub use schedule::schedule_screen;
pub use settings::settings_screen;
pub use nav_menu::nav_menu;
