pub mod app;
pub mod delivery_panel;
pub mod settings_modal;
pub mod touch_scroll_view;

pub use app::App;
pub use touch_scroll_view::TouchScrollView;
