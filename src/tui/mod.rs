pub mod app;
pub mod apps;
pub mod background;
pub mod command;
pub mod resource;
pub mod runtime;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use command::Command;
pub use resource::Resource;
pub use runtime::run;
pub use theme::{Theme, ThemeVariant};
pub use widgets::{NumericInputState, SelectState};
