pub mod numeric_input;
pub mod select;

pub use numeric_input::NumericInputState;
pub use select::SelectState;
