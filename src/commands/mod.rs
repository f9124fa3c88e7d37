mod card;
mod catalog;
mod text;

pub use card::*;
pub use catalog::*;
pub use text::*;
