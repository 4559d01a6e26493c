pub mod chat;
pub mod enums;

pub use chat::*;
pub use enums::*;
