pub mod assign;
pub mod build;
pub mod compact;
pub mod lookup;
