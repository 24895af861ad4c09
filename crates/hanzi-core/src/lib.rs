pub mod dict;
pub mod settings;
