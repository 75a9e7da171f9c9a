pub mod music;
pub mod panel;
pub mod snow;
pub mod trail;
pub mod tree;
