pub mod artifact;
pub mod config;
pub mod decode;
pub mod digest;
pub mod encode;
pub mod payload;
