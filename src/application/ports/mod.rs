// src/application/ports/mod.rs
pub mod news;

pub type NewsSourcePort = dyn news::NewsSource;
