pub mod data_stores;
mod pdf_card_renderer;

pub use pdf_card_renderer::*;
