pub mod series_preview;

pub use series_preview::series_preview;
