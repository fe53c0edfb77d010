pub mod use_loader;
pub mod use_page_label;

pub use use_loader::{use_loader, LoaderState, UseLoaderHandle};
pub use use_page_label::{use_page_label, PageLabel};
