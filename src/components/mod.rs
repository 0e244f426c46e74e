pub mod error_message;
pub mod header;
pub mod items_grid;
pub mod map_picker;

pub use error_message::ErrorMessage;
pub use header::PageHeader;
pub use items_grid::ItemsGrid;
pub use map_picker::MapPicker;
