pub mod pointer;
pub mod viewport;

pub use pointer::wire_pointer;
pub use viewport::{wire_page_lifecycle, wire_resize};
