mod dom;
mod element;
mod event;
mod page;

pub use dom::Document;
pub use element::{Element, InputMode};
pub use event::{Event, EventKind};
pub use page::Page;
