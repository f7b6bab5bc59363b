mod page_const;

pub use page_const::*;
