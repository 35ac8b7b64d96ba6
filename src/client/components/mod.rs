pub mod back_button;
pub mod character_table;
pub mod failure_boundary;
pub mod navbar;
pub mod page;
pub mod pagination;

pub use back_button::BackButton;
pub use character_table::CharacterTable;
pub use failure_boundary::{use_failure_reporter, FailureBoundary, FailureReporter};
pub use navbar::Navbar;
pub use page::Page;
pub use pagination::Pagination;
