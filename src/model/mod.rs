pub mod api;
pub mod character;
pub mod favorite;

pub use character::{CharacterDetail, CharacterSummary, ReferenceRecord};
pub use favorite::FavoriteRecord;
