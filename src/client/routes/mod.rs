pub mod character_details;
pub mod character_list;
pub mod favourites;
pub mod not_found;

pub use character_details::CharacterDetails;
pub use character_list::CharacterList;
pub use favourites::Favourites;
pub use not_found::NotFound;
