use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{CharacterDetails, CharacterList, Favourites, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    CharacterList {},

    #[route("/character/:id")]
    CharacterDetails { id: String },

    #[route("/favourites")]
    Favourites {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
