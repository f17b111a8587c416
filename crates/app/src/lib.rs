//! EcoCheck application layer: the session facade the presentation layer
//! talks to, and the records it hands back.

pub mod session;
pub mod view;

pub use session::EcoCheck;
pub use view::{FavoritesView, ProductDetails};
