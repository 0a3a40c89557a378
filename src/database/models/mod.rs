pub mod actor;
pub mod artist;
pub mod category;
pub mod drink;
pub mod movie;
pub mod question;
pub mod show;
pub mod venue;

pub use actor::Actor;
pub use artist::Artist;
pub use category::Category;
pub use drink::{Drink, Ingredient};
pub use movie::Movie;
pub use question::Question;
pub use show::{Show, ShowListing};
pub use venue::Venue;
