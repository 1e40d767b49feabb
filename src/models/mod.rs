pub mod card;
pub mod document;
pub mod model;
pub mod review_event;

pub use card::Card;
pub use model::{Model, ParentRef};
pub use review_event::{REPLY_NO, REPLY_YES, ReviewEvent};
