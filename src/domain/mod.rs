pub mod comment;
pub mod photo;
pub mod post;
pub mod state;

pub use comment::Comment;
pub use photo::Photo;
pub use post::{Post, PostRecord};
pub use state::ToggleState;
