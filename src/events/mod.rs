pub mod types;
pub mod tagger;

pub use tagger::tag;
pub use types::EventTag;
