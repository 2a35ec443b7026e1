mod document;
mod event_box;
mod timeline;
mod window;
mod word_pair;

pub use document::{load_corpus_json, Document};
pub use event_box::EventBox;
pub use timeline::{ConsolidatedGroup, Timeline, TimelineEntry};
pub use window::TimeWindow;
pub use word_pair::WordPair;
