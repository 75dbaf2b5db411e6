//! Record types of the four campus collections

pub mod macros;

pub mod activity;
pub mod event;
pub mod news;
pub mod note;

pub use activity::{Activity, ActivityDraft};
pub use event::{Event, EventDraft};
pub use news::{NewsDraft, NewsItem};
pub use note::{Note, NoteDraft};
