pub mod cli;
pub mod error;
pub mod media;
pub mod nav;
pub mod player;
pub mod render;
pub mod review;
pub mod trace;

pub use error::ReviewError;
pub use media::media_model::MediaLocator;
pub use nav::navigation::{LinkTarget, Navigator};
pub use review::builder::build_entries;
pub use review::review_model::{PageLayout, ReviewInput, ReviewPage, RoiCard, RoiEntry};
pub use review::slot::{RoiSlot, RoiSlots};
