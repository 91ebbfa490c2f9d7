//! State management module
//!
//! This module contains the core data structures of the editor:
//! - Annotation: a labeled time segment and its editable fields
//! - Store: the ordered annotation list
//! - Video: the loaded video and URL parsing
//! - Playback: segment playback status
//! - Persistence: the JSON import/export format
//! - Settings: user settings stored under the config folder
//! - Timestamper: the top-level state combining all of the above

mod annotation;
mod layout;
mod persistence;
pub mod playback;
mod settings;
mod store;
mod timestamper;
mod video;

pub use annotation::*;
pub use layout::*;
pub use persistence::*;
pub use playback::*;
pub use settings::*;
pub use store::*;
pub use timestamper::*;
pub use video::*;
