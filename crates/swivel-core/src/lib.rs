pub mod config;
pub mod error;
pub mod machine;
pub mod service;
pub mod track;
pub mod translate;

pub use config::{AppConfig, CarouselConfig, DotsColor, DotsSize, PanelConfig};
pub use error::{Error, Result};
pub use machine::{Carousel, Change, Correction, Transition};
pub use service::{CarouselCommand, CarouselEvent, CarouselService};
pub use track::{PaddedTrack, Slot};
pub use translate::{TranslationCommand, Translator, SLIDE_DURATION};
