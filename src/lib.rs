//! # swipe-carousel-core
//!
//! Headless state and view model for a swipeable slide carousel.
//!
//! This crate provides platform-agnostic logic for:
//! - Tracking the centered slide and the live drag offset
//! - Settling a released drag on the next/previous slide past a threshold
//! - Guarded previous/next navigation that never leaves the slide range
//! - Describing the track transform, panel scales and button labels to draw
//!
//! Gesture recognition and spring integration stay with the host; the crate
//! only hands over targets and the spring profile to animate with.
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for slides and config
//! - `toml` - Load [`CarouselConfig`] from TOML text
//! - `tracing` - Emit `tracing` events for drag and navigation transitions
//! - `web` - Enable web/WASM DOM bindings
//!
//! ## Example
//!
//! ```rust
//! use swipe_carousel_core::{Carousel, Slide};
//!
//! let mut carousel = Carousel::new(vec![
//!     Slide::named("slide1"),
//!     Slide::named("slide2"),
//! ]);
//!
//! // Pointer moved 80px to the left, then released.
//! carousel.drag_to(-80.0);
//! carousel.drag_end();
//!
//! let view = carousel.view();
//! assert_eq!(view.track.translate_percent, -100.0);
//! assert_eq!(view.previous.unwrap().label, "slide1");
//! assert!(view.next.is_none());
//! ```

#[macro_use]
mod macros;

mod carousel;
mod config;
mod error;
mod slide;
pub mod view;

pub use carousel::{classify_release, Carousel, SlideStep};
pub use config::{CarouselConfig, SpringOptions};
pub use error::{CarouselError, Result};
pub use slide::Slide;
pub use view::{CarouselView, DotView, NavButton, NavDirection, PanelView, TrackView};

#[cfg(feature = "web")]
pub use view::web::{apply_view, WasmCarousel};
