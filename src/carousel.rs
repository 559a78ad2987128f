//! Carousel container: slide index, live drag offset and their transitions.

use crate::error::Result;
use crate::view::{CarouselView, DotView, NavButton, NavDirection, PanelView, TrackView};
use crate::{CarouselConfig, Slide};

/// Outcome of a drag release or a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideStep {
    /// Moved to the following slide
    Next,
    /// Moved to the preceding slide
    Previous,
    /// Index unchanged
    Stay,
}

/// Classify a released drag by its displacement alone, ignoring boundaries.
///
/// Dragging left (negative offset) past the threshold asks for the next
/// slide; dragging right asks for the previous one.
#[inline]
pub fn classify_release(offset: f64, threshold: f64) -> SlideStep {
    if offset <= -threshold {
        SlideStep::Next
    } else if offset >= threshold {
        SlideStep::Previous
    } else {
        SlideStep::Stay
    }
}

/// Platform-agnostic swipe carousel.
///
/// The carousel owns the current index and the live drag offset. It does not
/// recognize gestures or run animations: the host feeds pointer displacement
/// into [`drag_to`](Self::drag_to), calls [`drag_end`](Self::drag_end) on
/// release, and draws whatever [`view`](Self::view) describes.
///
/// The index only ever moves by one step and never leaves `0..slide_count()`.
///
/// ## Example
///
/// ```rust
/// use swipe_carousel_core::{Carousel, Slide, SlideStep};
///
/// let mut carousel = Carousel::new(vec![
///     Slide::named("slide1"),
///     Slide::named("slide2"),
///     Slide::named("slide3"),
/// ]);
///
/// carousel.drag_start();
/// carousel.drag_to(-20.0);
/// carousel.drag_to(-75.0);
/// assert_eq!(carousel.drag_end(), SlideStep::Next);
/// assert_eq!(carousel.index(), 1);
/// assert_eq!(carousel.offset(), 0.0);
///
/// assert!(carousel.go_previous());
/// assert!(!carousel.go_previous()); // already at the first slide
/// assert_eq!(carousel.index(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Carousel<C> {
    /// Ordered slides, fixed for the carousel's lifetime
    slides: Vec<Slide<C>>,
    /// Currently centered slide
    index: usize,
    /// Live horizontal displacement in pixels
    offset: f64,
    /// Whether a drag gesture is in progress
    dragging: bool,
    config: CarouselConfig,
}

impl<C> Carousel<C> {
    /// Create a carousel over `slides` with the default configuration.
    pub fn new(slides: Vec<Slide<C>>) -> Self {
        Self {
            slides,
            index: 0,
            offset: 0.0,
            dragging: false,
            config: CarouselConfig::default(),
        }
    }

    /// Create a carousel with a custom configuration.
    ///
    /// Fails if the configuration does not validate.
    pub fn with_config(slides: Vec<Slide<C>>, config: CarouselConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(slides)
        })
    }

    /// Get the configuration.
    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Get the slides in display order.
    #[inline]
    pub fn slides(&self) -> &[Slide<C>] {
        &self.slides
    }

    /// Get the number of slides.
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the current slide index.
    ///
    /// With no slides this is 0 and refers to nothing.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the current slide, if any.
    pub fn current(&self) -> Option<&Slide<C>> {
        self.slides.get(self.index)
    }

    /// Get the slide before the current one, if any.
    pub fn previous_slide(&self) -> Option<&Slide<C>> {
        self.index.checked_sub(1).and_then(|i| self.slides.get(i))
    }

    /// Get the slide after the current one, if any.
    pub fn next_slide(&self) -> Option<&Slide<C>> {
        self.slides.get(self.index + 1)
    }

    /// Check whether a previous slide exists.
    #[inline]
    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    /// Check whether a next slide exists.
    #[inline]
    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.slides.len()
    }

    /// Get the live drag offset in pixels.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Check if a drag gesture is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Begin a drag gesture from a zero baseline.
    pub fn drag_start(&mut self) {
        self.dragging = true;
        self.offset = 0.0;
        ctrace!(index = self.index, "drag_start");
    }

    /// Record the latest pointer displacement since drag start.
    ///
    /// No bounds are enforced here; the host may let the track overshoot.
    /// Non-finite values are ignored.
    pub fn drag_to(&mut self, offset: f64) {
        if !offset.is_finite() {
            return;
        }
        self.dragging = true;
        self.offset = offset;
        ctrace!(offset, "drag_to");
    }

    /// Finish the drag gesture and settle on a slide.
    ///
    /// The index moves by at most one step whatever the drag distance, and
    /// the offset is reset so the next gesture starts clean.
    pub fn drag_end(&mut self) -> SlideStep {
        let offset = self.offset;
        self.offset = 0.0;
        self.dragging = false;

        let step = match classify_release(offset, self.config.drag_threshold) {
            SlideStep::Next if self.can_go_next() => {
                self.index += 1;
                SlideStep::Next
            }
            SlideStep::Previous if self.can_go_previous() => {
                self.index -= 1;
                SlideStep::Previous
            }
            _ => SlideStep::Stay,
        };
        cdebug!(offset, index = self.index, ?step, "drag_end");
        step
    }

    /// Abandon the drag gesture without changing slides.
    pub fn drag_cancel(&mut self) {
        self.offset = 0.0;
        self.dragging = false;
        ctrace!(index = self.index, "drag_cancel");
    }

    /// Go to the previous slide.
    ///
    /// Returns false and leaves the index alone at the first slide.
    pub fn go_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.index -= 1;
        cdebug!(index = self.index, "go_previous");
        true
    }

    /// Go to the next slide.
    ///
    /// Returns false and leaves the index alone at the last slide.
    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.index += 1;
        cdebug!(index = self.index, "go_next");
        true
    }

    /// Apply a navigation button press.
    pub fn navigate(&mut self, direction: NavDirection) -> SlideStep {
        match direction {
            NavDirection::Previous if self.go_previous() => SlideStep::Previous,
            NavDirection::Next if self.go_next() => SlideStep::Next,
            _ => SlideStep::Stay,
        }
    }

    /// Animated translation target of the track, in percent of viewport width.
    #[inline]
    pub fn track_translate_percent(&self) -> f64 {
        0.0 - self.index as f64 * 100.0
    }

    /// Scale target for the panel at `position`.
    #[inline]
    pub fn panel_scale(&self, position: usize) -> f64 {
        self.config.scale(position == self.index)
    }

    /// Build the view model for the current state.
    pub fn view(&self) -> CarouselView {
        let panels = (0..self.slides.len())
            .map(|position| PanelView {
                position,
                active: position == self.index,
                scale: self.panel_scale(position),
            })
            .collect();

        let dots = (0..self.slides.len())
            .map(|position| DotView {
                position,
                active: position == self.index,
            })
            .collect();

        let previous = self.previous_slide().map(|slide| NavButton {
            direction: NavDirection::Previous,
            label: slide.name.clone(),
        });
        let next = self.next_slide().map(|slide| NavButton {
            direction: NavDirection::Next,
            label: slide.name.clone(),
        });

        CarouselView {
            track: TrackView {
                translate_percent: self.track_translate_percent(),
                drag_offset: self.offset,
                dragging: self.dragging,
                spring: self.config.spring,
            },
            panels,
            previous,
            next,
            dots,
        }
    }
}
