//! View model for the carousel.
//!
//! A [`CarouselView`] is a platform-agnostic description of what needs to be
//! drawn for the current state. Each host interprets it for its own backend:
//! the `web` feature applies it to DOM elements.

use crate::SpringOptions;

/// Which way a navigation button moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

/// Everything a host needs to draw the carousel.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselView {
    /// Draggable track holding the panels
    pub track: TrackView,
    /// One entry per slide, in order
    pub panels: Vec<PanelView>,
    /// Previous button; `None` at the first slide
    pub previous: Option<NavButton>,
    /// Next button; `None` at the last slide
    pub next: Option<NavButton>,
    /// Position indicators, one per slide
    pub dots: Vec<DotView>,
}

/// Track placement.
///
/// The settled position and the live drag displacement are kept apart: the
/// host animates towards `translate_percent` with `spring`, and applies
/// `drag_offset` directly while the pointer is down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackView {
    /// Animation target in percent of viewport width (`-index * 100`)
    pub translate_percent: f64,
    /// Live pointer displacement in pixels
    pub drag_offset: f64,
    /// Whether a drag gesture is in progress
    pub dragging: bool,
    /// Easing profile for the settle animation
    pub spring: SpringOptions,
}

impl TrackView {
    /// Get the combined transform as a CSS string.
    ///
    /// ```rust
    /// use swipe_carousel_core::{Carousel, Slide};
    ///
    /// let mut carousel = Carousel::new(vec![Slide::named("a"), Slide::named("b")]);
    /// carousel.go_next();
    /// carousel.drag_to(12.5);
    /// assert_eq!(
    ///     carousel.view().track.css_transform(),
    ///     "translateX(calc(-100% + 12.5px))"
    /// );
    /// ```
    pub fn css_transform(&self) -> String {
        if self.drag_offset == 0.0 {
            format!("translateX({}%)", self.translate_percent)
        } else {
            format!(
                "translateX(calc({}% + {}px))",
                self.translate_percent, self.drag_offset
            )
        }
    }
}

/// A single slide panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelView {
    /// Position in the slide list
    pub position: usize,
    /// Whether this is the centered slide
    pub active: bool,
    /// Scale animation target
    pub scale: f64,
}

impl PanelView {
    /// Get the scale as a CSS transform string.
    pub fn css_transform(&self) -> String {
        format!("scale({})", self.scale)
    }

    /// Value for the panel's `data-active` attribute.
    #[inline]
    pub fn data_active(&self) -> &'static str {
        active_attr(self.active)
    }
}

/// A navigation button and the name of the slide it leads to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavButton {
    pub direction: NavDirection,
    pub label: String,
}

/// A position indicator. Display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DotView {
    pub position: usize,
    pub active: bool,
}

impl DotView {
    /// Value for the dot's `data-active` attribute.
    #[inline]
    pub fn data_active(&self) -> &'static str {
        active_attr(self.active)
    }
}

fn active_attr(active: bool) -> &'static str {
    if active {
        "true"
    } else {
        "false"
    }
}

/// Web-specific rendering implementation.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use crate::error::{CarouselError, Result};
    use crate::{Carousel, Slide, SlideStep};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlButtonElement, HtmlElement};

    fn set_transform(element: &HtmlElement, value: &str) -> Result<()> {
        element
            .style()
            .set_property("transform", value)
            .map_err(|_| CarouselError::Dom("Failed to set transform".into()))
    }

    fn set_active(element: &HtmlElement, value: &str) -> Result<()> {
        element
            .set_attribute("data-active", value)
            .map_err(|_| CarouselError::Dom("Failed to set data-active".into()))
    }

    fn expect_len(what: &str, expected: usize, actual: usize) -> Result<()> {
        if expected != actual {
            return Err(CarouselError::Dom(format!(
                "Expected {expected} {what} elements, got {actual}"
            )));
        }
        Ok(())
    }

    fn html_elements(values: js_sys::Array, what: &str) -> Result<Vec<HtmlElement>> {
        values
            .iter()
            .map(|value| {
                value
                    .dyn_into::<HtmlElement>()
                    .map_err(|_| CarouselError::Dom(format!("{what} is not an HTMLElement")))
            })
            .collect()
    }

    fn apply_button(element: &HtmlButtonElement, button: Option<&NavButton>) {
        match button {
            Some(button) => {
                element.set_text_content(Some(&button.label));
                element.set_disabled(false);
                element.set_hidden(false);
            }
            None => {
                element.set_text_content(Some(""));
                element.set_disabled(true);
                element.set_hidden(true);
            }
        }
    }

    /// Apply a view to the carousel's DOM elements.
    ///
    /// ## Arguments
    ///
    /// * `view` - View model from [`Carousel::view`]
    /// * `track` - The draggable track element
    /// * `panels` - Panel elements in slide order
    /// * `dots` - Indicator elements in slide order; may be empty when the
    ///   host draws no indicators
    /// * `previous` / `next` - Navigation buttons
    ///
    /// Fails if `panels` (or a non-empty `dots`) does not have one element
    /// per slide.
    pub fn apply_view(
        view: &CarouselView,
        track: &HtmlElement,
        panels: &[HtmlElement],
        dots: &[HtmlElement],
        previous: &HtmlButtonElement,
        next: &HtmlButtonElement,
    ) -> Result<()> {
        expect_len("panel", view.panels.len(), panels.len())?;
        if !dots.is_empty() {
            expect_len("dot", view.dots.len(), dots.len())?;
        }

        set_transform(track, &view.track.css_transform())?;

        for (panel, element) in view.panels.iter().zip(panels) {
            set_transform(element, &panel.css_transform())?;
            set_active(element, panel.data_active())?;
        }
        for (dot, element) in view.dots.iter().zip(dots) {
            set_active(element, dot.data_active())?;
        }

        apply_button(previous, view.previous.as_ref());
        apply_button(next, view.next.as_ref());
        Ok(())
    }

    fn to_js(err: CarouselError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    /// Carousel over named slides, exported to JavaScript hosts.
    #[wasm_bindgen]
    pub struct WasmCarousel {
        inner: Carousel<String>,
    }

    #[wasm_bindgen]
    impl WasmCarousel {
        /// Create a carousel from an array of slide names.
        ///
        /// Throws if any entry is not a string.
        #[wasm_bindgen(constructor)]
        pub fn new(names: js_sys::Array) -> std::result::Result<WasmCarousel, JsValue> {
            let slides =
                Slide::named_in_order(names.iter().map(|value| value.as_string())).map_err(to_js)?;
            Ok(Self {
                inner: Carousel::new(slides),
            })
        }

        pub fn index(&self) -> usize {
            self.inner.index()
        }

        pub fn offset(&self) -> f64 {
            self.inner.offset()
        }

        pub fn drag_start(&mut self) {
            self.inner.drag_start();
        }

        pub fn drag_to(&mut self, offset: f64) {
            self.inner.drag_to(offset);
        }

        /// Returns `1` for next, `-1` for previous, `0` when unchanged.
        pub fn drag_end(&mut self) -> i32 {
            match self.inner.drag_end() {
                SlideStep::Next => 1,
                SlideStep::Previous => -1,
                SlideStep::Stay => 0,
            }
        }

        pub fn drag_cancel(&mut self) {
            self.inner.drag_cancel();
        }

        pub fn go_previous(&mut self) -> bool {
            self.inner.go_previous()
        }

        pub fn go_next(&mut self) -> bool {
            self.inner.go_next()
        }

        pub fn previous_label(&self) -> Option<String> {
            self.inner.previous_slide().map(|slide| slide.name.clone())
        }

        pub fn next_label(&self) -> Option<String> {
            self.inner.next_slide().map(|slide| slide.name.clone())
        }

        /// Apply the current state to the given DOM elements.
        ///
        /// `panels` and `dots` must hold `HTMLElement`s in slide order;
        /// `dots` may be empty.
        pub fn render(
            &self,
            track: &HtmlElement,
            panels: js_sys::Array,
            dots: js_sys::Array,
            previous: &HtmlButtonElement,
            next: &HtmlButtonElement,
        ) -> std::result::Result<(), JsValue> {
            let panels = html_elements(panels, "Panel").map_err(to_js)?;
            let dots = html_elements(dots, "Dot").map_err(to_js)?;
            apply_view(&self.inner.view(), track, &panels, &dots, previous, next).map_err(to_js)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Carousel, NavDirection, Slide};

    fn four() -> Carousel<&'static str> {
        Carousel::new(vec![
            Slide::new("<Slide1 />", "slide1"),
            Slide::new("<Slide2 />", "slide2"),
            Slide::new("<Slide3 />", "slide3"),
            Slide::new("<Slide4 />", "slide4"),
        ])
    }

    #[test]
    fn test_button_labels() {
        let mut carousel = four();
        carousel.go_next();
        let view = carousel.view();

        let previous = view.previous.unwrap();
        assert_eq!(previous.direction, NavDirection::Previous);
        assert_eq!(previous.label, "slide1");

        let next = view.next.unwrap();
        assert_eq!(next.direction, NavDirection::Next);
        assert_eq!(next.label, "slide3");
    }

    #[test]
    fn test_buttons_hidden_at_boundaries() {
        let mut carousel = four();
        let view = carousel.view();
        assert!(view.previous.is_none());
        assert_eq!(view.next.unwrap().label, "slide2");

        for _ in 0..3 {
            carousel.go_next();
        }
        let view = carousel.view();
        assert_eq!(view.previous.unwrap().label, "slide3");
        assert!(view.next.is_none());
    }

    #[test]
    fn test_panel_scales() {
        let mut carousel = four();
        carousel.go_next();
        carousel.go_next();
        let view = carousel.view();

        assert_eq!(view.panels.len(), 4);
        let scales: Vec<f64> = view.panels.iter().map(|p| p.scale).collect();
        assert_eq!(scales, vec![0.85, 0.85, 0.95, 0.85]);
        assert!(view.panels[2].active);
        assert_eq!(view.panels[2].css_transform(), "scale(0.95)");

        let active: Vec<bool> = view.dots.iter().map(|d| d.active).collect();
        assert_eq!(active, vec![false, false, true, false]);
    }

    #[test]
    fn test_track_view() {
        let mut carousel = four();
        carousel.go_next();
        carousel.go_next();
        let view = carousel.view();
        assert_eq!(view.track.translate_percent, -200.0);
        assert_eq!(view.track.drag_offset, 0.0);
        assert!(!view.track.dragging);
        assert_eq!(view.track.css_transform(), "translateX(-200%)");
        assert_eq!(view.track.spring.stiffness, 400.0);

        carousel.drag_to(-30.0);
        let track = carousel.view().track;
        assert!(track.dragging);
        assert_eq!(track.css_transform(), "translateX(calc(-200% + -30px))");
    }

    #[test]
    fn test_single_slide_view() {
        let carousel = Carousel::new(vec![Slide::new("<Only />", "only")]);
        let view = carousel.view();
        assert!(view.previous.is_none());
        assert!(view.next.is_none());
        assert_eq!(view.panels.len(), 1);
        assert!(view.panels[0].active);
        assert_eq!(view.panels[0].scale, 0.95);
        assert_eq!(view.dots.len(), 1);
        assert!(view.dots[0].active);
        assert_eq!(view.track.css_transform(), "translateX(0%)");
    }

    #[test]
    fn test_data_active_attributes() {
        let mut carousel = four();
        carousel.go_next();
        let view = carousel.view();

        let panels: Vec<&str> = view.panels.iter().map(|p| p.data_active()).collect();
        assert_eq!(panels, vec!["false", "true", "false", "false"]);
        let dots: Vec<&str> = view.dots.iter().map(|d| d.data_active()).collect();
        assert_eq!(dots, panels);
    }

    #[test]
    fn test_empty_view() {
        let carousel: Carousel<()> = Carousel::new(Vec::new());
        let view = carousel.view();
        assert!(view.panels.is_empty());
        assert!(view.dots.is_empty());
        assert!(view.previous.is_none());
        assert!(view.next.is_none());
        assert_eq!(view.track.css_transform(), "translateX(0%)");
    }
}
