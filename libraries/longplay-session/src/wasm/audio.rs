//! `<audio>` element adapter

use longplay_core::{AudioElement, LongplayError, Result};
use wasm_bindgen::JsValue;
use web_sys::HtmlMediaElement;

/// [`AudioElement`] backed by a DOM media element
pub struct MediaElementAudio {
    element: HtmlMediaElement,
}

impl MediaElementAudio {
    pub fn new(element: HtmlMediaElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlMediaElement {
        &self.element
    }
}

impl AudioElement for MediaElementAudio {
    fn set_source(&mut self, source: &str) -> Result<()> {
        self.element.set_src(source);
        self.element.set_current_time(0.0);
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        // The returned promise rejects asynchronously (autoplay policy); only
        // synchronous failures surface here
        self.element.play().map(drop).map_err(js_error)
    }

    fn pause(&mut self) {
        self.element.pause().ok();
    }

    fn seek(&mut self, time: f64) -> Result<()> {
        self.element.set_current_time(time);
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn duration(&self) -> f64 {
        self.element.duration()
    }
}

fn js_error(value: JsValue) -> LongplayError {
    LongplayError::audio(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
