use crate::constants::AUDIO_SRC;
use crate::playback::{self, MediaElement, MediaEvent, PlaybackState, Toggle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

impl MediaElement for web::HtmlAudioElement {
    fn has_source(&self) -> bool {
        !self.src().is_empty()
    }

    fn attach_source(&self, url: &str) {
        self.set_src(url);
        self.set_loop(true);
        self.set_preload("auto");
        self.load();
    }

    fn paused(&self) -> bool {
        web::HtmlMediaElement::paused(self)
    }

    fn ended(&self) -> bool {
        web::HtmlMediaElement::ended(self)
    }

    fn current_time(&self) -> f64 {
        web::HtmlMediaElement::current_time(self)
    }

    fn set_current_time(&self, seconds: f64) {
        web::HtmlMediaElement::set_current_time(self, seconds);
    }

    fn pause(&self) {
        if let Err(e) = web::HtmlMediaElement::pause(self) {
            log::error!("[audio] pause failed: {:?}", e);
        }
    }
}

/// Keep `playback` in step with the element's own play/pause/ended events.
pub fn wire_media_events(media: &web::HtmlAudioElement, playback: &Rc<RefCell<PlaybackState>>) {
    for ty in MediaEvent::TYPES {
        let Some(event) = MediaEvent::from_event_type(ty) else {
            continue;
        };
        let playback = playback.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            playback.borrow_mut().on_media_event(event);
            log::debug!("[audio] {:?}", event);
        }) as Box<dyn FnMut(_)>);
        _ = media.add_event_listener_with_callback(ty, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Toggle the gramophone. A missing element only logs.
pub fn toggle_playback(
    media: Option<&web::HtmlAudioElement>,
    playback: &Rc<RefCell<PlaybackState>>,
) {
    let Some(media) = media else {
        log::warn!("[audio] no audio element, ignoring toggle");
        return;
    };
    match playback::toggle(media, AUDIO_SRC) {
        Toggle::Paused => log::info!("[audio] paused"),
        Toggle::PlayRequested => request_play(media, playback),
    }
}

fn request_play(media: &web::HtmlAudioElement, playback: &Rc<RefCell<PlaybackState>>) {
    let promise = match media.play() {
        Ok(p) => p,
        Err(e) => {
            log::error!("[audio] play() threw: {:?}", e);
            playback.borrow_mut().on_play_rejected();
            return;
        }
    };
    let playback = playback.clone();
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::error!("[audio] playback rejected: {:?}", e);
            playback.borrow_mut().on_play_rejected();
        }
    });
}
