/// The subset of `HTMLMediaElement` the play button drives.
pub trait MediaElement {
    fn has_source(&self) -> bool;
    /// Set the source, enable looping with `preload = "auto"` and start loading.
    fn attach_source(&self, url: &str);
    fn paused(&self) -> bool;
    fn ended(&self) -> bool;
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    fn pause(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    Play,
    Pause,
    Ended,
}

impl MediaEvent {
    pub const TYPES: [&'static str; 3] = ["play", "pause", "ended"];

    pub fn from_event_type(ty: &str) -> Option<Self> {
        match ty {
            "play" => Some(MediaEvent::Play),
            "pause" => Some(MediaEvent::Pause),
            "ended" => Some(MediaEvent::Ended),
            _ => None,
        }
    }
}

/// Cached "is the music playing" flag, driven by element events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    playing: bool,
}

impl PlaybackState {
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn on_media_event(&mut self, event: MediaEvent) {
        self.playing = matches!(event, MediaEvent::Play);
    }

    pub fn on_play_rejected(&mut self) {
        self.playing = false;
    }
}

/// Playing for real: not paused, not ended, and past the first sample.
pub fn is_genuinely_playing<M: MediaElement + ?Sized>(media: &M) -> bool {
    !media.paused() && !media.ended() && media.current_time() > 0.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Paused,
    /// The caller must call `play()` and watch the returned promise.
    PlayRequested,
}

/// Flip playback on `media`, lazily attaching `src` on first use.
pub fn toggle<M: MediaElement + ?Sized>(media: &M, src: &str) -> Toggle {
    if !media.has_source() {
        media.attach_source(src);
    }
    if is_genuinely_playing(media) {
        media.pause();
        return Toggle::Paused;
    }
    if media.current_time() == 0.0 || media.ended() {
        media.set_current_time(0.0);
    }
    Toggle::PlayRequested
}
