//! Player control widget: mirrors one media handle into [`PlayerStatus`] and
//! forwards user controls to it.
//!
//! Every handle lifetime gets a generation number. Anything tagged with an
//! older generation (late notifications, poll ticks, timeouts, handles that
//! finished loading after the playlist changed) is dropped on the floor.

use tracing::{debug, info, warn};

use super::{
    thumbnail_url, FailureReason, HandleEvent, MediaHandle, PendingTransition, PlaybackState,
    PlayerStatus, PlaylistId, WidgetPhase,
};

pub type Generation = u64;

pub struct PlayerWidget<H: MediaHandle> {
    phase: WidgetPhase,
    status: PlayerStatus,
    handle: Option<H>,
    playlist: PlaylistId,
    generation: Generation,
    default_volume: u8,
}

impl<H: MediaHandle> PlayerWidget<H> {
    pub fn new(default_volume: u8) -> Self {
        Self {
            phase: WidgetPhase::Uninitialized,
            status: PlayerStatus::with_volume(default_volume),
            handle: None,
            playlist: PlaylistId::default(),
            generation: 0,
            default_volume: default_volume.min(100),
        }
    }

    pub fn phase(&self) -> &WidgetPhase {
        &self.phase
    }

    pub fn status(&self) -> &PlayerStatus {
        &self.status
    }

    #[cfg(test)]
    pub fn playlist(&self) -> &PlaylistId {
        &self.playlist
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[cfg(test)]
    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether a poll tick for `generation` would read from the handle.
    pub fn should_poll(&self, generation: Generation) -> bool {
        generation == self.generation
            && self.status.is_playing
            && self.handle.is_some()
            && self.phase.accepts_commands()
    }

    /// Whether a handle built for `generation` would still be adopted.
    pub fn awaits_handle(&self, generation: Generation) -> bool {
        generation == self.generation
            && self.phase == WidgetPhase::Uninitialized
            && self.handle.is_none()
    }

    /// Start over for `playlist`: the current handle is destroyed and the
    /// status goes back to defaults. Returns the generation the caller must
    /// tag the replacement handle and its timers with.
    pub fn reset(&mut self, playlist: PlaylistId) -> Generation {
        if self.phase == WidgetPhase::Closed {
            debug!("reset ignored, widget closed");
            return self.generation;
        }
        self.release_handle();
        self.generation += 1;
        self.status = PlayerStatus::with_volume(self.default_volume);
        self.phase = WidgetPhase::Uninitialized;
        info!(playlist = %playlist, generation = self.generation, "player reset");
        self.playlist = playlist;
        self.generation
    }

    /// Adopt a freshly created handle. A handle created for an older
    /// generation is destroyed immediately and `false` is returned.
    pub fn attach(&mut self, generation: Generation, handle: H) -> bool {
        if generation != self.generation || self.phase != WidgetPhase::Uninitialized {
            debug!(generation, current = self.generation, "discarding stale player handle");
            handle.destroy();
            return false;
        }
        self.release_handle();
        self.handle = Some(handle);
        true
    }

    /// Give up on the current generation before it reached ready.
    pub fn fail(&mut self, generation: Generation, reason: FailureReason) {
        if generation != self.generation || self.phase != WidgetPhase::Uninitialized {
            return;
        }
        warn!(playlist = %self.playlist, ?reason, "player failed to initialize");
        self.release_handle();
        self.phase = WidgetPhase::Failed(reason);
    }

    /// Called when the bounded wait for the ready notification runs out.
    pub fn expire_ready_wait(&mut self, generation: Generation) {
        if self.playlist.is_empty() {
            return;
        }
        self.fail(generation, FailureReason::ReadyTimeout);
    }

    pub fn handle_event(&mut self, generation: Generation, event: HandleEvent) {
        if generation != self.generation || self.handle.is_none() {
            debug!(?event, generation, "ignoring notification from stale handle");
            return;
        }

        match event {
            HandleEvent::Ready => {
                if self.phase != WidgetPhase::Uninitialized {
                    return;
                }
                self.phase = WidgetPhase::Ready;
                if let Some(handle) = self.handle.as_ref() {
                    handle.set_volume(self.status.volume);
                }
                self.refresh_metadata();
                info!(playlist = %self.playlist, "player ready");
            }
            HandleEvent::StateChange(state) => {
                if !self.phase.accepts_commands() {
                    return;
                }
                match state {
                    PlaybackState::Playing => {
                        self.status.is_playing = true;
                        self.status.pending = None;
                        self.phase = WidgetPhase::Playing;
                        self.refresh_metadata();
                    }
                    PlaybackState::Paused | PlaybackState::Ended => {
                        self.status.is_playing = false;
                        self.status.pending = None;
                        self.phase = WidgetPhase::Paused;
                    }
                    PlaybackState::Unstarted | PlaybackState::Buffering | PlaybackState::Cued => {}
                }
            }
            HandleEvent::Error(code) => {
                if self.phase == WidgetPhase::Uninitialized {
                    self.fail(generation, FailureReason::PlayerError(code));
                } else {
                    warn!(code, playlist = %self.playlist, "player reported an error");
                }
            }
        }
    }

    pub fn toggle_play_pause(&mut self) {
        let Some((handle, status)) = self.controls() else {
            return;
        };
        if status.is_playing {
            handle.pause();
            status.pending = Some(PendingTransition::ToPaused);
        } else {
            handle.play();
            status.pending = Some(PendingTransition::ToPlaying);
        }
        status.is_playing = !status.is_playing;
    }

    pub fn next(&mut self) {
        let Some((handle, _)) = self.controls() else {
            return;
        };
        handle.next_track();
        self.refresh_metadata();
    }

    pub fn previous(&mut self) {
        let Some((handle, _)) = self.controls() else {
            return;
        };
        handle.previous_track();
        self.refresh_metadata();
    }

    /// Apply a volume, clamped into `0..=100`. Returns the applied value.
    pub fn set_volume(&mut self, volume: i32) -> Option<u8> {
        let (handle, status) = self.controls()?;
        let volume = volume.clamp(0, 100) as u8;
        handle.set_volume(volume);
        status.volume = volume;
        Some(volume)
    }

    /// Seek within the current track. Returns the position actually requested.
    /// The upper bound is left to the handle; the local duration can lag
    /// behind a track change while polling is suspended.
    pub fn seek(&mut self, seconds: f64) -> Option<f64> {
        if !seconds.is_finite() {
            return None;
        }
        let (handle, status) = self.controls()?;
        let target = seconds.max(0.0);
        handle.seek_to(target);
        status.current_time = target;
        Some(target)
    }

    pub fn toggle_shuffle(&mut self) {
        let Some((handle, status)) = self.controls() else {
            return;
        };
        let shuffled = !status.is_shuffled;
        handle.set_shuffle(shuffled);
        status.is_shuffled = shuffled;
    }

    pub fn toggle_mute(&mut self) {
        let Some((handle, status)) = self.controls() else {
            return;
        };
        if status.volume > 0 {
            status.previous_volume = status.volume;
            status.volume = 0;
        } else {
            status.volume = status.previous_volume;
        }
        handle.set_volume(status.volume);
    }

    /// One polling tick: refresh position and length while playing.
    /// Returns `false` without touching the handle otherwise.
    pub fn poll(&mut self, generation: Generation) -> bool {
        if !self.should_poll(generation) {
            return false;
        }
        let Some((handle, status)) = self.controls() else {
            return false;
        };
        status.current_time = handle.current_time().max(0.0);
        status.duration = handle.duration().max(0.0);
        true
    }

    /// Release the handle for good. Later calls of any kind are no-ops.
    pub fn teardown(&mut self) {
        if self.phase == WidgetPhase::Closed {
            return;
        }
        self.release_handle();
        self.generation += 1;
        self.status.is_playing = false;
        self.status.pending = None;
        self.phase = WidgetPhase::Closed;
        info!("player torn down");
    }

    fn controls(&mut self) -> Option<(&H, &mut PlayerStatus)> {
        if !self.phase.accepts_commands() {
            debug!(phase = ?self.phase, "control ignored, player not ready");
            return None;
        }
        let status = &mut self.status;
        self.handle.as_ref().map(move |handle| (handle, status))
    }

    fn refresh_metadata(&mut self) {
        let Some(handle) = self.handle.as_ref() else {
            return;
        };
        let track = handle.track_metadata();
        self.status.duration = handle.duration().max(0.0);
        self.status.thumbnail_url = thumbnail_url(&track.track_id);
        self.status.title = track.title;
        self.status.artist = track.author;
    }

    fn release_handle(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{TrackMetadata, DEFAULT_VOLUME};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Play,
        Pause,
        Next,
        Previous,
        Seek(f64),
        Volume(u8),
        Shuffle(bool),
        CurrentTime,
        Duration,
        Metadata,
        Destroy,
    }

    #[derive(Clone, Default)]
    struct MockHandle {
        calls: Rc<RefCell<Vec<Call>>>,
        track: Rc<RefCell<TrackMetadata>>,
        position: f64,
        length: Rc<Cell<f64>>,
    }

    impl MockHandle {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn clear(&self) {
            self.calls.borrow_mut().clear();
        }

        fn set_length(&self, seconds: f64) {
            self.length.set(seconds);
        }

        fn count(&self, call: &Call) -> usize {
            self.calls.borrow().iter().filter(|c| *c == call).count()
        }

        fn load_track(&self, title: &str, author: &str, id: &str) {
            *self.track.borrow_mut() = TrackMetadata {
                title: title.to_string(),
                author: author.to_string(),
                track_id: id.to_string(),
            };
        }
    }

    impl MediaHandle for MockHandle {
        fn play(&self) {
            self.calls.borrow_mut().push(Call::Play);
        }
        fn pause(&self) {
            self.calls.borrow_mut().push(Call::Pause);
        }
        fn next_track(&self) {
            self.calls.borrow_mut().push(Call::Next);
        }
        fn previous_track(&self) {
            self.calls.borrow_mut().push(Call::Previous);
        }
        fn seek_to(&self, seconds: f64) {
            self.calls.borrow_mut().push(Call::Seek(seconds));
        }
        fn set_volume(&self, volume: u8) {
            self.calls.borrow_mut().push(Call::Volume(volume));
        }
        fn set_shuffle(&self, enabled: bool) {
            self.calls.borrow_mut().push(Call::Shuffle(enabled));
        }
        fn current_time(&self) -> f64 {
            self.calls.borrow_mut().push(Call::CurrentTime);
            self.position
        }
        fn duration(&self) -> f64 {
            self.calls.borrow_mut().push(Call::Duration);
            self.length.get()
        }
        fn track_metadata(&self) -> TrackMetadata {
            self.calls.borrow_mut().push(Call::Metadata);
            self.track.borrow().clone()
        }
        fn destroy(self) {
            self.calls.borrow_mut().push(Call::Destroy);
        }
    }

    fn ready_widget(handle: &MockHandle) -> (PlayerWidget<MockHandle>, Generation) {
        let mut widget = PlayerWidget::new(DEFAULT_VOLUME);
        let generation = widget.reset(PlaylistId::new("PL123"));
        assert!(widget.attach(generation, handle.clone()));
        widget.handle_event(generation, HandleEvent::Ready);
        handle.clear();
        (widget, generation)
    }

    #[test]
    fn ready_applies_volume_and_loads_metadata() {
        let handle = MockHandle::default();
        handle.load_track("Song", "Band", "vid42");
        let mut widget = PlayerWidget::new(35);
        let generation = widget.reset(PlaylistId::new("PL123"));
        widget.attach(generation, handle.clone());

        widget.handle_event(generation, HandleEvent::Ready);

        assert_eq!(widget.phase(), &WidgetPhase::Ready);
        assert_eq!(
            handle.calls(),
            vec![Call::Volume(35), Call::Metadata, Call::Duration]
        );
        assert_eq!(widget.status().title, "Song");
        assert_eq!(widget.status().artist, "Band");
        assert_eq!(
            widget.status().thumbnail_url,
            "https://img.youtube.com/vi/vid42/0.jpg"
        );
    }

    #[test]
    fn controls_before_ready_do_nothing() {
        let handle = MockHandle::default();
        let mut widget = PlayerWidget::new(DEFAULT_VOLUME);
        let generation = widget.reset(PlaylistId::new("PL123"));
        widget.attach(generation, handle.clone());

        widget.toggle_play_pause();
        widget.next();
        widget.toggle_shuffle();
        widget.toggle_mute();
        assert_eq!(widget.set_volume(10), None);
        assert_eq!(widget.seek(3.0), None);

        assert!(handle.calls().is_empty());
        assert_eq!(widget.status(), &PlayerStatus::default());
    }

    #[test]
    fn controls_without_handle_do_nothing() {
        let mut widget: PlayerWidget<MockHandle> = PlayerWidget::new(DEFAULT_VOLUME);
        widget.toggle_play_pause();
        widget.toggle_mute();
        assert!(!widget.status().is_playing);
        assert_eq!(widget.status().volume, DEFAULT_VOLUME);
    }

    #[test]
    fn mute_round_trip_restores_volume() {
        for volume in [1, 37, 100] {
            let handle = MockHandle::default();
            let (mut widget, _) = ready_widget(&handle);
            widget.set_volume(volume);

            widget.toggle_mute();
            assert_eq!(widget.status().volume, 0);
            assert!(widget.status().is_muted());
            widget.toggle_mute();

            assert_eq!(i32::from(widget.status().volume), volume);
            assert_eq!(
                handle.calls().last(),
                Some(&Call::Volume(volume as u8))
            );
        }
    }

    #[test]
    fn set_volume_clamps_and_keeps_previous_volume() {
        let handle = MockHandle::default();
        let (mut widget, _) = ready_widget(&handle);

        assert_eq!(widget.set_volume(250), Some(100));
        assert_eq!(widget.set_volume(-5), Some(0));
        assert_eq!(widget.status().previous_volume, DEFAULT_VOLUME);
        assert_eq!(handle.calls(), vec![Call::Volume(100), Call::Volume(0)]);

        // Unmuting after a manual zero restores the last recorded volume.
        widget.toggle_mute();
        assert_eq!(widget.status().volume, DEFAULT_VOLUME);
    }

    #[test]
    fn notifications_drive_playing_flag_and_polling() {
        let handle = MockHandle {
            position: 12.5,
            ..MockHandle::default()
        };
        handle.set_length(200.0);
        let (mut widget, generation) = ready_widget(&handle);

        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Playing));
        assert!(widget.status().is_playing);
        assert_eq!(widget.phase(), &WidgetPhase::Playing);
        assert!(widget.poll(generation));
        assert_eq!(widget.status().current_time, 12.5);
        assert_eq!(widget.status().duration, 200.0);

        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Paused));
        assert!(!widget.status().is_playing);
        handle.clear();
        assert!(!widget.poll(generation));
        assert!(!widget.poll(generation));
        assert_eq!(handle.count(&Call::CurrentTime), 0);
        assert_eq!(handle.count(&Call::Duration), 0);
    }

    #[test]
    fn ended_counts_as_paused() {
        let handle = MockHandle::default();
        let (mut widget, generation) = ready_widget(&handle);
        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Playing));
        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Ended));
        assert!(!widget.status().is_playing);
        assert_eq!(widget.phase(), &WidgetPhase::Paused);
    }

    #[test]
    fn buffering_does_not_change_playing_flag() {
        let handle = MockHandle::default();
        let (mut widget, generation) = ready_widget(&handle);
        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Playing));
        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Buffering));
        assert!(widget.status().is_playing);
    }

    #[test]
    fn playing_notification_refreshes_track_after_autoplay() {
        let handle = MockHandle::default();
        let (mut widget, generation) = ready_widget(&handle);
        handle.load_track("Second", "Other Band", "vid2");

        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Playing));

        assert_eq!(widget.status().title, "Second");
        assert_eq!(widget.status().artist, "Other Band");
    }

    #[test]
    fn toggle_play_pause_is_optimistic_until_confirmed() {
        let handle = MockHandle::default();
        let (mut widget, generation) = ready_widget(&handle);

        widget.toggle_play_pause();
        assert_eq!(handle.calls(), vec![Call::Play]);
        assert!(widget.status().is_playing);
        assert_eq!(widget.status().pending, Some(PendingTransition::ToPlaying));

        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Playing));
        assert_eq!(widget.status().pending, None);

        widget.toggle_play_pause();
        assert_eq!(handle.calls().last(), Some(&Call::Pause));
        assert_eq!(widget.status().pending, Some(PendingTransition::ToPaused));

        // A late "playing" from before the pause wins until the player reports again.
        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Playing));
        assert!(widget.status().is_playing);
        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Paused));
        assert!(!widget.status().is_playing);
        assert_eq!(widget.status().pending, None);
    }

    #[test]
    fn skipping_refreshes_metadata_immediately() {
        let handle = MockHandle::default();
        let (mut widget, _) = ready_widget(&handle);
        handle.load_track("Next One", "Band", "vid9");

        widget.next();
        assert_eq!(handle.calls(), vec![Call::Next, Call::Metadata, Call::Duration]);
        assert_eq!(widget.status().title, "Next One");

        handle.load_track("First One", "Band", "vid1");
        widget.previous();
        assert_eq!(widget.status().title, "First One");
        assert_eq!(handle.count(&Call::Previous), 1);
    }

    #[test]
    fn seek_mirrors_position_and_leaves_upper_bound_to_handle() {
        let handle = MockHandle::default();
        handle.set_length(180.0);
        let (mut widget, generation) = ready_widget(&handle);
        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Playing));
        widget.poll(generation);

        assert_eq!(widget.seek(42.0), Some(42.0));
        assert_eq!(widget.status().current_time, 42.0);
        assert_eq!(widget.seek(999.0), Some(999.0));
        assert_eq!(widget.seek(-1.0), Some(0.0));
        assert_eq!(widget.seek(f64::NAN), None);
        assert_eq!(widget.seek(f64::INFINITY), None);
        assert_eq!(
            handle.calls().last(),
            Some(&Call::Seek(0.0)),
            "rejected seeks never reach the handle"
        );
        assert_eq!(handle.count(&Call::Seek(999.0)), 1);
    }

    #[test]
    fn seek_after_skipping_while_paused_uses_new_track_length() {
        let handle = MockHandle::default();
        handle.set_length(100.0);
        let (mut widget, generation) = ready_widget(&handle);
        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Playing));
        widget.poll(generation);
        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Paused));
        assert_eq!(widget.status().duration, 100.0);

        handle.set_length(300.0);
        widget.next();
        assert_eq!(widget.status().duration, 300.0);

        assert_eq!(widget.seek(150.0), Some(150.0));
        assert_eq!(handle.calls().last(), Some(&Call::Seek(150.0)));
    }

    #[test]
    fn shuffle_twice_alternates() {
        let handle = MockHandle::default();
        let (mut widget, _) = ready_widget(&handle);
        let original = widget.status().is_shuffled;

        widget.toggle_shuffle();
        assert_eq!(widget.status().is_shuffled, !original);
        widget.toggle_shuffle();

        assert_eq!(widget.status().is_shuffled, original);
        assert_eq!(
            handle.calls(),
            vec![Call::Shuffle(!original), Call::Shuffle(original)]
        );
    }

    #[test]
    fn changing_playlist_destroys_once_and_resets_status() {
        let first = MockHandle {
            position: 30.0,
            ..MockHandle::default()
        };
        first.set_length(100.0);
        first.load_track("Song", "Band", "vid1");
        let (mut widget, generation) = ready_widget(&first);
        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Playing));
        widget.poll(generation);

        let next_generation = widget.reset(PlaylistId::new("PL456"));

        assert_eq!(first.count(&Call::Destroy), 1);
        assert_ne!(next_generation, generation);
        assert_eq!(widget.playlist().as_str(), "PL456");
        assert_eq!(widget.phase(), &WidgetPhase::Uninitialized);
        assert!(!widget.status().is_playing);
        assert_eq!(widget.status().current_time, 0.0);
        assert_eq!(widget.status().title, "");
        assert!(!widget.has_handle());

        let second = MockHandle::default();
        assert!(widget.attach(next_generation, second.clone()));
        widget.reset(PlaylistId::new("PL789"));
        assert_eq!(first.count(&Call::Destroy), 1);
        assert_eq!(second.count(&Call::Destroy), 1);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let old = MockHandle::default();
        let (mut widget, old_generation) = ready_widget(&old);
        let generation = widget.reset(PlaylistId::new("PL456"));

        let late = MockHandle::default();
        assert!(!widget.attach(old_generation, late.clone()));
        assert_eq!(late.calls(), vec![Call::Destroy]);

        let current = MockHandle::default();
        widget.attach(generation, current.clone());
        widget.handle_event(old_generation, HandleEvent::Ready);
        assert_eq!(widget.phase(), &WidgetPhase::Uninitialized);

        widget.handle_event(generation, HandleEvent::Ready);
        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Playing));
        current.clear();
        assert!(!widget.poll(old_generation));
        assert!(current.calls().is_empty());
    }

    #[test]
    fn superseded_generation_no_longer_awaits_handle() {
        let mut widget = PlayerWidget::<MockHandle>::new(DEFAULT_VOLUME);
        let first = widget.reset(PlaylistId::new("PL123"));
        assert!(widget.awaits_handle(first));

        let second = widget.reset(PlaylistId::new("PL456"));
        assert!(!widget.awaits_handle(first));
        assert!(widget.awaits_handle(second));

        let handle = MockHandle::default();
        widget.attach(second, handle);
        assert!(!widget.awaits_handle(second));

        let third = widget.reset(PlaylistId::new("PL789"));
        widget.teardown();
        assert!(!widget.awaits_handle(third));
        assert!(!widget.awaits_handle(widget.generation()));
    }

    #[test]
    fn ready_timeout_fails_only_while_waiting() {
        let handle = MockHandle::default();
        let mut widget = PlayerWidget::new(DEFAULT_VOLUME);
        let generation = widget.reset(PlaylistId::new("PL123"));
        widget.attach(generation, handle.clone());

        widget.expire_ready_wait(generation);

        assert_eq!(
            widget.phase(),
            &WidgetPhase::Failed(FailureReason::ReadyTimeout)
        );
        assert_eq!(handle.calls(), vec![Call::Destroy]);

        // Retrying is a reset for the same playlist.
        let retry = widget.reset(widget.playlist().clone());
        let fresh = MockHandle::default();
        widget.attach(retry, fresh.clone());
        widget.handle_event(retry, HandleEvent::Ready);
        widget.expire_ready_wait(retry);
        assert_eq!(widget.phase(), &WidgetPhase::Ready);
        assert_eq!(fresh.count(&Call::Destroy), 0);
    }

    #[test]
    fn empty_playlist_never_times_out() {
        let mut widget: PlayerWidget<MockHandle> = PlayerWidget::new(DEFAULT_VOLUME);
        let generation = widget.reset(PlaylistId::default());
        widget.expire_ready_wait(generation);
        assert_eq!(widget.phase(), &WidgetPhase::Uninitialized);
    }

    #[test]
    fn player_error_before_ready_fails() {
        let handle = MockHandle::default();
        let mut widget = PlayerWidget::new(DEFAULT_VOLUME);
        let generation = widget.reset(PlaylistId::new("bogus"));
        widget.attach(generation, handle.clone());

        widget.handle_event(generation, HandleEvent::Error(2));

        assert_eq!(
            widget.phase(),
            &WidgetPhase::Failed(FailureReason::PlayerError(2))
        );
        assert!(!widget.has_handle());
    }

    #[test]
    fn teardown_is_terminal() {
        let handle = MockHandle::default();
        let (mut widget, generation) = ready_widget(&handle);
        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Playing));

        widget.teardown();
        widget.teardown();

        assert_eq!(widget.phase(), &WidgetPhase::Closed);
        assert_eq!(handle.count(&Call::Destroy), 1);
        handle.clear();

        widget.handle_event(generation, HandleEvent::StateChange(PlaybackState::Playing));
        widget.toggle_play_pause();
        assert!(!widget.poll(generation));
        widget.reset(PlaylistId::new("PL456"));
        assert!(handle.calls().is_empty());
        assert_eq!(widget.phase(), &WidgetPhase::Closed);
    }
}
