//! Test helpers: a scriptable media adapter and track fixtures

// Shared between test binaries; not every binary uses every helper.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::BoxFuture;
use tokio::sync::broadcast;

use lithium_player::{AdapterEvent, MediaAdapter, Track};

/// How the fake adapter reacts to a source assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadScript {
    /// Emit `CanPlay` as soon as a source is assigned.
    Ready,
    /// Emit `Error` instead of readiness.
    Fail,
    /// Emit nothing; the load hangs until events are emitted manually.
    Silent,
}

/// Scriptable in-memory media adapter recording every interaction.
pub struct FakeAdapter {
    script: Mutex<LoadScript>,
    events: broadcast::Sender<AdapterEvent>,
    pub sources: Mutex<Vec<String>>,
    pub play_calls: AtomicUsize,
    pub pause_calls: AtomicUsize,
}

impl FakeAdapter {
    pub fn new(script: LoadScript) -> Self {
        let (events, _) = broadcast::channel(32);
        Self {
            script: Mutex::new(script),
            events,
            sources: Mutex::new(Vec::new()),
            play_calls: AtomicUsize::new(0),
            pause_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_script(&self, script: LoadScript) {
        *self.script.lock().unwrap() = script;
    }

    /// Emit a lifecycle event to every live subscriber.
    pub fn emit(&self, event: AdapterEvent) {
        // Send fails only when no receiver is subscribed, which some tests
        // deliberately arrange.
        let _ = self.events.send(event);
    }

    pub fn last_source(&self) -> Option<String> {
        self.sources.lock().unwrap().last().cloned()
    }

    pub fn play_count(&self) -> usize {
        self.play_calls.load(Ordering::SeqCst)
    }

    pub fn pause_count(&self) -> usize {
        self.pause_calls.load(Ordering::SeqCst)
    }
}

impl MediaAdapter for FakeAdapter {
    fn set_source(&self, url: &str) {
        self.sources.lock().unwrap().push(url.to_string());
        match *self.script.lock().unwrap() {
            LoadScript::Ready => self.emit(AdapterEvent::CanPlay),
            LoadScript::Fail => self.emit(AdapterEvent::Error("decode failed".to_string())),
            LoadScript::Silent => {}
        }
    }

    fn play(&self) -> BoxFuture<'_, anyhow::Result<()>> {
        self.play_calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async { Ok(()) })
    }

    fn pause(&self) {
        self.pause_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn subscribe(&self) -> broadcast::Receiver<AdapterEvent> {
        self.events.subscribe()
    }
}

pub fn track(id: i64) -> Track {
    Track {
        id,
        title: format!("Track {id}"),
        artist: "Test Artist".to_string(),
        album: "Test Album".to_string(),
        album_art: format!("/art/{id}.jpg"),
        lyrics: None,
    }
}
