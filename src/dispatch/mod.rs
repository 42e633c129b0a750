//! Typing dispatcher
//!
//! Per-request pipeline: resolve each character on the layout, expand its
//! modifiers, write the events to the shared sink.
//! - `type_text`: whole text at full speed
//! - `stream_text`: word by word with character and word delays
//! - `send_key`: one raw key, optionally with a modifier held
//!
//! Unsupported characters are skipped and reported, never fatal.
//! Sink failures, unknown layouts and cancellation abort the request.

mod cancel;
pub mod expand;

use std::sync::{Arc, MutexGuard};
use std::time::Duration;

use log::{debug, info, warn};
use thiserror::Error;

use crate::device::{EventSink, SharedSink, SinkError};
use crate::input::{KeyCode, RawModifier};
use crate::layouts::{Layout, LayoutError, Registry};

pub use cancel::Cancellation;
pub use expand::{emit_mapping, emit_sequence};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("unknown modifier {0:?} (expected shift, ctrl, alt or altgr)")]
    UnknownModifier(String),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("request cancelled")]
    Cancelled,

    #[error("request timed out")]
    TimedOut,
}

/// Outcome of a completed type/stream request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Characters sent to the device
    pub typed: usize,
    /// Characters the layout cannot produce, in input order
    pub skipped: Vec<char>,
}

impl DispatchReport {
    pub fn summary(&self) -> String {
        if self.skipped.is_empty() {
            format!("typed {} characters", self.typed)
        } else {
            let skipped: String = self.skipped.iter().collect();
            format!(
                "typed {} characters, skipped {} unsupported: {:?}",
                self.typed,
                self.skipped.len(),
                skipped
            )
        }
    }
}

/// Values used when a request leaves them unset
#[derive(Debug, Clone)]
pub struct Defaults {
    pub layout: String,
    pub char_delay: Duration,
    pub word_delay: Duration,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            layout: crate::layouts::registry::DEFAULT_LAYOUT.to_string(),
            char_delay: Duration::from_millis(10),
            word_delay: Duration::from_millis(50),
        }
    }
}

#[derive(Clone)]
pub struct Dispatcher {
    sink: SharedSink,
    registry: Arc<Registry>,
    defaults: Defaults,
}

impl Dispatcher {
    pub fn new(sink: SharedSink, registry: Arc<Registry>, defaults: Defaults) -> Self {
        Self {
            sink,
            registry,
            defaults,
        }
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Requested layout, or the configured default when unset or empty
    pub fn layout(&self, name: Option<&str>) -> Result<Arc<Layout>, DispatchError> {
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.defaults.layout);
        Ok(self.registry.get(name)?)
    }

    /// Type `text` without delays
    pub async fn type_text(
        &self,
        text: &str,
        layout: Option<&str>,
        cancel: &Cancellation,
    ) -> Result<DispatchReport, DispatchError> {
        let layout = self.layout(layout)?;
        let mut report = DispatchReport::default();

        for ch in text.chars() {
            cancel.check()?;
            self.type_char(&layout, ch, &mut report)?;
            // Let other requests take the sink between characters
            tokio::task::yield_now().await;
        }

        info!("type ({}): {}", layout.name(), report.summary());
        Ok(report)
    }

    /// Type `text` word by word
    ///
    /// Delays of 0 fall back to the configured defaults. The character delay
    /// follows every character sent, the word delay every inter-word space.
    pub async fn stream_text(
        &self,
        text: &str,
        layout: Option<&str>,
        char_delay_ms: u64,
        word_delay_ms: u64,
        cancel: &Cancellation,
    ) -> Result<DispatchReport, DispatchError> {
        let layout = self.layout(layout)?;
        let char_delay = or_default(char_delay_ms, self.defaults.char_delay);
        let word_delay = or_default(word_delay_ms, self.defaults.word_delay);
        debug!(
            "stream ({}): char delay {:?}, word delay {:?}",
            layout.name(),
            char_delay,
            word_delay
        );

        let words: Vec<&str> = text.split_whitespace().collect();
        let mut report = DispatchReport::default();

        for (i, word) in words.iter().enumerate() {
            for ch in word.chars() {
                cancel.check()?;
                if self.type_char(&layout, ch, &mut report)? {
                    pause(cancel, char_delay).await?;
                }
            }

            if i + 1 < words.len() {
                cancel.check()?;
                self.type_char(&layout, ' ', &mut report)?;
                pause(cancel, word_delay).await?;
            }
        }

        info!("stream ({}): {}", layout.name(), report.summary());
        Ok(report)
    }

    /// Press one raw key, holding `modifier` ("" for none)
    pub fn send_key(&self, keycode: KeyCode, modifier: &str) -> Result<(), DispatchError> {
        let held = RawModifier::parse(modifier)
            .ok_or_else(|| DispatchError::UnknownModifier(modifier.to_string()))?;

        let mut sink = self.lock_sink();
        match held.keycode() {
            None => sink.send_key(keycode)?,
            Some(modifier_key) => sink.send_key_with_modifier(modifier_key, keycode)?,
        }
        info!("key {} (modifier {:?})", keycode, held);
        Ok(())
    }

    /// Resolve and emit one character; false if it was skipped
    fn type_char(
        &self,
        layout: &Layout,
        ch: char,
        report: &mut DispatchReport,
    ) -> Result<bool, DispatchError> {
        let sequence = match layout.resolve_char(ch) {
            Ok(sequence) => sequence,
            Err(e) => {
                warn!("Skipping {}", e);
                report.skipped.push(ch);
                return Ok(false);
            }
        };

        // Held for the whole sequence so dead key and base stay together
        let mut sink = self.lock_sink();
        emit_sequence(&mut *sink, &sequence)?;
        report.typed += 1;
        Ok(true)
    }

    fn lock_sink(&self) -> MutexGuard<'_, dyn EventSink + Send + 'static> {
        // A panic mid-sequence leaves nothing to repair in the sink itself
        self.sink.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn or_default(ms: u64, default: Duration) -> Duration {
    if ms == 0 {
        default
    } else {
        Duration::from_millis(ms)
    }
}

async fn pause(cancel: &Cancellation, delay: Duration) -> Result<(), DispatchError> {
    if delay.is_zero() {
        tokio::task::yield_now().await;
        Ok(())
    } else {
        cancel.sleep(delay).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::testing::{transitions, EventLog, RecordingSink};
    use crate::device::shared;
    use crate::input::keycodes::*;
    use tokio::sync::watch;
    use tokio::time::Instant;

    fn no_delay() -> Defaults {
        Defaults {
            layout: "us".to_string(),
            char_delay: Duration::ZERO,
            word_delay: Duration::ZERO,
        }
    }

    fn dispatcher_with(sink: RecordingSink, defaults: Defaults) -> (Dispatcher, EventLog) {
        let log = sink.handle();
        let dispatcher = Dispatcher::new(shared(sink), Arc::new(Registry::new()), defaults);
        (dispatcher, log)
    }

    fn dispatcher() -> (Dispatcher, EventLog) {
        dispatcher_with(RecordingSink::new(), no_delay())
    }

    fn count(log: &EventLog) -> usize {
        log.lock().unwrap().len()
    }

    #[tokio::test]
    async fn test_event_count_per_modifier() {
        let (d, log) = dispatcher();
        let none = Cancellation::none();

        d.type_text("a", None, &none).await.unwrap();
        assert_eq!(count(&log), 4);
        d.type_text("A", None, &none).await.unwrap();
        assert_eq!(count(&log), 4 + 8);
        // Euro is AltGr+E on US
        d.type_text("€", None, &none).await.unwrap();
        assert_eq!(count(&log), 4 + 8 + 8);
        // Backslash is Shift+AltGr on Spanish
        d.type_text("\\", Some("es"), &none).await.unwrap();
        assert_eq!(count(&log), 4 + 8 + 8 + 12);
    }

    #[tokio::test]
    async fn test_unsupported_char_skipped() {
        let (d, log) = dispatcher();
        let report = d.type_text("café", Some("us"), &Cancellation::none()).await.unwrap();
        assert_eq!(report.typed, 3);
        assert_eq!(report.skipped, vec!['é']);
        assert_eq!(count(&log), 12);
    }

    #[tokio::test]
    async fn test_uppercase_hello() {
        let (d, log) = dispatcher();
        let report = d.type_text("HELLO", Some("us"), &Cancellation::none()).await.unwrap();
        assert_eq!(report.typed, 5);
        assert_eq!(count(&log), 40);
    }

    #[tokio::test]
    async fn test_french_dead_key_word() {
        let (d, log) = dispatcher();
        let report = d.type_text("château", Some("fr"), &Cancellation::none()).await.unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(report.typed, 7);
        // Six plain letters plus the composed â
        assert_eq!(count(&log), 6 * 4 + 8);

        let keys = transitions(&log.lock().unwrap());
        // c, h, then circumflex dead key and AZERTY 'a'
        assert_eq!(keys[4], (KEY_LEFTBRACE, true));
        assert_eq!(keys[6], (KEY_Q, true));
    }

    #[tokio::test]
    async fn test_empty_text() {
        let (d, log) = dispatcher();
        let report = d.type_text("", Some("de"), &Cancellation::none()).await.unwrap();
        assert_eq!(report, DispatchReport::default());
        assert_eq!(count(&log), 0);
    }

    #[tokio::test]
    async fn test_only_unsupported() {
        let (d, log) = dispatcher();
        let report = d.type_text("é", Some("us"), &Cancellation::none()).await.unwrap();
        assert_eq!(report.typed, 0);
        assert_eq!(report.skipped, vec!['é']);
        assert_eq!(count(&log), 0);
    }

    #[tokio::test]
    async fn test_unknown_layout() {
        let (d, log) = dispatcher();
        let err = d
            .type_text("hello", Some("nonexistent_layout"), &Cancellation::none())
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::Layout(LayoutError::NotFound { .. })));
        assert!(err.to_string().contains("nonexistent_layout"));
        assert_eq!(count(&log), 0);

        let err = d
            .stream_text("hello", Some("nonexistent_layout"), 1, 1, &Cancellation::none())
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::Layout(_)));
        assert_eq!(count(&log), 0);
    }

    #[tokio::test]
    async fn test_empty_layout_uses_default() {
        let defaults = Defaults {
            layout: "de".to_string(),
            ..no_delay()
        };
        let (d, log) = dispatcher_with(RecordingSink::new(), defaults);
        d.type_text("z", Some(""), &Cancellation::none()).await.unwrap();
        assert_eq!(transitions(&log.lock().unwrap())[0], (KEY_Y, true));
    }

    #[test]
    fn test_send_key() {
        let (d, log) = dispatcher();
        d.send_key(KEY_ENTER, "").unwrap();
        assert_eq!(count(&log), 4);
        d.send_key(KEY_C, "ctrl").unwrap();
        assert_eq!(
            transitions(&log.lock().unwrap()[4..]),
            vec![(KEY_LEFTCTRL, true), (KEY_C, true), (KEY_C, false), (KEY_LEFTCTRL, false)]
        );
    }

    #[test]
    fn test_unknown_modifier() {
        let (d, log) = dispatcher();
        let err = d.send_key(KEY_A, "bogus").unwrap_err();
        assert!(matches!(err, DispatchError::UnknownModifier(ref m) if m == "bogus"));
        assert_eq!(count(&log), 0);
    }

    #[tokio::test]
    async fn test_sink_failure_aborts() {
        let (d, log) = dispatcher_with(RecordingSink::failing_after(6), no_delay());
        let err = d.type_text("abc", None, &Cancellation::none()).await.unwrap_err();
        assert!(matches!(err, DispatchError::Sink(_)));
        assert_eq!(count(&log), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_char_delay() {
        let (d, log) = dispatcher();
        let start = Instant::now();
        let report = d
            .stream_text("hello", None, 10, 0, &Cancellation::none())
            .await
            .unwrap();
        let elapsed = start.elapsed();

        assert_eq!(report.typed, 5);
        assert_eq!(count(&log), 20);
        assert!(elapsed >= Duration::from_millis(40), "{:?}", elapsed);
        // Delay follows every character, the last one included
        assert_eq!(elapsed, Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_words() {
        let (d, log) = dispatcher();
        let start = Instant::now();
        let report = d
            .stream_text("  ab \t\n cd  ", None, 1, 30, &Cancellation::none())
            .await
            .unwrap();

        // a b <space> c d
        assert_eq!(report.typed, 5);
        assert_eq!(count(&log), 20);
        assert_eq!(transitions(&log.lock().unwrap())[4], (KEY_SPACE, true));
        assert_eq!(start.elapsed(), Duration::from_millis(4 + 30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_zero_delays_use_defaults() {
        let defaults = Defaults {
            char_delay: Duration::from_millis(5),
            word_delay: Duration::from_millis(20),
            ..no_delay()
        };
        let (d, _log) = dispatcher_with(RecordingSink::new(), defaults);
        let start = Instant::now();
        d.stream_text("a b", None, 0, 0, &Cancellation::none()).await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(5 + 20 + 5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_skip_has_no_delay() {
        let (d, log) = dispatcher();
        let start = Instant::now();
        let report = d
            .stream_text("aéb", Some("us"), 10, 0, &Cancellation::none())
            .await
            .unwrap();
        assert_eq!(report.skipped, vec!['é']);
        assert_eq!(count(&log), 8);
        assert_eq!(start.elapsed(), Duration::from_millis(20));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_shutdown_stops_promptly() {
        let (d, log) = dispatcher();
        let (tx, rx) = watch::channel(false);
        let cancel = Cancellation::new(rx);
        let start = Instant::now();

        let stopper = async {
            tokio::time::sleep(Duration::from_millis(250)).await;
            tx.send(true).unwrap();
        };
        let (result, _) = tokio::join!(d.stream_text("hello", None, 100, 0, &cancel), stopper);

        assert!(matches!(result, Err(DispatchError::Cancelled)));
        // h, e, l sent at 0, 100, 200 ms
        assert_eq!(count(&log), 12);
        assert_eq!(start.elapsed(), Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_timeout() {
        let (d, log) = dispatcher();
        let cancel = Cancellation::none().with_timeout(Duration::from_millis(150));
        let err = d.stream_text("hello", None, 100, 0, &cancel).await.unwrap_err();
        assert!(matches!(err, DispatchError::TimedOut));
        assert_eq!(count(&log), 8);
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let (d, log) = dispatcher();
        let (tx, rx) = watch::channel(false);
        tx.send(true).unwrap();
        let err = d.type_text("abc", None, &Cancellation::new(rx)).await.unwrap_err();
        assert!(matches!(err, DispatchError::Cancelled));
        assert_eq!(count(&log), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_streams_interleave_by_character() {
        let (d, log) = dispatcher();
        let other = d.clone();
        let none = Cancellation::none();

        let (a, b) = tokio::join!(
            d.stream_text("AAAA", None, 3, 0, &none),
            other.stream_text("bbbb", None, 2, 0, &none),
        );
        a.unwrap();
        b.unwrap();

        let keys = transitions(&log.lock().unwrap());
        let mut i = 0;
        while i < keys.len() {
            // Shifted 'A' is four transitions, plain 'b' two
            if keys[i].0 == KEY_LEFTSHIFT {
                assert_eq!(keys[i + 1], (KEY_A, true));
                assert_eq!(keys[i + 3], (KEY_LEFTSHIFT, false));
                i += 4;
            } else {
                assert_eq!(keys[i], (KEY_B, true));
                assert_eq!(keys[i + 1], (KEY_B, false));
                i += 2;
            }
        }
        assert_eq!(count(&log), 4 * 8 + 4 * 4);
    }
}
