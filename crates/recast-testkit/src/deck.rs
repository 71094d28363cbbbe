//! Multi-record wrapper implementing the sequence capability
//!
//! [`Deck`] turns a list of per-record frames into a [`SequenceScheme`]:
//! the cursor starts before the first frame, [`next`](SequenceScheme::next)
//! advances it, and scalar lookups delegate to the current frame. It also
//! counts `next` invocations so tests can pin down exactly how often the
//! engine advances a source.

use recast_core::{ScalarScheme, SequenceScheme};

/// A sequence-capable scheme over per-record frames of any scalar scheme.
#[derive(Debug, Clone)]
pub struct Deck<S> {
    frames: Vec<S>,
    cursor: Option<usize>,
    next_calls: usize,
}

impl<S> Deck<S> {
    /// Creates a deck with no frames; its first `next` returns `false`.
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            cursor: None,
            next_calls: 0,
        }
    }

    /// Creates a deck from an ordered collection of frames.
    pub fn of(frames: impl IntoIterator<Item = S>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            cursor: None,
            next_calls: 0,
        }
    }

    /// Appends one frame. Chainable.
    pub fn with_frame(mut self, frame: S) -> Self {
        self.frames.push(frame);
        self
    }

    /// How many times [`next`](SequenceScheme::next) has been called.
    pub fn next_calls(&self) -> usize {
        self.next_calls
    }

    fn current(&self) -> Option<&S> {
        self.cursor.and_then(|index| self.frames.get(index))
    }

    fn active(&self) -> &S {
        self.current()
            .expect("deck read with no active frame; advance with next() first")
    }
}

impl<S> Default for Deck<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ScalarScheme> ScalarScheme for Deck<S> {
    type Bool = S::Bool;
    type Int = S::Int;
    type Float = S::Float;
    type Str = S::Str;
    type Error = S::Error;

    fn size(&self, key: &str) -> usize {
        self.current().map_or(0, |frame| frame.size(key))
    }

    fn has(&self, key: &str) -> bool {
        self.current().is_some_and(|frame| frame.has(key))
    }

    fn as_bool(&self, key: &str) -> Result<S::Bool, S::Error> {
        self.active().as_bool(key)
    }

    fn as_int(&self, key: &str) -> Result<S::Int, S::Error> {
        self.active().as_int(key)
    }

    fn as_float(&self, key: &str) -> Result<S::Float, S::Error> {
        self.active().as_float(key)
    }

    fn as_string(&self, key: &str) -> Result<S::Str, S::Error> {
        self.active().as_string(key)
    }

    fn as_bool_sequence<V: FnMut(S::Bool)>(&self, key: &str, visit: V) -> Result<(), S::Error> {
        self.active().as_bool_sequence(key, visit)
    }

    fn as_int_sequence<V: FnMut(S::Int)>(&self, key: &str, visit: V) -> Result<(), S::Error> {
        self.active().as_int_sequence(key, visit)
    }

    fn as_float_sequence<V: FnMut(S::Float)>(&self, key: &str, visit: V) -> Result<(), S::Error> {
        self.active().as_float_sequence(key, visit)
    }

    fn as_string_sequence<V: FnMut(S::Str)>(&self, key: &str, visit: V) -> Result<(), S::Error> {
        self.active().as_string_sequence(key, visit)
    }
}

impl<S: ScalarScheme> SequenceScheme for Deck<S> {
    fn next(&mut self) -> bool {
        self.next_calls += 1;
        let candidate = match self.cursor {
            None => 0,
            Some(index) => index + 1,
        };
        if candidate < self.frames.len() {
            self.cursor = Some(candidate);
            true
        } else {
            self.cursor = Some(self.frames.len());
            false
        }
    }
}
