// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chapter tracking: compute open/close transitions from path changes.
//!
//! ## Usage
//!
//! 1) Decompose each module key with [`path_segments`](crate::path_segments)
//!    and classify its tail with
//!    [`is_story_folder_name`](crate::is_story_folder_name).
//! 2) Call [`ChapterTracker::update_path`] once per module, in discovery
//!    order, and forward the returned events to your navigation surface.
//! 3) Call [`ChapterTracker::clear`] after the last module to unwind the
//!    remaining chapters.
//!
//! ## Minimal example
//!
//! ```
//! use folio_chapters::{ChapterEvent, ChapterTracker};
//! let mut t: ChapterTracker<&str> = ChapterTracker::new();
//! assert_eq!(
//!     t.update_path(&["a", "b"], false),
//!     vec![ChapterEvent::Open("a"), ChapterEvent::Open("b")],
//! );
//! assert_eq!(
//!     t.update_path(&["a", "c"], false),
//!     vec![ChapterEvent::Close("b"), ChapterEvent::Open("c")],
//! );
//! assert_eq!(
//!     t.clear(),
//!     vec![ChapterEvent::Close("c"), ChapterEvent::Close("a")],
//! );
//! ```

use alloc::vec::Vec;

/// Tracks the chapter scopes opened for the most recently processed path and
/// computes the minimal close/open sequence when moved to a new path.
///
/// Ordering semantics:
/// - Close events are emitted from inner-most to outer-most.
/// - Open events are emitted from outer-most to inner-most.
///
/// A path whose final segment is a story folder keeps that segment in the
/// tracked path for comparison, but no chapter is opened or closed for it.
/// At any point between updates, the open chapters are exactly the
/// non-story-folder segments of [`current_path`](Self::current_path), in
/// order, so every `Open` is balanced by exactly one `Close` once the
/// tracker is cleared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChapterTracker<K: Clone + Eq> {
    current: Vec<K>,
    folder_tail: bool,
}

/// A chapter boundary event.
///
/// Returned by [`ChapterTracker::update_path`] and
/// [`ChapterTracker::clear`]. `Close` carries the segment it unwinds even
/// though consumers typically close by scope, so event sequences stay
/// self-describing in logs and tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChapterEvent<K> {
    /// Open a chapter for the given segment (emitted outer→inner).
    Open(K),
    /// Close the chapter opened for the given segment (emitted inner→outer).
    Close(K),
}

impl<K: Clone + Eq> ChapterTracker<K> {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
            folder_tail: false,
        }
    }

    /// Return the most recently processed path.
    ///
    /// Includes a terminal story-folder segment when one was present, even
    /// though no chapter is open for it.
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// Update the tracked path and return the close/open events required to
    /// move from the previous path to `new_path`.
    ///
    /// `folder_tail` states whether the final segment of `new_path` is a
    /// story folder; such a segment is remembered but opens no chapter.
    ///
    /// Closes are emitted from inner-most to outer-most, then opens from
    /// outer-most to inner-most.
    pub fn update_path(&mut self, new_path: &[K], folder_tail: bool) -> Vec<ChapterEvent<K>> {
        let prev_len = self.current.len();
        let new_len = new_path.len();

        // Shared prefix: segments must match by name and by story-folder
        // status. A name that was a terminal story folder in the previous
        // path can be an ordinary chapter in the new one (or vice versa);
        // that position is a divergence, not shared ancestry.
        let mut shared = 0;
        while shared < prev_len && shared < new_len {
            let prev_hidden = self.folder_tail && shared + 1 == prev_len;
            let new_hidden = folder_tail && shared + 1 == new_len;
            if self.current[shared] != new_path[shared] || prev_hidden != new_hidden {
                break;
            }
            shared += 1;
        }

        let mut out = Vec::new();
        // Closes: old tail back to the shared prefix, inner→outer. A
        // terminal story folder never opened a chapter, so it closes none.
        for idx in (shared..prev_len).rev() {
            if !(self.folder_tail && idx + 1 == prev_len) {
                out.push(ChapterEvent::Close(self.current[idx].clone()));
            }
        }
        // Opens: shared prefix down to the new tail, outer→inner.
        for idx in shared..new_len {
            if !(folder_tail && idx + 1 == new_len) {
                out.push(ChapterEvent::Open(new_path[idx].clone()));
            }
        }

        self.current.clear();
        self.current.extend(new_path.iter().cloned());
        self.folder_tail = folder_tail;
        out
    }

    /// Unwind the tracked path, returning the close events for every open
    /// chapter from inner-most to outer-most.
    pub fn clear(&mut self) -> Vec<ChapterEvent<K>> {
        let len = self.current.len();
        let mut out = Vec::new();
        for idx in (0..len).rev() {
            if !(self.folder_tail && idx + 1 == len) {
                out.push(ChapterEvent::Close(self.current[idx].clone()));
            }
        }
        self.current.clear();
        self.folder_tail = false;
        out
    }
}
