// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loader implementation.
//!
//! ## Overview
//!
//! Walks module keys in discovery order, drives path chapters through a
//! [`ChapterTracker`], and applies the story-registration cadence: one
//! optional story chapter per group, a skip escape that mutes a story, and
//! a dev escape that registers at the navigation root.
//!
//! ## Cadence
//!
//! - Entering a module opens/closes path chapters for the difference to the
//!   previous module's path.
//! - Each registration closes the previous group's story chapter first,
//!   except the first registration of a module and any registration that
//!   follows a skipped one.
//! - Leaving a module closes its trailing story chapter.
//! - Story chapters exist only when
//!   [`LoaderOptions::wrap_stories`](crate::types::LoaderOptions) is set;
//!   the cadence flags are maintained either way.
//!
//! ## See Also
//!
//! [`folio_chapters::tracker`] for the boundary computation itself.

use alloc::string::String;
use alloc::vec::Vec;

use folio_chapters::{ChapterEvent, ChapterTracker, is_story_folder_name, path_segments};

use crate::types::{LoaderOptions, Registrar, StoryHandle, StoryOptions};

/// Builds a chapter hierarchy on a [`Registrar`] from module keys.
///
/// ## Usage
///
/// - Construct with [`Loader::new`], or [`Loader::with_options`] to wrap
///   each story group in its own chapter.
/// - For each discovered module, call [`Loader::load_module`] with the
///   module key and a closure that performs the module's registrations via
///   [`Loader::stories_of`]. (The [`Loader::begin_module`] /
///   [`Loader::end_module`] pair is available when registrations cannot be
///   expressed as a closure.)
/// - Call [`Loader::finish`] once the sequence is exhausted to unwind the
///   remaining chapters and recover the registrar.
///
/// Modules must be supplied in a stable, deterministic order; the loader
/// holds no locks and performs no retries.
pub struct Loader<R: Registrar> {
    registrar: R,
    tracker: ChapterTracker<String>,
    options: LoaderOptions,
    // Cadence flags. `opened_new_chapter` suppresses the story-chapter
    // closure once per module; `last_skipped` suppresses it after a story
    // that never opened one.
    last_skipped: bool,
    opened_new_chapter: bool,
}

impl<R: Registrar> core::fmt::Debug for Loader<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Loader")
            .field("options", &self.options)
            .field("current_path", &self.tracker.current_path())
            .field("last_skipped", &self.last_skipped)
            .field("opened_new_chapter", &self.opened_new_chapter)
            .finish_non_exhaustive()
    }
}

impl<R: Registrar> Loader<R> {
    /// Create a loader with default options.
    pub fn new(registrar: R) -> Self {
        Self::with_options(registrar, LoaderOptions::default())
    }

    /// Create a loader with explicit options.
    pub fn with_options(registrar: R, options: LoaderOptions) -> Self {
        Self {
            registrar,
            tracker: ChapterTracker::new(),
            options,
            last_skipped: false,
            opened_new_chapter: false,
        }
    }

    /// The current path-chapter nesting, outer→inner.
    ///
    /// Includes a terminal story-folder segment when one was present, even
    /// though no chapter is open for it.
    pub fn current_path(&self) -> &[String] {
        self.tracker.current_path()
    }

    /// Enter the module identified by `key`.
    ///
    /// Closes and opens path chapters for the difference between the
    /// previous module's path and this one. Malformed keys (fewer than
    /// three segments) carry an empty path: any open chapters close and the
    /// module's stories register at the navigation root.
    pub fn begin_module(&mut self, key: &str) {
        let segments = path_segments(key);
        let folder_tail = segments.last().is_some_and(|s| is_story_folder_name(s));
        let path: Vec<String> = segments.into_iter().map(String::from).collect();
        for event in self.tracker.update_path(&path, folder_tail) {
            match event {
                ChapterEvent::Open(name) => self.registrar.open_chapter(&name),
                ChapterEvent::Close(_) => self.registrar.close_chapter(),
            }
        }
        // The first registration of this module has no predecessor whose
        // story chapter needs closing.
        self.opened_new_chapter = true;
    }

    /// Register a group of stories named `group`.
    ///
    /// Returns a [`StoryHandle`] for fluent `add` calls. With
    /// [`StoryOptions::SKIP`] the handle is muted and nothing is recorded;
    /// with [`StoryOptions::DEV`] the handle registers at the root of the
    /// navigation tree, bypassing all chapter nesting. When both flags are
    /// set, `SKIP` wins.
    pub fn stories_of<'a>(
        &'a mut self,
        group: &'a str,
        options: StoryOptions,
    ) -> StoryHandle<'a, R> {
        if !self.opened_new_chapter && !self.last_skipped {
            // Close the previous group's story chapter.
            if self.options.wrap_stories {
                self.registrar.close_chapter();
            }
        } else {
            self.opened_new_chapter = false;
        }
        self.last_skipped = false;

        if options.contains(StoryOptions::SKIP) {
            self.last_skipped = true;
            return StoryHandle::Muted;
        }
        if options.contains(StoryOptions::DEV) {
            // No story chapter is opened for a dev registration, so the
            // next registration must not close one.
            self.last_skipped = true;
            return StoryHandle::Live {
                registrar: &mut self.registrar,
                group,
                root: true,
            };
        }

        if self.options.wrap_stories {
            self.registrar.open_chapter(group);
        }
        StoryHandle::Live {
            registrar: &mut self.registrar,
            group,
            root: false,
        }
    }

    /// Leave the current module, closing its trailing story chapter.
    ///
    /// Nothing closes when the module's last registration was skipped, or
    /// when the module registered no stories at all.
    pub fn end_module(&mut self) {
        if self.opened_new_chapter {
            self.opened_new_chapter = false;
        } else if self.last_skipped {
            self.last_skipped = false;
        } else if self.options.wrap_stories {
            self.registrar.close_chapter();
        }
    }

    /// Process one module: [`begin_module`](Self::begin_module), run
    /// `define` for its registrations, then
    /// [`end_module`](Self::end_module).
    pub fn load_module<F>(&mut self, key: &str, define: F)
    where
        F: FnOnce(&mut Self),
    {
        self.begin_module(key);
        define(self);
        self.end_module();
    }

    /// Unwind all remaining path chapters and return the registrar.
    pub fn finish(mut self) -> R {
        // Final flush: `clear` only ever emits closes.
        for _ in self.tracker.clear() {
            self.registrar.close_chapter();
        }
        self.registrar
    }
}
