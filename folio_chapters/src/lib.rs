// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=folio_chapters --heading-base-level=0

//! Folio Chapters: path-derived chapter boundaries for documentation outlines.
//!
//! Folio Chapters is the pure core of a navigation builder for UI-component
//! documentation tools. Story modules are discovered by a host in a stable
//! order; this crate turns each module's file path into an ordered list of
//! chapter segments and computes the minimal open/close transitions between
//! consecutive modules.
//!
//! - Decompose a `/`-separated module key into chapter segments, dropping
//!   the containing root and the file name.
//! - Classify story folders: segment names ending in `stories` (any case)
//!   group files on disk without showing up as chapters, in terminal
//!   position only.
//! - Track the open chapter scopes across a module sequence with
//!   [`ChapterTracker`], which emits balanced [`ChapterEvent`]s.
//!
//! It contains no I/O and performs no side effects; higher layers (like a
//! loader driving a registrar) apply the events to an actual navigation
//! surface.
//!
//! ## API overview
//!
//! - [`path_segments`]: module key → chapter segments.
//! - [`is_story_folder_name`] / [`is_story_folder`]: story-folder
//!   classification.
//! - [`ChapterTracker`]: the boundary state machine.
//!   Key operations: [`ChapterTracker::update_path`] (one call per module)
//!   and [`ChapterTracker::clear`] (final unwind).
//! - [`ChapterEvent`]: `Open`/`Close` transitions, already ordered for
//!   direct replay against a navigation surface.
//!
//! # Example
//!
//! ```rust
//! use folio_chapters::{ChapterEvent, ChapterTracker, is_story_folder_name, path_segments};
//!
//! let keys = [
//!     "app/widgets/buttons/_stories/index.js",
//!     "app/widgets/labels/_stories/index.js",
//! ];
//!
//! let mut tracker: ChapterTracker<&str> = ChapterTracker::new();
//! let mut log = Vec::new();
//! for key in keys {
//!     let path = path_segments(key);
//!     let folder_tail = path.last().is_some_and(|s| is_story_folder_name(s));
//!     log.extend(tracker.update_path(&path, folder_tail));
//! }
//! log.extend(tracker.clear());
//!
//! assert_eq!(
//!     log,
//!     vec![
//!         ChapterEvent::Open("widgets"),
//!         ChapterEvent::Open("buttons"),
//!         ChapterEvent::Close("buttons"),
//!         ChapterEvent::Open("labels"),
//!         ChapterEvent::Close("labels"),
//!         ChapterEvent::Close("widgets"),
//!     ],
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod path;
pub mod tracker;

pub use path::{is_story_folder, is_story_folder_name, path_segments};
pub use tracker::{ChapterEvent, ChapterTracker};
