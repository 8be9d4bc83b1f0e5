// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=folio_loader --heading-base-level=0

//! Folio Loader: turn story module paths into nested chapter registrations.
//!
//! ## Overview
//!
//! This crate drives a navigation build for a UI-component documentation
//! tool. A host resolver discovers story modules in a stable order; the
//! [`Loader`](crate::loader::Loader) walks that sequence, derives chapter
//! boundaries from each module's file path via [`folio_chapters`], and
//! emits balanced `open_chapter`/`close_chapter` calls plus story
//! registrations against a [`Registrar`](crate::types::Registrar) you
//! implement.
//!
//! Directory names ending in `stories` (any case) group story files on disk
//! without appearing as chapters. With
//! [`LoaderOptions::wrap_stories`](crate::types::LoaderOptions) each story
//! group additionally gets a chapter of its own.
//!
//! ## Escape hatches
//!
//! - [`StoryOptions::SKIP`](crate::types::StoryOptions::SKIP) mutes a story
//!   group: the returned handle accepts the same fluent `add` calls and
//!   drops them, and the next registration will not close a story chapter
//!   that was never opened.
//! - [`StoryOptions::DEV`](crate::types::StoryOptions::DEV) registers a
//!   story group at the root of the navigation tree, outside all chapters.
//!   This works around a rendering defect that loses the active selection
//!   on reload.
//!
//! ## Workflow
//!
//! 1) Implement [`Registrar`](crate::types::Registrar) for your surface, or
//!    start with [`RecordingRegistrar`](crate::record::RecordingRegistrar).
//! 2) Feed each discovered module to
//!    [`Loader::load_module`](crate::loader::Loader::load_module), making
//!    registrations through
//!    [`Loader::stories_of`](crate::loader::Loader::stories_of).
//! 3) Call [`Loader::finish`](crate::loader::Loader::finish) to unwind the
//!    remaining chapters and recover the registrar.
//!
//! ## Minimal example
//!
//! ```
//! use folio_loader::loader::Loader;
//! use folio_loader::record::{RecordingRegistrar, RegistrarCall};
//! use folio_loader::types::StoryOptions;
//!
//! let mut loader = Loader::new(RecordingRegistrar::new());
//! loader.load_module("app/widgets/buttons/_stories/index.js", |l| {
//!     l.stories_of("Buttons", StoryOptions::empty())
//!         .add("primary")
//!         .add("ghost");
//! });
//! let recording = loader.finish();
//!
//! assert_eq!(recording.calls()[0], RegistrarCall::OpenChapter("widgets".into()));
//! assert_eq!(recording.open_count(), recording.close_count());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod loader;
pub mod record;
pub mod types;
