// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the loader: the registrar contract, options, and handles.
//!
//! ## Overview
//!
//! These types describe the boundary between the loader and the navigation
//! surface it drives. The [`Registrar`] trait is implemented by the host;
//! the loader guarantees balanced chapter calls against it.

use bitflags::bitflags;

/// Receives chapter boundaries and story registrations.
///
/// Implement this for the navigation surface being built (a sidebar, an
/// outline, a recording). The [loader](crate::loader::Loader) emits calls in
/// a fixed discipline: chapters nest strictly, and every `open_chapter` is
/// balanced by a `close_chapter` by the time the build finishes.
pub trait Registrar {
    /// Open a chapter named `name`; later registrations nest inside it.
    fn open_chapter(&mut self, name: &str);
    /// Close the innermost open chapter.
    fn close_chapter(&mut self);
    /// Register a story under the innermost open chapter.
    fn add_story(&mut self, group: &str, story: &str);
    /// Register a story at the root of the navigation tree, outside any
    /// chapter.
    fn add_root_story(&mut self, group: &str, story: &str);
}

/// A registrar that ignores every call.
///
/// The stand-in target when no surface is attached; useful for measuring a
/// build or exercising loader cadence without output.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopRegistrar;

impl Registrar for NoopRegistrar {
    #[inline]
    fn open_chapter(&mut self, _name: &str) {}
    #[inline]
    fn close_chapter(&mut self) {}
    #[inline]
    fn add_story(&mut self, _group: &str, _story: &str) {}
    #[inline]
    fn add_root_story(&mut self, _group: &str, _story: &str) {}
}

bitflags! {
    /// Per-story registration options.
    ///
    /// `SKIP` and `DEV` are mutually exclusive per call; when both are set,
    /// `SKIP` wins.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StoryOptions: u8 {
        /// Suppress the story: registration returns a muted handle and the
        /// following registration will not close a chapter that was never
        /// opened.
        const SKIP = 0b0000_0001;
        /// Register the story at the root of the navigation tree instead of
        /// nesting it under the current path chapter. Workaround for a
        /// rendering defect that loses the active selection on reload.
        const DEV = 0b0000_0010;
    }
}

/// Options controlling how the loader maps registrations onto chapters.
///
/// Used by [`Loader::with_options`](crate::loader::Loader::with_options).
#[derive(Clone, Copy, Debug, Default)]
pub struct LoaderOptions {
    /// If true, each story group is wrapped in its own chapter in addition
    /// to the path-derived chapters.
    pub wrap_stories: bool,
}

/// Handle returned by [`Loader::stories_of`](crate::loader::Loader::stories_of).
///
/// `Live` forwards registrations to the registrar. `Muted` accepts the same
/// calls and drops them, so a skipped story keeps its fluent registration
/// chain without branching at the call site.
#[derive(Debug)]
pub enum StoryHandle<'a, R: Registrar> {
    /// Registrations are forwarded to the registrar.
    Live {
        /// Target registrar.
        registrar: &'a mut R,
        /// Display name of the story group being registered.
        group: &'a str,
        /// Register at the root of the navigation tree instead of under the
        /// current chapter.
        root: bool,
    },
    /// Registrations are accepted and dropped.
    Muted,
}

impl<'a, R: Registrar> StoryHandle<'a, R> {
    /// Register a story, returning the handle for chaining.
    pub fn add(self, story: &str) -> Self {
        match self {
            Self::Live {
                registrar,
                group,
                root,
            } => {
                if root {
                    registrar.add_root_story(group, story);
                } else {
                    registrar.add_story(group, story);
                }
                Self::Live {
                    registrar,
                    group,
                    root,
                }
            }
            Self::Muted => Self::Muted,
        }
    }

    /// Whether registrations through this handle reach the registrar.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live { .. })
    }
}
