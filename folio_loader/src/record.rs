// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A registrar that records every call for inspection.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::Registrar;

/// One recorded registrar call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrarCall {
    /// `open_chapter`, with the chapter name.
    OpenChapter(String),
    /// `close_chapter`.
    CloseChapter,
    /// `add_story`, with group and story names.
    AddStory(String, String),
    /// `add_root_story`, with group and story names.
    AddRootStory(String, String),
}

/// Records calls in emission order.
///
/// Useful in tests and for dry-running a navigation build before handing
/// the same module sequence to a real surface.
#[derive(Clone, Debug, Default)]
pub struct RecordingRegistrar {
    calls: Vec<RegistrarCall>,
}

impl RecordingRegistrar {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded calls, in emission order.
    pub fn calls(&self) -> &[RegistrarCall] {
        &self.calls
    }

    /// Number of recorded `open_chapter` calls.
    pub fn open_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RegistrarCall::OpenChapter(_)))
            .count()
    }

    /// Number of recorded `close_chapter` calls.
    pub fn close_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RegistrarCall::CloseChapter))
            .count()
    }
}

impl Registrar for RecordingRegistrar {
    fn open_chapter(&mut self, name: &str) {
        self.calls.push(RegistrarCall::OpenChapter(String::from(name)));
    }

    fn close_chapter(&mut self) {
        self.calls.push(RegistrarCall::CloseChapter);
    }

    fn add_story(&mut self, group: &str, story: &str) {
        self.calls
            .push(RegistrarCall::AddStory(String::from(group), String::from(story)));
    }

    fn add_root_story(&mut self, group: &str, story: &str) {
        self.calls
            .push(RegistrarCall::AddRootStory(String::from(group), String::from(story)));
    }
}
