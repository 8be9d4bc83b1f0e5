// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skip and dev escape hatches.
//!
//! Shows the registrar call sequence for a module mixing a normal story
//! group, a skipped one (muted fluent handle, no chapter churn), and a
//! dev-mode one (registered at the navigation root).
//!
//! Run:
//! - `cargo run -p folio_demos --example loader_escapes`

use folio_loader::loader::Loader;
use folio_loader::record::RecordingRegistrar;
use folio_loader::types::{LoaderOptions, StoryOptions};

fn main() {
    let options = LoaderOptions { wrap_stories: true };
    let mut loader = Loader::with_options(RecordingRegistrar::new(), options);

    loader.load_module("app/widgets/buttons/_stories/index.js", |l| {
        l.stories_of("Buttons", StoryOptions::empty()).add("primary");

        // Muted: the chain is accepted, nothing is registered, and the next
        // group will not close a chapter that was never opened.
        l.stories_of("Experiments", StoryOptions::SKIP)
            .add("wip-1")
            .add("wip-2");

        // Root-level: bypasses every chapter so the selection survives a
        // reload in the rendering tool.
        l.stories_of("Scratch", StoryOptions::DEV).add("playground");

        l.stories_of("Links", StoryOptions::empty()).add("default");
    });

    let recording = loader.finish();
    println!("== registrar calls ==");
    for call in recording.calls() {
        println!("  {:?}", call);
    }
    println!(
        "opens={} closes={}",
        recording.open_count(),
        recording.close_count()
    );
}
