// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print a sidebar outline from a module sequence.
//!
//! Implements a registrar that renders chapters as an indented tree, the
//! way a documentation sidebar would show them, and drives it with the
//! loader over a small component library.
//!
//! Run:
//! - `cargo run -p folio_demos --example loader_outline`

use folio_loader::loader::Loader;
use folio_loader::types::{LoaderOptions, Registrar, StoryOptions};

/// Renders chapters and stories as an indented outline on stdout.
struct PrintRegistrar {
    depth: usize,
}

impl PrintRegistrar {
    fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

impl Registrar for PrintRegistrar {
    fn open_chapter(&mut self, name: &str) {
        println!("{}{}/", self.indent(), name);
        self.depth += 1;
    }

    fn close_chapter(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn add_story(&mut self, group: &str, story: &str) {
        println!("{}{} · {}", self.indent(), group, story);
    }

    fn add_root_story(&mut self, group: &str, story: &str) {
        println!("[root] {} · {}", group, story);
    }
}

fn main() {
    let options = LoaderOptions { wrap_stories: true };
    let mut loader = Loader::with_options(PrintRegistrar { depth: 0 }, options);

    loader.load_module("app/widgets/buttons/_stories/index.js", |l| {
        l.stories_of("Buttons", StoryOptions::empty())
            .add("primary")
            .add("ghost");
    });
    loader.load_module("app/widgets/labels/_stories/index.js", |l| {
        l.stories_of("Labels", StoryOptions::empty())
            .add("heading")
            .add("caption");
    });
    loader.load_module("app/panels/settings/_stories/index.js", |l| {
        l.stories_of("Settings", StoryOptions::empty()).add("general");
        l.stories_of("Profiles", StoryOptions::empty()).add("avatar");
    });

    let _ = loader.finish();
}
