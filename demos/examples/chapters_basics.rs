// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chapter tracker basics.
//!
//! This minimal example decomposes a handful of module keys, feeds them to
//! the tracker in discovery order, and prints the open/close transitions
//! between consecutive modules.
//!
//! Run:
//! - `cargo run -p folio_demos --example chapters_basics`

use folio_chapters::{ChapterEvent, ChapterTracker, is_story_folder_name, path_segments};

fn main() {
    let keys = [
        "app/widgets/buttons/_stories/index.js",
        "app/widgets/labels/_stories/index.js",
        "app/panels/settings/_stories/index.js",
        "app/panels/settings/advanced/_stories/index.js",
    ];

    let mut tracker: ChapterTracker<&str> = ChapterTracker::new();
    for key in keys {
        let path = path_segments(key);
        let folder_tail = path.last().is_some_and(|s| is_story_folder_name(s));
        println!("{}", key);
        for event in tracker.update_path(&path, folder_tail) {
            match event {
                ChapterEvent::Open(name) => println!("  open  {}", name),
                ChapterEvent::Close(name) => println!("  close {}", name),
            }
        }
    }

    println!("== final flush ==");
    for event in tracker.clear() {
        if let ChapterEvent::Close(name) = event {
            println!("  close {}", name);
        }
    }
}
