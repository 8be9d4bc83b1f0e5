// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use folio_chapters::{ChapterTracker, is_story_folder_name, path_segments};
use folio_loader::loader::Loader;
use folio_loader::types::{LoaderOptions, NoopRegistrar, StoryOptions};

fn gen_component_keys(features: usize, components: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(features * components);
    for f in 0..features {
        for c in 0..components {
            out.push(format!("app/feature{}/component{}/_stories/index.js", f, c));
        }
    }
    out
}

fn gen_deep_keys(depth: usize, count: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let mut key = String::from("app");
        for level in 0..depth {
            // Alternate one segment per level so consecutive keys diverge
            // near the middle of the path.
            key.push_str(&format!("/level{}_{}", level, (i >> level) & 1));
        }
        key.push_str("/_stories/index.js");
        out.push(key);
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn shuffled(mut keys: Vec<String>, seed: u64) -> Vec<String> {
    let mut rng = Rng::new(seed);
    for i in (1..keys.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        keys.swap(i, j);
    }
    keys
}

fn sweep_tracker(keys: &[String]) -> usize {
    let mut tracker: ChapterTracker<&str> = ChapterTracker::new();
    let mut events = 0usize;
    for key in keys {
        let path = path_segments(key);
        let folder_tail = path.last().is_some_and(|s| is_story_folder_name(s));
        events += tracker.update_path(&path, folder_tail).len();
    }
    events + tracker.clear().len()
}

fn bench_tracker(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker");
    for &n in &[8usize, 32, 64] {
        let keys = gen_component_keys(n, 8);
        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_function(format!("sibling_sweep_n{}", n), |b| {
            b.iter(|| black_box(sweep_tracker(&keys)));
        });
    }
    let keys = gen_deep_keys(10, 1024);
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("deep_alternation", |b| {
        b.iter(|| black_box(sweep_tracker(&keys)));
    });
    let keys = shuffled(gen_component_keys(32, 8), 0xCAFE_F00D_DEAD_BEEF);
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("shuffled_discovery_order", |b| {
        b.iter(|| black_box(sweep_tracker(&keys)));
    });
    group.finish();
}

fn bench_loader(c: &mut Criterion) {
    let mut group = c.benchmark_group("loader");
    let keys = gen_component_keys(32, 8);
    group.throughput(Throughput::Elements(keys.len() as u64));
    for &wrap_stories in &[false, true] {
        let options = LoaderOptions { wrap_stories };
        group.bench_function(format!("full_build_wrap_{}", wrap_stories), |b| {
            b.iter_batched(
                || Loader::with_options(NoopRegistrar, options),
                |mut loader| {
                    for key in &keys {
                        loader.load_module(key, |l| {
                            l.stories_of("Stories", StoryOptions::empty())
                                .add("default")
                                .add("hover");
                        });
                    }
                    black_box(loader.finish());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tracker, bench_loader);
criterion_main!(benches);
