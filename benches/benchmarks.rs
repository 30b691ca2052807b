//! Performance benchmarks for dirtally

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dirtally::test_utils::TestTree;
use dirtally::{DirectoryWalker, WalkerConfig, file_type_key};

const FILE_NAMES: [&str; 8] = [
    "main.rs",
    "README",
    ".gitignore",
    "archive.tar.GZ",
    "Photo.JPEG",
    "notes.txt",
    "file.",
    "a.very.long.name.with.many.dots.json",
];

fn bench_file_type_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_type_key");

    group.bench_function("mixed_names", |b| {
        b.iter(|| {
            for name in FILE_NAMES {
                black_box(file_type_key(black_box(name)));
            }
        })
    });

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    // 1 + 4 + 16 = 21 directories, 10 files each
    let small = TestTree::new();
    small.populate(4, 2, 10);
    group.bench_function("small_tree_210_files", |b| {
        let walker = DirectoryWalker::new(WalkerConfig::default());
        b.iter(|| walker.walk(black_box(small.path())))
    });

    // 1 + 5 + 25 + 125 = 156 directories, 8 files each
    let medium = TestTree::new();
    medium.populate(5, 3, 8);
    group.bench_function("medium_tree_1248_files", |b| {
        let walker = DirectoryWalker::new(WalkerConfig::default());
        b.iter(|| walker.walk(black_box(medium.path())))
    });

    group.bench_function("medium_tree_without_nodes", |b| {
        let walker = DirectoryWalker::new(WalkerConfig::default().with_keep_nodes(false));
        b.iter(|| walker.walk(black_box(medium.path())))
    });

    group.bench_function("medium_tree_depth_1", |b| {
        let walker = DirectoryWalker::new(WalkerConfig::default().with_max_depth(Some(1)));
        b.iter(|| walker.walk(black_box(medium.path())))
    });

    group.finish();
}

fn bench_structure(c: &mut Criterion) {
    let tree = TestTree::new();
    tree.populate(5, 3, 8);
    let walker = DirectoryWalker::new(WalkerConfig::default());

    c.bench_function("structure_medium_tree", |b| {
        b.iter(|| walker.structure(black_box(tree.path())))
    });
}

criterion_group!(benches, bench_file_type_key, bench_walk, bench_structure);
criterion_main!(benches);
