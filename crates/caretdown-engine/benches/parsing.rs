use caretdown_engine::editing::{reconcile_with_stats, EditSpan, Selection};
use caretdown_engine::parsing::parse_document;
use caretdown_engine::render::{plan_decorations, PlanOptions};
use criterion::{Criterion, criterion_group, criterion_main};

fn generate_note(sections: usize) -> String {
    let base = "# Section\n\nA paragraph with **bold**, `code` and a [link](https://example.com).\n\n- [ ] first task\n- [x] second task\n\n> a quote line\n\n```rust\nfn demo() {}\n```\n\n";
    base.repeat(sections)
}

fn bench_full_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(30);

    let content = generate_note(100);
    group.bench_function("full_parse", |b| {
        b.iter(|| {
            let blocks = parse_document(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    group.finish();
}

fn bench_incremental_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");
    group.sample_size(30);

    let content = generate_note(100);
    let blocks = parse_document(&content);
    // One character typed into a paragraph near the middle.
    let at = content.len() / 2;
    let at = content[..at].rfind("paragraph").unwrap();
    let mut edited = content.clone();
    edited.insert(at, 'x');
    let edit = EditSpan::insert(at, 1);

    group.bench_function("single_char_insert", |b| {
        b.iter(|| {
            let out = reconcile_with_stats(
                std::hint::black_box(&blocks),
                std::hint::black_box(&edited),
                &edit,
            );
            std::hint::black_box(out);
        });
    });

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("decorations");
    group.sample_size(30);

    let content = generate_note(100);
    let blocks = parse_document(&content);
    let sel = Selection::caret(content.len() / 2);

    group.bench_function("plan_decorations", |b| {
        b.iter(|| {
            let plan = plan_decorations(
                std::hint::black_box(&blocks),
                &sel,
                &PlanOptions::default(),
            );
            std::hint::black_box(plan);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_full_parse, bench_incremental_edit, bench_plan);
criterion_main!(benches);
