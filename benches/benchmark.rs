use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use error_details::{new, print_error_details, with_stack, wrap, Error, Stack};

fn deep_chain(depth: usize) -> Error {
    let mut err = new("root cause");
    for i in 0..depth {
        err = wrap(err, format!("layer {i}")).unwrap();
    }
    err
}

fn joined_tree() -> Error {
    let e1 = new("error 1");
    let e2 = wrap(e1, "error 2 wrapping error 1").unwrap();
    let e3 = new("error 3");
    let e4 = error_details::join!(e2, e3).unwrap();
    let e5 = new("error 5");
    let e6 = error_details::join!(e4, e5).unwrap();
    let e7 = wrap(e6, "error 7").unwrap();
    with_stack(e7).unwrap()
}

// Construction is the hot path: capture must stay cheap because most
// errors are handled without ever rendering their report.
fn bench_error_creation(c: &mut Criterion) {
    c.bench_function("construct/new", |b| {
        b.iter(|| black_box(new("connection refused")))
    });

    c.bench_function("construct/wrap", |b| {
        b.iter(|| {
            let root = new("connection refused");
            black_box(wrap(root, "loading configuration").unwrap())
        })
    });

    c.bench_function("construct/join", |b| {
        b.iter(|| black_box(error_details::join!(new("read failed"), new("fsync failed")).unwrap()))
    });

    c.bench_function("construct/chain_depth_5", |b| {
        b.iter(|| black_box(deep_chain(5)))
    });
}

fn bench_stack_capture(c: &mut Criterion) {
    c.bench_function("capture/skip_0", |b| b.iter(|| black_box(Stack::capture(0))));

    c.bench_function("capture/skip_4", |b| b.iter(|| black_box(Stack::capture(4))));
}

fn bench_message_rendering(c: &mut Criterion) {
    let tree = joined_tree();
    c.bench_function("render/display", |b| b.iter(|| black_box(tree.to_string())));
}

fn bench_report_rendering(c: &mut Criterion) {
    // Symbol resolution is memoized, so after the first iteration this
    // measures the walk and formatting alone.
    let tree = joined_tree();
    c.bench_function("render/print_error_details", |b| {
        b.iter(|| black_box(print_error_details(&tree)))
    });

    c.bench_function("render/first_resolution", |b| {
        b.iter_batched(
            joined_tree,
            |tree| black_box(print_error_details(&tree)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_error_creation,
    bench_stack_capture,
    bench_message_rendering,
    bench_report_rendering
);
criterion_main!(benches);
