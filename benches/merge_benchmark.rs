use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tailwind_merger::ClassMerger;

/// Build a class string of the requested size for benchmarking
fn build_class_string(size: &str) -> String {
    match size {
        "small" => {
            // Typical component class list with one conflict
            "flex flex-col items-center justify-center p-2 p-4 bg-blue-500 text-white rounded-lg shadow-md hover:bg-blue-600".to_string()
        }
        "medium" => {
            // Repeated component lists, conflicts across repetitions
            let base = "flex flex-col items-center justify-center p-4 bg-blue-500 text-white rounded-lg shadow-md hover:bg-blue-600";
            let mut content = String::new();
            for i in 0..5 {
                content.push_str(base);
                content.push(' ');
                content.push_str(&format!("p-{} m-{} ", i + 1, i + 1));
            }
            content
        }
        "large" => {
            // Long list cycling through many utility groups
            let classes = [
                "flex", "flex-col", "flex-row", "items-center", "justify-center",
                "p-4", "m-2", "bg-blue-500", "text-white", "rounded-lg",
                "shadow-md", "hover:bg-blue-600", "focus:outline-none", "transition-all",
                "duration-300", "ease-in-out", "transform", "hover:scale-105",
                "grid", "grid-cols-3", "gap-4", "space-x-2", "space-y-4",
            ];
            let mut content = String::new();
            for round in 0..25 {
                for class in classes.iter().skip(round % classes.len()) {
                    content.push_str(class);
                    content.push(' ');
                }
            }
            content
        }
        _ => panic!("Unknown size: {}", size),
    }
}

fn benchmark_merge(c: &mut Criterion) {
    let merger = ClassMerger::new();
    let mut group = c.benchmark_group("merge");

    for size in ["small", "medium", "large"] {
        let input = build_class_string(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| merger.merge(black_box(input)));
        });
    }

    group.finish();
}

fn benchmark_merger_construction(c: &mut Criterion) {
    c.bench_function("merger_construction", |b| {
        b.iter(|| black_box(ClassMerger::new()));
    });
}

fn benchmark_pass_through(c: &mut Criterion) {
    // Unrecognized tokens exercise the full prefix scan without a hit
    let merger = ClassMerger::new();
    let input = "widget-a widget-b widget-c widget-d widget-e";
    c.bench_function("pass_through", |b| {
        b.iter(|| merger.merge(black_box(input)));
    });
}

criterion_group!(
    benches,
    benchmark_merge,
    benchmark_merger_construction,
    benchmark_pass_through
);
criterion_main!(benches);
