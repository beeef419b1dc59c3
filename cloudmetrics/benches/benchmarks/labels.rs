use criterion::Criterion;
use cloudmetrics::label::normalize_label_key;

pub fn labels(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("labels");
    group.throughput(criterion::Throughput::Elements(1));

    for key in ["already_clean", "http.request.method", "123", "hyphens-dots.slashes/"] {
        group.bench_function(format!("normalize-{key}"), |bencher| {
            bencher.iter(|| normalize_label_key(criterion::black_box(key)));
        });
    }
}

criterion::criterion_group!(benches, labels);
