use std::time::{Duration, SystemTime};

use cloudmetrics::{
    downstream::LoggingTransport,
    types::{
        attributes, MetricData, MetricStream, NumberDataPoint, Resource, ResourceMetrics,
        Temporality,
    },
    CloudMonitoringExporter, ExporterOptions,
};
use criterion::Criterion;

fn metrics(streams: usize, points_per_stream: usize) -> ResourceMetrics {
    let now = SystemTime::now();
    ResourceMetrics {
        resource: Resource::new([
            ("service.namespace", "bench"),
            ("service.name", "export"),
            ("service.instance.id", "instance-1"),
        ]),
        metrics: (0..streams)
            .map(|stream| {
                MetricStream::new(
                    format!("stream_{stream}"),
                    MetricData::Sum {
                        monotonic: true,
                        temporality: Temporality::Cumulative,
                        points: (0..points_per_stream)
                            .map(|point| NumberDataPoint {
                                attributes: attributes([
                                    ("http.method", "GET".to_string()),
                                    ("point", point.to_string()),
                                ]),
                                start_time: now - Duration::from_secs(60),
                                time: now,
                                value: (point as i64).into(),
                            })
                            .collect(),
                    },
                )
            })
            .collect(),
    }
}

pub fn export(criterion: &mut Criterion) {
    // env_logger::builder().is_test(false).try_init().unwrap();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("should be able to make tokio runtime");
    let exporter = runtime.block_on(async {
        CloudMonitoringExporter::new(
            LoggingTransport::new(log::Level::Trace),
            ExporterOptions::default().with_project_id("bench-project"),
        )
        .expect("options are valid")
    });

    let mut group = criterion.benchmark_group("export");
    for (streams, points) in [(1, 1), (10, 100), (50, 400)] {
        let batch = metrics(streams, points);
        group.throughput(criterion::Throughput::Elements((streams * points) as u64));
        group.bench_function(format!("streams-{streams:02}-points-{points:03}"), |bencher| {
            bencher.iter(|| runtime.block_on(exporter.export(&batch)));
        });
    }
}

criterion::criterion_group!(benches, export);
