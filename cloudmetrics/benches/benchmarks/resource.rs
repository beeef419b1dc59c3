use criterion::Criterion;
use cloudmetrics::{resource::map_resource, types::Resource};

pub fn resource(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("resource");
    group.throughput(criterion::Throughput::Elements(1));

    let resources = [
        (
            "gce",
            Resource::new([
                ("cloud.platform", "gcp_compute_engine"),
                ("cloud.availability_zone", "us-central1-a"),
                ("host.id", "1234567890"),
            ]),
        ),
        (
            "k8s_container",
            Resource::new([
                ("cloud.platform", "gcp_kubernetes_engine"),
                ("cloud.availability_zone", "us-central1-a"),
                ("k8s.cluster.name", "cluster"),
                ("k8s.namespace.name", "default"),
                ("k8s.pod.name", "pod-abc"),
                ("k8s.container.name", "server"),
            ]),
        ),
        (
            "generic_task",
            Resource::new([
                ("service.namespace", "ns"),
                ("service.name", "svc"),
                ("service.instance.id", "instance-1"),
            ]),
        ),
        ("empty", Resource::new(Vec::<(&'static str, &'static str)>::new())),
    ];

    for (name, attributes) in &resources {
        group.bench_function(*name, |bencher| {
            bencher.iter(|| map_resource(criterion::black_box(attributes), "my-project", false));
        });
    }
}

criterion::criterion_group!(benches, resource);
