use std::path::PathBuf;
#[allow(clippy::unwrap_used)]
fn main() {
    let out_dir = PathBuf::from("../cloudmetrics/src/proto");
    let proto_dir = "../proto";

    eprintln!("Hi brave developer! If you are changing protos and cloudmetrics fails to build, please retry 1 time.");
    eprintln!("Cargo currently does not have a nice way for me to express a dependency order between these 2");
    eprintln!("workspace projects - because this project is _specifically_ supposed to not be a Cargo dependency.");
    eprintln!("I did this so users don't need to have protoc when compiling cloudmetrics!");

    // Only the slice of the monitoring api that the exporter speaks: descriptor lookup and
    // creation, and time series writes.
    tonic_build::configure()
        .build_server(false)
        .out_dir(out_dir)
        .compile(
            &[
                format!("{proto_dir}/google/api/label.proto"),
                format!("{proto_dir}/google/api/metric.proto"),
                format!("{proto_dir}/google/api/monitored_resource.proto"),
                format!("{proto_dir}/google/api/distribution.proto"),
                format!("{proto_dir}/google/monitoring/v3/common.proto"),
                format!("{proto_dir}/google/monitoring/v3/metric.proto"),
                format!("{proto_dir}/google/monitoring/v3/metric_service.proto"),
            ],
            &[proto_dir],
        )
        .unwrap();

    println!("cargo:rerun-if-changed=../proto");
}
