//! The mapping from in-memory metric streams to Cloud Monitoring wire records.

use std::collections::HashMap;

use crate::{
    downstream::EpochTime,
    identity::{TaskIdentity, TASK_LABEL},
    label::normalize_label_key,
    proto::google::{
        api::{
            distribution::{
                bucket_options::{Explicit, Exponential, Options},
                BucketOptions,
            },
            label_descriptor,
            metric_descriptor::{MetricKind, ValueType},
            Distribution, LabelDescriptor, Metric, MetricDescriptor, MonitoredResource,
        },
        monitoring::v3::{typed_value::Value, Point, TimeInterval, TimeSeries, TypedValue},
    },
    types::{
        Attributes, ExponentialHistogramDataPoint, HistogramDataPoint, MetricData, MetricStream,
        NumberDataPoint, NumberValue, Temporality,
    },
};

/// The metric kind and value type a stream is written as, or `None` when Cloud
/// Monitoring has no way to represent it.
pub fn wire_shape(data: &MetricData) -> Option<(MetricKind, ValueType)> {
    match data {
        MetricData::Gauge(points) => Some((MetricKind::Gauge, number_type(points)?)),
        MetricData::Sum {
            monotonic: true,
            temporality: Temporality::Cumulative,
            points,
        } => Some((MetricKind::Cumulative, number_type(points)?)),
        // A cumulative sum that can go down is a level that changes. Delta sums that can
        // go down are changes, not levels, and have no home here.
        MetricData::Sum {
            monotonic: false,
            temporality: Temporality::Cumulative,
            points,
        } => Some((MetricKind::Gauge, number_type(points)?)),
        MetricData::Histogram {
            temporality: Temporality::Cumulative,
            ..
        }
        | MetricData::ExponentialHistogram {
            temporality: Temporality::Cumulative,
            ..
        } => Some((MetricKind::Cumulative, ValueType::Distribution)),
        _ => None,
    }
}

/// One float point makes the whole stream `DOUBLE`.
fn number_type(points: &[NumberDataPoint]) -> Option<ValueType> {
    if points.is_empty() {
        return None;
    }
    if points
        .iter()
        .any(|point| matches!(point.value, NumberValue::F64(_)))
    {
        Some(ValueType::Double)
    } else {
        Some(ValueType::Int64)
    }
}

/// The descriptor to register for a metric stream, or `None` if the stream is empty
/// or has a shape that can not be written.
pub fn metric_descriptor(
    metric: &MetricStream,
    metric_type: String,
    project_name: &str,
    task: Option<&TaskIdentity>,
) -> Option<MetricDescriptor> {
    if metric.data.point_count() == 0 {
        return None;
    }
    let Some((kind, value_type)) = wire_shape(&metric.data) else {
        log::warn!(
            "skipping metric {}: {} data with this temporality can not be written",
            metric.name,
            metric.data.shape()
        );
        return None;
    };

    let mut label_keys: Vec<String> = point_attributes(&metric.data)
        .into_iter()
        .flat_map(|attributes| attributes.keys())
        .map(|key| normalize_label_key(key.as_str()))
        .collect();
    if task.is_some() {
        label_keys.push(TASK_LABEL.to_string());
    }
    label_keys.sort();
    label_keys.dedup();

    Some(MetricDescriptor {
        name: format!("{project_name}/metricDescriptors/{metric_type}"),
        r#type: metric_type,
        labels: label_keys
            .into_iter()
            .map(|key| LabelDescriptor {
                key,
                value_type: label_descriptor::ValueType::String as i32,
                description: String::new(),
            })
            .collect(),
        metric_kind: kind as i32,
        value_type: value_type as i32,
        unit: metric.unit.clone(),
        description: metric.description.clone(),
        display_name: metric.name.to_string(),
    })
}

/// Every point's attributes. The descriptor declares the union of their keys.
fn point_attributes(data: &MetricData) -> Vec<&Attributes> {
    match data {
        MetricData::Gauge(points) | MetricData::Sum { points, .. } => {
            points.iter().map(|p| &p.attributes).collect()
        }
        MetricData::Histogram { points, .. } => points.iter().map(|p| &p.attributes).collect(),
        MetricData::ExponentialHistogram { points, .. } => {
            points.iter().map(|p| &p.attributes).collect()
        }
        MetricData::Summary(points) => points.iter().map(|p| &p.attributes).collect(),
    }
}

/// One time series per point of `metric`, shaped by its registered `descriptor`.
pub fn time_series(
    metric: &MetricStream,
    descriptor: &MetricDescriptor,
    resource: &MonitoredResource,
    task: Option<&TaskIdentity>,
) -> Vec<TimeSeries> {
    let cumulative = descriptor.metric_kind == MetricKind::Cumulative as i32;
    let value_type = descriptor.value_type();
    let record = |attributes: &Attributes, interval: TimeInterval, value: Value| TimeSeries {
        metric: Some(Metric {
            r#type: descriptor.r#type.clone(),
            labels: metric_labels(attributes, task),
        }),
        resource: Some(resource.clone()),
        metric_kind: descriptor.metric_kind,
        value_type: descriptor.value_type,
        points: vec![Point {
            interval: Some(interval),
            value: Some(TypedValue { value: Some(value) }),
        }],
        unit: descriptor.unit.clone(),
    };

    match &metric.data {
        MetricData::Gauge(points) | MetricData::Sum { points, .. } => points
            .iter()
            .map(|point| {
                record(
                    &point.attributes,
                    interval(cumulative, point.start_time, point.time),
                    number_value(point.value, value_type),
                )
            })
            .collect(),
        MetricData::Histogram { points, .. } => points
            .iter()
            .map(|point| {
                record(
                    &point.attributes,
                    interval(cumulative, point.start_time, point.time),
                    Value::DistributionValue(explicit_distribution(point)),
                )
            })
            .collect(),
        MetricData::ExponentialHistogram { points, .. } => points
            .iter()
            .map(|point| {
                record(
                    &point.attributes,
                    interval(cumulative, point.start_time, point.time),
                    Value::DistributionValue(exponential_distribution(point)),
                )
            })
            .collect(),
        MetricData::Summary(_) => Vec::new(),
    }
}

/// Normalized attribute keys with their values rendered as strings. When two keys
/// normalize alike the later one wins. The task label is written last.
fn metric_labels(attributes: &Attributes, task: Option<&TaskIdentity>) -> HashMap<String, String> {
    let mut labels: HashMap<String, String> = attributes
        .iter()
        .map(|(key, value)| (normalize_label_key(key.as_str()), value.to_label_value()))
        .collect();
    if let Some(task) = task {
        labels.insert(TASK_LABEL.to_string(), task.as_str().to_string());
    }
    labels
}

fn interval(
    cumulative: bool,
    start_time: std::time::SystemTime,
    time: std::time::SystemTime,
) -> TimeInterval {
    TimeInterval {
        end_time: Some(time.timestamp()),
        start_time: cumulative.then(|| start_time.timestamp()),
    }
}

/// Integers widen to match a `DOUBLE` descriptor. Floats are never truncated.
fn number_value(value: NumberValue, value_type: ValueType) -> Value {
    match (value, value_type) {
        (NumberValue::I64(i), ValueType::Double) => Value::DoubleValue(i as f64),
        (NumberValue::I64(i), _) => Value::Int64Value(i),
        (NumberValue::F64(f), _) => Value::DoubleValue(f),
    }
}

fn mean(count: u64, sum: f64) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn explicit_distribution(point: &HistogramDataPoint) -> Distribution {
    Distribution {
        count: point.count as i64,
        mean: mean(point.count, point.sum),
        sum_of_squared_deviation: 0.0,
        range: None,
        bucket_options: Some(BucketOptions {
            options: Some(Options::ExplicitBuckets(Explicit {
                bounds: point.bounds.clone(),
            })),
        }),
        bucket_counts: point.bucket_counts.iter().map(|c| *c as i64).collect(),
    }
}

/// Base-2 exponential buckets become Cloud Monitoring exponential buckets. Everything
/// at or below zero lands in the underflow bucket; the overflow bucket is empty.
fn exponential_distribution(point: &ExponentialHistogramDataPoint) -> Distribution {
    let growth_factor = 2f64.powf(2f64.powi(-point.scale));
    let scale = growth_factor.powi(point.positive.offset);
    let underflow = point.zero_count + point.negative.counts.iter().sum::<u64>();

    let mut bucket_counts = Vec::with_capacity(point.positive.counts.len() + 2);
    bucket_counts.push(underflow as i64);
    bucket_counts.extend(point.positive.counts.iter().map(|c| *c as i64));
    bucket_counts.push(0);

    Distribution {
        count: point.count as i64,
        mean: mean(point.count, point.sum),
        sum_of_squared_deviation: 0.0,
        range: None,
        bucket_options: Some(BucketOptions {
            options: Some(Options::ExponentialBuckets(Exponential {
                num_finite_buckets: point.positive.counts.len() as i32,
                growth_factor,
                scale,
            })),
        }),
        bucket_counts,
    }
}

#[cfg(test)]
mod test {
    use std::time::{Duration, UNIX_EPOCH};

    use crate::{
        identity::TaskIdentity,
        proto::google::{
            api::{
                distribution::bucket_options::Options,
                metric_descriptor::{MetricKind, ValueType},
                MonitoredResource,
            },
            monitoring::v3::typed_value::Value,
        },
        transform::{metric_descriptor, time_series, wire_shape},
        types::{
            attributes, ExponentialBuckets, ExponentialHistogramDataPoint, HistogramDataPoint,
            MetricData, MetricStream, NumberDataPoint, NumberValue, SummaryDataPoint,
            Temporality,
        },
    };

    fn number_point(value: impl Into<NumberValue>) -> NumberDataPoint {
        NumberDataPoint {
            attributes: attributes([("keya", "value1")]),
            start_time: UNIX_EPOCH + Duration::from_secs(100),
            time: UNIX_EPOCH + Duration::from_secs(160),
            value: value.into(),
        }
    }

    fn counter(points: Vec<NumberDataPoint>) -> MetricStream {
        MetricStream::new(
            "mycounter",
            MetricData::Sum {
                monotonic: true,
                temporality: Temporality::Cumulative,
                points,
            },
        )
    }

    #[test_log::test]
    fn shapes() {
        assert_eq!(
            Some((MetricKind::Cumulative, ValueType::Int64)),
            wire_shape(&counter(vec![number_point(10i64)]).data)
        );
        assert_eq!(
            Some((MetricKind::Gauge, ValueType::Double)),
            wire_shape(&MetricData::Gauge(vec![number_point(1.5)]))
        );
        assert_eq!(
            Some((MetricKind::Gauge, ValueType::Int64)),
            wire_shape(&MetricData::Sum {
                monotonic: false,
                temporality: Temporality::Cumulative,
                points: vec![number_point(-3i64)],
            })
        );
        assert_eq!(
            None,
            wire_shape(&MetricData::Sum {
                monotonic: false,
                temporality: Temporality::Delta,
                points: vec![number_point(-3i64)],
            }),
            "delta up-down sums are changes, not levels"
        );
        assert_eq!(
            None,
            wire_shape(&MetricData::Sum {
                monotonic: true,
                temporality: Temporality::Delta,
                points: vec![number_point(3i64)],
            })
        );
        assert_eq!(
            None,
            wire_shape(&MetricData::Histogram {
                temporality: Temporality::Delta,
                points: vec![],
            })
        );
    }

    #[test_log::test]
    fn counter_descriptor() {
        let descriptor = metric_descriptor(
            &counter(vec![number_point(10i64)]).with_description("counts things"),
            "workload.googleapis.com/mycounter".to_string(),
            "projects/p",
            None,
        )
        .expect("counters are writable");

        assert_eq!(
            "projects/p/metricDescriptors/workload.googleapis.com/mycounter",
            descriptor.name
        );
        assert_eq!("workload.googleapis.com/mycounter", descriptor.r#type);
        assert_eq!("mycounter", descriptor.display_name);
        assert_eq!("counts things", descriptor.description);
        assert_eq!(MetricKind::Cumulative, descriptor.metric_kind());
        assert_eq!(ValueType::Int64, descriptor.value_type());
        assert_eq!(
            vec!["keya"],
            descriptor
                .labels
                .iter()
                .map(|l| l.key.as_str())
                .collect::<Vec<_>>()
        );
    }

    #[test_log::test]
    fn descriptor_labels_are_normalized_and_include_task() {
        let mut point = number_point(1i64);
        point.attributes = attributes([("http.method", "GET"), ("123", "x")]);
        let task = TaskIdentity::new("rust-1@host");
        let descriptor = metric_descriptor(
            &counter(vec![point]),
            "t".to_string(),
            "projects/p",
            Some(&task),
        )
        .expect("writable");

        assert_eq!(
            vec!["http_method", "key_123", "opentelemetry_task"],
            descriptor
                .labels
                .iter()
                .map(|l| l.key.as_str())
                .collect::<Vec<_>>()
        );
    }

    #[test_log::test]
    fn empty_and_unsupported_streams_have_no_descriptor() {
        assert!(metric_descriptor(&counter(vec![]), "t".to_string(), "projects/p", None).is_none());
        let summary = MetricStream::new(
            "latency",
            MetricData::Summary(vec![SummaryDataPoint {
                attributes: Default::default(),
                time: UNIX_EPOCH,
                count: 1,
                sum: 1.0,
            }]),
        );
        assert!(metric_descriptor(&summary, "t".to_string(), "projects/p", None).is_none());
    }

    #[test_log::test]
    fn counter_time_series() {
        let metric = counter(vec![number_point(10i64)]);
        let descriptor =
            metric_descriptor(&metric, "workload.googleapis.com/mycounter".to_string(), "projects/p", None)
                .expect("writable");
        let resource = MonitoredResource {
            r#type: "generic_node".to_string(),
            ..Default::default()
        };

        let records = time_series(&metric, &descriptor, &resource, None);
        assert_eq!(1, records.len());
        let record = &records[0];
        let labels = &record.metric.as_ref().expect("metric is set").labels;
        assert_eq!(1, labels.len());
        assert_eq!(Some(&"value1".to_string()), labels.get("keya"));
        assert_eq!(Some(&resource), record.resource.as_ref());

        let point = &record.points[0];
        let interval = point.interval.as_ref().expect("interval is set");
        assert_eq!(Some(100), interval.start_time.as_ref().map(|t| t.seconds));
        assert_eq!(Some(160), interval.end_time.as_ref().map(|t| t.seconds));
        assert_eq!(
            Some(&Value::Int64Value(10)),
            point.value.as_ref().and_then(|v| v.value.as_ref())
        );
    }

    #[test_log::test]
    fn gauges_have_no_start_time_and_follow_descriptor_type() {
        let metric = MetricStream::new(
            "temperature",
            MetricData::Gauge(vec![number_point(1.5), number_point(3i64)]),
        );
        let descriptor =
            metric_descriptor(&metric, "t".to_string(), "projects/p", None).expect("writable");
        let records = time_series(&metric, &descriptor, &Default::default(), None);

        assert_eq!(2, records.len());
        for record in &records {
            let point = &record.points[0];
            assert!(point.interval.as_ref().expect("interval").start_time.is_none());
        }
        assert_eq!(
            Some(&Value::DoubleValue(3.0)),
            records[1].points[0].value.as_ref().and_then(|v| v.value.as_ref())
        );
    }

    #[test_log::test]
    fn colliding_labels_keep_the_later_key_and_task_wins() {
        let mut point = number_point(1i64);
        point.attributes = attributes([
            ("a.b", "first"),
            ("a_b", "second"),
            ("opentelemetry_task", "user"),
        ]);
        let metric = counter(vec![point]);
        let task = TaskIdentity::new("rust-1@host");
        let descriptor =
            metric_descriptor(&metric, "t".to_string(), "projects/p", Some(&task)).expect("writable");
        let records = time_series(&metric, &descriptor, &Default::default(), Some(&task));

        let labels = &records[0].metric.as_ref().expect("metric").labels;
        assert_eq!(Some(&"second".to_string()), labels.get("a_b"));
        assert_eq!(Some(&"rust-1@host".to_string()), labels.get("opentelemetry_task"));
    }

    #[test_log::test]
    fn explicit_histogram_distribution() {
        let metric = MetricStream::new(
            "latency",
            MetricData::Histogram {
                temporality: Temporality::Cumulative,
                points: vec![HistogramDataPoint {
                    attributes: Default::default(),
                    start_time: UNIX_EPOCH,
                    time: UNIX_EPOCH + Duration::from_secs(1),
                    count: 4,
                    sum: 10.0,
                    bounds: vec![1.0, 5.0],
                    bucket_counts: vec![1, 2, 1],
                }],
            },
        );
        let descriptor =
            metric_descriptor(&metric, "t".to_string(), "projects/p", None).expect("writable");
        assert_eq!(ValueType::Distribution, descriptor.value_type());

        let records = time_series(&metric, &descriptor, &Default::default(), None);
        let Some(Value::DistributionValue(distribution)) =
            records[0].points[0].value.as_ref().and_then(|v| v.value.clone())
        else {
            panic!("expected a distribution");
        };
        assert_eq!(4, distribution.count);
        assert_eq!(2.5, distribution.mean);
        assert_eq!(vec![1, 2, 1], distribution.bucket_counts);
        let Some(Options::ExplicitBuckets(explicit)) =
            distribution.bucket_options.and_then(|o| o.options)
        else {
            panic!("expected explicit buckets");
        };
        assert_eq!(vec![1.0, 5.0], explicit.bounds);
    }

    #[test_log::test]
    fn exponential_histogram_distribution() {
        let metric = MetricStream::new(
            "sizes",
            MetricData::ExponentialHistogram {
                temporality: Temporality::Cumulative,
                points: vec![ExponentialHistogramDataPoint {
                    attributes: Default::default(),
                    start_time: UNIX_EPOCH,
                    time: UNIX_EPOCH + Duration::from_secs(1),
                    count: 0,
                    sum: 0.0,
                    scale: 1,
                    zero_count: 2,
                    positive: ExponentialBuckets {
                        offset: 2,
                        counts: vec![3, 4],
                    },
                    negative: ExponentialBuckets {
                        offset: 0,
                        counts: vec![1],
                    },
                }],
            },
        );
        let descriptor =
            metric_descriptor(&metric, "t".to_string(), "projects/p", None).expect("writable");
        let records = time_series(&metric, &descriptor, &Default::default(), None);
        let Some(Value::DistributionValue(distribution)) =
            records[0].points[0].value.as_ref().and_then(|v| v.value.clone())
        else {
            panic!("expected a distribution");
        };

        assert_eq!(0.0, distribution.mean, "empty distributions have mean 0");
        assert_eq!(vec![3, 3, 4, 0], distribution.bucket_counts);
        let Some(Options::ExponentialBuckets(exponential)) =
            distribution.bucket_options.and_then(|o| o.options)
        else {
            panic!("expected exponential buckets");
        };
        assert_eq!(2, exponential.num_finite_buckets);
        assert!((exponential.growth_factor - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert!((exponential.scale - 2.0).abs() < 1e-12);
    }

    #[test_log::test]
    fn mixed_number_streams_are_doubles() {
        let metric = MetricStream::new(
            "load",
            MetricData::Gauge(vec![number_point(1i64), number_point(2.7)]),
        );
        let descriptor =
            metric_descriptor(&metric, "t".to_string(), "projects/p", None).expect("writable");
        assert_eq!(ValueType::Double, descriptor.value_type());

        let records = time_series(&metric, &descriptor, &Default::default(), None);
        let values: Vec<_> = records
            .iter()
            .map(|record| record.points[0].value.as_ref().and_then(|v| v.value.clone()))
            .collect();
        assert_eq!(
            vec![Some(Value::DoubleValue(1.0)), Some(Value::DoubleValue(2.7))],
            values
        );
    }

    #[test_log::test]
    fn descriptor_declares_every_series_label() {
        let mut ok = number_point(1i64);
        ok.attributes = attributes([("route", "/a")]);
        let mut failed = number_point(1i64);
        failed.attributes = attributes([("route", "/a"), ("error.type", "timeout")]);
        let metric = MetricStream::new("requests", MetricData::Gauge(vec![ok, failed]));
        let task = TaskIdentity::new("rust-1@host");

        let descriptor =
            metric_descriptor(&metric, "t".to_string(), "projects/p", Some(&task)).expect("writable");
        let declared: Vec<&str> = descriptor.labels.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(vec!["error_type", "opentelemetry_task", "route"], declared);

        for record in time_series(&metric, &descriptor, &Default::default(), Some(&task)) {
            for key in record.metric.expect("metric is set").labels.keys() {
                assert!(declared.contains(&key.as_str()), "{key} is not declared");
            }
        }
    }
}
