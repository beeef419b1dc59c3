use std::{
    borrow::Borrow,
    cmp::Ordering,
    collections::BTreeMap,
    fmt::Display,
    hash::{Hash, Hasher},
    sync::Arc,
    time::SystemTime,
};

/// An identifier for metrics and attribute keys.
#[derive(Debug, Clone)]
pub enum Name {
    /// A static string Name.
    Str(&'static str),
    /// A String name. Avoid these when you can, because clones can add up.
    String(String),
    /// If you have a rarely-changing identifier you could consider using shared memory
    /// instead of cloning repeatedly.
    Shared(Arc<String>),
}

impl Name {
    /// an &str view of the name
    pub fn as_str(&self) -> &str {
        match self {
            Name::Str(s) => s,
            Name::String(s) => s,
            Name::Shared(s) => s,
        }
    }
}

// Names compare by content so that `Str("a")` and `String("a")` are the same key.
impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        match name {
            Name::Str(s) => s.to_owned(),
            Name::String(s) => s,
            Name::Shared(s) => {
                std::sync::Arc::<String>::try_unwrap(s).unwrap_or_else(|this| this.to_string())
            }
        }
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value part of an attribute's key/value pair.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// A static string value. Feel really good about these.
    Str(&'static str),
    /// Avoid String values when you can, as clones can add up.
    String(String),
    /// A shared string, for rarely-changing values like resource identifiers.
    Shared(Arc<String>),
    /// A signed integer value.
    I64(i64),
    /// A floating point value.
    F64(f64),
    /// A boolean value.
    Bool(bool),
    /// A homogeneous or mixed list of values.
    Array(Vec<AttributeValue>),
}

impl AttributeValue {
    /// Canonical text for use as a label value.
    ///
    /// Scalars render as their plain text, arrays render as JSON array text: `[1,2]`.
    pub fn to_label_value(&self) -> String {
        match self {
            AttributeValue::Array(_) => serde_json::Value::from(self).to_string(),
            other => other.to_string(),
        }
    }

    /// True when this value carries no usable text.
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            AttributeValue::Str(s) => s.is_empty(),
            AttributeValue::String(s) => s.is_empty(),
            AttributeValue::Shared(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Str(s) => write!(f, "{s}"),
            AttributeValue::String(s) => write!(f, "{s}"),
            AttributeValue::Shared(s) => write!(f, "{s}"),
            AttributeValue::I64(n) => write!(f, "{n}"),
            AttributeValue::F64(n) => write!(f, "{n}"),
            AttributeValue::Bool(b) => write!(f, "{b}"),
            AttributeValue::Array(_) => write!(f, "{}", serde_json::Value::from(self)),
        }
    }
}

impl From<&AttributeValue> for serde_json::Value {
    fn from(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::Str(s) => serde_json::Value::from(*s),
            AttributeValue::String(s) => serde_json::Value::from(s.as_str()),
            AttributeValue::Shared(s) => serde_json::Value::from(s.as_str()),
            AttributeValue::I64(n) => serde_json::Value::from(*n),
            AttributeValue::F64(n) => serde_json::Value::from(*n),
            AttributeValue::Bool(b) => serde_json::Value::from(*b),
            AttributeValue::Array(values) => {
                serde_json::Value::Array(values.iter().map(serde_json::Value::from).collect())
            }
        }
    }
}

/// Attributes of a resource or a data point. Ordered so that label sets are stable.
pub type Attributes = BTreeMap<Name, AttributeValue>;

/// Build an attribute map from anything pair-shaped.
pub fn attributes(
    pairs: impl IntoIterator<Item = (impl Into<Name>, impl Into<AttributeValue>)>,
) -> Attributes {
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

/// The entity producing telemetry, as described by a resource detector.
///
/// The exporter does no environment probing of its own; whatever attributes
/// arrive here are all it knows about where it is running.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    attributes: Attributes,
}

impl Resource {
    /// Create a resource from its attributes.
    pub fn new(
        attributes: impl IntoIterator<Item = (impl Into<Name>, impl Into<AttributeValue>)>,
    ) -> Self {
        Self {
            attributes: self::attributes(attributes),
        }
    }

    /// Look up an attribute by key.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// All attributes of this resource.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// One export's worth of metrics, all produced by the same resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceMetrics {
    /// Where the metrics came from.
    pub resource: Resource,
    /// The collected metric streams.
    pub metrics: Vec<MetricStream>,
}

/// A named stream of data points as collected by the metrics sdk.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricStream {
    /// Instrument name. Becomes the suffix of the metric type.
    pub name: Name,
    /// Instrument description.
    pub description: String,
    /// Instrument unit, UCUM.
    pub unit: String,
    /// The collected data.
    pub data: MetricData,
}

impl MetricStream {
    /// A stream with no description and unit "1".
    pub fn new(name: impl Into<Name>, data: MetricData) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            unit: "1".to_string(),
            data,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

/// How a point's value relates to the points before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporality {
    /// Accumulated since the start time, which stays fixed.
    Cumulative,
    /// Accumulated since the previous report.
    Delta,
}

/// The shape of a metric stream's data.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricData {
    /// Instantaneous values.
    Gauge(Vec<NumberDataPoint>),
    /// Added-up values.
    Sum {
        /// Whether the sum only goes up.
        monotonic: bool,
        /// Reporting temporality.
        temporality: Temporality,
        /// The points.
        points: Vec<NumberDataPoint>,
    },
    /// Explicit-bucket distributions.
    Histogram {
        /// Reporting temporality.
        temporality: Temporality,
        /// The points.
        points: Vec<HistogramDataPoint>,
    },
    /// Base-2 exponential-bucket distributions.
    ExponentialHistogram {
        /// Reporting temporality.
        temporality: Temporality,
        /// The points.
        points: Vec<ExponentialHistogramDataPoint>,
    },
    /// Quantile summaries. Cloud Monitoring has no representation for these.
    Summary(Vec<SummaryDataPoint>),
}

impl MetricData {
    /// Number of points carried, whatever the shape.
    pub fn point_count(&self) -> usize {
        match self {
            MetricData::Gauge(points) => points.len(),
            MetricData::Sum { points, .. } => points.len(),
            MetricData::Histogram { points, .. } => points.len(),
            MetricData::ExponentialHistogram { points, .. } => points.len(),
            MetricData::Summary(points) => points.len(),
        }
    }

    /// Short name of the shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            MetricData::Gauge(_) => "gauge",
            MetricData::Sum { .. } => "sum",
            MetricData::Histogram { .. } => "histogram",
            MetricData::ExponentialHistogram { .. } => "exponential_histogram",
            MetricData::Summary(_) => "summary",
        }
    }
}

/// A numeric value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    /// an integer value
    I64(i64),
    /// a floating point value
    F64(f64),
}

/// A single number at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberDataPoint {
    /// Point attributes; these become metric labels.
    pub attributes: Attributes,
    /// Start of the accumulation window.
    pub start_time: SystemTime,
    /// When the value was observed.
    pub time: SystemTime,
    /// The value.
    pub value: NumberValue,
}

/// An explicit-bucket histogram at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramDataPoint {
    /// Point attributes; these become metric labels.
    pub attributes: Attributes,
    /// Start of the accumulation window.
    pub start_time: SystemTime,
    /// When the value was observed.
    pub time: SystemTime,
    /// Number of recorded values.
    pub count: u64,
    /// Sum of recorded values.
    pub sum: f64,
    /// Bucket upper bounds, ascending. There is one more bucket than bounds.
    pub bounds: Vec<f64>,
    /// Count per bucket.
    pub bucket_counts: Vec<u64>,
}

/// One side of an exponential histogram.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExponentialBuckets {
    /// Index of the first bucket.
    pub offset: i32,
    /// Count per bucket, starting at `offset`.
    pub counts: Vec<u64>,
}

/// A base-2 exponential histogram at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialHistogramDataPoint {
    /// Point attributes; these become metric labels.
    pub attributes: Attributes,
    /// Start of the accumulation window.
    pub start_time: SystemTime,
    /// When the value was observed.
    pub time: SystemTime,
    /// Number of recorded values.
    pub count: u64,
    /// Sum of recorded values.
    pub sum: f64,
    /// Bucket resolution. Bucket boundaries are powers of `2^(2^-scale)`.
    pub scale: i32,
    /// Values that fell in the zero bucket.
    pub zero_count: u64,
    /// Buckets for positive values.
    pub positive: ExponentialBuckets,
    /// Buckets for negative values.
    pub negative: ExponentialBuckets,
}

/// A quantile summary at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryDataPoint {
    /// Point attributes.
    pub attributes: Attributes,
    /// When the value was observed.
    pub time: SystemTime,
    /// Number of recorded values.
    pub count: u64,
    /// Sum of recorded values.
    pub sum: f64,
}

impl From<&'static str> for Name {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Str(s)
    }
}

impl From<String> for Name {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Arc<String>> for Name {
    #[inline]
    fn from(s: Arc<String>) -> Self {
        Self::Shared(s)
    }
}

impl From<&'static str> for AttributeValue {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Str(s)
    }
}

impl From<String> for AttributeValue {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Arc<String>> for AttributeValue {
    #[inline]
    fn from(s: Arc<String>) -> Self {
        Self::Shared(s)
    }
}

impl From<i64> for AttributeValue {
    #[inline]
    fn from(n: i64) -> Self {
        AttributeValue::I64(n)
    }
}

impl From<i32> for AttributeValue {
    #[inline]
    fn from(n: i32) -> Self {
        AttributeValue::I64(n.into())
    }
}

impl From<u32> for AttributeValue {
    #[inline]
    fn from(n: u32) -> Self {
        AttributeValue::I64(n.into())
    }
}

impl From<f64> for AttributeValue {
    #[inline]
    fn from(n: f64) -> Self {
        AttributeValue::F64(n)
    }
}

impl From<bool> for AttributeValue {
    #[inline]
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl<T> From<Vec<T>> for AttributeValue
where
    T: Into<AttributeValue>,
{
    #[inline]
    fn from(values: Vec<T>) -> Self {
        AttributeValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<i64> for NumberValue {
    #[inline]
    fn from(n: i64) -> Self {
        NumberValue::I64(n)
    }
}

impl From<u32> for NumberValue {
    #[inline]
    fn from(n: u32) -> Self {
        NumberValue::I64(n.into())
    }
}

impl From<f64> for NumberValue {
    #[inline]
    fn from(n: f64) -> Self {
        NumberValue::F64(n)
    }
}
