//! Chart configuration as plain data.
//!
//! Front ends turn a [`ChartSpec`] into whatever their charting widget needs; nothing here
//! depends on a rendering library.

use crate::format::MarketFormat;
use crate::model::MarketSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartSlot {
    Price,
    Yield,
}

impl ChartSlot {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Price => "Median Price",
            Self::Yield => "Rental Yield",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesRole {
    /// The selected suburb
    Primary,
    /// SA3 statistical area around the suburb
    AreaReference,
    /// Capital region
    RegionReference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub width: u8,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub label: String,
    pub values: Vec<f64>,
    pub role: SeriesRole,
    pub color: Rgb,
    pub stroke: Stroke,
    pub fill: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Ticks `$1.3M`, tooltips `$1,250,000`
    CurrencyShort,
    /// Ticks `3.9%`, tooltips `3.85%`
    Percent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub slot: ChartSlot,
    pub title: String,
    pub x_labels: Vec<String>,
    pub series: Vec<SeriesSpec>,
    pub value_format: ValueFormat,
    pub format: MarketFormat,
}

const PRICE_PALETTE: [Rgb; 3] = [Rgb(37, 99, 235), Rgb(245, 158, 11), Rgb(16, 185, 129)];
const YIELD_PALETTE: [Rgb; 3] = [Rgb(139, 92, 246), Rgb(245, 158, 11), Rgb(236, 72, 153)];

const PRIMARY_STROKE: Stroke = Stroke {
    width: 3,
    dashed: false,
};
const REFERENCE_STROKE: Stroke = Stroke {
    width: 2,
    dashed: true,
};

pub fn price_chart_spec(series: &MarketSeries, format: &MarketFormat) -> ChartSpec {
    build_spec(
        ChartSlot::Price,
        series,
        PRICE_PALETTE,
        ValueFormat::CurrencyShort,
        format,
    )
}

pub fn yield_chart_spec(series: &MarketSeries, format: &MarketFormat) -> ChartSpec {
    build_spec(
        ChartSlot::Yield,
        series,
        YIELD_PALETTE,
        ValueFormat::Percent,
        format,
    )
}

fn build_spec(
    slot: ChartSlot,
    source: &MarketSeries,
    palette: [Rgb; 3],
    value_format: ValueFormat,
    format: &MarketFormat,
) -> ChartSpec {
    let columns = [
        (&source.labels.suburb, &source.suburb_values, SeriesRole::Primary),
        (&source.labels.sa3, &source.sa3_values, SeriesRole::AreaReference),
        (&source.labels.cr, &source.cr_values, SeriesRole::RegionReference),
    ];

    let series = columns
        .into_iter()
        .zip(palette)
        .map(|((label, values, role), color)| {
            let primary = role == SeriesRole::Primary;
            SeriesSpec {
                label: label.clone(),
                values: values.clone(),
                role,
                color,
                stroke: if primary { PRIMARY_STROKE } else { REFERENCE_STROKE },
                fill: primary,
            }
        })
        .collect();

    ChartSpec {
        slot,
        title: slot.title().to_string(),
        x_labels: source
            .dates
            .iter()
            .map(|date| format.month_year(date))
            .collect(),
        series,
        value_format,
        format: *format,
    }
}

impl ChartSpec {
    /// Axis tick text for a value.
    pub fn tick(&self, value: f64) -> String {
        match self.value_format {
            ValueFormat::CurrencyShort => self.format.currency_short(value),
            ValueFormat::Percent => self.format.percent_fixed(value, 1),
        }
    }

    /// Exact value text shown when inspecting a point.
    pub fn tooltip(&self, value: f64) -> String {
        match self.value_format {
            ValueFormat::CurrencyShort => self.format.currency(value),
            ValueFormat::Percent => self.format.percent_fixed(value, 2),
        }
    }

    /// Heading plus one `label: value` line per series at `index`.
    pub fn tooltip_lines(&self, index: usize) -> Vec<String> {
        let Some(heading) = self.x_labels.get(index) else {
            return Vec::new();
        };

        std::iter::once(heading.clone())
            .chain(self.series.iter().filter_map(|series| {
                let value = series.values.get(index)?;
                Some(format!("{}: {}", series.label, self.tooltip(*value)))
            }))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.x_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_labels.is_empty()
    }

    /// `(index, value)` pairs of one series, skipping non-finite values.
    pub fn points(&self, series_index: usize) -> Vec<(f64, f64)> {
        self.series
            .get(series_index)
            .map(|series| {
                series
                    .values
                    .iter()
                    .enumerate()
                    .filter(|(_, value)| value.is_finite())
                    .map(|(index, value)| (index as f64, *value))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, (self.len().saturating_sub(1) as f64).max(1.0)]
    }

    /// Value range across all series with 5% headroom; the axis does not start at zero.
    pub fn y_bounds(&self) -> [f64; 2] {
        let (min, max) = self
            .series
            .iter()
            .flat_map(|series| series.values.iter().copied())
            .filter(|value| value.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
                (min.min(value), max.max(value))
            });

        if min > max {
            return [0.0, 1.0];
        }

        let span = max - min;
        let padding = if span == 0.0 {
            (max.abs() * 0.05).max(1.0)
        } else {
            span * 0.05
        };
        [min - padding, max + padding]
    }

    /// `count` evenly spaced date labels, first and last always included.
    pub fn x_axis_labels(&self, count: usize) -> Vec<String> {
        let len = self.x_labels.len();
        if len == 0 || count == 0 {
            return Vec::new();
        }
        if count == 1 || len == 1 {
            return vec![self.x_labels[0].clone()];
        }

        let count = count.min(len);
        (0..count)
            .map(|step| {
                let index = (step * (len - 1) + (count - 1) / 2) / (count - 1);
                self.x_labels[index].clone()
            })
            .collect()
    }

    /// `count` tick labels spread evenly over [`Self::y_bounds`].
    pub fn y_axis_labels(&self, count: usize) -> Vec<String> {
        let [low, high] = self.y_bounds();
        match count {
            0 => Vec::new(),
            1 => vec![self.tick(low)],
            _ => (0..count)
                .map(|step| {
                    let ratio = step as f64 / (count - 1) as f64;
                    self.tick((high - low).mul_add(ratio, low))
                })
                .collect(),
        }
    }
}
