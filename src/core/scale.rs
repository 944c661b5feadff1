use crate::core::types::ViewMode;
use crate::error::{ChartError, ChartResult};

/// Minimum half-span enforced by horizontal bar charts.
pub const HBAR_MIN_HALF_SPAN: f64 = 10.0;

/// Value range used to map data into surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Range that always contains the zero baseline.
    pub fn zero_anchored(values: &[f64]) -> ChartResult<Self> {
        Self::anchored(values, 0.0)
    }

    /// Range that always spans at least `[-HBAR_MIN_HALF_SPAN, HBAR_MIN_HALF_SPAN]`.
    pub fn symmetric_min_span(values: &[f64]) -> ChartResult<Self> {
        Self::anchored(values, HBAR_MIN_HALF_SPAN)
    }

    fn anchored(values: &[f64], half_span: f64) -> ChartResult<Self> {
        let (actual_min, actual_max) = extent(values)?;
        Ok(Self {
            min: actual_min.min(-half_span),
            max: actual_max.max(half_span),
        })
    }

    /// Normalization divisor shared by every chart: `max - min + 1`.
    ///
    /// The `+ 1` keeps the divisor non-zero for constant data. Overflows for
    /// ranges wider than `f64::MAX`; geometry goes through `position` and
    /// `share` instead.
    #[must_use]
    pub fn divisor(self) -> f64 {
        self.max - self.min + 1.0
    }

    /// `(value - min) / divisor`, finite for every finite `value` and range.
    #[must_use]
    pub fn position(self, value: f64) -> f64 {
        (value / 2.0 - self.min / 2.0) / self.half_divisor()
    }

    /// `value / divisor`, finite for every finite `value` and range.
    #[must_use]
    pub fn share(self, value: f64) -> f64 {
        (value / 2.0) / self.half_divisor()
    }

    // Halving both bounds keeps the span representable.
    fn half_divisor(self) -> f64 {
        self.max / 2.0 - self.min / 2.0 + 0.5
    }
}

/// Mean and standard error of the mean.
///
/// `sem = sqrt(sum((v - mean)^2) / n^2)`. The `n^2` divisor (rather than
/// `n * (n - 1)`) is kept on purpose so charts match the established output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemStats {
    pub mean: f64,
    pub sem: f64,
}

impl SemStats {
    pub fn compute(values: &[f64]) -> ChartResult<Self> {
        ensure_non_empty(values)?;
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let squares: f64 = values.iter().map(|value| (value - mean) * (value - mean)).sum();
        Ok(Self {
            mean,
            sem: (squares / n / n).sqrt(),
        })
    }

    /// Sums of very large values overflow; such stats cannot be drawn.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.mean.is_finite() && self.sem.is_finite()
    }
}

/// Per-value sector extents for pie charts, in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlices {
    pub sum: f64,
    pub angles: Vec<f64>,
}

impl PieSlices {
    pub fn compute(values: &[f64]) -> ChartResult<Self> {
        ensure_non_empty(values)?;
        let sum: f64 = values.iter().sum();
        let angles = values.iter().map(|value| value / sum * 360.0).collect();
        Ok(Self { sum, angles })
    }

    /// Pie charts need a positive finite total and no negative shares.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.sum > 0.0
            && self.sum.is_finite()
            && self
                .angles
                .iter()
                .all(|angle| angle.is_finite() && *angle >= 0.0)
    }
}

/// Scale computer output for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartScale {
    Linear(ValueRange),
    Sem { range: ValueRange, stats: SemStats },
    Pie(PieSlices),
}

impl ChartScale {
    pub fn compute(values: &[f64], mode: ViewMode) -> ChartResult<Self> {
        match mode {
            ViewMode::Line | ViewMode::Bar => Ok(Self::Linear(ValueRange::zero_anchored(values)?)),
            ViewMode::HBar => Ok(Self::Linear(ValueRange::symmetric_min_span(values)?)),
            ViewMode::Sem => Ok(Self::Sem {
                range: ValueRange::zero_anchored(values)?,
                stats: SemStats::compute(values)?,
            }),
            ViewMode::Pie => Ok(Self::Pie(PieSlices::compute(values)?)),
        }
    }

    /// Whether this scale can be drawn as computed.
    ///
    /// SEM needs non-negative data (a zero-anchored minimum of 0) and finite
    /// statistics; pie needs drawable slices. Other scales always draw.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        match self {
            Self::Linear(_) => true,
            Self::Sem { range, stats } => range.min >= 0.0 && stats.is_finite(),
            Self::Pie(slices) => slices.is_drawable(),
        }
    }

    #[must_use]
    pub fn range(&self) -> Option<ValueRange> {
        match self {
            Self::Linear(range) | Self::Sem { range, .. } => Some(*range),
            Self::Pie(_) => None,
        }
    }
}

fn extent(values: &[f64]) -> ChartResult<(f64, f64)> {
    ensure_non_empty(values)?;
    Ok(values.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), value| (min.min(*value), max.max(*value)),
    ))
}

fn ensure_non_empty(values: &[f64]) -> ChartResult<()> {
    if values.is_empty() {
        return Err(ChartError::InvalidData(
            "scale requires at least one value".to_owned(),
        ));
    }
    Ok(())
}
