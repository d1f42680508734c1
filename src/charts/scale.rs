//! Coordinate scales for the canvas charts, kept free of any drawing so the
//! geometry can be tested directly.

/// Weight gridlines and tick labels sit on multiples of this step.
pub const WEIGHT_TICK: f32 = 5.0;

/// Maps a continuous domain onto a pixel range. The range may be inverted
/// (screen y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f32, f32),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    pub fn project(&self, value: f32) -> f32 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Maps discrete categories to contiguous equal-width position ranges, with
/// a padding ratio deciding how much of each step the band occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    range: (f32, f32),
    padding: f32,
}

impl BandScale {
    pub fn new(count: usize, range: (f32, f32), padding: f32) -> Self {
        Self {
            count: count.max(1),
            range,
            padding: padding.clamp(0.0, 0.95),
        }
    }

    pub fn step(&self) -> f32 {
        (self.range.1 - self.range.0) / self.count as f32
    }

    pub fn bandwidth(&self) -> f32 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the band for `index`, centered within its step.
    pub fn band_start(&self, index: usize) -> f32 {
        let step = self.step();
        self.range.0 + index as f32 * step + (step - self.bandwidth()) / 2.0
    }
}

/// Maps discrete categories to evenly spaced positions with edge padding
/// expressed in steps, the way a point scale with `padding(0.5)` behaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale {
    count: usize,
    range: (f32, f32),
    padding: f32,
}

impl PointScale {
    pub fn new(count: usize, range: (f32, f32), padding: f32) -> Self {
        Self {
            count: count.max(1),
            range,
            padding,
        }
    }

    pub fn position(&self, index: usize) -> f32 {
        if self.count == 1 {
            return (self.range.0 + self.range.1) / 2.0;
        }
        let step =
            (self.range.1 - self.range.0) / (self.count as f32 - 1.0 + 2.0 * self.padding);
        self.range.0 + step * (self.padding + index as f32)
    }
}

/// Weight-axis domain: floor is the largest multiple of 5 strictly below the
/// minimum, ceiling the smallest multiple of 5 at or above the maximum plus
/// a 2-unit visual pad. The strict floor guarantees a span of at least one
/// tick even for a single-sample or all-equal series.
pub fn weight_domain(kilograms: impl IntoIterator<Item = f32>) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for kilogram in kilograms {
        min = min.min(kilogram);
        max = max.max(kilogram);
    }

    if !min.is_finite() {
        return (0.0, WEIGHT_TICK + 2.0);
    }

    let mut floor = (min / WEIGHT_TICK).floor() * WEIGHT_TICK;
    if floor >= min {
        floor -= WEIGHT_TICK;
    }
    let ceiling = (max / WEIGHT_TICK).ceil() * WEIGHT_TICK;

    (floor, ceiling + 2.0)
}

/// Calorie-axis ceiling: twice the series maximum, compressing the bars to
/// the lower half of the plot on purpose.
pub fn calorie_ceiling(calories: impl IntoIterator<Item = f32>) -> f32 {
    let max = calories.into_iter().fold(0.0_f32, f32::max);
    (max * 2.0).max(1.0)
}

/// Multiples of 5 covered by the weight domain, lowest first.
pub fn weight_ticks(domain: (f32, f32)) -> Vec<f32> {
    let mut ticks = Vec::new();
    let mut tick = domain.0;
    while tick <= domain.1 {
        ticks.push(tick);
        tick += WEIGHT_TICK;
    }
    ticks
}
