//! Run-time chart configuration + fluent builder.

use crate::core::{
    color::BarColor,
    constants::{ABBREVIATE_FROM, DEFAULT_WIDTH, SMALL_TICK, TICK},
    error::ConfigError,
    humanize::Humanizer,
};

/// How values are mapped onto the bar budget.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Scale {
    /// `value * width / max`. Negative maxima give negative bars.
    #[default]
    Max,
    /// `(value - min) * width / (max - min)`.
    Range,
}

/// Immutable parameters handed to the chart driver.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: usize,
    pub scale: Scale,
    pub humanizer: Humanizer,
    pub tick: char,
    pub small_tick: char,
    pub color: Option<BarColor>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            scale: Scale::Max,
            humanizer: Humanizer::default(),
            tick: TICK,
            small_tick: SMALL_TICK,
            color: None,
        }
    }
}

impl ChartConfig {
    #[inline]
    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ChartConfigBuilder {
    width: Option<usize>,
    scale: Option<Scale>,
    abbreviate_from: Option<f64>,
    tick: Option<char>,
    small_tick: Option<char>,
    color: Option<BarColor>,
}

impl ChartConfigBuilder {
    #[inline]
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }
    #[inline]
    pub fn scale(mut self, s: Scale) -> Self {
        self.scale = Some(s);
        self
    }
    #[inline]
    pub fn abbreviate_from(mut self, t: f64) -> Self {
        self.abbreviate_from = Some(t);
        self
    }
    #[inline]
    pub fn tick(mut self, c: char) -> Self {
        self.tick = Some(c);
        self
    }
    #[inline]
    pub fn small_tick(mut self, c: char) -> Self {
        self.small_tick = Some(c);
        self
    }
    #[inline]
    pub fn color(mut self, c: BarColor) -> Self {
        self.color = Some(c);
        self
    }
    #[inline]
    pub fn color_opt(mut self, c: Option<BarColor>) -> Self {
        self.color = c;
        self
    }

    pub fn build(self) -> Result<ChartConfig, ConfigError> {
        let width = self.width.unwrap_or(DEFAULT_WIDTH);
        if width == 0 {
            return Err(ConfigError::InvalidWidth(width));
        }
        let threshold = self.abbreviate_from.unwrap_or(ABBREVIATE_FROM);
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(ChartConfig {
            width,
            scale: self.scale.unwrap_or_default(),
            humanizer: Humanizer::new(threshold),
            tick: self.tick.unwrap_or(TICK),
            small_tick: self.small_tick.unwrap_or(SMALL_TICK),
            color: self.color,
        })
    }
}
