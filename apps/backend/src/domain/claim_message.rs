use serde::Serialize;

/// Qualitative label attached to a claim probability for display.
///
/// Bands are checked in declaration order. Percentages in `[0.01, 1.000001]`
/// match none of the first four bands and land in `GoodChance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimBand {
    /// Below 1e-11 percent.
    SnowballsChance,
    /// `[1e-11, 1e-6)` percent.
    Outrageous,
    /// `[1e-6, 0.01)` percent.
    SlimPickings,
    /// `(1.000001, 50)` percent.
    WellMaybe,
    /// Everything else.
    GoodChance,
}

impl ClaimBand {
    pub fn for_percent(percent: f64) -> Self {
        if percent < 1e-11 {
            Self::SnowballsChance
        } else if percent < 1e-6 {
            Self::Outrageous
        } else if percent < 0.01 {
            Self::SlimPickings
        } else if percent > 1.000001 && percent < 50.0 {
            Self::WellMaybe
        } else {
            Self::GoodChance
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SnowballsChance => "A snowball's chance in hell",
            Self::Outrageous => "An outrageous claim",
            Self::SlimPickings => "Pretty slim pickings",
            Self::WellMaybe => "Well, maybe",
            Self::GoodChance => "Darn, that's a pretty good chance",
        }
    }

    /// Decimal places shown for a percentage in this band.
    pub const fn precision(self) -> usize {
        match self {
            Self::SnowballsChance => 15,
            Self::Outrageous => 12,
            Self::SlimPickings => 6,
            Self::WellMaybe => 2,
            Self::GoodChance => 20,
        }
    }

    /// Arrow between label and value; the three unlikely bands pad it with
    /// a second space.
    pub const fn separator(self) -> &'static str {
        match self {
            Self::SnowballsChance | Self::Outrageous | Self::SlimPickings => "->  ",
            Self::WellMaybe | Self::GoodChance => "-> ",
        }
    }

    pub fn describe(self, percent: f64) -> String {
        format!(
            "{} {}{:.*}%",
            self.label(),
            self.separator(),
            self.precision(),
            percent
        )
    }
}

/// Evaluated claim: exact percentage plus its display band and message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimOdds {
    /// Percentage in `[0, 100]`, full precision.
    pub probability: f64,
    pub band: ClaimBand,
    pub message: String,
}

impl ClaimOdds {
    pub fn from_percent(percent: f64) -> Self {
        let band = ClaimBand::for_percent(percent);
        Self {
            probability: percent,
            band,
            message: band.describe(percent),
        }
    }
}
