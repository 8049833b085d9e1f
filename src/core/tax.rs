use serde::Serialize;

/// One progressive band: income up to `threshold` (above the previous band) is taxed at `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBand {
    #[serde(serialize_with = "serialize_threshold")]
    pub threshold: f64,
    pub rate: f64,
}

impl TaxBand {
    pub const fn new(threshold: f64, rate: f64) -> Self {
        Self { threshold, rate }
    }
}

// JSON has no infinity; the open top band is written as null.
fn serialize_threshold<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if value.is_finite() {
        serializer.serialize_some(value)
    } else {
        serializer.serialize_none()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegion {
    England,
    Scotland,
}

const ENGLAND_BANDS: [TaxBand; 4] = [
    TaxBand::new(12_570.0, 0.0),
    TaxBand::new(50_270.0, 0.20),
    TaxBand::new(125_140.0, 0.40),
    TaxBand::new(f64::INFINITY, 0.45),
];

const SCOTLAND_BANDS: [TaxBand; 6] = [
    TaxBand::new(12_570.0, 0.0),
    TaxBand::new(14_667.0, 0.19),
    TaxBand::new(25_296.0, 0.20),
    TaxBand::new(43_662.0, 0.21),
    TaxBand::new(150_000.0, 0.41),
    TaxBand::new(f64::INFINITY, 0.46),
];

impl TaxRegion {
    pub fn bands(self) -> Vec<TaxBand> {
        match self {
            TaxRegion::England => ENGLAND_BANDS.to_vec(),
            TaxRegion::Scotland => SCOTLAND_BANDS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaxBandError {
    #[error("tax band table is empty")]
    Empty,
    #[error("tax band {index} threshold {threshold} does not exceed the previous threshold")]
    NotAscending { index: usize, threshold: f64 },
    #[error("tax band {index} rate {rate} must be between 0 and 1")]
    RateOutOfRange { index: usize, rate: f64 },
    #[error("final tax band must be unbounded")]
    BoundedTop,
}

pub fn validate_bands(bands: &[TaxBand]) -> Result<(), TaxBandError> {
    let Some(last) = bands.last() else {
        return Err(TaxBandError::Empty);
    };

    let mut previous = 0.0;
    for (index, band) in bands.iter().enumerate() {
        if band.threshold.is_nan() || band.threshold <= previous {
            return Err(TaxBandError::NotAscending {
                index,
                threshold: band.threshold,
            });
        }
        if !(0.0..=1.0).contains(&band.rate) {
            return Err(TaxBandError::RateOutOfRange {
                index,
                rate: band.rate,
            });
        }
        previous = band.threshold;
    }

    if last.threshold.is_finite() {
        return Err(TaxBandError::BoundedTop);
    }
    Ok(())
}

/// Tax owed on `income` under progressive `bands`, walked from the lowest threshold up.
pub fn income_tax(income: f64, bands: &[TaxBand]) -> f64 {
    let mut tax = 0.0;
    let mut previous_threshold = 0.0;
    for band in bands {
        if income <= previous_threshold {
            break;
        }
        let slice = income.min(band.threshold) - previous_threshold;
        tax += slice * band.rate;
        previous_threshold = band.threshold;
    }
    tax
}
