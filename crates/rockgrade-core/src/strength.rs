//! Field estimate of uniaxial compressive strength.
//!
//! Bands follow the field hardness guide: each describes how a specimen
//! reacts to a geological hammer or knife, with example rocks and a
//! representative value used when the user picks the band directly.

use serde::Serialize;

/// One strength band in MPa.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthBand {
    /// Range as displayed, e.g. `"100-250"`.
    pub range: &'static str,
    pub description: &'static str,
    pub examples: &'static str,
    /// Value entered when the band itself is chosen.
    pub mid_value: f64,
    lower: f64,
    lower_inclusive: bool,
    upper: Option<f64>,
    upper_inclusive: bool,
}

impl StrengthBand {
    pub fn contains(&self, mpa: f64) -> bool {
        let above = if self.lower_inclusive {
            mpa >= self.lower
        } else {
            mpa > self.lower
        };
        let below = match self.upper {
            None => true,
            Some(upper) if self.upper_inclusive => mpa <= upper,
            Some(upper) => mpa < upper,
        };
        above && below
    }
}

/// Ordered strength bands, strongest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthScale {
    bands: Vec<StrengthBand>,
}

impl StrengthScale {
    pub fn bands(&self) -> &[StrengthBand] {
        &self.bands
    }

    pub fn band(&self, index: usize) -> Option<&StrengthBand> {
        self.bands.get(index)
    }

    /// Index of the band containing `mpa`. Values below 1 MPa (and NaN)
    /// have no band.
    pub fn classify(&self, mpa: f64) -> Option<usize> {
        self.bands.iter().position(|b| b.contains(mpa))
    }
}

impl Default for StrengthScale {
    fn default() -> Self {
        Self {
            bands: vec![
                StrengthBand {
                    range: ">250",
                    description: "Specimen can only be chipped with the geological hammer",
                    examples: "Fresh basalt, chert, diabase, gneiss, granite, quartzite",
                    mid_value: 275.0,
                    lower: 250.0,
                    lower_inclusive: false,
                    upper: None,
                    upper_inclusive: false,
                },
                StrengthBand {
                    range: "100-250",
                    description: "Specimen requires many blows of the hammer to fracture",
                    examples: "Amphibolite, sandstone, basalt, gabbro, gneiss, granodiorite, limestone",
                    mid_value: 175.0,
                    lower: 100.0,
                    lower_inclusive: true,
                    upper: Some(250.0),
                    upper_inclusive: true,
                },
                StrengthBand {
                    range: "50-100",
                    description: "Specimen requires more than one blow of the hammer to fracture",
                    examples: "Limestone, marble, phyllite, sandstone, schist, shale, siltstone",
                    mid_value: 75.0,
                    lower: 50.0,
                    lower_inclusive: true,
                    upper: Some(100.0),
                    upper_inclusive: false,
                },
                StrengthBand {
                    range: "25-50",
                    description: "Cannot be scraped or peeled with a knife; fractures with a single hammer blow",
                    examples: "Claystone, coal, schist, shale, siltstone",
                    mid_value: 37.5,
                    lower: 25.0,
                    lower_inclusive: true,
                    upper: Some(50.0),
                    upper_inclusive: false,
                },
                StrengthBand {
                    range: "5-25",
                    description: "Can be peeled by a knife with difficulty; a firm hammer point blow leaves a shallow indentation",
                    examples: "Chalk, rocksalt",
                    mid_value: 15.0,
                    lower: 5.0,
                    lower_inclusive: true,
                    upper: Some(25.0),
                    upper_inclusive: false,
                },
                StrengthBand {
                    range: "1-5",
                    description: "Crumbles under firm blows with the point of the hammer",
                    examples: "Highly weathered or altered rock",
                    mid_value: 3.0,
                    lower: 1.0,
                    lower_inclusive: true,
                    upper: Some(5.0),
                    upper_inclusive: false,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        let scale = StrengthScale::default();
        assert_eq!(scale.classify(300.0), Some(0));
        assert_eq!(scale.classify(250.0), Some(1));
        assert_eq!(scale.classify(120.0), Some(1));
        assert_eq!(scale.classify(100.0), Some(1));
        assert_eq!(scale.classify(99.9), Some(2));
        assert_eq!(scale.classify(50.0), Some(2));
        assert_eq!(scale.classify(25.0), Some(3));
        assert_eq!(scale.classify(5.0), Some(4));
        assert_eq!(scale.classify(1.0), Some(5));
        assert_eq!(scale.classify(0.5), None);
        assert_eq!(scale.classify(f64::NAN), None);
    }

    #[test]
    fn mid_values_fall_inside_their_band() {
        let scale = StrengthScale::default();
        for (idx, band) in scale.bands().iter().enumerate() {
            assert_eq!(scale.classify(band.mid_value), Some(idx), "{}", band.range);
        }
        assert_eq!(scale.band(3).map(|b| b.mid_value), Some(37.5));
        assert!(scale.band(6).is_none());
    }
}
