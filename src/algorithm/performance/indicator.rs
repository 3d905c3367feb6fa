//! Health indicators tracked by the dashboard
//!
//! Indicators are an explicit enumeration. Free-form names coming from the
//! data layer (column names, panel keys) are resolved to an `Indicator`
//! once, through an ordered pattern table, and everything downstream works
//! with the enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether higher or lower raw values indicate better performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// How municipality rows combine into a regional value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Rates and densities are averaged
    Mean,
    /// Counts are summed
    Sum,
}

/// A health indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Health workers per 10,000 population
    HealthWorkerDensity,
    /// Drug-sensitive TB treatment success rate
    TbTreatmentSuccess,
    /// Multi-drug resistant TB treatment success rate
    MdrTbSuccess,
    TbTreatmentCompletion,
    /// Rifampicin resistance rate
    TbDrugResistance,
    HivViralSuppression,
    /// HIV prevalence per 100,000 population
    HivPrevalence,
    ArtCoverage,
    HivTestingCoverage,
    ImmunizationCoverage,
    PeopleLivingWithHiv,
    HealthFacilities,
    Population,
}

/// Name patterns, most specific first; the first match wins
const NAME_PATTERNS: &[(&str, Indicator)] = &[
    ("mdr_tb_success", Indicator::MdrTbSuccess),
    ("tb_ds_treatment_success", Indicator::TbTreatmentSuccess),
    ("ds_tb_success", Indicator::TbTreatmentSuccess),
    ("tb_treatment_success", Indicator::TbTreatmentSuccess),
    ("tb_success_rate", Indicator::TbTreatmentSuccess),
    ("treatment_completion", Indicator::TbTreatmentCompletion),
    ("drug_resistance", Indicator::TbDrugResistance),
    ("hiv_viral_suppression", Indicator::HivViralSuppression),
    ("viral_suppression", Indicator::HivViralSuppression),
    ("hiv_prevalence", Indicator::HivPrevalence),
    ("art_coverage", Indicator::ArtCoverage),
    ("testing_coverage", Indicator::HivTestingCoverage),
    ("immunization_coverage", Indicator::ImmunizationCoverage),
    ("health_worker_density", Indicator::HealthWorkerDensity),
    ("living_with_hiv", Indicator::PeopleLivingWithHiv),
    ("total_hiv_cases", Indicator::PeopleLivingWithHiv),
    ("health_facilities", Indicator::HealthFacilities),
    ("total_population", Indicator::Population),
];

impl Indicator {
    pub const ALL: [Self; 13] = [
        Self::HealthWorkerDensity,
        Self::TbTreatmentSuccess,
        Self::MdrTbSuccess,
        Self::TbTreatmentCompletion,
        Self::TbDrugResistance,
        Self::HivViralSuppression,
        Self::HivPrevalence,
        Self::ArtCoverage,
        Self::HivTestingCoverage,
        Self::ImmunizationCoverage,
        Self::PeopleLivingWithHiv,
        Self::HealthFacilities,
        Self::Population,
    ];

    /// Stable snake_case key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::HealthWorkerDensity => "health_worker_density",
            Self::TbTreatmentSuccess => "tb_treatment_success",
            Self::MdrTbSuccess => "mdr_tb_success",
            Self::TbTreatmentCompletion => "tb_treatment_completion",
            Self::TbDrugResistance => "tb_drug_resistance",
            Self::HivViralSuppression => "hiv_viral_suppression",
            Self::HivPrevalence => "hiv_prevalence",
            Self::ArtCoverage => "art_coverage",
            Self::HivTestingCoverage => "hiv_testing_coverage",
            Self::ImmunizationCoverage => "immunization_coverage",
            Self::PeopleLivingWithHiv => "people_living_with_hiv",
            Self::HealthFacilities => "health_facilities",
            Self::Population => "population",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HealthWorkerDensity => "Health Worker Density",
            Self::TbTreatmentSuccess => "DS-TB Treatment Success",
            Self::MdrTbSuccess => "MDR-TB Treatment Success",
            Self::TbTreatmentCompletion => "TB Treatment Completion",
            Self::TbDrugResistance => "TB Drug Resistance",
            Self::HivViralSuppression => "HIV Viral Suppression",
            Self::HivPrevalence => "HIV Prevalence",
            Self::ArtCoverage => "ART Coverage",
            Self::HivTestingCoverage => "HIV Testing Coverage",
            Self::ImmunizationCoverage => "Immunization Coverage",
            Self::PeopleLivingWithHiv => "People Living with HIV",
            Self::HealthFacilities => "Health Facilities",
            Self::Population => "Total Population",
        }
    }

    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::HealthWorkerDensity => "per 10,000 population",
            Self::HivPrevalence => "per 100,000 population",
            Self::PeopleLivingWithHiv => "cases",
            Self::HealthFacilities => "facilities",
            Self::Population => "people",
            _ => "%",
        }
    }

    #[must_use]
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::HivPrevalence | Self::TbDrugResistance => Polarity::LowerIsBetter,
            _ => Polarity::HigherIsBetter,
        }
    }

    #[must_use]
    pub const fn aggregation(self) -> Aggregation {
        match self {
            Self::PeopleLivingWithHiv | Self::HealthFacilities | Self::Population => {
                Aggregation::Sum
            }
            _ => Aggregation::Mean,
        }
    }

    /// Resolve a free-form indicator name
    ///
    /// Matching is case-insensitive and treats spaces and hyphens as
    /// underscores, so `"TB_DS_treatment_success_rate"` and `"DS-TB Success"`
    /// both resolve to `TbTreatmentSuccess`.
    #[must_use]
    pub fn resolve(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        NAME_PATTERNS
            .iter()
            .find(|(pattern, _)| normalized.contains(pattern))
            .map(|&(_, indicator)| indicator)
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Indicator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|indicator| indicator.key() == s)
            .or_else(|| Self::resolve(s))
            .ok_or_else(|| format!("Unknown indicator: {s}"))
    }
}
