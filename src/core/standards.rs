use serde::Serialize;

/// Retirement living standards: annual income needed for each level of lifestyle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LivingStandard {
    Minimum,
    Moderate,
    Comfortable,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Household {
    Single,
    Couple,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardTarget {
    pub standard: LivingStandard,
    pub household: Household,
    pub london: bool,
    pub annual_income: f64,
}

impl LivingStandard {
    pub const ALL: [LivingStandard; 3] = [
        LivingStandard::Minimum,
        LivingStandard::Moderate,
        LivingStandard::Comfortable,
    ];

    pub fn target_income(self, household: Household, london: bool) -> f64 {
        match (self, household, london) {
            (LivingStandard::Minimum, Household::Single, false) => 14_400.0,
            (LivingStandard::Minimum, Household::Single, true) => 15_700.0,
            (LivingStandard::Minimum, Household::Couple, false) => 22_400.0,
            (LivingStandard::Minimum, Household::Couple, true) => 24_500.0,
            (LivingStandard::Moderate, Household::Single, false) => 31_300.0,
            (LivingStandard::Moderate, Household::Single, true) => 32_800.0,
            (LivingStandard::Moderate, Household::Couple, false) => 43_100.0,
            (LivingStandard::Moderate, Household::Couple, true) => 44_900.0,
            (LivingStandard::Comfortable, Household::Single, false) => 47_000.0,
            (LivingStandard::Comfortable, Household::Single, true) => 53_000.0,
            (LivingStandard::Comfortable, Household::Couple, false) => 54_000.0,
            (LivingStandard::Comfortable, Household::Couple, true) => 60_000.0,
        }
    }
}

/// Every combination in the table, in a stable order.
pub fn all_targets() -> Vec<StandardTarget> {
    let mut targets = Vec::with_capacity(12);
    for standard in LivingStandard::ALL {
        for household in [Household::Single, Household::Couple] {
            for london in [false, true] {
                targets.push(StandardTarget {
                    standard,
                    household,
                    london,
                    annual_income: standard.target_income(household, london),
                });
            }
        }
    }
    targets
}
