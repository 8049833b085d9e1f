use super::types::Gender;

/// Projection end age used when the table has no entry for a gender and age.
pub const FALLBACK_AGE: u32 = 90;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfidenceLevel {
    Average,
    OneInFour,
    OneInTen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeExpectancy {
    pub current_age: u32,
    pub average: u32,
    pub one_in_four: u32,
    pub one_in_ten: u32,
}

impl LifeExpectancy {
    pub fn at(&self, level: ConfidenceLevel) -> u32 {
        match level {
            ConfidenceLevel::Average => self.average,
            ConfidenceLevel::OneInFour => self.one_in_four,
            ConfidenceLevel::OneInTen => self.one_in_ten,
        }
    }
}

const fn row(
    current_age: u32,
    average: u32,
    one_in_four: u32,
    one_in_ten: u32,
) -> LifeExpectancy {
    LifeExpectancy {
        current_age,
        average,
        one_in_four,
        one_in_ten,
    }
}

const MALE: [LifeExpectancy; 47] = [
    row(54, 84, 93, 97),
    row(55, 84, 92, 97),
    row(56, 84, 92, 97),
    row(57, 84, 92, 97),
    row(58, 84, 92, 97),
    row(59, 84, 92, 97),
    row(60, 85, 92, 97),
    row(61, 85, 92, 97),
    row(62, 85, 92, 97),
    row(63, 85, 92, 96),
    row(64, 85, 92, 96),
    row(65, 85, 92, 96),
    row(66, 85, 92, 96),
    row(67, 85, 92, 96),
    row(68, 86, 92, 96),
    row(69, 86, 92, 96),
    row(70, 86, 92, 96),
    row(71, 86, 92, 96),
    row(72, 86, 92, 96),
    row(73, 87, 92, 96),
    row(74, 87, 92, 96),
    row(75, 87, 92, 96),
    row(76, 87, 92, 96),
    row(77, 88, 92, 96),
    row(78, 88, 92, 96),
    row(79, 88, 93, 96),
    row(80, 89, 93, 96),
    row(81, 89, 93, 97),
    row(82, 90, 93, 97),
    row(83, 90, 93, 97),
    row(84, 91, 94, 97),
    row(85, 91, 94, 97),
    row(86, 92, 94, 98),
    row(87, 92, 95, 98),
    row(88, 93, 95, 98),
    row(89, 94, 96, 98),
    row(90, 94, 96, 99),
    row(91, 95, 97, 99),
    row(92, 96, 97, 100),
    row(93, 96, 98, 100),
    row(94, 97, 98, 101),
    row(95, 98, 99, 101),
    row(96, 99, 100, 102),
    row(97, 99, 100, 102),
    row(98, 100, 101, 103),
    row(99, 101, 102, 104),
    row(100, 102, 103, 104),
];

const FEMALE: [LifeExpectancy; 47] = [
    row(54, 87, 95, 99),
    row(55, 87, 95, 99),
    row(56, 87, 95, 99),
    row(57, 87, 94, 99),
    row(58, 87, 94, 99),
    row(59, 87, 94, 99),
    row(60, 87, 94, 98),
    row(61, 87, 94, 98),
    row(62, 87, 94, 98),
    row(63, 87, 94, 98),
    row(64, 87, 94, 98),
    row(65, 87, 94, 98),
    row(66, 87, 94, 98),
    row(67, 88, 94, 98),
    row(68, 88, 94, 98),
    row(69, 88, 94, 98),
    row(70, 88, 94, 98),
    row(71, 88, 94, 98),
    row(72, 88, 94, 98),
    row(73, 88, 94, 98),
    row(74, 89, 94, 98),
    row(75, 89, 94, 98),
    row(76, 89, 94, 98),
    row(77, 89, 94, 98),
    row(78, 90, 94, 98),
    row(79, 90, 94, 98),
    row(80, 90, 94, 98),
    row(81, 90, 94, 98),
    row(82, 91, 95, 98),
    row(83, 91, 95, 98),
    row(84, 92, 95, 98),
    row(85, 92, 95, 99),
    row(86, 93, 95, 99),
    row(87, 93, 96, 99),
    row(88, 94, 96, 99),
    row(89, 94, 97, 99),
    row(90, 95, 97, 100),
    row(91, 95, 97, 100),
    row(92, 96, 98, 100),
    row(93, 97, 98, 101),
    row(94, 97, 99, 101),
    row(95, 98, 100, 102),
    row(96, 99, 100, 102),
    row(97, 100, 101, 103),
    row(98, 100, 102, 103),
    row(99, 101, 102, 104),
    row(100, 102, 103, 105),
];

pub fn lookup(gender: Gender, current_age: u32) -> Option<LifeExpectancy> {
    let rows: &[LifeExpectancy] = match gender {
        Gender::Male => &MALE,
        Gender::Female => &FEMALE,
    };
    rows.iter().find(|r| r.current_age == current_age).copied()
}

pub fn life_expectancy(gender: Gender, current_age: u32, level: ConfidenceLevel) -> u32 {
    lookup(gender, current_age)
        .map(|r| r.at(level))
        .unwrap_or(FALLBACK_AGE)
}

/// Age with a one-in-four chance of being reached, used as the projection end age.
pub fn age_at_confidence_level(gender: Gender, current_age: u32) -> u32 {
    life_expectancy(gender, current_age, ConfidenceLevel::OneInFour)
}
