use serde::{Deserialize, Serialize};

/// Significance tier assigned to a feast in the reference table.
///
/// Closed enum: the scorer maps each variant to a fixed component and has
/// no fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeastSignificance {
    High,
    Medium,
    Low,
}

impl FeastSignificance {
    pub fn label(&self) -> &'static str {
        match self {
            FeastSignificance::High => "high",
            FeastSignificance::Medium => "medium",
            FeastSignificance::Low => "low",
        }
    }
}

/// Static definition of one feast: metadata plus its observed Gregorian
/// date for each supported year.
pub(crate) struct FeastDef {
    pub name: &'static str,
    pub hebrew_name: &'static str,
    pub significance: FeastSignificance,
    pub biblical_reference: &'static str,
    pub prophetic_importance: &'static str,
    /// Length of the observance in days. 1 means no end date.
    pub duration_days: u32,
    /// (year, month, day) of the first day, one entry per supported year.
    pub dates: &'static [(i32, u32, u32)],
}

/// First and last Gregorian years present in the reference table.
pub const FIRST_YEAR: i32 = 2024;
pub const LAST_YEAR: i32 = 2027;

/// Feast reference table. Dates follow the observed (daytime) first day of
/// each feast on the civil calendar.
pub(crate) const FEASTS: &[FeastDef] = &[
    FeastDef {
        name: "Passover",
        hebrew_name: "Pesach",
        significance: FeastSignificance::High,
        biblical_reference: "Leviticus 23:5",
        prophetic_importance: "Commemorates deliverance from Egypt; prophetically fulfilled in the crucifixion of the Messiah as the Passover lamb",
        duration_days: 1,
        dates: &[(2024, 4, 23), (2025, 4, 13), (2026, 4, 2), (2027, 4, 22)],
    },
    FeastDef {
        name: "Feast of Unleavened Bread",
        hebrew_name: "Chag HaMatzot",
        significance: FeastSignificance::Medium,
        biblical_reference: "Leviticus 23:6",
        prophetic_importance: "Seven days without leaven, picturing the removal of sin and the sinless burial of the Messiah",
        duration_days: 7,
        dates: &[(2024, 4, 24), (2025, 4, 14), (2026, 4, 3), (2027, 4, 23)],
    },
    FeastDef {
        name: "Feast of Firstfruits",
        hebrew_name: "Yom HaBikkurim",
        significance: FeastSignificance::Medium,
        biblical_reference: "Leviticus 23:10",
        prophetic_importance: "The wave offering of the first harvest, prophetically fulfilled in the resurrection as the firstfruits of those who sleep",
        duration_days: 1,
        dates: &[(2024, 4, 25), (2025, 4, 15), (2026, 4, 4), (2027, 4, 24)],
    },
    FeastDef {
        name: "Pentecost",
        hebrew_name: "Shavuot",
        significance: FeastSignificance::High,
        biblical_reference: "Leviticus 23:16",
        prophetic_importance: "The feast of weeks, fifty days after Firstfruits; fulfilled in the outpouring of the Spirit and the birth of the church",
        duration_days: 1,
        dates: &[(2024, 6, 12), (2025, 6, 2), (2026, 5, 22), (2027, 6, 11)],
    },
    FeastDef {
        name: "Feast of Trumpets",
        hebrew_name: "Yom Teruah",
        significance: FeastSignificance::High,
        biblical_reference: "Leviticus 23:24",
        prophetic_importance: "A memorial of blowing of trumpets; associated with the awakening blast and the gathering of the faithful at the last trumpet",
        duration_days: 2,
        dates: &[(2024, 10, 3), (2025, 9, 23), (2026, 9, 12), (2027, 10, 2)],
    },
    FeastDef {
        name: "Day of Atonement",
        hebrew_name: "Yom Kippur",
        significance: FeastSignificance::High,
        biblical_reference: "Leviticus 23:27",
        prophetic_importance: "The most solemn day of the year; prophetically linked to national repentance and the judgment of the nations",
        duration_days: 1,
        dates: &[(2024, 10, 12), (2025, 10, 2), (2026, 9, 21), (2027, 10, 11)],
    },
    FeastDef {
        name: "Feast of Tabernacles",
        hebrew_name: "Sukkot",
        significance: FeastSignificance::High,
        biblical_reference: "Leviticus 23:34",
        prophetic_importance: "Seven days dwelling in booths; prophetically anticipates the millennial reign when the nations come up to keep the feast",
        duration_days: 7,
        dates: &[(2024, 10, 17), (2025, 10, 7), (2026, 9, 26), (2027, 10, 16)],
    },
    FeastDef {
        name: "Purim",
        hebrew_name: "Purim",
        significance: FeastSignificance::Low,
        biblical_reference: "Esther 9:26",
        prophetic_importance: "Commemorates the preservation of the Jewish people from annihilation in the days of Esther",
        duration_days: 1,
        dates: &[(2024, 3, 24), (2025, 3, 14), (2026, 3, 3), (2027, 3, 23)],
    },
    FeastDef {
        name: "Hanukkah",
        hebrew_name: "Chanukah",
        significance: FeastSignificance::Low,
        biblical_reference: "John 10:22",
        prophetic_importance: "The feast of dedication; commemorates the cleansing of the temple and foreshadows its final restoration",
        duration_days: 8,
        dates: &[(2024, 12, 26), (2025, 12, 15), (2026, 12, 5), (2027, 12, 25)],
    },
];
