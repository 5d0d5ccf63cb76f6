//! Easter Sunday and the movable feasts derived from it.

use crate::CalendarDate;
use crate::prelude::*;
use crate::types::Year;

/// Easter Sunday of the given year, per the Gregorian computus
/// (Meeus/Jones/Butcher algorithm). Pure integer arithmetic.
pub fn easter_sunday(year: Year) -> CalendarDate {
    let y = u32::from(year.get());
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    // The computus always lands between March 22 and April 25.
    #[allow(clippy::cast_possible_truncation)]
    let (month, day) = (month as u8, day as u8);
    CalendarDate::from_ymd(year.get(), month, day)
        .expect("the computus always yields a real date")
}

/// Movable feasts pinned to Easter Sunday by a fixed day offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Holiday {
    #[display(fmt = "Palm Sunday")]
    PalmSunday,
    #[display(fmt = "Maundy Thursday")]
    MaundyThursday,
    #[display(fmt = "Good Friday")]
    GoodFriday,
    #[display(fmt = "Holy Saturday")]
    HolySaturday,
    #[display(fmt = "Easter Sunday")]
    EasterSunday,
    #[display(fmt = "Easter Monday")]
    EasterMonday,
    #[display(fmt = "General Prayer Day")]
    GeneralPrayerDay,
    #[display(fmt = "Ascension Day")]
    AscensionDay,
    #[display(fmt = "Whit Sunday")]
    WhitSunday,
    #[display(fmt = "Whit Monday")]
    WhitMonday,
}

impl Holiday {
    /// Every movable feast, in calendar order within a year.
    pub const ALL: [Self; 10] = [
        Self::PalmSunday,
        Self::MaundyThursday,
        Self::GoodFriday,
        Self::HolySaturday,
        Self::EasterSunday,
        Self::EasterMonday,
        Self::GeneralPrayerDay,
        Self::AscensionDay,
        Self::WhitSunday,
        Self::WhitMonday,
    ];

    /// Signed day offset from Easter Sunday.
    pub const fn days_from_easter(self) -> i64 {
        match self {
            Self::PalmSunday => -7,
            Self::MaundyThursday => -3,
            Self::GoodFriday => -2,
            Self::HolySaturday => -1,
            Self::EasterSunday => 0,
            Self::EasterMonday => 1,
            // The fourth Friday after Easter
            Self::GeneralPrayerDay => 26,
            Self::AscensionDay => 39,
            Self::WhitSunday => 49,
            Self::WhitMonday => 50,
        }
    }

    /// The date this feast falls on in the given year.
    pub fn date(self, year: Year) -> CalendarDate {
        easter_sunday(year)
            .add_days(self.days_from_easter())
            .expect("feast offsets from Easter never leave the year")
    }
}
