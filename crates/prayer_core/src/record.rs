use std::fmt;

/// The five daily prayers, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Canonical capitalized name, used for every output regardless of upstream casing.
    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One day of prayer times. Values are kept in the upstream's native time format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTimeRecord {
    fajr: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
}

impl PrayerTimeRecord {
    pub fn new(
        fajr: impl Into<String>,
        dhuhr: impl Into<String>,
        asr: impl Into<String>,
        maghrib: impl Into<String>,
        isha: impl Into<String>,
    ) -> Self {
        Self {
            fajr: fajr.into(),
            dhuhr: dhuhr.into(),
            asr: asr.into(),
            maghrib: maghrib.into(),
            isha: isha.into(),
        }
    }

    pub fn time(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }

    /// Prayer/time pairs in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (Prayer, &str)> + '_ {
        Prayer::ALL
            .into_iter()
            .map(move |prayer| (prayer, self.time(prayer)))
    }
}
