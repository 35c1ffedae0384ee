//! Time-of-day greeting for the home screen.

/// One of the three greeting buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Greeting {
    /// Hours 0–11
    Morning,
    /// Hours 12–17
    Afternoon,
    /// Hours 18–23
    Evening,
}

impl Greeting {
    /// Bucket for a local wall-clock hour. Hours past 23 are treated as evening.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Greeting::Morning,
            12..=17 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Greeting::Morning => "Доброе утро",
            Greeting::Afternoon => "Добрый день",
            Greeting::Evening => "Добрый вечер",
        }
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
