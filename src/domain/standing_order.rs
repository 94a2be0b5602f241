use serde::{Deserialize, Serialize};
use std::fmt;

/// Recurrence period of a standing order.
///
/// Accepts both the long names (`monthly`) and the single-letter wire codes
/// (`m`). Letter codes are case-sensitive: `b` is biweekly, `B` is bimonthly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Periodicity {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
    Quarterly,
    Semiannual,
    Annual,
    Unrecognized(String),
}

impl Periodicity {
    /// Single-letter code used by the payment-code format.
    pub fn code(&self) -> Option<char> {
        match self {
            Periodicity::Daily => Some('d'),
            Periodicity::Weekly => Some('w'),
            Periodicity::Biweekly => Some('b'),
            Periodicity::Monthly => Some('m'),
            Periodicity::Bimonthly => Some('B'),
            Periodicity::Quarterly => Some('q'),
            Periodicity::Semiannual => Some('s'),
            Periodicity::Annual => Some('a'),
            Periodicity::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.code().is_some()
    }

    fn from_code(code: &str) -> Option<Self> {
        let periodicity = match code {
            "d" => Periodicity::Daily,
            "w" => Periodicity::Weekly,
            "b" => Periodicity::Biweekly,
            "m" => Periodicity::Monthly,
            "B" => Periodicity::Bimonthly,
            "q" => Periodicity::Quarterly,
            "s" => Periodicity::Semiannual,
            "a" => Periodicity::Annual,
            _ => return None,
        };
        Some(periodicity)
    }

    fn from_name(name: &str) -> Option<Self> {
        let periodicity = match name.to_ascii_lowercase().as_str() {
            "daily" => Periodicity::Daily,
            "weekly" => Periodicity::Weekly,
            "biweekly" => Periodicity::Biweekly,
            "monthly" => Periodicity::Monthly,
            "bimonthly" => Periodicity::Bimonthly,
            "quarterly" => Periodicity::Quarterly,
            "semiannual" => Periodicity::Semiannual,
            "annual" => Periodicity::Annual,
            _ => return None,
        };
        Some(periodicity)
    }
}

impl From<&str> for Periodicity {
    fn from(raw: &str) -> Self {
        let token = raw.trim();
        Self::from_code(token)
            .or_else(|| Self::from_name(token))
            .unwrap_or_else(|| Periodicity::Unrecognized(raw.to_string()))
    }
}

impl From<String> for Periodicity {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<Periodicity> for String {
    fn from(periodicity: Periodicity) -> Self {
        periodicity.to_string()
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Periodicity::Unrecognized(raw) => f.write_str(raw),
            known => match known.code() {
                Some(code) => write!(f, "{code}"),
                None => Ok(()),
            },
        }
    }
}

/// Recurrence rule of a permanent transfer instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StandingOrder {
    /// Day of month of the execution, 1-31.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
    /// Months of execution, each 1-12.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub month: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodicity: Option<Periodicity>,
    /// No further executions after this date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_date: Option<String>,
}

impl StandingOrder {
    pub fn new(periodicity: Periodicity) -> Self {
        Self {
            periodicity: Some(periodicity),
            ..Self::default()
        }
    }

    pub fn day(mut self, day: i32) -> Self {
        self.day = Some(day);
        self
    }

    pub fn months(mut self, months: impl IntoIterator<Item = i32>) -> Self {
        self.month = months.into_iter().collect();
        self
    }

    pub fn last_date(mut self, last_date: impl Into<String>) -> Self {
        self.last_date = Some(last_date.into());
        self
    }

    /// Month set packed as bits, January being the lowest bit.
    /// Out-of-range entries are ignored.
    pub fn month_mask(&self) -> u16 {
        self.month
            .iter()
            .filter(|m| (1..=12).contains(*m))
            .fold(0, |mask, m| mask | (1u16 << (m - 1)))
    }
}
