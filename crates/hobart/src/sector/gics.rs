//! GICS level-1 sectors, the keys of a benchmark file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A GICS level-1 sector. Discriminants are the two-digit GICS codes, so
/// ordering follows the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GicsSector {
    /// Energy (10)
    Energy = 10,
    /// Materials (15)
    Materials = 15,
    /// Industrials (20)
    Industrials = 20,
    /// Consumer Discretionary (25)
    ConsumerDiscretionary = 25,
    /// Consumer Staples (30)
    ConsumerStaples = 30,
    /// Health Care (35)
    HealthCare = 35,
    /// Financials (40)
    Financials = 40,
    /// Information Technology (45)
    InformationTechnology = 45,
    /// Communication Services (50)
    CommunicationServices = 50,
    /// Utilities (55)
    Utilities = 55,
    /// Real Estate (60)
    RealEstate = 60,
}

impl GicsSector {
    /// Every sector in code order.
    pub const fn all() -> [Self; 11] {
        [
            Self::Energy,
            Self::Materials,
            Self::Industrials,
            Self::ConsumerDiscretionary,
            Self::ConsumerStaples,
            Self::HealthCare,
            Self::Financials,
            Self::InformationTechnology,
            Self::CommunicationServices,
            Self::Utilities,
            Self::RealEstate,
        ]
    }

    /// Two-digit GICS code.
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Sector for a GICS code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// Display name, as used for benchmark file keys.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Materials => "Materials",
            Self::Industrials => "Industrials",
            Self::ConsumerDiscretionary => "Consumer Discretionary",
            Self::ConsumerStaples => "Consumer Staples",
            Self::HealthCare => "Health Care",
            Self::Financials => "Financials",
            Self::InformationTechnology => "Information Technology",
            Self::CommunicationServices => "Communication Services",
            Self::Utilities => "Utilities",
            Self::RealEstate => "Real Estate",
        }
    }

    /// Command-line spelling, e.g. `health-care`.
    pub fn slug(&self) -> String {
        self.name().to_ascii_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for GicsSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercased alphanumerics only, so "Real Estate", "real-estate" and
/// "REAL_ESTATE" compare equal.
fn fold(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Accepts a GICS code ("45") or a sector name in any case or separator style.
impl FromStr for GicsSector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let found = match s.parse::<u8>() {
            Ok(code) => Self::from_code(code),
            Err(_) => {
                let wanted = fold(s);
                Self::all().into_iter().find(|sector| fold(sector.name()) == wanted)
            }
        };
        found.ok_or_else(|| {
            let choices: Vec<String> = Self::all().iter().map(Self::slug).collect();
            format!(
                "unknown GICS sector: {s} (expected a code or one of: {})",
                choices.join(", ")
            )
        })
    }
}
