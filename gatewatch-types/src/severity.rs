//! Severity classification shared by events, problems and triggers.
//!
//! Zabbix uses a 0-5 integer scale for event severity and trigger
//! priority. The gateway relays these as string codes ("0".."5").

/// Severity (or trigger priority) level, 0 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    NotClassified,
    Information,
    Warning,
    Average,
    High,
    Disaster,
}

impl Severity {
    /// All levels in ascending order.
    pub const ALL: [Severity; 6] = [
        Severity::NotClassified,
        Severity::Information,
        Severity::Warning,
        Severity::Average,
        Severity::High,
        Severity::Disaster,
    ];

    /// Numeric code as used on the wire.
    pub fn code(&self) -> u8 {
        match self {
            Severity::NotClassified => 0,
            Severity::Information => 1,
            Severity::Warning => 2,
            Severity::Average => 3,
            Severity::High => 4,
            Severity::Disaster => 5,
        }
    }

    /// Parse a numeric code (0-5).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Severity::NotClassified),
            1 => Some(Severity::Information),
            2 => Some(Severity::Warning),
            3 => Some(Severity::Average),
            4 => Some(Severity::High),
            5 => Some(Severity::Disaster),
            _ => None,
        }
    }

    /// Parse a wire string code ("0".."5").
    pub fn from_wire(code: &str) -> Option<Self> {
        code.trim().parse::<u8>().ok().and_then(Self::from_code)
    }

    /// Human-readable label, matching the Zabbix terminology.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::NotClassified => "Not classified",
            Severity::Information => "Information",
            Severity::Warning => "Warning",
            Severity::Average => "Average",
            Severity::High => "High",
            Severity::Disaster => "Disaster",
        }
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
