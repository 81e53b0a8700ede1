//! Alert records handed to the alert sink.

/// Alert categories known to the alert store.
///
/// The simulator only raises [`TruckOverloaded`](Self::TruckOverloaded) and
/// [`RouteDelay`](Self::RouteDelay); the rest are produced elsewhere.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AlertKind {
    BinNearFull,
    BinOverflowing,
    TruckOverloaded,
    TruckIdleTooLong,
    RouteDelay,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::BinNearFull      => "BIN_NEAR_FULL",
            AlertKind::BinOverflowing   => "BIN_OVERFLOWING",
            AlertKind::TruckOverloaded  => "TRUCK_OVERLOADED",
            AlertKind::TruckIdleTooLong => "TRUCK_IDLE_TOO_LONG",
            AlertKind::RouteDelay       => "ROUTE_DELAY",
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One alert: kind, human-readable message, and the id of the vehicle or
/// collection point it concerns.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub related_entity_id: String,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>, related_entity_id: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            related_entity_id: related_entity_id.into(),
        }
    }
}
