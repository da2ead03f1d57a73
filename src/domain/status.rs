use crate::domain::DomainError;

/// Closed set of participant lifecycle states. The lookup table stores these
/// as free text; `resolve` and `label` are the only conversion boundary in
/// either direction, so raw label strings never leak into the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantStatus {
    Active,
    StayAway,
    Resigned,
}

impl ParticipantStatus {
    /// Maps a persisted status label onto the closed set. Any other input is
    /// a data-integrity fault, never a default.
    pub fn resolve(label: &str) -> Result<Self, DomainError> {
        match label {
            "ACTIVE" => Ok(Self::Active),
            "STAY_AWAY" => Ok(Self::StayAway),
            "RESIGNED" => Ok(Self::Resigned),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }

    /// Canonical label, used by the save path to find the lookup row.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::StayAway => "STAY_AWAY",
            Self::Resigned => "RESIGNED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_round_trips_every_known_label() {
        for label in ["ACTIVE", "STAY_AWAY", "RESIGNED"] {
            let status = ParticipantStatus::resolve(label).unwrap();
            assert_eq!(status.label(), label);
        }
    }

    #[test]
    fn resolve_rejects_unknown_labels() {
        for label in ["UNKNOWN", "active", "STAYAWAY", ""] {
            match ParticipantStatus::resolve(label) {
                Err(DomainError::InvalidStatus(given)) => assert_eq!(given, label),
                other => panic!("expected InvalidStatus for {label:?}, got {other:?}"),
            }
        }
    }
}
