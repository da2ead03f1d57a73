use crate::domain::{DomainError, Email, ParticipantId, ParticipantStatus};

/// Reconciled participant aggregate: identity, name, email and lifecycle
/// status. The id is fixed at construction; status changes go through
/// [`change_status`](Participant::change_status) and only become durable when
/// the entity is passed back to the repository's save path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    email: Email,
    status: ParticipantStatus,
}

impl Participant {
    /// Fresh participant pending its first save. New participants always
    /// start out `Active`.
    pub fn new(
        id: ParticipantId,
        name: impl Into<String>,
        email: Email,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            email,
            status: ParticipantStatus::Active,
        })
    }

    /// Rebuilds a participant from persisted rows. The data already passed
    /// creation-time validation when it was first admitted, so this path is
    /// infallible.
    pub fn reconstruct(
        id: ParticipantId,
        name: impl Into<String>,
        email: Email,
        status: ParticipantStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email,
            status,
        }
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn status(&self) -> ParticipantStatus {
        self.status
    }

    pub fn change_status(&mut self, status: ParticipantStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(value: &str) -> Email {
        Email::new(value).unwrap()
    }

    #[test]
    fn new_participants_start_active() {
        let participant =
            Participant::new(ParticipantId::new("p1"), "Alice", email("a@x.com")).unwrap();
        assert_eq!(participant.status(), ParticipantStatus::Active);
        assert_eq!(participant.id().value(), "p1");
        assert_eq!(participant.name(), "Alice");
    }

    #[test]
    fn new_rejects_blank_names() {
        for name in ["", "   "] {
            let result = Participant::new(ParticipantId::new("p1"), name, email("a@x.com"));
            assert!(matches!(result, Err(DomainError::EmptyName)));
        }
    }

    #[test]
    fn reconstruct_bypasses_creation_validation() {
        let participant = Participant::reconstruct(
            ParticipantId::new("p1"),
            "",
            email("a@x.com"),
            ParticipantStatus::Resigned,
        );
        assert_eq!(participant.status(), ParticipantStatus::Resigned);
    }

    #[test]
    fn change_status_keeps_identity() {
        let mut participant =
            Participant::new(ParticipantId::new("p1"), "Alice", email("a@x.com")).unwrap();
        participant.change_status(ParticipantStatus::StayAway);
        assert_eq!(participant.status(), ParticipantStatus::StayAway);
        assert_eq!(participant.id().value(), "p1");
    }
}
