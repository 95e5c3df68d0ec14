use serde::{Deserialize, Serialize};

use crate::{ActorId, Role, UserAttributes};

/// An authenticated actor, as handed over by the session/identity layer.
///
/// Construction is intentionally decoupled from storage and transport:
/// whatever verified the session derives this record from its claims and
/// attribute source. The role set is non-empty after authentication; the
/// policy layer still fails closed if it is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub roles: Vec<Role>,
    pub attributes: UserAttributes,
}

impl Actor {
    pub fn new(id: ActorId, roles: Vec<Role>, attributes: UserAttributes) -> Self {
        Self {
            id,
            roles,
            attributes,
        }
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_serializes_with_transparent_fields() {
        let actor = Actor::new(
            ActorId::new(),
            vec![Role::new("admin")],
            UserAttributes::new("org1"),
        );

        let json = serde_json::to_value(&actor).unwrap();
        assert_eq!(json["roles"][0], "admin");
        assert_eq!(json["attributes"]["org_id"], "org1");
    }
}
