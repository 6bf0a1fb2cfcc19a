pub mod value_objects;

pub use value_objects::{ActorId, Capability, Role};

use std::collections::HashSet;

/// The resolved caller of an operation: identity plus the roles it acts under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: ActorId,
    pub roles: HashSet<Role>,
    pub capabilities: HashSet<Capability>,
}

impl Actor {
    pub fn new(id: ActorId, roles: impl IntoIterator<Item = Role>) -> Self {
        let roles: HashSet<Role> = roles.into_iter().collect();
        let capabilities = roles
            .iter()
            .flat_map(Role::default_capabilities)
            .collect();
        Self {
            id,
            roles,
            capabilities,
        }
    }

    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }

    pub fn owns(&self, author_id: &ActorId) -> bool {
        &self.id == author_id
    }
}

#[cfg(test)]
impl Actor {
    pub(crate) fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
