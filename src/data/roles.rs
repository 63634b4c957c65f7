#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

/// A user role selectable on the login and registration pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserRole {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All roles, in display order. Administrator accounts are provisioned
/// out of band, so registration only offers the first three.
pub const ROLES: [UserRole; 4] = [
    UserRole {
        id: "reporter",
        name: "Reporter",
        description: "Regular users who report cases",
    },
    UserRole {
        id: "medical",
        name: "Medical Officer",
        description: "Healthcare providers",
    },
    UserRole {
        id: "police",
        name: "Police Officer",
        description: "Law enforcement",
    },
    UserRole {
        id: "admin",
        name: "Administrator",
        description: "System administrators",
    },
];

/// Roles offered on the registration page.
pub fn registration_roles() -> &'static [UserRole] {
    &ROLES[..3]
}

/// Look up a role by its id.
pub fn find(id: &str) -> Option<&'static UserRole> {
    ROLES.iter().find(|role| role.id == id)
}
