use super::*;

#[test]
fn role_ids_are_unique() {
    for (i, a) in ROLES.iter().enumerate() {
        for b in &ROLES[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn find_resolves_every_role() {
    for role in &ROLES {
        assert_eq!(find(role.id), Some(role));
    }
}

#[test]
fn find_rejects_unknown_ids() {
    assert!(find("judge").is_none());
    assert!(find("").is_none());
}

#[test]
fn registration_excludes_admin() {
    let roles = registration_roles();
    assert_eq!(roles.len(), 3);
    assert!(roles.iter().all(|role| role.id != "admin"));
}
