//! Eligibility Rule Table
//!
//! Which roles may occupy which zone. Every built-in zone carries an
//! explicit rule; a zone without one falls back to the table's configured
//! access, which is [`ZoneAccess::Unrestricted`] unless set otherwise.

use shared::models::{Role, ZoneId};
use std::collections::{BTreeMap, BTreeSet};

/// Access rule for a single zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneAccess {
    /// Any role may enter
    Unrestricted,
    /// Only the listed roles may enter; an empty set closes the zone
    Restricted(BTreeSet<Role>),
}

impl ZoneAccess {
    pub fn only(roles: impl IntoIterator<Item = Role>) -> Self {
        Self::Restricted(roles.into_iter().collect())
    }

    /// Nobody may enter
    pub fn closed() -> Self {
        Self::Restricted(BTreeSet::new())
    }

    pub fn allows(&self, role: Role) -> bool {
        match self {
            ZoneAccess::Unrestricted => true,
            ZoneAccess::Restricted(roles) => roles.contains(&role),
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, ZoneAccess::Restricted(_))
    }
}

/// Zone → access mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityTable {
    rules: BTreeMap<ZoneId, ZoneAccess>,
    fallback: ZoneAccess,
}

impl Default for EligibilityTable {
    fn default() -> Self {
        Self::defaults()
    }
}

impl EligibilityTable {
    /// Table with no rules; every zone gets `fallback`
    pub fn empty(fallback: ZoneAccess) -> Self {
        Self {
            rules: BTreeMap::new(),
            fallback,
        }
    }

    /// Built-in rules
    ///
    /// reception, server and security admit their specialists plus
    /// managers; conference, staff and archive admit everyone.
    pub fn defaults() -> Self {
        Self::empty(ZoneAccess::Unrestricted)
            .with_rule(ZoneId::Conference, ZoneAccess::Unrestricted)
            .with_rule(
                ZoneId::Reception,
                ZoneAccess::only([Role::Receptionist, Role::Manager]),
            )
            .with_rule(
                ZoneId::Server,
                ZoneAccess::only([Role::Technician, Role::Manager]),
            )
            .with_rule(
                ZoneId::Security,
                ZoneAccess::only([Role::Security, Role::Manager]),
            )
            .with_rule(ZoneId::Staff, ZoneAccess::Unrestricted)
            .with_rule(ZoneId::Archive, ZoneAccess::Unrestricted)
    }

    pub fn with_rule(mut self, zone: ZoneId, access: ZoneAccess) -> Self {
        self.rules.insert(zone, access);
        self
    }

    /// Drop the explicit rule so the zone uses the fallback
    pub fn without_rule(mut self, zone: ZoneId) -> Self {
        self.rules.remove(&zone);
        self
    }

    pub fn with_fallback(mut self, fallback: ZoneAccess) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn has_rule(&self, zone: ZoneId) -> bool {
        self.rules.contains_key(&zone)
    }

    /// Access rule in force for `zone`
    pub fn access(&self, zone: ZoneId) -> &ZoneAccess {
        self.rules.get(&zone).unwrap_or(&self.fallback)
    }

    pub fn allows(&self, role: Role, zone: ZoneId) -> bool {
        self.access(zone).allows(role)
    }

    /// Roles admitted to `zone`, in enum order
    pub fn allowed_roles(&self, zone: ZoneId) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.allows(*role, zone))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_cover_every_zone() {
        let table = EligibilityTable::defaults();
        for zone in ZoneId::ALL {
            assert!(table.has_rule(zone), "missing rule for {zone}");
        }
    }

    #[test]
    fn test_default_restrictions() {
        let table = EligibilityTable::defaults();

        assert_eq!(
            table.allowed_roles(ZoneId::Reception),
            vec![Role::Manager, Role::Receptionist]
        );
        assert_eq!(
            table.allowed_roles(ZoneId::Server),
            vec![Role::Manager, Role::Technician]
        );
        assert_eq!(
            table.allowed_roles(ZoneId::Security),
            vec![Role::Manager, Role::Security]
        );

        for zone in [ZoneId::Conference, ZoneId::Staff, ZoneId::Archive] {
            assert!(!table.access(zone).is_restricted());
            for role in Role::ALL {
                assert!(table.allows(role, zone));
            }
        }
    }

    #[test]
    fn test_manager_everywhere() {
        let table = EligibilityTable::defaults();
        for zone in ZoneId::ALL {
            assert!(table.allows(Role::Manager, zone));
        }
    }

    #[test]
    fn test_cleaner_only_in_open_zones() {
        let table = EligibilityTable::defaults();
        assert!(!table.allows(Role::Cleaner, ZoneId::Reception));
        assert!(!table.allows(Role::Cleaner, ZoneId::Server));
        assert!(!table.allows(Role::Cleaner, ZoneId::Security));
        assert!(table.allows(Role::Cleaner, ZoneId::Archive));
    }

    #[test]
    fn test_fallback_applies_to_unlisted_zones() {
        let open = EligibilityTable::defaults().without_rule(ZoneId::Archive);
        assert!(open.allows(Role::Cleaner, ZoneId::Archive));

        let closed = EligibilityTable::defaults()
            .without_rule(ZoneId::Archive)
            .with_fallback(ZoneAccess::closed());
        assert!(!closed.allows(Role::Manager, ZoneId::Archive));
        // explicit rules are unaffected by the fallback
        assert!(closed.allows(Role::Cleaner, ZoneId::Staff));
    }
}
