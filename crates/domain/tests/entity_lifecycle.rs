//! Black-box tests exercising the building blocks the way a consuming domain
//! crate would: identifiers and entities declared through the exported macros.

use buildingblocks_domain::{
    BusinessRule, CheckRule, DomainError, DomainEvent, DomainResult, Entity, EntityBase,
    EntityId, ErrorKind, HasDomainEvents, check_rules, entity_id, impl_entity, uuid_entity_id,
};
use chrono::{DateTime, TimeZone, Utc};

entity_id! {
    /// Account number as issued by the ledger.
    pub struct AccountId(String);
}

uuid_entity_id! {
    pub struct CustomerId;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountEvent {
    Created { name: String },
    Renamed { from: String, to: String },
}

impl DomainEvent for AccountEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::Created { .. } => "ledger.account.created",
            AccountEvent::Renamed { .. } => "ledger.account.renamed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }
}

struct NameNotBlank<'a>(&'a str);

impl BusinessRule for NameNotBlank<'_> {
    fn is_broken(&self) -> bool {
        self.0.trim().is_empty()
    }

    fn error(&self) -> DomainError {
        DomainError::validation("account.name_blank", "account name cannot be blank")
    }
}

struct NameWithinLimit<'a>(&'a str);

impl BusinessRule for NameWithinLimit<'_> {
    fn is_broken(&self) -> bool {
        self.0.chars().count() > 32
    }

    fn error(&self) -> DomainError {
        DomainError::validation("account.name_too_long", "account name exceeds 32 characters")
    }
}

#[derive(Debug)]
pub struct Account {
    base: EntityBase<AccountId, AccountEvent>,
    name: String,
    owner: Option<CustomerId>,
}

impl_entity!(Account => base: EntityBase<AccountId, AccountEvent>);

impl Account {
    fn open(id: &str, name: &str) -> DomainResult<Self> {
        let mut account = Self::reconstitute(id, name);
        account.check_rule(&NameNotBlank(name))?;
        account.base.record_event(AccountEvent::Created {
            name: name.to_string(),
        });
        Ok(account)
    }

    /// State loaded from storage: no events are raised.
    fn reconstitute(id: &str, name: &str) -> Self {
        Self {
            base: EntityBase::new(AccountId::new(id.to_string())),
            name: name.to_string(),
            owner: None,
        }
    }

    fn rename(&mut self, to: &str) -> DomainResult<()> {
        self.check_rule(&NameNotBlank(to))?;
        let from = std::mem::replace(&mut self.name, to.to_string());
        self.base.record_event(AccountEvent::Renamed {
            from,
            to: to.to_string(),
        });
        Ok(())
    }
}

#[test]
fn end_to_end_identity_and_events() {
    buildingblocks_observability::init();

    let mut a = Account::open("123", "Created").unwrap();
    a.rename("Renamed").unwrap();

    let types: Vec<&str> = a.domain_events().iter().map(|e| e.event_type()).collect();
    assert_eq!(types, vec!["ledger.account.created", "ledger.account.renamed"]);
    assert_eq!(
        a.domain_events(),
        &[
            AccountEvent::Created {
                name: "Created".into()
            },
            AccountEvent::Renamed {
                from: "Created".into(),
                to: "Renamed".into()
            },
        ]
    );

    a.clear_domain_events();
    assert!(a.domain_events().is_empty());

    let b = Account::reconstitute("123", "Something else");
    assert!(b.domain_events().is_empty());
    assert_eq!(a, b);
    assert_eq!(a.id(), b.id());
}

#[test]
fn broken_rule_rejects_transition_without_recording() {
    let mut account = Account::open("acc-1", "Main").unwrap();
    account.clear_domain_events();

    let err = account.rename("   ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.code(), "account.name_blank");
    assert_eq!(account.name, "Main");
    assert!(account.domain_events().is_empty());

    assert!(Account::open("acc-2", "").is_err());
}

#[test]
fn dispatcher_drains_once() {
    let mut account = Account::open("acc-1", "Main").unwrap();
    account.rename("Savings").unwrap();

    let dispatched = account.take_domain_events();
    assert_eq!(dispatched.len(), 2);
    assert!(account.take_domain_events().is_empty());

    account.rename("Checking").unwrap();
    assert_eq!(account.domain_events().len(), 1);
}

#[test]
fn rules_aggregate_across_checks() {
    let long = "x".repeat(40);
    let rules: [&dyn BusinessRule; 2] = [&NameNotBlank(&long), &NameWithinLimit(&long)];

    let violations = check_rules(rules).unwrap_err();
    let codes: Vec<&str> = violations.errors().iter().map(|e| e.code()).collect();
    assert_eq!(codes, vec!["account.name_too_long"]);
}

#[test]
fn identifiers_compose_into_entities() {
    let owner = CustomerId::generate();
    let mut account = Account::reconstitute("acc-1", "Main");
    account.owner = Some(owner.clone());

    assert_eq!(account.owner.as_ref(), Some(&owner));
    assert_eq!(EntityId::value(account.id()), "acc-1");
    assert_eq!(account.id().clone().into_value(), "acc-1");
}

#[test]
fn entities_compare_false_against_unrelated_values() {
    let account = Account::reconstitute("123", "Main");
    assert!(!account.same_identity_as_any(&AccountId::new("123".to_string())));
    assert!(!account.same_identity_as_any(&"123"));
    assert!(account.same_identity_as_any(&Account::reconstitute("123", "Other")));
}
