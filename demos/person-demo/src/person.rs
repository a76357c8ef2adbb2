//! Sample domain: a person record and the validator describing its
//! invariants.
//!
//! The domain types know nothing about validation; `person_validator`
//! builds the full invariant set by composing a top-level validator with
//! a passport sub-validator and one sub-validator per address.

use chrono::{Duration, NaiveDate, Utc};
use invariant_validator::Validator;

pub struct Person {
    pub name: String,
    pub age: u32,
    pub passport: Option<Passport>,
    pub addresses: Vec<Address>,
}

pub struct Passport {
    pub id: String,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
}

pub struct Address {
    pub state: String,
    pub city: String,
    pub street: String,
}

/// Builds the complete invariant set for `person`.
///
/// Nothing is evaluated here; the returned validator borrows `person` and
/// runs its checks only when a terminal operation is called.
pub fn person_validator(person: &Person) -> Validator<'_> {
    let mut validator = Validator::new()
        .require_non_empty(&person.name, "name must not be empty")
        .require_some(
            &person.passport,
            format!("person {} must have a passport", person.name),
        )
        .check(
            move || person.age >= 18,
            format!("person {} must be at least 18 years old", person.name),
        )
        .check(
            move || !person.addresses.is_empty(),
            format!("person {} must have at least one address", person.name),
        );

    if let Some(passport) = &person.passport {
        validator = validator.compose(passport_validator(passport));
    }
    for address in &person.addresses {
        validator = validator.compose(address_validator(address));
    }
    validator
}

fn passport_validator(passport: &Passport) -> Validator<'_> {
    let today = Utc::now().date_naive();

    Validator::new()
        .require_non_blank(&passport.id, "passport must have an id")
        .require_some(
            &passport.issue_date,
            format!("passport {} issue date must be set", passport.id),
        )
        .require_some(
            &passport.expiry_date,
            format!("passport {} expiry date must be set", passport.id),
        )
        .check(
            move || passport.issue_date.is_some_and(|date| date < today),
            format!("passport {} issue date must be in the past", passport.id),
        )
        .check(
            move || passport.expiry_date.is_some_and(|date| date > today),
            format!("passport {} must not be expired", passport.id),
        )
}

fn address_validator(address: &Address) -> Validator<'_> {
    Validator::new()
        .require_non_empty(&address.state, "state must not be empty")
        .require_non_empty(&address.city, "city must not be empty")
        .require_non_empty(&address.street, "street must not be empty")
}

/// A record that satisfies every invariant.
pub fn sherlock() -> Person {
    let today = Utc::now().date_naive();

    Person {
        name: "Sherlock Holmes".into(),
        age: 39,
        passport: Some(Passport {
            id: "UK-0221".into(),
            issue_date: Some(today - Duration::days(365 * 4)),
            expiry_date: Some(today + Duration::days(365 * 6)),
        }),
        addresses: vec![Address {
            state: "UK".into(),
            city: "London".into(),
            street: "221B Baker Street".into(),
        }],
    }
}

/// A record that breaks several invariants at once; only the first
/// registered failure is ever reported.
pub fn anonymous_minor() -> Person {
    Person {
        name: String::new(),
        age: 17,
        passport: None,
        addresses: Vec::new(),
    }
}
