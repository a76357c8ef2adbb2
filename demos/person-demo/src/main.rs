//! Person invariants demo
//!
//! Builds two person records, one valid and one broken, and runs every
//! terminal operation of the validator against each: validity check,
//! first-error lookup, on-invalid callback, and error conversion.

mod person;

use person::{anonymous_minor, person_validator, sherlock, Person};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
#[error("person record rejected: {0}")]
struct PersonRejected(String);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    report("sherlock", &sherlock());
    report("anonymous-minor", &anonymous_minor());
}

fn report(label: &str, person: &Person) {
    let validator = person_validator(person);

    info!(
        person = label,
        conditions = validator.len(),
        valid = validator.is_valid(),
        "invariants evaluated"
    );

    validator.on_invalid(|message| warn!(person = label, message, "first violated invariant"));

    match validator.ensure_valid(|message| PersonRejected(message.to_string())) {
        Ok(()) => info!(person = label, "record accepted"),
        Err(err) => warn!(person = label, error = %err, "record rejected"),
    }

    // Same message first_error() would surface; the validator is freely
    // re-evaluated by every terminal call above.
    if let Some(message) = validator.first_error() {
        println!("{label}: INVALID ({message})");
    } else {
        println!("{label}: VALID");
    }
}
