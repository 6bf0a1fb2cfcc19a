// src/infrastructure/security/claims.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::actor::{Actor, ActorId, Role};
use biscuit_auth::builder::{Fact, Predicate, Term};
use std::collections::HashSet;

/// Builds the acting identity from the authority facts of a verified token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<Actor> {
    let mut actor_id: Option<String> = None;
    let mut roles: HashSet<Role> = HashSet::new();

    for fact in facts {
        let predicate: Predicate = fact.predicate;
        match (predicate.name.as_str(), predicate.terms.first()) {
            ("actor", Some(Term::Str(id))) => actor_id = Some(id.clone()),
            ("role", Some(Term::Str(role))) => {
                // unknown role names are ignored rather than failing the token
                if let Ok(role) = role.parse::<Role>() {
                    roles.insert(role);
                }
            }
            _ => {}
        }
    }

    let actor_id = actor_id.ok_or_else(|| ApplicationError::unauthorized("missing actor id"))?;
    let actor_id =
        ActorId::new(actor_id).map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
    if roles.is_empty() {
        return Err(ApplicationError::unauthorized("token carries no known role"));
    }

    Ok(Actor::new(actor_id, roles))
}
