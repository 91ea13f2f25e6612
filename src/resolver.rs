//! Lookup-or-create resolution of prerequisite entities.

use crate::{service::DataService, types::QBEntity, APIResult};

/// Resolves the entity matching `predicate`, creating a default when none
/// exists yet.
///
/// One query, capped at a single row; on a hit the row is returned
/// unchanged (first match wins — ordering is the service's). On a miss the
/// factory's default instance is persisted and the id-bearing copy
/// returned. At most one entity is ever created per call, and existing
/// entities are never mutated or deleted.
///
/// Each document build resolves its prerequisites exactly once; results
/// are not memoized across calls, so the same predicate is re-queried on
/// the next build.
///
/// # Errors
/// Query and create failures propagate unchanged. There is no rollback:
/// an entity created here stays behind even if a later step of the same
/// document build fails.
pub fn resolve<S, T, F>(service: &mut S, predicate: &str, default: F) -> APIResult<T>
where
    S: DataService + ?Sized,
    T: QBEntity,
    F: FnOnce() -> T,
{
    let mut matches = service.query::<T>(predicate, 1)?;
    if let Some(existing) = matches.pop() {
        log::debug!(
            "resolved existing {} with ID : {}",
            T::type_name(),
            existing.id().map_or("<none>", String::as_str)
        );
        return Ok(existing);
    }

    let created = service.add(&default())?;
    log::info!(
        "no {} matched `{predicate}`, created {}",
        T::type_name(),
        created.id().map_or("<none>", String::as_str)
    );
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::APIError;
    use crate::samples;
    use crate::test_support::MockDataService;
    use crate::types::{Account, AccountType, QBEntity};

    const BANK_PREDICATE: &str = "where AccountType = 'Bank'";

    #[test]
    fn miss_creates_exactly_one_entity() {
        let mut service = MockDataService::new();
        let account: Account =
            resolve(&mut service, BANK_PREDICATE, samples::bank_account).unwrap();
        assert!(account.id().is_some());
        assert_eq!(service.count_stored("Account"), 1);
        assert_eq!(service.calls, vec!["query Account", "add Account"]);
    }

    #[test]
    fn resolution_is_idempotent_against_unchanged_state() {
        let mut service = MockDataService::new();
        let first: Account = resolve(&mut service, BANK_PREDICATE, samples::bank_account).unwrap();
        let second: Account = resolve(&mut service, BANK_PREDICATE, samples::bank_account).unwrap();
        assert_eq!(first.id(), second.id());
        // One create total across both calls, not one per call.
        assert_eq!(service.count_stored("Account"), 1);
    }

    #[test]
    fn hit_returns_the_row_unchanged() {
        let mut service = MockDataService::new();
        let mut seeded = samples::bank_account();
        seeded.current_balance = Some(250.0);
        let seeded = service.seed(seeded);

        let resolved: Account =
            resolve(&mut service, BANK_PREDICATE, samples::bank_account).unwrap();
        assert_eq!(resolved.id(), seeded.id());
        assert_eq!(resolved.current_balance, Some(250.0));
        assert_eq!(service.count_stored("Account"), 1);
    }

    #[test]
    fn differing_predicates_resolve_different_entities() {
        let mut service = MockDataService::new();
        let bank: Account = resolve(&mut service, BANK_PREDICATE, samples::bank_account).unwrap();
        let card: Account = resolve(
            &mut service,
            "where AccountType = 'Credit Card'",
            samples::credit_card_account,
        )
        .unwrap();
        assert_ne!(bank.id(), card.id());
        assert_eq!(bank.account_type, Some(AccountType::Bank));
        assert_eq!(card.account_type, Some(AccountType::CreditCard));
    }

    #[test]
    fn query_failure_aborts_the_resolution() {
        let mut service = MockDataService::new();
        service.fail_next(APIError::InvalidToken);
        let out: APIResult<Account> = resolve(&mut service, BANK_PREDICATE, samples::bank_account);
        assert!(matches!(out, Err(APIError::InvalidToken)));
        assert_eq!(service.count_stored("Account"), 0);
    }

    #[test]
    fn create_failure_aborts_the_resolution() {
        let mut service = MockDataService::new();
        // Call 0 is the miss query, call 1 is the create.
        service.fail_call(1, APIError::InvalidToken);
        let out: APIResult<Account> = resolve(&mut service, BANK_PREDICATE, samples::bank_account);
        assert!(out.is_err());
        assert_eq!(service.count_stored("Account"), 0);
        assert_eq!(service.calls, vec!["query Account", "add Account"]);
    }
}
