//! Resource address matching
//!
//! Matching is structural: the query suffix is split off, then the path is
//! compared against the three known shapes in order.
//!
//! | path | route |
//! |---|---|
//! | `accounts` | [`ResourceRoute::Accounts`] |
//! | `accounts/{id}` | [`ResourceRoute::Account`] |
//! | `accounts/{id}/transactions` | [`ResourceRoute::Transactions`] |
//!
//! Anything else is not a resource this server knows, which callers report
//! as "Resource not found" rather than as a matching error.

use super::query::{decode_component, QueryParams};
use crate::types::AccountId;

const ACCOUNTS_SEGMENT: &str = "accounts";
const TRANSACTIONS_SEGMENT: &str = "transactions";

/// Logical resource an address points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRoute {
    /// The full account collection
    Accounts,

    /// A single account
    Account { id: AccountId },

    /// The transactions booked against one account
    Transactions { account_id: AccountId },
}

/// A matched address: the route plus its query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUri {
    pub route: ResourceRoute,
    pub query: QueryParams,
}

/// Match a concrete request address against the known shapes
///
/// # Arguments
///
/// * `uri` - Address as sent by the client, optionally with a `?query` suffix
///
/// # Returns
///
/// * `Some(ResolvedUri)` - The route and its bound parameters
/// * `None` - The path matches none of the known shapes
pub fn match_uri(uri: &str) -> Option<ResolvedUri> {
    let (path, query) = match uri.split_once('?') {
        Some((path, query)) => (path, QueryParams::parse(query)),
        None => (uri, QueryParams::new()),
    };

    let route = match_path(path)?;
    Some(ResolvedUri { route, query })
}

fn match_path(path: &str) -> Option<ResourceRoute> {
    if path == ACCOUNTS_SEGMENT {
        return Some(ResourceRoute::Accounts);
    }

    let rest = path.strip_prefix(ACCOUNTS_SEGMENT)?.strip_prefix('/')?;
    let segments: Vec<&str> = rest.split('/').collect();

    match segments.as_slice() {
        [id] if !id.is_empty() => Some(ResourceRoute::Account {
            id: decode_component(id),
        }),
        [id, TRANSACTIONS_SEGMENT] if !id.is_empty() => Some(ResourceRoute::Transactions {
            account_id: decode_component(id),
        }),
        _ => None,
    }
}

/// Concrete address of a single account
pub fn account_uri(id: &str) -> String {
    format!("{}/{}", ACCOUNTS_SEGMENT, id)
}

/// Concrete address of an account's transactions
pub fn transactions_uri(account_id: &str) -> String {
    format!("{}/{}/{}", ACCOUNTS_SEGMENT, account_id, TRANSACTIONS_SEGMENT)
}

/// Concrete address of the account collection
pub fn accounts_uri() -> String {
    ACCOUNTS_SEGMENT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::collection("accounts", ResourceRoute::Accounts)]
    #[case::detail("accounts/acc-001", ResourceRoute::Account { id: "acc-001".to_string() })]
    #[case::transactions(
        "accounts/acc-002/transactions",
        ResourceRoute::Transactions { account_id: "acc-002".to_string() }
    )]
    #[case::unknown_id_still_matches(
        "accounts/acc-999",
        ResourceRoute::Account { id: "acc-999".to_string() }
    )]
    #[case::encoded_id(
        "accounts/acc%2D001",
        ResourceRoute::Account { id: "acc-001".to_string() }
    )]
    fn test_match_path_shapes(#[case] uri: &str, #[case] expected: ResourceRoute) {
        let resolved = match_uri(uri).unwrap();
        assert_eq!(resolved.route, expected);
        assert!(resolved.query.is_empty());
    }

    #[rstest]
    #[case::empty("")]
    #[case::other_collection("cards")]
    #[case::prefix_only("accountsx")]
    #[case::trailing_slash("accounts/")]
    #[case::empty_id("accounts//transactions")]
    #[case::unknown_child("accounts/acc-001/statements")]
    #[case::too_deep("accounts/acc-001/transactions/tx-001")]
    #[case::leading_slash("/accounts")]
    fn test_unmatched_paths(#[case] uri: &str) {
        assert!(match_uri(uri).is_none());
    }

    #[test]
    fn test_query_suffix_is_split_off() {
        let resolved = match_uri("accounts?status=active&balanceMin=1000").unwrap();

        assert_eq!(resolved.route, ResourceRoute::Accounts);
        assert_eq!(resolved.query.first("status"), Some("active"));
        assert_eq!(resolved.query.first("balanceMin"), Some("1000"));
    }

    #[test]
    fn test_query_on_transactions() {
        let resolved =
            match_uri("accounts/acc-001/transactions?transactionType=payment&amountMax=0")
                .unwrap();

        assert_eq!(
            resolved.route,
            ResourceRoute::Transactions {
                account_id: "acc-001".to_string()
            }
        );
        assert_eq!(resolved.query.first("transactionType"), Some("payment"));
    }

    #[test]
    fn test_unmatched_path_with_query() {
        assert!(match_uri("cards?status=active").is_none());
    }

    #[test]
    fn test_uri_builders_round_trip() {
        assert_eq!(
            match_uri(&account_uri("acc-003")).unwrap().route,
            ResourceRoute::Account {
                id: "acc-003".to_string()
            }
        );
        assert_eq!(
            match_uri(&transactions_uri("acc-003")).unwrap().route,
            ResourceRoute::Transactions {
                account_id: "acc-003".to_string()
            }
        );
        assert_eq!(match_uri(&accounts_uri()).unwrap().route, ResourceRoute::Accounts);
    }
}
