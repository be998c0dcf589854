//! Resource templates advertised to clients and referenced by completion
//! requests.
//!
//! A template is written in RFC 6570 style: `{id}` is the path parameter and
//! a trailing `{?a,b}` lists the optional filter parameters.

/// Collection of accounts, filterable
pub const ACCOUNTS_TEMPLATE: &str = "accounts{?name,type,balanceMin,status}";

/// A single account
pub const ACCOUNT_DETAIL_TEMPLATE: &str = "accounts/{id}";

/// Transactions of one account, filterable
pub const TRANSACTIONS_TEMPLATE: &str =
    "accounts/{id}/transactions{?recipient,sender,amountMin,amountMax,transactionType,dateFrom,dateTo}";

/// Which logical resource a template describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    AccountList,
    AccountDetail,
    Transactions,
}

/// A parsed template reference from a completion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateRef {
    pub kind: TemplateKind,

    /// Whether the reference carries the `{?...}` filter-query suffix
    pub with_filters: bool,
}

impl TemplateRef {
    /// Parse a template reference
    ///
    /// Only the base path is compared; the parameter list inside `{?...}` is
    /// not checked.
    ///
    /// # Arguments
    ///
    /// * `reference` - Template URI as sent by the client
    ///
    /// # Returns
    ///
    /// * `Some(TemplateRef)` - The reference names one of the known templates
    /// * `None` - Unknown base path or an unterminated `{?` suffix
    pub fn parse(reference: &str) -> Option<Self> {
        let (base, with_filters) = match reference.find("{?") {
            Some(start) if reference.ends_with('}') => (&reference[..start], true),
            Some(_) => return None,
            None => (reference, false),
        };

        let kind = match base {
            "accounts" => TemplateKind::AccountList,
            "accounts/{id}" => TemplateKind::AccountDetail,
            "accounts/{id}/transactions" => TemplateKind::Transactions,
            _ => return None,
        };

        Some(TemplateRef { kind, with_filters })
    }
}

/// A template as listed by `resources/templates/list`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub name: &'static str,
    pub uri_template: &'static str,
    pub description: &'static str,
}

/// Every template the server serves, in listing order
pub const TEMPLATES: [TemplateDescriptor; 3] = [
    TemplateDescriptor {
        name: "accounts-list",
        uri_template: ACCOUNTS_TEMPLATE,
        description: "All bank accounts, optionally filtered by owner name, type, minimum balance, or status",
    },
    TemplateDescriptor {
        name: "account-detail",
        uri_template: ACCOUNT_DETAIL_TEMPLATE,
        description: "A single bank account by ID",
    },
    TemplateDescriptor {
        name: "transactions",
        uri_template: TRANSACTIONS_TEMPLATE,
        description: "Transactions of an account, optionally filtered by party, amount range, type, or date range",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{ACCOUNT_FILTER_KEYS, TRANSACTION_FILTER_KEYS};
    use rstest::rstest;

    #[rstest]
    #[case::accounts_plain("accounts", TemplateKind::AccountList, false)]
    #[case::accounts_filtered(ACCOUNTS_TEMPLATE, TemplateKind::AccountList, true)]
    #[case::detail(ACCOUNT_DETAIL_TEMPLATE, TemplateKind::AccountDetail, false)]
    #[case::transactions_plain("accounts/{id}/transactions", TemplateKind::Transactions, false)]
    #[case::transactions_filtered(TRANSACTIONS_TEMPLATE, TemplateKind::Transactions, true)]
    #[case::short_filter_list("accounts/{id}/transactions{?sender}", TemplateKind::Transactions, true)]
    fn test_parse_known_templates(
        #[case] reference: &str,
        #[case] kind: TemplateKind,
        #[case] with_filters: bool,
    ) {
        assert_eq!(
            TemplateRef::parse(reference),
            Some(TemplateRef { kind, with_filters })
        );
    }

    #[rstest]
    #[case::unknown("cards/{id}")]
    #[case::concrete_uri("accounts/acc-001")]
    #[case::unterminated("accounts{?status")]
    #[case::empty("")]
    fn test_parse_unknown_templates(#[case] reference: &str) {
        assert_eq!(TemplateRef::parse(reference), None);
    }

    #[test]
    fn test_templates_list_every_filter_key() {
        for key in ACCOUNT_FILTER_KEYS {
            assert!(ACCOUNTS_TEMPLATE.contains(key), "missing {}", key);
        }
        for key in TRANSACTION_FILTER_KEYS {
            assert!(TRANSACTIONS_TEMPLATE.contains(key), "missing {}", key);
        }
    }

    #[test]
    fn test_listed_templates_parse() {
        for template in TEMPLATES {
            assert!(TemplateRef::parse(template.uri_template).is_some());
        }
    }
}
