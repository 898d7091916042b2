use super::RequestMap;

use crate::resolver::{resolve, PaymentMethodPolicy};
use crate::transactions::{PaymentMethod, Transaction};
use crate::Result;

/// Request-scoped values that do not belong to the transaction itself
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestEnvironment {
    pub ip_address: Option<String>,
}

impl RequestEnvironment {
    pub fn new(ip_address: &str) -> Self {
        return Self {
            ip_address: Some(ip_address.to_string()),
        };
    }
}

/// Turns a transaction into the nested structure of a gateway request
#[derive(Debug, Clone, Default)]
pub struct RequestMapper {
    environment: RequestEnvironment,
}

impl RequestMapper {
    pub fn new(environment: RequestEnvironment) -> Self {
        return Self { environment };
    }

    pub fn map<M: PaymentMethod>(
        &self,
        transaction: Transaction<M>,
        config: &M::Config,
    ) -> Result<RequestMap> {
        let policy = M::Policy::default();
        let method = transaction.method();

        let flags = method.flags(config, transaction.amount());
        let ctx = transaction.resolve_context(flags);

        let transaction_type = resolve(&policy, &ctx)?;
        let merchant_account_id = method.merchant_account_id(config, &flags)?;

        let mut map = RequestMap::new();

        map.insert(
            "payment-methods",
            RequestMap::single(
                "payment-method",
                vec![RequestMap::single("name", policy.name())],
            ),
        );

        if let Some(amount) = transaction.amount() {
            map.insert("requested-amount", amount.mapped_properties());
        }

        map.insert_text(
            "parent-transaction-id",
            transaction.parent_transaction_id().map(|id| id.as_str()),
        );
        map.insert_text("ip-address", self.environment.ip_address.as_deref());
        map.insert("transaction-type", transaction_type.as_str());
        map.insert(
            "merchant-account-id",
            RequestMap::single("value", merchant_account_id.as_str()),
        );

        if !transaction.custom_fields().is_empty() {
            map.insert("custom-fields", transaction.custom_fields().mapped_properties());
        }

        map.extend(method.mapped_specific_properties(&ctx)?);

        log::debug!(
            "Mapped {} {transaction_type} request with {} fields",
            policy.name(),
            map.len()
        );

        return Ok(map);
    }

    /// Gateway path the mapped request is posted to
    pub fn endpoint<M: PaymentMethod>(&self, transaction: &Transaction<M>) -> &'static str {
        M::Policy::default().endpoint(transaction.operation())
    }
}
