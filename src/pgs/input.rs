use crate::config::{CreditCardConfig, PaymentMethodConfig};
use crate::entities::Amount;
use crate::ids::TransactionId;
use crate::mapper::{RequestEnvironment, RequestMap, RequestMapper};
use crate::response::Response;
use crate::transactions::{
    CreditCardTransaction, KlarnaInvoiceTransaction, Operation, PaymentMethod,
    TransactionBuilder, TransactionType,
};
use crate::Money;
use crate::Result;

use serde::{Deserialize, Serialize};

use thiserror::Error;

/// One row of a request input file
#[derive(Deserialize, Debug, Clone)]
pub struct InputRequest {
    pub method: InputMethod,
    pub operation: String,
    pub merchant_account_id: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub parent_transaction_id: Option<String>,
    pub parent_transaction_type: Option<String>,
    pub token_id: Option<String>,
    pub pares: Option<String>,
    pub order_number: Option<String>,
    pub country: Option<String>,
    pub ip_address: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    #[serde(rename = "creditcard")]
    CreditCard,

    #[serde(rename = "klarna-invoice")]
    KlarnaInvoice,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input request: amount without currency: {0:?}")]
    NoCurrency(InputRequest),
}

impl InputRequest {
    pub fn map_request(self) -> Result<RequestMap> {
        let mapper = RequestMapper::new(RequestEnvironment {
            ip_address: self.ip_address.clone(),
        });

        let maid = self.merchant_account_id.as_deref();

        let map = match self.method {
            InputMethod::CreditCard => {
                let mut builder = self.common_fields(CreditCardTransaction::builder())?;

                if let Some(token_id) = &self.token_id {
                    builder = builder.token_id(token_id);
                }
                if let Some(pares) = &self.pares {
                    builder = builder.pares(pares);
                }

                let config = match maid {
                    Some(maid) => CreditCardConfig::new().with_ssl_merchant_account_id(maid),
                    None => CreditCardConfig::new(),
                };

                mapper.map(builder.build()?, &config)?
            }
            InputMethod::KlarnaInvoice => {
                let mut builder = self.common_fields(KlarnaInvoiceTransaction::builder())?;

                if let Some(order_number) = &self.order_number {
                    builder = builder.order_number(order_number);
                }
                if let Some(country) = &self.country {
                    builder = builder.country(country);
                }

                let config = match maid {
                    Some(maid) => PaymentMethodConfig::new(maid),
                    None => PaymentMethodConfig::default(),
                };

                mapper.map(builder.build()?, &config)?
            }
        };

        return Ok(map);
    }

    fn common_fields<M: PaymentMethod>(
        &self,
        builder: TransactionBuilder<M>,
    ) -> Result<TransactionBuilder<M>> {
        let mut builder = builder.operation(Operation::from(self.operation.as_str()));

        if let Some(id) = &self.parent_transaction_id {
            builder = builder.parent_transaction_id(TransactionId::from(id.as_str()));
        }

        if let Some(parent_type) = &self.parent_transaction_type {
            builder = builder.parent_transaction_type(TransactionType::from(parent_type.as_str()));
        }

        if let Some(amount) = &self.amount {
            let currency = self
                .currency
                .as_deref()
                .ok_or_else(|| InputParseError::NoCurrency(self.clone()))?;

            builder = builder.amount(Amount::new(Money::parse(amount)?, currency));
        }

        return Ok(builder);
    }
}

/// One flattened field of a mapped request, `request` is the row number
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestRecord {
    pub request: usize,
    pub key: String,
    pub value: String,
}

impl RequestRecord {
    pub fn from_map(request: usize, map: &RequestMap) -> Vec<Self> {
        map.flatten()
            .into_iter()
            .map(|(key, value)| Self {
                request,
                key,
                value,
            })
            .collect()
    }
}

/// One flattened field of a parsed response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DataRecord {
    pub key: String,
    pub value: String,
}

impl DataRecord {
    pub fn from_response(response: &Response) -> Vec<Self> {
        response
            .data()
            .into_iter()
            .map(|(key, value)| Self { key, value })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use csv::{ReaderBuilder, Trim};

    const SOME_INPUT: &str = "\
method,operation,merchant_account_id,amount,currency,parent_transaction_id,parent_transaction_type,token_id,pares,order_number,country,ip_address
creditcard,reserve,maid,24,EUR,,,21,,,,127.0.0.1
klarna-invoice,cancel,maid,,,642,capture-authorization,,,A-1,AT,
creditcard,pay,maid,5,,,,21,,,,
";

    fn read_rows() -> Vec<InputRequest> {
        ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(SOME_INPUT.as_bytes())
            .deserialize::<InputRequest>()
            .map(|row| row.unwrap())
            .collect()
    }

    #[test]
    fn map_request() {
        let rows = read_rows();

        let map = rows[0].clone().map_request().unwrap();
        assert_eq!(map.get_path("transaction-type"), Some("authorization"));
        assert_eq!(map.get_path("requested-amount.value"), Some("24"));
        assert_eq!(map.get_path("ip-address"), Some("127.0.0.1"));

        let map = rows[1].clone().map_request().unwrap();
        assert_eq!(map.get_path("transaction-type"), Some("refund-capture"));
        assert_eq!(map.get_path("order-number"), Some("A-1"));
        assert!(!map.contains_key("ip-address"));
    }

    #[test]
    fn fail_on_amount_without_currency() {
        let err = read_rows()[2].clone().map_request().unwrap_err();

        assert!(err.downcast_ref::<InputParseError>().is_some());
    }

    #[test]
    fn request_records() {
        let map = read_rows()[0].clone().map_request().unwrap();

        let records = RequestRecord::from_map(1, &map);

        assert_eq!(
            records[0],
            RequestRecord {
                request: 1,
                key: "payment-methods.payment-method.0.name".to_string(),
                value: "creditcard".to_string(),
            }
        );
        assert!(records.iter().all(|record| record.request == 1));
    }
}
