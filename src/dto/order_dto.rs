use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::order::Order;
use crate::model::write_result::{InsertManyOutcome, InsertOneOutcome};

/// `POST /orders` accepts either one order or a batch
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OrderSubmission {
    Many(Vec<Order>),
    One(Order),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlacedOrders {
    Many(InsertManyOutcome),
    One(InsertOneOutcome),
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOrderStatusRequest {
    #[serde(rename = "_id")]
    #[validate(length(min = 1, message = "_id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderQuery {
    pub email: Option<String>,
}

impl OrderQuery {
    /// An empty `email` parameter means "no filter"
    pub fn email_filter(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_shapes() {
        let many: OrderSubmission =
            serde_json::from_value(json!([{ "email": "a@x.com" }, { "email": "b@x.com" }])).unwrap();
        assert!(matches!(many, OrderSubmission::Many(ref orders) if orders.len() == 2));

        let one: OrderSubmission =
            serde_json::from_value(json!({ "email": "a@x.com", "items": [1, 2] })).unwrap();
        match one {
            OrderSubmission::One(order) => {
                assert_eq!(order.email.as_deref(), Some("a@x.com"));
                assert!(order.extra.contains_key("items"));
            }
            OrderSubmission::Many(_) => panic!("expected a single order"),
        }
    }

    #[test]
    fn test_status_request_presence() {
        let req: UpdateOrderStatusRequest =
            serde_json::from_value(json!({ "_id": "", "status": "Shipped" })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_email_query_is_unfiltered() {
        let query = OrderQuery { email: Some(String::new()) };
        assert_eq!(query.email_filter(), None);
    }
}
