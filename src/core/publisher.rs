use crate::core::{Order, OrderSink};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// POSTs each order as JSON to a fixed endpoint.
pub struct HttpOrderSink {
    client: Client,
    endpoint: String,
}

impl HttpOrderSink {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl OrderSink for HttpOrderSink {
    async fn publish(&self, order: &Order) -> Result<u16> {
        let body = serde_json::to_vec(order)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Identifier, LineItem};
    use httpmock::prelude::*;

    fn order() -> Order {
        Order {
            customer_id: Identifier::from_random_bytes([5; 16]),
            line_items: vec![
                LineItem {
                    item_id: Identifier::from_random_bytes([6; 16]),
                    quantity: 1,
                    price: 10_000,
                },
                LineItem {
                    item_id: Identifier::from_random_bytes([8; 16]),
                    quantity: 10,
                    price: 1,
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_publish_posts_json_body() {
        let server = MockServer::start();
        let order = order();
        let expected = serde_json::to_value(&order).unwrap();

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/orders")
                .header("content-type", "application/json")
                .json_body(expected);
            then.status(201);
        });

        let sink = HttpOrderSink::new(server.url("/orders"), None).unwrap();
        let status = sink.publish(&order).await.unwrap();

        mock.assert();
        assert_eq!(status, 201);
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/orders");
            then.status(500);
        });

        let sink = HttpOrderSink::new(server.url("/orders"), Some(Duration::from_secs(5))).unwrap();
        let status = sink.publish(&order()).await.unwrap();

        mock.assert();
        assert_eq!(status, 500);
    }
}
