//! Recording fake transport for unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use food_client::{ClientError, ClientResult, HttpClient};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Canned JSON per `(method, path)`; unknown routes answer 404
#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    replies: HashMap<(&'static str, String), Result<Value, String>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend where every mutation is acknowledged
    pub fn accepting() -> Self {
        Self::new()
            .reply("POST", "/api/cart/add", json!({"message": "Added", "order_id": 1}))
            .reply("POST", "/api/checkout", json!({"message": "Order placed"}))
            .reply("POST", "/api/payment-methods", json!({"message": "Added", "id": 2}))
    }

    pub fn reply(mut self, method: &'static str, path: &str, body: Value) -> Self {
        self.replies.insert((method, path.to_string()), Ok(body));
        self
    }

    pub fn fail(mut self, method: &'static str, path: &str) -> Self {
        self.replies
            .insert((method, path.to_string()), Err("backend down".to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|c| format!("{} {}", c.method, c.path))
            .collect()
    }

    fn answer<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<T> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            body,
        });
        match self.replies.get(&(method, path.to_string())) {
            Some(Ok(value)) => Ok(serde_json::from_value(value.clone())?),
            Some(Err(message)) => Err(ClientError::Internal(message.clone())),
            None => Err(ClientError::NotFound(path.to_string())),
        }
    }
}

#[async_trait]
impl HttpClient for FakeBackend {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.answer("GET", path, None)
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + std::marker::Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.answer("POST", path, Some(body))
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.answer("POST", path, None)
    }
}

pub(crate) fn restaurants_json() -> Value {
    json!([
        {
            "id": 3,
            "name": "Burger Point",
            "country": "America",
            "menu": [
                {"id": 7, "name": "Burger", "price": 6.49},
                {"id": 8, "name": "Fries", "price": 2.99}
            ]
        },
        {
            "id": 1,
            "name": "Spice India",
            "country": "India",
            "menu": [
                {"id": 1, "name": "Butter Chicken", "price": 100.0},
                {"id": 2, "name": "Naan", "price": 15.0}
            ]
        }
    ])
}

pub(crate) fn orders_json() -> Value {
    json!([
        {
            "id": 10,
            "status": "cart",
            "country": "America",
            "total": 9.48,
            "items": [{"name": "Burger", "qty": 1}, {"name": "Fries", "qty": 1}],
            "added_by": "captain_america",
            "cancelled_by": null
        },
        {
            "id": 11,
            "status": "cancelled",
            "country": null,
            "total": 100.0,
            "items": [{"name": "Butter Chicken", "qty": 1}],
            "added_by": null,
            "cancelled_by": "nick"
        }
    ])
}

pub(crate) fn payment_methods_json() -> Value {
    json!([
        {"id": 1, "method_name": "Admin Card", "card_last4": "1111"},
        {"id": 2, "method_name": "Visa", "card_last4": "4242"}
    ])
}
