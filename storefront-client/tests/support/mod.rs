//! Recording HTTP client for controller and gateway tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use shared::http::StatusCode;
use shared::models::Product;
use storefront_client::{ClientError, ClientResult, Gateway, HttpClient};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Replies are consumed in order; an exhausted queue fails the request
#[derive(Default)]
pub struct MockHttpClient {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<VecDeque<ClientResult<Value>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, value: Value) -> &Self {
        self.replies.lock().unwrap().push_back(Ok(value));
        self
    }

    /// Queue an empty success body
    pub fn respond_empty(&self) -> &Self {
        self.respond(Value::Null)
    }

    pub fn fail(&self, status: u16, message: Option<&str>) -> &Self {
        self.replies.lock().unwrap().push_back(Err(ClientError::Api {
            status: StatusCode::from_u16(status).unwrap(),
            message: message.map(str::to_string),
        }));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// "METHOD path" for each request, in order
    pub fn requests(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|c| format!("{} {}", c.method, c.path))
            .collect()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.calls().last().and_then(|c| c.body.clone())
    }

    fn reply<T: DeserializeOwned>(&self, method: &'static str, path: &str, body: Option<Value>) -> ClientResult<T> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            body,
        });
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::InvalidResponse(format!("no reply for {} {}", method, path))))?;
        Ok(serde_json::from_value(reply)?)
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.reply("GET", path, None)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.reply("POST", path, Some(body))
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.reply("POST", path, None)
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.reply("PUT", path, Some(body))
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.reply("DELETE", path, None)
    }
}

pub fn gateway() -> Gateway<MockHttpClient> {
    Gateway::new(MockHttpClient::new())
}

pub fn product_json(id: i64, name: &str, category: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{} description", name),
        "price": 19.99,
        "currency": "USD",
        "sku": format!("SKU-{}", id),
        "stockQuantity": 10,
        "imageUrl": format!("https://img.example.com/{}.jpg", id),
        "category": category,
        "active": true
    })
}

pub fn products_json(products: &[(i64, &str, &str)]) -> Value {
    Value::Array(
        products
            .iter()
            .map(|(id, name, category)| product_json(*id, name, category))
            .collect(),
    )
}

pub fn product(id: i64, name: &str, category: &str) -> Product {
    serde_json::from_value(product_json(id, name, category)).unwrap()
}

pub fn user_json(username: &str, role: &str) -> Value {
    json!({ "username": username, "role": role, "email": format!("{}@example.com", username) })
}

pub fn cart_json(items: &[(i64, i64, i32)]) -> Value {
    let items: Vec<Value> = items
        .iter()
        .map(|(id, product_id, quantity)| {
            json!({
                "id": id,
                "productId": product_id,
                "productName": format!("Product {}", product_id),
                "imageUrl": "",
                "quantity": quantity,
                "unitPrice": 10.0,
                "lineTotal": 10.0 * f64::from(*quantity)
            })
        })
        .collect();
    let total: f64 = items.iter().filter_map(|i| i["lineTotal"].as_f64()).sum();
    json!({ "id": 42, "items": items, "total": total, "currency": "MAD" })
}
