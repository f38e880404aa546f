#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use bson::oid::ObjectId;
use bson::Bson;
use serde_json::Value;
use tower::ServiceExt;

use drone_shop_backend::app::app::{create_router, Services};
use drone_shop_backend::config::JwtConfig;
use drone_shop_backend::model::cart::Cart;
use drone_shop_backend::model::drone::Drone;
use drone_shop_backend::model::order::Order;
use drone_shop_backend::model::review::Review;
use drone_shop_backend::model::user::User;
use drone_shop_backend::model::write_result::{DeleteOutcome, InsertManyOutcome, InsertOneOutcome, UpdateOutcome};
use drone_shop_backend::repository::cart_repo::CartRepository;
use drone_shop_backend::repository::drone_repo::DroneRepository;
use drone_shop_backend::repository::order_repo::OrderRepository;
use drone_shop_backend::repository::repository_error::RepositoryResult;
use drone_shop_backend::repository::review_repo::ReviewRepository;
use drone_shop_backend::repository::user_repo::UserRepository;
use drone_shop_backend::service::cart_service::CartServiceImpl;
use drone_shop_backend::service::drone_service::DroneServiceImpl;
use drone_shop_backend::service::order_service::OrderServiceImpl;
use drone_shop_backend::service::review_service::ReviewServiceImpl;
use drone_shop_backend::service::user_service::UserServiceImpl;
use drone_shop_backend::util::jwt::JwtTokenVerifier;

pub const TEST_UPLOAD_LIMIT: usize = 1024 * 1024;

// Top-level `$set` semantics: submitted keys overwrite, the rest stay.
fn set_fields(target: &mut bson::Document, fields: &bson::Document) {
    for (key, value) in fields {
        target.insert(key.clone(), value.clone());
    }
}

#[derive(Default)]
pub struct InMemoryUsers {
    pub docs: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.docs.lock().unwrap().clone())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        Ok(self.docs.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, mut user: User) -> RepositoryResult<InsertOneOutcome> {
        let id = ObjectId::new();
        user.id = Some(id);
        self.docs.lock().unwrap().push(user);
        Ok(InsertOneOutcome::new(id))
    }

    async fn upsert_by_email(&self, user: User) -> RepositoryResult<UpdateOutcome> {
        let mut docs = self.docs.lock().unwrap();
        match docs.iter_mut().find(|u| u.email == user.email) {
            Some(existing) => {
                if user.role.is_some() {
                    existing.role = user.role;
                }
                set_fields(&mut existing.extra, &user.extra);
                Ok(UpdateOutcome::new(1, 1, None))
            }
            None => {
                let id = ObjectId::new();
                docs.push(User { id: Some(id), ..user });
                Ok(UpdateOutcome::new(0, 0, Some(Bson::ObjectId(id))))
            }
        }
    }

    async fn set_role(&self, email: &str, role: &str) -> RepositoryResult<UpdateOutcome> {
        let mut docs = self.docs.lock().unwrap();
        match docs.iter_mut().find(|u| u.email == email) {
            Some(user) => {
                let modified = u64::from(user.role.as_deref() != Some(role));
                user.role = Some(role.to_string());
                Ok(UpdateOutcome::new(1, modified, None))
            }
            None => Ok(UpdateOutcome::new(0, 0, None)),
        }
    }
}

#[derive(Default)]
pub struct InMemoryDrones {
    pub docs: Mutex<Vec<Drone>>,
}

#[async_trait]
impl DroneRepository for InMemoryDrones {
    async fn find_all(&self) -> RepositoryResult<Vec<Drone>> {
        Ok(self.docs.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Drone>> {
        Ok(self.docs.lock().unwrap().iter().find(|d| d.id == Some(id)).cloned())
    }

    async fn insert(&self, mut drone: Drone) -> RepositoryResult<InsertOneOutcome> {
        let id = ObjectId::new();
        drone.id = Some(id);
        self.docs.lock().unwrap().push(drone);
        Ok(InsertOneOutcome::new(id))
    }

    async fn replace_fields(&self, id: ObjectId, drone: Drone) -> RepositoryResult<UpdateOutcome> {
        let mut docs = self.docs.lock().unwrap();
        match docs.iter_mut().find(|d| d.id == Some(id)) {
            Some(existing) => {
                *existing = Drone { id: Some(id), ..drone };
                Ok(UpdateOutcome::new(1, 1, None))
            }
            None => Ok(UpdateOutcome::new(0, 0, None)),
        }
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        let mut docs = self.docs.lock().unwrap();
        let before = docs.len();
        docs.retain(|d| d.id != Some(id));
        Ok(DeleteOutcome::new((before - docs.len()) as u64))
    }
}

#[derive(Default)]
pub struct InMemoryOrders {
    pub docs: Mutex<Vec<Order>>,
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn find(&self, email: Option<&str>) -> RepositoryResult<Vec<Order>> {
        let docs = self.docs.lock().unwrap();
        Ok(docs
            .iter()
            .filter(|o| email.is_none() || o.email.as_deref() == email)
            .cloned()
            .collect())
    }

    async fn insert_one(&self, mut order: Order) -> RepositoryResult<InsertOneOutcome> {
        let id = ObjectId::new();
        order.id = Some(id);
        self.docs.lock().unwrap().push(order);
        Ok(InsertOneOutcome::new(id))
    }

    async fn insert_many(&self, orders: Vec<Order>) -> RepositoryResult<InsertManyOutcome> {
        let mut docs = self.docs.lock().unwrap();
        let mut ids = Vec::with_capacity(orders.len());
        for (idx, mut order) in orders.into_iter().enumerate() {
            let id = ObjectId::new();
            order.id = Some(id);
            docs.push(order);
            ids.push((idx, Bson::ObjectId(id)));
        }
        Ok(InsertManyOutcome::new(ids))
    }

    async fn update_status(&self, id: ObjectId, status: &str) -> RepositoryResult<UpdateOutcome> {
        let mut docs = self.docs.lock().unwrap();
        match docs.iter_mut().find(|o| o.id == Some(id)) {
            Some(order) => {
                order.status = Some(status.to_string());
                Ok(UpdateOutcome::new(1, 1, None))
            }
            None => Ok(UpdateOutcome::new(0, 0, None)),
        }
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        let mut docs = self.docs.lock().unwrap();
        let before = docs.len();
        docs.retain(|o| o.id != Some(id));
        Ok(DeleteOutcome::new((before - docs.len()) as u64))
    }
}

#[derive(Default)]
pub struct InMemoryCarts {
    pub docs: Mutex<Vec<Cart>>,
}

#[async_trait]
impl CartRepository for InMemoryCarts {
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Cart>> {
        Ok(self.docs.lock().unwrap().iter().find(|c| c.email == email).cloned())
    }

    async fn upsert_by_email(&self, cart: Cart) -> RepositoryResult<UpdateOutcome> {
        let mut docs = self.docs.lock().unwrap();
        match docs.iter_mut().find(|c| c.email == cart.email) {
            Some(existing) => {
                set_fields(&mut existing.extra, &cart.extra);
                Ok(UpdateOutcome::new(1, 1, None))
            }
            None => {
                let id = ObjectId::new();
                docs.push(Cart { id: Some(id), ..cart });
                Ok(UpdateOutcome::new(0, 0, Some(Bson::ObjectId(id))))
            }
        }
    }

    async fn delete_by_email(&self, email: &str) -> RepositoryResult<DeleteOutcome> {
        let mut docs = self.docs.lock().unwrap();
        let before = docs.len();
        docs.retain(|c| c.email != email);
        Ok(DeleteOutcome::new((before - docs.len()) as u64))
    }
}

#[derive(Default)]
pub struct InMemoryReviews {
    pub docs: Mutex<Vec<Review>>,
}

#[async_trait]
impl ReviewRepository for InMemoryReviews {
    async fn find_all(&self) -> RepositoryResult<Vec<Review>> {
        Ok(self.docs.lock().unwrap().clone())
    }

    async fn insert(&self, mut review: Review) -> RepositoryResult<InsertOneOutcome> {
        let id = ObjectId::new();
        review.id = Some(id);
        self.docs.lock().unwrap().push(review);
        Ok(InsertOneOutcome::new(id))
    }
}

/// Router over in-memory stores, with handles to inspect what got written
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUsers>,
    pub drones: Arc<InMemoryDrones>,
    pub orders: Arc<InMemoryOrders>,
    pub carts: Arc<InMemoryCarts>,
    pub reviews: Arc<InMemoryReviews>,
    pub verifier: JwtTokenVerifier,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUsers::default());
        let drones = Arc::new(InMemoryDrones::default());
        let orders = Arc::new(InMemoryOrders::default());
        let carts = Arc::new(InMemoryCarts::default());
        let reviews = Arc::new(InMemoryReviews::default());
        let verifier = JwtTokenVerifier::new(JwtConfig::default());

        let services = Services {
            users: Arc::new(UserServiceImpl::new(users.clone())),
            drones: Arc::new(DroneServiceImpl::new(drones.clone())),
            orders: Arc::new(OrderServiceImpl::new(orders.clone())),
            carts: Arc::new(CartServiceImpl::new(carts.clone())),
            reviews: Arc::new(ReviewServiceImpl::new(reviews.clone())),
        };
        let router = create_router(services, Arc::new(verifier.clone()), TEST_UPLOAD_LIMIT);

        TestApp { router, users, drones, orders, carts, reviews, verifier }
    }

    pub fn seed_user(&self, email: &str, role: Option<&str>) {
        self.users.docs.lock().unwrap().push(User {
            id: Some(ObjectId::new()),
            email: email.to_string(),
            role: role.map(str::to_string),
            ..Default::default()
        });
    }

    pub fn role_of(&self, email: &str) -> Option<String> {
        self.users
            .docs
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .and_then(|u| u.role.clone())
    }

    pub fn bearer_for(&self, email: &str) -> String {
        let token = self.verifier.issue_token("test-user", email).unwrap();
        format!("Bearer {}", token)
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    pub async fn send_json(&self, req: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = self.send(req).await;
        let value = serde_json::from_slice(&body).unwrap();
        (status, value)
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

pub const BOUNDARY: &str = "drone-shop-test-boundary";

/// Hand-built multipart body; `files` are `(field, filename, bytes)`
pub fn multipart_request(method: &str, uri: &str, texts: &[(&str, &str)], files: &[(&str, &str, &[u8])]) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in texts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes());
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    for (name, filename, bytes) in files {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n").as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap()
}
