#![allow(dead_code)]

use async_trait::async_trait;
use auction_bids::application::services::auth_service::hash_token;
use auction_bids::application::services::{AuthService, BidService};
use auction_bids::domain::clock::FixedClock;
use auction_bids::domain::entities::{Bid, NewBid};
use auction_bids::domain::repositories::{ApiToken, BidRepository, NewApiToken, TokenRepository};
use auction_bids::error::AppError;
use auction_bids::routes::app_router;
use auction_bids::state::AppState;
use axum::Router;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use tower::Layer;
use uuid::Uuid;
use validator::Validate;

pub const SIGNING_SECRET: &str = "test-signing-secret";

pub const ALICE_TOKEN: &str = "alice-token";
pub const BOB_TOKEN: &str = "bob-token";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const REVOKED_TOKEN: &str = "revoked-token";

pub fn alice() -> Uuid {
    Uuid::from_u128(0xa11ce)
}

pub fn bob() -> Uuid {
    Uuid::from_u128(0xb0b)
}

pub fn admin() -> Uuid {
    Uuid::from_u128(0xad31)
}

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
}

/// Bid store kept in a map; honours the same schema rules as PostgreSQL.
#[derive(Default)]
pub struct InMemoryBidRepository {
    bids: Mutex<HashMap<Uuid, Bid>>,
    unreachable: AtomicBool,
}

impl InMemoryBidRepository {
    pub fn insert(&self, bid: Bid) {
        self.bids.lock().unwrap().insert(bid.id, bid);
    }

    pub fn get(&self, id: Uuid) -> Option<Bid> {
        self.bids.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.bids.lock().unwrap().len()
    }

    /// Makes every subsequent call fail as if the database were down.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    fn check_reachable(&self) -> Result<(), AppError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl BidRepository for InMemoryBidRepository {
    async fn create(&self, new_bid: NewBid) -> Result<Bid, AppError> {
        self.check_reachable()?;
        new_bid.validate()?;

        let bid = Bid::new(
            Uuid::new_v4(),
            new_bid.product_id,
            new_bid.bidder_id,
            new_bid.amount.unwrap_or_default(),
            new_bid.date,
        );
        self.insert(bid.clone());
        Ok(bid)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bid>, AppError> {
        self.check_reachable()?;
        Ok(self.get(id))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        self.check_reachable()?;
        Ok(self.bids.lock().unwrap().remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_reachable()
    }
}

#[derive(Default)]
pub struct InMemoryTokenRepository {
    tokens: Mutex<Vec<ApiToken>>,
    next_id: AtomicI64,
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn find_active_by_hash(&self, token_hash: &str) -> Result<Option<ApiToken>, AppError> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.token_hash == token_hash && !t.is_revoked())
            .cloned())
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        if let Some(token) = self
            .tokens
            .lock()
            .unwrap()
            .iter_mut()
            .find(|t| t.token_hash == token_hash)
        {
            token.last_used_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn create_token(&self, new_token: NewApiToken) -> Result<ApiToken, AppError> {
        let token = ApiToken {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: new_token.name,
            token_hash: new_token.token_hash,
            user_id: new_token.user_id,
            is_admin: new_token.is_admin,
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };
        self.tokens.lock().unwrap().push(token.clone());
        Ok(token)
    }

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError> {
        Ok(self.tokens.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ApiToken>, AppError> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }

    async fn revoke_token(&self, id: i64) -> Result<(), AppError> {
        if let Some(token) = self
            .tokens
            .lock()
            .unwrap()
            .iter_mut()
            .find(|t| t.id == id && t.revoked_at.is_none())
        {
            token.revoked_at = Some(Utc::now());
        }
        Ok(())
    }
}

pub struct TestContext {
    pub state: AppState,
    pub bids: Arc<InMemoryBidRepository>,
    pub tokens: Arc<InMemoryTokenRepository>,
}

/// Builds services over in-memory stores with a clock frozen at [`now`] and
/// seeds tokens for alice, bob, an administrator and a revoked one.
pub async fn create_test_state() -> TestContext {
    let bids = Arc::new(InMemoryBidRepository::default());
    let tokens = Arc::new(InMemoryTokenRepository::default());

    seed_token(&tokens, "alice", ALICE_TOKEN, alice(), false).await;
    seed_token(&tokens, "bob", BOB_TOKEN, bob(), false).await;
    seed_token(&tokens, "admin", ADMIN_TOKEN, admin(), true).await;
    let revoked = seed_token(&tokens, "revoked", REVOKED_TOKEN, alice(), false).await;
    tokens.revoke_token(revoked.id).await.unwrap();

    let bid_service = Arc::new(BidService::new(
        bids.clone(),
        Arc::new(FixedClock(now())),
    ));
    let auth_service = Arc::new(AuthService::new(
        tokens.clone(),
        SIGNING_SECRET.to_string(),
    ));

    TestContext {
        state: AppState::new(bid_service, auth_service),
        bids,
        tokens,
    }
}

async fn seed_token(
    tokens: &InMemoryTokenRepository,
    name: &str,
    token: &str,
    user_id: Uuid,
    is_admin: bool,
) -> ApiToken {
    tokens
        .create_token(NewApiToken {
            name: name.to_string(),
            token_hash: hash_token(SIGNING_SECRET, token),
            user_id,
            is_admin,
        })
        .await
        .unwrap()
}

/// Inserts a fixed peer address, as `into_make_service_with_connect_info`
/// would, so the per-IP rate limiters can key requests.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// Test server over the production router from [`app_router`], including
/// auth, rate limiting, tracing and trailing-slash normalization.
pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new().fallback_service(MockConnectInfoLayer.layer(app_router(state)));

    TestServer::new(app).unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Stores a bid owned by `bidder` directly, bypassing the API.
pub fn seed_bid(bids: &InMemoryBidRepository, bidder: Uuid, amount: i64) -> Bid {
    let bid = Bid::new(Uuid::new_v4(), Uuid::new_v4(), bidder, amount, now());
    bids.insert(bid.clone());
    bid
}
