//! In-process fakes for the JSON-RPC provider, the suggestion API and the
//! database-backed stores.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

use crate::features::credentials::models::UserCredentialHash;
use crate::features::credentials::services::CredentialStore;
use crate::features::tickets::dtos::TicketFilter;
use crate::features::tickets::models::Ticket;
use crate::features::tickets::services::TicketRepository;

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_test_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A local URL nothing is listening on
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Endpoint that accepts any request and answers only after `delay`
pub fn hanging_server(delay: Duration) -> Router {
    Router::new().fallback(move || async move {
        tokio::time::sleep(delay).await;
        StatusCode::OK
    })
}

/// ABI-encoded `bool` return word
pub fn bool_word(value: bool) -> String {
    format!("0x{:064x}", value as u8)
}

// =============================================================================
// JSON-RPC PROVIDER
// =============================================================================

#[derive(Clone)]
enum CallBehavior {
    Return(String),
    Revert(String),
}

#[derive(Default)]
struct ChainLog {
    methods: Vec<String>,
    eth_calls: Vec<Value>,
}

/// Sepolia-like provider that answers the three calls the verifier makes
#[derive(Clone)]
pub struct FakeChain {
    call: CallBehavior,
    has_code: bool,
    log: Arc<Mutex<ChainLog>>,
}

impl FakeChain {
    pub const CHAIN_ID: &'static str = "0xaa36a7";

    pub fn returning(value: bool) -> Self {
        Self::returning_raw(&bool_word(value))
    }

    pub fn returning_raw(raw: &str) -> Self {
        Self::with_call(CallBehavior::Return(raw.to_string()))
    }

    /// `eth_call` fails with JSON-RPC error code 3
    pub fn reverting(message: &str) -> Self {
        Self::with_call(CallBehavior::Revert(message.to_string()))
    }

    fn with_call(call: CallBehavior) -> Self {
        Self {
            call,
            has_code: true,
            log: Arc::new(Mutex::new(ChainLog::default())),
        }
    }

    /// `eth_getCode` returns `0x`
    pub fn without_code(mut self) -> Self {
        self.has_code = false;
        self
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/", post(handle_rpc))
            .with_state(self.clone())
    }

    pub fn methods(&self) -> Vec<String> {
        self.log.lock().unwrap().methods.clone()
    }

    /// Call objects (`to`, `data`) received by `eth_call`
    pub fn eth_calls(&self) -> Vec<Value> {
        self.log.lock().unwrap().eth_calls.clone()
    }
}

async fn handle_rpc(State(chain): State<FakeChain>, Json(request): Json<Value>) -> Json<Value> {
    let id = request["id"].clone();
    let method = request["method"].as_str().unwrap_or_default().to_string();

    {
        let mut log = chain.log.lock().unwrap();
        log.methods.push(method.clone());
        if method == "eth_call" {
            log.eth_calls.push(request["params"][0].clone());
        }
    }

    let outcome = match method.as_str() {
        "eth_chainId" => Ok(json!(FakeChain::CHAIN_ID)),
        "eth_getCode" if chain.has_code => Ok(json!("0x6080604052")),
        "eth_getCode" => Ok(json!("0x")),
        "eth_call" => match &chain.call {
            CallBehavior::Return(raw) => Ok(json!(raw)),
            CallBehavior::Revert(message) => Err(json!({"code": 3, "message": message})),
        },
        _ => Err(json!({"code": -32601, "message": "method not found"})),
    };

    Json(match outcome {
        Ok(result) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
        Err(error) => json!({"jsonrpc": "2.0", "id": id, "error": error}),
    })
}

// =============================================================================
// SUGGESTION API
// =============================================================================

/// Suggestion endpoint replying with a fixed status and body
#[derive(Clone)]
pub struct FakeSuggestionApi {
    status: StatusCode,
    body: Value,
    received: Arc<Mutex<Vec<Value>>>,
}

impl FakeSuggestionApi {
    pub fn responding(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/ai-suggest/", post(handle_suggest))
            .with_state(self.clone())
    }

    /// Request bodies in arrival order
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn handle_suggest(
    State(api): State<FakeSuggestionApi>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    api.received.lock().unwrap().push(body);
    (api.status, Json(api.body.clone()))
}

// =============================================================================
// STORES
// =============================================================================

pub struct InMemoryCredentialStore {
    hashes: HashMap<String, String>,
}

impl InMemoryCredentialStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            hashes: entries
                .iter()
                .map(|(user, hash)| (user.to_string(), hash.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn get_user_hash(
        &self,
        user_id: &str,
    ) -> Result<Option<UserCredentialHash>, sqlx::Error> {
        Ok(self.hashes.get(user_id).cloned().map(UserCredentialHash::new))
    }
}

/// Store whose every lookup fails like an exhausted pool
pub struct FailingCredentialStore;

#[async_trait]
impl CredentialStore for FailingCredentialStore {
    async fn get_user_hash(
        &self,
        _user_id: &str,
    ) -> Result<Option<UserCredentialHash>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

pub struct InMemoryTicketRepository {
    tickets: Vec<Ticket>,
}

impl InMemoryTicketRepository {
    pub fn with(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }
}

fn matches_filter(ticket: &Ticket, filter: &TicketFilter) -> bool {
    if filter.status.is_some_and(|status| status != ticket.status) {
        return false;
    }
    if filter
        .category
        .as_ref()
        .is_some_and(|category| category != &ticket.category)
    {
        return false;
    }
    match &filter.search {
        Some(search) => {
            let needle = search.to_lowercase();
            ticket.title.to_lowercase().contains(&needle)
                || ticket.description.to_lowercase().contains(&needle)
        }
        None => true,
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, sqlx::Error> {
        Ok(self.tickets.iter().find(|t| t.id == id).cloned())
    }

    async fn list(
        &self,
        filter: &TicketFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Ticket>, i64), sqlx::Error> {
        let mut matching: Vec<Ticket> = self
            .tickets
            .iter()
            .filter(|t| matches_filter(t, filter))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        Ok((page, total))
    }
}
