//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! [`MockClient`] stands in for a live [`StoreActor`](crate::framework::StoreActor):
//! queue up expectations with `expect_*` builders, hand the client to the
//! code under test, then call [`MockClient::verify`] to assert every
//! expectation was consumed.

use crate::framework::{Snapshot, StoreClient, StoreEntity, StoreError, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request together with the canned response to return.
#[allow(dead_code)] // ids are kept for upcoming request-argument assertions
enum Expectation<T: StoreEntity> {
    Create {
        response: Result<T, StoreError<T::Error>>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError<T::Error>>,
    },
    Update {
        id: T::Id,
        response: Result<T, StoreError<T::Error>>,
    },
    List {
        response: Result<Snapshot<T>, StoreError<T::Error>>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Order>::new();
/// mock.expect_create().return_ok(order.clone());
/// mock.expect_get(order.id).return_ok(Some(order));
///
/// let client = OrderClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answers each request with the next queued expectation.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (StoreRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Get { respond_to, .. }, Some(Expectation::Get { response, .. })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Update { respond_to, .. }, Some(Expectation::Update { response, .. })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder { expectations: self.expectations.clone() }
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder { id, expectations: self.expectations.clone() }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder { id, expectations: self.expectations.clone() }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder { expectations: self.expectations.clone() }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("expectation queue poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: StoreEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, created: T) {
        self.push(Ok(created));
    }

    pub fn return_err(self, error: StoreError<T::Error>) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, StoreError<T::Error>>) {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back(Expectation::Create { response });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        let response = Ok(value);
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back(Expectation::Get { id: self.id, response });
    }

    pub fn return_err(self, error: StoreError<T::Error>) {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back(Expectation::Get { id: self.id, response: Err(error) });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, updated: T) {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back(Expectation::Update { id: self.id, response: Ok(updated) });
    }

    pub fn return_err(self, error: StoreError<T::Error>) {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back(Expectation::Update { id: self.id, response: Err(error) });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, snapshot: Snapshot<T>) {
        self.push(Ok(snapshot));
    }

    pub fn return_err(self, error: StoreError<T::Error>) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Snapshot<T>, StoreError<T::Error>>) {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back(Expectation::List { response });
    }
}
