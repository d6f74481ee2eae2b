//! Session state for the customer page.
//!
//! # Design
//! `CustomerStore` owns the only copy of the customer list and the form
//! inputs. `load`, `create`/`submit` and `remove` are the sole mutators of
//! the list; each one writes a brand-new `Arc<[Customer]>` snapshot into a
//! `watch` channel, so readers never observe a half-applied change and views
//! can subscribe to re-render.
//!
//! Failures never reach the caller. They are logged and handed to the
//! optional `on_error` hook as a `StoreFailure`.
//!
//! The list is never re-fetched after a write: creates append the record
//! the server returned and deletes filter locally. Responses that arrive
//! after `unmount` are dropped.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error};

use crate::client::CustomerClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Customer, CustomerForm, NewCustomer};

/// An immutable view of the customer list at one point in time.
pub type Snapshot = Arc<[Customer]>;

type ErrorHook = Box<dyn Fn(&StoreFailure) + Send + Sync>;

/// The store operation a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Remove,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Load => "load",
            Operation::Create => "create",
            Operation::Remove => "remove",
        })
    }
}

/// A swallowed failure, as delivered to the `on_error` hook.
#[derive(Debug)]
pub struct StoreFailure {
    pub operation: Operation,
    pub error: ApiError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loaded,
}

pub struct CustomerStore<T> {
    client: CustomerClient,
    transport: T,
    customers: watch::Sender<Snapshot>,
    form: watch::Sender<CustomerForm>,
    load_state: watch::Sender<LoadState>,
    mounted: AtomicBool,
    unmounted: AtomicBool,
    on_error: Option<ErrorHook>,
}

impl<T: Transport> CustomerStore<T> {
    pub fn new(client: CustomerClient, transport: T) -> Self {
        let empty: Snapshot = Arc::from(Vec::new());
        Self {
            client,
            transport,
            customers: watch::Sender::new(empty),
            form: watch::Sender::new(CustomerForm::default()),
            load_state: watch::Sender::new(LoadState::Unloaded),
            mounted: AtomicBool::new(false),
            unmounted: AtomicBool::new(false),
            on_error: None,
        }
    }

    /// Install a hook that receives every failure the store swallows.
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&StoreFailure) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(hook));
        self
    }

    /// Load the list the first time the page is shown. Later calls do nothing.
    pub async fn mount(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return;
        }
        self.load().await;
    }

    /// Tear the page down. In-flight responses are discarded when they land.
    pub fn unmount(&self) {
        self.unmounted.store(true, Ordering::SeqCst);
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted.load(Ordering::SeqCst)
    }

    /// Replace the list with the server's full collection, in response order.
    pub async fn load(&self) {
        let result = self.fetch_all().await;
        if self.discard_stale(Operation::Load) {
            if let Err(error) = result {
                self.report(Operation::Load, error);
            }
            return;
        }
        match result {
            Ok(customers) => {
                debug!(count = customers.len(), "customer list loaded");
                self.customers.send_replace(Arc::from(customers));
                self.load_state.send_replace(LoadState::Loaded);
            }
            Err(error) => self.report(Operation::Load, error),
        }
    }

    /// Register a customer and append the server's record to the list.
    ///
    /// Returns the appended record. Empty inputs are skipped without a
    /// request.
    pub async fn create(&self, name: &str, email: &str) -> Option<Customer> {
        let Some(input) = NewCustomer::from_fields(name, email) else {
            debug!("create skipped: name or email is empty");
            return None;
        };
        let result = self.post(&input).await;
        if self.discard_stale(Operation::Create) {
            if let Err(error) = result {
                self.report(Operation::Create, error);
            }
            return None;
        }
        match result {
            Ok(customer) => {
                self.customers.send_modify(|list| {
                    let mut next = Vec::with_capacity(list.len() + 1);
                    next.extend_from_slice(&list[..]);
                    next.push(customer.clone());
                    *list = Arc::from(next);
                });
                Some(customer)
            }
            Err(error) => {
                self.report(Operation::Create, error);
                None
            }
        }
    }

    /// Submit the form as it reads right now; clears it once the record is
    /// appended.
    pub async fn submit(&self) -> Option<Customer> {
        let form = self.form.borrow().clone();
        let created = self.create(&form.name, &form.email).await;
        if created.is_some() {
            self.form.send_modify(CustomerForm::clear);
        }
        created
    }

    /// Delete a customer and drop every entry with that id from the list.
    pub async fn remove(&self, id: &str) {
        let result = self.delete(id).await;
        if self.discard_stale(Operation::Remove) {
            if let Err(error) = result {
                self.report(Operation::Remove, error);
            }
            return;
        }
        match result {
            Ok(()) => {
                self.customers.send_if_modified(|list| {
                    if !list.iter().any(|customer| customer.id == id) {
                        return false;
                    }
                    *list = list
                        .iter()
                        .filter(|customer| customer.id != id)
                        .cloned()
                        .collect();
                    true
                });
            }
            Err(error) => self.report(Operation::Remove, error),
        }
    }

    pub fn customers(&self) -> Snapshot {
        self.customers.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.customers.subscribe()
    }

    pub fn load_state(&self) -> LoadState {
        *self.load_state.borrow()
    }

    pub fn form(&self) -> CustomerForm {
        self.form.borrow().clone()
    }

    pub fn subscribe_form(&self) -> watch::Receiver<CustomerForm> {
        self.form.subscribe()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.form.send_modify(|form| form.name = name);
    }

    pub fn set_email(&self, email: impl Into<String>) {
        let email = email.into();
        self.form.send_modify(|form| form.email = email);
    }

    async fn fetch_all(&self) -> Result<Vec<Customer>, ApiError> {
        let response = self.round_trip(self.client.build_list_customers()).await?;
        self.client.parse_list_customers(response)
    }

    async fn post(&self, input: &NewCustomer) -> Result<Customer, ApiError> {
        let request = self.client.build_create_customer(input)?;
        let response = self.round_trip(request).await?;
        self.client.parse_create_customer(response)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self.round_trip(self.client.build_delete_customer(id)).await?;
        self.client.parse_delete_customer(response)
    }

    async fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        Ok(self.transport.execute(request).await?)
    }

    fn discard_stale(&self, operation: Operation) -> bool {
        let stale = self.is_unmounted();
        if stale {
            debug!(%operation, "response arrived after unmount, not applied");
        }
        stale
    }

    fn report(&self, operation: Operation, error: ApiError) {
        error!(%operation, %error, "customer operation failed");
        if let Some(hook) = &self.on_error {
            hook(&StoreFailure { operation, error });
        }
    }
}

impl<T> fmt::Debug for CustomerStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerStore")
            .field("client", &self.client)
            .field("customers", &self.customers.borrow().len())
            .field("load_state", &*self.load_state.borrow())
            .field("unmounted", &self.unmounted.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
