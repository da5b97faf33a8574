//! In-memory `CatalogApi` shared by the use case unit tests.

use crate::catalog::domain::{Component, ProductListing, ProjectStatus};
use crate::ports::outbound::{CatalogApi, Envelope, Page};
use crate::shared::error::ResponseError;
use crate::shared::Result;
use std::cell::{Cell, RefCell};

pub(crate) enum Failure {
    Transport(&'static str),
    Backend(ResponseError),
}

/// Records every call as `"<operation>:<argument>"` and serves listings and
/// components from memory. Created components become attached.
#[derive(Default)]
pub(crate) struct MockCatalogApi {
    pub calls: RefCell<Vec<String>>,
    pub listing: RefCell<ProductListing>,
    pub attached: RefCell<Vec<Component>>,
    next_id: Cell<usize>,
    failure: RefCell<Option<(&'static str, Failure)>>,
}

impl MockCatalogApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(self, listing: ProductListing) -> Self {
        *self.listing.borrow_mut() = listing;
        self
    }

    pub fn with_attached(self, components: Vec<Component>) -> Self {
        *self.attached.borrow_mut() = components;
        self
    }

    pub fn failing_on(self, operation: &'static str, failure: Failure) -> Self {
        *self.failure.borrow_mut() = Some((operation, failure));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn operations(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| call.split(':').next().unwrap_or_default().to_string())
            .collect()
    }

    fn record<T>(&self, operation: &'static str, argument: &str) -> Option<Result<Envelope<T>>> {
        self.calls
            .borrow_mut()
            .push(format!("{operation}:{argument}"));
        match self.failure.borrow().as_ref() {
            Some((failing, Failure::Transport(message))) if *failing == operation => {
                Some(Err(anyhow::anyhow!(*message)))
            }
            Some((failing, Failure::Backend(error))) if *failing == operation => {
                Some(Ok(Envelope::err(error.clone())))
            }
            _ => None,
        }
    }
}

impl CatalogApi for MockCatalogApi {
    fn create_component(&self, component: &Component) -> Result<Envelope<Component>> {
        if let Some(result) = self.record("create_component", &component.name) {
            return result;
        }
        self.next_id.set(self.next_id.get() + 1);
        let mut created = component.clone();
        created.id = format!("new-{}", self.next_id.get());
        self.attached.borrow_mut().push(created.clone());
        Ok(Envelope::ok(created))
    }

    fn apply_component(&self, component: &Component) -> Result<Envelope<Component>> {
        if let Some(result) = self.record("apply_component", &component.id) {
            return result;
        }
        Ok(Envelope::ok(component.clone()))
    }

    fn archive_component(&self, component_id: &str) -> Result<Envelope<Component>> {
        if let Some(result) = self.record("archive_component", component_id) {
            return result;
        }
        Ok(Envelope::ok(Component {
            id: component_id.to_string(),
            project_status: Some(ProjectStatus::Archived),
            ..Default::default()
        }))
    }

    fn components_for_listing(
        &self,
        listing_id: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Envelope<Page<Component>>> {
        if let Some(result) = self.record("components_for_listing", listing_id) {
            return result;
        }
        let attached = self.attached.borrow();
        let items = attached
            .iter()
            .skip(page * page_size)
            .take(page_size)
            .cloned()
            .collect();
        Ok(Envelope::ok(Page {
            items,
            total: attached.len(),
        }))
    }

    fn listing_by_id(&self, listing_id: &str) -> Result<Envelope<ProductListing>> {
        if let Some(result) = self.record("listing_by_id", listing_id) {
            return result;
        }
        let mut listing = self.listing.borrow().clone();
        listing.id = listing_id.to_string();
        Ok(Envelope::ok(listing))
    }

    fn create_listing(&self, listing: &ProductListing) -> Result<Envelope<ProductListing>> {
        if let Some(result) = self.record("create_listing", &listing.name) {
            return result;
        }
        let mut created = listing.clone();
        created.id = "created-listing".to_string();
        created.org_id = 1;
        Ok(Envelope::ok(created))
    }

    fn apply_listing(&self, listing: &ProductListing) -> Result<Envelope<ProductListing>> {
        if let Some(result) = self.record("apply_listing", &listing.id) {
            return result;
        }
        let mut applied = listing.clone();
        applied.org_id = 1;
        Ok(Envelope::ok(applied))
    }

    fn set_components_for_listing(
        &self,
        listing_id: &str,
        component_ids: &[String],
    ) -> Result<Envelope<ProductListing>> {
        let argument = format!("{listing_id}:[{}]", component_ids.join(","));
        if let Some(result) = self.record("set_components_for_listing", &argument) {
            return result;
        }
        let mut listing = self.listing.borrow().clone();
        listing.id = listing_id.to_string();
        listing.cert_projects = component_ids.to_vec();
        listing.last_update_date = Some(chrono::Utc::now());
        Ok(Envelope::ok(listing))
    }

    fn delete_listing(&self, listing_id: &str) -> Result<Envelope<ProductListing>> {
        if let Some(result) = self.record("delete_listing", listing_id) {
            return result;
        }
        Ok(Envelope::ok(ProductListing {
            id: listing_id.to_string(),
            ..Default::default()
        }))
    }
}

pub(crate) fn component(id: &str, name: &str) -> Component {
    Component {
        id: id.to_string(),
        name: name.to_string(),
        ..Default::default()
    }
}
