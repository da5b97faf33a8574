use productctl::catalog::domain::ProjectStatus;
use productctl::prelude::*;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// In-memory CatalogApi that keeps listings and components between calls
///
/// Paging is zero-based. Components are listed in ID order and only while
/// active, like the real backend.
pub struct InMemoryCatalog {
    pub listings: RefCell<BTreeMap<String, ProductListing>>,
    pub components: RefCell<BTreeMap<String, Component>>,
    next_id: Cell<u32>,
    calls: RefCell<Vec<String>>,
    fail_on: Option<&'static str>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            listings: RefCell::new(BTreeMap::new()),
            components: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(0),
            calls: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Makes every call to `operation` return a backend error.
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.fail_on = Some(operation);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn component(&self, id: &str) -> Option<Component> {
        self.components.borrow().get(id).cloned()
    }

    pub fn listing(&self, id: &str) -> Option<ProductListing> {
        self.listings.borrow().get(id).cloned()
    }

    fn record(&self, operation: &'static str) -> Option<ResponseError> {
        self.calls.borrow_mut().push(operation.to_string());
        (self.fail_on == Some(operation))
            .then(|| ResponseError::new(500, format!("{operation} failed")))
    }

    fn next_id(&self, prefix: &str) -> String {
        self.next_id.set(self.next_id.get() + 1);
        format!("{}-{}", prefix, self.next_id.get())
    }

    fn not_found<T>(kind: &str, id: &str) -> Result<Envelope<T>> {
        Ok(Envelope::err(ResponseError::new(
            404,
            format!("{kind} {id} not found"),
        )))
    }

    fn update_listing<F: FnOnce(&mut ProductListing)>(
        &self,
        listing_id: &str,
        update: F,
    ) -> Result<Envelope<ProductListing>> {
        let mut listings = self.listings.borrow_mut();
        match listings.get_mut(listing_id) {
            Some(listing) => {
                update(listing);
                Ok(Envelope::ok(listing.clone()))
            }
            None => Self::not_found("product listing", listing_id),
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogApi for InMemoryCatalog {
    fn create_component(&self, component: &Component) -> Result<Envelope<Component>> {
        if let Some(error) = self.record("create_component") {
            return Ok(Envelope::err(error));
        }
        let mut created = component.clone();
        created.id = self.next_id("component");
        created.org_id = 1;
        self.components
            .borrow_mut()
            .insert(created.id.clone(), created.clone());
        Ok(Envelope::ok(created))
    }

    fn apply_component(&self, component: &Component) -> Result<Envelope<Component>> {
        if let Some(error) = self.record("apply_component") {
            return Ok(Envelope::err(error));
        }
        let mut components = self.components.borrow_mut();
        match components.get_mut(&component.id) {
            Some(stored) => {
                *stored = Component {
                    org_id: stored.org_id,
                    ..component.clone()
                };
                Ok(Envelope::ok(stored.clone()))
            }
            None => Self::not_found("component", &component.id),
        }
    }

    fn archive_component(&self, component_id: &str) -> Result<Envelope<Component>> {
        if let Some(error) = self.record("archive_component") {
            return Ok(Envelope::err(error));
        }
        let mut components = self.components.borrow_mut();
        match components.get_mut(component_id) {
            Some(stored) => {
                stored.project_status = Some(ProjectStatus::Archived);
                Ok(Envelope::ok(stored.clone()))
            }
            None => Self::not_found("component", component_id),
        }
    }

    fn components_for_listing(
        &self,
        listing_id: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Envelope<Page<Component>>> {
        if let Some(error) = self.record("components_for_listing") {
            return Ok(Envelope::err(error));
        }
        let Some(listing) = self.listing(listing_id) else {
            return Self::not_found("product listing", listing_id);
        };

        let components = self.components.borrow();
        let mut active: Vec<Component> = listing
            .cert_projects
            .iter()
            .filter_map(|id| components.get(id))
            .filter(|c| c.project_status == Some(ProjectStatus::Active))
            .cloned()
            .collect();
        active.sort_by(|a, b| a.id.cmp(&b.id));

        let total = active.len();
        let items = active
            .into_iter()
            .skip(page * page_size)
            .take(page_size)
            .collect();
        Ok(Envelope::ok(Page { items, total }))
    }

    fn listing_by_id(&self, listing_id: &str) -> Result<Envelope<ProductListing>> {
        if let Some(error) = self.record("listing_by_id") {
            return Ok(Envelope::err(error));
        }
        match self.listing(listing_id) {
            Some(listing) => Ok(Envelope::ok(listing)),
            None => Self::not_found("product listing", listing_id),
        }
    }

    fn create_listing(&self, listing: &ProductListing) -> Result<Envelope<ProductListing>> {
        if let Some(error) = self.record("create_listing") {
            return Ok(Envelope::err(error));
        }
        let mut created = listing.clone();
        created.id = self.next_id("listing");
        created.org_id = 1;
        self.listings
            .borrow_mut()
            .insert(created.id.clone(), created.clone());
        Ok(Envelope::ok(created))
    }

    fn apply_listing(&self, listing: &ProductListing) -> Result<Envelope<ProductListing>> {
        if let Some(error) = self.record("apply_listing") {
            return Ok(Envelope::err(error));
        }
        let replacement = listing.clone();
        self.update_listing(&listing.id, move |stored| {
            *stored = ProductListing {
                org_id: stored.org_id,
                ..replacement
            };
        })
    }

    fn set_components_for_listing(
        &self,
        listing_id: &str,
        component_ids: &[String],
    ) -> Result<Envelope<ProductListing>> {
        if let Some(error) = self.record("set_components_for_listing") {
            return Ok(Envelope::err(error));
        }
        let ids = component_ids.to_vec();
        self.update_listing(listing_id, move |stored| stored.cert_projects = ids)
    }

    fn delete_listing(&self, listing_id: &str) -> Result<Envelope<ProductListing>> {
        if let Some(error) = self.record("delete_listing") {
            return Ok(Envelope::err(error));
        }
        match self.listings.borrow_mut().remove(listing_id) {
            Some(listing) => Ok(Envelope::ok(listing)),
            None => Self::not_found("product listing", listing_id),
        }
    }
}
