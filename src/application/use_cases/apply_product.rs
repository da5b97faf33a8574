use super::attached_components::fetch_attached_components;
use crate::catalog::domain::{Component, ProductListing, ProductListingDeclaration, ProjectStatus};
use crate::ports::outbound::CatalogApi;
use crate::shared::error::ProductctlError;
use crate::shared::Result;
use anyhow::Context;

/// ApplyProductUseCase - creates or updates a listing and its components
///
/// The declaration is the source of truth for what should exist. A listing
/// without an ID is created, one with an ID is updated; the same rule applies
/// to each component. After the mutations the declaration is rebuilt from the
/// backend so that IDs and server-managed fields are written back to disk.
///
/// Mutations are not rolled back: a failure part-way through leaves the
/// remote state partially applied and the error names the failing step.
pub struct ApplyProductUseCase<C> {
    catalog_api: C,
}

impl<C: CatalogApi> ApplyProductUseCase<C> {
    pub fn new(catalog_api: C) -> Self {
        Self { catalog_api }
    }

    /// Applies `declaration` and returns it refreshed from the backend.
    ///
    /// # Errors
    /// - `MissingName` before any request when the listing has no name
    /// - `DetachingComponents` when emptying an existing listing fails
    /// - the transport or backend error of whichever mutation failed
    pub fn execute(
        &self,
        mut declaration: ProductListingDeclaration,
    ) -> Result<ProductListingDeclaration> {
        let update_listing = declaration.spec.has_id();
        if !declaration.spec.has_name() {
            return Err(ProductctlError::MissingName.into());
        }
        let operation = if update_listing { "update" } else { "create" };

        if update_listing && !declaration.has_components() {
            tracing::info!(
                operation,
                "declaration enumerated no components, detaching all components from product"
            );
            self.detach_all_components(&mut declaration.spec)?;
        }

        let (existing, new): (Vec<Component>, Vec<Component>) = declaration
            .with
            .components
            .drain(..)
            .partition(Component::has_id);

        let mut associated_ids: Vec<String> = existing.iter().map(|c| c.id.clone()).collect();

        for component in new {
            associated_ids.push(self.create_component(component)?);
        }

        for component in &existing {
            tracing::debug!(operation, component_id = %component.id, name = %component.name, "applying pre-existing component");
            self.catalog_api
                .apply_component(component)?
                .check()
                .with_context(|| format!("unable to apply component {}", component.id))?;
        }

        declaration.spec.cert_projects = associated_ids;
        tracing::debug!(operation, components = ?declaration.spec.cert_projects, "components associated");

        let listing = self.upsert_listing(&declaration.spec, update_listing)?;

        tracing::debug!(listing_id = %listing.id, "retrieving updated data for associated components");
        declaration.with.components = fetch_attached_components(&self.catalog_api, &listing.id)?;
        declaration.spec = listing;

        Ok(declaration)
    }

    fn detach_all_components(&self, spec: &mut ProductListing) -> Result<()> {
        let detached = self
            .catalog_api
            .set_components_for_listing(&spec.id, &[])
            .and_then(|envelope| envelope.into_data("set components for product listing"))
            .map_err(|source| ProductctlError::DetachingComponents { source })?;

        spec.last_update_date = detached.last_update_date;
        spec.cert_projects = detached.cert_projects;
        Ok(())
    }

    /// Creates a component and returns its new ID.
    fn create_component(&self, mut component: Component) -> Result<String> {
        // The backend rejects new components without a status.
        if component.project_status.is_none() {
            component.project_status = Some(ProjectStatus::Active);
        }
        tracing::debug!(name = %component.name, "creating new component in backend");

        let created = self
            .catalog_api
            .create_component(&component)?
            .into_data("create certification project")
            .with_context(|| format!("unable to create component {}", component.name))?;
        Ok(created.id)
    }

    fn upsert_listing(&self, listing: &ProductListing, update_listing: bool) -> Result<ProductListing> {
        if update_listing {
            tracing::debug!(listing_id = %listing.id, "applying product listing");
            self.catalog_api
                .apply_listing(listing)?
                .into_data("update product listing")
                .with_context(|| format!("unable to update product listing {}", listing.id))
        } else {
            tracing::debug!(name = %listing.name, "creating product listing");
            self.catalog_api
                .create_listing(listing)?
                .into_data("create product listing")
                .with_context(|| format!("unable to create product listing {}", listing.name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{component, Failure, MockCatalogApi};
    use crate::shared::error::ResponseError;

    fn declaration(id: &str, components: Vec<Component>) -> ProductListingDeclaration {
        let mut declaration = ProductListingDeclaration::template();
        declaration.spec.id = id.to_string();
        declaration.with.components = components;
        declaration
    }

    #[test]
    fn test_missing_name_fails_before_any_request() {
        let api = MockCatalogApi::new();
        let mut input = declaration("", vec![component("", "new")]);
        input.spec.name.clear();

        let err = ApplyProductUseCase::new(&api).execute(input).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ProductctlError>(),
            Some(ProductctlError::MissingName)
        ));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_missing_name_checked_in_update_mode() {
        let api = MockCatalogApi::new();
        let mut input = declaration("listing-1", vec![]);
        input.spec.name.clear();

        assert!(ApplyProductUseCase::new(&api).execute(input).is_err());
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_create_mode_without_listing_id() {
        let api = MockCatalogApi::new();
        let input = declaration("", vec![component("", "web"), component("", "db")]);

        let applied = ApplyProductUseCase::new(&api).execute(input).unwrap();

        assert_eq!(
            api.operations(),
            vec![
                "create_component",
                "create_component",
                "create_listing",
                "components_for_listing",
            ]
        );
        assert_eq!(applied.spec.id, "created-listing");
        assert_eq!(applied.spec.cert_projects, vec!["new-1", "new-2"]);
        let ids: Vec<_> = applied.with.components.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["new-1", "new-2"]);
    }

    #[test]
    fn test_new_components_default_to_active() {
        let api = MockCatalogApi::new();
        let mut archived = component("", "old");
        archived.project_status = Some(ProjectStatus::Archived);
        let input = declaration("", vec![component("", "web"), archived]);

        let applied = ApplyProductUseCase::new(&api).execute(input).unwrap();

        assert_eq!(
            applied.with.components[0].project_status,
            Some(ProjectStatus::Active)
        );
        assert_eq!(
            applied.with.components[1].project_status,
            Some(ProjectStatus::Archived)
        );
    }

    #[test]
    fn test_update_mode_applies_existing_and_creates_new() {
        let api = MockCatalogApi::new().with_attached(vec![component("existing", "api")]);
        let input = declaration(
            "listing-1",
            vec![component("", "web"), component("existing", "api")],
        );

        let applied = ApplyProductUseCase::new(&api).execute(input).unwrap();

        assert_eq!(
            api.calls(),
            vec![
                "create_component:web",
                "apply_component:existing",
                "apply_listing:listing-1",
                "components_for_listing:listing-1",
            ]
        );
        // existing IDs come first, then newly created ones
        assert_eq!(applied.spec.cert_projects, vec!["existing", "new-1"]);
        assert_eq!(applied.spec.org_id, 1);
        assert_eq!(applied.with.components.len(), 2);
    }

    #[test]
    fn test_update_with_no_components_detaches_first() {
        let api = MockCatalogApi::new();
        let input = declaration("listing-1", vec![]);

        let applied = ApplyProductUseCase::new(&api).execute(input).unwrap();

        assert_eq!(
            api.calls(),
            vec![
                "set_components_for_listing:listing-1:[]",
                "apply_listing:listing-1",
                "components_for_listing:listing-1",
            ]
        );
        assert!(applied.spec.cert_projects.is_empty());
        assert!(applied.with.components.is_empty());
    }

    #[test]
    fn test_create_with_no_components_does_not_detach() {
        let api = MockCatalogApi::new();

        ApplyProductUseCase::new(&api)
            .execute(declaration("", vec![]))
            .unwrap();

        assert_eq!(api.operations(), vec!["create_listing", "components_for_listing"]);
    }

    #[test]
    fn test_detach_failure_is_wrapped() {
        let api = MockCatalogApi::new().failing_on(
            "set_components_for_listing",
            Failure::Backend(ResponseError::new(400, "bad request")),
        );

        let err = ApplyProductUseCase::new(&api)
            .execute(declaration("listing-1", vec![]))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ProductctlError>(),
            Some(ProductctlError::DetachingComponents { .. })
        ));
        assert!(err.chain().any(|cause| cause.to_string().contains("bad request")));
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn test_create_component_backend_error_stops_everything() {
        let api = MockCatalogApi::new().failing_on(
            "create_component",
            Failure::Backend(ResponseError::new(409, "duplicate name")),
        );
        let input = declaration("", vec![component("", "web"), component("", "db")]);

        let err = ApplyProductUseCase::new(&api).execute(input).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ProductctlError>(),
            Some(ProductctlError::Backend(ResponseError { status: 409, .. }))
        ));
        assert_eq!(api.calls(), vec!["create_component:web"]);
    }

    #[test]
    fn test_transport_error_on_listing_propagates() {
        let api = MockCatalogApi::new()
            .failing_on("apply_listing", Failure::Transport("connection refused"));
        let input = declaration("listing-1", vec![component("existing", "api")]);

        let err = ApplyProductUseCase::new(&api).execute(input).unwrap_err();

        assert_eq!(err.to_string(), "connection refused");
        assert!(!api.operations().contains(&"components_for_listing".to_string()));
    }
}
