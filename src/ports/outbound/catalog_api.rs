use crate::catalog::domain::{Component, ProductListing};
use crate::shared::error::{ProductctlError, ResponseError};
use crate::shared::Result;

/// Application-level response from the catalog: a payload or a structured
/// error. Transport failures never produce an envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub error: Option<ResponseError>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: ResponseError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    /// Unwraps the payload, turning a backend error into `ProductctlError::Backend`.
    ///
    /// `operation` names the call in the error raised for an envelope that
    /// carries neither field.
    pub fn into_data(self, operation: &str) -> Result<T> {
        if let Some(error) = self.error {
            return Err(ProductctlError::Backend(error).into());
        }
        self.data.ok_or_else(|| {
            ProductctlError::EmptyResponse {
                operation: operation.to_string(),
            }
            .into()
        })
    }

    /// Like `into_data`, for mutations whose payload the caller ignores.
    pub fn check(self) -> Result<()> {
        match self.error {
            Some(error) => Err(ProductctlError::Backend(error).into()),
            None => Ok(()),
        }
    }
}

/// One page of a paginated query and the total item count on the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// CatalogApi port for the remote catalog backend
///
/// Every call is a single blocking request. The outer `Result` carries
/// transport failures (connection, TLS, timeout, malformed response); the
/// `Envelope` carries the backend's own answer.
pub trait CatalogApi {
    /// Creates a certification project. `component.id` must be empty.
    fn create_component(&self, component: &Component) -> Result<Envelope<Component>>;

    /// Replaces the remote fields of the component identified by `component.id`.
    fn apply_component(&self, component: &Component) -> Result<Envelope<Component>>;

    /// Sets the component's project status to archived.
    fn archive_component(&self, component_id: &str) -> Result<Envelope<Component>>;

    /// Lists the active components attached to a listing, one page at a time.
    fn components_for_listing(
        &self,
        listing_id: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Envelope<Page<Component>>>;

    fn listing_by_id(&self, listing_id: &str) -> Result<Envelope<ProductListing>>;

    fn create_listing(&self, listing: &ProductListing) -> Result<Envelope<ProductListing>>;

    /// Replaces the remote fields of the listing identified by `listing.id`.
    fn apply_listing(&self, listing: &ProductListing) -> Result<Envelope<ProductListing>>;

    /// Overwrites the listing's attached component IDs.
    fn set_components_for_listing(
        &self,
        listing_id: &str,
        component_ids: &[String],
    ) -> Result<Envelope<ProductListing>>;

    fn delete_listing(&self, listing_id: &str) -> Result<Envelope<ProductListing>>;
}

impl<T: CatalogApi + ?Sized> CatalogApi for &T {
    fn create_component(&self, component: &Component) -> Result<Envelope<Component>> {
        (**self).create_component(component)
    }

    fn apply_component(&self, component: &Component) -> Result<Envelope<Component>> {
        (**self).apply_component(component)
    }

    fn archive_component(&self, component_id: &str) -> Result<Envelope<Component>> {
        (**self).archive_component(component_id)
    }

    fn components_for_listing(
        &self,
        listing_id: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Envelope<Page<Component>>> {
        (**self).components_for_listing(listing_id, page, page_size)
    }

    fn listing_by_id(&self, listing_id: &str) -> Result<Envelope<ProductListing>> {
        (**self).listing_by_id(listing_id)
    }

    fn create_listing(&self, listing: &ProductListing) -> Result<Envelope<ProductListing>> {
        (**self).create_listing(listing)
    }

    fn apply_listing(&self, listing: &ProductListing) -> Result<Envelope<ProductListing>> {
        (**self).apply_listing(listing)
    }

    fn set_components_for_listing(
        &self,
        listing_id: &str,
        component_ids: &[String],
    ) -> Result<Envelope<ProductListing>> {
        (**self).set_components_for_listing(listing_id, component_ids)
    }

    fn delete_listing(&self, listing_id: &str) -> Result<Envelope<ProductListing>> {
        (**self).delete_listing(listing_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_data_returns_payload() {
        let envelope = Envelope::ok(7);
        assert_eq!(envelope.into_data("get").unwrap(), 7);
    }

    #[test]
    fn test_into_data_converts_backend_error() {
        let envelope: Envelope<u8> = Envelope::err(ResponseError::new(403, "forbidden"));
        let err = envelope.into_data("get").unwrap_err();
        assert_eq!(
            err.to_string(),
            "error sending request with status \"403\" and detail \"forbidden\""
        );
        assert!(matches!(
            err.downcast_ref::<ProductctlError>(),
            Some(ProductctlError::Backend(ResponseError { status: 403, .. }))
        ));
    }

    #[test]
    fn test_into_data_without_payload() {
        let envelope: Envelope<u8> = Envelope {
            data: None,
            error: None,
        };
        let err = envelope.into_data("get product listing").unwrap_err();
        assert!(err.to_string().contains("get product listing"));
    }

    #[test]
    fn test_check_ignores_missing_payload() {
        let envelope: Envelope<u8> = Envelope {
            data: None,
            error: None,
        };
        assert!(envelope.check().is_ok());
        assert!(Envelope::<u8>::err(ResponseError::new(500, "x"))
            .check()
            .is_err());
    }
}
