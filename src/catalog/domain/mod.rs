pub mod component;
pub mod declaration;
pub mod inventory;
pub mod mapping;
pub mod product_listing;

pub use component::{
    Component, ComponentContact, ComponentType, ContainerComponent, ContentType,
    HelmChartComponent, ProjectStatus,
};
pub use declaration::{Inclusions, ProductListingDeclaration, KIND_PRODUCT_LISTING};
pub use inventory::{
    ContainerHostVars, HelmChartHostVars, HostGroup, Inventory, OperatorHostVars, ProductMeta,
};
pub use mapping::{
    ContainerCertTarget, ContainerTag, HelmCertTarget, MappingDeclaration, OperatorCertTarget,
    OperatorTag, ToolFlags,
};
pub use product_listing::ProductListing;
