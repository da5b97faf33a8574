//! GraphQL documents sent to the catalog API.
//!
//! Every operation selects `data` and `error { status detail }`; the paged
//! component query also selects `total`.

const COMPONENT_FIELDS: &str = r#"
    _id
    certification_date
    certification_level
    certification_status
    contacts { email_address type }
    container {
      application_categories
      build_categories
      distribution_method
      isv_pid
      os_content_type
      privileged
      registry
      repository
      repository_description
      repository_name
      release_categories
      short_description
      support_platforms
      type
      github_usernames
      hosted_registry
    }
    creation_date
    helm_chart {
      application_categories
      chart_name
      repository
      short_description
      long_description
      github_usernames
      distribution_method
    }
    last_update_date
    name
    operator_distribution
    org_id
    project_status
    published_by
    badges
    type
"#;

const LISTING_FIELDS: &str = r#"
    _id
    name
    org_id
    type
    creation_date
    last_update_date
    cert_projects
    contacts { email_address type }
    descriptions { long short }
    support { url description email_address phone_number }
    legal { license_agreement_url privacy_policy_url }
    linked_resources { title description type url }
    faqs { question answer }
    search_aliases { key value }
    functional_categories
    quick_start_configuration { instructions }
    features { title description }
"#;

fn document(operation: &str, signature: &str, call: &str, fields: &str, paged: bool) -> String {
    let total = if paged { "\n    total" } else { "" };
    format!(
        "{operation} {signature} {{\n  {call} {{\n    data {{{fields}    }}\n    error {{ status detail }}{total}\n  }}\n}}\n"
    )
}

pub fn create_component() -> String {
    document(
        "mutation",
        "CreateComponent($input: CertificationProjectInput!)",
        "create_certification_project(input: $input)",
        COMPONENT_FIELDS,
        false,
    )
}

pub fn update_component() -> String {
    document(
        "mutation",
        "UpdateComponent($id: ObjectIDFilterScalar!, $input: CertificationProjectInput!)",
        "update_certification_project(id: $id, input: $input)",
        COMPONENT_FIELDS,
        false,
    )
}

pub fn components_for_listing() -> String {
    document(
        "query",
        "ComponentsForListing($id: ObjectIDFilterScalar!, $page: Int!, $page_size: Int!)",
        "find_product_listing_certification_projects(id: $id, page: $page, page_size: $page_size, filter: { project_status: { eq: \"active\" } })",
        COMPONENT_FIELDS,
        true,
    )
}

pub fn get_listing() -> String {
    document(
        "query",
        "ProductByID($id: ObjectIDFilterScalar!)",
        "get_product_listing(id: $id)",
        LISTING_FIELDS,
        false,
    )
}

pub fn create_listing() -> String {
    document(
        "mutation",
        "CreateProductListing($input: ProductListingInput!)",
        "create_product_listing(input: $input)",
        LISTING_FIELDS,
        false,
    )
}

pub fn update_listing() -> String {
    document(
        "mutation",
        "UpdateProductListing($id: ObjectIDFilterScalar!, $input: ProductListingInput!)",
        "update_product_listing(id: $id, input: $input)",
        LISTING_FIELDS,
        false,
    )
}
