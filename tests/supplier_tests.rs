//! Integration tests for the supplier service: keyed lookups, nested
//! children and the derived search operations.

use fusion_mock::prelude::*;

fn client() -> MockClient {
    MockClient::open(format!("{}/testdata/db.json", env!("CARGO_MANIFEST_DIR"))).unwrap()
}

#[tokio::test]
async fn test_get_by_id_with_children() {
    let supplier = client().suppliers().get_by_id(1001).await.unwrap();
    assert_eq!(supplier.supplier, "ABC Office Supplies Inc");
    assert_eq!(supplier.supplier_number.as_deref(), Some("SUP-1001"));
    assert_eq!(supplier.sites.len(), 2);
    assert_eq!(supplier.contacts.len(), 2);
}

#[tokio::test]
async fn test_sites_and_contacts_accessors() {
    let client = client();

    let sites = client.suppliers().get_sites(1001).await.unwrap();
    assert!(sites.iter().any(|site| site.supplier_site == "ABC-HQ" && site.pay_site_flag));

    let contacts = client.suppliers().get_contacts(1001).await.unwrap();
    let primary = contacts.iter().find(|c| c.primary_contact_flag).unwrap();
    assert_eq!(primary.contact_name.as_deref(), Some("Dana Reyes"));

    // A supplier with no children yields empty lists, not errors.
    assert!(client.suppliers().get_sites(1003).await.unwrap().is_empty());
    assert!(client.suppliers().get_contacts(1003).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_by_name_is_case_insensitive_prefix() {
    let client = client();

    let matched = client
        .suppliers()
        .search_by_name("abc office", ListParams::default())
        .await
        .unwrap();
    assert_eq!(matched.count, 1);
    assert_eq!(matched.items[0].supplier_id, 1001);

    // Prefix semantics: a mid-name fragment does not match.
    let fragment = client
        .suppliers()
        .search_by_name("office", ListParams::default())
        .await
        .unwrap();
    assert_eq!(fragment.count, 0);
}

#[tokio::test]
async fn test_search_by_number() {
    let supplier = client().suppliers().search_by_number("SUP-1002").await.unwrap();
    assert_eq!(supplier.supplier, "TechParts Ltd");

    let err = client().suppliers().search_by_number("SUP-0000").await.unwrap_err();
    assert!(matches!(err, MockError::EntityNotFound { .. }));
}

#[tokio::test]
async fn test_active_suppliers() {
    let active = client().suppliers().get_active_suppliers(ListParams::default()).await.unwrap();
    assert_eq!(active.count, 2);
    assert!(active.items.iter().all(|s| s.status_code.as_deref() == Some("ACTIVE")));
}

#[tokio::test]
async fn test_get_supplier_by_site() {
    let owner = client().suppliers().get_supplier_by_site(5003).await.unwrap();
    assert_eq!(owner.supplier_id, 1002);

    let err = client().suppliers().get_supplier_by_site(99999).await.unwrap_err();
    match err {
        MockError::EntityNotFound { entity_type, id } => {
            assert_eq!(entity_type, "supplierSites");
            assert_eq!(id, "99999");
        }
        other => panic!("expected EntityNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_supplier_id() {
    let err = client().suppliers().get_by_id(999999999).await.unwrap_err();
    assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");
    assert!(err.to_string().contains("999999999"));
}
