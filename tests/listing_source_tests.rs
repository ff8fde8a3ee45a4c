// tests/listing_source_tests.rs
// The list loader driven by real HTTP listing pages

mod common;

use bullwork_finder::web_app::api::Session;
use bullwork_finder::web_app::loader::{fetch_page, load_more, ListState, LoadOutcome};
use bullwork_finder::web_app::model::*;
use common::*;

#[actix_web::test]
async fn test_walk_public_listing_to_the_end() -> anyhow::Result<()> {
    let service = spawn_fake_service().await?;
    let client = service.client();
    let listing = client.listing(ListScope::All, Session::anonymous());
    let mut state = ListState::new();

    let mut outcomes = Vec::new();
    while state.has_more() {
        outcomes.push(load_more(&listing, &mut state, 3).await?);
    }

    assert_eq!(
        outcomes,
        vec![
            LoadOutcome::Appended(3),
            LoadOutcome::Appended(3),
            LoadOutcome::Appended(1)
        ]
    );
    assert_eq!(state.len(), 7);
    assert_eq!(state.total(), 7);
    assert_eq!(load_more(&listing, &mut state, 3).await?, LoadOutcome::Skipped);

    Ok(())
}

#[actix_web::test]
async fn test_filter_view_over_loaded_pages() -> anyhow::Result<()> {
    let service = spawn_fake_service().await?;
    let client = service.client();
    let listing = client.listing(ListScope::All, Session::anonymous());
    let mut state = ListState::new();

    load_more(&listing, &mut state, 3).await?;
    load_more(&listing, &mut state, 3).await?;

    // Items 1..=6 are loaded; "Blue Umbrella" and "Water Bottle" (blue lid) match
    let blue: Vec<&str> = state
        .filter_view("blue", TypeFilter::All)
        .iter()
        .map(|i| i.item_name.as_str())
        .collect();
    assert_eq!(blue, vec!["Blue Umbrella", "Water Bottle"]);

    let lost = state.filter_view("", TypeFilter::Lost);
    assert_eq!(lost.len(), 3);
    assert!(state.filter_view("headphones", TypeFilter::All).is_empty());

    Ok(())
}

#[actix_web::test]
async fn test_overlapping_pages_are_deduplicated() -> anyhow::Result<()> {
    let service = spawn_fake_service().await?;
    let client = service.client();
    let listing = client.listing(ListScope::All, Session::anonymous());

    let first = fetch_page(&listing, 0, 4).await?;
    let overlap = fetch_page(&listing, 2, 4).await?;

    let state = ListState::new().append_page(0, first).append_page(2, overlap);
    let ids: Vec<&str> = state.items().iter().map(|i| i.id.0.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    assert!(state.has_more());

    Ok(())
}

#[actix_web::test]
async fn test_your_items_listing() -> anyhow::Result<()> {
    let service = spawn_fake_service().await?;
    let client = service.client();

    let anonymous = client.listing(ListScope::Mine, Session::anonymous());
    let mut state = ListState::new();
    let err = load_more(&anonymous, &mut state, 3).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(state.is_empty());
    assert!(state.has_more());
    assert!(!state.is_loading());

    let mine = client.listing(ListScope::Mine, logged_in());
    assert_eq!(load_more(&mine, &mut state, 3).await?, LoadOutcome::Appended(2));
    assert!(!state.has_more());

    Ok(())
}

#[actix_web::test]
async fn test_zero_take_is_rejected_before_any_request() -> anyhow::Result<()> {
    // Nothing listens on the discard port, so an attempted request would fail differently
    let client = bullwork_finder::web_app::api::ApiClient::new(
        bullwork_finder::web_app::config::Settings {
            api_base_url: "http://127.0.0.1:9/api".to_string(),
            ..Default::default()
        },
    )?;
    let listing = client.listing(ListScope::All, Session::anonymous());

    let err = fetch_page(&listing, 0, 0).await.unwrap_err();
    assert!(matches!(
        err,
        bullwork_finder::web_app::error::FinderError::InvalidRequest(_)
    ));

    Ok(())
}
