// shopdesk-view/tests/filter_controller.rs
// Filter controller: debounce, page handling, URL sync, navigation

use std::time::Duration;

use shopdesk_view::filter::{ORDER_FILTERS, PRODUCT_FILTERS};
use shopdesk_view::{FilterController, FilterError, Location, MemoryLocation};
use tokio::time::sleep;

const DELAY: Duration = Duration::from_millis(500);

fn controller(url: &str) -> FilterController<MemoryLocation> {
    FilterController::new(&PRODUCT_FILTERS, MemoryLocation::new(url).unwrap(), DELAY)
}

fn query(c: &FilterController<MemoryLocation>) -> String {
    c.location().url().query().unwrap_or_default().to_string()
}

#[tokio::test(start_paused = true)]
async fn test_typing_commits_once_after_quiet_period() {
    let mut c = controller("http://admin.test/products");

    for value in ["a", "ab", "abc"] {
        c.update_filter("search", value).unwrap();
        sleep(Duration::from_millis(200)).await;
    }
    // 200ms after the last keystroke
    assert_eq!(c.committed().get("search").as_deref(), Some(""));
    assert_eq!(c.generation(), 0);

    sleep(Duration::from_millis(299)).await;
    assert_eq!(c.generation(), 0);

    sleep(Duration::from_millis(2)).await;
    assert_eq!(c.committed().get("search").as_deref(), Some("abc"));
    assert_eq!(c.generation(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_pending_and_url_follow_every_keystroke() {
    let mut c = controller("http://admin.test/products");

    c.update_filter("search", "te").unwrap();
    assert_eq!(c.pending().get("search").as_deref(), Some("te"));
    assert_eq!(query(&c), "search=te&page=1");
}

#[tokio::test(start_paused = true)]
async fn test_page_change_commits_immediately() {
    let mut c = controller("http://admin.test/products");

    c.update_filter("page", "3").unwrap();
    assert_eq!(c.committed().page(), 3);
    assert_eq!(c.generation(), 1);
    assert_eq!(query(&c), "page=3");
}

#[tokio::test(start_paused = true)]
async fn test_page_change_flushes_pending_filters() {
    let mut c = controller("http://admin.test/products");

    c.update_filter("search", "tea").unwrap();
    c.set_page(2).unwrap();

    let committed = c.committed();
    assert_eq!(committed.get("search").as_deref(), Some("tea"));
    assert_eq!(committed.page(), 2);

    // The superseded debounce never fires
    sleep(DELAY * 2).await;
    assert_eq!(c.generation(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_filter_change_resets_page() {
    let mut c = controller("http://admin.test/products?category=tea&page=4");
    assert_eq!(c.pending().page(), 4);

    c.update_filter("category", "coffee").unwrap();
    assert_eq!(c.pending().page(), 1);
    assert_eq!(query(&c), "category=coffee&page=1");

    // The reset page travels with the filter change, not ahead of it
    sleep(DELAY - Duration::from_millis(1)).await;
    assert_eq!(c.committed().page(), 4);
    assert_eq!(c.committed().get("category").as_deref(), Some("tea"));

    sleep(Duration::from_millis(2)).await;
    assert_eq!(c.committed().page(), 1);
    assert_eq!(c.committed().get("category").as_deref(), Some("coffee"));
}

#[tokio::test(start_paused = true)]
async fn test_initial_state_from_url() {
    let c = controller("http://admin.test/products?search=abc&page=2");

    assert_eq!(c.pending().get("search").as_deref(), Some("abc"));
    assert_eq!(c.pending().get("page").as_deref(), Some("2"));
    assert_eq!(c.pending().get("category").as_deref(), Some(""));
    assert_eq!(c.committed(), c.pending().clone());
}

#[tokio::test(start_paused = true)]
async fn test_url_keeps_foreign_parameters() {
    let mut c = controller("http://admin.test/products?tab=archived");

    c.update_filter("search", "x").unwrap();
    assert_eq!(query(&c), "search=x&page=1&tab=archived");
}

#[tokio::test(start_paused = true)]
async fn test_invalid_input_is_rejected() {
    let mut c = FilterController::new(
        &ORDER_FILTERS,
        MemoryLocation::new("http://admin.test/orders").unwrap(),
        DELAY,
    );

    let err = c.update_filter("category", "tea").unwrap_err();
    assert_eq!(
        err,
        FilterError::UnknownKey {
            schema: "orders",
            key: "category".to_string()
        }
    );
    assert!(matches!(
        c.update_filter("page", "0"),
        Err(FilterError::InvalidPage(_))
    ));
    assert_eq!(c.generation(), 0);
    assert_eq!(query(&c), "");
}

#[tokio::test(start_paused = true)]
async fn test_reset_clears_everything_at_once() {
    let mut c = controller("http://admin.test/products?search=tea&status=active&page=3");

    c.reset();
    assert!(c.pending().is_unfiltered());
    assert!(c.committed().is_unfiltered());
    assert_eq!(c.committed().page(), 1);
    assert_eq!(query(&c), "page=1");
}

#[tokio::test(start_paused = true)]
async fn test_back_navigation_reinitializes_state() {
    let mut c = controller("http://admin.test/products?search=tea&page=1");
    c.location_mut().push("/products?search=tea&page=2").unwrap();
    c.on_location_change();
    assert_eq!(c.committed().page(), 2);

    // Typing, then leaving before the debounce fires
    c.update_filter("search", "coffee").unwrap();
    assert!(c.location_mut().back());
    c.on_location_change();

    assert_eq!(c.pending().get("search").as_deref(), Some("tea"));
    assert_eq!(c.committed().page(), 1);

    sleep(DELAY * 2).await;
    assert_eq!(c.committed().get("search").as_deref(), Some("tea"));

    // The forward entry was rewritten in place while typing
    assert!(c.location_mut().forward());
    c.on_location_change();
    assert_eq!(c.pending().get("search").as_deref(), Some("coffee"));
    assert_eq!(c.committed(), c.pending().clone());
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_commits() {
    let mut c = controller("http://admin.test/products");
    let mut rx = c.subscribe();

    c.update_filter("search", "mug").unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().get("search").as_deref(), Some("mug"));
}
