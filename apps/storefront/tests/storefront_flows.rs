use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use petshop_catalog::{
    CatalogError, CatalogResult, InventoryRepository, MemoryCatalog, ProductCatalog,
};
use petshop_core::{CatalogEntry, Category, CheckoutForm, EntryDraft, Money};
use petshop_storefront::commands::{
    cart, AdminDashboard, CheckoutSession, HomeView, ProductDetailView,
};
use petshop_storefront::context::AppContext;
use petshop_storefront::error::ErrorCode;
use petshop_storefront::services::{NoticeLog, Route, RouteLog, Severity};
use petshop_storefront::state::StorefrontConfig;

struct TestEnv {
    ctx: AppContext,
    notices: Arc<NoticeLog>,
    routes: Arc<RouteLog>,
}

impl TestEnv {
    fn demo() -> Self {
        let catalog = Arc::new(MemoryCatalog::demo().expect("demo catalog"));
        Self::with_sources(catalog.clone(), catalog)
    }

    fn with_sources(
        catalog: Arc<dyn ProductCatalog>,
        inventory: Arc<dyn InventoryRepository>,
    ) -> Self {
        let notices = Arc::new(NoticeLog::new());
        let routes = Arc::new(RouteLog::new());
        let ctx = AppContext::new(
            StorefrontConfig::default(),
            catalog,
            inventory,
            notices.clone(),
            routes.clone(),
        );
        Self {
            ctx,
            notices,
            routes,
        }
    }
}

fn customer() -> CheckoutForm {
    CheckoutForm {
        name: "Grace".to_string(),
        email: String::new(),
        phone: "987654321".to_string(),
        address: "7 Harbour Road".to_string(),
    }
}

/// Catalog backend that is down.
struct OfflineCatalog;

#[async_trait]
impl ProductCatalog for OfflineCatalog {
    async fn list_products(&self) -> CatalogResult<Vec<CatalogEntry>> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }

    async fn get_product(&self, _id: i64) -> CatalogResult<CatalogEntry> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }
}

#[async_trait]
impl InventoryRepository for OfflineCatalog {
    async fn list_entries(&self) -> CatalogResult<Vec<CatalogEntry>> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }

    async fn insert_entry(&self, _draft: &EntryDraft) -> CatalogResult<CatalogEntry> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }

    async fn update_entry(&self, _id: i64, _draft: &EntryDraft) -> CatalogResult<CatalogEntry> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }

    async fn delete_entry(&self, _id: i64) -> CatalogResult<()> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_browse_search_add_and_check_out() {
    let env = TestEnv::demo();
    let mut navbar = env.ctx.cart.subscribe();

    let mut home = HomeView::new(env.ctx.clone());
    home.load().await.unwrap();

    home.set_search("d");
    tokio::time::sleep(Duration::from_millis(100)).await;
    home.set_search("do");
    tokio::time::sleep(Duration::from_millis(100)).await;
    home.set_search("dog");
    assert_eq!(home.visible().len(), 8);

    home.settled().await;
    let ids: Vec<i64> = home.visible().iter().map(|p| p.id).collect();
    assert_eq!(ids, [2, 8]);

    home.add_to_cart(2).await.unwrap();
    home.add_to_cart(8).await.unwrap();
    home.add_to_cart(2).await.unwrap();

    assert!(navbar.has_changed().unwrap());
    let summary = navbar.borrow_and_update().summary();
    assert_eq!(summary.line_count, 2);
    assert_eq!(summary.total_item_count, 3);
    assert_eq!(summary.total_price, Money::from_cents(999 * 2 + 5900));

    cart::go_to_checkout(&env.ctx);
    let instant = match env.routes.current() {
        Some(Route::Checkout { instant }) => instant,
        other => panic!("expected checkout route, got {:?}", other),
    };
    let mut checkout = CheckoutSession::from_route(env.ctx.clone(), instant);
    checkout.submit(customer()).unwrap();
    let receipt = checkout.confirm().unwrap();

    assert_eq!(receipt.total, Money::from_cents(7898));
    assert!(env.ctx.cart.snapshot().is_empty());
    assert_eq!(env.routes.current(), Some(Route::ThankYou));
    assert!(navbar.has_changed().unwrap());
}

#[tokio::test]
async fn test_buy_now_does_not_touch_cart() {
    let env = TestEnv::demo();
    env.ctx.cart.add_item(&env.ctx.catalog.get_product(4).await.unwrap());
    let mut navbar = env.ctx.cart.subscribe();

    let detail = ProductDetailView::load(env.ctx.clone(), 6).await.unwrap();
    let item = detail.buy_now();

    let mut checkout = CheckoutSession::instant(env.ctx.clone(), item);
    assert!(checkout.is_instant());
    assert_eq!(checkout.total(), Money::from_cents(7990));

    checkout.submit(customer()).unwrap();
    checkout.confirm().unwrap();

    assert_eq!(env.ctx.cart.snapshot().line_count(), 1);
    assert!(!navbar.has_changed().unwrap());
}

#[tokio::test]
async fn test_cart_page_policies() {
    let env = TestEnv::demo();
    cart::add_to_cart(&env.ctx, 1).await.unwrap();

    // Decrement never removes
    for _ in 0..3 {
        cart::decrease_quantity(&env.ctx, 1);
    }
    assert_eq!(cart::get_cart(&env.ctx).items[0].quantity, 1);

    cart::remove_from_cart(&env.ctx, 1);
    env.notices.take();

    // Gone: inc/dec/remove are silent no-ops
    let after = cart::increase_quantity(&env.ctx, 1);
    assert!(after.items.is_empty());
    cart::decrease_quantity(&env.ctx, 1);
    cart::remove_from_cart(&env.ctx, 1);
    assert!(env.notices.take().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_admin_crud_round() {
    let env = TestEnv::demo();
    let mut admin = AdminDashboard::new(env.ctx.clone());
    admin.load().await.unwrap();

    admin.open_new();
    *admin.draft_mut().unwrap() = EntryDraft {
        id: None,
        title: "Siamese Cat".to_string(),
        price: Money::from_cents(45000),
        image: "siamese.png".to_string(),
        category: Some(Category::Cat),
    };
    let saved = admin.save().await.unwrap();

    admin.set_category(Category::Cat);
    admin.set_search("siam");
    admin.settled().await;
    let table = admin.table();
    assert_eq!(table.total_items, 1);
    assert_eq!(table.items[0].id, saved.id);

    admin.request_delete(saved.id).unwrap();
    admin.confirm_delete().await.unwrap();
    assert_eq!(admin.table().total_items, 0);

    let kinds: Vec<Severity> = env.notices.take().into_iter().map(|n| n.severity).collect();
    assert_eq!(kinds, [Severity::Success, Severity::Info]);

    // The storefront sees the same records
    let mut home = HomeView::new(env.ctx.clone());
    assert_eq!(home.load().await.unwrap(), 8);
}

#[tokio::test]
async fn test_catalog_outage_is_surfaced() {
    let offline = Arc::new(OfflineCatalog);
    let env = TestEnv::with_sources(offline.clone(), offline);

    let mut home = HomeView::new(env.ctx.clone());
    let err = home.load().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::CatalogUnavailable);
    assert!(err.message.contains("connection refused"));

    let err = cart::add_to_cart(&env.ctx, 1).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::CatalogUnavailable);
    assert!(env.ctx.cart.snapshot().is_empty());

    let mut admin = AdminDashboard::new(env.ctx.clone());
    assert_eq!(
        admin.load().await.unwrap_err().code,
        ErrorCode::CatalogUnavailable
    );
}
