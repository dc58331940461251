//! # Shell
//!
//! Line-oriented driver for the storefront pages. Each input line is one
//! command; the reply is plain text followed by any notices the command
//! raised.
//!
//! ```text
//! > search dog
//! >   2  Dog Chew Toy                 dog    $9.99
//! >   8  Orthopedic Dog Bed           dog    $59.00
//! > add 2
//! > [success] Added to cart: Dog Chew Toy
//! ```

use std::fmt::Write as _;
use std::sync::Arc;

use petshop_catalog::MemoryCatalog;
use petshop_core::{CatalogEntry, Category, CategoryFilter, CheckoutForm, CoreError, Money};
use tracing::debug;

use crate::commands::{
    cart, AdminDashboard, CartResponse, CheckoutSession, HomeView, ProductDetailView,
};
use crate::context::AppContext;
use crate::error::{ApiError, ApiResult};
use crate::services::{NoticeLog, Route, RouteLog, Severity};
use crate::state::StorefrontConfig;

const HELP: &str = "\
Storefront
  list                         show products
  search <term>                filter by title (debounced)
  category <all|dog|cat|bird|other>
  show <id>                    product detail
  add <id> | buy <id>          add to cart | check out this item alone
  inc <id> | dec <id> | rm <id>
  cart | clear
  checkout                     start checkout of the cart
  submit name|email|phone|address
  confirm | cancel
Admin
  admin list [page]
  admin search <term> | admin category <c>
  admin add title|price|image|category
  admin edit <id> title|price|image|category
  admin rm <id>  then  admin yes | admin no
quit";

/// Result of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Quit,
}

/// The pages behind the shell.
pub struct Shell {
    ctx: AppContext,
    notices: Arc<NoticeLog>,
    routes: Arc<RouteLog>,
    home: HomeView,
    admin: AdminDashboard,
    checkout: Option<CheckoutSession>,
}

impl Shell {
    /// A shell over one in-memory catalog, recording notices and routes.
    pub fn new(config: StorefrontConfig, catalog: Arc<MemoryCatalog>) -> Self {
        let notices = Arc::new(NoticeLog::new());
        let routes = Arc::new(RouteLog::new());
        let ctx =
            AppContext::with_memory_catalog(config, catalog, notices.clone(), routes.clone());
        Self::from_parts(ctx, notices, routes)
    }

    pub fn from_parts(ctx: AppContext, notices: Arc<NoticeLog>, routes: Arc<RouteLog>) -> Self {
        Shell {
            home: HomeView::new(ctx.clone()),
            admin: AdminDashboard::new(ctx.clone()),
            checkout: None,
            ctx,
            notices,
            routes,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Loads both pages and returns the banner.
    pub async fn start(&mut self) -> ApiResult<String> {
        let products = self.home.load().await?;
        self.admin.load().await?;
        Ok(format!(
            "{}: {} products. Type `help` for commands.",
            self.ctx.config.store_name, products
        ))
    }

    /// Runs one input line.
    pub async fn execute(&mut self, line: &str) -> Outcome {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, rest) = line.trim_start().split_once(' ').unwrap_or((line.trim(), ""));
        debug!(command, "shell command");

        if matches!(command, "quit" | "exit") {
            return Outcome::Quit;
        }

        let mut reply = match self.dispatch(command, rest).await {
            Ok(text) => text,
            Err(e) => format!("error: {}", e.message),
        };

        for notice in self.notices.take() {
            if !reply.is_empty() {
                reply.push('\n');
            }
            let _ = write!(
                reply,
                "[{}] {}: {}",
                severity_label(notice.severity),
                notice.summary,
                notice.detail
            );
        }

        Outcome::Reply(reply)
    }

    async fn dispatch(&mut self, command: &str, rest: &str) -> ApiResult<String> {
        match command {
            "" => Ok(String::new()),
            "help" => Ok(HELP.to_string()),
            "list" => Ok(self.render_entries(&self.home.visible())),
            "search" => {
                self.home.set_search(rest);
                self.home.settled().await;
                Ok(self.render_entries(&self.home.visible()))
            }
            "category" => {
                self.home.set_category(parse_filter(rest)?);
                Ok(self.render_entries(&self.home.visible()))
            }
            "show" => {
                let detail = ProductDetailView::load(self.ctx.clone(), parse_id(rest)?).await?;
                Ok(self.render_detail(detail.product()))
            }
            "add" => {
                let response = self.home.add_to_cart(parse_id(rest)?).await?;
                Ok(self.render_cart(&response))
            }
            "buy" => {
                let detail = ProductDetailView::load(self.ctx.clone(), parse_id(rest)?).await?;
                detail.buy_now();
                self.open_checkout_from_route()
            }
            "inc" => Ok(self.render_cart(&cart::increase_quantity(&self.ctx, parse_id(rest)?))),
            "dec" => Ok(self.render_cart(&cart::decrease_quantity(&self.ctx, parse_id(rest)?))),
            "rm" => Ok(self.render_cart(&cart::remove_from_cart(&self.ctx, parse_id(rest)?))),
            "cart" => Ok(self.render_cart(&cart::get_cart(&self.ctx))),
            "clear" => Ok(self.render_cart(&cart::clear_cart(&self.ctx))),
            "checkout" => {
                cart::go_to_checkout(&self.ctx);
                self.open_checkout_from_route()
            }
            "submit" => {
                let form = parse_form(rest);
                self.session()?.submit(form)?;
                Ok("Confirm the order? (confirm | cancel)".to_string())
            }
            "confirm" => {
                let receipt = self.session()?.confirm()?;
                self.checkout = None;
                Ok(format!(
                    "Order {} placed: {} line(s), total {}",
                    receipt.order_id,
                    receipt.items.len(),
                    self.ctx.price(receipt.total)
                ))
            }
            "cancel" => {
                self.session()?.cancel();
                Ok("Back to the checkout form".to_string())
            }
            "admin" => self.dispatch_admin(rest).await,
            other => Err(ApiError::validation(format!("Unknown command `{}`", other))),
        }
    }

    async fn dispatch_admin(&mut self, line: &str) -> ApiResult<String> {
        let (command, rest) = line.split_once(' ').unwrap_or((line.trim(), ""));
        match command {
            "" | "list" => {
                let page = match rest.trim() {
                    "" => 0,
                    n => n
                        .parse::<usize>()
                        .map_err(|_| ApiError::validation("Page must be a number"))?
                        .saturating_sub(1),
                };
                self.admin.set_page(page);
                Ok(self.render_table())
            }
            "search" => {
                self.admin.set_search(rest);
                self.admin.settled().await;
                self.admin.set_page(0);
                Ok(self.render_table())
            }
            "category" => {
                self.admin.set_category(parse_filter(rest)?);
                self.admin.set_page(0);
                Ok(self.render_table())
            }
            "add" => {
                self.admin.open_new();
                self.fill_draft(rest)?;
                let saved = self.admin.save().await?;
                self.home.load().await?;
                Ok(format!("Saved #{} {}", saved.id, saved.title))
            }
            "edit" => {
                let (id, fields) = rest.split_once(' ').unwrap_or((rest, ""));
                self.admin.open_edit(parse_id(id)?)?;
                self.fill_draft(fields)?;
                let saved = self.admin.save().await?;
                self.home.load().await?;
                Ok(format!("Saved #{} {}", saved.id, saved.title))
            }
            "rm" => {
                let id = parse_id(rest)?;
                self.admin.request_delete(id)?;
                Ok(format!("Delete entry {}? (admin yes | admin no)", id))
            }
            "yes" => {
                self.admin.confirm_delete().await?;
                self.home.load().await?;
                Ok(self.render_table())
            }
            "no" => {
                self.admin.cancel_delete();
                Ok("Delete cancelled".to_string())
            }
            other => Err(ApiError::validation(format!("Unknown admin command `{}`", other))),
        }
    }

    fn open_checkout_from_route(&mut self) -> ApiResult<String> {
        let instant = match self.routes.current() {
            Some(Route::Checkout { instant }) => instant,
            _ => return Err(ApiError::internal("Checkout route was not requested")),
        };
        let session = CheckoutSession::from_route(self.ctx.clone(), instant);

        let mut out = String::from("Checkout\n");
        for item in session.items() {
            let _ = writeln!(
                out,
                "  {:<28} x{:<3} {}",
                item.title,
                item.quantity,
                self.ctx.price(item.line_total())
            );
        }
        let _ = write!(out, "  Total {}", self.ctx.price(session.total()));

        self.checkout = Some(session);
        Ok(out)
    }

    fn session(&mut self) -> ApiResult<&mut CheckoutSession> {
        self.checkout
            .as_mut()
            .ok_or_else(|| ApiError::invalid_state("No checkout in progress"))
    }

    /// Overwrites the open draft with `title|price|image|category`.
    /// Empty fields keep the draft's current value.
    fn fill_draft(&mut self, fields: &str) -> ApiResult<()> {
        let parsed = parse_draft_fields(fields)?;
        let draft = self
            .admin
            .draft_mut()
            .ok_or_else(|| ApiError::invalid_state("No entry is being edited"))?;

        if let Some(title) = parsed.title {
            draft.title = title;
        }
        if let Some(price) = parsed.price {
            draft.price = price;
        }
        if let Some(image) = parsed.image {
            draft.image = image;
        }
        if parsed.category.is_some() {
            draft.category = parsed.category;
        }
        Ok(())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn render_entries(&self, entries: &[&CatalogEntry]) -> String {
        if entries.is_empty() {
            return "(no matches)".to_string();
        }
        entries
            .iter()
            .map(|e| self.render_row(e))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_row(&self, entry: &CatalogEntry) -> String {
        format!(
            "{:>3}  {:<28} {:<6} {}",
            entry.id,
            entry.title,
            entry.category,
            self.ctx.price(entry.price)
        )
    }

    fn render_detail(&self, entry: &CatalogEntry) -> String {
        let mut out = self.render_row(entry);
        if let Some(description) = &entry.description {
            let _ = write!(out, "\n     {}", description);
        }
        out
    }

    fn render_cart(&self, response: &CartResponse) -> String {
        if response.items.is_empty() {
            return "Cart is empty".to_string();
        }
        let mut out = String::new();
        for item in &response.items {
            let _ = writeln!(
                out,
                "{:>3}  {:<28} x{:<3} {}",
                item.id,
                item.title,
                item.quantity,
                self.ctx.price(item.line_total())
            );
        }
        let _ = write!(
            out,
            "     {} item(s), total {}",
            response.summary.total_item_count,
            self.ctx.price(response.summary.total_price)
        );
        out
    }

    fn render_table(&self) -> String {
        let page = self.admin.table();
        let rows: Vec<&CatalogEntry> = page.items.iter().collect();
        format!(
            "{}\npage {}/{} ({} entries)",
            self.render_entries(&rows),
            if page.total_pages == 0 { 0 } else { page.page + 1 },
            page.total_pages,
            page.total_items
        )
    }
}

// =============================================================================
// Parsing
// =============================================================================

fn parse_id(arg: &str) -> ApiResult<i64> {
    arg.trim()
        .parse()
        .map_err(|_| ApiError::validation(format!("`{}` is not an id", arg.trim())))
}

fn parse_filter(arg: &str) -> ApiResult<CategoryFilter> {
    arg.trim()
        .parse::<CategoryFilter>()
        .map_err(|e| CoreError::from(e).into())
}

fn parse_form(arg: &str) -> CheckoutForm {
    let mut fields = arg.split('|').map(str::trim);
    let mut next = || fields.next().unwrap_or_default().to_string();
    CheckoutForm {
        name: next(),
        email: next(),
        phone: next(),
        address: next(),
    }
}

#[derive(Debug, Default)]
struct DraftFields {
    title: Option<String>,
    price: Option<Money>,
    image: Option<String>,
    category: Option<Category>,
}

fn parse_draft_fields(arg: &str) -> ApiResult<DraftFields> {
    let mut parts = arg.split('|').map(str::trim);
    let mut field = || parts.next().filter(|s| !s.is_empty());

    let title = field().map(str::to_string);
    let price = match field() {
        Some(raw) => Some(
            raw.parse::<f64>()
                .ok()
                .and_then(Money::from_decimal)
                .ok_or_else(|| ApiError::validation(format!("`{}` is not a price", raw)))?,
        ),
        None => None,
    };
    let image = field().map(str::to_string);
    let category = match field() {
        Some(raw) => Some(raw.parse::<Category>().map_err(CoreError::from)?),
        None => None,
    };

    Ok(DraftFields {
        title,
        price,
        image,
        category,
    })
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "success",
        Severity::Info => "info",
        Severity::Warn => "warn",
        Severity::Error => "error",
    }
}
