//! # Admin Dashboard
//!
//! Inventory table with search, category filter, paging, an add/edit
//! dialog, and delete with confirmation.
//!
//! ## Dashboard Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Admin Dashboard                                      │
//! │                                                                         │
//! │  load() ──► inventory.list_entries()                                    │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │ [search...... ] [category ▼]                        [+ Add pet]  │  │
//! │  ├──────────────────────────────────────────────────────────────────┤  │
//! │  │  Beagle          dog    $150.00           [Edit] [Delete]        │  │
//! │  │  ...             (page_size rows)                                │  │
//! │  ├──────────────────────────────────────────────────────────────────┤  │
//! │  │  ◄ 1 / 3 ►                                                       │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  open_new / open_edit ──► EntryDraft ──► save()                         │
//! │       validate_entry_draft ── bad ──► warn notice, dialog stays open    │
//! │       insert (no id) / update (id) ──► success notice, reload           │
//! │                                                                         │
//! │  request_delete(id) ──► confirm_delete() ──► delete, info notice, reload│
//! │                    └──► cancel_delete()                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use petshop_catalog::CatalogError;
use petshop_core::validation::validate_entry_draft;
use petshop_core::{paginate, CatalogEntry, CategoryFilter, CoreError, EntryDraft, Page};
use tracing::{debug, info, warn};

use crate::context::AppContext;
use crate::error::{ApiError, ApiResult};
use crate::services::Severity;
use crate::state::ListQuery;

/// State of the admin page.
pub struct AdminDashboard {
    ctx: AppContext,
    entries: Vec<CatalogEntry>,
    query: ListQuery,
    page: usize,
    dialog: Option<EntryDraft>,
    pending_delete: Option<i64>,
}

impl AdminDashboard {
    pub fn new(ctx: AppContext) -> Self {
        let query = ListQuery::new(ctx.config.search_debounce());
        AdminDashboard {
            ctx,
            entries: Vec::new(),
            query,
            page: 0,
            dialog: None,
            pending_delete: None,
        }
    }

    /// Fetches the inventory. Returns the number of entries.
    pub async fn load(&mut self) -> ApiResult<usize> {
        debug!("admin load");
        self.entries = self.ctx.inventory.list_entries().await?;
        Ok(self.entries.len())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    // =========================================================================
    // Filtering & Paging
    // =========================================================================

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.set_search(term);
    }

    pub fn set_category(&mut self, filter: impl Into<CategoryFilter>) {
        self.query.set_category(filter);
    }

    pub async fn settled(&mut self) {
        self.query.settled().await;
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn visible(&self) -> Vec<&CatalogEntry> {
        self.query.apply(&self.entries)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// The visible rows, one page at a time.
    pub fn table(&self) -> Page<CatalogEntry> {
        let rows: Vec<CatalogEntry> = self.visible().into_iter().cloned().collect();
        paginate(&rows, self.page, self.ctx.config.page_size)
    }

    // =========================================================================
    // Add / Edit Dialog
    // =========================================================================

    /// Opens the dialog with a blank draft.
    pub fn open_new(&mut self) {
        debug!("admin open_new");
        self.dialog = Some(EntryDraft::default());
    }

    /// Opens the dialog on an existing entry.
    pub fn open_edit(&mut self, id: i64) -> ApiResult<()> {
        debug!(id, "admin open_edit");
        let entry = self
            .entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| ApiError::not_found("Inventory entry", id))?;
        self.dialog = Some(EntryDraft::from_entry(entry));
        Ok(())
    }

    pub fn draft(&self) -> Option<&EntryDraft> {
        self.dialog.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut EntryDraft> {
        self.dialog.as_mut()
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Saves the open draft: insert when it has no id, update otherwise.
    ///
    /// On success the dialog closes and the table reloads. On failure the
    /// dialog stays open with the draft as typed.
    pub async fn save(&mut self) -> ApiResult<CatalogEntry> {
        let draft = self
            .dialog
            .clone()
            .ok_or_else(|| ApiError::invalid_state("No entry is being edited"))?;

        if let Err(e) = validate_entry_draft(&draft) {
            warn!(field = e.field(), "Inventory entry rejected: {}", e);
            self.ctx
                .notify(Severity::Warn, "Please check the form", e.to_string());
            return Err(ApiError::from(CoreError::from(e)));
        }

        let written = match draft.id {
            None => self.ctx.inventory.insert_entry(&draft).await.map(|e| (e, "Pet added")),
            Some(id) => self
                .ctx
                .inventory
                .update_entry(id, &draft)
                .await
                .map(|e| (e, "Pet updated")),
        };
        let (saved, summary) = written.map_err(|e| self.write_failed("Save failed", e))?;

        info!(id = saved.id, title = %saved.title, "{}", summary);
        self.ctx
            .notify(Severity::Success, summary, saved.title.as_str());
        self.dialog = None;
        self.load().await?;
        Ok(saved)
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Asks for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: i64) -> ApiResult<()> {
        debug!(id, "admin request_delete");
        if !self.entries.iter().any(|e| e.id == id) {
            return Err(ApiError::not_found("Inventory entry", id));
        }
        self.pending_delete = Some(id);
        Ok(())
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    pub fn cancel_delete(&mut self) {
        debug!("admin cancel_delete");
        self.pending_delete = None;
    }

    /// Deletes the entry awaiting confirmation.
    pub async fn confirm_delete(&mut self) -> ApiResult<()> {
        let id = self
            .pending_delete
            .take()
            .ok_or_else(|| ApiError::invalid_state("No delete is pending"))?;

        self.ctx
            .inventory
            .delete_entry(id)
            .await
            .map_err(|e| self.write_failed("Delete failed", e))?;
        info!(id, "Pet deleted");
        self.ctx
            .notify(Severity::Info, "Pet deleted", format!("Entry {} removed", id));
        self.load().await?;
        Ok(())
    }

    /// Error notice for a rejected repository write; the dialog stays as it was.
    fn write_failed(&self, summary: &str, err: CatalogError) -> ApiError {
        let err = ApiError::from(err);
        self.ctx
            .notify(Severity::Error, summary, err.message.as_str());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::testing::TestApp;
    use petshop_core::{Category, Money};

    async fn loaded() -> (TestApp, AdminDashboard) {
        let app = TestApp::demo();
        let mut admin = AdminDashboard::new(app.ctx.clone());
        admin.load().await.unwrap();
        (app, admin)
    }

    fn beagle() -> EntryDraft {
        EntryDraft {
            id: None,
            title: "Beagle".to_string(),
            price: Money::from_cents(15000),
            image: "beagle.png".to_string(),
            category: Some(Category::Dog),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_dog_with_a() {
        let (app, mut admin) = loaded().await;
        app.ctx.inventory.insert_entry(&beagle()).await.unwrap();
        admin.load().await.unwrap();

        admin.set_category(Category::Dog);
        admin.set_search("a");
        admin.settled().await;

        // "British Shorthair Kitten" matches the term but not the category
        let titles: Vec<_> = admin.visible().into_iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Beagle"]);
    }

    #[tokio::test]
    async fn test_table_pages() {
        let (_app, mut admin) = loaded().await;

        let first = admin.table();
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.total_pages, 2);
        assert!(first.has_next());

        admin.set_page(9);
        let last = admin.table();
        assert_eq!(last.page, 1);
        assert_eq!(last.items.len(), 3);
    }

    #[tokio::test]
    async fn test_add_entry() {
        let (app, mut admin) = loaded().await;
        admin.open_new();
        *admin.draft_mut().unwrap() = beagle();

        let saved = admin.save().await.unwrap();
        assert_eq!(saved.id, 9);
        assert_eq!(admin.entries().len(), 9);
        assert!(admin.draft().is_none());

        let notice = app.notices.last().unwrap();
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.summary, "Pet added");
    }

    #[tokio::test]
    async fn test_edit_entry() {
        let (_app, mut admin) = loaded().await;
        admin.open_edit(8).unwrap();
        admin.draft_mut().unwrap().price = Money::from_cents(4900);

        let saved = admin.save().await.unwrap();
        assert_eq!(saved.id, 8);
        let row = admin.entries().iter().find(|e| e.id == 8).unwrap();
        assert_eq!(row.price, Money::from_cents(4900));
        assert_eq!(admin.entries().len(), 8);
    }

    #[tokio::test]
    async fn test_invalid_draft_keeps_dialog_open() {
        let (app, mut admin) = loaded().await;
        admin.open_new();
        admin.draft_mut().unwrap().title = "   ".to_string();

        let err = admin.save().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(admin.draft().is_some());
        assert_eq!(app.notices.last().unwrap().severity, Severity::Warn);
        assert_eq!(admin.entries().len(), 8);
    }

    #[tokio::test]
    async fn test_save_without_dialog() {
        let (_app, mut admin) = loaded().await;
        assert_eq!(admin.save().await.unwrap_err().code, ErrorCode::InvalidState);
    }

    #[tokio::test]
    async fn test_delete_confirm_and_cancel() {
        let (app, mut admin) = loaded().await;

        admin.request_delete(3).unwrap();
        admin.cancel_delete();
        assert!(admin.pending_delete().is_none());
        assert_eq!(
            admin.confirm_delete().await.unwrap_err().code,
            ErrorCode::InvalidState
        );
        assert_eq!(admin.entries().len(), 8);

        admin.request_delete(3).unwrap();
        admin.confirm_delete().await.unwrap();
        assert_eq!(admin.entries().len(), 7);
        assert_eq!(app.notices.last().unwrap().severity, Severity::Info);

        assert_eq!(admin.request_delete(3).unwrap_err().code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_failed_writes_raise_error_notice() {
        let (app, mut admin) = loaded().await;

        admin.open_edit(4).unwrap();
        admin.request_delete(4).unwrap();
        app.ctx.inventory.delete_entry(4).await.unwrap();

        let err = admin.save().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(admin.draft().is_some());
        let notice = app.notices.last().unwrap();
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.summary, "Save failed");

        let err = admin.confirm_delete().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(app.notices.last().unwrap().summary, "Delete failed");
    }
}
