//! List and detail commands.
//!
//! Each command applies one input to the relevant store and answers with a
//! fresh snapshot. Fetch failures are part of the snapshot (`error`), so only
//! malformed arguments produce a [`CommandError`].

use crate::error::CommandError;
use crate::state::AppState;
use crate::view::{DetailView, ListView};
use starchart_core::ResourceKind;
use tracing::info;

fn parse_resource(resource: &str) -> Result<ResourceKind, CommandError> {
    Ok(resource.parse::<ResourceKind>()?)
}

/// Show `resource` in the list view and (re)load its collection.
pub async fn select_resource(state: &AppState, resource: &str) -> Result<ListView, CommandError> {
    let kind = parse_resource(resource)?;
    info!("Selecting resource: {}", kind);

    state.set_active_resource(kind).await;
    let store = state.store(kind);
    store.load().await;
    Ok(ListView::snapshot(&*store.pipeline().await))
}

/// Reload the active collection.
pub async fn refresh(state: &AppState) -> ListView {
    let store = state.active_store().await;
    store.load().await;
    ListView::snapshot(&*store.pipeline().await)
}

/// Set the search text of the active list.
pub async fn set_search(state: &AppState, text: String) -> ListView {
    let store = state.active_store().await;
    let mut pipeline = store.pipeline_mut().await;
    pipeline.set_search_text(text);
    ListView::snapshot(&pipeline)
}

/// Set sort key and direction of the active list; `None` keeps fetch order.
pub async fn set_sort(state: &AppState, key: Option<String>, ascending: bool) -> ListView {
    let store = state.active_store().await;
    let mut pipeline = store.pipeline_mut().await;
    pipeline.set_sort(key.filter(|k| !k.trim().is_empty()), ascending);
    ListView::snapshot(&pipeline)
}

/// Flip the sort direction of the active list.
pub async fn toggle_sort_direction(state: &AppState) -> ListView {
    let store = state.active_store().await;
    let mut pipeline = store.pipeline_mut().await;
    pipeline.toggle_sort_direction();
    ListView::snapshot(&pipeline)
}

/// Jump to `page` of the active list; out-of-range pages are clamped.
pub async fn go_to_page(state: &AppState, page: usize) -> ListView {
    let store = state.active_store().await;
    let mut pipeline = store.pipeline_mut().await;
    pipeline.set_page(page);
    ListView::snapshot(&pipeline)
}

/// Current snapshot of the active list.
pub async fn list_view(state: &AppState) -> ListView {
    ListView::snapshot(&*state.active_store().await.pipeline().await)
}

/// Fetch record `id` of `resource` into its detail view.
pub async fn open_detail(
    state: &AppState,
    resource: &str,
    id: &str,
) -> Result<DetailView, CommandError> {
    let kind = parse_resource(resource)?;
    info!("Opening detail: {}/{}", kind, id);

    let store = state.store(kind);
    store.open_detail(id).await;
    Ok(DetailView::snapshot(kind, &*store.detail().await))
}

/// Leave the detail view of `resource`.
pub async fn close_detail(state: &AppState, resource: &str) -> Result<(), CommandError> {
    let kind = parse_resource(resource)?;
    state.store(kind).close_detail().await;
    Ok(())
}

/// Current snapshot of the detail view of `resource`.
pub async fn detail_view(state: &AppState, resource: &str) -> Result<DetailView, CommandError> {
    let kind = parse_resource(resource)?;
    Ok(DetailView::snapshot(
        kind,
        &*state.store(kind).detail().await,
    ))
}
