//! HTMX-driven board route handlers.
//!
//! Returns the full page for `/` and HTML fragments for HTMX partial
//! updates. Mutations respond with the refreshed columns, which closes any
//! open add-item form.

use askama::Template;
use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::context::BoardContext;
use kanban_core::board::{self, Action, AppState, List, Task};

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "board.html")]
struct BoardTemplate {
    title: String,
    columns: Vec<ColumnView>,
    add_list_html: String,
}

#[derive(Template)]
#[template(path = "partials/columns.html")]
struct ColumnsTemplate {
    columns: Vec<ColumnView>,
    add_list_html: String,
}

#[derive(Template)]
#[template(path = "partials/add_item.html")]
struct AddItemTemplate {
    item: AddItemView,
}

/// View model for a column.
struct ColumnView {
    id: String,
    text: String,
    cards: Vec<CardView>,
    /// Pre-rendered add-task control.
    add_task_html: String,
}

/// View model for a card.
struct CardView {
    id: String,
    text: String,
}

/// The toggle-button-or-form control used to add lists and tasks.
struct AddItemView {
    show_form: bool,
    toggle_text: String,
    dark: bool,
    /// POST target for the form.
    submit_url: String,
    open_url: String,
    cancel_url: String,
}

impl CardView {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            text: task.text.clone(),
        }
    }
}

impl ColumnView {
    fn from_list(list: &List) -> askama::Result<Self> {
        Ok(Self {
            id: list.id.clone(),
            text: list.text.clone(),
            cards: list.tasks.iter().map(CardView::from_task).collect(),
            add_task_html: AddItemView::task(&list.id, false).render_html()?,
        })
    }
}

impl AddItemView {
    fn list(show_form: bool) -> Self {
        Self {
            show_form,
            toggle_text: "+ Add another list".to_string(),
            dark: false,
            submit_url: "/lists".to_string(),
            open_url: "/forms/list".to_string(),
            cancel_url: "/forms/list/cancel".to_string(),
        }
    }

    fn task(list_id: &str, show_form: bool) -> Self {
        Self {
            show_form,
            toggle_text: "+ Add another task".to_string(),
            dark: true,
            submit_url: format!("/lists/{}/tasks", list_id),
            open_url: format!("/lists/{}/form", list_id),
            cancel_url: format!("/lists/{}/form/cancel", list_id),
        }
    }

    fn render_html(self) -> askama::Result<String> {
        AddItemTemplate { item: self }.render()
    }
}

fn columns_template(state: &AppState) -> askama::Result<ColumnsTemplate> {
    let columns = state
        .lists
        .iter()
        .map(ColumnView::from_list)
        .collect::<askama::Result<Vec<_>>>()?;

    Ok(ColumnsTemplate {
        columns,
        add_list_html: AddItemView::list(false).render_html()?,
    })
}

// ============================================================
// REQUEST TYPES
// ============================================================

#[derive(Deserialize)]
pub struct NewItemForm {
    #[serde(default)]
    pub text: String,
}

// ============================================================
// HANDLERS
// ============================================================

/// GET / - Render the full board page.
pub async fn index(ctx: BoardContext) -> Response {
    let state = ctx.store.snapshot().await;
    let board = match columns_template(&state) {
        Ok(b) => b,
        Err(e) => return template_error(e),
    };

    render(&BoardTemplate {
        title: ctx.title.to_string(),
        columns: board.columns,
        add_list_html: board.add_list_html,
    })
}

/// GET /forms/list - Open the add-list form.
pub async fn add_list_form() -> Response {
    render(&AddItemTemplate {
        item: AddItemView::list(true),
    })
}

/// GET /forms/list/cancel - Close the add-list form.
pub async fn add_list_button() -> Response {
    render(&AddItemTemplate {
        item: AddItemView::list(false),
    })
}

/// GET /lists/{id}/form - Open the add-task form for a list.
pub async fn add_task_form(ctx: BoardContext, Path(list_id): Path<String>) -> Response {
    task_control(&ctx, &list_id, true).await
}

/// GET /lists/{id}/form/cancel - Close the add-task form for a list.
pub async fn add_task_button(ctx: BoardContext, Path(list_id): Path<String>) -> Response {
    task_control(&ctx, &list_id, false).await
}

/// POST /lists - Add a list. Returns the refreshed columns.
pub async fn create_list(
    ctx: BoardContext,
    headers: HeaderMap,
    Form(form): Form<NewItemForm>,
) -> Response {
    let text = match board::validate_text(&form.text) {
        Ok(t) => t,
        Err(e) => return reject_blank(e),
    };

    let state = ctx.store.dispatch(Action::AddList(text)).await;
    respond_with_columns(&headers, &state)
}

/// POST /lists/{id}/tasks - Add a task to a list. Returns the refreshed columns.
///
/// An unknown list id leaves the board as it was.
pub async fn create_task(
    ctx: BoardContext,
    Path(list_id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<NewItemForm>,
) -> Response {
    let text = match board::validate_text(&form.text) {
        Ok(t) => t,
        Err(e) => return reject_blank(e),
    };

    let state = ctx.store.dispatch(Action::AddTask { text, list_id }).await;
    respond_with_columns(&headers, &state)
}

// ============================================================
// HELPERS
// ============================================================

fn render<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => template_error(e),
    }
}

fn template_error(err: askama::Error) -> Response {
    error!(error = %err, "Template rendering failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(format!("Template error: {}", err)),
    )
        .into_response()
}

/// Render the add-task control, or 404 when the list does not exist.
async fn task_control(ctx: &BoardContext, list_id: &str, show_form: bool) -> Response {
    let state = ctx.store.snapshot().await;
    if let Err(e) = board::find_list(&state, list_id) {
        warn!(error = %e, "Add-task control requested for missing list");
        return (StatusCode::NOT_FOUND, Html(e.to_string())).into_response();
    }

    render(&AddItemTemplate {
        item: AddItemView::task(list_id, show_form),
    })
}

fn reject_blank(err: kanban_core::BoardError) -> Response {
    warn!(error = %err, "Rejected add-item form");
    (StatusCode::UNPROCESSABLE_ENTITY, Html(err.to_string())).into_response()
}

/// HTMX requests get the columns fragment; plain form posts go back to the page.
fn respond_with_columns(headers: &HeaderMap, state: &AppState) -> Response {
    if !headers.contains_key("hx-request") {
        return Redirect::to("/").into_response();
    }

    debug!(lists = state.lists.len(), "Rendering board columns fragment");
    match columns_template(state) {
        Ok(template) => render(&template),
        Err(e) => template_error(e),
    }
}
