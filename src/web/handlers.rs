use crate::core::habits::{CreateOutcome, HabitLogic};
use crate::core::table::WeekTable;
use crate::core::toggle::ToggleLogic;
use crate::db::queries::HabitOrder;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{self, today};
use crate::web::AppState;
use crate::web::views::{
    HabitRow, HabitsPage, HomePage, SystemPage, TablePage, notice_for, reject_code,
};
use askama::Template;
use axum::Form;
use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use tracing::info;

fn render<T: Template>(page: T) -> AppResult<Html<String>> {
    Ok(Html(page.render()?))
}

pub async fn home() -> AppResult<Html<String>> {
    render(HomePage)
}

pub async fn system() -> AppResult<Html<String>> {
    render(SystemPage)
}

pub async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
pub struct HabitsQuery {
    pub error: Option<String>,
}

pub async fn list_habits(
    State(state): State<AppState>,
    Query(query): Query<HabitsQuery>,
) -> AppResult<Html<String>> {
    let habits = state
        .with_pool(|pool| HabitLogic::list(pool, HabitOrder::IdDesc))
        .await?;

    render(HabitsPage {
        habits: habits.iter().map(HabitRow::from).collect(),
        notice: notice_for(query.error.as_deref()),
    })
}

#[derive(Debug, Deserialize)]
pub struct HabitForm {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

pub async fn create_habit(
    State(state): State<AppState>,
    Form(form): Form<HabitForm>,
) -> AppResult<Redirect> {
    let outcome = state
        .with_pool(move |pool| HabitLogic::create(pool, &form.name, &form.kind))
        .await?;

    match outcome {
        CreateOutcome::Created(h) => {
            info!(habit_id = h.id, "habit added");
            Ok(Redirect::to("/habits"))
        }
        CreateOutcome::Rejected(reason) => {
            info!(%reason, "habit submission rejected");
            Ok(Redirect::to(&format!("/habits?error={}", reject_code(&reason))))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub habit_id: i64,
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Form(form): Form<DeleteForm>,
) -> AppResult<Redirect> {
    let habit_id = form.habit_id;
    let outcome = state
        .with_pool(move |pool| HabitLogic::delete(pool, habit_id))
        .await?;

    info!(
        habit_id,
        removed = outcome.habit_removed,
        checks = outcome.checks_removed,
        "habit delete"
    );

    Ok(Redirect::to("/habits"))
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    pub week: Option<String>,
}

pub async fn week_table(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> AppResult<Html<String>> {
    let table = state
        .with_pool(move |pool| WeekTable::load(pool, query.week.as_deref(), today()))
        .await?;

    render(TablePage::from(table))
}

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub habit_id: i64,
    pub check_date: String,
    pub week_start: Option<String>,
}

/// Where to go after a toggle: back to the viewed week when it is a real date.
pub fn table_redirect(week_start: Option<&str>) -> String {
    match week_start.map(str::trim).and_then(date::parse_date) {
        Some(d) => format!("/table?week={}", date::to_iso(d)),
        None => "/table".to_string(),
    }
}

pub async fn toggle(
    State(state): State<AppState>,
    Form(form): Form<ToggleForm>,
) -> AppResult<Redirect> {
    let check_date = date::parse_date(form.check_date.trim())
        .ok_or_else(|| AppError::InvalidDate(form.check_date.clone()))?;
    let habit_id = form.habit_id;

    let done = state
        .with_pool(move |pool| ToggleLogic::apply(pool, habit_id, check_date))
        .await?;

    info!(habit_id, date = %check_date, done, "toggled");

    Ok(Redirect::to(&table_redirect(form.week_start.as_deref())))
}
