//! Admin users list: searchable, sortable, exportable, printable.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::components::data_table::DataTable;
use crate::components::export_button::ExportButton;
use crate::components::print_button::PrintButton;
use crate::components::user_actions::UserActions;
use crate::net::api::{report_export_url, report_filename};
use crate::net::types::{PageData, UserRow};
use crate::state::table::{TableColumn, TableRow};
use crate::util::table_sort::SortKind;

pub const USERS_TABLE_ID: &str = "users-table";

fn user_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("ID", SortKind::Number),
        TableColumn::new("Email", SortKind::Text),
        TableColumn::new("Role", SortKind::Text),
        TableColumn::new("Created", SortKind::Date),
    ]
}

fn user_rows(users: &[UserRow]) -> Vec<TableRow> {
    users
        .iter()
        .map(|user| {
            TableRow::new(user.id.to_string(), vec![
                user.id.to_string(),
                user.email.clone(),
                user.role.clone(),
                user.created_at.clone().unwrap_or_default(),
            ])
        })
        .collect()
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let page = expect_context::<PageData>();
    let emails: HashMap<String, String> = page
        .users
        .iter()
        .map(|user| (user.id.to_string(), user.email.clone()))
        .collect();

    let row_actions = Callback::new(move |key: String| {
        let email = emails.get(&key).cloned().unwrap_or_default();
        let user_id = key.parse::<i64>().unwrap_or_default();
        view! {
            <CopyButton text=email label="Email"/>
            <UserActions user_id=user_id/>
        }
            .into_any()
    });

    view! {
        <div class="page-header">
            <h1>"Users"</h1>
            <div class="page-actions">
                <a href="/admin/users/add" class="btn btn-primary">"Add user"</a>
                <ExportButton url=report_export_url("users") filename=report_filename("users")/>
                <PrintButton/>
            </div>
        </div>
        <DataTable
            id=USERS_TABLE_ID
            columns=user_columns()
            rows=user_rows(&page.users)
            search_placeholder="Search users..."
            row_actions=row_actions
        />
    }
}
