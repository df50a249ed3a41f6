//! Sortable, searchable data table.
//!
//! Clicking a sortable header reorders the rows ascending by that column.
//! Typing in the search box hides every row whose text does not contain the
//! query (case-insensitive); rows are hidden, never removed.

use leptos::prelude::*;

use crate::state::table::{TableColumn, TableRow, TableState, row_matches, row_style};

fn header_class(sortable: bool, active: bool) -> &'static str {
    match (sortable, active) {
        (true, true) => "sortable sorted-asc",
        (true, false) => "sortable",
        (false, _) => "",
    }
}

#[component]
pub fn DataTable(
    #[prop(into)] id: String,
    columns: Vec<TableColumn>,
    rows: Vec<TableRow>,
    #[prop(into, default = "Search...".to_owned())] search_placeholder: String,
    /// Extra trailing cell per row, given the row key.
    #[prop(optional)]
    row_actions: Option<Callback<String, AnyView>>,
) -> impl IntoView {
    let table = RwSignal::new(TableState::new(columns, rows));

    let headers = table.with_untracked(|t| t.columns.clone());
    let header_cells = headers
        .into_iter()
        .enumerate()
        .map(|(idx, column)| {
            let sortable = column.sortable;
            view! {
                <th
                    class=move || header_class(sortable, table.with(|t| t.sorted_by) == Some(idx))
                    on:click=move |_| {
                        if sortable {
                            table.update(|t| t.sort_by(idx));
                        }
                    }
                >
                    {column.title}
                </th>
            }
        })
        .collect_view();

    view! {
        <div class="table-tools">
            <input
                type="search"
                class="form-control table-search"
                placeholder=search_placeholder
                prop:value=move || table.with(|t| t.query.clone())
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    table.update(|t| t.set_query(query));
                }
            />
            <span class="table-count">
                {move || format!("{} of {}", table.with(TableState::visible_count), table.with(|t| t.rows.len()))}
            </span>
        </div>
        <div class="table-responsive">
            <table id=id class="table">
                <thead>
                    <tr>
                        {header_cells}
                        {row_actions.map(|_| view! { <th>"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || table.with(|t| t.rows.clone())
                        key=|row| row.key.clone()
                        children=move |row| {
                            let text = row.text();
                            let visible = move || table.with(|t| row_matches(&text, &t.query));
                            let actions = row_actions.map(|render| {
                                view! { <td class="table-actions">{render.run(row.key.clone())}</td> }
                            });
                            let cells = row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view();
                            view! {
                                <tr style=move || row_style(visible())>
                                    {cells}
                                    {actions}
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
