//! Teacher-to-class assignment page

use crate::api::FetchGateway;
use crate::components::{Button, ErrorBanner};
use crate::interaction::BrowserInteraction;
use classroom_core::{AssignmentGateway, AssignmentManager, Interaction};
use classroom_types::ClassName;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn refresh_assignments(screen: RwSignal<AssignmentManager>) {
    screen.update(|s| s.clear_error());
    let result = FetchGateway.list_assignments().await;
    screen.update(|s| {
        s.finish_fetch_assignments(result);
    });
}

#[component]
pub fn AssignTeacher() -> impl IntoView {
    let screen = RwSignal::new(AssignmentManager::new());

    let teachers = Memo::new(move |_| screen.with(|s| s.teachers().to_vec()));
    let assignments = Memo::new(move |_| screen.with(|s| s.assignments().to_vec()));
    let error = Signal::derive(move || screen.with(|s| s.error().map(str::to_string)));
    let loading = Signal::derive(move || screen.with(|s| s.is_loading()));

    // Load initial data; the error is cleared once so either failure survives.
    Effect::new(move |_| {
        spawn_local(async move {
            screen.update(|s| s.clear_error());
            let teachers = FetchGateway.list_teachers().await;
            screen.update(|s| {
                s.finish_fetch_teachers(teachers);
            });
            let assignments = FetchGateway.list_assignments().await;
            screen.update(|s| {
                s.finish_fetch_assignments(assignments);
            });
        });
    });

    let on_assign = move || {
        let Some(Ok(request)) = screen.try_update(|s| s.begin_assign()) else {
            return;
        };
        spawn_local(async move {
            let result = FetchGateway.assign(&request).await;
            let done = screen
                .try_update(|s| s.finish_assign(&request, result, &BrowserInteraction).is_done())
                .unwrap_or(false);
            if done {
                refresh_assignments(screen).await;
            }
        });
    };

    let on_remove = move |id: i64| {
        if !BrowserInteraction.confirm(AssignmentManager::remove_prompt()) {
            return;
        }
        screen.update(|s| s.clear_error());
        spawn_local(async move {
            let result = FetchGateway.remove_assignment(id).await;
            let done = screen
                .try_update(|s| s.finish_remove(id, result, &BrowserInteraction).is_done())
                .unwrap_or(false);
            if done {
                refresh_assignments(screen).await;
            }
        });
    };

    view! {
        <div class="page assign-teacher">
            <h1 class="page-title">"Assign Teacher"</h1>

            <ErrorBanner
                message=error
                on_dismiss=Callback::new(move |_| screen.update(|s| s.clear_error()))
            />

            <section class="card">
                <h2>"Assign Teacher to Class"</h2>
                <div class="form-grid">
                    <div class="form-field">
                        <label>"Select Teacher:"</label>
                        <select
                            prop:value=move || screen.with(|s| s.selected_teacher().to_string())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                screen.update(|s| s.select_teacher(value));
                            }
                        >
                            <option value="">"-- Select Teacher --"</option>
                            {move || {
                                teachers
                                    .get()
                                    .into_iter()
                                    .map(|t| view! { <option value=t.id.to_string()>{t.label()}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                    <div class="form-field">
                        <label>"Select Class:"</label>
                        <select
                            prop:value=move || screen.with(|s| s.selected_class().to_string())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                screen.update(|s| s.select_class(value));
                            }
                        >
                            <option value="">"-- Select Class --"</option>
                            {ClassName::all()
                                .map(|c| view! { <option value=c.to_string()>{c.to_string()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <Button
                    text="Assign Teacher"
                    loading_text="Assigning..."
                    loading=loading
                    on_click=on_assign
                />
            </section>

            <section class="card">
                <h2>"Current Assignments"</h2>
                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Teacher"</th>
                                <th>"Class"</th>
                                <th>"Assigned On"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = assignments.get();
                                if rows.is_empty() {
                                    return view! {
                                        <tr>
                                            <td colspan="4" class="table-empty">"No assignments found"</td>
                                        </tr>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|a| {
                                        let id = a.id;
                                        let assigned_on = a.assigned_on();
                                        view! {
                                            <tr>
                                                <td>{a.teacher_name}</td>
                                                <td>{a.class_name}</td>
                                                <td>{assigned_on}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--danger btn--sm"
                                                        on:click=move |_| on_remove(id)
                                                    >
                                                        "Remove"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                </div>
            </section>
        </div>
    }
}
