//! Teacher profile management page

use crate::api::FetchGateway;
use crate::components::{ErrorBanner, Modal};
use crate::interaction::BrowserInteraction;
use classroom_core::{Interaction, ProfileManager, TeacherGateway};
use classroom_types::{Teacher, TeacherField};
use leptos::prelude::*;
use leptos::task::spawn_local;

const fn input_type(field: TeacherField) -> &'static str {
    match field {
        TeacherField::Email => "email",
        TeacherField::Salary => "number",
        _ => "text",
    }
}

/// Single text input bound to one draft field.
#[component]
fn DraftInput(
    field: TeacherField,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<(TeacherField, String)>,
) -> impl IntoView {
    view! {
        <input
            class="input"
            type=input_type(field)
            placeholder=field.label()
            prop:value=move || value.get()
            on:input=move |ev| on_input.run((field, event_target_value(&ev)))
        />
    }
}

#[component]
pub fn TeacherProfiles() -> impl IntoView {
    let screen = RwSignal::new(ProfileManager::new());

    // Keystrokes in the edit buffer must not rebuild the table.
    let rows = Memo::new(move |_| {
        screen.with(|s| (s.teachers().to_vec(), s.editing().map(|e| e.id)))
    });
    let error = Signal::derive(move || screen.with(|s| s.error().map(str::to_string)));

    Effect::new(move |_| {
        spawn_local(async move {
            screen.update(|s| s.clear_error());
            let result = FetchGateway.list_profiles().await;
            screen.update(|s| {
                s.finish_fetch_teachers(result);
            });
        });
    });

    let on_save = move || {
        let Some(Ok((id, update))) = screen.try_update(|s| s.begin_save()) else {
            return;
        };
        spawn_local(async move {
            let result = FetchGateway.update_profile(id, &update).await;
            screen.update(|s| {
                s.finish_save(id, &update, result);
            });
        });
    };

    let on_delete = move |id: i64| {
        if !BrowserInteraction.confirm(ProfileManager::delete_prompt()) {
            return;
        }
        screen.update(|s| s.clear_error());
        spawn_local(async move {
            let result = FetchGateway.delete_profile(id).await;
            screen.update(|s| {
                s.finish_delete(id, result);
            });
        });
    };

    let on_add = move || {
        let Some(Ok(body)) = screen.try_update(|s| s.begin_add()) else {
            return;
        };
        spawn_local(async move {
            let result = FetchGateway.create_profile(&body).await;
            screen.update(|s| {
                s.finish_add(result);
            });
        });
    };

    let edit_value = move |field: TeacherField| {
        Signal::derive(move || {
            screen.with(|s| {
                s.editing().map(|e| e.draft.get(field).to_string()).unwrap_or_default()
            })
        })
    };
    let new_value = move |field: TeacherField| {
        Signal::derive(move || screen.with(|s| s.new_teacher().get(field).to_string()))
    };
    let on_edit_input = Callback::new(move |(field, value): (TeacherField, String)| {
        screen.update(|s| {
            s.set_edit_field(field, value);
        });
    });
    let on_new_input = Callback::new(move |(field, value): (TeacherField, String)| {
        screen.update(|s| s.set_new_field(field, value));
    });

    let view_row = move |t: Teacher| {
        let id = t.id;
        view! {
            <tr>
                <td>{t.name}</td>
                <td>{t.email}</td>
                <td>{t.class}</td>
                <td>{t.attendance}</td>
                <td>{t.subject}</td>
                <td>{format!("{:.2}", t.salary)}</td>
                <td class="table-actions">
                    <button
                        class="btn btn--secondary btn--sm"
                        on:click=move |_| {
                            screen.update(|s| {
                                s.begin_edit(id);
                            });
                        }
                    >
                        "Edit"
                    </button>
                    <button class="btn btn--danger btn--sm" on:click=move |_| on_delete(id)>
                        "Delete"
                    </button>
                </td>
            </tr>
        }
        .into_any()
    };

    let edit_row = move || {
        view! {
            <tr class="row--editing">
                {TeacherField::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <td>
                                <DraftInput
                                    field=field
                                    value=edit_value(field)
                                    on_input=on_edit_input
                                />
                            </td>
                        }
                    })
                    .collect_view()}
                <td class="table-actions">
                    <button class="btn btn--primary btn--sm" on:click=move |_| on_save()>
                        "Save"
                    </button>
                    <button
                        class="btn btn--secondary btn--sm"
                        on:click=move |_| screen.update(|s| s.cancel_edit())
                    >
                        "Cancel"
                    </button>
                </td>
            </tr>
        }
        .into_any()
    };

    view! {
        <div class="page teacher-profiles">
            <div class="page-header">
                <h1 class="page-title">"Teachers"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| screen.update(|s| s.open_create_form())
                >
                    "Add Teacher"
                </button>
            </div>

            <ErrorBanner
                message=error
                on_dismiss=Callback::new(move |_| screen.update(|s| s.clear_error()))
            />

            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            {TeacherField::ALL
                                .into_iter()
                                .map(|f| view! { <th>{f.label()}</th> })
                                .collect_view()}
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let (teachers, editing) = rows.get();
                            if teachers.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="7" class="table-empty">"No teachers found"</td>
                                    </tr>
                                }
                                .into_any();
                            }
                            teachers
                                .into_iter()
                                .map(|t| if editing == Some(t.id) { edit_row() } else { view_row(t) })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <Modal
                is_open=Signal::derive(move || screen.with(|s| s.is_create_form_open()))
                title="Add Teacher"
                on_close=Callback::new(move |_| screen.update(|s| s.close_create_form()))
            >
                <form
                    class="form-stack"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_add();
                    }
                >
                    {TeacherField::ALL
                        .into_iter()
                        .map(|field| {
                            view! {
                                <label class="form-field">
                                    <span>{field.label()}</span>
                                    <DraftInput
                                        field=field
                                        value=new_value(field)
                                        on_input=on_new_input
                                    />
                                </label>
                            }
                        })
                        .collect_view()}
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="btn btn--secondary"
                            on:click=move |_| screen.update(|s| s.close_create_form())
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Add Teacher"
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
