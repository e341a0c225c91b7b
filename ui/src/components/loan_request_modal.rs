use api::loan_form::LoanForm;
use api::loan_form::LoanFormErrors;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::Input;
use crate::components::pico::Modal;
use crate::hooks::use_stores::submit_loan;

/// The "Request Loan" dialog. Invalid input is reported inline and never
/// reaches the network. The dialog closes and resets after a submission,
/// whether or not the server accepted it; the toaster reports the outcome.
#[component]
pub fn LoanRequestModal(mut is_open: Signal<bool>) -> Element {
    let app_state = use_context::<AppState>();
    let state = use_context::<AppStateMut>();
    let mut form = use_signal(LoanForm::default);
    let mut errors = use_signal(LoanFormErrors::default);
    let submitting = state.loans.read().is_loading();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().validate() {
            Err(field_errors) => errors.set(field_errors),
            Ok(draft) => {
                errors.set(LoanFormErrors::default());
                let app_state = app_state.clone();
                spawn(async move {
                    submit_loan(&app_state, state, draft).await;
                    form.set(LoanForm::default());
                    is_open.set(false);
                });
            }
        }
    };

    let field_error = move |pick: fn(&LoanFormErrors) -> Option<&'static str>| {
        pick(&errors.read()).map(str::to_string)
    };

    rsx! {
        Modal {
            is_open,
            title: "Request Loan",
            form {
                onsubmit: on_submit,
                Input {
                    label: "First name",
                    name: "firstname",
                    placeholder: "John",
                    value: form.read().firstname.clone(),
                    error: field_error(|e| e.firstname),
                    on_input: move |v| form.write().firstname = v,
                }
                Input {
                    label: "Last name",
                    name: "lastname",
                    placeholder: "Doe",
                    value: form.read().lastname.clone(),
                    error: field_error(|e| e.lastname),
                    on_input: move |v| form.write().lastname = v,
                }
                Input {
                    label: "Amount",
                    name: "amount",
                    placeholder: "NGN 20,000",
                    value: form.read().amount.clone(),
                    error: field_error(|e| e.amount),
                    on_input: move |v| form.write().amount = v,
                }
                Input {
                    label: "Purpose",
                    name: "purpose",
                    placeholder: "Business",
                    value: form.read().purpose.clone(),
                    error: field_error(|e| e.purpose),
                    on_input: move |v| form.write().purpose = v,
                }
                Input {
                    label: "Tenure",
                    name: "tenure",
                    input_type: "date",
                    value: form.read().tenure.clone(),
                    error: field_error(|e| e.tenure),
                    on_input: move |v| form.write().tenure = v,
                }
                Button {
                    submit: true,
                    disabled: submitting,
                    if submitting { "Submitting..." } else { "Submit" }
                }
            }
        }
    }
}
