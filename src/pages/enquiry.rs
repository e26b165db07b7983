//! Enquiry form markup shared by the home and contact pages.

use crate::form::{AreaOfLaw, ContactForm, FormController, FormState, MESSAGE_LIMIT};
use crate::utils::xml::{
    XmlWriter, write_elem, write_empty_elem, write_end, write_icon, write_start, write_text,
};
use anyhow::Result;

const INPUT: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 focus:ring-2 focus:ring-teal-600 focus:border-transparent text-sm";
const LABEL: &str = "block text-sm font-semibold text-gray-900 mb-2";

/// Write the enquiry form posting to `action`. Input values and status
/// come from `controller` when present; otherwise the form renders empty
/// and idle.
pub(super) fn write_enquiry_form(
    w: &mut XmlWriter,
    id: &str,
    action: &str,
    controller: Option<&FormController>,
) -> Result<()> {
    let empty = ContactForm::default();
    let (form, state) = match controller {
        Some(c) => (c.form(), c.state()),
        None => (&empty, &FormState::Idle),
    };
    let disabled = controller.is_some_and(FormController::is_disabled);

    write_start(
        w,
        "form",
        &[
            ("id", id),
            ("method", "post"),
            ("action", action),
            ("class", "bg-white rounded-2xl p-8 shadow-lg space-y-6"),
        ],
    )?;

    write_start(w, "div", &[("class", "grid md:grid-cols-2 gap-6")])?;
    write_input(w, "name", "text", "Full Name *", "Your full name", &form.name, disabled)?;
    write_input(w, "phone", "tel", "Phone Number *", "Your phone number", &form.phone, disabled)?;
    write_end(w, "div")?;
    write_input(w, "email", "email", "Email Address *", "your.email@example.com", &form.email, disabled)?;

    // area of law
    write_start(w, "div", &[])?;
    write_elem(w, "label", &[("for", "area_of_law"), ("class", LABEL)], "Area of Law *")?;
    let mut select = vec![
        ("id", "area_of_law"),
        ("name", "area_of_law"),
        ("class", INPUT),
        ("required", ""),
    ];
    if disabled {
        select.push(("disabled", ""));
    }
    write_start(w, "select", &select)?;
    write_elem(w, "option", &[("value", "")], "Please select...")?;
    for area in AreaOfLaw::ALL {
        let mut option = vec![("value", area.as_str())];
        if form.area_of_law == area.as_str() {
            option.push(("selected", ""));
        }
        write_elem(w, "option", &option, area.as_str())?;
    }
    write_end(w, "select")?;
    write_end(w, "div")?;

    // message
    let limit = MESSAGE_LIMIT.to_string();
    let hint = format!("Please describe your legal matter (max {MESSAGE_LIMIT} characters)");
    write_start(w, "div", &[])?;
    write_elem(w, "label", &[("for", "message"), ("class", LABEL)], "Your Enquiry *")?;
    let mut textarea = vec![
        ("id", "message"),
        ("name", "message"),
        ("rows", "6"),
        ("maxlength", limit.as_str()),
        ("placeholder", hint.as_str()),
        ("class", INPUT),
        ("required", ""),
    ];
    if disabled {
        textarea.push(("disabled", ""));
    }
    write_elem(w, "textarea", &textarea, &form.message)?;
    write_elem(
        w,
        "p",
        &[("class", "text-xs text-gray-500 mt-2")],
        &format!("Maximum {MESSAGE_LIMIT} characters"),
    )?;
    write_end(w, "div")?;

    write_start(w, "div", &[("class", "bg-amber-50 border border-amber-200 rounded-lg p-4")])?;
    write_start(w, "p", &[("class", "text-sm text-amber-900")])?;
    write_icon(w, "ri-information-line text-amber-600")?;
    write_text(w, " ")?;
    write_elem(w, "strong", &[], "Important:")?;
    write_text(
        w,
        " Please do not send confidential information through this form. We will contact you to discuss your case securely.",
    )?;
    write_end(w, "p")?;
    write_end(w, "div")?;

    write_status(w, state)?;

    let mut button = vec![
        ("type", "submit"),
        ("class", "w-full bg-teal-600 hover:bg-teal-700 text-white px-8 py-4 rounded-lg text-lg font-semibold disabled:opacity-50 disabled:cursor-not-allowed"),
    ];
    if disabled {
        button.push(("disabled", ""));
    }
    let label = if disabled { "Sending..." } else { "Send Enquiry" };
    write_elem(w, "button", &button, label)?;

    write_end(w, "form")
}

fn write_input(
    w: &mut XmlWriter,
    name: &str,
    kind: &str,
    label: &str,
    placeholder: &str,
    value: &str,
    disabled: bool,
) -> Result<()> {
    write_start(w, "div", &[])?;
    write_elem(w, "label", &[("for", name), ("class", LABEL)], label)?;
    let mut attrs = vec![
        ("type", kind),
        ("id", name),
        ("name", name),
        ("value", value),
        ("placeholder", placeholder),
        ("class", INPUT),
        ("required", ""),
    ];
    if disabled {
        attrs.push(("disabled", ""));
    }
    write_empty_elem(w, "input", &attrs)?;
    write_end(w, "div")
}

fn write_status(w: &mut XmlWriter, state: &FormState) -> Result<()> {
    let (class, icon, text_class) = match state {
        FormState::Success(_) => (
            "bg-green-50 border border-green-200 rounded-lg p-4 flex items-start gap-3",
            "ri-checkbox-circle-line text-2xl text-green-600",
            "text-green-800",
        ),
        FormState::Error(_) => (
            "bg-red-50 border border-red-200 rounded-lg p-4 flex items-start gap-3",
            "ri-error-warning-line text-2xl text-red-600",
            "text-red-800",
        ),
        FormState::Idle | FormState::Submitting => return Ok(()),
    };
    let message = state.message().unwrap_or_default();

    write_start(w, "div", &[("class", class), ("role", "status")])?;
    write_icon(w, icon)?;
    write_elem(w, "p", &[("class", text_class)], message)?;
    write_end(w, "div")
}
