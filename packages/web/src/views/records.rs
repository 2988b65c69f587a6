//! Patient and doctor list and form pages.

use api::models::{Doctor, Patient};
use dioxus::prelude::*;

use super::{render, Layout};
use crate::flash::Flash;

pub fn patients_page(flashes: Vec<Flash>, patients: &[Patient]) -> String {
    render(rsx! {
        Layout { title: "Patients", flashes: flashes, signed_in: true,
            p { a { href: "/add_patient", "Add patient" } }
            if patients.is_empty() {
                p { "No patients yet." }
            } else {
                table {
                    thead { tr { th { "ID" } th { "Name" } th { "Age" } th { "Gender" } th {} } }
                    tbody {
                        {patients.iter().map(|patient| {
                            let Patient { id, name, age, gender } = patient.clone();
                            rsx! {
                                tr { key: "{id}",
                                    td { "{id}" }
                                    td { "{name}" }
                                    td { "{age}" }
                                    td { "{gender}" }
                                    td {
                                        a { href: "/edit_patient/{id}", "Edit" }
                                        form { class: "inline", method: "post", action: "/delete_patient/{id}",
                                            button { r#type: "submit", "Delete" }
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }
        }
    })
}

/// Add form when `patient` is `None`, edit form prefilled from it otherwise.
pub fn patient_form_page(flashes: Vec<Flash>, patient: Option<&Patient>) -> String {
    let (title, action, name, age, gender) = match patient {
        Some(p) => (
            "Edit patient",
            format!("/edit_patient/{}", p.id),
            p.name.clone(),
            p.age.to_string(),
            p.gender.clone(),
        ),
        None => ("Add patient", "/add_patient".to_string(), String::new(), String::new(), String::new()),
    };
    render(rsx! {
        Layout { title: title, flashes: flashes, signed_in: true,
            form { method: "post", action: "{action}",
                label { "Name" input { name: "name", value: "{name}" } }
                label { "Age" input { name: "age", value: "{age}" } }
                label { "Gender" input { name: "gender", value: "{gender}" } }
                button { r#type: "submit", "Save" }
            }
            p { a { href: "/patients", "Back to patients" } }
        }
    })
}

pub fn doctors_page(flashes: Vec<Flash>, doctors: &[Doctor]) -> String {
    render(rsx! {
        Layout { title: "Doctors", flashes: flashes, signed_in: true,
            p { a { href: "/add_doctor", "Add doctor" } }
            if doctors.is_empty() {
                p { "No doctors yet." }
            } else {
                table {
                    thead { tr { th { "ID" } th { "Name" } th { "Specialty" } th {} } }
                    tbody {
                        {doctors.iter().map(|doctor| {
                            let Doctor { id, name, specialty } = doctor.clone();
                            rsx! {
                                tr { key: "{id}",
                                    td { "{id}" }
                                    td { "{name}" }
                                    td { "{specialty}" }
                                    td {
                                        a { href: "/edit_doctor/{id}", "Edit" }
                                        form { class: "inline", method: "post", action: "/delete_doctor/{id}",
                                            button { r#type: "submit", "Delete" }
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }
        }
    })
}

pub fn doctor_form_page(flashes: Vec<Flash>, doctor: Option<&Doctor>) -> String {
    let (title, action, name, specialty) = match doctor {
        Some(d) => (
            "Edit doctor",
            format!("/edit_doctor/{}", d.id),
            d.name.clone(),
            d.specialty.clone(),
        ),
        None => ("Add doctor", "/add_doctor".to_string(), String::new(), String::new()),
    };
    render(rsx! {
        Layout { title: title, flashes: flashes, signed_in: true,
            form { method: "post", action: "{action}",
                label { "Name" input { name: "name", value: "{name}" } }
                label { "Specialty" input { name: "specialty", value: "{specialty}" } }
                button { r#type: "submit", "Save" }
            }
            p { a { href: "/doctors", "Back to doctors" } }
        }
    })
}
