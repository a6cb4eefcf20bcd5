//! Signup view
//!
//! Renders the form, inline field errors and the password checklist for a
//! [`SignupSession`]. The inline script keeps the view state in the page and
//! replays each keystroke through `/api/signup/edit`, so the checklist, the
//! error messages and the submit button follow the same rules as a submit.

use maud::{html, Markup, PreEscaped};

use super::layout;
use crate::config::SiteConfig;
use crate::domain::signup::{FormField, PasswordCriteria, SignupSession};
use crate::domain::Route;

const SIGNUP_SCRIPT: &str = r#"
(function () {
  const form = document.getElementById('signup-form');
  const submit = document.getElementById('submit');
  const fields = ['email', 'username', 'password', 'confirmPassword'];
  const state = { form: {}, errors: {} };

  for (const name of fields) {
    state.form[name] = form.elements[name].value;
    const error = document.getElementById(name + '-error');
    if (!error.hidden) state.errors[name] = error.textContent;
  }

  function render(view) {
    state.form = view.form;
    state.errors = view.errors;
    for (const name of fields) {
      const error = document.getElementById(name + '-error');
      const message = view.errors[name];
      error.textContent = message || '';
      error.hidden = !message;
    }
    for (const [key, met] of Object.entries(view.criteria)) {
      const item = document.getElementById('criterion-' + key);
      if (item) item.className = met ? 'met' : 'unmet';
    }
    submit.disabled = !view.canSubmit;
  }

  let pending = Promise.resolve();
  form.addEventListener('input', function (event) {
    const field = event.target.name;
    if (!fields.includes(field)) return;
    const value = event.target.value;
    pending = pending
      .then(() => fetch('/api/signup/edit', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ form: state.form, errors: state.errors, field: field, value: value })
      }))
      .then(r => r.ok ? r.json() : Promise.reject(r.status))
      .then(render)
      .catch(err => console.error('signup edit failed', err));
  });
})();
"#;

pub fn render(site: &SiteConfig, session: &SignupSession) -> Markup {
    let criteria = session.criteria();

    layout::page(
        site,
        "Sign Up",
        html! {
            main {
                h1 { "Create your account" }
                form id="signup-form" method="post" action=(Route::Signup.path()) novalidate {
                    @for field in FormField::ALL {
                        (field_input(session, field))
                        @if field == FormField::Password {
                            (checklist(&criteria))
                        }
                    }
                    button id="submit" type="submit" disabled[!session.can_submit()] { "Sign Up" }
                }
            }
            script { (PreEscaped(SIGNUP_SCRIPT)) }
        },
    )
}

fn field_input(session: &SignupSession, field: FormField) -> Markup {
    let name = field.as_str();
    let error = session.errors().get(field);

    html! {
        div class="field" {
            label for=(name) { (field.label()) }
            input id=(name) name=(name) type=(field.input_type())
                value=(session.form().get(field)) autocomplete=(autocomplete(field));
            p class="error" id={ (name) "-error" } hidden[error.is_none()] {
                @if let Some(error) = error {
                    (error.to_string())
                }
            }
        }
    }
}

fn checklist(criteria: &PasswordCriteria) -> Markup {
    html! {
        ul id="password-criteria" class="criteria" {
            @for (criterion, met) in criteria.checklist() {
                li id={ "criterion-" (criterion.key()) } class=(if met { "met" } else { "unmet" }) {
                    (criterion.description())
                }
            }
        }
    }
}

fn autocomplete(field: FormField) -> &'static str {
    match field {
        FormField::Email => "email",
        FormField::Username => "username",
        FormField::Password | FormField::ConfirmPassword => "new-password",
    }
}
