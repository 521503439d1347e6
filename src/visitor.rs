//! Per-visitor session state and the transitions the pages make to it.
//!
//! The HTTP layer loads a `Visitor` from the session, hands it to one of the
//! functions here, and stores whatever comes back.

use crate::guests::ExcludedGuest;
use serde_derive::{Deserialize, Serialize};
use url::form_urlencoded;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Visitor {
    pub rsvp: bool,
    /// Messages waiting to be shown on the next homepage render.
    pub flashes: Vec<String>,
}

impl Visitor {
    pub fn flash<S: Into<String>>(&mut self, message: S) {
        self.flashes.push(message.into());
    }

    pub fn take_flashes(&mut self) -> Vec<String> {
        std::mem::replace(&mut self.flashes, Vec::new())
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct RsvpForm {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl RsvpForm {
    /// Takes the first `name` and `email` in the body; repeats and any other
    /// fields are ignored.
    pub fn from_form_body(body: &[u8]) -> RsvpForm {
        let mut form = RsvpForm::default();
        for (key, value) in form_urlencoded::parse(body) {
            let field = match key.as_ref() {
                "name" => &mut form.name,
                "email" => &mut form.email,
                _ => continue,
            };
            if field.is_none() {
                *field = Some(value.into_owned());
            }
        }
        form
    }
}

pub struct Homepage {
    pub flashes: Vec<String>,
    pub registered: bool,
}

pub fn homepage(mut visitor: Visitor) -> (Visitor, Homepage) {
    let page = Homepage {
        flashes: visitor.take_flashes(),
        registered: visitor.rsvp,
    };
    (visitor, page)
}

#[derive(Debug, PartialEq)]
pub enum RsvpOutcome {
    Registered,
    Declined,
}

/// Where the browser is sent after an RSVP, whatever the outcome.
pub const RSVP_REDIRECT: &str = "/";

pub fn rsvp(
    mut visitor: Visitor,
    form: &RsvpForm,
    excluded: &ExcludedGuest,
) -> (Visitor, RsvpOutcome) {
    let name = form.name.as_ref().map(String::as_str).unwrap_or("");
    let email = form.email.as_ref().map(String::as_str).unwrap_or("");

    if excluded.matches(name, email) {
        visitor.flash(format!(
            "Sorry, {}. This is kind of awkward.",
            excluded.display_name
        ));
        (visitor, RsvpOutcome::Declined)
    } else {
        visitor.rsvp = true;
        visitor.flash("Yay!");
        (visitor, RsvpOutcome::Registered)
    }
}
